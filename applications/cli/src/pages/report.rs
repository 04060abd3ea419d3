//! Resume analysis report
//!
//! Four tabs over one resume's analysis. A failed fetch sends the user back
//! to the dashboard.

use std::fmt::{self, Write};

use resumecheck_client::ApiClient;
use resumecheck_core::format::long_datetime;
use resumecheck_core::{Resume, ResumeId, ReportTab, ScoreBreakdown, ScoreTier};
use tracing::error;

use crate::components::{Loader, ScoreCircle};
use crate::router::{redirect_for, Route};

/// Gauge diameter in the report header
const REPORT_GAUGE_SIZE: u32 = 140;

/// Width of the breakdown bars in cells
const BAR_CELLS: usize = 20;

#[derive(Debug, Clone)]
pub struct ReportPage {
    id: ResumeId,
    resume: Option<Resume>,
    loading: bool,
    active_tab: ReportTab,
    animate: bool,
}

impl ReportPage {
    pub fn new(id: ResumeId, animate: bool) -> Self {
        Self {
            id,
            resume: None,
            loading: true,
            active_tab: ReportTab::default(),
            animate,
        }
    }

    pub fn id(&self) -> &ResumeId {
        &self.id
    }

    pub fn resume(&self) -> Option<&Resume> {
        self.resume.as_ref()
    }

    pub fn active_tab(&self) -> ReportTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: ReportTab) {
        self.active_tab = tab;
    }

    /// Fetch the resume; any failure navigates away.
    pub async fn load(&mut self, client: &ApiClient) -> Option<Route> {
        self.loading = true;
        let result = client.resumes().get(&self.id).await;
        self.loading = false;

        match result {
            Ok(resume) => {
                self.resume = Some(resume);
                None
            }
            Err(e) => {
                error!(error = %e, resume_id = %self.id, "Error fetching resume");
                Some(redirect_for(&e).unwrap_or(Route::Dashboard))
            }
        }
    }

    /// Delete this resume and return to the dashboard. A failure is only
    /// logged and the report stays open.
    pub async fn delete(&mut self, client: &ApiClient) -> Option<Route> {
        match client.resumes().delete(&self.id).await {
            Ok(()) => Some(Route::Dashboard),
            Err(e) => {
                error!(error = %e, resume_id = %self.id, "Delete error");
                redirect_for(&e)
            }
        }
    }

    /// Header gauge for the loaded resume
    pub fn score_circle(&self) -> Option<ScoreCircle> {
        self.resume.as_ref().map(|resume| {
            ScoreCircle::new(resume.score, self.animate).with_size(REPORT_GAUGE_SIZE)
        })
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        if self.loading {
            writeln!(out, "{}", Loader::new("Loading resume report..."))?;
            return Ok(out);
        }

        let Some(resume) = &self.resume else {
            writeln!(out, "Resume not found")?;
            writeln!(
                out,
                "The resume you're looking for doesn't exist or you don't have permission to view it."
            )?;
            writeln!(out, "Back to Dashboard: {}", Route::Dashboard)?;
            return Ok(out);
        };

        let details = &resume.analysis.details;
        let tier = resume.tier();

        writeln!(out, "Resume Analysis Report")?;
        writeln!(
            out,
            "{} • Analyzed on {}",
            resume.file_name,
            long_datetime(&resume.uploaded_at)
        )?;
        writeln!(out)?;
        writeln!(out, "{}% ATS Score [{}]", resume.score, tier.css_class())?;
        writeln!(
            out,
            "Your resume is performing {} against Applicant Tracking Systems",
            performance(tier)
        )?;
        write_bar(
            &mut out,
            "Skill Match",
            details.keyword_density,
            &format!("{}%", details.keyword_density),
        )?;
        write_bar(
            &mut out,
            "Length",
            details.length_percent(),
            &format!("{} words", details.total_words),
        )?;
        writeln!(out)?;

        let tabs: Vec<String> = ReportTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.title())
                } else {
                    tab.title().to_string()
                }
            })
            .collect();
        writeln!(out, "{}", tabs.join("  "))?;
        writeln!(out)?;

        match self.active_tab {
            ReportTab::Overview => render_overview(&mut out, resume)?,
            ReportTab::Strengths => render_strengths(&mut out, resume)?,
            ReportTab::Improvements => render_improvements(&mut out, resume)?,
            ReportTab::Details => render_details(&mut out, resume)?,
        }

        Ok(out)
    }
}

fn performance(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Excellent => "excellently",
        ScoreTier::Good => "well",
        ScoreTier::Fair | ScoreTier::NeedsImprovement => "fairly",
    }
}

fn write_bar(out: &mut String, label: &str, percent: f64, value: &str) -> fmt::Result {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    writeln!(
        out,
        "  {label:<12} [{}{}] {value}",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled)
    )
}

fn render_overview(out: &mut String, resume: &Resume) -> fmt::Result {
    let analysis = &resume.analysis;

    writeln!(out, "✅ Strengths")?;
    for strength in &analysis.strengths {
        writeln!(out, "  • {strength}")?;
    }
    writeln!(out)?;
    writeln!(out, "⚠️ Areas for Improvement")?;
    for weakness in &analysis.weaknesses {
        writeln!(out, "  • {weakness}")?;
    }
    writeln!(out)?;
    writeln!(out, "💡 Recommendations")?;
    for (index, suggestion) in analysis.suggestions.iter().enumerate() {
        writeln!(out, "  {}. {suggestion}", index + 1)?;
    }
    Ok(())
}

fn render_strengths(out: &mut String, resume: &Resume) -> fmt::Result {
    let analysis = &resume.analysis;
    let details = &analysis.details;

    writeln!(out, "Your Resume's Strengths")?;
    for (index, strength) in analysis.strengths.iter().enumerate() {
        writeln!(out, "  ✅ Strength #{}: {strength}", index + 1)?;
    }

    if details.skills_found > 0 {
        writeln!(out)?;
        writeln!(out, "Keyword Performance")?;
        writeln!(out, "  Keywords Found:        {}", details.skills_found)?;
        writeln!(out, "  Density:               {}%", details.keyword_density)?;
        writeln!(out, "  Experience Indicators: {}", details.experience_indicators)?;
    }
    Ok(())
}

fn render_improvements(out: &mut String, resume: &Resume) -> fmt::Result {
    let analysis = &resume.analysis;

    writeln!(out, "Missing Keywords")?;
    writeln!(out, "Consider adding these important keywords to your resume:")?;
    writeln!(out, "  {}", analysis.missing_keywords.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Actionable Suggestions")?;
    for (index, suggestion) in analysis.suggestions.iter().enumerate() {
        writeln!(out, "  Step {}: {suggestion}", index + 1)?;
    }
    writeln!(out)?;
    writeln!(out, "Grammar & Style")?;
    if analysis.details.needs_grammar_review() {
        writeln!(out, "  ⚠️ Review Recommended")?;
        writeln!(
            out,
            "  Consider reviewing your resume for grammar and professional tone."
        )?;
    }
    writeln!(
        out,
        "  📝 Use Action Verbs: Start bullet points with strong action verbs like \"Developed\", \"Managed\", \"Achieved\""
    )?;
    writeln!(
        out,
        "  📏 Optimal Length: Aim for 400-800 words for best ATS performance"
    )?;
    Ok(())
}

fn render_details(out: &mut String, resume: &Resume) -> fmt::Result {
    let details = &resume.analysis.details;
    let breakdown = ScoreBreakdown::from_details(details);

    writeln!(out, "Detailed Statistics")?;
    writeln!(out, "  Total Words:           {}", details.total_words)?;
    writeln!(
        out,
        "  Keywords Found:        {} / {}",
        details.skills_found, details.skills_total
    )?;
    writeln!(out, "  Keyword Density:       {}%", details.keyword_density)?;
    writeln!(out, "  Experience Indicators: {}", details.experience_indicators)?;
    writeln!(out, "  Grammar Score:         {}/100", details.grammar_score)?;
    writeln!(out)?;

    writeln!(out, "Score Breakdown")?;
    write_bar(
        out,
        "Skill Match",
        breakdown.keyword_density,
        &format!("{}%", details.keyword_density),
    )?;
    write_bar(
        out,
        "Experience",
        breakdown.experience,
        &format!("{} indicators", details.experience_indicators),
    )?;
    write_bar(
        out,
        "Length",
        breakdown.length,
        &format!("{} words", details.total_words),
    )?;
    write_bar(
        out,
        "Grammar",
        breakdown.grammar,
        &format!("{}/100", details.grammar_score),
    )?;
    writeln!(out)?;

    writeln!(out, "What This Means")?;
    let compatibility = match resume.tier() {
        ScoreTier::Excellent => {
            "Your resume shows excellent compatibility with most ATS systems."
        }
        ScoreTier::Good => {
            "Your resume has good compatibility but could be further optimized."
        }
        ScoreTier::Fair | ScoreTier::NeedsImprovement => {
            "Your resume may face challenges with ATS parsing."
        }
    };
    writeln!(
        out,
        "  Applicant Tracking Systems scan resumes for keywords and format. {compatibility}"
    )?;
    writeln!(out, "  Next Steps:")?;
    for step in [
        "Review missing keywords and incorporate relevant ones",
        "Ensure proper formatting with clear section headings",
        "Use standard file formats (PDF recommended)",
        "Include quantifiable achievements",
    ] {
        writeln!(out, "    • {step}")?;
    }
    Ok(())
}
