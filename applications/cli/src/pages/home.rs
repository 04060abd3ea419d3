/// Landing page
use std::fmt::{self, Write};

const FEATURES: [(&str, &str); 4] = [
    (
        "Keyword Analysis",
        "Identify missing keywords and optimize your resume for specific job roles.",
    ),
    (
        "ATS Scoring",
        "Get a comprehensive ATS score with detailed breakdown and improvement suggestions.",
    ),
    (
        "Quick Analysis",
        "Upload and get results in seconds. Support for PDF, DOC, and DOCX formats.",
    ),
    (
        "History Tracking",
        "Save and compare your resume versions to track improvement over time.",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Optimize Your Resume for ATS Success")?;
        writeln!(
            out,
            "Get instant ATS scoring, keyword analysis, and professional suggestions"
        )?;
        writeln!(
            out,
            "to make your resume stand out to recruiters and hiring managers."
        )?;
        writeln!(out)?;
        writeln!(out, "  Start Free Analysis: resumecheck register")?;
        writeln!(out, "  Sign In:             resumecheck login")?;
        writeln!(out)?;
        writeln!(out, "Powerful Resume Analysis")?;
        for (title, description) in FEATURES {
            writeln!(out, "  • {title}: {description}")?;
        }
        writeln!(out)?;
        writeln!(out, "Ready to Optimize Your Resume?")?;
        writeln!(out, "  Get Started For Free: resumecheck register")?;

        Ok(out)
    }
}
