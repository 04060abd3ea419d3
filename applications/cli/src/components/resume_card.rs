/// Dashboard card for one analyzed resume
use std::fmt;

use resumecheck_core::format::short_date;
use resumecheck_core::Resume;

use super::ScoreCircle;

/// Card diameter on the dashboard grid
const CARD_GAUGE_SIZE: u32 = 80;

pub struct ResumeCard<'a> {
    resume: &'a Resume,
}

impl<'a> ResumeCard<'a> {
    pub fn new(resume: &'a Resume) -> Self {
        Self { resume }
    }
}

impl fmt::Display for ResumeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resume = self.resume;
        let details = &resume.analysis.details;
        let gauge = ScoreCircle::new(resume.score, false).with_size(CARD_GAUGE_SIZE);

        writeln!(f, "  📄 {}  (uploaded {})", resume.file_name, short_date(&resume.uploaded_at))?;
        writeln!(f, "     {gauge}")?;
        writeln!(
            f,
            "     {} words · {}/{} skills",
            details.total_words, details.skills_found, details.skills_total
        )?;
        write!(
            f,
            "     View Report: {}   Delete: resumecheck delete {}",
            crate::router::Route::Report(resume.id.clone()),
            resume.id
        )
    }
}
