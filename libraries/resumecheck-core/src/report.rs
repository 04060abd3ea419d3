//! Report view model
use std::fmt;
use std::str::FromStr;

use crate::types::AnalysisDetails;

/// Report page tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportTab {
    #[default]
    Overview,
    Strengths,
    Improvements,
    Details,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Overview,
        ReportTab::Strengths,
        ReportTab::Improvements,
        ReportTab::Details,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTab::Overview => "overview",
            ReportTab::Strengths => "strengths",
            ReportTab::Improvements => "improvements",
            ReportTab::Details => "details",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportTab::Overview => "Overview",
            ReportTab::Strengths => "Strengths",
            ReportTab::Improvements => "Improvements",
            ReportTab::Details => "Detailed Analysis",
        }
    }
}

impl fmt::Display for ReportTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown report tab: {}", s))
    }
}

/// Fill levels for the four breakdown bars, each 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub keyword_density: f64,
    pub experience: f64,
    pub length: f64,
    pub grammar: f64,
}

impl ScoreBreakdown {
    pub fn from_details(details: &AnalysisDetails) -> Self {
        Self {
            keyword_density: details.keyword_density,
            experience: details.experience_percent(),
            length: details.length_percent(),
            grammar: details.grammar_score,
        }
    }
}
