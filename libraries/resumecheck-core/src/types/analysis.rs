/// Server-computed resume analysis
use serde::{Deserialize, Serialize};

/// Word count at which the length bar is full
const FULL_LENGTH_WORDS: u32 = 1200;

/// Grammar scores below this show a review notice
const GRAMMAR_REVIEW_THRESHOLD: f64 = 80.0;

/// Analysis attached to a resume by the scoring service.
///
/// List fields default to empty when the server omits them; `details` is
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub strengths: Vec<String>,

    #[serde(default)]
    pub weaknesses: Vec<String>,

    #[serde(default)]
    pub suggestions: Vec<String>,

    #[serde(default)]
    pub missing_keywords: Vec<String>,

    pub details: AnalysisDetails,
}

/// Numeric breakdown behind the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub total_words: u32,
    pub skills_found: u32,
    pub skills_total: u32,
    /// Percentage, 0-100
    pub keyword_density: f64,
    pub experience_indicators: u32,
    /// 0-100
    pub grammar_score: f64,
}

impl AnalysisDetails {
    /// Length bar fill: full at 1200 words, linear below
    pub fn length_percent(&self) -> f64 {
        if self.total_words > FULL_LENGTH_WORDS {
            100.0
        } else {
            f64::from(self.total_words) / 12.0
        }
    }

    /// Experience bar fill: ten points per indicator, capped at 100
    pub fn experience_percent(&self) -> f64 {
        (f64::from(self.experience_indicators) * 10.0).min(100.0)
    }

    pub fn needs_grammar_review(&self) -> bool {
        self.grammar_score < GRAMMAR_REVIEW_THRESHOLD
    }
}
