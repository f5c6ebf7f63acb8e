// Structured conversation analysis

mod parser;

pub use parser::{parse_analysis, strip_code_fences, AnalysisError};

use serde::{Deserialize, Serialize};

/// Overall urgency of the user's situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Model-produced analysis of one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub confidence: f64,
    pub topics: Vec<String>,
    pub urgency: Urgency,
    pub summary: String,
}

impl AnalysisResult {
    /// Fixed result for transcripts with no meaningful content
    pub fn neutral() -> Self {
        Self {
            sentiment: "Neutral".to_string(),
            confidence: 1.0,
            topics: Vec::new(),
            urgency: Urgency::Low,
            summary: "No meaningful text provided.".to_string(),
        }
    }
}
