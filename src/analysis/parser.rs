// Parsing of the model's analysis reply

use thiserror::Error;

use super::AnalysisResult;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Reply was not JSON at all
    #[error("model reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Reply was JSON but not an analysis object
    #[error("model reply has unexpected shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),

    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

/// Remove markdown fences and a leading `json` language tag
///
/// Backticks are dropped wherever they appear, matching how models wrap JSON
/// in ```json blocks.
pub fn strip_code_fences(reply: &str) -> String {
    let without_ticks: String = reply.trim().chars().filter(|&c| c != '`').collect();
    let trimmed = without_ticks.trim();
    trimmed
        .strip_prefix("json")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Parse a raw model reply into an AnalysisResult
pub fn parse_analysis(reply: &str) -> Result<AnalysisResult, AnalysisError> {
    let cleaned = strip_code_fences(reply);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(AnalysisError::InvalidJson)?;
    let result: AnalysisResult =
        serde_json::from_value(value).map_err(AnalysisError::UnexpectedShape)?;

    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(AnalysisError::ConfidenceOutOfRange(result.confidence));
    }

    Ok(result)
}
