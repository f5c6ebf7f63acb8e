// Crisis triage
// Keyword-based safety net that runs before any model call

mod detector;
mod responses;

pub use detector::{CrisisDetector, CrisisMatch};
pub use responses::{emergency_response, trigger_phrases, CrisisCategory};
