// MindWell - Student wellness chat proxy
// Library exports

pub mod analysis; // Analysis reply parsing
pub mod config;
pub mod crisis; // Keyword safety net
pub mod errors;
pub mod prompts;
pub mod providers; // Generation model backends
pub mod server; // HTTP endpoints
pub mod text; // Transcript normalization
