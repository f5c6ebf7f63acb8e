// Crisis categories, trigger phrases and canned emergency responses
//
// These tables are reviewed text. Change them deliberately; the order of
// `CrisisCategory::ALL` decides which category wins when a message matches
// more than one.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrisisCategory {
    SuicideRisk,
    SevereDepression,
    PanicAttack,
    UnsafeSituation,
}

impl CrisisCategory {
    /// All categories in declaration order (the match priority order)
    pub const ALL: [CrisisCategory; 4] = [
        CrisisCategory::SuicideRisk,
        CrisisCategory::SevereDepression,
        CrisisCategory::PanicAttack,
        CrisisCategory::UnsafeSituation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisCategory::SuicideRisk => "SUICIDE_RISK",
            CrisisCategory::SevereDepression => "SEVERE_DEPRESSION",
            CrisisCategory::PanicAttack => "PANIC_ATTACK",
            CrisisCategory::UnsafeSituation => "UNSAFE_SITUATION",
        }
    }
}

impl fmt::Display for CrisisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase trigger phrases for a category
pub fn trigger_phrases(category: CrisisCategory) -> &'static [&'static str] {
    match category {
        CrisisCategory::SuicideRisk => &[
            "suicide",
            "kill myself",
            "self-harm",
            "self harm",
            "want to die",
            "end my life",
        ],
        CrisisCategory::SevereDepression => &[
            "hopeless",
            "pointless",
            "can't go on",
            "no reason to live",
            "emptiness",
            "worthless",
        ],
        CrisisCategory::PanicAttack => &[
            "panic attack",
            "can't breathe",
            "hyperventilating",
            "overwhelmed",
            "spiraling",
            "losing control",
        ],
        CrisisCategory::UnsafeSituation => &[
            "unsafe",
            "scared at home",
            "being hurt",
            "abuse",
            "not safe",
            "in danger",
        ],
    }
}

/// The fixed response returned when a category is matched
pub fn emergency_response(category: CrisisCategory) -> &'static str {
    match category {
        CrisisCategory::SuicideRisk => concat!(
            "It sounds like you are in immediate distress. Your safety is the most important thing right now. ",
            "Please connect with iCALL at 9152987821 or the Aasra helpline at 9820466726. ",
            "Help is available for you 24/7."
        ),
        CrisisCategory::SevereDepression => concat!(
            "Feeling hopeless and empty can be incredibly difficult, but please know that these feelings can be managed with support. ",
            "Talking to a professional is a brave first step. You can book a confidential session with a university counselor here: [link_to_booking_page]"
        ),
        CrisisCategory::PanicAttack => concat!(
            "It sounds like you might be feeling overwhelmed. Let's try to ground ourselves right now. ",
            "Try the 5-4-3-2-1 technique: Name 5 things you can see, 4 things you can feel, 3 things you can hear, 2 things you can smell, and 1 thing you can taste. ",
            "When you feel ready, consider talking to a counselor about these feelings."
        ),
        CrisisCategory::UnsafeSituation => concat!(
            "If you are in an environment where you feel unsafe or are being hurt, your immediate safety is the priority. ",
            "If you are in immediate danger, please call 112 immediately. You can also reach out to campus security at [Campus Security Number] for assistance."
        ),
    }
}
