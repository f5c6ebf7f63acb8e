// Crisis keyword detector

use super::responses::{emergency_response, trigger_phrases, CrisisCategory};

/// A matched category together with the phrase that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisMatch {
    pub category: CrisisCategory,
    pub phrase: &'static str,
    pub response: &'static str,
}

/// Ordered view over the trigger table
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    table: Vec<(CrisisCategory, &'static [&'static str])>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    pub fn new() -> Self {
        let table = CrisisCategory::ALL
            .iter()
            .map(|&category| (category, trigger_phrases(category)))
            .collect();

        Self { table }
    }

    /// Scan a message for trigger phrases
    ///
    /// Categories are checked in declaration order and the first one with any
    /// phrase contained in the message wins, regardless of where in the text
    /// each phrase appears.
    pub fn detect(&self, message: &str) -> Option<CrisisMatch> {
        let message_lower = message.to_lowercase();

        for (category, phrases) in &self.table {
            if let Some(phrase) = phrases.iter().copied().find(|p| message_lower.contains(p)) {
                tracing::warn!(category = %category, "Crisis keyword detected");
                return Some(CrisisMatch {
                    category: *category,
                    phrase,
                    response: emergency_response(*category),
                });
            }
        }

        None
    }

    /// Categories with their trigger phrases, in match priority order
    pub fn categories(
        &self,
    ) -> impl Iterator<Item = (CrisisCategory, &'static [&'static str])> + '_ {
        self.table.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_detection() {
        let detector = CrisisDetector::new();

        let found = detector.detect("I want to end my life").unwrap();
        assert_eq!(found.category, CrisisCategory::SuicideRisk);
        assert_eq!(found.phrase, "end my life");
        assert!(found.response.contains("9152987821"));
        assert!(found.response.contains("9820466726"));

        assert!(detector.detect("What is the meaning of life?").is_none());
    }

    #[test]
    fn test_every_phrase_selects_its_category() {
        let detector = CrisisDetector::new();

        for category in CrisisCategory::ALL {
            for phrase in trigger_phrases(category) {
                let message = format!("lately {} and i don't know why", phrase);
                let found = detector.detect(&message).unwrap();
                // A phrase may also contain an earlier category's phrase
                let earliest = CrisisCategory::ALL
                    .iter()
                    .find(|c| trigger_phrases(**c).iter().any(|p| message.contains(p)))
                    .copied()
                    .unwrap();
                assert_eq!(found.category, earliest);
                assert_eq!(found.response, emergency_response(earliest));
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        let detector = CrisisDetector::new();

        assert!(detector.detect("SUICIDE").is_some());
        assert_eq!(
            detector.detect("I Feel HopeLess").map(|found| found.category),
            Some(CrisisCategory::SevereDepression)
        );
    }

    #[test]
    fn test_first_declared_category_wins() {
        let detector = CrisisDetector::new();

        // "overwhelmed" (panic) appears before "worthless" (depression) in the
        // text, but depression is declared first.
        let found = detector
            .detect("i'm overwhelmed and i feel worthless")
            .unwrap();
        assert_eq!(found.category, CrisisCategory::SevereDepression);

        let found = detector.detect("i feel unsafe and want to die").unwrap();
        assert_eq!(found.category, CrisisCategory::SuicideRisk);
    }

    #[test]
    fn test_substring_containment() {
        let detector = CrisisDetector::new();

        // Substring matching also fires inside longer words
        let found = detector.detect("the abuser left").unwrap();
        assert_eq!(found.category, CrisisCategory::UnsafeSituation);
    }

    #[test]
    fn test_categories_in_priority_order() {
        let detector = CrisisDetector::new();
        let categories: Vec<_> = detector.categories().collect();

        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].0, CrisisCategory::SuicideRisk);
        assert_eq!(categories[0].1[0], "suicide");
        assert_eq!(categories[3].0, CrisisCategory::UnsafeSituation);
        assert_eq!(categories.iter().map(|(_, p)| p.len()).sum::<usize>(), 24);
    }
}
