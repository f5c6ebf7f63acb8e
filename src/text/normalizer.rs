// Transcript normalizer: lowercase, drop stopwords and punctuation, lemmatize

use rust_stemmers::{Algorithm, Stemmer};

use super::stopwords::is_stopword;

/// Upper bound on re-stemming a token while looking for a fixed point
const MAX_STEM_PASSES: usize = 8;

/// Deterministic text normalizer for analysis transcripts
///
/// Output tokens are fixed points of the lemmatizer and never stopwords, so
/// normalizing already-normalized text returns it unchanged.
pub struct TextNormalizer {
    stemmer: Stemmer,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Normalize free text into space-separated lemmas
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && !is_stopword(token))
            .map(|token| self.lemma(token))
            .filter(|lemma| !lemma.is_empty() && !is_stopword(lemma))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reduce a token to its base form
    pub fn lemma(&self, token: &str) -> String {
        let mut current = token.to_string();
        for _ in 0..MAX_STEM_PASSES {
            let next = self.stemmer.stem(&current);
            if next == current.as_str() {
                break;
            }
            current = next.into_owned();
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_punctuation_only() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t "), "");
        assert_eq!(normalizer.normalize("?!... --- ,,"), "");
    }

    #[test]
    fn test_stopwords_only_is_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("I am the one who is there"), "");
    }

    #[test]
    fn test_lemmatizes_content_words() {
        let normalizer = TextNormalizer::new();
        let out = normalizer.normalize("I am feeling STRESSED about my exams!");
        let tokens: Vec<&str> = out.split(' ').collect();
        assert!(tokens.contains(&"stress"));
        assert!(tokens.contains(&"exam"));
        assert!(!tokens.contains(&"i"));
        assert!(!out.contains('!'));
    }

    #[test]
    fn test_single_spaces() {
        let normalizer = TextNormalizer::new();
        let out = normalizer.normalize("exams,,,   deadlines\n\nparents");
        assert!(!out.contains("  "));
        assert!(!out.starts_with(' '));
        assert!(!out.ends_with(' '));
        assert_eq!(out.split(' ').count(), 3);
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new();
        let samples = [
            "User: I can't sleep because of my exams. Bot: That sounds exhausting.",
            "Generously organized relational generalizations happily running",
            "My parents keep pressuring me about engineering entrance tests",
            "",
        ];

        for sample in samples {
            let once = normalizer.normalize(sample);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }
}
