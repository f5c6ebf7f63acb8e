// Transcript text normalization

mod normalizer;
mod stopwords;

pub use normalizer::TextNormalizer;
