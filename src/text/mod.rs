// Text normalization: stopwords, word tokens, sentence boundaries.

pub mod sentences;
pub mod stopwords;
pub mod words;

pub use sentences::split_sentences;
pub use stopwords::StopWords;
pub use words::{tokenize_words, Normalizer};
