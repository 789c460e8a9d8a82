// Text normalization: turns a raw message into the stemmed token string
// the vectorizer was fitted against.
//
// The pipeline is lower-case → tokenize → keep alphanumeric tokens → drop
// stopwords and stray punctuation → Porter stem → join with single spaces.
// Everything here is pure and allocation-only; no I/O after the stopword
// tables are first touched.

pub mod normalizer;
pub mod porter;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

pub use normalizer::{normalize, Normalizer, TextPipeline};
