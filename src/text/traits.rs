// Stemmer trait: swap-ready abstraction over suffix-stripping rule tables.
//
// The normalizer only needs a deterministic word → stem mapping.

/// Trait for reducing a lower-cased token to its canonical stem.
pub trait Stemmer: Send + Sync {
    /// Stem a single token. Must be deterministic for a given rule table.
    fn stem(&self, word: &str) -> String;

    /// Stable identifier of the rule table, as recorded in model artifacts.
    fn id(&self) -> &'static str;
}
