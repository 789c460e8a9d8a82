// The text normalizer.
//
// `normalize` is a pure, total function: it never fails and always produces
// the same output for the same input and pipeline. The output is what the
// vectorizer consumes and must match training-time preprocessing token for
// token.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::porter::{PorterMode, PorterStemmer};
use super::stopwords::{StopwordList, StopwordSet};
use super::tokenizer::{is_alphanumeric, is_punctuation, tokenize};
use super::traits::Stemmer;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> =
    LazyLock::new(|| Normalizer::new(TextPipeline::default()));

/// The pinned pair of reference data a normalizer runs with. Recorded in the
/// vectorizer artifact so serving can verify it preprocesses text the same
/// way training did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextPipeline {
    pub stopwords: StopwordList,
    pub stemmer: PorterMode,
}

impl fmt::Display for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.stopwords.id(), self.stemmer.id())
    }
}

/// Text normalizer bound to one stopword set and one stemmer.
pub struct Normalizer {
    pipeline: TextPipeline,
    stopwords: &'static StopwordSet,
    stemmer: Box<dyn Stemmer>,
}

impl Normalizer {
    pub fn new(pipeline: TextPipeline) -> Self {
        Self {
            pipeline,
            stopwords: StopwordSet::shared(pipeline.stopwords),
            stemmer: Box::new(PorterStemmer::new(pipeline.stemmer)),
        }
    }

    pub fn pipeline(&self) -> TextPipeline {
        self.pipeline
    }

    /// Lower-case, tokenize, filter and stem `text`, joining the stems with
    /// single spaces. Input that yields no tokens produces an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        let stems: Vec<String> = tokenize(&lowered)
            .into_iter()
            .map(|token| token.text)
            .filter(|token| is_alphanumeric(token))
            .filter(|token| !self.stopwords.contains(token) && !is_punctuation(token))
            .map(|token| self.stemmer.stem(token))
            .collect();

        stems.join(" ")
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("pipeline", &self.pipeline)
            .field("stemmer", &self.stemmer.id())
            .finish()
    }
}

/// Normalize `text` with the default pipeline (NLTK English stopwords,
/// NLTK-mode Porter stemmer).
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}
