// Stopword sets.
//
// The default list is NLTK's English corpus (179 words), shipped inside the
// crate as a data file.
// The stopwords-iso English list from the `stop-words` crate is available as
// an alternative for vectorizers trained against it.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};
use tracing::debug;

const NLTK_ENGLISH: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/stopwords/nltk-english.txt"
));

static NLTK_SET: LazyLock<StopwordSet> = LazyLock::new(|| StopwordSet::load(StopwordList::NltkEnglish));
static ISO_SET: LazyLock<StopwordSet> = LazyLock::new(|| StopwordSet::load(StopwordList::IsoEnglish));

/// Which stopword list a pipeline uses. The serialized names are the pinned
/// identifiers written into model artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StopwordList {
    #[default]
    #[serde(rename = "nltk-english-179")]
    NltkEnglish,
    #[serde(rename = "iso-english")]
    IsoEnglish,
}

impl StopwordList {
    pub fn id(self) -> &'static str {
        match self {
            StopwordList::NltkEnglish => "nltk-english-179",
            StopwordList::IsoEnglish => "iso-english",
        }
    }
}

/// An immutable set of lower-cased stopwords.
#[derive(Debug)]
pub struct StopwordSet {
    list: StopwordList,
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a fresh set for `list`. Prefer [`StopwordSet::shared`] outside tests.
    pub fn load(list: StopwordList) -> Self {
        let words: HashSet<String> = match list {
            StopwordList::NltkEnglish => NLTK_ENGLISH
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            StopwordList::IsoEnglish => get(LANGUAGE::English)
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
        };

        debug!(list = list.id(), words = words.len(), "Loaded stopword set");

        Self { list, words }
    }

    /// Process-wide instance for `list`, built on first use.
    pub fn shared(list: StopwordList) -> &'static StopwordSet {
        match list {
            StopwordList::NltkEnglish => &NLTK_SET,
            StopwordList::IsoEnglish => &ISO_SET,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn list(&self) -> StopwordList {
        self.list
    }
}
