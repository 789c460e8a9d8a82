// Fitted bag-of-words vectorizer.
//
// Reproduces scikit-learn's CountVectorizer / TfidfVectorizer transform step
// on already-normalized text: whitespace tokens, the default token pattern's
// two-character minimum, optional n-grams, then count → (sublinear tf) → idf
// → row normalization. Out-of-vocabulary terms are ignored.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::text::TextPipeline;

/// The only artifact layout this build understands.
pub const VECTORIZER_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    Count,
    Tfidf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
    None,
}

/// On-disk form of a fitted vectorizer (`vectorizer.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub format_version: u32,
    pub weighting: Weighting,
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    /// Absent means the weighting's default: l2 for tf-idf, none for counts.
    #[serde(default)]
    pub norm: Option<Norm>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub binary: bool,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    pub text_pipeline: TextPipeline,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_min_token_chars() -> usize {
    2
}

/// A sparse feature row: `(index, value)` pairs sorted by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    pub dim: usize,
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product with a dense weight row. Indices past the row count as 0.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(i, v)| v * dense.get(i).copied().unwrap_or(0.0))
            .sum()
    }
}

/// A validated, ready-to-use vectorizer.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    weighting: Weighting,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    norm: Norm,
    sublinear_tf: bool,
    binary: bool,
    ngram_range: (usize, usize),
    min_token_chars: usize,
    text_pipeline: TextPipeline,
}

impl Vectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        if artifact.format_version != VECTORIZER_FORMAT_VERSION {
            anyhow::bail!(
                "Unsupported vectorizer format_version {} (expected {})",
                artifact.format_version,
                VECTORIZER_FORMAT_VERSION
            );
        }

        let n = artifact.vocabulary.len();
        let mut seen = vec![false; n];
        for (term, &index) in &artifact.vocabulary {
            if index >= n || std::mem::replace(&mut seen[index], true) {
                anyhow::bail!(
                    "Vocabulary index {index} for term {term:?} is out of range or duplicated"
                );
            }
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            anyhow::bail!("Invalid ngram_range ({min_n}, {max_n})");
        }

        match (artifact.weighting, &artifact.idf) {
            (Weighting::Tfidf, None) => anyhow::bail!("tf-idf vectorizer is missing its idf weights"),
            (Weighting::Tfidf, Some(idf)) if idf.len() != n => anyhow::bail!(
                "idf has {} weights but the vocabulary has {} terms",
                idf.len(),
                n
            ),
            _ => {}
        }

        let norm = artifact.norm.unwrap_or(match artifact.weighting {
            Weighting::Tfidf => Norm::L2,
            Weighting::Count => Norm::None,
        });

        Ok(Self {
            weighting: artifact.weighting,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            norm,
            sublinear_tf: artifact.sublinear_tf,
            binary: artifact.binary,
            ngram_range: artifact.ngram_range,
            min_token_chars: artifact.min_token_chars,
            text_pipeline: artifact.text_pipeline,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: VectorizerArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// A vectorizer with no vocabulary was never fitted.
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    pub fn text_pipeline(&self) -> TextPipeline {
        self.text_pipeline
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Map normalized text to a feature row.
    pub fn transform(&self, normalized: &str) -> SparseVector {
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.min_token_chars)
            .collect();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        // No window can be longer than the token list.
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&term) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| {
                let mut value = if self.binary { 1.0 } else { count };
                if self.weighting == Weighting::Tfidf {
                    if self.sublinear_tf {
                        value = value.ln() + 1.0;
                    }
                    if let Some(idf) = &self.idf {
                        value *= idf[index];
                    }
                }
                (index, value)
            })
            .collect();

        let scale = match self.norm {
            Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if scale > 0.0 && scale != 1.0 {
            for (_, v) in &mut entries {
                *v /= scale;
            }
        }

        SparseVector {
            dim: self.vocabulary.len(),
            entries,
        }
    }
}
