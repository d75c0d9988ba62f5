//! TF-IDF vector space built per ranking batch.
//!
//! The vocabulary is rebuilt from the documents passed to
//! [`TfidfVectorizer::fit_transform`] on every call, so weights (and the
//! scores derived from them) are only comparable within one batch.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{Error, Result};

use super::tokenize::Tokenizer;

/// Options controlling tokenization and weighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizerOptions {
    /// Lowercase text before tokenizing
    pub lowercase: bool,

    /// Add one to document frequencies, as if an extra document contained
    /// every term once. Prevents zero divisions.
    pub smooth_idf: bool,

    /// Replace raw term frequency with `1 + ln(tf)`
    pub sublinear_tf: bool,

    /// Terms dropped after tokenization
    pub stop_words: BTreeSet<String>,
}

impl VectorizerOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable IDF smoothing.
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Enable or disable sublinear term frequency.
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Add stop words.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words.extend(words.into_iter().map(Into::into));
        self
    }
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            smooth_idf: true,
            sublinear_tf: false,
            stop_words: BTreeSet::new(),
        }
    }
}

/// A sparse, L2-normalized document vector.
///
/// Entries are `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    /// Build a vector from unsorted `(term index, weight)` pairs.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(index, _)| index);
        Self { entries }
    }

    /// Non-zero entries sorted by term index.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Whether the vector has no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with another vector over the same vocabulary.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= magnitude;
            }
        }
    }
}

/// The fitted vector space: vocabulary, IDF weights and one row per document.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<TermVector>,
}

impl TfidfMatrix {
    /// Term to column index, in sorted term order.
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// IDF weight per column.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Document vectors, in input order.
    pub fn rows(&self) -> &[TermVector] {
        &self.rows
    }

    /// Vector of the document at `index`.
    pub fn row(&self, index: usize) -> Option<&TermVector> {
        self.rows.get(index)
    }

    /// Weight of `term` in document `row`, or 0 when absent.
    pub fn weight(&self, row: usize, term: &str) -> f64 {
        let Some(&column) = self.vocabulary.get(term) else {
            return 0.0;
        };
        self.rows
            .get(row)
            .and_then(|r| {
                r.entries
                    .binary_search_by_key(&column, |&(index, _)| index)
                    .ok()
                    .map(|pos| r.entries[pos].1)
            })
            .unwrap_or(0.0)
    }
}

/// Converts a batch of documents into TF-IDF vectors.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    options: VectorizerOptions,
    tokenizer: Tokenizer,
}

impl TfidfVectorizer {
    /// Create a vectorizer.
    pub fn new(options: VectorizerOptions) -> Self {
        let tokenizer = Tokenizer::new(options.lowercase, &options.stop_words);
        Self { options, tokenizer }
    }

    /// The options this vectorizer was built with.
    pub fn options(&self) -> &VectorizerOptions {
        &self.options
    }

    /// Build the vocabulary over `documents` and return one vector per document.
    ///
    /// Fails with [`Error::Vectorization`] when no document yields a term.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        let counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for term in self.tokenizer.tokenize(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let vocabulary: BTreeMap<String, usize> = counts
            .iter()
            .flat_map(|c| c.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        if vocabulary.is_empty() {
            return Err(Error::Vectorization(
                "empty vocabulary; perhaps the documents only contain stop words".to_string(),
            ));
        }

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for doc_counts in &counts {
            for term in doc_counts.keys() {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| self.inverse_document_frequency(n, df as f64))
            .collect();

        let rows = counts
            .iter()
            .map(|doc_counts| {
                let entries = doc_counts
                    .iter()
                    .map(|(term, &count)| {
                        let column = vocabulary[term];
                        (column, self.term_frequency(count) * idf[column])
                    })
                    .collect();
                let mut row = TermVector::from_entries(entries);
                row.normalize();
                row
            })
            .collect();

        log::debug!(
            "vectorized {} documents over {} terms",
            documents.len(),
            vocabulary.len()
        );

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }

    fn term_frequency(&self, count: u32) -> f64 {
        let tf = count as f64;
        if self.options.sublinear_tf {
            1.0 + tf.ln()
        } else {
            tf
        }
    }

    fn inverse_document_frequency(&self, n: f64, df: f64) -> f64 {
        if self.options.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(VectorizerOptions::default())
    }
}
