//! Batch extraction over every uploaded resume.

use crate::cache::{ContentCache, ContentHash};
use crate::error::{Error, Result};
use crate::model::{ExtractedResume, ResumeDocument};

use super::TextExtractor;

/// What to do when one resume in a batch cannot be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing resume and reject the whole batch
    #[default]
    FailFast,
    /// Log and skip failing resumes, ranking the rest
    SkipFailed,
}

/// Applies a [`TextExtractor`] to an ordered set of resumes.
#[derive(Debug, Clone, Copy)]
pub struct BatchExtractor<'a> {
    extractor: TextExtractor,
    policy: BatchPolicy,
    cache: Option<&'a ContentCache<String>>,
}

impl<'a> BatchExtractor<'a> {
    /// Create a batch extractor with the given policy.
    pub fn new(policy: BatchPolicy) -> Self {
        Self {
            extractor: TextExtractor::new(),
            policy,
            cache: None,
        }
    }

    /// Reuse previously extracted text for identical PDF bytes.
    pub fn with_cache(mut self, cache: &'a ContentCache<String>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The policy in effect.
    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Extract every resume, in input order.
    pub fn extract_all(&self, documents: &[ResumeDocument]) -> Result<Vec<ExtractedResume>> {
        self.extract_all_with(documents, |_| {})
    }

    /// Extract every resume, calling `on_document` after each one is attempted.
    ///
    /// Under [`BatchPolicy::FailFast`] the first failure is returned as
    /// [`Error::Extraction`] and the remaining resumes are never attempted.
    /// A resume whose text is empty or whitespace-only counts as a failure.
    /// Under [`BatchPolicy::SkipFailed`] failures are logged and dropped, so
    /// the result may be empty.
    pub fn extract_all_with<F>(
        &self,
        documents: &[ResumeDocument],
        mut on_document: F,
    ) -> Result<Vec<ExtractedResume>>
    where
        F: FnMut(&ResumeDocument),
    {
        let mut extracted = Vec::with_capacity(documents.len());

        for document in documents {
            let outcome = self.extract_one(document);
            on_document(document);

            match outcome {
                Ok(text) => {
                    log::debug!("extracted {} chars from '{}'", text.len(), document.name);
                    extracted.push(ExtractedResume::new(document.name.clone(), text));
                }
                Err(e) => match self.policy {
                    BatchPolicy::FailFast => return Err(Error::extraction(&document.name, e)),
                    BatchPolicy::SkipFailed => {
                        log::warn!("skipping '{}': {}", document.name, e);
                    }
                },
            }
        }

        Ok(extracted)
    }

    fn extract_one(&self, document: &ResumeDocument) -> Result<String> {
        let text = match self.cache {
            Some(cache) => cache.get_or_try_insert_with(ContentHash::of_bytes(&document.data), || {
                self.extractor.extract_bytes(&document.data)
            })?,
            None => self.extractor.extract_bytes(&document.data)?,
        };

        if text.trim().is_empty() {
            return Err(Error::NoText);
        }
        Ok(text)
    }
}

impl Default for BatchExtractor<'_> {
    fn default() -> Self {
        Self::new(BatchPolicy::default())
    }
}
