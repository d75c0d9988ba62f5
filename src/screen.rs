//! The screening pipeline: validate, extract, rank, assemble.
//!
//! [`Screener`] is the boundary between the ranking core and whatever
//! presents the results. Every failure is returned as an [`Error`] so the
//! caller can turn it into a message; nothing here prints or panics.

use std::path::Path;

use crate::cache::{CacheStats, ContentCache, ContentHash, DEFAULT_CACHE_SIZE};
use crate::error::{Error, MissingInput, Result};
use crate::extract::{BatchExtractor, BatchPolicy};
use crate::model::{JobDescription, RankingResult, ResumeDocument};
use crate::rank::{SimilarityRanker, VectorizerOptions};

/// Options for a [`Screener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    /// How extraction failures affect the batch
    pub policy: BatchPolicy,

    /// Tokenization and weighting options
    pub vectorizer: VectorizerOptions,

    /// Entries kept per cache (0 disables caching)
    pub cache_size: usize,
}

impl ScreenOptions {
    /// Create new screen options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch policy.
    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Skip unreadable resumes instead of rejecting the batch.
    pub fn skip_failed(mut self) -> Self {
        self.policy = BatchPolicy::SkipFailed;
        self
    }

    /// Set vectorizer options.
    pub fn with_vectorizer(mut self, vectorizer: VectorizerOptions) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Set the cache capacity.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Disable caching.
    pub fn without_cache(mut self) -> Self {
        self.cache_size = 0;
        self
    }
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            policy: BatchPolicy::FailFast,
            vectorizer: VectorizerOptions::default(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

/// Ranks batches of resumes against a job description.
///
/// A screener keeps content-keyed caches for extracted text and scores, so
/// repeating a request with identical inputs skips the work.
///
/// # Example
///
/// ```no_run
/// use resumerank::{ResumeDocument, Screener};
///
/// let screener = Screener::new();
/// let resumes = vec![
///     ResumeDocument::from_path("alice.pdf")?,
///     ResumeDocument::from_path("bob.pdf")?,
/// ];
/// let ranking = screener.screen("Senior Rust engineer", &resumes)?;
/// for entry in ranking.iter_ranked() {
///     println!("{}. {} {:.4}", entry.rank, entry.name, entry.score);
/// }
/// # Ok::<(), resumerank::Error>(())
/// ```
#[derive(Debug)]
pub struct Screener {
    options: ScreenOptions,
    ranker: SimilarityRanker,
    text_cache: ContentCache<String>,
    score_cache: ContentCache<Vec<f64>>,
}

impl Screener {
    /// Create a screener with default options.
    pub fn new() -> Self {
        Self::with_options(ScreenOptions::default())
    }

    /// Create a screener with custom options.
    pub fn with_options(options: ScreenOptions) -> Self {
        Self {
            ranker: SimilarityRanker::new(options.vectorizer.clone()),
            text_cache: ContentCache::new(options.cache_size),
            score_cache: ContentCache::new(options.cache_size),
            options,
        }
    }

    /// The options in effect.
    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    /// Rank `resumes` against `job_description`.
    pub fn screen(
        &self,
        job_description: impl Into<JobDescription>,
        resumes: &[ResumeDocument],
    ) -> Result<RankingResult> {
        self.screen_with_progress(job_description, resumes, |_| {})
    }

    /// Rank `resumes`, calling `on_document` after each extraction attempt.
    ///
    /// Fails with:
    /// - [`Error::EmptyInput`] when the job description is blank or there
    ///   are no resumes (checked before any extraction)
    /// - [`Error::Extraction`] when a resume fails under
    ///   [`BatchPolicy::FailFast`]
    /// - [`Error::NoProcessableResumes`] when no resume survives extraction
    /// - [`Error::Vectorization`] when the texts contain no terms at all
    pub fn screen_with_progress<F>(
        &self,
        job_description: impl Into<JobDescription>,
        resumes: &[ResumeDocument],
        on_document: F,
    ) -> Result<RankingResult>
    where
        F: FnMut(&ResumeDocument),
    {
        let job_description = job_description.into();
        if let Some(missing) = MissingInput::check(!job_description.is_blank(), !resumes.is_empty())
        {
            return Err(Error::EmptyInput(missing));
        }

        let extracted = BatchExtractor::new(self.options.policy)
            .with_cache(&self.text_cache)
            .extract_all_with(resumes, on_document)?;

        if extracted.is_empty() {
            return Err(Error::NoProcessableResumes);
        }

        let texts: Vec<&str> = extracted.iter().map(|r| r.text.as_str()).collect();
        let scores = self.rank_texts(job_description.as_str(), &texts)?;

        Ok(RankingResult::from_scores(
            extracted.into_iter().map(|r| r.name),
            &scores,
        ))
    }

    /// Rank PDF files on disk, validating each at the upload boundary.
    pub fn screen_files<P: AsRef<Path>>(
        &self,
        job_description: impl Into<JobDescription>,
        paths: &[P],
    ) -> Result<RankingResult> {
        let resumes = paths
            .iter()
            .map(ResumeDocument::from_path)
            .collect::<Result<Vec<_>>>()?;
        self.screen(job_description, &resumes)
    }

    /// Score already-extracted texts, through the score cache.
    pub fn rank_texts<S: AsRef<str>>(&self, job_description: &str, texts: &[S]) -> Result<Vec<f64>> {
        let key = ContentHash::of_ranking(job_description, texts);
        self.score_cache
            .get_or_try_insert_with(key, || self.ranker.score(job_description, texts))
    }

    /// Hit/miss counters of the extracted-text cache.
    pub fn text_cache_stats(&self) -> CacheStats {
        self.text_cache.stats()
    }

    /// Hit/miss counters of the score cache.
    pub fn score_cache_stats(&self) -> CacheStats {
        self.score_cache.stats()
    }

    /// Drop all cached results.
    pub fn clear_caches(&self) {
        self.text_cache.clear();
        self.score_cache.clear();
    }
}

impl Default for Screener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn junk(name: &str) -> ResumeDocument {
        ResumeDocument::new(name, b"not a pdf".to_vec())
    }

    #[test]
    fn test_screen_options_builder() {
        let options = ScreenOptions::new()
            .skip_failed()
            .with_cache_size(3)
            .with_vectorizer(VectorizerOptions::new().with_sublinear_tf(true));

        assert_eq!(options.policy, BatchPolicy::SkipFailed);
        assert_eq!(options.cache_size, 3);
        assert!(options.vectorizer.sublinear_tf);
        assert_eq!(ScreenOptions::new().without_cache().cache_size, 0);
    }

    #[test]
    fn test_default_options() {
        let options = ScreenOptions::default();
        assert_eq!(options.policy, BatchPolicy::FailFast);
        assert_eq!(options.cache_size, DEFAULT_CACHE_SIZE);
        assert_eq!(options.vectorizer, VectorizerOptions::default());
    }

    #[test]
    fn test_missing_job_description() {
        let result = Screener::new().screen("   ", &[junk("a.pdf")]);
        assert!(matches!(
            result,
            Err(Error::EmptyInput(MissingInput::JobDescription))
        ));
    }

    #[test]
    fn test_missing_resumes() {
        let result = Screener::new().screen("rust engineer", &[]);
        assert!(matches!(result, Err(Error::EmptyInput(MissingInput::Resumes))));
    }

    #[test]
    fn test_missing_both() {
        let result = Screener::new().screen("", &[]);
        assert!(matches!(result, Err(Error::EmptyInput(MissingInput::Both))));
    }

    #[test]
    fn test_input_checked_before_extraction() {
        let mut attempted = 0;
        let result = Screener::new().screen_with_progress("", &[junk("a.pdf")], |_| attempted += 1);
        assert!(result.is_err());
        assert_eq!(attempted, 0);
    }

    #[test]
    fn test_extraction_failure_rejects_batch() {
        let result = Screener::new().screen("rust engineer", &[junk("a.pdf"), junk("b.pdf")]);
        assert!(matches!(result, Err(Error::Extraction { ref name, .. }) if name == "a.pdf"));
    }

    #[test]
    fn test_all_skipped_is_no_processable_resumes() {
        let screener = Screener::with_options(ScreenOptions::new().skip_failed());
        let result = screener.screen("rust engineer", &[junk("a.pdf")]);
        assert!(matches!(result, Err(Error::NoProcessableResumes)));
    }

    #[test]
    fn test_rank_texts_uses_cache() {
        let screener = Screener::new();
        let first = screener
            .rank_texts("rust engineer", &["rust developer", "chef"])
            .unwrap();
        let second = screener
            .rank_texts("rust engineer", &["rust developer", "chef"])
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(screener.score_cache_stats(), CacheStats { hits: 1, misses: 1 });

        screener.clear_caches();
        assert_eq!(screener.score_cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_rank_texts_without_cache() {
        let screener = Screener::with_options(ScreenOptions::new().without_cache());
        screener.rank_texts("rust", &["rust"]).unwrap();
        screener.rank_texts("rust", &["rust"]).unwrap();
        assert_eq!(screener.score_cache_stats().hits, 0);
    }

    #[test]
    fn test_rank_texts_vectorization_error() {
        let result = Screener::new().rank_texts("", &["", "!"]);
        assert!(matches!(result, Err(Error::Vectorization(_))));
    }
}
