//! # resumerank
//!
//! Rank PDF resumes against a job description by textual similarity.
//!
//! Each resume's text is extracted page by page, the job description and all
//! resume texts are turned into TF-IDF vectors over a shared vocabulary, and
//! every resume is scored by the cosine similarity of its vector to the job
//! description's vector.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumerank::{render, screen_files};
//!
//! fn main() -> resumerank::Result<()> {
//!     let ranking = screen_files(
//!         "Senior backend engineer with distributed systems experience",
//!         &["alice.pdf", "bob.pdf"],
//!     )?;
//!
//!     println!("{}", render::to_table(&ranking, render::DEFAULT_PRECISION));
//!     std::fs::write(render::CSV_FILE_NAME, render::to_csv(&ranking)?)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - **Fail-fast batches**: by default one unreadable resume rejects the
//!   whole batch; [`BatchPolicy::SkipFailed`] ranks the rest instead
//! - **Per-batch vocabulary**: scores are only comparable within one ranking
//! - **Content-keyed caching**: a [`Screener`] reuses extraction and scoring
//!   results for byte-identical inputs

pub mod cache;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod rank;
pub mod render;
pub mod screen;

// Re-export commonly used types
pub use cache::{CacheStats, ContentCache, ContentHash};
pub use detect::{detect_format_from_bytes, has_pdf_extension, is_pdf_bytes, PdfFormat};
pub use error::{Error, MissingInput, Result};
pub use extract::{BatchExtractor, BatchPolicy, TextExtractor};
pub use model::{
    ExtractedResume, JobDescription, RankedEntry, RankingResult, ResumeDocument, ScoredResume,
};
pub use rank::{SimilarityRanker, VectorizerOptions};
pub use render::{JsonFormat, OutputFormat};
pub use screen::{ScreenOptions, Screener};

use std::path::Path;

/// Extract plain text from a PDF file.
///
/// Pages are concatenated in order with no separator.
///
/// # Example
///
/// ```no_run
/// use resumerank::extract_text;
///
/// let text = extract_text("resume.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    TextExtractor::new().extract_file(path)
}

/// Extract plain text from an in-memory PDF.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    TextExtractor::new().extract_bytes(data)
}

/// Score resume texts against a job description.
///
/// Returns one score in `[0, 1]` per text, in input order.
///
/// # Example
///
/// ```
/// let scores = resumerank::rank_texts(
///     "rust engineer",
///     &["rust engineer", "pastry chef"],
/// ).unwrap();
/// assert!((scores[0] - 1.0).abs() < 1e-9);
/// assert_eq!(scores[1], 0.0);
/// ```
pub fn rank_texts<S: AsRef<str>>(job_description: &str, texts: &[S]) -> Result<Vec<f64>> {
    SimilarityRanker::default().score(job_description, texts)
}

/// Rank PDF files against a job description with default options.
///
/// # Example
///
/// ```no_run
/// use resumerank::screen_files;
///
/// let ranking = screen_files("Data engineer", &["a.pdf", "b.pdf"])?;
/// println!("best match: {}", ranking.top().unwrap().name);
/// # Ok::<(), resumerank::Error>(())
/// ```
pub fn screen_files<P: AsRef<Path>>(job_description: &str, paths: &[P]) -> Result<RankingResult> {
    Screener::with_options(ScreenOptions::new().without_cache()).screen_files(job_description, paths)
}
