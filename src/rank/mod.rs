//! Similarity ranking of resumes against a job description.
//!
//! The job description and all resume texts form one document set. A TF-IDF
//! space is fitted over that set and each resume is scored by the cosine
//! similarity of its vector to the job description's vector.

mod similarity;
mod tfidf;
mod tokenize;

pub use similarity::cosine_similarity;
pub use tfidf::{TermVector, TfidfMatrix, TfidfVectorizer, VectorizerOptions};
pub use tokenize::{Tokenizer, DEFAULT_TOKEN_PATTERN};

use crate::error::Result;

/// Scores resume texts against a job description.
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker {
    vectorizer: TfidfVectorizer,
}

impl SimilarityRanker {
    /// Create a ranker with custom vectorizer options.
    pub fn new(options: VectorizerOptions) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(options),
        }
    }

    /// The vectorizer options in use.
    pub fn options(&self) -> &VectorizerOptions {
        self.vectorizer.options()
    }

    /// Score each resume against `job_description`.
    ///
    /// Returns one score in `[0, 1]` per resume, in input order. Fails with
    /// [`Error::Vectorization`](crate::Error::Vectorization) when the combined
    /// documents contain no terms.
    pub fn score<S: AsRef<str>>(&self, job_description: &str, resumes: &[S]) -> Result<Vec<f64>> {
        if resumes.is_empty() {
            return Ok(Vec::new());
        }

        let documents: Vec<&str> = std::iter::once(job_description)
            .chain(resumes.iter().map(AsRef::as_ref))
            .collect();

        let matrix = self.vectorizer.fit_transform(&documents)?;
        let Some((job_vector, resume_vectors)) = matrix.rows().split_first() else {
            return Ok(Vec::new());
        };

        Ok(resume_vectors
            .iter()
            .map(|resume| cosine_similarity(job_vector, resume))
            .collect())
    }
}
