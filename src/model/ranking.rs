//! Ranking output types.

use serde::{Deserialize, Serialize};

/// A resume's display name and its similarity to the job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResume {
    /// Display name of the resume
    #[serde(rename = "Resume")]
    pub name: String,

    /// Cosine similarity in [0, 1]
    #[serde(rename = "Score")]
    pub score: f64,
}

impl ScoredResume {
    /// Create a scored resume.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// A scored resume together with its 1-based display rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Display name of the resume
    pub name: &'a str,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}

/// Scored resumes ordered by descending score.
///
/// Ties keep their upload order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    entries: Vec<ScoredResume>,
}

impl RankingResult {
    /// Sort scored resumes (given in upload order) into a ranking.
    pub fn from_unsorted(mut entries: Vec<ScoredResume>) -> Self {
        // sort_by is stable, so equal scores stay in upload order
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { entries }
    }

    /// Pair names with scores (both in upload order) and sort them.
    pub fn from_scores<I, S>(names: I, scores: &[f64]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .zip(scores.iter())
            .map(|(name, &score)| ScoredResume::new(name, score))
            .collect();
        Self::from_unsorted(entries)
    }

    /// Wrap entries that are already in ranked order (e.g. read back from CSV).
    pub fn from_ranked(entries: Vec<ScoredResume>) -> Self {
        Self { entries }
    }

    /// Entries in ranked order.
    pub fn entries(&self) -> &[ScoredResume] {
        &self.entries
    }

    /// Iterate entries with their 1-based rank.
    pub fn iter_ranked(&self) -> impl Iterator<Item = RankedEntry<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                name: &entry.name,
                score: entry.score,
            })
    }

    /// The best-scoring resume, if any.
    pub fn top(&self) -> Option<&ScoredResume> {
        self.entries.first()
    }

    /// Number of ranked resumes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending() {
        let result = RankingResult::from_scores(["a.pdf", "b.pdf", "c.pdf"], &[0.2, 0.9, 0.5]);
        let names: Vec<&str> = result.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf", "c.pdf", "a.pdf"]);
        assert_eq!(result.top().unwrap().name, "b.pdf");
    }

    #[test]
    fn test_ties_keep_upload_order() {
        let result = RankingResult::from_scores(
            ["first.pdf", "second.pdf", "third.pdf", "fourth.pdf"],
            &[0.5, 0.7, 0.5, 0.5],
        );
        let names: Vec<&str> = result.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["second.pdf", "first.pdf", "third.pdf", "fourth.pdf"]
        );
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let result = RankingResult::from_scores(["cv.pdf", "cv.pdf"], &[0.1, 0.3]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_ranks_start_at_one() {
        let result = RankingResult::from_scores(["a.pdf", "b.pdf"], &[0.1, 0.3]);
        let ranked: Vec<_> = result.iter_ranked().collect();
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].name, "b.pdf");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].name, "a.pdf");
    }

    #[test]
    fn test_empty_ranking() {
        let result = RankingResult::default();
        assert!(result.is_empty());
        assert!(result.top().is_none());
        assert_eq!(result.iter_ranked().count(), 0);
    }
}
