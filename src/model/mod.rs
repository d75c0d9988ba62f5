//! Data model for a screening request.
//!
//! Every type here is transient: built for one ranking request and dropped
//! afterwards. Only a [`RankingResult`] is handed to the presentation layer.

mod ranking;
mod resume;

pub use ranking::{RankedEntry, RankingResult, ScoredResume};
pub use resume::{ExtractedResume, JobDescription, ResumeDocument};
