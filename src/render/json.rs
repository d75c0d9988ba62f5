//! JSON rendering for rankings.

use crate::error::{Error, Result};
use crate::model::{RankedEntry, RankingResult};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a ranking to a JSON array of `{rank, name, score}` objects.
pub fn to_json(result: &RankingResult, format: JsonFormat) -> Result<String> {
    let entries: Vec<RankedEntry<'_>> = result.iter_ranked().collect();
    let output = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&entries),
        JsonFormat::Compact => serde_json::to_string(&entries),
    };

    output.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty() {
        let result = RankingResult::from_scores(["a.pdf", "b.pdf"], &[0.25, 0.75]);
        let json = to_json(&result, JsonFormat::Pretty).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["name"], "b.pdf");
        assert_eq!(value[1]["score"], 0.25);
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let result = RankingResult::from_scores(["a.pdf"], &[0.5]);
        let json = to_json(&result, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json, r#"[{"rank":1,"name":"a.pdf","score":0.5}]"#);
    }

    #[test]
    fn test_empty_ranking() {
        let json = to_json(&RankingResult::default(), JsonFormat::Compact).unwrap();
        assert_eq!(json, "[]");
    }
}
