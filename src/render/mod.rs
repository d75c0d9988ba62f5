//! Rendering of ranking results: plain-text table, CSV and JSON.

mod csv_export;
mod json;
mod table;

pub use csv_export::{from_csv, to_csv, write_csv, CSV_FILE_NAME, CSV_HEADER};
pub use json::{to_json, JsonFormat};
pub use table::{to_table, DEFAULT_PRECISION};

use crate::error::Result;
use crate::model::RankingResult;

/// Output format for a ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,

    /// Comma-separated values with a `Resume,Score` header
    Csv,

    /// Pretty-printed JSON
    Json,
}

/// Render a ranking in the given format.
pub fn render(result: &RankingResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(to_table(result, DEFAULT_PRECISION)),
        OutputFormat::Csv => to_csv(result),
        OutputFormat::Json => to_json(result, JsonFormat::Pretty),
    }
}
