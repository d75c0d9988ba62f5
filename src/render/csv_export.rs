//! CSV export and import of rankings.
//!
//! The format has a `Resume,Score` header row followed by one row per
//! resume in ranked order. There is no index column.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::model::{RankingResult, ScoredResume};

/// Header row columns.
pub const CSV_HEADER: [&str; 2] = ["Resume", "Score"];

/// Default file name for exported rankings.
pub const CSV_FILE_NAME: &str = "resume_ranking.csv";

/// Write a ranking as CSV to `writer`.
pub fn write_csv<W: Write>(result: &RankingResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // written explicitly so an empty ranking still gets a header
    csv_writer.write_record(CSV_HEADER)?;
    for entry in result.entries() {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render a ranking as a CSV string.
pub fn to_csv(result: &RankingResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("CSV is not UTF-8: {}", e)))
}

/// Read a ranking back from CSV, keeping row order.
pub fn from_csv<R: Read>(reader: R) -> Result<RankingResult> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(Error::Render(format!(
            "unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let entries = csv_reader
        .deserialize::<ScoredResume>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(RankingResult::from_ranked(entries))
}
