//! Plain-text table rendering.

use crate::model::RankingResult;

/// Decimal places shown for scores.
pub const DEFAULT_PRECISION: usize = 4;

const RANK_HEADER: &str = "#";
const NAME_HEADER: &str = "Resume";
const SCORE_HEADER: &str = "Score";

/// Render a ranking as an aligned table with a 1-based rank column.
///
/// ```text
/// #  Resume  Score
/// 1  a.pdf   0.5746
/// 2  b.pdf   0.1222
/// ```
pub fn to_table(result: &RankingResult, precision: usize) -> String {
    let rows: Vec<(String, &str, String)> = result
        .iter_ranked()
        .map(|entry| {
            (
                entry.rank.to_string(),
                entry.name,
                format!("{:.*}", precision, entry.score),
            )
        })
        .collect();

    let rank_width = column_width(RANK_HEADER, rows.iter().map(|r| r.0.as_str()));
    let name_width = column_width(NAME_HEADER, rows.iter().map(|r| r.1));

    let mut output = String::new();
    push_row(
        &mut output,
        (RANK_HEADER, NAME_HEADER, SCORE_HEADER),
        rank_width,
        name_width,
    );
    for (rank, name, score) in &rows {
        push_row(
            &mut output,
            (rank.as_str(), *name, score.as_str()),
            rank_width,
            name_width,
        );
    }
    output
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn push_row(output: &mut String, row: (&str, &str, &str), rank_width: usize, name_width: usize) {
    let (rank, name, score) = row;
    // ranks are right-aligned, names left-aligned
    output.push_str(&format!(
        "{:>rank_width$}  {:<name_width$}  {}",
        rank,
        name,
        score,
        rank_width = rank_width,
        name_width = name_width
    ));
    output.push('\n');
}
