use crate::error::{BeamStatError, BsResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

const COMMENT_MARKER: char = '#';
const FIELD_COUNT: usize = 6;

/// One scoring-mesh bin as dumped by Geant4:
/// `i,j,k,total_value,total_value_sq,entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub i: String,
    pub j: String,
    pub k: String,
    pub total_value: f64,
    pub total_value_sq: f64,
    pub entries: f64,
}

impl fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.i, self.j, self.k, self.total_value, self.total_value_sq, self.entries
        )
    }
}

/// Bins in input order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRow> {
        self.rows.iter()
    }

    /// Writes the table back out in the dump format, one bin per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a ScoreRow;
    type IntoIter = std::slice::Iter<'a, ScoreRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl TryFrom<Vec<ScoreRow>> for ScoreTable {
    type Error = BeamStatError;

    fn try_from(rows: Vec<ScoreRow>) -> BsResult<Self> {
        if rows.is_empty() {
            return Err(BeamStatError::EmptyScoreTable);
        }
        Ok(Self { rows })
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

pub fn parse_score_table(output_text: &str) -> BsResult<ScoreTable> {
    // Comment and blank lines are dropped up front; `line_numbers[n]` is the
    // input line of the n-th csv record.
    let mut line_numbers = Vec::new();
    let mut data = String::with_capacity(output_text.len());
    for (idx, raw) in output_text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        line_numbers.push(idx + 1);
        data.push_str(line);
        data.push('\n');
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data.as_bytes());

    let mut rows = Vec::with_capacity(line_numbers.len());

    for (result, &line) in rdr.records().zip(&line_numbers) {
        let record = result?;
        rows.push(parse_record(line, &record)?);
    }

    debug!("Parsed {} score rows", rows.len());

    ScoreTable::try_from(rows)
}

fn parse_record(line: usize, record: &csv::StringRecord) -> BsResult<ScoreRow> {
    if record.len() != FIELD_COUNT {
        return Err(BeamStatError::MalformedScoreLine {
            line,
            reason: format!(
                "expected {} comma-separated fields, found {}",
                FIELD_COUNT,
                record.len()
            ),
        });
    }

    // A record is a single whitespace token in the dump format.
    if record.iter().any(|f| f.contains(char::is_whitespace)) {
        return Err(BeamStatError::MalformedScoreLine {
            line,
            reason: "unexpected whitespace inside record".to_string(),
        });
    }

    let number = |idx: usize, name: &str| -> BsResult<f64> {
        record[idx]
            .parse::<f64>()
            .map_err(|e| BeamStatError::MalformedScoreLine {
                line,
                reason: format!("{} '{}' is not a number ({})", name, &record[idx], e),
            })
    };

    Ok(ScoreRow {
        i: record[0].to_string(),
        j: record[1].to_string(),
        k: record[2].to_string(),
        total_value: number(3, "total_value")?,
        total_value_sq: number(4, "total_value_sq")?,
        entries: number(5, "entries")?,
    })
}
