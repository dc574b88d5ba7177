use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamStatError {
    #[error("Could not find any `/run/beamOn N` directive in the macro")]
    MissingRunDirective,

    #[error("Invalid run count '{token}' on macro line {line}: {source}")]
    MalformedRunCount {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Malformed score line {line}: {reason}")]
    MalformedScoreLine { line: usize, reason: String },

    #[error("Score output contains no data lines")]
    EmptyScoreTable,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type BsResult<T> = Result<T, BeamStatError>;
