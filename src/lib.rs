pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod estimator;
pub mod macro_file;
pub mod scores;

pub use api::{analyze, Analysis, MemoizedAnalyzer};
pub use error::{BeamStatError, BsResult};
pub use estimator::{compute_derived, severity, DerivedRow, Severity, Summary};
pub use macro_file::{extract_run_count, RunConfig, RunCount};
pub use scores::{parse_score_table, ScoreRow, ScoreTable};
