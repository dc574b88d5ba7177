mod export;
mod tables;

pub use self::export::{write_csv, write_json};
pub use self::tables::{
    banner as print_run_banner, results as print_results_table, summary as print_summary,
};
