use crate::reports;
use beamstat::config::Config;
use beamstat::display::{group_thousands, to_records};
use beamstat::estimator::Severity;
use beamstat::BsResult;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;
use strum_macros::Display;
use tracing::info;

#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Geant4 scoring output (lines: i,j,k,total_val,total_val_sq,entries)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Geant4 macro containing a `/run/beamOn N` line
    #[arg(short, long = "macro")]
    pub macro_file: PathBuf,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only list bins classified Warning or Bad
    #[arg(long, default_value_t = false)]
    pub only_flagged: bool,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &AnalyzeArgs, config: &Config) -> BsResult<()> {
    info!("📂 Loading macro: {}", args.macro_file.display());
    let macro_text = fs::read_to_string(&args.macro_file)?;
    info!("📂 Loading scores: {}", args.output.display());
    let output_text = fs::read_to_string(&args.output)?;

    let analysis = beamstat::analyze(&macro_text, &output_text, &config.thresholds)?;
    let summary = analysis.summary();

    info!(
        "Runs (beamOn): {} (macro line {})",
        group_thousands(analysis.run_count.get()),
        analysis.directive_line
    );

    let mut records = to_records(&analysis.rows);
    if args.only_flagged {
        records.retain(|r| r.severity != Severity::Good);
    }

    match args.format {
        OutputFormat::Table => {
            reports::print_run_banner(analysis.run_count);
            reports::print_results_table(&records);
            reports::print_summary(&summary, &analysis, &config.thresholds);
        }
        OutputFormat::Csv => reports::write_csv(&records)?,
        OutputFormat::Json => reports::write_json(&analysis, &summary, &records)?,
    }

    Ok(())
}
