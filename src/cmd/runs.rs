use beamstat::display::group_thousands;
use beamstat::macro_file::RunConfig;
use beamstat::BsResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct RunsArgs {
    #[arg(short, long = "macro")]
    pub macro_file: PathBuf,
}

pub fn run(args: &RunsArgs) -> BsResult<()> {
    let text = fs::read_to_string(&args.macro_file)?;
    let config = RunConfig::parse(&text)?;
    let directive = config.require_directive()?;

    if config.directive_count() > 1 {
        warn!(
            "⚠️  {} beamOn directives found; the last one wins",
            config.directive_count()
        );
    }

    println!(
        "Runs (beamOn): {} (line {})",
        group_thousands(directive.run_count.get()),
        directive.line
    );
    Ok(())
}
