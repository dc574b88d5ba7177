use beamstat::config::Config;
use beamstat::BsResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with severity thresholds; explicit flags still win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute per-bin relative errors for a scoring output file
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Show the run count a macro requests
    Runs(cmd::runs::RunsArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: &ArgMatches,
) -> BsResult<Config> {
    let config = match path {
        Some(p) => {
            info!("⚖️  Loading thresholds from: {}", p);
            let mut file_config = Config::load_from_file(p)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Analyze(args) => {
            let sub_matches = matches.subcommand_matches("analyze").unwrap_or(&matches);
            resolve_config(cli.config.as_deref(), &args.config, sub_matches)
                .and_then(|config| cmd::analyze::run(args, &config))
        }
        Commands::Runs(args) => cmd::runs::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
