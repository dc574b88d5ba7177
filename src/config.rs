use crate::error::{BeamStatError, BsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub thresholds: SeverityThresholds,
}

/// Relative error cut-offs (percent). Lower bound inclusive, upper exclusive:
/// `[0, warning_at)` is Good, `[warning_at, bad_at)` Warning, the rest Bad.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    #[arg(long, default_value_t = 15.0)]
    pub warning_at: f64,
    #[arg(long, default_value_t = 30.0)]
    pub bad_at: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            warning_at: 15.0,
            bad_at: 30.0,
        }
    }
}

impl SeverityThresholds {
    pub fn validate(&self) -> BsResult<()> {
        if !self.warning_at.is_finite() || !self.bad_at.is_finite() {
            return Err(BeamStatError::Config(
                "severity thresholds must be finite".to_string(),
            ));
        }
        if self.warning_at < 0.0 || self.warning_at > self.bad_at {
            return Err(BeamStatError::Config(format!(
                "expected 0 <= warning_at <= bad_at, got {} and {}",
                self.warning_at, self.bad_at
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &SeverityThresholds, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(warning_at, "warning_at");
        update_if_present!(bad_at, "bad_at");
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BsResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BsResult<()> {
        self.thresholds.validate()
    }

    /// Applies flags the user actually typed on top of a file-based config.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.thresholds.merge_from_cli(&cli.thresholds, matches);
    }
}
