use crate::error::{BeamStatError, BsResult};
use std::num::NonZeroU64;
use tracing::debug;

/// Geant4 command that launches `N` events.
pub const BEAM_ON_MARKER: &str = "/run/beamOn";

pub type RunCount = NonZeroU64;

/// The `/run/beamOn` line that decided the run count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDirective {
    /// 1-based line number inside the macro.
    pub line: usize,
    pub run_count: RunCount,
}

/// A parsed macro. Only `/run/beamOn` lines are interpreted; everything
/// else is kept verbatim.
#[derive(Debug, Clone)]
pub struct RunConfig {
    lines: Vec<String>,
    directive: Option<RunDirective>,
    directive_count: usize,
}

impl RunConfig {
    pub fn parse(text: &str) -> BsResult<Self> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let matching: Vec<(usize, &String)> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.contains(BEAM_ON_MARKER))
            .collect();

        let directive_count = matching.len();

        // Later directives override earlier ones.
        let directive = match matching.last() {
            Some(&(idx, line)) => Some(parse_directive(idx + 1, line)?),
            None => None,
        };

        debug!(
            "Macro scanned: {} lines, {} beamOn directives",
            lines.len(),
            directive_count
        );

        Ok(Self {
            lines,
            directive,
            directive_count,
        })
    }

    pub fn run_count(&self) -> Option<RunCount> {
        self.directive.map(|d| d.run_count)
    }

    pub fn directive(&self) -> Option<RunDirective> {
        self.directive
    }

    /// Same as [`run_count`](Self::run_count) but absence is an error.
    pub fn require_directive(&self) -> BsResult<RunDirective> {
        self.directive.ok_or(BeamStatError::MissingRunDirective)
    }

    pub fn directive_count(&self) -> usize {
        self.directive_count
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn parse_directive(line_no: usize, line: &str) -> BsResult<RunDirective> {
    // The line contains the marker, so there is at least one token.
    let token = line.split_whitespace().last().unwrap_or_default();

    let run_count = token
        .parse::<RunCount>()
        .map_err(|source| BeamStatError::MalformedRunCount {
            line: line_no,
            token: token.to_string(),
            source,
        })?;

    Ok(RunDirective {
        line: line_no,
        run_count,
    })
}

/// Returns the run count requested by the last `/run/beamOn` line, or
/// `None` when the macro never starts a run.
pub fn extract_run_count(config_text: &str) -> BsResult<Option<RunCount>> {
    Ok(RunConfig::parse(config_text)?.run_count())
}
