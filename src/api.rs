use crate::config::SeverityThresholds;
use crate::error::BsResult;
use crate::estimator::{compute_derived_with, DerivedRow, Summary};
use crate::macro_file::{RunConfig, RunCount};
use crate::scores::{parse_score_table, ScoreTable};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, info};

/// Finished result for one macro/output pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub run_count: RunCount,
    /// Macro line the run count was taken from.
    pub directive_line: usize,
    pub rows: Vec<DerivedRow>,
}

impl Analysis {
    pub fn from_parts(
        config: &RunConfig,
        table: &ScoreTable,
        thresholds: &SeverityThresholds,
    ) -> BsResult<Self> {
        let directive = config.require_directive()?;
        let rows = compute_derived_with(table, directive.run_count, thresholds);

        Ok(Self {
            run_count: directive.run_count,
            directive_line: directive.line,
            rows,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary::from_rows(&self.rows)
    }
}

/// Runs extractor, parser and estimator. The macro is checked first, so a
/// missing `/run/beamOn` is reported even if the output is also broken.
pub fn analyze(
    macro_text: &str,
    output_text: &str,
    thresholds: &SeverityThresholds,
) -> BsResult<Analysis> {
    let config = RunConfig::parse(macro_text)?;
    config.require_directive()?;

    let table = parse_score_table(output_text)?;
    let analysis = Analysis::from_parts(&config, &table, thresholds)?;

    info!(
        "Analyzed {} bins over {} runs",
        analysis.rows.len(),
        analysis.run_count
    );
    Ok(analysis)
}

pub fn content_digest(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Caches parsed macros and score tables by the SHA-256 of their text.
/// Failed parses are not cached. Entries are never evicted on their own;
/// call [`clear`](Self::clear) to drop them.
#[derive(Debug, Default)]
pub struct MemoizedAnalyzer {
    configs: HashMap<String, RunConfig>,
    tables: HashMap<String, ScoreTable>,
    hits: usize,
    misses: usize,
}

impl MemoizedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(
        &mut self,
        macro_text: &str,
        output_text: &str,
        thresholds: &SeverityThresholds,
    ) -> BsResult<Analysis> {
        let config = self.run_config(macro_text)?.clone();
        config.require_directive()?;

        let table = self.score_table(output_text)?;
        Analysis::from_parts(&config, table, thresholds)
    }

    pub fn run_config(&mut self, macro_text: &str) -> BsResult<&RunConfig> {
        let key = content_digest(macro_text);
        if self.configs.contains_key(&key) {
            self.hits += 1;
            debug!("Macro cache hit {}", &key[..12]);
        } else {
            self.misses += 1;
            let parsed = RunConfig::parse(macro_text)?;
            self.configs.insert(key.clone(), parsed);
        }
        Ok(&self.configs[&key])
    }

    pub fn score_table(&mut self, output_text: &str) -> BsResult<&ScoreTable> {
        let key = content_digest(output_text);
        if self.tables.contains_key(&key) {
            self.hits += 1;
            debug!("Score table cache hit {}", &key[..12]);
        } else {
            self.misses += 1;
            let parsed = parse_score_table(output_text)?;
            self.tables.insert(key.clone(), parsed);
        }
        Ok(&self.tables[&key])
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.configs.clear();
        self.tables.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
