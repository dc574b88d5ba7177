use crate::config::SeverityThresholds;
use crate::macro_file::RunCount;
use crate::scores::{ScoreRow, ScoreTable};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize,
)]
pub enum Severity {
    Good,
    Warning,
    Bad,
}

impl Severity {
    /// Classifies a non-negative, finite relative error in percent.
    pub fn classify_with(relative_error_pct: f64, thresholds: &SeverityThresholds) -> Self {
        debug_assert!(
            relative_error_pct.is_finite() && relative_error_pct >= 0.0,
            "relative error out of domain: {}",
            relative_error_pct
        );

        if relative_error_pct < thresholds.warning_at {
            Severity::Good
        } else if relative_error_pct < thresholds.bad_at {
            Severity::Warning
        } else {
            Severity::Bad
        }
    }
}

/// Classification with the default 15% / 30% cut-offs.
pub fn severity(relative_error_pct: f64) -> Severity {
    Severity::classify_with(relative_error_pct, &SeverityThresholds::default())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    pub row: ScoreRow,
    pub mean: f64,
    /// Not clamped; may dip below zero through cancellation.
    pub variance: f64,
    pub standard_error: f64,
    /// Always finite. Carries the sign of the mean.
    pub relative_error_pct: f64,
    pub severity: Severity,
}

pub fn derive_row(
    row: &ScoreRow,
    run_count: RunCount,
    thresholds: &SeverityThresholds,
) -> DerivedRow {
    let n = run_count.get() as f64;

    let mean = row.total_value / n;
    let variance = row.total_value_sq / n - mean * mean;
    let standard_error = (variance / n).max(0.0).sqrt();

    // Zero mean gives inf/NaN here.
    let pct = standard_error / mean * 100.0;
    let relative_error_pct = if pct.is_finite() { pct } else { 0.0 };

    // A negative mean yields a negative percentage, which sits below every
    // cut-off.
    let severity = if relative_error_pct < 0.0 {
        Severity::Good
    } else {
        Severity::classify_with(relative_error_pct, thresholds)
    };

    DerivedRow {
        row: row.clone(),
        mean,
        variance,
        standard_error,
        relative_error_pct,
        severity,
    }
}

pub fn compute_derived_with(
    table: &ScoreTable,
    run_count: RunCount,
    thresholds: &SeverityThresholds,
) -> Vec<DerivedRow> {
    table
        .iter()
        .map(|row| derive_row(row, run_count, thresholds))
        .collect()
}

pub fn compute_derived(table: &ScoreTable, run_count: RunCount) -> Vec<DerivedRow> {
    compute_derived_with(table, run_count, &SeverityThresholds::default())
}

/// Per-severity tally for the convergence verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub good: usize,
    pub warning: usize,
    pub bad: usize,
    /// Index and value of the largest signed relative error.
    pub worst: Option<(usize, f64)>,
}

impl Summary {
    pub fn from_rows(rows: &[DerivedRow]) -> Self {
        let mut summary = Summary {
            total: rows.len(),
            ..Default::default()
        };

        for (idx, r) in rows.iter().enumerate() {
            match r.severity {
                Severity::Good => summary.good += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Bad => summary.bad += 1,
            }

            let pct = r.relative_error_pct;
            if summary.worst.map_or(true, |(_, w)| pct > w) {
                summary.worst = Some((idx, pct));
            }
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Good => self.good,
            Severity::Warning => self.warning,
            Severity::Bad => self.bad,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.warning == 0 && self.bad == 0
    }
}
