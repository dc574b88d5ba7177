//! Turns estimator output into display-ready records. Formatting and
//! colours live here so the estimator only ever returns data.

use crate::estimator::{DerivedRow, Severity};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub bin_i: String,
    pub bin_j: String,
    pub bin_k: String,
    pub total_value: String,
    pub mean: String,
    #[serde(rename = "relativeErrorPercent")]
    pub relative_error_pct: String,
    pub severity: Severity,
    pub background: &'static str,
}

impl From<&DerivedRow> for DisplayRecord {
    fn from(d: &DerivedRow) -> Self {
        Self {
            bin_i: d.row.i.clone(),
            bin_j: d.row.j.clone(),
            bin_k: d.row.k.clone(),
            total_value: format_scientific(d.row.total_value),
            mean: format_scientific(d.mean),
            relative_error_pct: format!("{:.2}", d.relative_error_pct),
            severity: d.severity,
            background: background_hex(d.severity),
        }
    }
}

pub fn to_records(rows: &[DerivedRow]) -> Vec<DisplayRecord> {
    rows.iter().map(DisplayRecord::from).collect()
}

pub fn background_hex(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "#a8e6a3",
        Severity::Warning => "#ffd59e",
        Severity::Bad => "#f28c8c",
    }
}

pub fn background_rgb(severity: Severity) -> (u8, u8, u8) {
    match severity {
        Severity::Good => (0xa8, 0xe6, 0xa3),
        Severity::Warning => (0xff, 0xd5, 0x9e),
        Severity::Bad => (0xf2, 0x8c, 0x8c),
    }
}

/// `1234.5` -> `1.23e+03`: two fractional digits, signed two-digit exponent.
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, e.abs())
            }
            Err(_) => raw,
        },
        // inf / NaN
        None => raw,
    }
}

/// `1000000` -> `1,000,000`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
