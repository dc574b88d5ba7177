use beamstat::config::SeverityThresholds;
use beamstat::display::{background_rgb, group_thousands, DisplayRecord};
use beamstat::estimator::{Severity, Summary};
use beamstat::macro_file::RunCount;
use beamstat::Analysis;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn severity_cell(text: String, severity: Severity) -> Cell {
    let (r, g, b) = background_rgb(severity);
    Cell::new(text)
        .bg(Color::Rgb { r, g, b })
        .fg(Color::Black)
        .set_alignment(CellAlignment::Center)
}

pub fn banner(run_count: RunCount) {
    println!("\n✅ Runs (beamOn): {}", group_thousands(run_count.get()));
}

pub fn results(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("\nNo bins to display.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Bin i").add_attribute(Attribute::Bold),
        Cell::new("Bin j").add_attribute(Attribute::Bold),
        Cell::new("Bin k").add_attribute(Attribute::Bold),
        Cell::new("Total Value"),
        Cell::new("Mean"),
        Cell::new("Relative Error (%)").add_attribute(Attribute::Bold),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }

    for rec in records {
        table.add_row(vec![
            Cell::new(&rec.bin_i),
            Cell::new(&rec.bin_j),
            Cell::new(&rec.bin_k),
            Cell::new(&rec.total_value),
            Cell::new(&rec.mean),
            severity_cell(rec.relative_error_pct.clone(), rec.severity),
        ]);
    }

    println!("\n### Results Table\n{}", table);
}

pub fn summary(summary: &Summary, analysis: &Analysis, thresholds: &SeverityThresholds) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Severity").add_attribute(Attribute::Bold),
        Cell::new("Range (%)"),
        Cell::new("Bins"),
        Cell::new("Share"),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for severity in Severity::iter() {
        let range = match severity {
            Severity::Good => format!("< {}", thresholds.warning_at),
            Severity::Warning => format!("{} - {}", thresholds.warning_at, thresholds.bad_at),
            Severity::Bad => format!(">= {}", thresholds.bad_at),
        };
        let count = summary.count(severity);
        let share = count as f64 / summary.total.max(1) as f64 * 100.0;

        table.add_row(vec![
            severity_cell(severity.to_string(), severity),
            Cell::new(range),
            Cell::new(count),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }
    println!("\n{}", table);

    if let Some((idx, pct)) = summary.worst {
        let row = &analysis.rows[idx].row;
        println!(
            "Worst bin: ({}, {}, {}) at {:.2}%",
            row.i, row.j, row.k, pct
        );
    }

    if summary.is_converged() {
        println!("🎯 All bins below {}% relative error.", thresholds.warning_at);
    } else {
        println!(
            "⚠️  {} of {} bins at or above {}% relative error.",
            summary.warning + summary.bad,
            summary.total,
            thresholds.warning_at
        );
    }
}
