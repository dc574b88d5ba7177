use beamstat::display::DisplayRecord;
use beamstat::estimator::Summary;
use beamstat::{Analysis, BsResult};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    run_count: u64,
    directive_line: usize,
    summary: &'a Summary,
    records: &'a [DisplayRecord],
}

pub fn write_csv(records: &[DisplayRecord]) -> BsResult<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(
    analysis: &Analysis,
    summary: &Summary,
    records: &[DisplayRecord],
) -> BsResult<()> {
    let report = JsonReport {
        run_count: analysis.run_count.get(),
        directive_line: analysis.directive_line,
        summary,
        records,
    };
    serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
    println!();
    Ok(())
}
