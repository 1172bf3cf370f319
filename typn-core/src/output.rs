//! Report serialization helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::dispatch::AggregateReport;

/// Write the report as a prettified JSON document with a trailing newline.
pub fn write_json_pretty(report: &AggregateReport, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
