use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use serde_json::Value;

/// How far ahead of today a cycle's end-of-life date may lie and still be
/// reported.
const WARNING_WINDOW_MONTHS: u32 = 6;

/// Scans a lifecycle response for release cycles nearing end of life.
///
/// `lifecycle_json` must be a JSON array of cycle objects as returned by the
/// data API. Entries whose `eol` field is missing, boolean, or not an ISO
/// date are skipped. Entries whose end-of-life date falls on or before
/// `today` plus six months produce one message each, with a signed day count
/// relative to `today` (negative once the date has passed).
///
/// - Returns `Ok(messages)` with one message per qualifying cycle.
/// - Returns an `Err` if the response is not valid JSON or not an array.
pub fn eol_messages(os_name: &str, lifecycle_json: &str, today: NaiveDate) -> Result<Vec<String>> {
    let cycles: Vec<Value> =
        serde_json::from_str(lifecycle_json).context("Failed to parse lifecycle response")?;

    let cutoff = today + Months::new(WARNING_WINDOW_MONTHS);

    Ok(cycles
        .iter()
        .filter_map(|cycle| {
            let eol = cycle["eol"].as_str()?;
            let eol_date = eol.parse::<NaiveDate>().ok()?;
            if eol_date <= cutoff {
                let days_until = (eol_date - today).num_days();
                Some(format!(
                    "OSName: {os_name}, EOL: {eol}, Days until EOL: {days_until}"
                ))
            } else {
                None
            }
        })
        .collect())
}
