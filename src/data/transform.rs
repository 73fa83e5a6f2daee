use chrono::{DateTime, FixedOffset};

use super::datetime::parse_apple_datetime;
use super::model::{RawRecord, SleepRecord};
use crate::error::RecordError;

/// Turn a raw `<Record>` into a [`SleepRecord`].
///
/// Fails when either timestamp is absent or unparseable; the caller decides
/// what to do with the record (the pipeline skips it).
pub fn transform(raw: &RawRecord<'_>, value_prefix: &str) -> Result<SleepRecord, RecordError> {
    let start = required_datetime(raw.start_date, "startDate")?;
    let end = required_datetime(raw.end_date, "endDate")?;

    Ok(SleepRecord {
        duration_minutes: duration_minutes(&start, &end),
        start,
        end,
        value: simplify_value(raw.value, value_prefix),
    })
}

fn required_datetime(
    attr: Option<&str>,
    name: &'static str,
) -> Result<DateTime<FixedOffset>, RecordError> {
    let text = attr.ok_or(RecordError::MissingAttribute(name))?;
    parse_apple_datetime(text)
}

/// `end - start` in minutes, rounded to two decimals (half away from zero).
/// Negative when `end` precedes `start`.
pub fn duration_minutes(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> f64 {
    let seconds = (*end - *start).num_seconds() as f64;
    round2(seconds / 60.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Delete every occurrence of `prefix` and trim leading whitespace.
///
/// The marker is removed wherever it appears, not only at the start.
pub fn simplify_value(value: &str, prefix: &str) -> String {
    value.replace(prefix, "").trim_start().to_string()
}
