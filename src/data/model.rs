use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;

// ---------------------------------------------------------------------------
// RawRecord – one `<Record>` element as found in the export
// ---------------------------------------------------------------------------

/// Attributes of a `<Record>` element, borrowed from the parsed document.
///
/// Only lives while the document is being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// `type` attribute; absent → empty.
    pub record_type: &'a str,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    /// `value` attribute; absent → empty.
    pub value: &'a str,
}

impl<'a> RawRecord<'a> {
    pub fn from_node(node: roxmltree::Node<'a, '_>) -> Self {
        RawRecord {
            record_type: node.attribute("type").unwrap_or(""),
            start_date: node.attribute("startDate"),
            end_date: node.attribute("endDate"),
            value: node.attribute("value").unwrap_or(""),
        }
    }
}

// ---------------------------------------------------------------------------
// SleepRecord – a normalised sleep interval
// ---------------------------------------------------------------------------

/// A sleep interval with parsed timestamps and a simplified label.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepRecord {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// `end - start` in minutes, rounded to 2 decimals. May be zero or negative.
    pub duration_minutes: f64,
    pub value: String,
}

impl SleepRecord {
    /// Shape the record as one output row.
    pub fn to_row(&self) -> SleepRow {
        SleepRow {
            start_date: self.start.to_rfc3339_opts(SecondsFormat::Secs, false),
            end_date: self.end.to_rfc3339_opts(SecondsFormat::Secs, false),
            duration_minutes: self.duration_minutes,
            value: self.value.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// SleepRow – CSV shape
// ---------------------------------------------------------------------------

/// Column names, in output order.
pub const CSV_HEADER: [&str; 4] = ["StartDate", "EndDate", "DurationMinutes", "Value"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepRow {
    #[serde(rename = "StartDate")]
    pub start_date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "DurationMinutes")]
    pub duration_minutes: f64,
    #[serde(rename = "Value")]
    pub value: String,
}
