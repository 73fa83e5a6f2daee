use chrono::{DateTime, FixedOffset};

use crate::error::RecordError;

/// Timestamp layouts seen in health exports, tried in order, with the number
/// of single spaces each one contains.
///
/// Older exports write `2023-01-01 23:00:00 -0800`, newer ones the ISO form
/// `2023-01-02T07:15:30-08:00`. `%z` accepts the offset with or without a colon.
const APPLE_FORMATS: [(&str, usize); 2] = [
    ("%Y-%m-%d %H:%M:%S %z", 2),
    ("%Y-%m-%dT%H:%M:%S%z", 0),
];

/// Parse an export timestamp, keeping its UTC offset.
pub fn parse_apple_datetime(text: &str) -> Result<DateTime<FixedOffset>, RecordError> {
    APPLE_FORMATS
        .iter()
        .filter(|(_, spaces)| has_space_layout(text, *spaces))
        .find_map(|(fmt, _)| DateTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| RecordError::UnrecognizedDatetime(text.to_string()))
}

/// chrono lets a space in the format match any run of whitespace, including
/// none, so the separators are checked here: exactly `spaces` single spaces
/// between non-empty fields, and no other whitespace.
fn has_space_layout(text: &str, spaces: usize) -> bool {
    if text.chars().any(|c| c.is_whitespace() && c != ' ') {
        return false;
    }
    let fields: Vec<&str> = text.split(' ').collect();
    fields.len() == spaces + 1 && fields.iter().all(|f| !f.is_empty())
}
