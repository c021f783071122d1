use super::{TableParser, parse_rows, rows};
use crate::models::records::{EventRecord, Severity};

pub struct EventTable;

impl TableParser for EventTable {
    type Record = EventRecord;

    const ARGS: &'static [&'static str] = &[
        "get",
        "events",
        "-A",
        "--sort-by=.lastTimestamp",
        "--no-headers",
    ];
    const MIN_FIELDS: usize = 6;

    fn from_fields(line: &str, fields: &[&str]) -> EventRecord {
        let severity = if line.contains("Normal") {
            Severity::Success
        } else {
            Severity::Warning
        };
        let description = if fields.len() > 6 {
            fields[6..].join(" ")
        } else {
            "No description".to_string()
        };

        EventRecord {
            severity,
            title: fields[5].to_string(),
            description,
            timestamp: fields[0].to_string(),
        }
    }
}

/// Parses the last `limit` rows of an already time-sorted listing.
/// Clipping happens before short rows are dropped, so fewer than `limit` may come back.
pub fn parse_recent(raw: &str, limit: usize) -> Vec<EventRecord> {
    let lines: Vec<&str> = rows(raw).collect();
    let start = lines.len().saturating_sub(limit);
    parse_rows::<EventTable>(lines[start..].iter().copied())
}
