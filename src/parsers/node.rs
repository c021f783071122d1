use super::{NOT_AVAILABLE, TableParser};
use crate::models::records::NodeRecord;

pub struct NodeTable;

impl TableParser for NodeTable {
    type Record = NodeRecord;

    const ARGS: &'static [&'static str] = &["get", "nodes", "--no-headers"];
    const MIN_FIELDS: usize = 5;

    fn from_fields(_line: &str, fields: &[&str]) -> NodeRecord {
        NodeRecord {
            name: fields[0].to_string(),
            status: fields[1].to_string(),
            roles: fields[2].to_string(),
            age: fields[3].to_string(),
            version: fields[4].to_string(),
            cpu: NOT_AVAILABLE.to_string(),
            memory: NOT_AVAILABLE.to_string(),
        }
    }
}

/// "NotReady" contains "Ready", so it has to be ruled out explicitly.
pub fn is_ready(line: &str) -> bool {
    line.contains("Ready") && !line.contains("NotReady")
}
