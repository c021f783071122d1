use super::{TableParser, UNKNOWN, field_or};
use crate::models::records::PodRecord;

pub struct PodTable;

// NAMESPACE NAME READY STATUS RESTARTS AGE
impl TableParser for PodTable {
    type Record = PodRecord;

    const ARGS: &'static [&'static str] = &["get", "pods", "-A", "--no-headers"];
    const MIN_FIELDS: usize = 5;

    fn from_fields(_line: &str, fields: &[&str]) -> PodRecord {
        PodRecord {
            namespace: fields[0].to_string(),
            name: fields[1].to_string(),
            status: fields[3].to_string(),
            restarts: fields[4].to_string(),
            age: field_or(fields, 5, UNKNOWN),
        }
    }
}

pub fn is_running(line: &str) -> bool {
    line.contains("Running")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_table;

    #[test]
    fn maps_columns_and_skips_ready_column() {
        let pods = parse_table::<PodTable>("kube-system  coredns-5d78c9869d-abcde  1/1  Running  0  10d\n");
        assert_eq!(
            pods,
            vec![PodRecord {
                namespace: "kube-system".to_string(),
                name: "coredns-5d78c9869d-abcde".to_string(),
                status: "Running".to_string(),
                restarts: "0".to_string(),
                age: "10d".to_string(),
            }]
        );
    }

    #[test]
    fn missing_age_is_unknown() {
        let pods = parse_table::<PodTable>("default web-0 0/1 Pending 0");
        assert_eq!(pods[0].age, "Unknown");
    }

    #[test]
    fn restart_count_is_kept_verbatim() {
        // Recent kubectl prints "3 (2m ago)" which splits into extra fields.
        let pods = parse_table::<PodTable>("default api-1 1/1 Running 3 (2m ago) 5d");
        assert_eq!(pods[0].restarts, "3");
        assert_eq!(pods[0].age, "(2m");
    }

    #[test]
    fn short_rows_are_dropped() {
        let raw = "default web-0 0/1 Pending\ndefault web-1 1/1 Running 0 1h\n";
        let pods = parse_table::<PodTable>(raw);
        assert_eq!(pods.len(), 1);
        assert_eq!(pods[0].name, "web-1");
    }
}
