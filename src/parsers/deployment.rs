use super::{TableParser, fields};
use crate::models::records::DeploymentRecord;

pub struct DeploymentTable;

// NAMESPACE NAME READY UP-TO-DATE AVAILABLE AGE
impl TableParser for DeploymentTable {
    type Record = DeploymentRecord;

    const ARGS: &'static [&'static str] = &["get", "deployments", "-A", "--no-headers"];
    const MIN_FIELDS: usize = 6;

    fn from_fields(_line: &str, fields: &[&str]) -> DeploymentRecord {
        DeploymentRecord {
            namespace: fields[0].to_string(),
            name: fields[1].to_string(),
            ready_ratio: fields[2].to_string(),
            up_to_date: fields[3].to_string(),
            available: fields[4].to_string(),
            age: fields[5].to_string(),
        }
    }
}

/// Compares the two halves of an "x/y" ratio as strings. No `/` means not ready.
pub fn ratio_is_ready(ratio: &str) -> bool {
    match ratio.split_once('/') {
        Some((ready, desired)) => {
            let desired = desired.split('/').next().unwrap_or(desired);
            ready == desired
        }
        None => false,
    }
}

/// Readiness of a raw listing row, judged on its third column.
pub fn is_ready(line: &str) -> bool {
    fields(line).get(2).is_some_and(|ratio| ratio_is_ready(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_table;

    #[test]
    fn parses_row() {
        let deps = parse_table::<DeploymentTable>("kube-system coredns 2/2 2 2 10d");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].ready_ratio, "2/2");
        assert_eq!(deps[0].up_to_date, "2");
        assert_eq!(deps[0].available, "2");
        assert_eq!(deps[0].age, "10d");
    }

    #[test]
    fn five_field_row_is_dropped() {
        assert!(parse_table::<DeploymentTable>("default web 1/1 1 1").is_empty());
    }

    #[test]
    fn ratio_readiness() {
        assert!(ratio_is_ready("3/3"));
        assert!(!ratio_is_ready("2/3"));
        assert!(!ratio_is_ready("3"));
        assert!(!ratio_is_ready(""));
        // String comparison, not numeric.
        assert!(!ratio_is_ready("01/1"));
    }

    #[test]
    fn row_readiness_uses_third_column() {
        assert!(is_ready("default web 3/3 3 3 1d"));
        assert!(!is_ready("default web 2/3 3 2 1d"));
        assert!(!is_ready("default web"));
        assert!(!is_ready("default/web 3 3 3 1d"));
    }
}
