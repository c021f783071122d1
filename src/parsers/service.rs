use super::{NOT_AVAILABLE, TableParser, UNKNOWN, field_or};
use crate::models::records::ServiceRecord;

pub struct ServiceTable;

// NAMESPACE NAME TYPE CLUSTER-IP EXTERNAL-IP PORT(S) AGE
impl TableParser for ServiceTable {
    type Record = ServiceRecord;

    const ARGS: &'static [&'static str] = &["get", "services", "-A", "--no-headers"];
    const MIN_FIELDS: usize = 5;

    fn from_fields(_line: &str, fields: &[&str]) -> ServiceRecord {
        ServiceRecord {
            namespace: fields[0].to_string(),
            name: fields[1].to_string(),
            service_type: fields[2].to_string(),
            cluster_ip: fields[3].to_string(),
            ports: field_or(fields, 5, NOT_AVAILABLE),
            age: field_or(fields, 6, UNKNOWN),
        }
    }
}
