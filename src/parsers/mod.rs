//! Parsers for the cluster CLI's `--no-headers` tabular listings.
//!
//! Each resource kind implements [`TableParser`]; [`parse_table`] runs the shared
//! row algorithm. Rows with fewer fields than the kind requires are dropped.

pub mod deployment;
pub mod event;
pub mod node;
pub mod pod;
pub mod service;

pub use deployment::DeploymentTable;
pub use event::EventTable;
pub use node::NodeTable;
pub use pod::PodTable;
pub use service::ServiceTable;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

pub trait TableParser {
    type Record;

    /// Arguments passed to the CLI to produce this listing.
    const ARGS: &'static [&'static str];

    const MIN_FIELDS: usize;

    /// Builds a record from a row that has at least `MIN_FIELDS` fields.
    fn from_fields(line: &str, fields: &[&str]) -> Self::Record;
}

/// Non-empty lines of a listing, in output order.
pub fn rows(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().filter(|line| !line.trim().is_empty())
}

pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

pub fn parse_rows<'a, P: TableParser>(lines: impl Iterator<Item = &'a str>) -> Vec<P::Record> {
    lines
        .filter_map(|line| {
            let fields = fields(line);
            (fields.len() >= P::MIN_FIELDS).then(|| P::from_fields(line, &fields))
        })
        .collect()
}

pub fn parse_table<P: TableParser>(raw: &str) -> Vec<P::Record> {
    parse_rows::<P>(rows(raw))
}

/// Field at `idx`, or `default` when the row is short.
pub(crate) fn field_or(fields: &[&str], idx: usize, default: &str) -> String {
    fields.get(idx).copied().unwrap_or(default).to_string()
}
