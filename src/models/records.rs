use serde::Serialize;

// Row-level records built from the CLI's tabular listings. Field names follow the
// JSON the dashboard reads.

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub name: String,
    pub status: String,
    pub roles: String,
    pub age: String,
    pub version: String,
    pub cpu: String,
    pub memory: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PodRecord {
    pub namespace: String,
    pub name: String,
    pub status: String,
    pub restarts: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceRecord {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "clusterIP")]
    pub cluster_ip: String,
    pub ports: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "ready")]
    pub ready_ratio: String,
    pub up_to_date: String,
    pub available: String,
    pub age: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(rename = "time")]
    pub timestamp: String,
}
