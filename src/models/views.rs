use serde::Serialize;

use super::records::EventRecord;

/// Cluster-wide counts served by `/api/cluster`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClusterSummary {
    pub nodes: NodeCounts,
    pub pods: PodCounts,
    pub services: ServiceCounts,
    pub deployments: DeploymentCounts,
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NodeCounts {
    pub total: usize,
    pub ready: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PodCounts {
    pub running: usize,
    pub healthy: usize,
    pub pending: usize,
    // Not derived from pod state; always zero.
    pub failed: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ServiceCounts {
    pub total: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DeploymentCounts {
    pub total: usize,
    pub ready: usize,
}
