use std::sync::Arc;

use crate::models::records::{DeploymentRecord, EventRecord, NodeRecord, PodRecord, ServiceRecord};
use crate::models::views::{ClusterSummary, DeploymentCounts, NodeCounts, PodCounts, ServiceCounts};
use crate::parsers::{
    self, DeploymentTable, EventTable, NodeTable, PodTable, ServiceTable, TableParser, rows,
};

use super::CommandRunner;

pub struct Aggregator {
    runner: Arc<dyn CommandRunner>,
    recent_events: usize,
}

impl Aggregator {
    pub fn new(runner: Arc<dyn CommandRunner>, recent_events: usize) -> Self {
        Self {
            runner,
            recent_events,
        }
    }

    /// Raw listing for one resource kind. A failed invocation reads as an empty listing.
    async fn fetch<P: TableParser>(&self) -> String {
        let out = self.runner.run(P::ARGS).await;
        if out.ok { out.stdout } else { String::new() }
    }

    async fn list<P: TableParser>(&self) -> Vec<P::Record> {
        parsers::parse_table::<P>(&self.fetch::<P>().await)
    }

    pub async fn list_nodes(&self) -> Vec<NodeRecord> {
        self.list::<NodeTable>().await
    }

    pub async fn list_pods(&self) -> Vec<PodRecord> {
        self.list::<PodTable>().await
    }

    pub async fn list_services(&self) -> Vec<ServiceRecord> {
        self.list::<ServiceTable>().await
    }

    pub async fn list_deployments(&self) -> Vec<DeploymentRecord> {
        self.list::<DeploymentTable>().await
    }

    pub async fn recent_events(&self) -> Vec<EventRecord> {
        parsers::event::parse_recent(&self.fetch::<EventTable>().await, self.recent_events)
    }

    /// Queries every listing independently and folds them into counts.
    /// Never fails: a listing that could not be fetched contributes zero.
    pub async fn get_cluster_summary(&self) -> ClusterSummary {
        let (nodes, pods, services, deployments, events) = tokio::join!(
            self.fetch::<NodeTable>(),
            self.fetch::<PodTable>(),
            self.fetch::<ServiceTable>(),
            self.fetch::<DeploymentTable>(),
            self.recent_events(),
        );

        summarize(&nodes, &pods, &services, &deployments, events)
    }
}

// Counts are taken over raw non-empty lines, not parsed records, so short rows still
// count toward the totals.
fn summarize(
    nodes: &str,
    pods: &str,
    services: &str,
    deployments: &str,
    events: Vec<EventRecord>,
) -> ClusterSummary {
    let pod_total = rows(pods).count();
    let running = rows(pods).filter(|l| parsers::pod::is_running(l)).count();

    ClusterSummary {
        nodes: NodeCounts {
            total: rows(nodes).count(),
            ready: rows(nodes).filter(|l| parsers::node::is_ready(l)).count(),
        },
        pods: PodCounts {
            running,
            healthy: running,
            pending: pod_total - running,
            failed: 0,
        },
        services: ServiceCounts {
            total: rows(services).count(),
        },
        deployments: DeploymentCounts {
            total: rows(deployments).count(),
            ready: rows(deployments)
                .filter(|l| parsers::deployment::is_ready(l))
                .count(),
        },
        events,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clients::CommandOutput;
    use async_trait::async_trait;
    use std::collections::HashMap;

    pub const NODES: &str = "\
node-1   Ready      control-plane   10d   v1.28
node-2   NotReady   worker          3d    v1.28
node-3   Ready      worker          3d    v1.28
";

    pub const PODS: &str = "\
kube-system   coredns-abc   1/1   Running            0   10d
default       web-0         0/1   Pending            0   1m
default       api-0         0/1   CrashLoopBackOff   7   2h
default       job-x         1/1   Running            0
";

    pub const SERVICES: &str = "\
default       kubernetes   ClusterIP   10.96.0.1    <none>   443/TCP                  10d
kube-system   kube-dns     ClusterIP   10.96.0.10   <none>   53/UDP,53/TCP,9153/TCP   10d
";

    pub const DEPLOYMENTS: &str = "\
kube-system   coredns   2/2   2   2   10d
default       web       1/3   3   1   1d
default       broken
";

    pub const EVENTS: &str = "\
default   5m   Normal    Scheduled   pod/web-0   Successfully assigned default/web-0
default   4m   Normal    Pulling     pod/web-0   Pulling image nginx
default   3m   Normal    Pulled      pod/web-0   Pulled image nginx
default   3m   Normal    Created     pod/web-0   Created container web
default   2m   Normal    Started     pod/web-0   Started container web
default   1m   Warning   BackOff     pod/api-0   Back-off restarting failed container
";

    /// Replies from a fixed table keyed by the joined argument list.
    #[derive(Default)]
    pub struct CannedRunner {
        replies: HashMap<String, CommandOutput>,
    }

    impl CannedRunner {
        pub fn with<P: TableParser>(mut self, stdout: &str) -> Self {
            self.replies.insert(
                P::ARGS.join(" "),
                CommandOutput {
                    stdout: stdout.to_string(),
                    ok: true,
                },
            );
            self
        }

        pub fn failing<P: TableParser>(mut self, stdout: &str) -> Self {
            self.replies.insert(
                P::ARGS.join(" "),
                CommandOutput {
                    stdout: stdout.to_string(),
                    ok: false,
                },
            );
            self
        }

        pub fn healthy_cluster() -> Self {
            Self::default()
                .with::<NodeTable>(NODES)
                .with::<PodTable>(PODS)
                .with::<ServiceTable>(SERVICES)
                .with::<DeploymentTable>(DEPLOYMENTS)
                .with::<EventTable>(EVENTS)
        }
    }

    #[async_trait]
    impl CommandRunner for CannedRunner {
        async fn run(&self, args: &[&str]) -> CommandOutput {
            self.replies
                .get(&args.join(" "))
                .cloned()
                .unwrap_or_default()
        }
    }

    fn aggregator(runner: CannedRunner) -> Aggregator {
        Aggregator::new(Arc::new(runner), 5)
    }

    #[tokio::test]
    async fn summary_counts() {
        let summary = aggregator(CannedRunner::healthy_cluster())
            .get_cluster_summary()
            .await;

        assert_eq!(summary.nodes, NodeCounts { total: 3, ready: 2 });
        assert_eq!(
            summary.pods,
            PodCounts {
                running: 2,
                healthy: 2,
                pending: 2,
                failed: 0,
            }
        );
        assert_eq!(summary.services.total, 2);
        assert_eq!(summary.deployments, DeploymentCounts { total: 3, ready: 1 });
        assert_eq!(summary.events.len(), 5);
        assert_eq!(summary.events[0].title, "Pulling");
        assert_eq!(summary.events[4].title, "Back-off");
    }

    #[tokio::test]
    async fn failed_listings_count_as_zero() {
        let runner = CannedRunner::default()
            .failing::<NodeTable>("error: the server doesn't have a resource type")
            .failing::<PodTable>(PODS)
            .with::<ServiceTable>(SERVICES);
        let summary = aggregator(runner).get_cluster_summary().await;

        assert_eq!(summary.nodes, NodeCounts::default());
        assert_eq!(summary.pods, PodCounts::default());
        assert_eq!(summary.services.total, 2);
        assert_eq!(summary.deployments, DeploymentCounts::default());
        assert!(summary.events.is_empty());
    }

    #[tokio::test]
    async fn failed_listing_parses_to_empty() {
        let runner = CannedRunner::default()
            .failing::<NodeTable>(NODES)
            .failing::<PodTable>(PODS)
            .failing::<ServiceTable>(SERVICES)
            .failing::<DeploymentTable>(DEPLOYMENTS)
            .failing::<EventTable>(EVENTS);
        let agg = aggregator(runner);

        assert!(agg.list_nodes().await.is_empty());
        assert!(agg.list_pods().await.is_empty());
        assert!(agg.list_services().await.is_empty());
        assert!(agg.list_deployments().await.is_empty());
        assert!(agg.recent_events().await.is_empty());
    }

    #[tokio::test]
    async fn listings_keep_cli_order() {
        let agg = aggregator(CannedRunner::healthy_cluster());

        let nodes: Vec<_> = agg.list_nodes().await.into_iter().map(|n| n.name).collect();
        assert_eq!(nodes, vec!["node-1", "node-2", "node-3"]);

        let pods = agg.list_pods().await;
        assert_eq!(pods.len(), 4);
        assert_eq!(pods[3].age, "Unknown");

        // The two-field row still counts toward the summary total but is not listed.
        assert_eq!(agg.list_deployments().await.len(), 2);
    }

    #[test]
    fn record_count_matches_well_formed_rows() {
        let table: String = (0..7)
            .map(|i| format!("node-{i} Ready worker {i}d v1.28\n\n"))
            .collect();
        assert_eq!(parsers::parse_table::<NodeTable>(&table).len(), 7);
        assert_eq!(summarize(&table, "", "", "", Vec::new()).nodes.total, 7);
    }

    #[test]
    fn deployment_without_ratio_is_counted_but_not_ready() {
        let summary = summarize("", "", "", "default web 3 3 3 1d\ndefault api 3/3 3 3 1d\n", Vec::new());
        assert_eq!(summary.deployments, DeploymentCounts { total: 2, ready: 1 });
    }
}
