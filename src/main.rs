mod clients;
mod config;
mod errors;
mod models;
mod parsers;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use clients::KubectlClient;
use clients::aggregator::Aggregator;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cluster_bridge=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_path = None;
    let mut port_arg = None;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        if arg == "-config" || arg == "--config" {
            config_path = it.next().map(PathBuf::from);
        } else if port_arg.is_none() {
            port_arg = Some(arg.as_str());
        }
    }

    let cfg = match config_path {
        Some(path) => config::Config::load(&path),
        None => Ok(config::Config::default()),
    }
    .and_then(|cfg| cfg.with_port_arg(port_arg))
    .unwrap_or_else(|e| {
        eprintln!("error loading config: {}", e);
        std::process::exit(1);
    });

    let runner = KubectlClient::new(cfg.kubectl_path.clone(), cfg.command_timeout());
    let aggregator = Arc::new(Aggregator::new(Arc::new(runner), cfg.recent_events));

    let state = AppState { aggregator };
    let router = routes::build_router(state);

    let listen_addr = cfg.listen_addr();
    let listener = TcpListener::bind(&listen_addr).await.unwrap_or_else(|e| {
        eprintln!("failed to bind {}: {}", listen_addr, e);
        std::process::exit(1);
    });

    info!(
        "cluster-bridge listening on http://{} (cli: {})",
        listen_addr, cfg.kubectl_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| {
            eprintln!("server error: {}", e);
            std::process::exit(1);
        });

    info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
