use std::any::Any;

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::AppState;
use crate::errors::ApiError;
use crate::models::records::{DeploymentRecord, NodeRecord, PodRecord, ServiceRecord};
use crate::models::views::ClusterSummary;

pub async fn handle_cluster(State(state): State<AppState>) -> Json<ClusterSummary> {
    Json(state.aggregator.get_cluster_summary().await)
}

pub async fn handle_pods(State(state): State<AppState>) -> Json<Vec<PodRecord>> {
    Json(state.aggregator.list_pods().await)
}

pub async fn handle_services(State(state): State<AppState>) -> Json<Vec<ServiceRecord>> {
    Json(state.aggregator.list_services().await)
}

pub async fn handle_nodes(State(state): State<AppState>) -> Json<Vec<NodeRecord>> {
    Json(state.aggregator.list_nodes().await)
}

pub async fn handle_deployments(State(state): State<AppState>) -> Json<Vec<DeploymentRecord>> {
    Json(state.aggregator.list_deployments().await)
}

pub async fn handle_options() -> StatusCode {
    StatusCode::OK
}

pub async fn handle_fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    ApiError::UnknownEndpoint.into_response()
}

/// Turns a handler panic into an in-band error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "internal error".to_string()
    };
    error!("request handler panicked: {}", msg);
    ApiError::Internal(msg).into_response()
}
