pub mod api;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::AppState;

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/cluster", get(api::handle_cluster).options(api::handle_options))
        .route("/api/pods", get(api::handle_pods).options(api::handle_options))
        .route("/api/services", get(api::handle_services).options(api::handle_options))
        .route("/api/nodes", get(api::handle_nodes).options(api::handle_options))
        .route(
            "/api/deployments",
            get(api::handle_deployments).options(api::handle_options),
        )
        .fallback(api::handle_fallback)
        .with_state(state)
        .layer(CatchPanicLayer::custom(api::handle_panic));

    for (name, value) in CORS_HEADERS {
        router = router.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    router.layer(TraceLayer::new_for_http())
}
