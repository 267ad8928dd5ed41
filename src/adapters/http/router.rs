//! Top-level router assembly.
//!
//! Combines the activity endpoints, the optional static frontend, and the
//! tower-http layers every request passes through.

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::RosterStore;

use super::activities::{activities_routes, ActivitiesAppState};

/// Build the complete application router for `store`.
pub fn app_router(store: Arc<dyn RosterStore>, server: &ServerConfig) -> Router {
    let mut router = activities_routes().with_state(ActivitiesAppState::new(store));

    if let Some(dir) = &server.static_dir {
        router = router.merge(static_routes(dir));
    }

    if let Some(cors) = cors_layer(&server.cors_origins_list()) {
        router = router.layer(cors);
    }

    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Serve `dir` under `/static` and send `/` to its index page.
fn static_routes(dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(dir))
}

/// CORS for the configured origins. A `*` entry allows any origin.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(explicit_origins(origins))
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST]),
    )
}

fn explicit_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}
