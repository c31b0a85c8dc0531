use axum::{http::header, http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod reference;
pub mod search;
pub mod state;

pub use state::AppState;

/// Assemble the service router: search plus the reference-data endpoints,
/// behind CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(search::routes())
        .merge(reference::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
