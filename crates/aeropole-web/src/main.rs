use std::net::SocketAddr;
use std::sync::Arc;

use aeropole_core::AmadeusClient;
use aeropole_web::{app, config::Settings, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aeropole_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();
    if settings.provider.credentials.is_none() {
        tracing::warn!("provider credentials not configured; /api/flights will serve mock offers");
    }

    let fare_client = Arc::new(AmadeusClient::with_reqwest(settings.provider.host.clone()));
    let state = AppState::new(fare_client, settings.provider.credentials.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("aeropole listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, app(state))
        .await
        .expect("server error");
}
