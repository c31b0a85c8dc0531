use std::sync::Arc;

use aeropole_core::{AmadeusClient, ProviderCredentials};

/// Shared service state. The provider client (and the token cache inside
/// it) lives for the whole process; everything else is per-request.
#[derive(Clone)]
pub struct AppState {
    pub fare_client: Arc<AmadeusClient>,
    pub credentials: Option<ProviderCredentials>,
}

impl AppState {
    pub fn new(fare_client: Arc<AmadeusClient>, credentials: Option<ProviderCredentials>) -> Self {
        Self {
            fare_client,
            credentials,
        }
    }
}
