use aeropole_core::{ProviderCredentials, DEFAULT_HOST};

const DEFAULT_PORT: u16 = 3000;

/// Service settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub provider: ProviderSettings,
}

/// Fare-provider connection settings. Credentials are optional by design:
/// their absence deterministically selects the mock search path.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub host: String,
    pub credentials: Option<ProviderCredentials>,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("AEROPOLE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = std::env::var("AMADEUS_HOST").unwrap_or_else(|_| String::from(DEFAULT_HOST));

        let credentials = match (
            non_empty_var("AMADEUS_CLIENT_ID"),
            non_empty_var("AMADEUS_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => Some(ProviderCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            port,
            provider: ProviderSettings { host, credentials },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
