//! Amadeus self-service API client: credential exchange with a single-slot
//! token cache, and the flight-offers query.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::domain::SearchQuery;
use crate::error::ProviderError;
use crate::http::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Amadeus self-service sandbox host; override via configuration for the
/// production host.
pub const DEFAULT_HOST: &str = "https://test.api.amadeus.com";

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Tokens are treated as expired this long before the provider says so, so
/// a request never departs with a token that dies mid-flight.
const EXPIRY_BUFFER_SECS: i64 = 60;

const DEFAULT_MAX_RESULTS: u32 = 10;
const DEFAULT_CURRENCY: &str = "USD";
const AUTH_TIMEOUT_MS: u64 = 10_000;
const QUERY_TIMEOUT_MS: u64 = 15_000;

/// Client-credentials pair for the provider account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedToken {
    token: String,
    expires_at_ms: i64,
}

/// Single-slot, process-wide credential cache.
///
/// Reads drop the lock before any network work, so a hung token exchange
/// never blocks callers that still hold a live token. Concurrent misses may
/// each refresh; the store is last-writer-wins and every stored token is
/// individually valid.
#[derive(Debug, Default)]
struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    async fn live_token(&self, now_ms: i64) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| now_ms < cached.expires_at_ms)
            .map(|cached| cached.token.clone())
    }

    async fn store(&self, token: String, expires_at_ms: i64) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedToken {
            token,
            expires_at_ms,
        });
    }
}

fn expiry_deadline(now_ms: i64, expires_in_secs: i64) -> i64 {
    now_ms + (expires_in_secs - EXPIRY_BUFFER_SECS).max(0) * 1_000
}

// Wire shapes. Everything the provider sends is untrusted, so every field
// is optional or defaulted and unknown fields are ignored.

#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorBody {
    #[serde(default)]
    errors: Vec<QueryErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorDetail {
    detail: Option<String>,
}

/// Flight-offers response: the offer list plus the optional carrier-name
/// dictionary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawOfferResponse {
    #[serde(default)]
    pub data: Vec<RawOffer>,
    #[serde(default)]
    pub dictionaries: Option<RawDictionaries>,
}

impl RawOfferResponse {
    pub fn carrier_names(&self) -> Option<&HashMap<String, String>> {
        self.dictionaries
            .as_ref()
            .and_then(|dictionaries| dictionaries.carriers.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDictionaries {
    #[serde(default)]
    pub carriers: Option<HashMap<String, String>>,
}

/// One provider fare offer, structurally unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub itineraries: Vec<RawItinerary>,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItinerary {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    #[serde(default)]
    pub carrier_code: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub departure: Option<RawSegmentPoint>,
    #[serde(default)]
    pub arrival: Option<RawSegmentPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSegmentPoint {
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrice {
    #[serde(default)]
    pub grand_total: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Fare-provider client holding the transport, the clock, and the token
/// cache. One instance is shared across all requests in the process.
pub struct AmadeusClient {
    host: String,
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
    tokens: TokenCache,
}

impl AmadeusClient {
    pub fn new(host: impl Into<String>, http: Arc<dyn HttpClient>, clock: Arc<dyn Clock>) -> Self {
        Self {
            host: host.into(),
            http,
            clock,
            tokens: TokenCache::default(),
        }
    }

    /// Production client: reqwest transport, system clock.
    pub fn with_reqwest(host: impl Into<String>) -> Self {
        Self::new(
            host,
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(SystemClock),
        )
    }

    /// Return a live access token, performing the client-credentials
    /// exchange only when the cached token is missing or expired. Nothing
    /// is cached on failure.
    pub async fn access_token(
        &self,
        credentials: &ProviderCredentials,
    ) -> Result<String, ProviderError> {
        if let Some(token) = self.tokens.live_token(self.clock.epoch_ms()).await {
            return Ok(token);
        }

        let request = HttpRequest::post(format!("{}{}", self.host, TOKEN_PATH))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", &credentials.client_id),
                ("client_secret", &credentials.client_secret),
            ])
            .with_timeout_ms(AUTH_TIMEOUT_MS);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ProviderError::Transport(error.to_string()))?;

        if !response.is_success() {
            let detail = serde_json::from_str::<TokenErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.error_description);
            return Err(ProviderError::auth_rejected(response.status, detail));
        }

        let grant: TokenGrant = serde_json::from_str(&response.body)
            .map_err(|error| ProviderError::UnexpectedPayload(error.to_string()))?;

        let expires_at = expiry_deadline(self.clock.epoch_ms(), grant.expires_in);
        self.tokens.store(grant.access_token.clone(), expires_at).await;

        Ok(grant.access_token)
    }

    /// Run the flight-offers query for a validated search, restricted to
    /// the given carrier codes.
    pub async fn fetch_offers(
        &self,
        query: &SearchQuery,
        credentials: &ProviderCredentials,
        included_codes: &[&str],
    ) -> Result<RawOfferResponse, ProviderError> {
        let token = self.access_token(credentials).await?;

        let origin = query.origin.to_string();
        let destination = query.destination.to_string();
        let depart_date = query.depart_date.to_string();
        let adults = query.adults.to_string();
        let max = DEFAULT_MAX_RESULTS.to_string();
        let carriers = included_codes.join(",");
        let children = query.children.to_string();
        let infants = query.infants.to_string();
        let return_date = query.return_date.map(|date| date.to_string());

        let mut params: Vec<(&str, &str)> = vec![
            ("originLocationCode", &origin),
            ("destinationLocationCode", &destination),
            ("departureDate", &depart_date),
            ("adults", &adults),
            ("max", &max),
            ("currencyCode", DEFAULT_CURRENCY),
            ("includedAirlineCodes", &carriers),
        ];
        if query.children > 0 {
            params.push(("children", &children));
        }
        if query.infants > 0 {
            params.push(("infants", &infants));
        }
        if let Some(date) = return_date.as_deref() {
            params.push(("returnDate", date));
        }

        let url = format!(
            "{}{}?{}",
            self.host,
            OFFERS_PATH,
            encode_query(&params)
        );
        let request = HttpRequest::get(url)
            .bearer(&token)
            .with_timeout_ms(QUERY_TIMEOUT_MS);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ProviderError::Transport(error.to_string()))?;

        if !response.is_success() {
            let detail = serde_json::from_str::<QueryErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.errors.into_iter().next())
                .and_then(|first| first.detail);
            return Err(ProviderError::query_rejected(response.status, detail));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| ProviderError::UnexpectedPayload(error.to_string()))
    }
}

fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
