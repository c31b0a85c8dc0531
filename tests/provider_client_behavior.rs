//! Behavior-driven tests for the provider client's credential caching and
//! error surfacing, run against a scripted transport and a manual clock.

use aeropole_core::{ProviderError, RawSearchParams, SearchQuery};
use aeropole_tests::{
    test_credentials, token_grant, AmadeusClient, Arc, HttpResponse, ManualClock,
    ScriptedHttpClient,
};

fn search_query() -> SearchQuery {
    SearchQuery::from_raw(&RawSearchParams {
        origin: Some(String::from("JFK")),
        destination: Some(String::from("MNL")),
        depart_date: Some(String::from("2026-02-10")),
        ..RawSearchParams::default()
    })
    .expect("fixture query is valid")
}

// =============================================================================
// Credential Cache: One Exchange Per Token Lifetime
// =============================================================================

#[tokio::test]
async fn when_a_cached_token_is_live_no_second_exchange_is_issued() {
    // Given: a client whose first exchange grants a 30-minute token
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 1_800),
        token_grant("tok-never-used", 1_800),
    ]));
    let clock = Arc::new(ManualClock::at(1_000));
    let client = AmadeusClient::new("https://provider.test", http.clone(), clock.clone());

    // When: two token requests arrive inside the token's lifetime
    let first = client
        .access_token(&test_credentials())
        .await
        .expect("first exchange");
    clock.advance_ms(5 * 60 * 1_000);
    let second = client
        .access_token(&test_credentials())
        .await
        .expect("cached read");

    // Then: both calls observe the same token and the wire saw one POST
    assert_eq!(first, "tok-1");
    assert_eq!(second, "tok-1");
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn when_the_buffered_expiry_passes_the_slot_refreshes_in_place() {
    // Given: a token that nominally lasts 30 minutes
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 1_800),
        token_grant("tok-2", 1_800),
    ]));
    let clock = Arc::new(ManualClock::at(0));
    let client = AmadeusClient::new("https://provider.test", http.clone(), clock.clone());

    client
        .access_token(&test_credentials())
        .await
        .expect("initial exchange");

    // When: the clock crosses expiry minus the 60-second safety buffer
    clock.advance_ms((1_800 - 60) * 1_000);
    let refreshed = client
        .access_token(&test_credentials())
        .await
        .expect("refresh");

    // Then: a new token replaces the slot
    assert_eq!(refreshed, "tok-2");
    assert_eq!(http.request_count(), 2);
}

#[tokio::test]
async fn when_the_grant_is_shorter_than_the_buffer_every_call_exchanges() {
    // Given: 45-second grants, under the 60-second buffer
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 45),
        token_grant("tok-2", 45),
        token_grant("tok-3", 45),
    ]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http.clone(),
        Arc::new(ManualClock::at(0)),
    );

    // When: three calls arrive back to back
    for _ in 0..3 {
        client
            .access_token(&test_credentials())
            .await
            .expect("exchange");
    }

    // Then: the clamped deadline never serves a cached token
    assert_eq!(http.request_count(), 3);
}

// =============================================================================
// Error Surfacing: Auth and Query Rejections
// =============================================================================

#[tokio::test]
async fn when_the_token_endpoint_rejects_the_error_carries_status_and_detail() {
    // Given: a provider that answers 401 with a parseable body
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::with_status(
        401,
        "{\"error_description\":\"Client credentials are invalid\"}",
    ))]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http,
        Arc::new(ManualClock::at(0)),
    );

    // When: the exchange runs
    let error = client
        .access_token(&test_credentials())
        .await
        .expect_err("401 must fail");

    // Then: the failure is an auth rejection with the upstream details
    assert!(matches!(error, ProviderError::AuthRejected { .. }));
    assert_eq!(error.status(), Some(401));
    assert!(error.to_string().contains("Client credentials are invalid"));
}

#[tokio::test]
async fn when_the_rejection_body_is_garbage_a_default_detail_is_used() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::with_status(
        500,
        "<html>upstream broke</html>",
    ))]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http,
        Arc::new(ManualClock::at(0)),
    );

    let error = client
        .access_token(&test_credentials())
        .await
        .expect_err("500 must fail");
    assert_eq!(error.status(), Some(500));
    // Best-effort parsing: the raw body is never passed through.
    assert!(!error.to_string().contains("<html>"));
}

#[tokio::test]
async fn when_the_offer_query_rejects_after_auth_the_query_error_reports() {
    // Given: a successful exchange followed by a 429 from the offers query
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 1_800),
        Ok(HttpResponse::with_status(
            429,
            "{\"errors\":[{\"detail\":\"Rate limit exceeded\"}]}",
        )),
    ]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http,
        Arc::new(ManualClock::at(0)),
    );

    // When: the search runs
    let error = client
        .fetch_offers(&search_query(), &test_credentials(), &["PR"])
        .await
        .expect_err("429 must fail");

    // Then: the failure distinguishes query from auth
    assert!(matches!(error, ProviderError::QueryRejected { .. }));
    assert_eq!(error.status(), Some(429));
    assert!(error.to_string().contains("Rate limit exceeded"));
}

// =============================================================================
// Wire Shape: Token Before Query, Allow-List On the Query
// =============================================================================

#[tokio::test]
async fn a_search_issues_the_token_exchange_before_the_offers_query() {
    // Given: a cold client
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 1_800),
        Ok(HttpResponse::ok_json("{\"data\":[]}")),
    ]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http.clone(),
        Arc::new(ManualClock::at(0)),
    );

    // When: one search runs
    client
        .fetch_offers(&search_query(), &test_credentials(), &["PR"])
        .await
        .expect("search should succeed");

    // Then: request order and shape match the provider contract
    let requests = http.recorded();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.ends_with("/v1/security/oauth2/token"));
    assert!(requests[1]
        .url
        .contains("/v2/shopping/flight-offers?originLocationCode=JFK"));
    assert!(requests[1].url.contains("includedAirlineCodes=PR"));
    assert_eq!(
        requests[1].headers.get("authorization").map(String::as_str),
        Some("Bearer tok-1")
    );
}

#[tokio::test]
async fn a_second_search_reuses_the_cached_token_for_its_query() {
    // Given: a client that has already searched once
    let http = Arc::new(ScriptedHttpClient::new(vec![
        token_grant("tok-1", 1_800),
        Ok(HttpResponse::ok_json("{\"data\":[]}")),
        Ok(HttpResponse::ok_json("{\"data\":[]}")),
    ]));
    let client = AmadeusClient::new(
        "https://provider.test",
        http.clone(),
        Arc::new(ManualClock::at(0)),
    );

    client
        .fetch_offers(&search_query(), &test_credentials(), &["PR"])
        .await
        .expect("first search");

    // When: a second search runs within the token lifetime
    client
        .fetch_offers(&search_query(), &test_credentials(), &["PR"])
        .await
        .expect("second search");

    // Then: three wire calls total - one exchange, two queries
    let requests = http.recorded();
    assert_eq!(requests.len(), 3);
    assert!(requests[2].url.contains("/v2/shopping/flight-offers"));
}
