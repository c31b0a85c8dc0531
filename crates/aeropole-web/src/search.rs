use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use aeropole_core::{airlines, mock, normalize, RawSearchParams, SearchPayload, SearchQuery};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights", get(search_flights))
}

/// Flight search: validate, then either answer from the deterministic mock
/// set (no credentials configured) or query the provider and normalize.
async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<SearchPayload>, ApiError> {
    let query = SearchQuery::from_raw(&params)?;

    let Some(credentials) = state.credentials.clone() else {
        tracing::debug!("serving mock offers: provider credentials not configured");
        return Ok(Json(SearchPayload::mock(
            mock::MOCK_MESSAGE,
            mock::sample_offers(query.depart_date),
        )));
    };

    let included = airlines::approved_codes();
    let response = state
        .fare_client
        .fetch_offers(&query, &credentials, &included)
        .await?;

    let offers = normalize(
        &response.data,
        response.carrier_names(),
        &airlines::approved_code_set(),
    );
    tracing::debug!(offers = offers.len(), "provider search completed");

    Ok(Json(SearchPayload::provider(offers)))
}
