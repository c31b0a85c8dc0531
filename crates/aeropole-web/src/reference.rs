use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use aeropole_core::{airlines, airports};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/airlines", get(list_airlines))
        .route("/api/airports", get(list_airports))
}

/// The pole-vault-friendly airline allow-list.
async fn list_airlines() -> Json<Value> {
    Json(json!({ "data": airlines::approved_airlines() }))
}

#[derive(Debug, Default, Deserialize)]
struct AirportQuery {
    q: Option<String>,
}

/// Major airports, optionally filtered by a case-insensitive substring
/// over code, name, city, and country.
async fn list_airports(Query(query): Query<AirportQuery>) -> Json<Value> {
    let data = match query.q.as_deref() {
        Some(needle) => airports::search(needle),
        None => airports::major_airports().iter().collect(),
    };

    Json(json!({ "data": data }))
}
