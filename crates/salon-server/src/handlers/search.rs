//! Inventory search handlers.

use super::{parse_json_body, ApiError};
use crate::server::SearchState;
use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use salon_core::{validate, SearchOptions, SearchQuery, SearchResponse};
use std::sync::Arc;

/// `GET /search/options`: facet values and numeric ranges of the inventory.
pub async fn handle_search_options(State(state): State<Arc<SearchState>>) -> Json<SearchOptions> {
    Json(state.engine.compute_options())
}

/// `POST /search`: validate the query, then filter and paginate.
pub async fn handle_search(
    State(state): State<Arc<SearchState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let mut query: SearchQuery = parse_json_body(body)?;
    validate(&mut query)?;

    Ok(Json(state.engine.search(&query)))
}
