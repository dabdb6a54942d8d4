/**
 * Search Handler
 *
 * Backs the client autocomplete box: GET /api/search?name=<prefix> returns
 * matching entries as `[{name, path}]`, where `path` is the in-app route
 * the client navigates to on selection.
 *
 * This endpoint is unauthenticated and unrelated to the auth flow.
 */

use crate::backend::auth::users::search_users_by_prefix;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

const MAX_RESULTS: i64 = 10;

/// Search query parameters
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

/// A single autocomplete hit
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub path: String,
}

/// Search handler
///
/// An empty prefix yields an empty list rather than dumping the table.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, BackendError> {
    let prefix = query.name.trim();
    if prefix.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let users = search_users_by_prefix(&state.pool, prefix, MAX_RESULTS).await?;
    let results = users
        .into_iter()
        .map(|u| SearchResult {
            path: format!("/@{}", u.username),
            name: u.username,
        })
        .collect();

    Ok(Json(results))
}
