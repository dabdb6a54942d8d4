/**
 * Logout Handler
 *
 * Clears the session cookie, revokes the presented token (if any), and
 * redirects to a sanitized `next` destination. Revocation means the token
 * stops validating immediately even though its expiry lies in the future.
 */

use crate::backend::auth::cookie::build_clear_cookie;
use crate::backend::auth::handlers::types::NextQuery;
use crate::backend::auth::redirects::allowed_logout_next;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::token_from_headers;
use crate::backend::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::{
        header::{self, HeaderValue},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Redirect, Response},
};

/// Logout handler
///
/// The redirect target is always allow-listed; an attacker-supplied
/// absolute URL in `next` lands on the configured fallback instead.
pub async fn logout(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    headers: HeaderMap,
) -> Result<Response, BackendError> {
    if let Some(token) = token_from_headers(&headers, &state.config.cookie.name) {
        state.jwt.revoke(&token).await?;
        tracing::debug!("session token revoked on logout");
    }

    let next = allowed_logout_next(query.next.as_deref(), &state.config);
    let clear = build_clear_cookie(&state.config.cookie);

    let mut response = Redirect::to(&next).into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&clear).map_err(|_| {
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "invalid cookie value")
        })?,
    );
    Ok(response)
}
