/**
 * Post-Authentication Response
 *
 * Shared tail of the signup and login flows: once an identity has been
 * attached to the request, mint a session JWT, set it as the session
 * cookie, and answer the client.
 *
 * # Response Shape
 *
 * - JSON-accepting clients get `{shouldRedirect, ok, next, authToken}`;
 *   `authToken` carries the fresh JWT only for a flagged mobile web-view
 *   session (the web-view shell cannot read HttpOnly cookies), otherwise
 *   it is null.
 * - Everyone else gets an HTTP redirect to the sanitized `next` target.
 *
 * The cookie is set only after token creation succeeds, so a failed
 * signing attempt leaves no partial cookie state behind.
 */

use crate::backend::auth::cookie::{build_set_cookie, cookie_value};
use crate::backend::auth::handlers::types::PostAuthResponse;
use crate::backend::auth::redirects::allowed_login_next;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::{
    http::{
        header::{self, HeaderMap, HeaderValue},
        StatusCode,
    },
    response::{IntoResponse, Json, Redirect, Response},
};
use uuid::Uuid;

/// Does the client expect a JSON answer?
///
/// Mirrors content negotiation on the way in: a request that posted JSON
/// or asks for JSON back gets the JSON body, a plain browser navigation
/// gets the redirect.
pub fn wants_json(headers: &HeaderMap) -> bool {
    let mentions_json = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("json"))
            .unwrap_or(false)
    };
    mentions_json(header::CONTENT_TYPE) || mentions_json(header::ACCEPT)
}

/// Finish an authentication flow for the given identity
///
/// No identity attached → no-op (204, no cookie). Otherwise a fresh JWT is
/// created, set as the session cookie, and the response is either the JSON
/// payload or a redirect to the sanitized login `next` target.
pub async fn post_authentication(
    state: &AppState,
    headers: &HeaderMap,
    user_id: Option<Uuid>,
    requested_next: Option<&str>,
) -> Result<Response, BackendError> {
    let Some(user_id) = user_id else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    tracing::debug!("user {} is in post authentication status", user_id);

    let token = state.jwt.create(user_id)?;
    let set_cookie = build_set_cookie(&token, &state.config.cookie);
    let next_url = allowed_login_next(requested_next, &state.config);

    let mut response = if wants_json(headers) {
        let is_mobile_web_view =
            cookie_value(headers, &state.config.mobile_webview_cookie).as_deref() == Some("1");
        Json(PostAuthResponse {
            should_redirect: true,
            ok: true,
            next: next_url,
            auth_token: is_mobile_web_view.then(|| token.clone()),
        })
        .into_response()
    } else {
        Redirect::to(&next_url).into_response()
    };

    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&set_cookie).map_err(|_| {
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "invalid cookie value")
        })?,
    );

    Ok(response)
}
