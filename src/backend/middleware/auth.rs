/**
 * Authentication Middleware
 *
 * This module provides the two middleware layers that gate the HTTP
 * surface:
 *
 * - `auth_optional_continue` extracts and verifies a token if one is
 *   present and always lets the request through. Downstream handlers see
 *   an `AuthContext` extension carrying the (possibly absent) identity
 *   and the raw token.
 * - `auth_required` additionally redirects unauthenticated requests to the
 *   login page, with the original URL percent-encoded in the `next` query
 *   parameter, and never invokes the downstream handler for them.
 *
 * # Request states
 *
 * `unauthenticated → token-present → verified → identity-attached`, or
 * `unauthenticated → token-present → verification-failed → unauthenticated`.
 *
 * Verification failure is indistinguishable from a missing token by
 * design; only token-store I/O failures turn into a 500.
 */

use crate::backend::auth::cookie::cookie_value;
use crate::backend::server::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

/// Request-scoped authentication state
///
/// Attached to request extensions by the middleware. `user_id` is `None`
/// both when no token was presented and when the presented token failed
/// verification.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    /// Verified user identity, if any
    pub user_id: Option<Uuid>,
    /// The raw token the request carried, if any
    pub token: Option<String>,
}

/// Extract the session token from request headers
///
/// The `Authorization` header wins, with the literal `"Bearer "` prefix
/// stripped; otherwise the session cookie is consulted.
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        return Some(auth.strip_prefix("Bearer ").unwrap_or(auth).to_string());
    }
    cookie_value(headers, cookie_name)
}

/// Attach an `AuthContext` to the request, verifying any presented token.
///
/// Idempotent: a request that already carries an `AuthContext` (because an
/// outer layer ran first) is left untouched, so stacking `auth_required`
/// on top of `auth_optional_continue` verifies the token once.
async fn attach_identity(state: &AppState, request: &mut Request) -> Result<(), StatusCode> {
    if request.extensions().get::<AuthContext>().is_some() {
        return Ok(());
    }

    let token = token_from_headers(request.headers(), &state.config.cookie.name);
    let context = match token {
        None => AuthContext::default(),
        Some(token) => {
            let user_id = state.jwt.verify(&token).await.map_err(|e| {
                tracing::error!("token store lookup failed: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            AuthContext {
                user_id,
                token: Some(token),
            }
        }
    };

    request.extensions_mut().insert(context);
    Ok(())
}

/// Optional-auth middleware
///
/// Verifies a presented token and attaches the result, then always
/// proceeds. This layer never rejects a request on its own.
pub async fn auth_optional_continue(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    attach_identity(&state, &mut request).await?;
    Ok(next.run(request).await)
}

/// Login-required middleware
///
/// Runs the optional step first; if no identity ended up attached, the
/// client is redirected to the login URL with the original URL in `next`
/// and the downstream handler is not invoked.
pub async fn auth_required(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    attach_identity(&state, &mut request).await?;

    let user_id = request
        .extensions()
        .get::<AuthContext>()
        .and_then(|c| c.user_id);

    let Some(user_id) = user_id else {
        tracing::debug!("user is not authenticated but auth is required");
        let original = request.uri().to_string();
        let location = format!(
            "{}?next={}",
            state.config.login_url,
            urlencoding::encode(&original)
        );
        return Ok(Redirect::to(&location).into_response());
    };

    tracing::debug!("user is authenticated {}", user_id);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user ID
///
/// Handlers behind `auth_required` can take `AuthUser` as a parameter to
/// get the verified identity without touching extensions themselves.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Uuid);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .and_then(|c| c.user_id)
            .map(AuthUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_header_is_stripped() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(
            token_from_headers(&headers, "session").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("session=xyz"),
        );
        assert_eq!(
            token_from_headers(&headers, "session").as_deref(),
            Some("xyz")
        );
    }

    #[test]
    fn test_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("session=xyz"),
        );
        assert_eq!(
            token_from_headers(&headers, "session").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_no_token_anywhere() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers, "session"), None);
    }
}
