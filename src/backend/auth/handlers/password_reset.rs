/**
 * Password Reset Handlers
 *
 * The two halves of the reset flow:
 *
 * 1. `forgot_password` (POST /api/auth/forgot-password) — look the user up
 *    by email and send a reset link carrying a fresh single-use token.
 * 2. `reset_password` (POST /api/auth/reset-password) — consume the token
 *    and store the new bcrypt hash.
 *
 * # Security
 *
 * - The forgot-password response is identical whether or not the address
 *   exists, so the endpoint cannot be used to enumerate accounts.
 * - The email token is single-use and expires after the configured number
 *   of minutes; unknown, expired, and already-consumed tokens are rejected
 *   with the same error.
 * - Mail dispatch failure fails the request — a user who never receives
 *   the email should not see a success response.
 */

use crate::backend::auth::email_tokens::EmailTokens;
use crate::backend::auth::handlers::types::{ForgotPasswordRequest, OkResponse, ResetPasswordRequest};
use crate::backend::auth::users::{get_user_by_email, update_password_hash};
use crate::backend::error::BackendError;
use crate::backend::mail::{render_reset_email, MailGateway, OutgoingEmail, ResetEmailArgs};
use crate::backend::server::config::AuthConfig;
use crate::backend::server::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use uuid::Uuid;

/// Create an email token for the user and dispatch the reset link
///
/// Builds the link from `origin` + the configured path + the token, renders
/// the branded template with localized strings, and hands the message to
/// the mail gateway. Straight-line compose-and-send; any failure
/// propagates to the caller.
pub async fn send_reset_password_link(
    email_tokens: &EmailTokens,
    mail: &MailGateway,
    config: &AuthConfig,
    user_id: Uuid,
    email: &str,
    t: &(dyn Fn(&str) -> String + Sync),
    origin: &str,
) -> Result<(), BackendError> {
    let issued = email_tokens.new_and_save(user_id).await?;
    let link = format!("{origin}{}{}", config.email_token_path, issued.token);
    tracing::debug!("sending out password reset email {}", link);

    let html = render_reset_email(&ResetEmailArgs {
        brand: t("meta.title"),
        origin: origin.to_string(),
        logo_src: format!("{origin}/favicon.png"),
        forgot_password_text: t("auth/forgot_password"),
        forgot_password_des: t("auth/forgot_password.email_content"),
        forgot_password_btn_text: t("auth/forgot_password.email_cta"),
        forgot_password_btn_link: link,
    });

    mail.send_mail(OutgoingEmail {
        from: format!("\"{}\" <noreply@{}>", t("meta.title"), config.mail.domain),
        to: email.to_string(),
        subject: t("auth/forgot_password.email_title"),
        html,
    })
    .await
}

/// Built-in English catalog for the reset email
///
/// The translate function is an injected collaborator in the flow; this is
/// the default used by the HTTP handler.
pub fn translate(key: &str) -> String {
    match key {
        "meta.title" => "Sitegate",
        "auth/forgot_password" => "Forgot your password?",
        "auth/forgot_password.email_content" => {
            "We received a request to reset the password for your account. \
             Click the button below to choose a new one."
        }
        "auth/forgot_password.email_cta" => "Reset password",
        "auth/forgot_password.email_title" => "Reset your password",
        _ => key,
    }
    .to_string()
}

/// Reconstruct the request origin for building absolute links
fn request_origin(headers: &HeaderMap, config: &AuthConfig) -> String {
    let scheme = if config.cookie.secure { "https" } else { "http" };
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}

/// Forgot-password handler
///
/// Always answers `{ok: true}` for a well-formed request, whether or not
/// the address belongs to an account.
pub async fn forgot_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<OkResponse>, BackendError> {
    let origin = request_origin(&headers, &state.config);

    match get_user_by_email(&state.pool, &request.email).await? {
        Some(user) => {
            send_reset_password_link(
                &state.email_tokens,
                &state.mail,
                &state.config,
                user.id,
                &user.email,
                &translate,
                &origin,
            )
            .await?;
        }
        None => {
            tracing::debug!("password reset requested for unknown address");
        }
    }

    Ok(Json(OkResponse { ok: true }))
}

/// Reset-password handler
///
/// Consumes the email token and stores the new password hash. The token
/// check and consumption are one atomic step, so a token can never reset
/// two passwords.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<OkResponse>, BackendError> {
    if request.password.len() < 8 {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "password must be at least 8 characters",
        ));
    }

    let Some(user_id) = state.email_tokens.consume(&request.token).await? else {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "invalid or expired token",
        ));
    };

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;
    update_password_hash(&state.pool, user_id, password_hash).await?;

    tracing::info!("password reset completed for user {}", user_id);
    Ok(Json(OkResponse { ok: true }))
}
