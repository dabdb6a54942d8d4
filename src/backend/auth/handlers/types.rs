/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. These types are shared across signup, login, logout, me, and the
 * password-reset handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Optional post-authentication destination
    #[serde(default)]
    pub next: Option<String>,
}

/// Login request
///
/// Contains the username (or email) and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's username (can also be email)
    pub username: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
    /// Optional post-authentication destination
    #[serde(default)]
    pub next: Option<String>,
}

/// `next` query parameter, shared by login, logout, and signup routes
#[derive(Deserialize, Debug, Default)]
pub struct NextQuery {
    #[serde(default)]
    pub next: Option<String>,
}

/// Forgot-password request
#[derive(Deserialize, Serialize, Debug)]
pub struct ForgotPasswordRequest {
    /// Address to send the reset link to
    pub email: String,
}

/// Reset-password request
///
/// Carries the single-use email token from the reset link plus the new
/// password.
#[derive(Deserialize, Serialize, Debug)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Generic success acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct OkResponse {
    pub ok: bool,
}

/// Post-authentication response for JSON-accepting clients
///
/// `auth_token` is populated only for a flagged mobile web-view session;
/// browser clients rely on the session cookie instead.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthResponse {
    pub should_redirect: bool,
    pub ok: bool,
    pub next: String,
    pub auth_token: Option<String>,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}
