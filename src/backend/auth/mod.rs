//! Authentication Module
//!
//! This module handles session tokens, single-use email tokens, user
//! records, and the HTTP handlers that tie them together.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`jwt`** - JWT issuing, verification, and revocation
//! - **`email_tokens`** - single-use password-reset tokens
//! - **`users`** - user model and database operations
//! - **`cookie`** - session-cookie construction and parsing
//! - **`redirects`** - `next`-target sanitization (open-redirect defense)
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup/Login**: credentials verified → JWT minted → session cookie
//!    set → JSON payload or redirect
//! 2. **Request**: bearer header or cookie → JWT verified (signature,
//!    expiry, revocation) → identity attached to the request
//! 3. **Logout**: cookie cleared → token revoked → safe redirect
//! 4. **Password reset**: email token mailed → consumed exactly once →
//!    new bcrypt hash stored
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Every token-verification failure looks the same to callers (no
//!   information leakage)
//! - Redirect targets are allow-listed; open redirects are coerced to a
//!    safe default

/// JWT issuing, verification, and revocation
pub mod jwt;

/// Single-use email tokens
pub mod email_tokens;

/// User data model and database operations
pub mod users;

/// Session cookie helpers
pub mod cookie;

/// Redirect-target sanitization
pub mod redirects;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use email_tokens::{EmailToken, EmailTokens};
pub use handlers::types::{
    LoginRequest, OkResponse, PostAuthResponse, SignupRequest, UserResponse,
};
pub use handlers::{forgot_password, get_me, login, logout, reset_password, signup};
pub use jwt::Jwt;
