//! Middleware Module
//!
//! Request-processing middleware for the backend server. Currently this is
//! the authentication pair: the optional-auth continuation that attaches
//! identity when a valid token is present, and the login-required gate
//! that redirects everyone else.

/// Authentication middleware and the request-scoped auth context
pub mod auth;

pub use auth::{auth_optional_continue, auth_required, AuthContext, AuthUser};
