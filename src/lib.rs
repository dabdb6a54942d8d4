//! Sitegate - Main Library
//!
//! Sitegate is a thin authentication and glue layer for a single web
//! application: JWT session tokens bound to cookies or bearer headers, an
//! auth-required middleware gate, a password-reset email flow with
//! expiring single-use tokens, and a small autocomplete search endpoint.
//!
//! # Overview
//!
//! This library provides:
//! - Session JWTs: issuing, verification, and revocation
//! - Cookie and bearer-header token transport
//! - Login-required and optional-auth middleware for axum
//! - Password-reset coordination (single-use email tokens + SMTP)
//! - User registration and credential login
//!
//! # Module Structure
//!
//! All server code lives under **`backend`**:
//!
//! - `backend::auth` - tokens, users, cookies, handlers
//! - `backend::middleware` - request auth middleware
//! - `backend::mail` - SMTP gateway and templates
//! - `backend::search` - autocomplete endpoint
//! - `backend::server` - configuration, state, assembly
//! - `backend::routes` - router wiring
//! - `backend::error` - error types
//!
//! # Usage
//!
//! ```rust,no_run
//! use sitegate::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sitegate::backend::BackendError> {
//! let app = create_app().await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, `?` throughout
//! - Auth failures are absence of identity, never errors
//! - `backend::error::BackendError` converts into HTTP responses

/// Backend server-side code
pub mod backend;
