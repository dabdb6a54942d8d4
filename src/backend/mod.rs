//! Backend Module
//!
//! This module contains all server-side code for the sitegate application:
//! a thin authentication and glue layer over an axum HTTP server.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - JWT session tokens: issuing, verification, revocation
//! - Single-use email tokens for the password-reset flow
//! - Outbound mail via SMTP (lettre)
//! - Auth middleware (optional continuation and login-required gate)
//! - A small autocomplete search endpoint
//! - SQLite persistence for users and the token store
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Tokens, users, cookies, redirect sanitization, handlers
//! - **`middleware`** - Request auth middleware
//! - **`mail`** - SMTP gateway and email templates
//! - **`search`** - Autocomplete search endpoint
//! - **`error`** - Backend-specific error types
//!
//! # Request Flow
//!
//! Every request passes the optional-auth layer: a presented token
//! (bearer header or session cookie) is verified against the signature,
//! expiry, and the revocation list, and the resulting identity — possibly
//! absent — rides along in request extensions. Routes behind the
//! `auth_required` gate redirect unauthenticated clients to the login
//! page; everything else proceeds regardless.
//!
//! # Error Handling
//!
//! Auth failures are signaled by absent identity, never by exceptions from
//! verification. Upstream I/O failures (store, mail) propagate as generic
//! 500s via `BackendError`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication: tokens, users, handlers
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Outbound mail
pub mod mail;

/// Autocomplete search endpoint
pub mod search;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_with_state, AppState, AuthConfig};
