//! Search Module
//!
//! The backend half of the application's autocomplete search box. The
//! widget itself lives in the client; this module only serves the
//! `search(name) -> [{name, path}]` query it issues.

/// Search HTTP handler
pub mod handlers;

pub use handlers::{search, SearchResult};
