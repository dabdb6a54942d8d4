//! Server Module
//!
//! Server initialization, application state, and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - AuthConfig and database loading
//! ├── state.rs  - AppState and FromRef impls
//! └── init.rs   - Application assembly
//! ```

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::AuthConfig;
pub use init::{create_app, create_app_with_state};
pub use state::AppState;
