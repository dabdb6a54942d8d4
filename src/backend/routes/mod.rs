//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint wiring
//! ```

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
