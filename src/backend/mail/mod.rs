//! Mail Module
//!
//! Outbound email for the auth layer: the SMTP gateway and the
//! reset-password template.
//!
//! # Module Structure
//!
//! ```text
//! mail/
//! ├── mod.rs      - Module exports
//! ├── gateway.rs  - SMTP transport wrapper (lettre)
//! └── template.rs - Reset-password email HTML
//! ```

/// SMTP transport wrapper
pub mod gateway;

/// Email templates
pub mod template;

pub use gateway::{MailGateway, OutgoingEmail};
pub use template::{render_reset_email, ResetEmailArgs};
