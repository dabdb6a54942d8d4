//! Authentication HTTP handlers
//!
//! The handler layer over the auth services. Organized by endpoint:
//!
//! - **`signup`** - user registration
//! - **`login`** - credential authentication
//! - **`me`** - current-user info
//! - **`logout`** - cookie clearing + token revocation
//! - **`password_reset`** - forgot/reset password pair
//! - **`post_auth`** - shared post-authentication tail (cookie + response)
//! - **`types`** - request/response types

pub mod login;
pub mod logout;
pub mod me;
pub mod password_reset;
pub mod post_auth;
pub mod signup;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use password_reset::{forgot_password, reset_password, send_reset_password_link};
pub use post_auth::post_authentication;
pub use signup::signup;
