//! Middleware for the storefront.

pub mod session;

pub use session::{SESSION_COOKIE_NAME, session_middleware};
