//! Custom Axum extractors.

pub mod auth;
pub mod validated;

pub use auth::AuthContext;
pub use validated::{QueryParams, ValidatedJson};
