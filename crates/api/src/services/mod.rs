//! Application services sitting between routes and repositories.

pub mod auth;
pub mod bootstrap;
pub mod resource;

pub use auth::{AuthError, AuthService};
pub use bootstrap::{bootstrap_owner, BootstrapError, BootstrapOutcome};
pub use resource::{toggle_message, Resource, ResourceService};
