//! First owner account.
//!
//! Runs once at startup, before the listener binds. It only checks for the
//! configured email and never overwrites an existing account.

use domain::models::account::normalize_email;
use domain::models::Role;
use persistence::repositories::AccountRepository;
use shared::password::{hash_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// What the bootstrap step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    Skipped,
}

pub async fn bootstrap_owner(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<BootstrapOutcome, BootstrapError> {
    let email = normalize_email(&config.bootstrap_email);
    if email.is_empty() || config.bootstrap_password.is_empty() {
        warn!("Bootstrap email or password is empty - skipping owner bootstrap");
        return Ok(BootstrapOutcome::Skipped);
    }

    let accounts = AccountRepository::new(pool.clone());
    if accounts.exists_by_email(&email).await? {
        info!(email = %email, "Bootstrap owner already exists");
        return Ok(BootstrapOutcome::Skipped);
    }

    let password_hash = hash_password(&config.bootstrap_password)?;
    let account = accounts
        .create(&email, &password_hash, &config.bootstrap_name, Role::Owner)
        .await?;

    info!(account_id = %account.id, email = %account.email, "Bootstrap owner created");
    warn!(
        email = %account.email,
        password = %config.bootstrap_password,
        "SECURITY: default owner credentials are in use; change the password after first login"
    );

    Ok(BootstrapOutcome::Created)
}
