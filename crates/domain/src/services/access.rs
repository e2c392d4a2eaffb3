//! Two-role access policy.
//!
//! Every protected route demands a [`Capability`]. Staff may manage
//! content; only owners may manage accounts, and never their own.

use thiserror::Error;
use uuid::Uuid;

use crate::models::Role;

pub const NO_TOKEN: &str = "Access denied. No token provided.";
pub const OWNER_REQUIRED: &str = "Access denied. Owner privileges required.";

/// What a route requires from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any active staff account.
    Authenticated,
    /// Role `super_admin`.
    Owner,
}

/// Staff-management actions an owner may not perform on their own account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffAction {
    Modify,
    Delete,
    ResetPassword,
}

impl StaffAction {
    fn self_denial(&self) -> &'static str {
        match self {
            StaffAction::Modify => "Cannot modify your own account.",
            StaffAction::Delete => "Cannot delete your own account.",
            StaffAction::ResetPassword => {
                "Cannot reset your own password here. Use your profile instead."
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    SelfAction(&'static str),
}

/// Decides whether a caller with `role` (or no session at all) holds `capability`.
pub fn check(role: Option<Role>, capability: Capability) -> Result<(), AccessError> {
    let role = role.ok_or(AccessError::Unauthenticated(NO_TOKEN))?;
    match capability {
        Capability::Authenticated => Ok(()),
        Capability::Owner if role.is_owner() => Ok(()),
        Capability::Owner => Err(AccessError::Forbidden(OWNER_REQUIRED)),
    }
}

/// Rejects staff-management actions aimed at the caller's own account.
pub fn guard_self_action(
    actor: Uuid,
    target: Uuid,
    action: StaffAction,
) -> Result<(), AccessError> {
    if actor == target {
        return Err(AccessError::SelfAction(action.self_denial()));
    }
    Ok(())
}
