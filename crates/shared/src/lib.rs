//! Shared utilities and common types for the Excellence Academy backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Business identifier generation (`ENQ-1A2B3C4D` style)
//! - JWT signing and validation for staff sessions
//! - Password hashing with Argon2id
//! - Offset pagination math
//! - Reusable field validators

pub mod business_id;
pub mod jwt;
pub mod pagination;
pub mod password;
pub mod validation;
