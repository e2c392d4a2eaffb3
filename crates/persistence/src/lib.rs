//! Persistence layer for the Excellence Academy backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - The generic collection repository and per-entity write repositories
//! - Query metrics

pub mod collection;
pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;

pub use collection::{Collection, CollectionRepository, Filter, Toggle};
