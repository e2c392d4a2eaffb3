//! Domain layer for the Excellence Academy backend.
//!
//! This crate contains:
//! - Domain models (accounts, enquiries, announcements, gallery, slides, syllabus)
//! - Request payloads with their validation rules
//! - Business rules that need no storage (access policy, slide ordering)

pub mod models;
pub mod services;
