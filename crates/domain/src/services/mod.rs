//! Storage-free business rules.

pub mod access;
pub mod slide_order;

pub use access::{check, guard_self_action, AccessError, Capability, StaffAction};
pub use slide_order::{is_dense, neighbour_order, next_order, SlideOrderError};
