//! Slide ordering rules.
//!
//! Slide orders always form the dense sequence `1..=N`. Storage applies
//! these rules inside a transaction; the functions here only decide.

use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::models::slide::{MoveDirection, SlideOrderAssignment};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideOrderError {
    #[error("Order must be at least 1")]
    OrderOutOfRange,

    #[error("Slide {0} appears more than once")]
    DuplicateSlide(Uuid),
}

/// Position for a newly created slide given the current maximum order.
pub fn next_order(current_max: Option<i32>) -> i32 {
    current_max.unwrap_or(0) + 1
}

/// Order of the neighbour a slide at `order` swaps with, or `None` when the
/// slide is already at that end of the carousel.
pub fn neighbour_order(order: i32, total: i64, direction: MoveDirection) -> Option<i32> {
    match direction {
        MoveDirection::Up if order > 1 => Some(order - 1),
        MoveDirection::Down if i64::from(order) < total => Some(order + 1),
        _ => None,
    }
}

/// True when `orders` is a permutation of `1..=orders.len()`.
pub fn is_dense(orders: &[i32]) -> bool {
    let mut sorted = orders.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, order)| i64::from(*order) == i as i64 + 1)
}

/// Checks a reorder batch before it reaches storage.
///
/// The batch is applied verbatim, so only per-item sanity is enforced here.
/// Keeping the whole carousel dense is the caller's responsibility.
pub fn validate_assignments(assignments: &[SlideOrderAssignment]) -> Result<(), SlideOrderError> {
    let mut seen = HashSet::with_capacity(assignments.len());
    for assignment in assignments {
        if shared::validation::validate_order(assignment.order).is_err() {
            return Err(SlideOrderError::OrderOutOfRange);
        }
        if !seen.insert(assignment.id) {
            return Err(SlideOrderError::DuplicateSlide(assignment.id));
        }
    }
    Ok(())
}
