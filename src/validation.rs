//! Input integrity checks for a scheduling run.
//!
//! Catches structural problems in the room/slot pools and the demand
//! list before the greedy scheduler burns time on them:
//! - Duplicate room ids or duplicate slots in the pools
//! - Empty pools when there are demands to place
//! - Demands whose teacher does not teach the demanded subject
//! - Demands whose teacher declared no availability at all
//!
//! All issues are collected and reported together, unlike the scheduler
//! which stops at the first unplaceable demand.

use std::collections::HashSet;

use crate::models::{Room, TimeSlot};
use crate::scheduler::Demand;

/// Integrity check result.
pub type IntegrityResult = Result<(), Vec<IntegrityError>>;

/// A single integrity issue.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityError {
    /// Issue category.
    pub kind: IntegrityErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of integrity issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityErrorKind {
    /// Two rooms in the pool share an id.
    DuplicateRoom,
    /// The same slot appears twice in the pool.
    DuplicateSlot,
    /// A pool is empty while demands exist.
    EmptyPool,
    /// A demand's teacher does not teach the demanded subject.
    UnqualifiedTeacher,
    /// A demand's teacher has no declared availability.
    NoAvailability,
}

impl IntegrityError {
    fn new(kind: IntegrityErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates scheduler inputs before a run.
///
/// Returns `Ok(())` when all checks pass, or every detected issue at
/// once. A passing check does not guarantee the greedy run succeeds;
/// it only rules out inputs that can never succeed or that indicate a
/// data-loading bug.
pub fn validate_input(demands: &[Demand], rooms: &[Room], slots: &[TimeSlot]) -> IntegrityResult {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id()) {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::DuplicateRoom,
                format!("duplicate room id {} ('{}')", room.id(), room.name()),
            ));
        }
    }

    let mut seen_slots: HashSet<&TimeSlot> = HashSet::new();
    for slot in slots {
        if !seen_slots.insert(slot) {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::DuplicateSlot,
                format!("duplicate slot {slot}"),
            ));
        }
    }

    if !demands.is_empty() {
        if rooms.is_empty() {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::EmptyPool,
                "no candidate rooms",
            ));
        }
        if slots.is_empty() {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::EmptyPool,
                "no candidate slots",
            ));
        }
    }

    for demand in demands {
        if !demand.teacher().teaches(demand.subject()) {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::UnqualifiedTeacher,
                format!(
                    "teacher '{}' does not teach '{}'",
                    demand.teacher().name(),
                    demand.subject().name()
                ),
            ));
        }
        if demand.teacher().availability().is_empty() {
            errors.push(IntegrityError::new(
                IntegrityErrorKind::NoAvailability,
                format!("teacher '{}' declared no availability", demand.teacher().name()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
