//! Error types for the timetabling core.
//!
//! Each failure class gets its own type so callers can match on exactly
//! the errors an operation can produce. The umbrella [`Error`] enum exists
//! for callers that funnel everything through one `Result` alias.
//!
//! All errors are raised synchronously to the immediate caller; the core
//! never retries, logs, or downgrades an error to a warning.

use chrono::NaiveTime;
use thiserror::Error;

use crate::conflict::ConflictKind;
use crate::models::Session;

/// Malformed construction arguments for an entity or time slot.
///
/// Raised by constructors before any state exists; a failed constructor
/// never yields a partially built value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric identity was zero or negative.
    #[error("{entity} id must be strictly positive (got {value})")]
    NonPositiveId { entity: &'static str, value: i32 },

    /// A required text field was empty or whitespace-only.
    #[error("{entity} {field} must be a non-empty string")]
    BlankField {
        entity: &'static str,
        field: &'static str,
    },

    /// A count (capacity, headcount, weekly hours) was zero or negative.
    #[error("{entity} {field} must be strictly positive (got {value})")]
    NonPositiveCount {
        entity: &'static str,
        field: &'static str,
        value: i32,
    },

    /// A time slot whose start is not strictly before its end.
    #[error("time slot must start before it ends ({start}..{end})")]
    EmptyTimeRange { start: NaiveTime, end: NaiveTime },
}

/// A session's room cannot host its group or subject.
///
/// Raised at [`Session::new`](crate::models::Session::new); the session is
/// never constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("room '{room}' cannot host group '{group}' for subject '{subject}' (capacity or equipment)")]
pub struct CompatibilityError {
    /// Room name.
    pub room: String,
    /// Group name.
    pub group: String,
    /// Subject name.
    pub subject: String,
}

/// Inserting a session would double-book a room, teacher, or group.
///
/// Carries the first colliding resource (checked room, then teacher, then
/// group) and the existing session it collided with. The timetable is left
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{resource}' is already booked: clashes with {existing}")]
pub struct ConflictError {
    /// Which resource is double-booked.
    pub kind: ConflictKind,
    /// Name of the double-booked resource.
    pub resource: String,
    /// The already-scheduled session it collides with.
    pub existing: Session,
}

/// Removal of a session that is not in the timetable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("session not found in timetable: {0}")]
pub struct NotFoundError(pub Session);

/// The greedy scheduler could not place a demand.
///
/// Aborts the entire scheduling run; sessions placed before the failure
/// remain in the timetable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no placement for {subject}")]
pub struct SchedulingError {
    /// Name of the subject whose demand could not be placed.
    pub subject: String,
}

/// Umbrella error for callers that mix core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Compatibility(#[from] CompatibilityError),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
}

/// Result alias defaulting to the umbrella [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
