//! Teacher model.
//!
//! A teacher carries the subjects they can teach and the time slots they
//! declared themselves free for. Identity is the numeric id.
//!
//! # Availability semantics
//! [`Teacher::is_available`] treats a requested slot as available when it
//! *overlaps* any declared slot, so a partial overlap counts. The greedy
//! scheduler instead requires the exact slot to be declared (value
//! membership). Both semantics are kept deliberately; see the scheduler
//! module docs.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{Subject, TimeSlot};

/// A teacher who can be assigned to sessions.
#[derive(Debug, Clone, Serialize)]
pub struct Teacher {
    id: i32,
    name: String,
    subjects: Vec<Subject>,
    availability: Vec<TimeSlot>,
}

impl Teacher {
    /// Creates a teacher with no subjects and no declared availability.
    pub fn new(id: i32, name: impl Into<String>) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId {
                entity: "teacher",
                value: id,
            });
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "teacher",
                field: "name",
            });
        }
        Ok(Self {
            id,
            name,
            subjects: Vec::new(),
            availability: Vec::new(),
        })
    }

    /// Adds a subject this teacher can teach.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a free slot (builder form of [`add_availability`](Self::add_availability)).
    pub fn with_availability(mut self, slot: TimeSlot) -> Self {
        self.availability.push(slot);
        self
    }

    /// Unique teacher id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Teacher name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subjects this teacher can teach.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Declared free slots, in declaration order.
    pub fn availability(&self) -> &[TimeSlot] {
        &self.availability
    }

    /// Declares an additional free slot.
    pub fn add_availability(&mut self, slot: TimeSlot) {
        self.availability.push(slot);
    }

    /// Whether this teacher can teach the given subject.
    pub fn teaches(&self, subject: &Subject) -> bool {
        self.subjects.contains(subject)
    }

    /// Whether the teacher is available for `slot`.
    ///
    /// Overlap-based: true iff `slot` intersects at least one declared
    /// free slot. A teacher with no declared availability is available
    /// for nothing.
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.availability.iter().any(|free| free.overlaps(slot))
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Teacher {}

impl Hash for Teacher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
