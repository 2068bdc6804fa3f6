//! Session model.
//!
//! A session is one scheduled meeting linking a subject, a teacher, a
//! student group, a room, and a time slot. Room/group/subject
//! compatibility is checked at construction; a session that exists is
//! always physically possible. All fields are immutable afterwards:
//! editing a session means removing it and inserting a new one.

use std::fmt;

use serde::Serialize;

use crate::error::CompatibilityError;
use crate::models::{Room, StudentGroup, Subject, Teacher, TimeSlot};

/// One scheduled meeting.
///
/// Equality and hashing are structural over all five fields (entity
/// fields compare by identity, the slot by value), so two sessions built
/// from the same inputs are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Session {
    subject: Subject,
    teacher: Teacher,
    group: StudentGroup,
    room: Room,
    slot: TimeSlot,
}

impl Session {
    /// Creates a session, checking that the room can host the group and
    /// provide the subject's required equipment.
    pub fn new(
        subject: Subject,
        teacher: Teacher,
        group: StudentGroup,
        room: Room,
        slot: TimeSlot,
    ) -> Result<Self, CompatibilityError> {
        if !room.is_compatible(group.headcount(), subject.required_equipment()) {
            return Err(CompatibilityError {
                room: room.name().to_string(),
                group: group.name().to_string(),
                subject: subject.name().to_string(),
            });
        }
        Ok(Self {
            subject,
            teacher,
            group,
            room,
            slot,
        })
    }

    /// The taught subject.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The assigned teacher.
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// The attending student group.
    pub fn group(&self) -> &StudentGroup {
        &self.group
    }

    /// The hosting room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The occupied time slot.
    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} for {} in {} ({})",
            self.subject.name(),
            self.teacher.name(),
            self.group.name(),
            self.room.name(),
            self.slot
        )
    }
}
