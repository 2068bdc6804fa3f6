//! One-off room reservation requests.
//!
//! A teacher can request a room outside the regular timetable (make-up
//! classes, exams). The request starts pending and an administrator
//! accepts or rejects it. Reservations do not take part in conflict
//! detection; granting one is the administrator's call.

use std::fmt;

use serde::Serialize;

use crate::models::{Room, Teacher, TimeSlot};

/// Lifecycle of a reservation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReservationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A request by a teacher to book a room for one slot.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    teacher: Teacher,
    room: Room,
    slot: TimeSlot,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a pending reservation.
    pub fn new(teacher: Teacher, room: Room, slot: TimeSlot) -> Self {
        Self {
            teacher,
            room,
            slot,
            status: ReservationStatus::Pending,
        }
    }

    /// The requesting teacher.
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// The requested room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The requested slot.
    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    /// Current status.
    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Marks the request accepted.
    pub fn accept(&mut self) {
        self.status = ReservationStatus::Accepted;
    }

    /// Marks the request rejected.
    pub fn reject(&mut self) {
        self.status = ReservationStatus::Rejected;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reservation of {} by {} ({}, {:?})",
            self.room.name(),
            self.teacher.name(),
            self.slot,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{room, slot, teacher};

    #[test]
    fn test_starts_pending() {
        let r = Reservation::new(teacher(1, "Prof"), room(1, "S1", 30), slot("fri 14:00-16:00"));
        assert_eq!(r.status(), ReservationStatus::Pending);
    }

    #[test]
    fn test_accept_and_reject() {
        let mut r =
            Reservation::new(teacher(1, "Prof"), room(1, "S1", 30), slot("fri 14:00-16:00"));
        r.accept();
        assert_eq!(r.status(), ReservationStatus::Accepted);
        r.reject();
        assert_eq!(r.status(), ReservationStatus::Rejected);
    }
}
