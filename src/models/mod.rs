//! Timetabling domain models.
//!
//! Leaf-first: [`TimeSlot`] is a pure value, the entities ([`Room`],
//! [`Teacher`], [`StudentGroup`], [`Subject`]) validate themselves at
//! construction, a [`Session`] links one of each, and the [`Timetable`]
//! collects sessions under the no-double-booking invariant.
//!
//! Entities are supplied fully validated by a loading layer (storage or
//! UI); parsing raw text such as "HH:MM" happens outside this crate.

mod group;
mod reservation;
mod room;
mod session;
mod subject;
mod teacher;
mod time_slot;
mod timetable;

pub use group::StudentGroup;
pub use reservation::{Reservation, ReservationStatus};
pub use room::{Room, RoomKind};
pub use session::Session;
pub use subject::{SessionType, Subject};
pub use teacher::Teacher;
pub use time_slot::{Day, TimeSlot};
pub use timetable::Timetable;

/// Shared constructors for unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveTime;

    use super::{
        Day, Room, RoomKind, Session, SessionType, StudentGroup, Subject, Teacher, TimeSlot,
    };

    pub fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Parses "mon 08:00-10:00" style shorthand.
    pub fn slot(spec: &str) -> TimeSlot {
        let (day, times) = spec.split_once(' ').unwrap();
        let (start, end) = times.split_once('-').unwrap();
        let day = match day {
            "mon" => Day::Monday,
            "tue" => Day::Tuesday,
            "wed" => Day::Wednesday,
            "thu" => Day::Thursday,
            "fri" => Day::Friday,
            "sat" => Day::Saturday,
            other => panic!("unknown day shorthand {other:?}"),
        };
        let parse = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
        TimeSlot::new(day, parse(start), parse(end)).unwrap()
    }

    pub fn room(id: i32, name: &str, capacity: i32) -> Room {
        Room::new(id, name, capacity, RoomKind::Tutorial).unwrap()
    }

    pub fn lab_room(id: i32, name: &str, capacity: i32) -> Room {
        Room::new(id, name, capacity, RoomKind::Lab)
            .unwrap()
            .with_equipment("computers")
    }

    pub fn subject(code: &str, name: &str) -> Subject {
        Subject::new(code, name, SessionType::Lecture, 3).unwrap()
    }

    pub fn teacher(id: i32, name: &str) -> Teacher {
        Teacher::new(id, name).unwrap()
    }

    pub fn group(id: i32, name: &str) -> StudentGroup {
        group_of(id, name, 25)
    }

    pub fn group_of(id: i32, name: &str, headcount: i32) -> StudentGroup {
        StudentGroup::new(id, name, "Computer Science", headcount).unwrap()
    }

    /// A default session occupying the given slot (room 1, teacher 1, group 1).
    pub fn session_at(slot_spec: &str) -> Session {
        Session::new(
            subject("ALG", "Algebra"),
            teacher(1, "Prof"),
            group(1, "G1"),
            room(1, "S1", 60),
            slot(slot_spec),
        )
        .unwrap()
    }
}
