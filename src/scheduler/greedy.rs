//! Greedy first-fit scheduler.
//!
//! # Algorithm
//!
//! 1. Take demands in the given order.
//! 2. For each demand, try candidate slots in the given order.
//! 3. For each slot, try candidate rooms in the given order.
//! 4. Place the first compatible, conflict-free combination; an
//!    unplaceable demand aborts the run.
//!
//! The loop order (demands, then slots, then rooms) is part of the
//! contract: it decides which of several valid assignments is chosen and
//! which demand a failure is reported for.
//!
//! # Availability semantics
//! The scheduler requires the candidate slot to be an exact member of the
//! teacher's declared availability, stricter than the overlap test in
//! [`Teacher::is_available`](crate::models::Teacher::is_available). A
//! partially overlapping declaration is not enough to place a session.
//!
//! # Complexity
//! O(d * s * r * n) where d=demands, s=slots, r=rooms, n=placed sessions.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SchedulingError;
use crate::models::{Room, Session, StudentGroup, Subject, Teacher, TimeSlot, Timetable};

/// A (subject, teacher, group) tuple requiring placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demand {
    subject: Subject,
    teacher: Teacher,
    group: StudentGroup,
}

impl Demand {
    /// Creates a placement demand.
    pub fn new(subject: Subject, teacher: Teacher, group: StudentGroup) -> Self {
        Self {
            subject,
            teacher,
            group,
        }
    }

    /// The subject to place.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The teacher to assign.
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// The group to assign.
    pub fn group(&self) -> &StudentGroup {
        &self.group
    }
}

/// Greedy first-fit scheduler over static room and slot pools.
///
/// Stateless between runs: all inputs are explicit and the only output
/// is the mutation of the caller's [`Timetable`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    rooms: Vec<Room>,
    slots: Vec<TimeSlot>,
}

impl Scheduler {
    /// Creates a scheduler drawing from the given room and slot pools.
    ///
    /// Pool order is preserved and significant (first-fit).
    pub fn new(rooms: Vec<Room>, slots: Vec<TimeSlot>) -> Self {
        Self { rooms, slots }
    }

    /// Candidate rooms, in placement order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Candidate slots, in placement order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Places every demand into `timetable`, first-fit.
    ///
    /// Fails with [`SchedulingError`] naming the subject of the first
    /// demand that fits nowhere. Sessions placed before the failure are
    /// kept; there is no rollback. Callers may adjust inputs and re-run.
    pub fn run(
        &self,
        timetable: &mut Timetable,
        demands: &[Demand],
    ) -> Result<(), SchedulingError> {
        for demand in demands {
            self.place(timetable, demand)?;
        }
        Ok(())
    }

    fn place(&self, timetable: &mut Timetable, demand: &Demand) -> Result<(), SchedulingError> {
        for slot in &self.slots {
            // Exact membership, not overlap; see module docs.
            if !demand.teacher.availability().contains(slot) {
                continue;
            }
            for room in &self.rooms {
                if !room.is_compatible(demand.group.headcount(), demand.subject.required_equipment())
                {
                    trace!(room = room.name(), subject = demand.subject.name(), "room incompatible");
                    continue;
                }

                // Compatibility was just checked, so construction cannot fail.
                let Ok(candidate) = Session::new(
                    demand.subject.clone(),
                    demand.teacher.clone(),
                    demand.group.clone(),
                    room.clone(),
                    slot.clone(),
                ) else {
                    continue;
                };

                if timetable.find_conflict(&candidate).is_some() {
                    trace!(%candidate, "candidate conflicts, trying next room");
                    continue;
                }

                debug!(session = %candidate, "placed");
                // find_conflict was None, so add cannot conflict here.
                return timetable.add(candidate).map_err(|_| SchedulingError {
                    subject: demand.subject.name().to_string(),
                });
            }
        }

        Err(SchedulingError {
            subject: demand.subject.name().to_string(),
        })
    }
}
