//! Stateless conflict detection between two sessions.
//!
//! A conflict exists when two sessions' slots overlap in time and they
//! share at least one exclusive resource: the room, the teacher, or the
//! student group. One pair of sessions can trigger several kinds at once.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::{Session, TimeSlot};

/// The resource over which two sessions collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConflictKind {
    /// Same room, overlapping slots.
    Room,
    /// Same teacher, overlapping slots.
    Teacher,
    /// Same student group, overlapping slots.
    Group,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Teacher => write!(f, "teacher"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Stateless detector computing the conflict kinds between two sessions.
///
/// Pure functions only: no state, no side effects, symmetric in both
/// arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    /// Whether two slots overlap (same day, half-open interval intersection).
    ///
    /// Delegates to [`TimeSlot::overlaps`].
    pub fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
        a.overlaps(b)
    }

    /// Computes the set of conflict kinds between two sessions.
    ///
    /// Returns the empty set unless the slots overlap. When they do,
    /// each shared resource (room, teacher, group) contributes one kind;
    /// equality of entities is identity-based (room/group by id, teacher
    /// by id), so two sessions in the "same" room always collide even if
    /// the room values were cloned separately.
    pub fn detect(a: &Session, b: &Session) -> BTreeSet<ConflictKind> {
        let mut kinds = BTreeSet::new();

        if !Self::overlaps(a.slot(), b.slot()) {
            return kinds;
        }

        if a.room() == b.room() {
            kinds.insert(ConflictKind::Room);
        }
        if a.teacher() == b.teacher() {
            kinds.insert(ConflictKind::Teacher);
        }
        if a.group() == b.group() {
            kinds.insert(ConflictKind::Group);
        }

        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{
        group, lab_room, room, session_at, slot, subject, teacher,
    };

    #[test]
    fn test_identical_sessions_conflict_on_all_kinds() {
        let a = session_at("mon 08:00-10:00");
        let b = session_at("mon 08:00-10:00");

        let kinds = ConflictDetector::detect(&a, &b);
        assert_eq!(kinds.len(), 3);
        assert!(kinds.contains(&ConflictKind::Room));
        assert!(kinds.contains(&ConflictKind::Teacher));
        assert!(kinds.contains(&ConflictKind::Group));
    }

    #[test]
    fn test_disjoint_slots_never_conflict() {
        // Same room, teacher, and group, but no time overlap.
        let a = session_at("mon 08:00-10:00");
        let b = session_at("mon 10:00-12:00");

        assert!(ConflictDetector::detect(&a, &b).is_empty());
    }

    #[test]
    fn test_partial_overlap_counts() {
        let a = session_at("mon 08:00-10:00");
        let b = session_at("mon 09:00-11:00");

        let kinds = ConflictDetector::detect(&a, &b);
        assert!(kinds.contains(&ConflictKind::Room));
    }

    #[test]
    fn test_detect_is_symmetric() {
        let a = session_at("mon 08:00-10:00");
        let b = session_at("mon 09:00-11:00");

        assert_eq!(
            ConflictDetector::detect(&a, &b),
            ConflictDetector::detect(&b, &a)
        );
    }

    #[test]
    fn test_single_kind_when_only_room_is_shared() {
        let shared_room = room(1, "S1", 60);
        let a = crate::models::Session::new(
            subject("ALG", "Algebra"),
            teacher(1, "Prof A"),
            group(1, "G1"),
            shared_room.clone(),
            slot("mon 08:00-10:00"),
        )
        .unwrap();
        let b = crate::models::Session::new(
            subject("ANA", "Analysis"),
            teacher(2, "Prof B"),
            group(2, "G2"),
            shared_room,
            slot("mon 09:00-10:00"),
        )
        .unwrap();

        let kinds = ConflictDetector::detect(&a, &b);
        assert_eq!(kinds.len(), 1);
        assert!(kinds.contains(&ConflictKind::Room));
    }

    #[test]
    fn test_different_rooms_same_teacher() {
        let prof = teacher(1, "Prof");
        let a = crate::models::Session::new(
            subject("ALG", "Algebra"),
            prof.clone(),
            group(1, "G1"),
            room(1, "S1", 60),
            slot("tue 08:00-10:00"),
        )
        .unwrap();
        let b = crate::models::Session::new(
            subject("ANA", "Analysis"),
            prof,
            group(2, "G2"),
            lab_room(2, "L1", 30),
            slot("tue 08:00-09:00"),
        )
        .unwrap();

        let kinds = ConflictDetector::detect(&a, &b);
        assert_eq!(kinds.len(), 1);
        assert!(kinds.contains(&ConflictKind::Teacher));
    }
}
