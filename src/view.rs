//! Role-based timetable views.
//!
//! Every user role can consult the timetable; what they see differs.
//! Identity and credentials are a separate concern handled outside this
//! crate, so a view is just the filtering capability.

use crate::models::{Session, Timetable};

/// Capability to consult a timetable.
///
/// Implementations return owned snapshots so callers never observe
/// later mutation of the timetable through a retained reference.
pub trait TimetableView {
    /// The sessions visible to this role, in timetable order.
    fn visible_sessions(&self, timetable: &Timetable) -> Vec<Session>;
}

/// Administrator: sees everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminView;

/// A teacher's own sessions, selected by teacher name.
#[derive(Debug, Clone)]
pub struct TeacherView {
    teacher_name: String,
}

/// A student's group sessions, selected by group name.
#[derive(Debug, Clone)]
pub struct GroupView {
    group_name: String,
}

impl TeacherView {
    pub fn new(teacher_name: impl Into<String>) -> Self {
        Self {
            teacher_name: teacher_name.into(),
        }
    }
}

impl GroupView {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
        }
    }
}

impl TimetableView for AdminView {
    fn visible_sessions(&self, timetable: &Timetable) -> Vec<Session> {
        timetable.sessions().to_vec()
    }
}

impl TimetableView for TeacherView {
    fn visible_sessions(&self, timetable: &Timetable) -> Vec<Session> {
        timetable
            .sessions_for_teacher(&self.teacher_name)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl TimetableView for GroupView {
    fn visible_sessions(&self, timetable: &Timetable) -> Vec<Session> {
        timetable
            .sessions_for_group(&self.group_name)
            .into_iter()
            .cloned()
            .collect()
    }
}
