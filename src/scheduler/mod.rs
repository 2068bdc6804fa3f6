//! Automatic timetable generation.
//!
//! Provides the greedy first-fit scheduler that places (subject, teacher,
//! group) demands into a [`Timetable`](crate::models::Timetable).

mod greedy;

pub use greedy::{Demand, Scheduler};
