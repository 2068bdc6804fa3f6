//! Time slot model.
//!
//! A slot is an immutable (day, start, end) interval within a teaching
//! week. Intervals are half-open: a slot ending at 10:00 does not overlap
//! one starting at 10:00.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::ValidationError;

/// A teaching day. Sunday is not a teaching day and is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// An immutable weekday time interval.
///
/// Equality and hashing cover all three fields, so a slot is a plain
/// value: two slots with the same day and bounds are the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    day: Day,
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot, requiring `start < end`.
    pub fn new(day: Day, start: NaiveTime, end: NaiveTime) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::EmptyTimeRange { start, end });
        }
        Ok(Self { day, start, end })
    }

    /// The teaching day.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Interval start (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Interval end (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether two slots overlap.
    ///
    /// True iff both fall on the same day and the half-open intervals
    /// intersect: `!(end1 <= start2 || end2 <= start1)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.day != other.day {
            return false;
        }
        !(self.end <= other.start || other.end <= self.start)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
