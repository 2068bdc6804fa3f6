//! Room model.
//!
//! A room is a physical space (lecture hall, tutorial room, or lab) with
//! a seating capacity and a set of installed equipment. Identity is the
//! numeric id: two rooms with the same id are the same room regardless
//! of the other fields.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::ValidationError;

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomKind {
    /// Large lecture hall.
    Amphitheater,
    /// Tutorial (TD) room.
    Tutorial,
    /// Practical-work (TP) lab.
    Lab,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Amphitheater => "amphitheater",
            Self::Tutorial => "tutorial",
            Self::Lab => "lab",
        };
        f.write_str(name)
    }
}

/// A physical room sessions can be scheduled in.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    id: i32,
    name: String,
    capacity: i32,
    kind: RoomKind,
    equipment: BTreeSet<String>,
}

impl Room {
    /// Creates a room with no equipment.
    ///
    /// Fails when the id or capacity is not strictly positive, or the
    /// name is empty/whitespace-only.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        capacity: i32,
        kind: RoomKind,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId {
                entity: "room",
                value: id,
            });
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "room",
                field: "name",
            });
        }
        if capacity <= 0 {
            return Err(ValidationError::NonPositiveCount {
                entity: "room",
                field: "capacity",
                value: capacity,
            });
        }
        Ok(Self {
            id,
            name,
            capacity,
            kind,
            equipment: BTreeSet::new(),
        })
    }

    /// Adds one piece of installed equipment.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.insert(item.into());
        self
    }

    /// Unique room id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Room name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seating capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Room classification.
    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Installed equipment.
    pub fn equipment(&self) -> &BTreeSet<String> {
        &self.equipment
    }

    /// Whether the room can host a group of `headcount` needing
    /// `required_equipment`.
    ///
    /// True iff the headcount fits the capacity and every required item
    /// is installed (an empty requirement always passes).
    pub fn is_compatible(&self, headcount: i32, required_equipment: &BTreeSet<String>) -> bool {
        if headcount > self.capacity {
            return false;
        }
        required_equipment.is_subset(&self.equipment)
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, capacity {})", self.name, self.kind, self.capacity)
    }
}
