//! Subject model.
//!
//! A subject is a taught course identified by its code (normalized to
//! upper case). It declares how it is taught (lecture, tutorial, lab),
//! its weekly hour volume, and any equipment the room must provide.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::ValidationError;

/// How a subject's sessions are taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionType {
    Lecture,
    Tutorial,
    Lab,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lecture => "lecture",
            Self::Tutorial => "tutorial",
            Self::Lab => "lab",
        };
        f.write_str(name)
    }
}

/// A taught subject. Identity is the (upper-cased) code.
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    code: String,
    name: String,
    session_type: SessionType,
    weekly_hours: i32,
    required_equipment: BTreeSet<String>,
}

impl Subject {
    /// Creates a subject with no equipment requirement.
    ///
    /// The code is upper-cased so `"math101"` and `"MATH101"` denote the
    /// same subject. Fails on blank code/name or non-positive hours.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        session_type: SessionType,
        weekly_hours: i32,
    ) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "subject",
                field: "code",
            });
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "subject",
                field: "name",
            });
        }
        if weekly_hours <= 0 {
            return Err(ValidationError::NonPositiveCount {
                entity: "subject",
                field: "weekly_hours",
                value: weekly_hours,
            });
        }
        Ok(Self {
            code: code.to_uppercase(),
            name,
            session_type,
            weekly_hours,
            required_equipment: BTreeSet::new(),
        })
    }

    /// Adds one required piece of room equipment.
    pub fn with_required_equipment(mut self, item: impl Into<String>) -> Self {
        self.required_equipment.insert(item.into());
        self
    }

    /// Subject code (upper case).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Subject name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How sessions of this subject are taught.
    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Weekly hour volume.
    pub fn weekly_hours(&self) -> i32 {
        self.weekly_hours
    }

    /// Equipment the room must provide.
    pub fn required_equipment(&self) -> &BTreeSet<String> {
        &self.required_equipment
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Subject {}

impl Hash for Subject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.code, self.name, self.session_type)
    }
}
