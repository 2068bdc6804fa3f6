//! Student group model.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::ValidationError;

/// A group of students following one program. Identity is the numeric id.
#[derive(Debug, Clone, Serialize)]
pub struct StudentGroup {
    id: i32,
    name: String,
    program: String,
    headcount: i32,
    level: Option<String>,
}

impl StudentGroup {
    /// Creates a group with no level annotation.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        program: impl Into<String>,
        headcount: i32,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId {
                entity: "group",
                value: id,
            });
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "group",
                field: "name",
            });
        }
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "group",
                field: "program",
            });
        }
        if headcount <= 0 {
            return Err(ValidationError::NonPositiveCount {
                entity: "group",
                field: "headcount",
                value: headcount,
            });
        }
        Ok(Self {
            id,
            name,
            program,
            headcount,
            level: None,
        })
    }

    /// Sets the academic level (e.g. "L2").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Unique group id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degree program the group belongs to.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Number of students.
    pub fn headcount(&self) -> i32 {
        self.headcount
    }

    /// Academic level, if annotated.
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

impl PartialEq for StudentGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StudentGroup {}

impl Hash for StudentGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for StudentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {} students", self.name, self.program, self.headcount)?;
        if let Some(level) = &self.level {
            write!(f, ", level {level}")?;
        }
        Ok(())
    }
}
