//! Directory Data Types
//!
//! Identifiers and records stored in the directory. `Student` is a validated value
//! object: the only ways to obtain one are `Student::new`, deserialization (which calls
//! `Student::new`) and `Student::apply`, so every stored record satisfies its invariants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejections produced while building identifiers and records from client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text attribute is empty or only whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The identifier is not a positive integer.
    #[error("student_id must be a positive integer, got {0:?}")]
    InvalidId(String),
}

/// Key of a record in the directory. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u64);

impl StudentId {
    pub fn new(raw: u64) -> Result<Self, ValidationError> {
        if raw == 0 {
            return Err(ValidationError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student record as stored in the directory and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentDraft")]
pub struct Student {
    name: String,
    age: u32,
    year: String,
}

/// Unchecked wire shape of a `Student`, only used on the way in.
#[derive(Deserialize)]
struct StudentDraft {
    name: String,
    age: u32,
    year: String,
}

impl TryFrom<StudentDraft> for Student {
    type Error = ValidationError;

    fn try_from(draft: StudentDraft) -> Result<Self, Self::Error> {
        Student::new(draft.name, draft.age, draft.year)
    }
}

impl Student {
    /// Builds a record, rejecting empty `name` or `year`.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        year: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let year = year.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if year.trim().is_empty() {
            return Err(ValidationError::EmptyField("year"));
        }

        Ok(Self { name, age, year })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns a copy of this record with every field set in `patch` replaced.
    ///
    /// Fields the patch leaves unset keep their current value. The merged record goes
    /// through the same validation as `Student::new`.
    pub fn apply(&self, patch: &StudentPatch) -> Result<Self, ValidationError> {
        Student::new(
            patch.name.clone().unwrap_or_else(|| self.name.clone()),
            patch.age.unwrap_or(self.age),
            patch.year.clone().unwrap_or_else(|| self.year.clone()),
        )
    }
}

/// Partial update payload. Absent and `null` fields are both treated as "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub year: Option<String>,
}
