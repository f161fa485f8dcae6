//! Core data model types.
//!
//! A [`Student`] owns its identity, contact info, and per-course point
//! totals. Identifiers are assigned by the registry and never reused.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque student identifier, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered student with accumulated per-course points.
///
/// Absent entries in the points map mean zero points and "not enrolled";
/// totals, once present, only ever increase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Registry-assigned identifier.
    pub id: StudentId,
    /// First name.
    pub first_name: String,
    /// Last name; may be several validated tokens joined by single spaces.
    pub last_name: String,
    /// Email, unique across all students.
    pub email: String,
    /// Accumulated points per course name.
    points: BTreeMap<String, u32>,
}

impl Student {
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            points: BTreeMap::new(),
        }
    }

    /// "First Last" as used in notification bodies.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Add `amount` points for `course`.
    ///
    /// If the student has no entry for `course` and `amount` is zero this
    /// is a no-op and no entry is created. Once an entry exists a zero
    /// amount still counts as present.
    pub fn increment_grade(&mut self, course: &str, amount: u32) {
        if !self.points.contains_key(course) && amount == 0 {
            return;
        }
        *self.points.entry(course.to_string()).or_insert(0) += amount;
    }

    /// Whether the student has a point entry for `course`.
    pub fn is_enrolled_in(&self, course: &str) -> bool {
        self.points.contains_key(course)
    }

    /// Accumulated points for `course`, zero when not enrolled.
    pub fn points_in(&self, course: &str) -> u32 {
        self.points.get(course).copied().unwrap_or(0)
    }
}
