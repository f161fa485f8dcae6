//! Engine error types.
//!
//! Callers are expected to pre-validate input (ids via [`exists`], emails
//! via [`exists_by_email`], course names via [`course_exists`]), so these
//! errors mostly guard against interpreter bugs rather than user input.
//!
//! [`exists`]: crate::catalog::Catalog::exists
//! [`exists_by_email`]: crate::catalog::Catalog::exists_by_email
//! [`course_exists`]: crate::catalog::Catalog::course_exists

use thiserror::Error;

use crate::model::StudentId;

/// Errors reported by the tracker engine.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An operation addressed a student id that is not registered.
    #[error("no student is found for id={0}")]
    UnknownStudent(StudentId),

    /// An operation addressed a course name outside the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    /// Registration attempted with an email that is already taken.
    #[error("email already taken: {0}")]
    DuplicateEmail(String),

    /// A point update supplied the wrong number of per-course amounts.
    #[error("expected {expected} point values, got {got}")]
    AmountsMismatch { expected: usize, got: usize },
}
