//! Graduation notification records.

use serde::{Deserialize, Serialize};

/// Subject line used for every graduation notice.
pub const SUBJECT: &str = "Your Learning Progress";

/// One notification addressed to a single student about a single course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Recipient email.
    pub to: String,
    pub subject: String,
    /// Templated completion message naming the student and course.
    pub body: String,
}

impl Notification {
    pub fn graduation(email: &str, full_name: &str, course: &str) -> Self {
        Self {
            to: email.to_string(),
            subject: SUBJECT.to_string(),
            body: format!("Hello, {full_name}! You have accomplished our {course} course!"),
        }
    }
}

/// The result of one notification cycle across all courses.
///
/// A student graduating two courses in the same cycle produces two
/// records but counts once in `distinct_students`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationBatch {
    pub notifications: Vec<Notification>,
    pub distinct_students: usize,
}
