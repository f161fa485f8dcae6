//! Student registry: identity assignment and student storage.

use std::collections::BTreeMap;

use crate::model::{Student, StudentId};

/// Owns student records and the monotonic id counter.
///
/// Identifiers are assigned sequentially starting from the construction
/// value and are never reused. Iteration order is ascending id, which for
/// a monotonic counter is also insertion order.
#[derive(Debug)]
pub struct StudentRegistry {
    next_id: u64,
    students: BTreeMap<StudentId, Student>,
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRegistry {
    /// Registry whose first assigned id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Registry whose first assigned id is `first_id`, for reproducible
    /// tests.
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            students: BTreeMap::new(),
        }
    }

    /// Create and store a new student, returning its id.
    ///
    /// The caller guarantees the email is not already in use; this method
    /// does not re-validate.
    pub fn register(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> StudentId {
        let id = StudentId(self.next_id);
        self.next_id += 1;
        let student = Student::new(id, first_name, last_name, email);
        tracing::debug!(%id, email = %student.email, "registered student");
        self.students.insert(id, student);
        id
    }

    pub fn exists(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    pub fn exists_by_email(&self, email: &str) -> bool {
        self.students.values().any(|s| s.email == email)
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    /// All registered ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.students.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
