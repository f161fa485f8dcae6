//! Per-course point ledger.
//!
//! One ledger per catalog course. Tracks per-student totals, an activity
//! counter (number of non-skipped increments), and the set of students
//! that newly crossed the completion threshold since the last drain.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::StudentId;

/// Point ledger for a single course.
#[derive(Debug)]
pub struct CourseLedger {
    name: String,
    threshold: u32,
    grades: BTreeMap<StudentId, u32>,
    pending_graduates: BTreeSet<StudentId>,
    activity: u64,
}

impl CourseLedger {
    pub fn new(name: impl Into<String>, threshold: u32) -> Self {
        Self {
            name: name.into(),
            threshold,
            grades: BTreeMap::new(),
            pending_graduates: BTreeSet::new(),
            activity: 0,
        }
    }

    /// Add `amount` points for a student.
    ///
    /// If the student has no entry and `amount` is zero this returns with
    /// no side effects at all: no entry, no activity. Otherwise the
    /// activity counter increases by one, the total increases by `amount`
    /// (entry created at `amount` if absent), and when the new total
    /// reaches the threshold the id joins the pending-graduation set.
    pub fn increment_grade(&mut self, id: StudentId, amount: u32) {
        if !self.grades.contains_key(&id) && amount == 0 {
            return;
        }

        self.activity += 1;
        let total = self.grades.entry(id).or_insert(0);
        *total += amount;

        if *total >= self.threshold {
            self.pending_graduates.insert(id);
        }
    }

    /// Take the pending-graduation set, clearing it.
    ///
    /// Drain-on-read: each crossing is observed exactly once, so a second
    /// call without intervening increments returns an empty set.
    pub fn drain_graduates(&mut self) -> BTreeSet<StudentId> {
        std::mem::take(&mut self.pending_graduates)
    }

    /// Total points across all students divided by the activity counter.
    ///
    /// Zero activity is defined as a zero average rather than a division
    /// fault.
    pub fn average_points(&self) -> f64 {
        if self.activity == 0 {
            return 0.0;
        }
        self.total_points() as f64 / self.activity as f64
    }

    pub fn total_points(&self) -> u64 {
        self.grades.values().map(|&p| u64::from(p)).sum()
    }

    /// Number of students with a point entry in this course.
    pub fn student_count(&self) -> usize {
        self.grades.len()
    }

    /// Number of non-skipped increment operations ever applied.
    pub fn activity(&self) -> u64 {
        self.activity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Read view of per-student totals.
    pub fn grades(&self) -> &BTreeMap<StudentId, u32> {
        &self.grades
    }
}
