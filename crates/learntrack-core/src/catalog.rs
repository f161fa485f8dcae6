//! Catalog: the aggregation root.
//!
//! Owns the student registry and one [`CourseLedger`] per configured
//! course, routes point updates to both, and computes the cross-course
//! statistics, per-course reports, and graduation notification drains.
//!
//! The catalog is built for single-threaded, single-session use and is
//! not safe for concurrent external access: `drain_graduation_notices`
//! requires read-modify-clear atomicity per ledger, so a concurrent port
//! must guard the whole update+query surface with one exclusive lock.

use std::collections::BTreeSet;

use crate::config::CatalogConfig;
use crate::error::TrackerError;
use crate::ledger::CourseLedger;
use crate::model::{Student, StudentId};
use crate::notify::{Notification, NotificationBatch};
use crate::registry::StudentRegistry;
use crate::report::{round_half_up_1dp, CourseReport, ProgressRow, StatisticsSummary};

/// Aggregation root over the student registry and the course ledgers.
#[derive(Debug)]
pub struct Catalog {
    registry: StudentRegistry,
    ledgers: Vec<CourseLedger>,
}

impl Catalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_registry(config, StudentRegistry::new())
    }

    /// Build over an existing registry, for tests that need a fixed id
    /// starting value.
    pub fn with_registry(config: &CatalogConfig, registry: StudentRegistry) -> Self {
        let ledgers = config
            .courses
            .iter()
            .map(|c| CourseLedger::new(c.name.clone(), c.threshold))
            .collect();
        Self { registry, ledgers }
    }

    // -----------------------------------------------------------------
    // Students
    // -----------------------------------------------------------------

    /// Register a new student, assigning the next id.
    ///
    /// The interpreter pre-checks email uniqueness to produce its own
    /// message; the engine still refuses duplicates as a last line.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<StudentId, TrackerError> {
        if self.registry.exists_by_email(email) {
            return Err(TrackerError::DuplicateEmail(email.to_string()));
        }
        Ok(self.registry.register(first_name, last_name, email))
    }

    pub fn exists(&self, id: StudentId) -> bool {
        self.registry.exists(id)
    }

    pub fn exists_by_email(&self, email: &str) -> bool {
        self.registry.exists_by_email(email)
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.registry.get(id)
    }

    /// Registered ids in insertion order.
    pub fn student_ids(&self) -> Vec<StudentId> {
        self.registry.ids().collect()
    }

    pub fn student_count(&self) -> usize {
        self.registry.len()
    }

    // -----------------------------------------------------------------
    // Courses
    // -----------------------------------------------------------------

    /// Course names in canonical catalog order.
    pub fn course_names(&self) -> Vec<String> {
        self.ledgers.iter().map(|l| l.name().to_string()).collect()
    }

    pub fn course_count(&self) -> usize {
        self.ledgers.len()
    }

    pub fn course_exists(&self, name: &str) -> bool {
        self.ledgers.iter().any(|l| l.name() == name)
    }

    pub fn ledger(&self, name: &str) -> Option<&CourseLedger> {
        self.ledgers.iter().find(|l| l.name() == name)
    }

    // -----------------------------------------------------------------
    // Update routing
    // -----------------------------------------------------------------

    /// Apply a point update across every course.
    ///
    /// `amounts` is aligned with the canonical course order. All courses
    /// are always visited, in order, even for zero amounts; each call
    /// independently applies the zero-skip rule, so there is no partial
    /// failure once the id resolves.
    pub fn update(&mut self, id: StudentId, amounts: &[u32]) -> Result<(), TrackerError> {
        if amounts.len() != self.ledgers.len() {
            return Err(TrackerError::AmountsMismatch {
                expected: self.ledgers.len(),
                got: amounts.len(),
            });
        }
        let student = self
            .registry
            .get_mut(id)
            .ok_or(TrackerError::UnknownStudent(id))?;

        for (ledger, &amount) in self.ledgers.iter_mut().zip(amounts) {
            student.increment_grade(ledger.name(), amount);
            ledger.increment_grade(id, amount);
        }
        tracing::debug!(%id, ?amounts, "points updated");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------

    /// Courses with the most students, empty when no course has any.
    pub fn most_popular(&self) -> Vec<String> {
        self.most_by(|l| l.student_count() as f64)
    }

    /// Courses with the fewest students, excluding any course that is
    /// also most popular.
    pub fn least_popular(&self) -> Vec<String> {
        self.least_by(|l| l.student_count() as f64)
    }

    /// Courses with the highest activity counter.
    pub fn most_active(&self) -> Vec<String> {
        self.most_by(|l| l.activity() as f64)
    }

    /// Courses with the lowest activity counter, excluding the most
    /// active ones.
    pub fn least_active(&self) -> Vec<String> {
        self.least_by(|l| l.activity() as f64)
    }

    /// Courses with the highest average points per activity. Higher
    /// average means students complete faster, hence "easiest".
    pub fn easiest(&self) -> Vec<String> {
        self.most_by(CourseLedger::average_points)
    }

    /// Courses with the lowest average points, excluding the easiest
    /// ones.
    pub fn hardest(&self) -> Vec<String> {
        self.least_by(CourseLedger::average_points)
    }

    /// All six statistics at once.
    pub fn statistics(&self) -> StatisticsSummary {
        StatisticsSummary {
            most_popular: self.most_popular(),
            least_popular: self.least_popular(),
            highest_activity: self.most_active(),
            lowest_activity: self.least_active(),
            easiest: self.easiest(),
            hardest: self.hardest(),
        }
    }

    /// All courses whose metric equals the maximum, or empty when the
    /// maximum is zero ("n/a").
    fn most_by(&self, metric: fn(&CourseLedger) -> f64) -> Vec<String> {
        let max = self
            .ledgers
            .iter()
            .map(metric)
            .fold(f64::NEG_INFINITY, f64::max);
        if max <= 0.0 {
            return Vec::new();
        }
        self.ledgers
            .iter()
            .filter(|l| metric(l) == max)
            .map(|l| l.name().to_string())
            .collect()
    }

    /// All courses whose metric equals the minimum, minus the most-set
    /// for the same metric, so the two directions are always disjoint.
    /// A zero minimum means "n/a": courses with no data never rank as
    /// the least extreme.
    fn least_by(&self, metric: fn(&CourseLedger) -> f64) -> Vec<String> {
        let min = self.ledgers.iter().map(metric).fold(f64::INFINITY, f64::min);
        if min <= 0.0 {
            return Vec::new();
        }
        let most = self.most_by(metric);
        self.ledgers
            .iter()
            .filter(|l| metric(l) == min && !most.iter().any(|name| name == l.name()))
            .map(|l| l.name().to_string())
            .collect()
    }

    // -----------------------------------------------------------------
    // Per-course report
    // -----------------------------------------------------------------

    /// Progress rows for every student enrolled in `course`, descending
    /// by points with ties broken by ascending id.
    pub fn course_report(&self, course: &str) -> Result<CourseReport, TrackerError> {
        let ledger = self
            .ledger(course)
            .ok_or_else(|| TrackerError::UnknownCourse(course.to_string()))?;

        let mut rows: Vec<ProgressRow> = ledger
            .grades()
            .iter()
            .map(|(&student_id, &points)| ProgressRow {
                student_id,
                points,
                completion_pct: round_half_up_1dp(
                    f64::from(points) / f64::from(ledger.threshold()) * 100.0,
                ),
            })
            .collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points).then(a.student_id.cmp(&b.student_id)));

        Ok(CourseReport {
            course: ledger.name().to_string(),
            threshold: ledger.threshold(),
            rows,
        })
    }

    // -----------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------

    /// Drain every course's pending graduates, in canonical course
    /// order, into notification records.
    ///
    /// Drain-on-read: a second cycle without new points produces an
    /// empty batch. `distinct_students` counts each student once even
    /// when they graduate several courses in the same cycle.
    pub fn drain_graduation_notices(&mut self) -> NotificationBatch {
        let mut notifications = Vec::new();
        let mut distinct = BTreeSet::new();

        for i in 0..self.ledgers.len() {
            let course = self.ledgers[i].name().to_string();
            let graduates = self.ledgers[i].drain_graduates();
            for id in graduates {
                distinct.insert(id);
                if let Some(student) = self.registry.get(id) {
                    notifications.push(Notification::graduation(
                        &student.email,
                        &student.full_name(),
                        &course,
                    ));
                }
            }
        }

        tracing::debug!(
            records = notifications.len(),
            students = distinct.len(),
            "graduation notices drained"
        );
        NotificationBatch {
            notifications,
            distinct_students: distinct.len(),
        }
    }
}
