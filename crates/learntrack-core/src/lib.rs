//! learntrack-core — Enrollment, grade aggregation, and statistics engine.
//!
//! This crate owns the data model and all aggregation rules: per-student
//! per-course point totals, course completion ("graduation") with
//! fire-once notification drains, and cross-course statistics with
//! deterministic tie-breaking. The interactive command interpreter lives
//! in `learntrack-cli` and drives this engine through [`catalog::Catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod notify;
pub mod registry;
pub mod report;
