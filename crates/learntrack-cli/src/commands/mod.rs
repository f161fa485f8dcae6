//! One module per interactive command.

pub mod add_points;
pub mod add_students;
pub mod find;
pub mod list;
pub mod notify;
pub mod statistics;
