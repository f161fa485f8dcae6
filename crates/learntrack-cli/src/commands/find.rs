//! The `find` sub-loop: look up a student's per-course points.

use std::io::{BufRead, Write};

use anyhow::Result;
use learntrack_core::catalog::Catalog;
use learntrack_core::model::StudentId;

use crate::repl::read_line;

pub fn execute<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Enter an id or 'back' to return")?;
    let courses = catalog.course_names();

    while let Some(line) = read_line(input)? {
        let token = line.trim();
        if token == "back" {
            return Ok(());
        }

        let student = token
            .parse::<u64>()
            .ok()
            .and_then(|id| catalog.student(StudentId(id)));
        match student {
            Some(student) => {
                let points: Vec<String> = courses
                    .iter()
                    .map(|course| format!("{course}={}", student.points_in(course)))
                    .collect();
                writeln!(out, "{} points: {}", student.id, points.join("; "))?;
            }
            None => writeln!(out, "No student is found for id={token}")?,
        }
    }
    Ok(())
}
