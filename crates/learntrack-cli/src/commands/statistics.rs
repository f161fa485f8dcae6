//! The `statistics` command: six cross-course rankings plus an
//! interactive per-course detail view.

use std::io::{BufRead, Write};

use anyhow::Result;
use learntrack_core::catalog::Catalog;

use crate::repl::read_line;

pub fn execute<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Type the name of a course to see details or 'back' to quit")?;

    let stats = catalog.statistics();
    writeln!(out, "Most popular: {}", render(&stats.most_popular))?;
    writeln!(out, "Least popular: {}", render(&stats.least_popular))?;
    writeln!(out, "Highest activity: {}", render(&stats.highest_activity))?;
    writeln!(out, "Lowest activity: {}", render(&stats.lowest_activity))?;
    writeln!(out, "Easiest course: {}", render(&stats.easiest))?;
    writeln!(out, "Hardest course: {}", render(&stats.hardest))?;

    while let Some(line) = read_line(input)? {
        let course = line.trim();
        if course == "back" {
            return Ok(());
        }

        match catalog.course_report(course) {
            Ok(report) => {
                writeln!(out, "{}", report.course)?;
                writeln!(out, "id points completed")?;
                for row in &report.rows {
                    writeln!(
                        out,
                        "{} {} {:.1}%",
                        row.student_id, row.points, row.completion_pct
                    )?;
                }
            }
            Err(_) => writeln!(out, "Unknown course")?,
        }
    }
    Ok(())
}

fn render(names: &[String]) -> String {
    if names.is_empty() {
        "n/a".to_string()
    } else {
        names.join(" ")
    }
}
