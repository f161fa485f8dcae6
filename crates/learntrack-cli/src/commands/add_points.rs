//! The `add points` sub-loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use learntrack_core::catalog::Catalog;
use learntrack_core::model::StudentId;

use crate::repl::read_line;

pub fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Enter an id and points or 'back' to return:")?;
    let expected = catalog.course_count() + 1;

    while let Some(line) = read_line(input)? {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.first() == Some(&"back") {
            return Ok(());
        }
        if tokens.len() != expected {
            writeln!(out, "Incorrect points format")?;
            continue;
        }

        let Ok(id) = tokens[0].parse::<u64>() else {
            writeln!(out, "No student is found for id={}", tokens[0])?;
            continue;
        };
        let id = StudentId(id);
        if !catalog.exists(id) {
            writeln!(out, "No student is found for id={id}")?;
            continue;
        }

        // Negative or non-numeric values fail the unsigned parse.
        let Ok(amounts) = tokens[1..]
            .iter()
            .map(|t| t.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
        else {
            writeln!(out, "Incorrect points format")?;
            continue;
        };

        catalog.update(id, &amounts)?;
        writeln!(out, "Points updated")?;
    }
    Ok(())
}
