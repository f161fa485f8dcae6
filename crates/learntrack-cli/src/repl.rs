//! The interactive command loop.
//!
//! Generic over `BufRead`/`Write` so whole sessions can be scripted in
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use learntrack_core::catalog::Catalog;

use crate::commands;

/// Read one line, with the trailing newline stripped. `None` on EOF.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Run the command loop until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Learning Progress Tracker")?;

    while let Some(line) = read_line(input)? {
        match line.trim() {
            "" => writeln!(out, "No input.")?,
            "add students" => commands::add_students::execute(catalog, input, out)?,
            "list" => commands::list::execute(catalog, out)?,
            "add points" => commands::add_points::execute(catalog, input, out)?,
            "find" => commands::find::execute(catalog, input, out)?,
            "statistics" => commands::statistics::execute(catalog, input, out)?,
            "notify" => commands::notify::execute(catalog, out)?,
            "back" => writeln!(out, "Enter 'exit' to exit the program.")?,
            "exit" => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            other => {
                tracing::debug!(command = other, "unknown command");
                writeln!(out, "Error: unknown command!")?;
            }
        }
    }
    Ok(())
}
