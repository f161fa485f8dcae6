//! The `list` command: all registered ids in insertion order.

use std::io::Write;

use anyhow::Result;
use learntrack_core::catalog::Catalog;

pub fn execute<W: Write>(catalog: &Catalog, out: &mut W) -> Result<()> {
    if catalog.student_count() == 0 {
        writeln!(out, "No students found")?;
        return Ok(());
    }

    writeln!(out, "Students:")?;
    for id in catalog.student_ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}
