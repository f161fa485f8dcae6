//! The `notify` command: drain pending graduates and print one notice
//! per (student, course).

use std::io::Write;

use anyhow::Result;
use learntrack_core::catalog::Catalog;

pub fn execute<W: Write>(catalog: &mut Catalog, out: &mut W) -> Result<()> {
    let batch = catalog.drain_graduation_notices();

    for notice in &batch.notifications {
        writeln!(out, "To: {}", notice.to)?;
        writeln!(out, "Re: {}", notice.subject)?;
        writeln!(out, "{}", notice.body)?;
    }
    writeln!(
        out,
        "Total {} students have been notified.",
        batch.distinct_students
    )?;
    Ok(())
}
