//! The `add students` sub-loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use learntrack_core::catalog::Catalog;

use crate::repl::read_line;
use crate::validate;

pub fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Enter student credentials or 'back' to return")?;
    let mut added = 0usize;

    while let Some(line) = read_line(input)? {
        if line.trim() == "back" {
            break;
        }

        match validate::parse_credentials(&line) {
            Ok(credentials) => {
                if catalog.exists_by_email(&credentials.email) {
                    writeln!(out, "This email is already taken.")?;
                    continue;
                }
                catalog.register(
                    &credentials.first_name,
                    &credentials.last_name,
                    &credentials.email,
                )?;
                added += 1;
                writeln!(out, "The student has been added.")?;
            }
            Err(reason) => writeln!(out, "{reason}")?,
        }
    }

    writeln!(out, "Total {added} students have been added.")?;
    Ok(())
}
