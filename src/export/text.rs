use std::io::{self, Write};

use crate::generator::PatternSet;

/// One address per line, newline-terminated, no trailing metadata.
pub(crate) fn write_text<W: Write>(patterns: &PatternSet, out: &mut W) -> io::Result<()> {
    for address in patterns.iter() {
        writeln!(out, "{address}")?;
    }
    Ok(())
}
