//! Export of a candidate set to disk.
//!
//! The public entry point is [`export_patterns`], which serializes a
//! [`PatternSet`] to one of the three supported formats and writes the file
//! in a single pass, overwriting any previous content at the path.

mod error;
mod format;
mod json;
mod text;
mod xml;

pub use error::ExportError;
pub use format::ExportFormat;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::generator::PatternSet;

/// Writes `patterns` to `path` in `format`.
///
/// The file is created (or truncated) first; a failure while writing
/// surfaces as [`ExportError`] and may leave a partial file behind.
pub fn export_patterns(
    patterns: &PatternSet,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
    let mut out = BufWriter::new(file);

    match format {
        ExportFormat::Text => {
            text::write_text(patterns, &mut out).map_err(|source| ExportError::io(path, source))?;
        }
        ExportFormat::Json => {
            json::write_json(patterns, &mut out)
                .map_err(|source| ExportError::json(path, source))?;
        }
        ExportFormat::Xml => {
            xml::write_xml(patterns, &mut out).map_err(|source| ExportError::xml(path, source))?;
        }
    }

    out.flush().map_err(|source| ExportError::io(path, source))?;
    tracing::info!(
        "exported {} addresses to {} ({format})",
        patterns.len(),
        path.display()
    );
    Ok(())
}
