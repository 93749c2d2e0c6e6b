use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::generator::PatternSet;

#[derive(Serialize)]
struct PatternDocument<'a> {
    email_patterns: &'a PatternSet,
}

/// Single-object document, 4-space indentation.
pub(crate) fn write_json<W: Write>(
    patterns: &PatternSet,
    out: &mut W,
) -> Result<(), serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(out, formatter);
    PatternDocument {
        email_patterns: patterns,
    }
    .serialize(&mut serializer)
}
