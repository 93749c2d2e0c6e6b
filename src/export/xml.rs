use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::generator::PatternSet;

/// `EmailPatterns` root with one `Email` element per address, preceded by
/// the standard UTF-8 declaration.
pub(crate) fn write_xml<W: Write>(
    patterns: &PatternSet,
    out: &mut W,
) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new(out);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("EmailPatterns")))?;
    for address in patterns.iter() {
        writer.write_event(Event::Start(BytesStart::new("Email")))?;
        writer.write_event(Event::Text(BytesText::new(address)))?;
        writer.write_event(Event::End(BytesEnd::new("Email")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("EmailPatterns")))?;

    Ok(())
}
