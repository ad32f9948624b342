use std::io::Write;

use crate::error::Result;
use crate::types::Conversion;

/// One line per record: the value, or the diagnostic message.
pub fn write_text<W: Write>(out: &mut W, conversions: &[Conversion]) -> Result<()> {
    for conversion in conversions {
        match (&conversion.value, &conversion.error) {
            (Some(value), _) => writeln!(out, "{}", value)?,
            (None, Some(error)) => writeln!(out, "{}", error)?,
            (None, None) => writeln!(out)?,
        }
    }
    out.flush()?;
    Ok(())
}
