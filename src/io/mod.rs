//! I/O layer for batch conversion.
//! Provides the line-oriented numeral `reader` and the text/JSON `writers`
//! used to emit conversion records.
pub mod reader;
pub use reader::{parse_numerals, read_numerals};

pub mod writers;
pub use writers::write_conversions;
