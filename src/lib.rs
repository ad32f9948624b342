#![doc = r#"
numerus — Roman numeral to integer conversion.

This crate converts Roman numeral strings (`"MCMXCIV"`) into integers (`1994`) with a
single left-to-right scan. It powers the `numerus` CLI and can be embedded in your
own Rust applications.

Accepted input
--------------
- Between 1 and 15 characters (the bound is configurable through
  [`ConversionParams::max_len`]).
- Only the upper-case symbols `I V X L C D M`.
- Numeral grammar is not checked: `"IIII"` converts to `4` and `"VX"` to `5`.

Quick start
-----------
```rust
fn main() -> numerus::Result<()> {
    assert_eq!(numerus::convert("III")?, 3);
    assert_eq!(numerus::convert("LVIII")?, 58);
    assert_eq!(numerus::convert("MCMXCIV")?, 1994);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use numerus::{convert_file_to_path, ConversionParams, OutputFormat};

fn main() -> numerus::Result<()> {
    let params = ConversionParams {
        format: OutputFormat::Json,
        ..Default::default()
    };

    let report = convert_file_to_path(
        Path::new("numerals.txt"),
        Path::new("values.json"),
        &params,
    )?;

    println!("converted={} failed={}", report.converted, report.failed);
    Ok(())
}
```

Error handling
--------------
All public functions return `numerus::Result<T>`; match on `numerus::Error` to
tell a bad numeral apart from an I/O or config problem.

```rust
use numerus::{convert, Error};

match convert("XIZ") {
    Ok(value) => println!("{value}"),
    Err(Error::OutOfRange { len, max }) => eprintln!("length {len} not below {max}"),
    Err(Error::InvalidSymbol { symbol, position }) => {
        eprintln!("{symbol:?} at {position} is not a Roman symbol")
    }
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — symbol table, converter and parameters.
- [`types`] — `Symbol`, `OutputFormat` and the `Conversion` record.
- [`io`] — numeral file reader and text/JSON writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::convert::{convert, convert_with};
pub use crate::core::params::{ConversionParams, MAX_CONFIGURABLE_LEN, MAX_INPUT_LEN};
pub use crate::core::symbol::symbol_value;
pub use error::{Error, Result};
pub use types::{Conversion, OutputFormat, Symbol};

pub use api::{BatchReport, convert_all, convert_batch, convert_file_to_path};
