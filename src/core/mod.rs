//! Core conversion building blocks: the symbol table, the left-to-right
//! converter and the parameter set that bounds it. These are the primitives
//! consumed by the high-level `api` module.
pub mod convert;
pub mod params;
pub mod symbol;
