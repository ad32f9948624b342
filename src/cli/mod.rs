//! Command Line Interface (CLI) layer for numerus.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for argument and file-driven
//! conversion. It wires user-provided options to the library functionality
//! exposed via `numerus::api`.
//!
//! If you are embedding numerus into another application, prefer using
//! the high-level `numerus::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
