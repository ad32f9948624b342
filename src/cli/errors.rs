use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Conflicting arguments: {first} cannot be combined with {second}")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Numerus(#[from] numerus::Error),
}
