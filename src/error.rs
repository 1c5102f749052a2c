//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by loading, scheduling, and reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more processes failed validation before scheduling.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Metrics were requested for a schedule with no records.
    #[error("cannot compute metrics for an empty schedule")]
    EmptySchedule,

    /// A metric total does not fit in a tick counter.
    #[error("{0} overflows the tick counter")]
    MetricOverflow(&'static str),

    /// Input text could not be parsed (fatal loader errors only).
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Policy name not recognized.
    #[error("unknown scheduling policy '{0}' (expected 'fcfs' or 'sjf')")]
    UnknownPolicy(String),

    /// Configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}
