//! Error types for the form core

use thiserror::Error;

/// Errors raised by a Field Model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("form '{form}' has no field named '{field}'")]
    UnknownField { form: &'static str, field: String },
}

/// Failure reported by a submission sink
#[allow(dead_code)] // The stub sink never fails; real backends do
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission destination unavailable: {0}")]
    Unavailable(String),

    /// The sink task ended without reporting an outcome
    #[error("submission aborted before completion")]
    Aborted,
}

/// Why a submit attempt ended in the error state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Input was rejected locally; no sink call was made
    #[error("validation")]
    Validation,

    #[error(transparent)]
    Sink(#[from] SinkError),
}
