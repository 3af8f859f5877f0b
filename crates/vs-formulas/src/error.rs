//! Formula errors.

use thiserror::Error;
use vs_core::VsError;
use vs_steam::SteamError;

/// Result type for the sizing formulas.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Errors surfaced by the sizing formulas.
///
/// Nothing is retried: every formula is either closed-form or a single
/// steam table query, so a failure goes straight back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// Rejected before any computation (e.g. molecular weight <= 0).
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    /// The steam table could not evaluate the requested state.
    #[error("Property correlation failure: {0}")]
    PropertyCorrelation(#[from] SteamError),

    /// A phase label that is not one of the four known labels.
    #[error("Unrecognized phase label: {label:?}")]
    UnrecognizedPhase { label: String },
}

impl From<VsError> for FormulaError {
    fn from(err: VsError) -> Self {
        FormulaError::InvalidArgument {
            what: err.to_string(),
        }
    }
}
