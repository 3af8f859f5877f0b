//! Steam property errors.

use thiserror::Error;

/// Result type for steam property operations.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors that can occur while evaluating a steam table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// Non-finite or non-physical input (NaN, negative absolute pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input outside the validity range of the correlation.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument (e.g. quality outside 0..=1).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Region or query the backend does not implement.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Iterative solve did not converge.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },

    /// External backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}
