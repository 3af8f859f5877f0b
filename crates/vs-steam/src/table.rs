//! Steam table trait and validation helpers.

use crate::error::{SteamError, SteamResult};
use crate::state::{SteamQuery, SteamState};

/// Capability interface for a steam property correlation.
///
/// Implementations must be thread-safe (Send + Sync) and must fail loudly:
/// a query that cannot be evaluated returns an error, never a silent zero
/// or NaN.
pub trait SteamTable: Send + Sync {
    /// Get the table name (for debugging/logging).
    fn name(&self) -> &str;

    /// Evaluate the state described by `query`.
    fn evaluate(&self, query: SteamQuery) -> SteamResult<SteamState>;
}

/// Validation helpers for steam properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure specific volume is positive and finite.
    pub fn validate_specific_volume(v: f64) -> SteamResult<f64> {
        if !v.is_finite() || v <= 0.0 {
            return Err(SteamError::NonPhysical {
                what: "specific volume must be positive and finite",
            });
        }
        Ok(v)
    }

    /// Ensure temperature [K] is positive and finite.
    pub fn validate_temperature(t_k: f64) -> SteamResult<f64> {
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(SteamError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(t_k)
    }

    /// Ensure pressure [MPa] is positive and finite.
    pub fn validate_pressure(p_mpa: f64) -> SteamResult<f64> {
        if !p_mpa.is_finite() || p_mpa <= 0.0 {
            return Err(SteamError::NonPhysical {
                what: "absolute pressure must be positive and finite",
            });
        }
        Ok(p_mpa)
    }
}
