//! Steam table queries and states.

use std::fmt;

use crate::error::{SteamError, SteamResult};
use vs_core::units::{Pressure, SpecVolume, Temperature, to_k, to_mpa};

/// Input pair for a steam table lookup.
///
/// Mirrors the three ways the sizing formulas query water: on the
/// saturation line by pressure, on the saturation line by temperature, or
/// at an arbitrary pressure/temperature point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteamQuery {
    /// Saturation pressure and vapour quality (0 = liquid, 1 = vapour).
    PressureQuality { p: Pressure, x: f64 },
    /// Saturation temperature and vapour quality.
    TemperatureQuality { t: Temperature, x: f64 },
    /// Single-phase pressure and temperature.
    PressureTemperature { p: Pressure, t: Temperature },
}

impl SteamQuery {
    /// Check the inputs are finite and the quality lies in `0..=1`.
    pub fn validate(&self) -> SteamResult<()> {
        let (first, second) = match *self {
            Self::PressureQuality { p, x } => (to_mpa(p), x),
            Self::TemperatureQuality { t, x } => (to_k(t), x),
            Self::PressureTemperature { p, t } => (to_mpa(p), to_k(t)),
        };
        if !first.is_finite() || !second.is_finite() {
            return Err(SteamError::NonPhysical {
                what: "steam query inputs must be finite",
            });
        }
        match *self {
            Self::PressureQuality { x, .. } | Self::TemperatureQuality { x, .. }
                if !(0.0..=1.0).contains(&x) =>
            {
                Err(SteamError::InvalidArg {
                    what: "quality must be between 0 and 1",
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SteamQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PressureQuality { p, x } => write!(f, "P={:.6} MPa, x={}", to_mpa(p), x),
            Self::TemperatureQuality { t, x } => write!(f, "T={:.3} K, x={}", to_k(t), x),
            Self::PressureTemperature { p, t } => {
                write!(f, "P={:.6} MPa, T={:.3} K", to_mpa(p), to_k(t))
            }
        }
    }
}

/// IAPWS-IF97 region a state was evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Compressed liquid.
    R1,
    /// Superheated vapour.
    R2,
    /// Near-critical liquid/vapour.
    R3,
    /// Two-phase saturation line.
    R4,
}

/// Result of a steam table lookup.
///
/// Carries at least temperature and specific volume; the rest is reported
/// when the backend knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamState {
    pub pressure: Pressure,
    pub temperature: Temperature,
    /// Specific volume [m³/kg].
    pub specific_volume: SpecVolume,
    pub region: Option<Region>,
    pub quality: Option<f64>,
}

impl SteamState {
    pub fn pressure_mpa(&self) -> f64 {
        to_mpa(self.pressure)
    }

    pub fn temperature_k(&self) -> f64 {
        to_k(self.temperature)
    }
}
