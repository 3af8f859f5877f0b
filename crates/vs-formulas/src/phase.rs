//! Steam phase classification.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use vs_core::numeric::{ensure_finite, round_whole};
use vs_core::units::{fahrenheit_to_whole_kelvin, mpa, psig_to_mpa};
use vs_steam::{SteamQuery, SteamTable};

use crate::error::{FormulaError, FormulaResult};

/// Ratio band around the saturation temperature treated as saturated steam.
///
/// Line temperatures are rarely quoted exactly at saturation, so anything
/// within (0.999, 1.01) of T_sat counts as saturated.
pub const SATURATION_BAND_LOW: f64 = 0.999;
pub const SATURATION_BAND_HIGH: f64 = 1.01;

/// Absolute pressure above which sub-saturation water is reported as supercritical [MPa].
pub const SUPERCRITICAL_PRESSURE_MPA: f64 = 22.0;

/// Fluid phase at a service condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseLabel {
    #[cfg_attr(feature = "serde", serde(rename = "Water"))]
    Water,
    #[cfg_attr(feature = "serde", serde(rename = "Saturated Steam"))]
    SaturatedSteam,
    #[cfg_attr(feature = "serde", serde(rename = "Superheated Steam"))]
    SuperheatedSteam,
    #[cfg_attr(feature = "serde", serde(rename = "Supercritical Steam"))]
    SupercriticalSteam,
}

impl PhaseLabel {
    pub const ALL: [PhaseLabel; 4] = [
        PhaseLabel::Water,
        PhaseLabel::SaturatedSteam,
        PhaseLabel::SuperheatedSteam,
        PhaseLabel::SupercriticalSteam,
    ];

    /// The worksheet's label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::SaturatedSteam => "Saturated Steam",
            Self::SuperheatedSteam => "Superheated Steam",
            Self::SupercriticalSteam => "Supercritical Steam",
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhaseLabel {
    type Err = FormulaError;

    /// Exact, case-sensitive match on the four worksheet labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.label() == s)
            .ok_or_else(|| FormulaError::UnrecognizedPhase {
                label: s.to_string(),
            })
    }
}

/// Phase from the ratio of line temperature to saturation temperature.
///
/// The saturated band is open on both ends; superheat starts at exactly 1.01.
pub fn phase_from_ratio(ratio: f64, p_mpa: f64) -> PhaseLabel {
    if SATURATION_BAND_LOW < ratio && ratio < SATURATION_BAND_HIGH {
        PhaseLabel::SaturatedSteam
    } else if ratio >= SATURATION_BAND_HIGH {
        PhaseLabel::SuperheatedSteam
    } else if p_mpa > SUPERCRITICAL_PRESSURE_MPA {
        PhaseLabel::SupercriticalSteam
    } else {
        PhaseLabel::Water
    }
}

/// Classify the phase of water at a gauge pressure [psig] and temperature [°F].
///
/// Both temperatures are compared in whole kelvin. Pressures the steam
/// table cannot saturate (negative absolute, above critical) fail with
/// `FormulaError::PropertyCorrelation`.
pub fn classify(
    table: &dyn SteamTable,
    pressure_psig: f64,
    temperature_f: f64,
) -> FormulaResult<PhaseLabel> {
    ensure_finite(pressure_psig, "pressure [psig]")?;
    ensure_finite(temperature_f, "temperature [°F]")?;

    let p_mpa = psig_to_mpa(pressure_psig);
    let t_k = fahrenheit_to_whole_kelvin(temperature_f);
    let saturation = table.evaluate(SteamQuery::PressureQuality {
        p: mpa(p_mpa),
        x: 1.0,
    })?;
    let t_sat = round_whole(saturation.temperature_k());

    let ratio = t_k / t_sat;
    let phase = phase_from_ratio(ratio, p_mpa);
    debug!(p_mpa, t_k, t_sat, ratio, %phase, "classified steam phase");
    Ok(phase)
}
