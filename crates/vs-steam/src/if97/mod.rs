//! Native IAPWS-IF97 steam table.
//!
//! Implements the parts of the Industrial Formulation 1997 the sizing
//! formulas need: specific volume in regions 1 (compressed liquid),
//! 2 (vapour) and 3 (near-critical), and the region 4 saturation line.
//! Region 5 (above 1073.15 K) is not implemented and reports
//! `SteamError::NotSupported`.
//!
//! Units inside this module follow the IF97 conventions: MPa, K, m³/kg.

pub mod region1;
pub mod region2;
pub mod region3;
pub mod region4;

use tracing::debug;
use vs_core::units::{k, mpa, to_k, to_mpa};

use crate::error::{SteamError, SteamResult};
use crate::state::{Region, SteamQuery, SteamState};
use crate::table::{SteamTable, validation};
use region3::Branch;

/// Specific gas constant of water [kJ/(kg·K)].
pub const R_KJ_KG_K: f64 = 0.461_526;
/// Critical temperature [K].
pub const T_CRIT_K: f64 = 647.096;
/// Critical pressure [MPa].
pub const P_CRIT_MPA: f64 = 22.064;

/// Boundary temperature between regions 1 and 3 [K].
const T_13_K: f64 = 623.15;
/// Upper temperature of regions 1 to 3 [K].
const T_MAX_K: f64 = 1073.15;
/// Upper pressure of regions 1 to 3 [MPa].
const P_MAX_MPA: f64 = 100.0;

/// Pressure [MPa] on the boundary between regions 2 and 3.
pub fn b23_pressure(t_k: f64) -> f64 {
    348.051_856_289_69 - 1.167_185_987_997_5 * t_k + 1.019_297_003_932_6e-3 * t_k * t_k
}

/// IAPWS-IF97 backend.
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iapws97;

impl Iapws97 {
    pub fn new() -> Self {
        Self
    }

    /// Single-phase region containing (p, T).
    pub fn region(p_mpa: f64, t_k: f64) -> SteamResult<Region> {
        if t_k > T_MAX_K {
            return Err(SteamError::NotSupported {
                what: "IF97 region 5 (T > 1073.15 K)",
            });
        }
        if t_k < region4::T_MIN_K {
            return Err(SteamError::OutOfRange {
                what: "temperature [K]",
                value: t_k,
            });
        }
        if p_mpa > P_MAX_MPA {
            return Err(SteamError::OutOfRange {
                what: "pressure [MPa]",
                value: p_mpa,
            });
        }

        if t_k <= T_13_K {
            if p_mpa >= region4::saturation_pressure(t_k)? {
                Ok(Region::R1)
            } else {
                Ok(Region::R2)
            }
        } else if p_mpa > b23_pressure(t_k) {
            Ok(Region::R3)
        } else {
            Ok(Region::R2)
        }
    }

    fn single_phase(&self, p_mpa: f64, t_k: f64) -> SteamResult<SteamState> {
        let region = Self::region(p_mpa, t_k)?;
        let v = match region {
            Region::R1 => region1::specific_volume(p_mpa, t_k),
            Region::R2 => region2::specific_volume(p_mpa, t_k),
            _ => {
                let branch = if t_k < T_CRIT_K && p_mpa < region4::saturation_pressure(t_k)? {
                    Branch::Vapour
                } else {
                    Branch::Liquid
                };
                1.0 / region3::density(p_mpa, t_k, branch)?
            }
        };
        Ok(SteamState {
            pressure: mpa(p_mpa),
            temperature: k(t_k),
            specific_volume: validation::validate_specific_volume(v)?,
            region: Some(region),
            quality: None,
        })
    }

    /// Two-phase state on the saturation line; volume mixes linearly in quality.
    fn saturated(&self, p_mpa: f64, t_k: f64, x: f64) -> SteamResult<SteamState> {
        let v = if x == 0.0 {
            saturated_volume(p_mpa, t_k, Branch::Liquid)?
        } else if x == 1.0 {
            saturated_volume(p_mpa, t_k, Branch::Vapour)?
        } else {
            let v_liquid = saturated_volume(p_mpa, t_k, Branch::Liquid)?;
            let v_vapour = saturated_volume(p_mpa, t_k, Branch::Vapour)?;
            v_liquid + x * (v_vapour - v_liquid)
        };

        Ok(SteamState {
            pressure: mpa(p_mpa),
            temperature: k(t_k),
            specific_volume: validation::validate_specific_volume(v)?,
            region: Some(Region::R4),
            quality: Some(x),
        })
    }
}

/// Saturated liquid or vapour volume [m³/kg] at a point on the saturation line.
fn saturated_volume(p_mpa: f64, t_k: f64, branch: Branch) -> SteamResult<f64> {
    if t_k <= T_13_K {
        Ok(match branch {
            Branch::Liquid => region1::specific_volume(p_mpa, t_k),
            Branch::Vapour => region2::specific_volume(p_mpa, t_k),
        })
    } else {
        Ok(1.0 / region3::density(p_mpa, t_k, branch)?)
    }
}

impl SteamTable for Iapws97 {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn evaluate(&self, query: SteamQuery) -> SteamResult<SteamState> {
        query.validate()?;
        let state = match query {
            SteamQuery::PressureQuality { p, x } => {
                let p_mpa = validation::validate_pressure(to_mpa(p))?;
                let t_k = region4::saturation_temperature(p_mpa)?;
                self.saturated(p_mpa, t_k, x)?
            }
            SteamQuery::TemperatureQuality { t, x } => {
                let t_k = validation::validate_temperature(to_k(t))?;
                let p_mpa = region4::saturation_pressure(t_k)?;
                self.saturated(p_mpa, t_k, x)?
            }
            SteamQuery::PressureTemperature { p, t } => {
                let p_mpa = validation::validate_pressure(to_mpa(p))?;
                let t_k = validation::validate_temperature(to_k(t))?;
                self.single_phase(p_mpa, t_k)?
            }
        };
        debug!(
            table = self.name(),
            %query,
            t_k = state.temperature_k(),
            v_m3_kg = state.specific_volume,
            "steam table lookup"
        );
        Ok(state)
    }
}
