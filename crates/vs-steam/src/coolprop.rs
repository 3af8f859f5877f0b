//! CoolProp-based steam table.

use crate::error::{SteamError, SteamResult};
use crate::state::{SteamQuery, SteamState};
use crate::table::{SteamTable, validation};
use rfluids::prelude::*;
use tracing::debug;
use vs_core::units::{k, pa};

/// CoolProp backend for water/steam properties.
///
/// Thread-safe: rfluids Fluid instances are created per query and never shared.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoolPropSteamTable;

impl CoolPropSteamTable {
    /// Create a new CoolProp steam table.
    pub fn new() -> Self {
        Self
    }
}

fn backend_error(query: &SteamQuery, e: impl std::fmt::Display) -> SteamError {
    SteamError::Backend {
        message: format!("rfluids error at {query}: {e}"),
    }
}

impl SteamTable for CoolPropSteamTable {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn evaluate(&self, query: SteamQuery) -> SteamResult<SteamState> {
        query.validate()?;
        let (first, second, quality) = match query {
            SteamQuery::PressureQuality { p, x } => (
                FluidInput::pressure(validation::validate_pressure(p.value)?),
                FluidInput::quality(x),
                Some(x),
            ),
            SteamQuery::TemperatureQuality { t, x } => (
                FluidInput::temperature(validation::validate_temperature(t.value)?),
                FluidInput::quality(x),
                Some(x),
            ),
            SteamQuery::PressureTemperature { p, t } => (
                FluidInput::pressure(validation::validate_pressure(p.value)?),
                FluidInput::temperature(validation::validate_temperature(t.value)?),
                None,
            ),
        };

        let mut fluid = Fluid::from(Pure::Water)
            .in_state(first, second)
            .map_err(|e| backend_error(&query, e))?;
        let rho = fluid.density().map_err(|e| backend_error(&query, e))?;
        let t_k = fluid.temperature().map_err(|e| backend_error(&query, e))?;
        let p_pa = fluid.pressure().map_err(|e| backend_error(&query, e))?;

        let state = SteamState {
            pressure: pa(p_pa),
            temperature: k(validation::validate_temperature(t_k)?),
            specific_volume: validation::validate_specific_volume(1.0 / rho)?,
            region: None,
            quality,
        };
        debug!(table = self.name(), %query, t_k, rho, "steam table lookup");
        Ok(state)
    }
}
