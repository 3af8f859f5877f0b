//! Spreadsheet-callable surface.
//!
//! Phase labels cross this boundary as plain strings, exactly as a
//! worksheet cell holds them. Everything below it works on [`PhaseLabel`].

use tracing::warn;
use vs_steam::{Iapws97, SteamTable};

use crate::error::{FormulaError, FormulaResult};
use crate::phase::{PhaseLabel, classify};
use crate::volume::volume;
use crate::{flow, gas};

static DEFAULT_TABLE: Iapws97 = Iapws97;

/// The four worksheet functions bound to one steam table.
#[derive(Clone, Copy)]
pub struct Formulas<'a> {
    table: &'a dyn SteamTable,
}

impl<'a> Formulas<'a> {
    pub fn new(table: &'a dyn SteamTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a dyn SteamTable {
        self.table
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    /// `SteamType(P, T)`: phase label of water/steam at psig and °F.
    pub fn steam_type(&self, pressure_psig: f64, temperature_f: f64) -> FormulaResult<String> {
        classify(self.table, pressure_psig, temperature_f).map(|phase| phase.label().to_string())
    }

    /// `SteamVolume(phase, P, T)`: specific volume [ft³/lb].
    ///
    /// A label other than the four known phases yields `0.0` and a warning.
    /// Use [`Formulas::steam_volume_strict`] to get the error instead.
    pub fn steam_volume(
        &self,
        phase: &str,
        pressure_psig: f64,
        temperature_f: f64,
    ) -> FormulaResult<f64> {
        match self.steam_volume_strict(phase, pressure_psig, temperature_f) {
            Err(FormulaError::UnrecognizedPhase { label }) => {
                warn!(label = %label, "unrecognized phase label, returning zero volume");
                Ok(0.0)
            }
            other => other,
        }
    }

    pub fn steam_volume_strict(
        &self,
        phase: &str,
        pressure_psig: f64,
        temperature_f: f64,
    ) -> FormulaResult<f64> {
        let phase: PhaseLabel = phase.parse()?;
        volume(self.table, phase, pressure_psig, temperature_f)
    }

    /// `GasVolume(MW, P, T)`. Does not touch the steam table.
    pub fn gas_volume(
        &self,
        molecular_weight: f64,
        pressure_psig: f64,
        temperature_f: f64,
    ) -> FormulaResult<f64> {
        gas::gas_volume(molecular_weight, pressure_psig, temperature_f)
    }

    /// `ScfdToGpm(SCFD, P, T)`. Does not touch the steam table.
    pub fn scfd_to_gpm(&self, scfd: f64, pressure_psig: f64, temperature_f: f64) -> FormulaResult<f64> {
        flow::scfd_to_gpm(scfd, pressure_psig, temperature_f)
    }
}

impl Default for Formulas<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_TABLE)
    }
}

impl std::fmt::Debug for Formulas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formulas")
            .field("table", &self.table.name())
            .finish()
    }
}

/// `SteamType` against the IF97 table.
pub fn steam_type(pressure_psig: f64, temperature_f: f64) -> FormulaResult<String> {
    Formulas::default().steam_type(pressure_psig, temperature_f)
}

/// `SteamVolume` against the IF97 table.
pub fn steam_volume(phase: &str, pressure_psig: f64, temperature_f: f64) -> FormulaResult<f64> {
    Formulas::default().steam_volume(phase, pressure_psig, temperature_f)
}

pub fn gas_volume(molecular_weight: f64, pressure_psig: f64, temperature_f: f64) -> FormulaResult<f64> {
    gas::gas_volume(molecular_weight, pressure_psig, temperature_f)
}

pub fn scfd_to_gpm(scfd: f64, pressure_psig: f64, temperature_f: f64) -> FormulaResult<f64> {
    flow::scfd_to_gpm(scfd, pressure_psig, temperature_f)
}
