//! Specific volume lookup for a classified steam phase.

use tracing::debug;
use vs_core::numeric::ensure_finite;
use vs_core::units::{fahrenheit_to_whole_kelvin, k, m3_per_kg_to_ft3_per_lb, mpa, psig_to_mpa};
use vs_steam::{SteamQuery, SteamTable};

use crate::error::FormulaResult;
use crate::phase::PhaseLabel;

/// Steam table query used for each phase.
///
/// Water is looked up as saturated liquid at the line temperature; the
/// line pressure plays no part.
pub fn volume_query(phase: PhaseLabel, pressure_psig: f64, temperature_f: f64) -> SteamQuery {
    let p = mpa(psig_to_mpa(pressure_psig));
    let t = k(fahrenheit_to_whole_kelvin(temperature_f));
    match phase {
        PhaseLabel::SaturatedSteam => SteamQuery::PressureQuality { p, x: 1.0 },
        PhaseLabel::SuperheatedSteam | PhaseLabel::SupercriticalSteam => {
            SteamQuery::PressureTemperature { p, t }
        }
        PhaseLabel::Water => SteamQuery::TemperatureQuality { t, x: 0.0 },
    }
}

/// Specific volume [ft³/lb] of `phase` at gauge pressure [psig] and temperature [°F].
pub fn volume(
    table: &dyn SteamTable,
    phase: PhaseLabel,
    pressure_psig: f64,
    temperature_f: f64,
) -> FormulaResult<f64> {
    ensure_finite(pressure_psig, "pressure [psig]")?;
    ensure_finite(temperature_f, "temperature [°F]")?;

    let query = volume_query(phase, pressure_psig, temperature_f);
    let state = table.evaluate(query)?;
    let v = m3_per_kg_to_ft3_per_lb(state.specific_volume);
    debug!(%phase, %query, v_ft3_lb = v, "steam volume");
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;
    use vs_core::units::to_k;
    use vs_steam::{Iapws97, SteamError};

    #[test]
    fn water_ignores_pressure() {
        let low = volume_query(PhaseLabel::Water, 0.0, 212.0);
        let high = volume_query(PhaseLabel::Water, 300.0, 212.0);
        assert_eq!(low, high);
        match low {
            SteamQuery::TemperatureQuality { t, x } => {
                assert_eq!(to_k(t), 373.0);
                assert_eq!(x, 0.0);
            }
            other => panic!("unexpected query {other:?}"),
        }
    }

    #[test]
    fn superheated_and_supercritical_share_a_query() {
        assert_eq!(
            volume_query(PhaseLabel::SuperheatedSteam, 3180.0, 700.0),
            volume_query(PhaseLabel::SupercriticalSteam, 3180.0, 700.0)
        );
    }

    #[test]
    fn saturated_steam_at_atmosphere() {
        let table = Iapws97::new();
        let v = volume(&table, PhaseLabel::SaturatedSteam, 0.0, 212.0).unwrap();
        // vg at 14.7 psia ≈ 26.8 ft³/lb
        assert!((v - 26.795_9).abs() < 1e-3, "v = {v}");
    }

    #[test]
    fn correlation_failure_is_an_error() {
        let table = Iapws97::new();
        let err = volume(&table, PhaseLabel::SaturatedSteam, -20.0, 212.0).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::PropertyCorrelation(SteamError::NonPhysical { .. })
        ));
    }
}
