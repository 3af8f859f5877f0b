//! Ideal gas specific volume.

use vs_core::numeric::{ensure_finite, round_to};
use vs_core::units::constants::{ATMOSPHERE_PSI, GAS_CONSTANT_FT_LBF, IN2_PER_FT2};
use vs_core::units::{fahrenheit_to_rankine, psig_to_psia};

use crate::error::{FormulaError, FormulaResult};

/// Specific volume [ft³/lb] of an ideal gas with the given molecular weight
/// at gauge pressure [psig] and temperature [°F].
///
/// ```text
/// v = T_R · (1545.349 / MW) / (144 · P_abs)
/// ```
///
/// Intermediates are rounded to 3 decimals and the result to 6, as the
/// sizing worksheet does.
pub fn gas_volume(
    molecular_weight: f64,
    pressure_psig: f64,
    temperature_f: f64,
) -> FormulaResult<f64> {
    if !molecular_weight.is_finite() || molecular_weight <= 0.0 {
        return Err(FormulaError::InvalidArgument {
            what: format!("molecular weight must be positive and finite, got {molecular_weight}"),
        });
    }
    ensure_finite(pressure_psig, "pressure [psig]")?;
    ensure_finite(temperature_f, "temperature [°F]")?;

    let t_r = round_to(fahrenheit_to_rankine(temperature_f), 3);
    let p_abs = round_to(psig_to_psia(pressure_psig, ATMOSPHERE_PSI), 3);
    if p_abs <= 0.0 {
        return Err(FormulaError::InvalidArgument {
            what: format!("absolute pressure must be positive, got {p_abs} psia"),
        });
    }
    if t_r <= 0.0 {
        return Err(FormulaError::InvalidArgument {
            what: format!("absolute temperature must be positive, got {t_r} °R"),
        });
    }

    let r_specific = round_to(GAS_CONSTANT_FT_LBF / molecular_weight, 3);
    Ok(round_to(t_r * r_specific / (IN2_PER_FT2 * p_abs), 6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn air_at_standard_conditions() {
        let v = gas_volume(28.97, 0.0, 70.0).unwrap();
        assert!((v - 13.347_594).abs() < 1e-9, "v = {v}");
    }

    #[test]
    fn methane_at_line_conditions() {
        let v = gas_volume(16.04, 100.0, 100.0).unwrap();
        assert!((v - 3.264_572).abs() < 1e-9, "v = {v}");
    }

    #[test]
    fn six_decimal_rounding_is_exact() {
        // v * 1e6 is exactly 10209946.5 in f64, but v itself is above the half
        assert_eq!(gas_volume(43.78, 7.8, 477.5).unwrap(), 10.209_947);
    }

    #[test]
    fn result_has_six_decimals() {
        let v = gas_volume(44.01, 35.0, 120.0).unwrap();
        assert!(((v * 1e6).round() - v * 1e6).abs() < 1e-6);
    }

    #[test]
    fn zero_molecular_weight_rejected() {
        assert!(matches!(
            gas_volume(0.0, 0.0, 70.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            gas_volume(-28.97, 0.0, 70.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
        assert!(gas_volume(f64::NAN, 0.0, 70.0).is_err());
    }

    #[test]
    fn vacuum_rejected() {
        assert!(matches!(
            gas_volume(28.97, -14.7, 70.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
    }

    proptest! {
        #[test]
        fn falls_with_pressure(mw in 2.0_f64..100.0, p in 0.0_f64..300.0, t in -40.0_f64..600.0) {
            let low = gas_volume(mw, p, t).unwrap();
            let high = gas_volume(mw, p + 10.0, t).unwrap();
            prop_assert!(high < low);
        }

        #[test]
        fn falls_with_molecular_weight(mw in 2.0_f64..100.0, p in 0.0_f64..300.0, t in -40.0_f64..600.0) {
            let light = gas_volume(mw, p, t).unwrap();
            let heavy = gas_volume(mw + 1.0, p, t).unwrap();
            prop_assert!(heavy < light);
        }

        #[test]
        fn rises_with_temperature(mw in 2.0_f64..100.0, p in 0.0_f64..300.0, t in -40.0_f64..600.0) {
            let cold = gas_volume(mw, p, t).unwrap();
            let hot = gas_volume(mw, p, t + 10.0).unwrap();
            prop_assert!(hot > cold);
        }
    }
}
