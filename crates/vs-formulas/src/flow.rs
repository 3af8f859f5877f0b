//! Standard gas flow to an equivalent liquid-style flow rate.

use vs_core::numeric::ensure_finite;
use vs_core::units::constants::{
    GALLONS_PER_FT3, HOURS_PER_DAY, MINUTES_PER_HOUR, RANKINE_OFFSET, STANDARD_PRESSURE_PSIA,
    STANDARD_TEMPERATURE_R,
};

use crate::error::{FormulaError, FormulaResult};

/// Convert a standard gas flow [SCFD] at line pressure [psig] and
/// temperature [°F] into gallons per minute of actual volume.
///
/// Standard conditions are 519.67 °R and 14.73 psia. The line pressure is
/// made absolute with the same 14.73 offset, and the actual flow divides the
/// standard flow by both the pressure and the temperature ratio. No
/// intermediate rounding is applied.
pub fn scfd_to_gpm(scfd: f64, pressure_psig: f64, temperature_f: f64) -> FormulaResult<f64> {
    ensure_finite(scfd, "flow [SCFD]")?;
    ensure_finite(pressure_psig, "pressure [psig]")?;
    ensure_finite(temperature_f, "temperature [°F]")?;

    let p_abs = pressure_psig + STANDARD_PRESSURE_PSIA;
    if p_abs <= 0.0 {
        return Err(FormulaError::InvalidArgument {
            what: format!("absolute pressure must be positive, got {p_abs} psia"),
        });
    }
    let t_abs = temperature_f + RANKINE_OFFSET;
    if t_abs <= 0.0 {
        return Err(FormulaError::InvalidArgument {
            what: format!("absolute temperature must be positive, got {t_abs} °R"),
        });
    }

    let scfm = scfd / HOURS_PER_DAY / MINUTES_PER_HOUR;
    let correction = (p_abs / STANDARD_PRESSURE_PSIA) * (STANDARD_TEMPERATURE_R / t_abs);
    let acfm = scfm / correction;
    let gpm = acfm * GALLONS_PER_FT3;

    if gpm.is_finite() {
        Ok(gpm)
    } else {
        Err(FormulaError::InvalidArgument {
            what: format!(
                "flow conversion is undefined at {pressure_psig} psig and {temperature_f} °F"
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn million_scfd_at_100_psig() {
        let gpm = scfd_to_gpm(1.0e6, 100.0, 60.0).unwrap();
        assert!((gpm - 666.995_518_463_639_4).abs() < 1e-9, "gpm = {gpm}");
    }

    #[test]
    fn million_scfd_at_zero_gauge() {
        let gpm = scfd_to_gpm(1.0e6, 0.0, 60.0).unwrap();
        assert!((gpm - 5_195.138_888_888_89).abs() < 1e-8, "gpm = {gpm}");
    }

    #[test]
    fn zero_flow_is_zero() {
        assert_eq!(scfd_to_gpm(0.0, 100.0, 60.0).unwrap(), 0.0);
        assert_eq!(scfd_to_gpm(0.0, 250.0, 400.0).unwrap(), 0.0);
    }

    #[test]
    fn scales_linearly_with_flow() {
        let one = scfd_to_gpm(1.0e5, 75.0, 120.0).unwrap();
        let ten = scfd_to_gpm(1.0e6, 75.0, 120.0).unwrap();
        assert!((ten - 10.0 * one).abs() < 1e-9 * ten);
    }

    #[test]
    fn gauge_offset_at_full_vacuum_fails() {
        assert!(matches!(
            scfd_to_gpm(1.0e6, -STANDARD_PRESSURE_PSIA, 60.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn absolute_zero_temperature_fails() {
        assert!(matches!(
            scfd_to_gpm(1.0e6, 0.0, -RANKINE_OFFSET),
            Err(FormulaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            scfd_to_gpm(1.0e6, 0.0, -500.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn below_full_vacuum_fails() {
        assert!(matches!(
            scfd_to_gpm(1.0e6, -20.0, 60.0),
            Err(FormulaError::InvalidArgument { .. })
        ));
        // Zero flow is still rejected when the line state is impossible
        assert!(scfd_to_gpm(0.0, 0.0, -RANKINE_OFFSET).is_err());
    }

    #[test]
    fn non_finite_inputs_fail() {
        assert!(scfd_to_gpm(f64::NAN, 0.0, 60.0).is_err());
        assert!(scfd_to_gpm(1.0, f64::INFINITY, 60.0).is_err());
    }
}
