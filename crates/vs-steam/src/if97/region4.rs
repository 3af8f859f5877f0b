//! Region 4: the saturation line, 273.15 K to the critical point.

use crate::error::{SteamError, SteamResult};

pub const T_MIN_K: f64 = 273.15;
pub const P_MIN_MPA: f64 = 611.213e-6;

const N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Saturation pressure [MPa] at temperature [K].
pub fn saturation_pressure(t_k: f64) -> SteamResult<f64> {
    if !(T_MIN_K..=super::T_CRIT_K).contains(&t_k) {
        return Err(SteamError::OutOfRange {
            what: "saturation temperature [K]",
            value: t_k,
        });
    }
    let theta = t_k + N[8] / (t_k - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    let p = (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4);
    finite(p, "saturation pressure")
}

/// Saturation temperature [K] at pressure [MPa].
pub fn saturation_temperature(p_mpa: f64) -> SteamResult<f64> {
    if !(P_MIN_MPA..=super::P_CRIT_MPA).contains(&p_mpa) {
        return Err(SteamError::OutOfRange {
            what: "saturation pressure [MPa]",
            value: p_mpa,
        });
    }
    let beta = p_mpa.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    let t = (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0;
    finite(t, "saturation temperature")
}

fn finite(v: f64, what: &'static str) -> SteamResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SteamError::ConvergenceFailed { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        let err = (actual - expected).abs();
        assert!(err <= tol, "actual={actual}, expected={expected}, abs_err={err}");
    }

    #[test]
    fn saturation_pressure_reference_points() {
        assert_close(saturation_pressure(300.0).unwrap(), 0.353_658_941e-2, 1e-11);
        assert_close(saturation_pressure(500.0).unwrap(), 0.263_889_776e1, 1e-8);
        assert_close(saturation_pressure(600.0).unwrap(), 0.123_443_146e2, 1e-7);
    }

    #[test]
    fn saturation_temperature_reference_points() {
        assert_close(saturation_temperature(0.1).unwrap(), 0.372_755_919e3, 1e-6);
        assert_close(saturation_temperature(1.0).unwrap(), 0.453_035_632e3, 1e-6);
        assert_close(saturation_temperature(10.0).unwrap(), 0.584_149_488e3, 1e-6);
    }

    #[test]
    fn round_trip() {
        for t in [300.0, 373.15, 450.0, 600.0, 640.0] {
            let p = saturation_pressure(t).unwrap();
            assert_close(saturation_temperature(p).unwrap(), t, 1e-7);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            saturation_temperature(-0.05),
            Err(SteamError::OutOfRange { .. })
        ));
        assert!(matches!(
            saturation_temperature(25.0),
            Err(SteamError::OutOfRange { .. })
        ));
        assert!(matches!(
            saturation_pressure(273.0),
            Err(SteamError::OutOfRange { .. })
        ));
        assert!(saturation_pressure(f64::NAN).is_err());
    }
}
