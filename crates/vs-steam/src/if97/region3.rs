//! Region 3: near-critical states between 623.15 K and the B23 boundary.
//!
//! The basic equation is explicit in density, so pressure/temperature
//! lookups solve `p(ρ, T) = p` for ρ. Below the critical temperature the
//! isotherm has a van der Waals loop; the caller picks the liquid (densest)
//! or vapour (lightest) root.

use super::R_KJ_KG_K;
use crate::error::{SteamError, SteamResult};

/// Reducing density [kg/m³].
const RHO_STAR: f64 = 322.0;
/// Reducing temperature [K].
const T_STAR: f64 = 647.096;

// Density scan used to bracket the root [kg/m³].
const RHO_MIN: f64 = 1.0;
const RHO_MAX: f64 = 800.0;
const RHO_STEP: f64 = 1.0;
const MAX_BISECTIONS: usize = 200;

// Index 0 is the coefficient of the ln δ term.
const I: [i32; 40] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6, 6,
    6, 7, 8, 9, 9, 10, 10, 11,
];
const J: [i32; 40] = [
    0, 0, 1, 2, 7, 10, 12, 23, 2, 6, 15, 17, 0, 2, 6, 7, 22, 26, 0, 2, 4, 16, 26, 0, 2, 4, 26, 1,
    3, 26, 0, 2, 26, 2, 26, 2, 26, 0, 1, 26,
];
const N: [f64; 40] = [
    1.065_807_002_851_3,
    -15.732_845_290_239,
    20.944_396_974_307,
    -7.686_770_787_871_6,
    2.618_594_778_795_4,
    -2.808_078_114_862,
    1.205_336_969_651_7,
    -8.456_681_281_250_2e-3,
    -1.265_431_547_771_4,
    -1.152_440_780_668_1,
    0.885_210_439_843_18,
    -0.642_077_651_816_07,
    0.384_934_601_866_71,
    -0.852_147_088_242_06,
    4.897_228_154_187_7,
    -3.050_261_725_696_5,
    0.039_420_536_879_154,
    0.125_584_084_243_08,
    -0.279_993_296_987_1,
    1.389_979_956_946,
    -2.018_991_502_357,
    -8.214_763_717_396_3e-3,
    -0.475_960_357_349_23,
    0.043_984_074_473_5,
    -0.444_764_354_287_39,
    0.905_720_707_197_33,
    0.705_224_500_879_67,
    0.107_705_126_263_32,
    -0.329_136_232_589_54,
    -0.508_710_620_411_58,
    -0.022_175_400_873_096,
    0.094_260_751_665_092,
    0.164_362_784_479_61,
    -0.013_503_372_241_348,
    -0.014_834_345_352_472,
    5.792_295_362_808_4e-4,
    3.230_890_470_371_1e-3,
    8.096_480_299_621_5e-5,
    -1.655_767_979_503_7e-4,
    -4.492_389_906_181_5e-5,
];

/// Which root of the isotherm to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Liquid,
    Vapour,
}

/// Pressure [MPa] from density [kg/m³] and temperature [K].
pub fn pressure(rho: f64, t_k: f64) -> f64 {
    let delta = rho / RHO_STAR;
    let tau = T_STAR / t_k;
    let phi_delta = N[0] / delta
        + (1..N.len())
            .filter(|&i| I[i] != 0)
            .map(|i| N[i] * I[i] as f64 * delta.powi(I[i] - 1) * tau.powi(J[i]))
            .sum::<f64>();
    rho * R_KJ_KG_K * t_k * delta * phi_delta / 1000.0
}

/// Density [kg/m³] at pressure [MPa] and temperature [K] on the given branch.
pub fn density(p_mpa: f64, t_k: f64, branch: Branch) -> SteamResult<f64> {
    let residual = |rho: f64| pressure(rho, t_k) - p_mpa;

    // Invariant: residual(lo) < 0 <= residual(hi)
    let (mut lo, mut hi) = bracket(&residual, branch).ok_or(SteamError::ConvergenceFailed {
        what: "region 3 density bracket",
    })?;

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if residual(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= 1e-12 * mid {
            break;
        }
    }

    let rho = 0.5 * (lo + hi);
    if !rho.is_finite() || !residual(rho).is_finite() {
        return Err(SteamError::ConvergenceFailed {
            what: "region 3 density",
        });
    }
    Ok(rho)
}

fn bracket(residual: &impl Fn(f64) -> f64, branch: Branch) -> Option<(f64, f64)> {
    match branch {
        Branch::Vapour => {
            let mut rho = RHO_MIN;
            if !(residual(rho) < 0.0) {
                return None;
            }
            while rho < RHO_MAX {
                let next = rho + RHO_STEP;
                if residual(next) >= 0.0 {
                    return Some((rho, next));
                }
                rho = next;
            }
            None
        }
        Branch::Liquid => {
            let mut rho = RHO_MAX;
            if !(residual(rho) > 0.0) {
                return None;
            }
            while rho > RHO_MIN {
                let next = rho - RHO_STEP;
                if residual(next) < 0.0 {
                    return Some((next, rho));
                }
                rho = next;
            }
            None
        }
    }
}
