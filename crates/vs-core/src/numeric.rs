use crate::{VsError, VsResult};

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> VsResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VsError::NonFinite { what, value: v })
    }
}

/// Round to the nearest whole number, ties to even.
///
/// The worksheet formulas were written against banker's rounding, so
/// 372.5 K becomes 372 and 373.5 K becomes 374.
pub fn round_whole(v: Real) -> Real {
    v.round_ties_even()
}

/// Round to `places` decimal digits.
///
/// Rounds the exact binary value of `v`, so 10.2099465000000009 goes up to
/// 10.209947 even though `v * 1e6` lands on an exact .5 in f64. Scaling
/// first would lose that information.
pub fn round_to(v: Real, places: u32) -> Real {
    if !v.is_finite() {
        return v;
    }
    format!("{:.*}", places as usize, v).parse().unwrap_or(v)
}
