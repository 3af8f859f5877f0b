// vs-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

use crate::numeric::round_whole;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Specific volume [m³/kg].
///
/// Not part of the uom set we re-export, so we use f64 with clear documentation.
pub type SpecVolume = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Conversion factors and reference conditions used by the sizing formulas.
///
/// These are the worksheet's own (truncated) factors, not the exact
/// definitions; results must match the worksheet, so keep them as written.
pub mod constants {
    /// Atmospheric pressure added to gauge readings [psi].
    pub const ATMOSPHERE_PSI: f64 = 14.7;

    /// Megapascal per psi.
    pub const MPA_PER_PSI: f64 = 0.006_895;

    /// ft³/lb per m³/kg.
    pub const FT3_LB_PER_M3_KG: f64 = 16.0185;

    /// Width of one Fahrenheit degree in kelvin is 1/1.8.
    pub const FAHRENHEIT_PER_KELVIN: f64 = 1.8;

    /// Freezing point of water [°F].
    pub const WATER_FREEZING_F: f64 = 32.0;

    /// Freezing point of water as the worksheet writes it [K].
    pub const WATER_FREEZING_K: f64 = 273.0;

    /// Offset from Fahrenheit to Rankine.
    pub const RANKINE_OFFSET: f64 = 459.67;

    /// Universal gas constant [ft·lbf/(lbmol·°R)].
    pub const GAS_CONSTANT_FT_LBF: f64 = 1_545.349;

    /// Square inches per square foot.
    pub const IN2_PER_FT2: f64 = 144.0;

    /// Standard temperature for SCF [°R] (60 °F).
    pub const STANDARD_TEMPERATURE_R: f64 = 519.67;

    /// Standard pressure for SCF [psia].
    pub const STANDARD_PRESSURE_PSIA: f64 = 14.73;

    /// US gallons per cubic foot.
    pub const GALLONS_PER_FT3: f64 = 7.481;

    pub const HOURS_PER_DAY: f64 = 24.0;

    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Gauge psi to absolute pressure in MPa, as the steam formulas convert it.
#[inline]
pub fn psig_to_mpa(psig: f64) -> f64 {
    (psig + constants::ATMOSPHERE_PSI) * constants::MPA_PER_PSI
}

/// Fahrenheit to kelvin rounded to the nearest whole kelvin.
///
/// Uses 273 rather than 273.15 for the freezing point, matching the worksheet.
#[inline]
pub fn fahrenheit_to_whole_kelvin(temperature_f: f64) -> f64 {
    round_whole(
        (temperature_f - constants::WATER_FREEZING_F) / constants::FAHRENHEIT_PER_KELVIN
            + constants::WATER_FREEZING_K,
    )
}

#[inline]
pub fn fahrenheit_to_rankine(temperature_f: f64) -> f64 {
    temperature_f + constants::RANKINE_OFFSET
}

/// Gauge psi to absolute psi using the given atmosphere [psia].
#[inline]
pub fn psig_to_psia(psig: f64, atmosphere_psia: f64) -> f64 {
    psig + atmosphere_psia
}

#[inline]
pub fn m3_per_kg_to_ft3_per_lb(v: SpecVolume) -> f64 {
    v * constants::FT3_LB_PER_M3_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        assert!((to_mpa(mpa(1.5)) - 1.5).abs() < 1e-12);
        assert!((to_k(k(373.0)) - 373.0).abs() < 1e-12);
        assert!((to_mpa(pa(101_325.0)) - 0.101_325).abs() < 1e-12);
    }

    #[test]
    fn gauge_zero_is_one_atmosphere() {
        assert!((psig_to_mpa(0.0) - 0.101_356_5).abs() < 1e-12);
        assert!((psig_to_psia(0.0, constants::ATMOSPHERE_PSI) - 14.7).abs() < 1e-12);
    }

    #[test]
    fn boiling_point_is_373_kelvin() {
        assert_eq!(fahrenheit_to_whole_kelvin(212.0), 373.0);
        assert_eq!(fahrenheit_to_whole_kelvin(32.0), 273.0);
    }

    #[test]
    fn rankine_and_volume_factors() {
        assert!((fahrenheit_to_rankine(60.0) - constants::STANDARD_TEMPERATURE_R).abs() < 1e-9);
        assert!((m3_per_kg_to_ft3_per_lb(1.0) - 16.0185).abs() < 1e-12);
    }
}
