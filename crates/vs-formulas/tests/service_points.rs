//! Formula checks at typical valve service points.
//!
//! Volumes are steam-table figures converted to ft³/lb.

use proptest::prelude::*;
use vs_formulas::udf;
use vs_formulas::{Formulas, FormulaError, PhaseLabel, classify, gas_volume, scfd_to_gpm, volume};
use vs_steam::{Iapws97, SteamError};

fn assert_rel_close(actual: f64, expected: f64, rel: f64) {
    let err = ((actual - expected) / expected).abs();
    assert!(
        err <= rel,
        "actual={actual}, expected={expected}, rel_err={err}, rel_tol={rel}"
    );
}

fn steam_point(pressure_psig: f64, temperature_f: f64) -> (PhaseLabel, f64) {
    let table = Iapws97::new();
    let phase = classify(&table, pressure_psig, temperature_f).unwrap();
    let v = volume(&table, phase, pressure_psig, temperature_f).unwrap();
    (phase, v)
}

#[test]
fn atmospheric_boiling_point() {
    let (phase, v) = steam_point(0.0, 212.0);
    assert_eq!(phase, PhaseLabel::SaturatedSteam);
    assert_rel_close(v, 26.795_89, 1e-4);
}

#[test]
fn saturated_plant_headers() {
    let (phase, v) = steam_point(150.0, 366.0);
    assert_eq!(phase, PhaseLabel::SaturatedSteam);
    assert_rel_close(v, 2.756_92, 1e-4);

    let (phase, v) = steam_point(50.0, 298.0);
    assert_eq!(phase, PhaseLabel::SaturatedSteam);
    assert_rel_close(v, 6.684_5, 1e-4);
}

#[test]
fn superheated_headers() {
    let (phase, v) = steam_point(100.0, 500.0);
    assert_eq!(phase, PhaseLabel::SuperheatedSteam);
    assert_rel_close(v, 4.852_546, 1e-4);

    let (phase, v) = steam_point(350.0, 700.0);
    assert_eq!(phase, PhaseLabel::SuperheatedSteam);
    assert_rel_close(v, 1.817_23, 1e-4);

    let (phase, v) = steam_point(0.0, 250.0);
    assert_eq!(phase, PhaseLabel::SuperheatedSteam);
    assert_rel_close(v, 28.400_64, 1e-4);
}

#[test]
fn compressed_water_ignores_pressure() {
    let (phase, v) = steam_point(100.0, 300.0);
    assert_eq!(phase, PhaseLabel::Water);
    assert_rel_close(v, 0.017_447_9, 1e-4);

    let table = Iapws97::new();
    let other = volume(&table, PhaseLabel::Water, 250.0, 300.0).unwrap();
    assert_eq!(v, other);
}

#[test]
fn above_22_mpa_is_supercritical() {
    let (phase, v) = steam_point(3180.0, 600.0);
    assert_eq!(phase, PhaseLabel::SupercriticalSteam);
    assert_rel_close(v, 0.022_685_1, 1e-4);

    // Near-critical density solve
    let (phase, v) = steam_point(3180.0, 700.0);
    assert_eq!(phase, PhaseLabel::SupercriticalSteam);
    assert_rel_close(v, 0.033_203_1, 1e-3);
}

#[test]
fn pressure_beyond_saturation_line_fails() {
    let table = Iapws97::new();
    let err = classify(&table, 4000.0, 700.0).unwrap_err();
    assert!(matches!(
        err,
        FormulaError::PropertyCorrelation(SteamError::OutOfRange { .. })
    ));
}

#[test]
fn freezing_point_water_is_below_table_range() {
    // 32 °F converts to 273 K, just under the 273.15 K table minimum
    let table = Iapws97::new();
    let err = volume(&table, PhaseLabel::Water, 0.0, 32.0).unwrap_err();
    assert!(matches!(
        err,
        FormulaError::PropertyCorrelation(SteamError::OutOfRange { .. })
    ));
}

#[test]
fn string_surface_matches_typed_api() {
    let formulas = Formulas::default();
    let label = formulas.steam_type(100.0, 500.0).unwrap();
    assert_eq!(label, "Superheated Steam");

    let by_string = formulas.steam_volume(&label, 100.0, 500.0).unwrap();
    let (_, typed) = steam_point(100.0, 500.0);
    assert_eq!(by_string, typed);
}

#[test]
fn gas_and_flow_worksheet_values() {
    assert!((gas_volume(28.97, 0.0, 70.0).unwrap() - 13.347_594).abs() < 1e-9);
    assert!((gas_volume(28.97, 100.0, 70.0).unwrap() - 1.710_633).abs() < 1e-9);
    assert!((gas_volume(28.97, 0.0, 200.0).unwrap() - 16.623_572).abs() < 1e-9);
    assert_rel_close(scfd_to_gpm(1.0e6, 100.0, 60.0).unwrap(), 666.995_518, 1e-8);
    assert!(matches!(
        udf::gas_volume(0.0, 0.0, 70.0),
        Err(FormulaError::InvalidArgument { .. })
    ));
    assert_eq!(udf::scfd_to_gpm(0.0, 35.0, 80.0).unwrap(), 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn phase_label_serializes_as_display_text() {
    for phase in PhaseLabel::ALL {
        let json = serde_json::to_string(&phase).unwrap();
        assert_eq!(json, format!("\"{phase}\""));
        let back: PhaseLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phase);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn classified_phase_always_has_a_volume(p in 0.0_f64..350.0, t in 40.0_f64..700.0) {
        let formulas = Formulas::default();
        let label = formulas.steam_type(p, t).unwrap();
        let v = formulas.steam_volume_strict(&label, p, t).unwrap();
        prop_assert!(v > 0.0 && v.is_finite());
    }
}
