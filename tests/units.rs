//! Unit conversion regression tests.
use drum_spooling_toolbox::conversion::{convert, ConversionError};
use drum_spooling_toolbox::quantity::QuantityKind;
use drum_spooling_toolbox::units::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn exact_factors() {
    assert_close("in->m", convert_length(1.0, LengthUnit::Inch, LengthUnit::Meter), 0.0254, 1e-15);
    assert_close(
        "psi->Pa",
        convert_pressure(1.0, PressureUnit::Psi, PressureUnit::Pascal),
        6894.75729,
        1e-15,
    );
    assert_close(
        "hp->W",
        convert_power(1.0, PowerUnit::Horsepower, PowerUnit::Watt),
        745.7,
        1e-15,
    );
    assert_close(
        "kgf->N",
        convert_force(1.0, ForceUnit::KilogramForce, ForceUnit::Newton),
        STANDARD_GRAVITY,
        1e-15,
    );
    assert_close(
        "cc->m3",
        convert_volume(105.0, VolumeUnit::CubicCentimeter, VolumeUnit::CubicMeter),
        105e-6,
        1e-15,
    );
}

#[test]
fn string_units() {
    let inch = convert(QuantityKind::Length, 41.0, "mm", "in").expect("length");
    assert_close("41 mm", inch, 1.614_173_228, 1e-9);
    let mpm = convert(QuantityKind::Velocity, 1.0, "m/s", "m/min").expect("velocity");
    assert_close("m/s", mpm, 60.0, 1e-12);
    let tf = convert(QuantityKind::Force, 9806.65, "N", "tf").expect("force");
    assert_close("tf", tf, 1.0, 1e-12);
    let bar = convert(QuantityKind::Pressure, 4000.0, "psi", "bar").expect("pressure");
    assert_close("bar", bar, 275.790_291_6, 1e-9);
}

#[test]
fn unknown_names_are_errors() {
    assert_eq!(
        convert(QuantityKind::Length, 1.0, "furlong", "m"),
        Err(ConversionError::UnknownUnit("furlong".into()))
    );
    assert_eq!(
        "temperature".parse::<QuantityKind>(),
        Err(ConversionError::UnsupportedQuantity("temperature".into()))
    );
    assert_eq!("Speed".parse::<QuantityKind>(), Ok(QuantityKind::Velocity));
}
