//! Heave-compensation speed sizing.
use drum_spooling_toolbox::winch::{required_ahc_speed, AhcError};

#[test]
fn three_metre_ten_second_wave() {
    let speed = required_ahc_speed(3.0, 10.0, 0.0).expect("ahc");
    assert!((speed.peak_heave_speed_mps - 0.9425).abs() < 1e-4);
    assert!((speed.required_speed_mps - 0.9425).abs() < 1e-4);
    assert!((speed.required_speed_mpm - 56.5).abs() < 0.1);
}

#[test]
fn offset_speed_adds_to_peak() {
    let still = required_ahc_speed(3.0, 10.0, 0.0).expect("ahc");
    let moving = required_ahc_speed(3.0, 10.0, 30.0).expect("ahc");
    assert!((moving.required_speed_mps - still.required_speed_mps - 0.5).abs() < 1e-12);
    assert!((moving.required_speed_mpm - still.required_speed_mpm - 30.0).abs() < 1e-9);
    assert_eq!(moving.peak_heave_speed_mps, still.peak_heave_speed_mps);
}

#[test]
fn calm_sea_needs_only_offset() {
    let speed = required_ahc_speed(0.0, 8.0, 12.0).expect("ahc");
    assert_eq!(speed.peak_heave_speed_mps, 0.0);
    assert!((speed.required_speed_mpm - 12.0).abs() < 1e-12);
}

#[test]
fn invalid_waves_are_rejected() {
    assert_eq!(
        required_ahc_speed(3.0, -1.0, 0.0),
        Err(AhcError::NonPositivePeriod(-1.0))
    );
    assert_eq!(
        required_ahc_speed(-3.0, 10.0, 0.0),
        Err(AhcError::NegativeWaveHeight(-3.0))
    );
    assert_eq!(
        required_ahc_speed(f64::NAN, 10.0, 0.0),
        Err(AhcError::NotFinite("wave_height_m"))
    );
}
