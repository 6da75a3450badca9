use std::f64::consts::PI;

use serde::Serialize;
use thiserror::Error;

use crate::units::{convert_velocity, VelocityUnit};

/// Winch speed needed to compensate a sinusoidal heave plus an offset speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AhcSpeed {
    /// Velocity amplitude of the heave motion, πH/T
    pub peak_heave_speed_mps: f64,
    pub required_speed_mps: f64,
    pub required_speed_mpm: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AhcError {
    #[error("wave period must be positive (received {0} s)")]
    NonPositivePeriod(f64),
    #[error("wave height must not be negative (received {0} m)")]
    NegativeWaveHeight(f64),
    #[error("missing or invalid value: {0}")]
    NotFinite(&'static str),
}

/// Required AHC line speed for a wave of height `wave_height_m` and period
/// `wave_period_s`, with the average offset speed given in m/min.
pub fn required_ahc_speed(
    wave_height_m: f64,
    wave_period_s: f64,
    avg_offset_speed_mpm: f64,
) -> Result<AhcSpeed, AhcError> {
    for (name, value) in [
        ("wave_height_m", wave_height_m),
        ("wave_period_s", wave_period_s),
        ("avg_offset_speed_mpm", avg_offset_speed_mpm),
    ] {
        if !value.is_finite() {
            return Err(AhcError::NotFinite(name));
        }
    }
    if wave_period_s <= 0.0 {
        return Err(AhcError::NonPositivePeriod(wave_period_s));
    }
    if wave_height_m < 0.0 {
        return Err(AhcError::NegativeWaveHeight(wave_height_m));
    }

    let peak = PI * wave_height_m / wave_period_s;
    let offset_mps = convert_velocity(
        avg_offset_speed_mpm,
        VelocityUnit::MeterPerMinute,
        VelocityUnit::MeterPerSecond,
    );
    let required_mps = peak + offset_mps;
    Ok(AhcSpeed {
        peak_heave_speed_mps: peak,
        required_speed_mps: required_mps,
        required_speed_mpm: convert_velocity(
            required_mps,
            VelocityUnit::MeterPerSecond,
            VelocityUnit::MeterPerMinute,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_speed_is_added_per_second() {
        let speed = required_ahc_speed(3.0, 10.0, 12.0).expect("ahc");
        assert!((speed.required_speed_mps - (PI * 0.3 + 0.2)).abs() < 1e-12);
    }

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(
            required_ahc_speed(3.0, 0.0, 0.0),
            Err(AhcError::NonPositivePeriod(0.0))
        );
    }
}
