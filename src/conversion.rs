use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// Errors raised while converting user-supplied unit strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Unit string not recognised for the quantity.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// Quantity name not recognised.
    #[error("unsupported quantity: {0}")]
    UnsupportedQuantity(String),
}

/// Parses unit names and converts `value` between them.
///
/// Accepted spellings include `mm`, `in`, `kgf`, `lbf`, `psi`, `bar`, `hp`,
/// `m/min` and `cc`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Force => {
            let from = parse_force_unit(from_unit_str)?;
            let to = parse_force_unit(to_unit_str)?;
            Ok(convert_force(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" | "kilonewton" => Ok(ForceUnit::KiloNewton),
        "kgf" | "kp" => Ok(ForceUnit::KilogramForce),
        "tf" | "tonf" | "te" => Ok(ForceUnit::TonneForce),
        "lbf" => Ok(ForceUnit::PoundForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "t" | "tonne" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "mpa" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "hp" | "horsepower" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "m/min" | "mpm" => Ok(VelocityUnit::MeterPerMinute),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "ft/min" | "fpm" => Ok(VelocityUnit::FootPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "cc" | "cm3" | "ml" => Ok(VolumeUnit::CubicCentimeter),
        "in3" | "cuin" => Ok(VolumeUnit::CubicInch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
