use std::str::FromStr;

use crate::conversion::ConversionError;

/// Physical quantities handled by the unit converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Force,
    Mass,
    Pressure,
    Power,
    Velocity,
    Volume,
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(QuantityKind::Length),
            "force" => Ok(QuantityKind::Force),
            "mass" | "weight" => Ok(QuantityKind::Mass),
            "pressure" => Ok(QuantityKind::Pressure),
            "power" => Ok(QuantityKind::Power),
            "velocity" | "speed" => Ok(QuantityKind::Velocity),
            "volume" | "displacement" => Ok(QuantityKind::Volume),
            _ => Err(ConversionError::UnsupportedQuantity(s.to_string())),
        }
    }
}
