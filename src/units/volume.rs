use serde::{Deserialize, Serialize};

/// Volume unit. The base unit is the cubic metre.
///
/// Pump and motor displacements are entered as `CubicCentimeter` per revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicCentimeter,
    CubicInch,
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::CubicCentimeter => value / 1_000_000.0,
        VolumeUnit::CubicInch => value * 0.0254 * 0.0254 * 0.0254,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::CubicCentimeter => value * 1_000_000.0,
        VolumeUnit::CubicInch => value / (0.0254 * 0.0254 * 0.0254),
    }
}

/// Converts a volume between units.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
