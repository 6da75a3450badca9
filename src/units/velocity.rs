use serde::{Deserialize, Serialize};

/// Velocity unit. The base unit is m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    MeterPerMinute,
    FootPerSecond,
    FootPerMinute,
}

impl VelocityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::MeterPerMinute => "m/min",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::FootPerMinute => "ft/min",
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::MeterPerMinute => value / 60.0,
        VelocityUnit::FootPerSecond => value * 0.3048,
        VelocityUnit::FootPerMinute => value * 0.3048 / 60.0,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::MeterPerMinute => value * 60.0,
        VelocityUnit::FootPerSecond => value / 0.3048,
        VelocityUnit::FootPerMinute => value * 60.0 / 0.3048,
    }
}

/// Converts a velocity between units.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
