use serde::{Deserialize, Serialize};

/// Power unit. The base unit is the watt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    /// Mechanical horsepower, 745.7 W.
    Horsepower,
}

const WATTS_PER_HP: f64 = 745.7;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Horsepower => value * WATTS_PER_HP,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1000.0,
        PowerUnit::Horsepower => value_w / WATTS_PER_HP,
    }
}

/// Converts a power between units.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
