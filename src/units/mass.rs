use serde::{Deserialize, Serialize};

/// Mass unit. The base unit is the kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Tonne,
    Pound,
}

const KG_PER_POUND: f64 = 0.453_592_37;

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * KG_PER_POUND,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value / 1000.0,
        MassUnit::Pound => value / KG_PER_POUND,
    }
}

/// Converts a mass between units.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
