use serde::{Deserialize, Serialize};

/// Pressure unit. The base unit is the pascal.
///
/// Hydraulic system figures are differential (gauge) pressures, so no
/// atmospheric offset is applied in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
}

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 1 psi in pascals.
pub const PA_PER_PSI: f64 = 6894.75729;
const PA_PER_BAR: f64 = 100_000.0;

/// Converts a pressure value to pascals.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Converts pascals to the requested unit.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// Converts a pressure between units.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
