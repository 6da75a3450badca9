use serde::{Deserialize, Serialize};

/// Standard gravity, N per kgf.
pub const STANDARD_GRAVITY: f64 = 9.80665;
const NEWTONS_PER_LBF: f64 = 4.448_221_615_260_5;

/// Force unit. The base unit is the newton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    KiloNewton,
    KilogramForce,
    TonneForce,
    PoundForce,
}

impl ForceUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::KiloNewton => "kN",
            ForceUnit::KilogramForce => "kgf",
            ForceUnit::TonneForce => "tf",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

fn to_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value,
        ForceUnit::KiloNewton => value * 1000.0,
        ForceUnit::KilogramForce => value * STANDARD_GRAVITY,
        ForceUnit::TonneForce => value * 1000.0 * STANDARD_GRAVITY,
        ForceUnit::PoundForce => value * NEWTONS_PER_LBF,
    }
}

fn from_newton(value_n: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value_n,
        ForceUnit::KiloNewton => value_n / 1000.0,
        ForceUnit::KilogramForce => value_n / STANDARD_GRAVITY,
        ForceUnit::TonneForce => value_n / (1000.0 * STANDARD_GRAVITY),
        ForceUnit::PoundForce => value_n / NEWTONS_PER_LBF,
    }
}

/// Converts a force between units.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    let n = to_newton(value, from);
    from_newton(n, to)
}
