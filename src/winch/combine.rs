use std::f64::consts::PI;

use serde::Serialize;

use crate::units::{
    convert_force, convert_pressure, convert_volume, ForceUnit, PressureUnit, VolumeUnit,
};
use crate::winch::drum::SpoolPosition;
use crate::winch::inputs::{WinchInputs, WinchType};
use crate::winch::performance::{line_tension_kgf, PerformanceRow};

/// Geometry row joined with its load, performance and hydraulic pressure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRow<G> {
    pub geometry: G,
    /// Payload plus wet cable weight at this row's depth
    pub tension_kgf: f64,
    /// `None` when performance could not be computed
    pub performance: Option<PerformanceRow>,
    /// System pressure needed to hold `tension_kgf`; hydraulic winches only
    pub required_pressure_psi: Option<f64>,
}

/// Joins geometry rows with performance rows by position.
///
/// An empty `performance` slice leaves every row's performance as `None`
/// without affecting the geometry output.
pub fn combine<G>(
    inputs: &WinchInputs,
    rows: &[G],
    performance: &[PerformanceRow],
) -> Vec<CombinedRow<G>>
where
    G: SpoolPosition + Clone,
{
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let tension = line_tension_kgf(inputs, row.depth_m());
            CombinedRow {
                geometry: row.clone(),
                tension_kgf: tension,
                performance: performance.get(i).cloned(),
                required_pressure_psi: required_pressure_psi(inputs, tension, row.diameter_m()),
            }
        })
        .collect()
}

/// Back-solves the hydraulic system pressure (psi) that holds `tension_kgf`
/// on a layer of pitch diameter `diameter_m`.
///
/// Returns `None` for electric winches or when the motor data needed for the
/// back-solve is missing.
pub fn required_pressure_psi(inputs: &WinchInputs, tension_kgf: f64, diameter_m: f64) -> Option<f64> {
    if inputs.winch_type != WinchType::Hydraulic {
        return None;
    }
    let ratio = inputs.total_gear_ratio();
    let motors = inputs.motor_count as f64;
    let displacement = convert_volume(
        inputs.hyd_motor_displacement_cc,
        VolumeUnit::CubicCentimeter,
        VolumeUnit::CubicMeter,
    );
    let mech = inputs.hyd_mech_efficiency;
    let charge_psi = inputs.hyd_charge_pressure_psi;
    if !(ratio > 0.0 && motors > 0.0 && displacement > 0.0 && mech > 0.0 && charge_psi >= 0.0) {
        return None;
    }

    let tension_n = convert_force(tension_kgf, ForceUnit::KilogramForce, ForceUnit::Newton);
    let drum_torque = tension_n * diameter_m / 2.0;
    let motor_torque = drum_torque / (ratio * motors);
    let pressure_pa = motor_torque * 2.0 * PI / (displacement * mech);
    Some(
        convert_pressure(pressure_pa, PressureUnit::Pascal, PressureUnit::Psi) + charge_psi,
    )
}
