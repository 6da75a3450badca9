use std::f64::consts::PI;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::units::{
    convert_force, convert_power, convert_pressure, convert_volume, ForceUnit, PowerUnit,
    PressureUnit, VolumeUnit,
};
use crate::winch::drum::SpoolPosition;
use crate::winch::inputs::{ValidationError, WinchInputs, WinchType};

/// Line pull and speed available at one drum position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRow {
    /// 1-based position in the evaluated rows
    pub index: usize,
    pub diameter_m: f64,
    pub depth_m: f64,
    /// Static tension of payload plus wet cable at this depth
    pub line_tension_kgf: f64,
    /// Pull the drivetrain torque can develop at this radius
    pub available_tension_kgf: f64,
    /// Drum speed at full motor RPM or full pump flow
    pub drum_rpm: f64,
    /// Speed limited by motor RPM (electric) or pump flow (hydraulic)
    pub rpm_limited_speed_mpm: f64,
    /// Speed limited by installed power at the line tension; `None` with a slack line
    pub power_limited_speed_mpm: Option<f64>,
    pub actual_speed_mpm: f64,
}

/// Drum-side capability of the drivetrain, independent of radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drivetrain {
    pub total_gear_ratio: f64,
    pub drum_torque_nm: f64,
    pub power_w: f64,
    /// Drum speed at full motor RPM or full pump flow
    pub max_drum_rpm: f64,
    /// Hydraulic only: torque of one motor at full pressure differential
    pub motor_torque_nm: Option<f64>,
    /// Hydraulic only: pump delivery (m³/min)
    pub flow_m3_per_min: Option<f64>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PerformanceError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("drivetrain parameter missing or not positive: {0}")]
    MissingParameter(&'static str),
    #[error("system pressure {system_psi} psi does not exceed charge pressure {charge_psi} psi")]
    NoPressureMargin { system_psi: f64, charge_psi: f64 },
}

fn require(name: &'static str, value: f64) -> Result<f64, PerformanceError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PerformanceError::MissingParameter(name))
    }
}

fn require_count(name: &'static str, value: u32) -> Result<f64, PerformanceError> {
    if value > 0 {
        Ok(value as f64)
    } else {
        Err(PerformanceError::MissingParameter(name))
    }
}

/// Resolves motor, gearing and power figures into drum torque, power and speed.
pub fn drivetrain(inputs: &WinchInputs) -> Result<Drivetrain, PerformanceError> {
    inputs.validate()?;
    let ratio = require("pinion_ratio", inputs.pinion_ratio)?
        * require("gearbox_ratio", inputs.gearbox_ratio)?;
    let motors = require_count("motor_count", inputs.motor_count)?;

    match inputs.winch_type {
        WinchType::Electric => {
            let torque = require("electric_motor_torque_nm", inputs.electric_motor_torque_nm)?;
            let power_kw = require("electric_motor_power_kw", inputs.electric_motor_power_kw)?;
            let rpm = require("electric_motor_rpm", inputs.electric_motor_rpm)?;
            let efficiency =
                require("electric_motor_efficiency", inputs.electric_motor_efficiency)?;
            Ok(Drivetrain {
                total_gear_ratio: ratio,
                drum_torque_nm: torque * motors * ratio,
                power_w: convert_power(power_kw, PowerUnit::Kilowatt, PowerUnit::Watt)
                    * motors
                    * efficiency,
                max_drum_rpm: rpm / ratio,
                motor_torque_nm: None,
                flow_m3_per_min: None,
            })
        }
        WinchType::Hydraulic => {
            let displacement = convert_volume(
                require("hyd_motor_displacement_cc", inputs.hyd_motor_displacement_cc)?,
                VolumeUnit::CubicCentimeter,
                VolumeUnit::CubicMeter,
            );
            let mech = require("hyd_mech_efficiency", inputs.hyd_mech_efficiency)?;
            let system_psi = require("hyd_system_pressure_psi", inputs.hyd_system_pressure_psi)?;
            let pump_displacement = convert_volume(
                require("hyd_pump_displacement_cc", inputs.hyd_pump_displacement_cc)?,
                VolumeUnit::CubicCentimeter,
                VolumeUnit::CubicMeter,
            );
            let pump_rpm = require("hyd_pump_rpm", inputs.hyd_pump_rpm)?;
            let pumps = require_count("hyd_pump_count", inputs.hyd_pump_count)?;
            let power_hp = require("hyd_power_hp", inputs.hyd_power_hp)?;

            let charge_psi = inputs.hyd_charge_pressure_psi;
            if system_psi <= charge_psi {
                return Err(PerformanceError::NoPressureMargin {
                    system_psi,
                    charge_psi,
                });
            }
            let effective_pa =
                convert_pressure(system_psi - charge_psi, PressureUnit::Psi, PressureUnit::Pascal);
            let motor_torque = displacement * effective_pa * mech / (2.0 * PI);
            let flow = pump_displacement * pump_rpm * pumps;
            let drum_rpm = flow / (motors * displacement) / ratio;

            Ok(Drivetrain {
                total_gear_ratio: ratio,
                drum_torque_nm: motor_torque * motors * ratio,
                power_w: convert_power(power_hp, PowerUnit::Horsepower, PowerUnit::Watt),
                max_drum_rpm: drum_rpm,
                motor_torque_nm: Some(motor_torque),
                flow_m3_per_min: Some(flow),
            })
        }
    }
}

/// Static line tension (kgf) from payload and wet cable weight at `depth_m`.
pub fn line_tension_kgf(inputs: &WinchInputs, depth_m: f64) -> f64 {
    inputs.payload_weight_kg + inputs.cable_weight_kg_per_m * depth_m
}

/// Evaluates every row; a missing drivetrain parameter yields no rows at all.
pub fn compute_performance<P: SpoolPosition>(
    inputs: &WinchInputs,
    rows: &[P],
) -> Vec<PerformanceRow> {
    match try_compute_performance(inputs, rows) {
        Ok(perf) => perf,
        Err(err) => {
            warn!("performance skipped: {err}");
            Vec::new()
        }
    }
}

pub fn try_compute_performance<P: SpoolPosition>(
    inputs: &WinchInputs,
    rows: &[P],
) -> Result<Vec<PerformanceRow>, PerformanceError> {
    let drive = drivetrain(inputs)?;
    let perf = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let diameter = row.diameter_m();
            let depth = row.depth_m();
            let radius = diameter / 2.0;

            let available_tension = convert_force(
                drive.drum_torque_nm / radius,
                ForceUnit::Newton,
                ForceUnit::KilogramForce,
            );
            let line_tension = line_tension_kgf(inputs, depth);
            let line_tension_n =
                convert_force(line_tension, ForceUnit::KilogramForce, ForceUnit::Newton);

            let rpm_limited = PI * diameter * drive.max_drum_rpm;
            let power_limited = if line_tension_n > 0.0 {
                Some(drive.power_w / line_tension_n * 60.0)
            } else {
                None
            };
            let actual = power_limited.map_or(rpm_limited, |p| p.min(rpm_limited));

            PerformanceRow {
                index: i + 1,
                diameter_m: diameter,
                depth_m: depth,
                line_tension_kgf: line_tension,
                available_tension_kgf: available_tension,
                drum_rpm: drive.max_drum_rpm,
                rpm_limited_speed_mpm: rpm_limited,
                power_limited_speed_mpm: power_limited,
                actual_speed_mpm: actual,
            }
        })
        .collect();
    Ok(perf)
}
