use serde::Serialize;
use tracing::info;

use crate::units::{convert_mass, MassUnit};
use crate::winch::ahc::{required_ahc_speed, AhcSpeed};
use crate::winch::combine::{combine, CombinedRow};
use crate::winch::drum::{compute_layers, DrumLayout, EngineOptions, Layer, Wrap};
use crate::winch::inputs::WinchInputs;
use crate::winch::performance::{drivetrain, try_compute_performance, Drivetrain, PerformanceRow};

/// Whether the winch meets the targets stated in the inputs.
/// `None` means the check could not be made (no layers or no performance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequirementChecks {
    /// Available pull on the top layer covers the SWL
    pub swl_met: Option<bool>,
    /// The slowest layer still reaches the required speed
    pub speed_met: Option<bool>,
    /// The slowest layer reaches the required AHC speed
    pub ahc_speed_met: Option<bool>,
}

/// Everything one calculation pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct WinchReport {
    pub layout: DrumLayout,
    pub drivetrain: Option<Drivetrain>,
    pub layers: Vec<CombinedRow<Layer>>,
    pub wraps: Vec<CombinedRow<Wrap>>,
    pub ahc: Option<AhcSpeed>,
    pub checks: RequirementChecks,
    pub warnings: Vec<String>,
}

/// Runs layout, performance, combination and AHC sizing for one input set.
pub fn calculate(inputs: &WinchInputs, options: &EngineOptions) -> WinchReport {
    let mut warnings = Vec::new();

    let layout = compute_layers(inputs, options);
    if let Some(err) = &layout.error {
        warnings.push(format!("Drum layout failed: {err}"));
    } else if layout.unspooled_length_m > 0.0 {
        warnings.push(format!(
            "{:.1} m of cable does not fit on the drum.",
            layout.unspooled_length_m
        ));
    }

    let drive = match drivetrain(inputs) {
        Ok(d) => Some(d),
        Err(err) => {
            warnings.push(format!("Performance not calculated: {err}"));
            None
        }
    };
    // The drivetrain check above already reported any error.
    let layer_perf = try_compute_performance(inputs, &layout.layers).unwrap_or_default();
    let wrap_perf = try_compute_performance(inputs, &layout.wraps).unwrap_or_default();

    let ahc = match &inputs.ahc {
        Some(a) => match required_ahc_speed(a.wave_height_m, a.wave_period_s, a.avg_offset_speed_mpm)
        {
            Ok(speed) => Some(speed),
            Err(err) => {
                warnings.push(format!("AHC speed not calculated: {err}"));
                None
            }
        },
        None => None,
    };

    let checks = check_requirements(inputs, &layer_perf, ahc.as_ref());
    if checks.swl_met == Some(false) {
        warnings.push(format!(
            "Top layer pull is below the required SWL of {:.1} t.",
            inputs.req_swl_t
        ));
    }
    if checks.speed_met == Some(false) {
        warnings.push(format!(
            "Line speed drops below the required {:.1} m/min.",
            inputs.req_speed_mpm
        ));
    }
    if checks.ahc_speed_met == Some(false) {
        warnings.push("Line speed drops below the required AHC speed.".into());
    }

    info!(
        layers = layout.layers.len(),
        warnings = warnings.len(),
        "calculation finished"
    );

    WinchReport {
        layers: combine(inputs, &layout.layers, &layer_perf),
        wraps: combine(inputs, &layout.wraps, &wrap_perf),
        layout,
        drivetrain: drive,
        ahc,
        checks,
        warnings,
    }
}

fn check_requirements(
    inputs: &WinchInputs,
    perf: &[PerformanceRow],
    ahc: Option<&AhcSpeed>,
) -> RequirementChecks {
    let swl_kgf = convert_mass(inputs.req_swl_t, MassUnit::Tonne, MassUnit::Kilogram);
    let slowest = perf
        .iter()
        .map(|p| p.actual_speed_mpm)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))));

    RequirementChecks {
        swl_met: perf.last().map(|top| top.available_tension_kgf >= swl_kgf),
        speed_met: slowest.map(|s| s >= inputs.req_speed_mpm),
        ahc_speed_met: ahc.and_then(|a| slowest.map(|s| s >= a.required_speed_mpm)),
    }
}
