use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DisplayUnits;
use crate::presets;
use crate::units::{
    convert_force, convert_length, convert_pressure, convert_velocity, ForceUnit, LengthUnit,
    PressureUnit, VelocityUnit,
};
use crate::winch::{AhcSpeed, CombinedRow, Drivetrain, Layer, WinchInputs, WinchReport, Wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

/// Offshore winch drum spooling calculator
#[derive(Debug, Parser)]
#[command(name = "drum_spooling_toolbox", version)]
pub struct Cli {
    /// Settings file (created with defaults if missing)
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List saved and built-in configurations
    List,
    /// Print one configuration as JSON
    Show { name: String },
    /// Run the layer, performance and AHC calculation for a configuration
    Calc {
        name: String,
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Print one row per wrap instead of per layer
        #[arg(long)]
        per_wrap: bool,
        /// Fill the drum to the flange rim, ignoring the minimum free flange
        #[arg(long)]
        no_flange_limit: bool,
        /// Cable kept on deck and excluded from depth (m)
        #[arg(long)]
        reserve: Option<f64>,
    },
    /// Required heave-compensation speed for a wave
    Ahc {
        /// Wave height (m)
        #[arg(long)]
        height: f64,
        /// Wave period (s)
        #[arg(long)]
        period: f64,
        /// Average offset speed (m/min)
        #[arg(long, default_value_t = 0.0)]
        offset: f64,
    },
    /// Convert a value, e.g. `convert length 41 mm in`
    Convert {
        kind: String,
        value: f64,
        from: String,
        to: String,
    },
    /// Write all configurations to a JSON file
    Export { file: PathBuf },
    /// Merge configurations from a JSON file into the store
    Import { file: PathBuf },
    /// Delete a saved configuration
    Remove { name: String },
}

pub fn print_names<'a>(names: impl Iterator<Item = (&'a str, &'a WinchInputs)>) {
    for (name, inputs) in names {
        println!(
            "{name:<36} {:?}, {} mm x {} m",
            inputs.winch_type, inputs.cable_dia_mm, inputs.cable_length_m
        );
        if let Some(notes) = presets::preset_notes(name) {
            println!("{:<36} built-in: {notes}", "");
        }
    }
}

pub fn print_ahc(speed: &AhcSpeed) {
    println!("Peak heave speed: {:.4} m/s", speed.peak_heave_speed_mps);
    println!(
        "Required AHC speed: {:.4} m/s ({:.1} m/min)",
        speed.required_speed_mps, speed.required_speed_mpm
    );
}

pub fn print_report(report: &WinchReport, units: &DisplayUnits, per_wrap: bool) {
    let layout = &report.layout;
    let drum = |m: f64| convert_length(m, LengthUnit::Meter, units.drum_length);
    let dl = units.drum_length.symbol();

    println!("\n=== Drum ===");
    if let Some(err) = &layout.error {
        println!("No layers: {err}");
    }
    println!("Bare drum diameter: {:.3} {dl}", drum(layout.bare_drum_diameter_m));
    println!("Full drum diameter: {:.3} {dl}", drum(layout.full_drum_diameter_m));
    println!(
        "Free flange: {:.3} {dl} (required {:.3} {dl})",
        drum(layout.actual_free_flange_m),
        drum(layout.required_free_flange_m)
    );
    println!(
        "Wraps per layer: {} ({})",
        layout.base_wraps,
        if layout.used_calculated_wraps {
            "calculated"
        } else {
            "input"
        }
    );

    if let Some(drive) = &report.drivetrain {
        print_drivetrain(drive);
    }

    if per_wrap {
        print_wrap_rows(&report.wraps, units);
    } else {
        print_layer_rows(&report.layers, units);
    }

    if let Some(ahc) = &report.ahc {
        println!();
        print_ahc(ahc);
    }
    for w in &report.warnings {
        println!("WARNING: {w}");
    }
}

fn print_drivetrain(drive: &Drivetrain) {
    println!("\n=== Drivetrain ===");
    println!("Total gear ratio: {:.2}", drive.total_gear_ratio);
    println!("Drum torque: {:.0} N·m", drive.drum_torque_nm);
    println!("Power: {:.1} kW", drive.power_w / 1000.0);
    println!("Max drum speed: {:.2} rpm", drive.max_drum_rpm);
    if let Some(t) = drive.motor_torque_nm {
        println!("Torque per motor: {t:.1} N·m");
    }
    if let Some(q) = drive.flow_m3_per_min {
        println!("Pump flow: {:.1} L/min", q * 1000.0);
    }
}

fn print_layer_rows(rows: &[CombinedRow<Layer>], units: &DisplayUnits) {
    println!("\n=== Layers ===");
    println!(
        "{:>5} {:>6} {:>10} {:>10} {:>10} {:>10} {:>9} {:>10} {:>10} {:>9} {:>9}",
        "layer",
        "wraps",
        format!("dia {}", units.drum_length.symbol()),
        format!("cap {}", units.cable_length.symbol()),
        format!("cum {}", units.cable_length.symbol()),
        format!("ff {}", units.drum_length.symbol()),
        format!("depth {}", units.cable_length.symbol()),
        format!("T {}", units.force.symbol()),
        format!("avail {}", units.force.symbol()),
        units.speed.symbol(),
        units.pressure.symbol(),
    );
    for row in rows {
        let g = &row.geometry;
        println!(
            "{:>5} {:>6.2} {:>10.3} {:>10.1} {:>10.1} {:>10.3} {:>9.1} {}",
            g.layer,
            g.wraps_effective,
            convert_length(g.diameter_m, LengthUnit::Meter, units.drum_length),
            convert_length(g.capacity_m, LengthUnit::Meter, units.cable_length),
            convert_length(g.cumulative_m, LengthUnit::Meter, units.cable_length),
            convert_length(g.free_flange_m, LengthUnit::Meter, units.drum_length),
            convert_length(g.depth_m, LengthUnit::Meter, units.cable_length),
            load_columns(row, units),
        );
    }
}

fn print_wrap_rows(rows: &[CombinedRow<Wrap>], units: &DisplayUnits) {
    println!("\n=== Wraps ===");
    println!(
        "{:>5} {:>5} {:>10} {:>10} {:>9} {:>10} {:>10} {:>9} {:>9}",
        "layer",
        "wrap",
        format!("dia {}", units.drum_length.symbol()),
        format!("cum {}", units.cable_length.symbol()),
        format!("depth {}", units.cable_length.symbol()),
        format!("T {}", units.force.symbol()),
        format!("avail {}", units.force.symbol()),
        units.speed.symbol(),
        units.pressure.symbol(),
    );
    for row in rows {
        let g = &row.geometry;
        println!(
            "{:>5} {:>5} {:>10.3} {:>10.1} {:>9.1} {}",
            g.layer,
            g.wrap,
            convert_length(g.diameter_m, LengthUnit::Meter, units.drum_length),
            convert_length(g.cumulative_m, LengthUnit::Meter, units.cable_length),
            convert_length(g.depth_m, LengthUnit::Meter, units.cable_length),
            load_columns(row, units),
        );
    }
}

fn load_columns<G>(row: &CombinedRow<G>, units: &DisplayUnits) -> String {
    let force = |kgf: f64| convert_force(kgf, ForceUnit::KilogramForce, units.force);
    let avail = row
        .performance
        .as_ref()
        .map(|p| format!("{:.0}", force(p.available_tension_kgf)))
        .unwrap_or_else(|| "-".into());
    let speed = row
        .performance
        .as_ref()
        .map(|p| {
            let v = convert_velocity(
                p.actual_speed_mpm,
                VelocityUnit::MeterPerMinute,
                units.speed,
            );
            format!("{v:.1}")
        })
        .unwrap_or_else(|| "-".into());
    let pressure = row
        .required_pressure_psi
        .map(|p| format!("{:.0}", convert_pressure(p, PressureUnit::Psi, units.pressure)))
        .unwrap_or_else(|| "-".into());
    format!(
        "{:>10.0} {:>10} {:>9} {:>9}",
        force(row.tension_kgf),
        avail,
        speed,
        pressure
    )
}
