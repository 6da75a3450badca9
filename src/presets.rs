//! Built-in named winch configurations.
//! They are merged under any user configurations when the store is loaded.

use crate::winch::{AhcInputs, WinchInputs, WinchType};

#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub notes: &'static str,
    pub build: fn() -> WinchInputs,
}

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Description of a built-in preset; exact name match, as stored.
pub fn preset_notes(name: &str) -> Option<&'static str> {
    PRESETS.iter().find(|p| p.name == name).map(|p| p.notes)
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "hydraulic-umbilical-41mm",
        notes: "6 x 105 cc motors, 5.24 x 20 reduction, 3500 m of 41 mm umbilical",
        build: hydraulic_umbilical,
    },
    Preset {
        name: "hydraulic-umbilical-41mm-crosslay",
        notes: "Same drum with a 55.5 wrap cross-lay pattern",
        build: hydraulic_umbilical_crosslay,
    },
    Preset {
        name: "electric-wire-32mm",
        notes: "2 x 250 kW motors, auto-calculated wraps",
        build: electric_wire,
    },
];

/// 41 mm umbilical on a 70 in core / 110 in flange drum with a hydraulic drive.
pub fn hydraulic_umbilical() -> WinchInputs {
    WinchInputs {
        winch_type: WinchType::Hydraulic,
        req_swl_t: 15.0,
        req_speed_mpm: 60.0,
        ahc: Some(AhcInputs {
            wave_height_m: 3.0,
            wave_period_s: 10.0,
            avg_offset_speed_mpm: 10.0,
        }),
        cable_dia_mm: 41.0,
        cable_length_m: 3500.0,
        cable_weight_kg_per_m: 4.5,
        drum_core_dia_in: 70.0,
        lebus_thickness_in: 0.625,
        flange_dia_in: 110.0,
        flange_to_flange_in: 91.5,
        wraps_per_layer: 56.0,
        payload_weight_kg: 10_000.0,
        motor_count: 6,
        pinion_ratio: 5.24,
        gearbox_ratio: 20.0,
        electric_motor_torque_nm: 0.0,
        electric_motor_power_kw: 0.0,
        electric_motor_rpm: 0.0,
        electric_motor_efficiency: 0.0,
        hyd_motor_displacement_cc: 105.0,
        hyd_mech_efficiency: 0.85,
        hyd_system_pressure_psi: 4000.0,
        hyd_charge_pressure_psi: 300.0,
        hyd_pump_displacement_cc: 250.0,
        hyd_pump_rpm: 1800.0,
        hyd_pump_count: 2,
        hyd_power_hp: 600.0,
    }
}

pub fn hydraulic_umbilical_crosslay() -> WinchInputs {
    WinchInputs {
        wraps_per_layer: 55.5,
        ..hydraulic_umbilical()
    }
}

/// 32 mm wire rope on an electric drum with wraps left to the engine.
pub fn electric_wire() -> WinchInputs {
    WinchInputs {
        winch_type: WinchType::Electric,
        req_swl_t: 25.0,
        req_speed_mpm: 30.0,
        ahc: None,
        cable_dia_mm: 32.0,
        cable_length_m: 1000.0,
        cable_weight_kg_per_m: 4.2,
        drum_core_dia_in: 40.0,
        lebus_thickness_in: 0.5,
        flange_dia_in: 64.0,
        flange_to_flange_in: 48.0,
        wraps_per_layer: 0.0,
        payload_weight_kg: 8000.0,
        motor_count: 2,
        pinion_ratio: 6.0,
        gearbox_ratio: 25.0,
        electric_motor_torque_nm: 600.0,
        electric_motor_power_kw: 250.0,
        electric_motor_rpm: 1500.0,
        electric_motor_efficiency: 0.95,
        hyd_motor_displacement_cc: 0.0,
        hyd_mech_efficiency: 0.0,
        hyd_system_pressure_psi: 0.0,
        hyd_charge_pressure_psi: 0.0,
        hyd_pump_displacement_cc: 0.0,
        hyd_pump_rpm: 0.0,
        hyd_pump_count: 0,
        hyd_power_hp: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_found_by_stored_name() {
        assert_eq!(
            preset_notes("hydraulic-umbilical-41mm-crosslay"),
            Some("Same drum with a 55.5 wrap cross-lay pattern")
        );
        assert_eq!(preset_notes("HYDRAULIC-UMBILICAL-41MM"), None);
        assert_eq!(preset_notes("my drum"), None);
        assert!(presets().iter().all(|p| !p.notes.is_empty()));
    }
}
