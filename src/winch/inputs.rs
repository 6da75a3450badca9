use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{convert_force, convert_length, ForceUnit, LengthUnit};

/// Drive technology of the winch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinchType {
    Electric,
    Hydraulic,
}

/// Sea state and offset speed used to size active heave compensation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AhcInputs {
    /// Significant wave height (m)
    pub wave_height_m: f64,
    /// Wave period (s)
    pub wave_period_s: f64,
    /// Average payout/haul offset speed on top of heave (m/min)
    pub avg_offset_speed_mpm: f64,
}

/// One complete set of winch, drum and cable parameters.
///
/// Field suffixes name the entry unit. The engine converts every value to SI
/// once on entry; nothing in this record is modified by a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredInputs")]
pub struct WinchInputs {
    pub winch_type: WinchType,
    /// Required safe working load (t)
    pub req_swl_t: f64,
    /// Required line speed (m/min)
    pub req_speed_mpm: f64,
    pub ahc: Option<AhcInputs>,

    pub cable_dia_mm: f64,
    pub cable_length_m: f64,
    /// Wet weight per metre. Older files carry `sel_umb_weight` in lbf/ft instead.
    pub cable_weight_kg_per_m: f64,

    pub drum_core_dia_in: f64,
    pub lebus_thickness_in: f64,
    pub flange_dia_in: f64,
    pub flange_to_flange_in: f64,
    /// Wraps per layer; 0 lets the engine calculate it. A value ending in .5
    /// selects the single-pattern cross-lay.
    pub wraps_per_layer: f64,
    pub payload_weight_kg: f64,

    pub motor_count: u32,
    pub pinion_ratio: f64,
    pub gearbox_ratio: f64,

    pub electric_motor_torque_nm: f64,
    pub electric_motor_power_kw: f64,
    pub electric_motor_rpm: f64,
    pub electric_motor_efficiency: f64,

    pub hyd_motor_displacement_cc: f64,
    pub hyd_mech_efficiency: f64,
    pub hyd_system_pressure_psi: f64,
    pub hyd_charge_pressure_psi: f64,
    pub hyd_pump_displacement_cc: f64,
    pub hyd_pump_rpm: f64,
    pub hyd_pump_count: u32,
    pub hyd_power_hp: f64,
}

/// Input rejected before any calculation runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing value: {field}")]
    Missing { field: &'static str },
    #[error("missing or invalid value: {field}")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative (received {value})")]
    Negative { field: &'static str, value: f64 },
}

impl WinchInputs {
    /// Combined pinion and gearbox reduction between motor and drum.
    pub fn total_gear_ratio(&self) -> f64 {
        self.pinion_ratio * self.gearbox_ratio
    }

    /// Checks that every numeric field is a finite number and that
    /// dimensions and weights are not negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
        }
        let non_negative = [
            ("cable_dia_mm", self.cable_dia_mm),
            ("cable_length_m", self.cable_length_m),
            ("cable_weight_kg_per_m", self.cable_weight_kg_per_m),
            ("drum_core_dia_in", self.drum_core_dia_in),
            ("lebus_thickness_in", self.lebus_thickness_in),
            ("flange_dia_in", self.flange_dia_in),
            ("flange_to_flange_in", self.flange_to_flange_in),
            ("payload_weight_kg", self.payload_weight_kg),
            ("hyd_charge_pressure_psi", self.hyd_charge_pressure_psi),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("req_swl_t", self.req_swl_t),
            ("req_speed_mpm", self.req_speed_mpm),
            ("cable_dia_mm", self.cable_dia_mm),
            ("cable_length_m", self.cable_length_m),
            ("cable_weight_kg_per_m", self.cable_weight_kg_per_m),
            ("drum_core_dia_in", self.drum_core_dia_in),
            ("lebus_thickness_in", self.lebus_thickness_in),
            ("flange_dia_in", self.flange_dia_in),
            ("flange_to_flange_in", self.flange_to_flange_in),
            ("wraps_per_layer", self.wraps_per_layer),
            ("payload_weight_kg", self.payload_weight_kg),
            ("pinion_ratio", self.pinion_ratio),
            ("gearbox_ratio", self.gearbox_ratio),
            ("electric_motor_torque_nm", self.electric_motor_torque_nm),
            ("electric_motor_power_kw", self.electric_motor_power_kw),
            ("electric_motor_rpm", self.electric_motor_rpm),
            ("electric_motor_efficiency", self.electric_motor_efficiency),
            ("hyd_motor_displacement_cc", self.hyd_motor_displacement_cc),
            ("hyd_mech_efficiency", self.hyd_mech_efficiency),
            ("hyd_system_pressure_psi", self.hyd_system_pressure_psi),
            ("hyd_charge_pressure_psi", self.hyd_charge_pressure_psi),
            ("hyd_pump_displacement_cc", self.hyd_pump_displacement_cc),
            ("hyd_pump_rpm", self.hyd_pump_rpm),
            ("hyd_power_hp", self.hyd_power_hp),
        ];
        if let Some(ahc) = &self.ahc {
            fields.push(("ahc.wave_height_m", ahc.wave_height_m));
            fields.push(("ahc.wave_period_s", ahc.wave_period_s));
            fields.push(("ahc.avg_offset_speed_mpm", ahc.avg_offset_speed_mpm));
        }
        fields
    }
}

/// Converts a legacy `sel_umb_weight` entry (lbf/ft) to kgf/m.
pub fn lbf_per_ft_to_kgf_per_m(value: f64) -> f64 {
    convert_force(value, ForceUnit::PoundForce, ForceUnit::KilogramForce)
        / convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter)
}

/// On-disk shape of [`WinchInputs`], accepting the legacy `sel_*` names.
#[derive(Deserialize)]
struct StoredInputs {
    winch_type: WinchType,
    req_swl_t: f64,
    req_speed_mpm: f64,
    #[serde(default)]
    ahc: Option<AhcInputs>,
    #[serde(alias = "sel_umb_dia")]
    cable_dia_mm: f64,
    #[serde(alias = "sel_cable_length")]
    cable_length_m: f64,
    #[serde(default)]
    cable_weight_kg_per_m: Option<f64>,
    #[serde(default)]
    sel_umb_weight: Option<f64>,
    #[serde(alias = "sel_drum_core_dia")]
    drum_core_dia_in: f64,
    #[serde(alias = "sel_drum_lebus_thickness")]
    lebus_thickness_in: f64,
    #[serde(alias = "sel_drum_flange_dia")]
    flange_dia_in: f64,
    #[serde(alias = "sel_drum_flange_to_flange")]
    flange_to_flange_in: f64,
    #[serde(alias = "sel_drum_wraps_per_layer")]
    wraps_per_layer: f64,
    #[serde(alias = "sel_payload_weight")]
    payload_weight_kg: f64,
    motor_count: u32,
    pinion_ratio: f64,
    gearbox_ratio: f64,
    #[serde(default)]
    electric_motor_torque_nm: f64,
    #[serde(default)]
    electric_motor_power_kw: f64,
    #[serde(default)]
    electric_motor_rpm: f64,
    #[serde(default)]
    electric_motor_efficiency: f64,
    #[serde(default)]
    hyd_motor_displacement_cc: f64,
    #[serde(default, alias = "sel_hyd_mech_efficiency")]
    hyd_mech_efficiency: f64,
    #[serde(default, alias = "sel_hyd_sys_press")]
    hyd_system_pressure_psi: f64,
    #[serde(default)]
    hyd_charge_pressure_psi: f64,
    #[serde(default)]
    hyd_pump_displacement_cc: f64,
    #[serde(default)]
    hyd_pump_rpm: f64,
    #[serde(default)]
    hyd_pump_count: u32,
    #[serde(default, alias = "sel_hyd_pwr")]
    hyd_power_hp: f64,
}

impl TryFrom<StoredInputs> for WinchInputs {
    type Error = ValidationError;

    fn try_from(s: StoredInputs) -> Result<Self, Self::Error> {
        let cable_weight_kg_per_m = s
            .cable_weight_kg_per_m
            .or(s.sel_umb_weight.map(lbf_per_ft_to_kgf_per_m))
            .ok_or(ValidationError::Missing {
                field: "cable_weight_kg_per_m",
            })?;
        Ok(WinchInputs {
            winch_type: s.winch_type,
            req_swl_t: s.req_swl_t,
            req_speed_mpm: s.req_speed_mpm,
            ahc: s.ahc,
            cable_dia_mm: s.cable_dia_mm,
            cable_length_m: s.cable_length_m,
            cable_weight_kg_per_m,
            drum_core_dia_in: s.drum_core_dia_in,
            lebus_thickness_in: s.lebus_thickness_in,
            flange_dia_in: s.flange_dia_in,
            flange_to_flange_in: s.flange_to_flange_in,
            wraps_per_layer: s.wraps_per_layer,
            payload_weight_kg: s.payload_weight_kg,
            motor_count: s.motor_count,
            pinion_ratio: s.pinion_ratio,
            gearbox_ratio: s.gearbox_ratio,
            electric_motor_torque_nm: s.electric_motor_torque_nm,
            electric_motor_power_kw: s.electric_motor_power_kw,
            electric_motor_rpm: s.electric_motor_rpm,
            electric_motor_efficiency: s.electric_motor_efficiency,
            hyd_motor_displacement_cc: s.hyd_motor_displacement_cc,
            hyd_mech_efficiency: s.hyd_mech_efficiency,
            hyd_system_pressure_psi: s.hyd_system_pressure_psi,
            hyd_charge_pressure_psi: s.hyd_charge_pressure_psi,
            hyd_pump_displacement_cc: s.hyd_pump_displacement_cc,
            hyd_pump_rpm: s.hyd_pump_rpm,
            hyd_pump_count: s.hyd_pump_count,
            hyd_power_hp: s.hyd_power_hp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn presets_validate() {
        for preset in presets::presets() {
            assert_eq!((preset.build)().validate(), Ok(()), "{}", preset.name);
        }
    }

    #[test]
    fn nan_field_is_named() {
        let mut inputs = presets::hydraulic_umbilical();
        inputs.flange_dia_in = f64::NAN;
        assert_eq!(
            inputs.validate(),
            Err(ValidationError::NotFinite {
                field: "flange_dia_in"
            })
        );
    }

    #[test]
    fn negative_cable_length_is_rejected() {
        let mut inputs = presets::hydraulic_umbilical();
        inputs.cable_length_m = -1.0;
        assert!(matches!(
            inputs.validate(),
            Err(ValidationError::Negative {
                field: "cable_length_m",
                ..
            })
        ));
    }

    #[test]
    fn legacy_field_names_deserialize() {
        let json = r#"{
            "winch_type": "hydraulic",
            "req_swl_t": 10.0,
            "req_speed_mpm": 60.0,
            "sel_umb_dia": 41.0,
            "sel_cable_length": 3500.0,
            "sel_umb_weight": 5.0,
            "sel_drum_core_dia": 70.0,
            "sel_drum_lebus_thickness": 0.625,
            "sel_drum_flange_dia": 110.0,
            "sel_drum_flange_to_flange": 91.5,
            "sel_drum_wraps_per_layer": 56.0,
            "sel_payload_weight": 5000.0,
            "motor_count": 6,
            "pinion_ratio": 5.24,
            "gearbox_ratio": 20.0,
            "sel_hyd_sys_press": 4000.0,
            "sel_hyd_mech_efficiency": 0.85
        }"#;
        let inputs: WinchInputs = serde_json::from_str(json).expect("legacy json");
        assert_eq!(inputs.cable_dia_mm, 41.0);
        // 5 lbf/ft
        assert!((inputs.cable_weight_kg_per_m - 7.440_820).abs() < 1e-5);
        assert_eq!(inputs.hyd_system_pressure_psi, 4000.0);
        assert_eq!(inputs.ahc, None);
        assert_eq!(inputs.hyd_pump_count, 0);
    }

    #[test]
    fn one_lbf_per_ft_in_kgf_per_m() {
        assert!((lbf_per_ft_to_kgf_per_m(1.0) - 1.488_164).abs() < 1e-6);
    }

    #[test]
    fn metric_weight_wins_over_legacy() {
        let mut value = serde_json::to_value(presets::electric_wire()).expect("json");
        value["sel_umb_weight"] = serde_json::json!(100.0);
        let inputs: WinchInputs = serde_json::from_value(value).expect("inputs");
        assert_eq!(inputs.cable_weight_kg_per_m, 4.2);
    }

    #[test]
    fn missing_cable_weight_is_rejected() {
        let mut value = serde_json::to_value(presets::electric_wire()).expect("json");
        value
            .as_object_mut()
            .expect("object")
            .remove("cable_weight_kg_per_m");
        let err = serde_json::from_value::<WinchInputs>(value).expect_err("no weight");
        assert!(err.to_string().contains("cable_weight_kg_per_m"), "{err}");
    }

    #[test]
    fn negative_charge_pressure_is_rejected() {
        let mut inputs = presets::hydraulic_umbilical();
        inputs.hyd_charge_pressure_psi = -50.0;
        assert!(matches!(
            inputs.validate(),
            Err(ValidationError::Negative {
                field: "hyd_charge_pressure_psi",
                ..
            })
        ));
    }
}
