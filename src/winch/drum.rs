//! Drum layer-winding model.
//!
//! The cable is wound layer by layer starting at the bare drum radius. Each
//! new layer sits one radial increment (`cable diameter × 0.866`, cross-lay
//! packing) above the previous one and holds `wraps × circumference` of cable
//! until the cable runs out or the flange rim is reached.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::units::{convert_length, LengthUnit};
use crate::winch::inputs::{ValidationError, WinchInputs};

/// Radial step between layers as a fraction of cable diameter.
pub const PACKING_FACTOR: f64 = 0.866;
/// Minimum free flange as a multiple of cable diameter.
pub const FREE_FLANGE_FACTOR: f64 = 2.5;
/// Largest layer stack the engine will build.
pub const MAX_LAYERS: usize = 10_000;
/// Largest number of per-wrap rows the engine will build.
pub const MAX_WRAPS: usize = 1_000_000;

/// Policy switches for the layer engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Reject any layer whose free flange would drop below
    /// [`FREE_FLANGE_FACTOR`] × cable diameter. When off, the drum fills until
    /// the cable runs out or the layer reaches the flange rim.
    pub enforce_free_flange_limit: bool,
    /// Cable kept back from the water (deck lead, bosun's chair allowance).
    /// Depth is measured from `cable_length - reserve_length_m`.
    pub reserve_length_m: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            enforce_free_flange_limit: true,
            reserve_length_m: 0.0,
        }
    }
}

/// One radial layer of cable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// 1-based layer number
    pub layer: usize,
    /// Wraps the pattern allows on this layer
    pub wraps_available: u32,
    /// Wraps actually filled; fractional on a partly filled last layer
    pub wraps_effective: f64,
    /// Pitch (centerline) diameter of the layer
    pub diameter_m: f64,
    /// Diameter over the outside of the cable on this layer
    pub outer_diameter_m: f64,
    /// Cable length added by this layer
    pub capacity_m: f64,
    /// Cable on the drum up to and including this layer
    pub cumulative_m: f64,
    /// Flange radius minus the radius of the next layer
    pub free_flange_m: f64,
    /// Cable left in the water once this layer is full
    pub depth_m: f64,
}

/// A single wind of cable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wrap {
    pub layer: usize,
    /// 1-based position inside the layer
    pub wrap: u32,
    pub diameter_m: f64,
    /// Length of this wrap; the last wrap of the last layer may be partial
    pub length_m: f64,
    pub cumulative_m: f64,
    pub depth_m: f64,
    /// Static line tension from payload plus wet cable below this wrap
    pub tension_kgf: f64,
}

/// A point on the drum at which line pull and speed can be evaluated.
pub trait SpoolPosition {
    fn diameter_m(&self) -> f64;
    fn depth_m(&self) -> f64;
}

impl SpoolPosition for Layer {
    fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    fn depth_m(&self) -> f64 {
        self.depth_m
    }
}

impl SpoolPosition for Wrap {
    fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    fn depth_m(&self) -> f64 {
        self.depth_m
    }
}

/// Result of a layer calculation.
///
/// On failure `error` is set and `layers`/`wraps` are empty; callers render
/// that as "no layers" instead of aborting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrumLayout {
    pub layers: Vec<Layer>,
    pub wraps: Vec<Wrap>,
    pub bare_drum_diameter_m: f64,
    pub full_drum_diameter_m: f64,
    pub required_free_flange_m: f64,
    pub actual_free_flange_m: f64,
    pub base_wraps: f64,
    /// `true` when wraps per layer came from the flange width rather than the input
    pub used_calculated_wraps: bool,
    pub spooled_length_m: f64,
    /// Cable that did not fit on the drum
    pub unspooled_length_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DrumLayout {
    pub fn failed(err: &LayoutError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// `true` when the whole cable length fit on the drum.
    pub fn fits(&self) -> bool {
        self.is_ok() && self.unspooled_length_m <= 0.0
    }
}

/// Geometry that makes layering impossible.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("cable diameter must be positive (received {0} mm)")]
    NonPositiveCableDiameter(f64),
    #[error("radial layer increment must be positive (received {0} m)")]
    NonPositiveIncrement(f64),
    #[error("flange diameter {flange_dia_in} in must exceed core diameter {core_dia_in} in")]
    FlangeNotAboveCore { flange_dia_in: f64, core_dia_in: f64 },
    #[error("reserve length must be a non-negative number (received {0} m)")]
    InvalidReserve(f64),
    #[error("drum would need about {estimated:.0} layers, more than the limit of {limit}")]
    TooManyLayers { estimated: f64, limit: usize },
    #[error("cable would need about {estimated:.0} wraps, more than the limit of {limit}")]
    TooManyWraps { estimated: f64, limit: usize },
}

/// Wraps per layer across successive layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapPattern {
    /// Half-wrap base: every layer carries the same count.
    Single(u32),
    /// Whole base: even layers (0-indexed) carry `even`, odd layers one fewer.
    Alternating { even: u32, odd: u32 },
}

impl WrapPattern {
    pub fn from_base(base_wraps: f64) -> Self {
        let whole = base_wraps.floor().max(1.0) as u32;
        if is_half_wrap(base_wraps) {
            WrapPattern::Single(whole)
        } else {
            WrapPattern::Alternating {
                even: whole,
                odd: whole.saturating_sub(1).max(1),
            }
        }
    }

    /// Wraps on the layer at 0-based `index`.
    pub fn wraps_for(&self, index: usize) -> u32 {
        match *self {
            WrapPattern::Single(n) => n,
            WrapPattern::Alternating { even, odd } => {
                if index % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

fn is_half_wrap(value: f64) -> bool {
    (value.fract() - 0.5).abs() < 1e-9
}

/// Wraps per layer to use and whether it was calculated.
///
/// A positive input is taken as given. Otherwise the count is the number of
/// cable diameters that fit between the flanges, at least 1.
pub fn base_wraps(wraps_input: f64, flange_to_flange_m: f64, cable_dia_m: f64) -> (f64, bool) {
    if wraps_input > 0.0 {
        return (wraps_input.max(1.0), false);
    }
    let fitted = (flange_to_flange_m / cable_dia_m + 1e-9).floor();
    (fitted.max(1.0), true)
}

/// Computes the layer stack; never fails, errors are folded into the result.
pub fn compute_layers(inputs: &WinchInputs, options: &EngineOptions) -> DrumLayout {
    match try_compute_layers(inputs, options) {
        Ok(layout) => layout,
        Err(err) => {
            warn!("drum layout rejected: {err}");
            DrumLayout::failed(&err)
        }
    }
}

/// Computes the layer stack, returning the reason when the geometry is unusable.
pub fn try_compute_layers(
    inputs: &WinchInputs,
    options: &EngineOptions,
) -> Result<DrumLayout, LayoutError> {
    inputs.validate()?;
    if !options.reserve_length_m.is_finite() || options.reserve_length_m < 0.0 {
        return Err(LayoutError::InvalidReserve(options.reserve_length_m));
    }
    if inputs.cable_dia_mm <= 0.0 {
        return Err(LayoutError::NonPositiveCableDiameter(inputs.cable_dia_mm));
    }
    if inputs.flange_dia_in <= inputs.drum_core_dia_in {
        return Err(LayoutError::FlangeNotAboveCore {
            flange_dia_in: inputs.flange_dia_in,
            core_dia_in: inputs.drum_core_dia_in,
        });
    }

    let inch = |v: f64| convert_length(v, LengthUnit::Inch, LengthUnit::Meter);
    let cable_dia = convert_length(inputs.cable_dia_mm, LengthUnit::Millimeter, LengthUnit::Meter);
    let core_radius = inch(inputs.drum_core_dia_in) / 2.0;
    let lebus = inch(inputs.lebus_thickness_in);
    let flange_radius = inch(inputs.flange_dia_in) / 2.0;
    let flange_to_flange = inch(inputs.flange_to_flange_in);

    let increment = cable_dia * PACKING_FACTOR;
    if !(increment > 0.0) {
        return Err(LayoutError::NonPositiveIncrement(increment));
    }

    let required_free_flange = FREE_FLANGE_FACTOR * cable_dia;
    let bare_radius = core_radius + cable_dia / 2.0 + lebus;
    let (base, used_calculated_wraps) =
        base_wraps(inputs.wraps_per_layer, flange_to_flange, cable_dia);
    let pattern = WrapPattern::from_base(base);
    let wet_length = (inputs.cable_length_m - options.reserve_length_m).max(0.0);

    // Radius grows by `increment` per layer, so this bounds the loop even for
    // inputs that would otherwise never exhaust the cable.
    let layer_bound = ((flange_radius - bare_radius) / increment).ceil().max(0.0) + 1.0;
    if layer_bound > MAX_LAYERS as f64 {
        return Err(LayoutError::TooManyLayers {
            estimated: layer_bound,
            limit: MAX_LAYERS,
        });
    }
    let max_layers = layer_bound as usize;

    // Wraps are bounded by the cable (each wrap is at least one bare
    // circumference long, plus one partial wrap per layer) and by the drum.
    let by_cable = inputs.cable_length_m / (2.0 * PI * bare_radius) + layer_bound;
    let by_drum = layer_bound * f64::from(pattern.wraps_for(0));
    let wrap_bound = by_cable.min(by_drum).ceil();
    if wrap_bound > MAX_WRAPS as f64 {
        return Err(LayoutError::TooManyWraps {
            estimated: wrap_bound,
            limit: MAX_WRAPS,
        });
    }

    let mut layers = Vec::new();
    let mut remaining = inputs.cable_length_m;
    let mut cumulative = 0.0;
    for index in 0..max_layers {
        if remaining <= 0.0 {
            break;
        }
        let radius = bare_radius + index as f64 * increment;
        if radius >= flange_radius {
            break;
        }
        let free_flange = flange_radius - (radius + increment);
        if options.enforce_free_flange_limit && free_flange < required_free_flange {
            warn!(
                layer = index + 1,
                free_flange_m = free_flange,
                required_m = required_free_flange,
                "layer rejected for free flange, drum full"
            );
            break;
        }

        let wraps_available = pattern.wraps_for(index);
        let circumference = 2.0 * PI * radius;
        let capacity = (circumference * wraps_available as f64).min(remaining);
        cumulative += capacity;
        remaining -= capacity;

        debug!(
            layer = index + 1,
            diameter_m = 2.0 * radius,
            capacity_m = capacity,
            "layer accepted"
        );
        layers.push(Layer {
            layer: index + 1,
            wraps_available,
            wraps_effective: capacity / circumference,
            diameter_m: 2.0 * radius,
            outer_diameter_m: 2.0 * radius + cable_dia,
            capacity_m: capacity,
            cumulative_m: cumulative,
            free_flange_m: free_flange,
            depth_m: (wet_length - cumulative).max(0.0),
        });
    }

    let wraps = split_into_wraps(&layers, inputs, wet_length);
    let bare_drum_diameter = 2.0 * bare_radius;
    let (full_drum_diameter, actual_free_flange) = match layers.last() {
        Some(last) => (last.diameter_m, last.free_flange_m),
        None => (bare_drum_diameter, flange_radius - bare_radius),
    };

    Ok(DrumLayout {
        layers,
        wraps,
        bare_drum_diameter_m: bare_drum_diameter,
        full_drum_diameter_m: full_drum_diameter,
        required_free_flange_m: required_free_flange,
        actual_free_flange_m: actual_free_flange,
        base_wraps: base,
        used_calculated_wraps,
        spooled_length_m: cumulative,
        unspooled_length_m: remaining.max(0.0),
        error: None,
    })
}

fn split_into_wraps(layers: &[Layer], inputs: &WinchInputs, wet_length: f64) -> Vec<Wrap> {
    let mut wraps = Vec::new();
    let mut cumulative = 0.0;
    for layer in layers {
        let circumference = PI * layer.diameter_m;
        let mut left = layer.capacity_m;
        let mut wrap = 0;
        while left > 1e-9 {
            let length = circumference.min(left);
            left -= length;
            cumulative += length;
            wrap += 1;
            let depth = (wet_length - cumulative).max(0.0);
            wraps.push(Wrap {
                layer: layer.layer,
                wrap,
                diameter_m: layer.diameter_m,
                length_m: length,
                cumulative_m: cumulative,
                depth_m: depth,
                tension_kgf: inputs.payload_weight_kg + inputs.cable_weight_kg_per_m * depth,
            });
        }
    }
    wraps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_wrap_base_uses_single_pattern() {
        let pattern = WrapPattern::from_base(55.5);
        assert_eq!(pattern, WrapPattern::Single(55));
        assert_eq!(pattern.wraps_for(0), pattern.wraps_for(1));
    }

    #[test]
    fn whole_base_alternates() {
        let pattern = WrapPattern::from_base(56.0);
        assert_eq!(pattern.wraps_for(0), 56);
        assert_eq!(pattern.wraps_for(1), 55);
        assert_eq!(pattern.wraps_for(2), 56);
    }

    #[test]
    fn single_wrap_never_alternates_to_zero() {
        let pattern = WrapPattern::from_base(1.0);
        assert_eq!(pattern.wraps_for(1), 1);
    }

    #[test]
    fn non_positive_input_triggers_auto_wraps() {
        let (wraps, calculated) = base_wraps(0.0, 1.0, 0.03);
        assert_eq!(wraps, 33.0);
        assert!(calculated);
        let (wraps, calculated) = base_wraps(-4.0, 1.0, 0.03);
        assert_eq!(wraps, 33.0);
        assert!(calculated);
    }

    #[test]
    fn hair_thin_cable_is_refused() {
        let inputs = WinchInputs {
            cable_dia_mm: 1e-6,
            ..crate::presets::hydraulic_umbilical()
        };
        assert!(matches!(
            try_compute_layers(&inputs, &EngineOptions::default()),
            Err(LayoutError::TooManyLayers { .. })
        ));
    }

    #[test]
    fn auto_wraps_clamp_to_one() {
        let (wraps, _) = base_wraps(0.0, 0.01, 0.03);
        assert_eq!(wraps, 1.0);
    }
}
