//! Winch drum spooling calculations: layer geometry, drivetrain performance,
//! hydraulic pressure back-solve and heave-compensation speed.
//!
//! Everything here is a pure function of [`WinchInputs`] and [`EngineOptions`].

pub mod ahc;
pub mod combine;
pub mod drum;
pub mod inputs;
pub mod performance;
pub mod report;

pub use ahc::{required_ahc_speed, AhcError, AhcSpeed};
pub use combine::{combine, required_pressure_psi, CombinedRow};
pub use drum::{
    compute_layers, try_compute_layers, DrumLayout, EngineOptions, Layer, LayoutError,
    SpoolPosition, Wrap, WrapPattern, FREE_FLANGE_FACTOR, MAX_LAYERS, MAX_WRAPS, PACKING_FACTOR,
};
pub use inputs::{AhcInputs, ValidationError, WinchInputs, WinchType};
pub use performance::{
    compute_performance, drivetrain, try_compute_performance, Drivetrain, PerformanceError,
    PerformanceRow,
};
pub use report::{calculate, RequirementChecks, WinchReport};
