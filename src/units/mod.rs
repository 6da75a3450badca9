//! Unit definitions and conversions.
//!
//! Every quantity has one base unit (metre, newton, pascal, watt, m/s, m³, kg).
//! Values are converted into the base once and out of it once, never chained
//! through intermediate display units.

pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod velocity;
pub mod volume;

pub use force::{convert_force, ForceUnit, STANDARD_GRAVITY};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
