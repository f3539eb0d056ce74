//! Predefined unit families grouped by physical quantity.
//!
//! Each module declares one family enum with `#[derive(UnitFamily)]` plus the generated `unit` submodule of
//! compile-time markers. Every family maps all four [`UnitSystem`](crate::UnitSystem)s to a consistent unit.
//!
//! ## Modules
//!
//! - [`time`], [`length`], [`area`], [`volume`]: kinematic base and geometric units.
//! - [`angle`] and [`angular_speed`]: plane angles (dimensionless) and their rates.
//! - [`speed`]: linear speed.
//! - [`mass`] and [`mass_density`].
//! - [`force`], [`energy`], [`power`] and [`energy_flux`]: mechanical units.
//! - [`temperature`] (absolute, affine), [`temperature_difference`] (purely multiplicative),
//!   [`temperature_gradient`] and [`thermal_conductivity`].
//!
//! Conversion constants are exact definitions where one exists (international foot and pound, standard gravity)
//! and are composed from the shared constants below rather than re-typed per unit.

pub mod angle;
pub mod angular_speed;
pub mod area;
pub mod energy;
pub mod energy_flux;
pub mod force;
pub mod length;
pub mod mass;
pub mod mass_density;
pub mod power;
pub mod speed;
pub mod temperature;
pub mod temperature_difference;
pub mod temperature_gradient;
pub mod thermal_conductivity;
pub mod time;
pub mod volume;

// ─────────────────────────────────────────────────────────────────────────────
// Shared defining constants (SI values)
// ─────────────────────────────────────────────────────────────────────────────

/// International foot, in metres.
pub(crate) const FOOT: f64 = 0.3048;

/// International inch, in metres.
pub(crate) const INCH: f64 = 0.0254;

/// International yard, in metres.
pub(crate) const YARD: f64 = 0.9144;

/// International mile, in metres.
pub(crate) const MILE: f64 = 1609.344;

/// Avoirdupois pound, in kilograms.
pub(crate) const POUND: f64 = 0.453_592_37;

/// Standard acceleration of gravity, in m/s².
pub(crate) const STANDARD_GRAVITY: f64 = 9.806_65;

/// Pound-force, in newtons.
pub(crate) const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;

/// Size of one rankine (or Fahrenheit degree), in kelvins.
pub(crate) const RANKINE: f64 = 5.0 / 9.0;
