//! Core type system for physical units, dimensions and conversions.
//!
//! `physq-core` models units as closed **families**: one enum per physical quantity (mass, volume, temperature, …),
//! each variant a concrete unit. Every family designates a standard unit and knows how to move any value between its
//! variants by routing through that standard unit.
//!
//! - A family is an enum implementing [`UnitFamily`], declared with `#[derive(UnitFamily)]`.
//! - Its dimension signature is a [`Dimensions`] value over the seven SI base dimensions.
//! - Conversion is [`convert`] / [`convert_in_place`] for units chosen at run time, or [`convert_statically`] for
//!   units fixed at compile time through the generated [`StaticUnit`] markers.
//! - A value carried together with its family is a [`Quantity<U, V>`], stored in the standard unit.
//!
//! Most users should depend on `physq` (the facade crate), which adds string-driven conversion and unit preferences.
//!
//! # Quick start
//!
//! ```rust
//! use physq_core::length::Length;
//! use physq_core::{convert, Quantity};
//!
//! let ft: f64 = convert(1.0, Length::Metre, Length::Foot);
//! assert!((ft - 1.0 / 0.3048).abs() < 1e-12);
//!
//! let q = Quantity::<Length>::new(2.5, Length::Kilometre);
//! assert_eq!(q.standard_value(), 2500.0);
//! ```
//!
//! Units from different families never mix: a [`Length`](length::Length) cannot be handed to a function expecting a
//! [`Mass`](mass::Mass), and [`convert`] requires both units to share one family type.
//!
//! # Shapes
//!
//! Any value implementing [`Components`] converts component-wise: `f32`, `f64`, arrays, slices, `Vec`,
//! [`PlanarVector`], [`Vector`], [`SymmetricDyad`] and [`Dyad`].
//!
//! # Feature flags
//!
//! - `serde`: string serialization for unit enums and [`UnitSystem`], component serialization for containers, and a
//!   `{ "value", "unit" }` form for [`Quantity`].
//!
//! # Panics and errors
//!
//! Conversions are pure floating-point computations: they do not fail, and NaN or infinities propagate following
//! IEEE-754. Parsing a spelling returns `Option` (or [`ParseUnitError`] through `FromStr`).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod containers;
mod convert;
mod dimension;
mod error;
mod quantity;
mod registry;
mod scalar;
mod system;
mod transform;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use containers::{Dyad, PlanarVector, SymmetricDyad, Vector};
pub use convert::{
    convert, convert_in_place, convert_statically, convert_statically_in_place, Components,
};
pub use dimension::{base, BaseDimension, Dimension, Dimensions};
pub use error::{ParseUnitError, ParseUnitSystemError};
pub use quantity::Quantity;
pub use registry::Registry;
pub use scalar::Scalar;
pub use system::UnitSystem;
pub use transform::{Conversion, Transform};
pub use unit::{
    abbreviation, consistent_unit, parse, related_dimensions, related_unit_system, standard,
    StaticUnit, UnitFamily,
};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit families
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit families, one module per physical quantity.
///
/// These are defined in `physq-core` because the derive expands against this crate's root paths.
pub mod units;

pub use units::angle;
pub use units::angular_speed;
pub use units::area;
pub use units::energy;
pub use units::energy_flux;
pub use units::force;
pub use units::length;
pub use units::mass;
pub use units::mass_density;
pub use units::power;
pub use units::speed;
pub use units::temperature;
pub use units::temperature_difference;
pub use units::temperature_gradient;
pub use units::thermal_conductivity;
pub use units::time;
pub use units::volume;
