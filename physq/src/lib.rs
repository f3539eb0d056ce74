//! Physical units, dimension signatures and checked conversions.
//!
//! `physq` is the user-facing crate in this workspace. It re-exports the full API from `physq-core` (unit families,
//! dimensions, conversions, quantities) and adds the string-facing layer: conversion between unit spellings and
//! TOML-configured unit preferences.
//!
//! Every physical quantity has a **unit family**, an enum of its units such as [`Length`](length::Length) or
//! [`MassDensity`](mass_density::MassDensity). A family has one standard unit; every conversion goes through it, and
//! each family also names its consistent unit in four unit systems (m·kg·s·K, mm·g·s·K, ft·lbf·s·°R, in·lbf·s·°R).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities: units of different families are different types.
//! - Converts scalars, vectors, dyads and arrays with the same tables.
//! - Picks units from configuration and parses them from text.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or dimensional inference for products of quantities.
//! - Exact arithmetic: conversions use `f32`/`f64`.
//!
//! # Quick start
//!
//! ```rust
//! use physq::mass::Mass;
//! use physq::volume::Volume;
//! use physq::{convert, convert_str, Quantity};
//!
//! assert_eq!(convert(1.0, Mass::Kilogram, Mass::Gram), 1000.0);
//! assert_eq!(convert(1.0, Volume::CubicMetre, Volume::CubicMillimetre), 1.0e9);
//!
//! let litres = convert_str::<Volume, _>(2.0, "m3", "L").unwrap();
//! assert_eq!(litres, 2000.0);
//!
//! let q = Quantity::<Mass>::new(500.0, Mass::Gram);
//! assert_eq!(q.to_string(), "0.5 kg");
//! ```
//!
//! Units fixed at compile time skip the lookup tables entirely:
//!
//! ```rust
//! use physq::length::unit::{Foot, Inch};
//! use physq::convert_statically;
//!
//! let inches: f64 = convert_statically::<Foot, Inch, _>(2.0);
//! assert!((inches - 24.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use physq::length::unit::Metre;
//! use physq::time::unit::Second;
//! use physq::convert_statically;
//!
//! let _ = convert_statically::<Metre, Second, _>(1.0);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `physq-core` (units as strings, quantities as `{ "value", "unit" }`).
//!
//! # Logging
//!
//! This crate logs through the `log` facade and never installs a logger: table construction at `debug`, preference
//! loading at `info`, rejected preference overrides at `warn`.
//!
//! # Panics and errors
//!
//! Typed conversions never fail. String-driven conversions return [`ConversionError`]; loading preferences returns
//! [`ConfigError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use physq_core::*;

mod dynamic;
mod error;
mod preferences;

pub use dynamic::{
    convert_named, convert_str, family_names, is_known_family, is_known_spelling, parse_unit,
};
pub use error::{ConfigError, ConversionError, ConversionResult};
pub use preferences::Preferences;
