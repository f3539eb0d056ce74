//! Absolute temperature units.
//!
//! The standard unit is [`Temperature::Kelvin`]. Celsius and Fahrenheit are affine scales: converting them applies a
//! zero-point shift as well as a scale factor, so `0 °C` is `273.15 K`, not `0 K`. For temperature *intervals*, where
//! no shift applies, use [`TemperatureDifference`](crate::temperature_difference::TemperatureDifference).
//!
//! ```rust
//! use physq_core::convert;
//! use physq_core::temperature::Temperature;
//!
//! let c: f64 = convert(300.0, Temperature::Kelvin, Temperature::Celsius);
//! assert!((c - 26.85).abs() < 1e-9);
//! ```

use super::RANKINE;
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of absolute temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 0, 0, 0, 1, 0, 0))]
pub enum Temperature {
    /// Kelvin (K).
    #[unit(
        standard,
        abbreviation = "K",
        spellings = ["kelvin"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    Kelvin,
    /// Degree Celsius (°C): `K = °C + 273.15`.
    #[unit(abbreviation = "°C", scale = 1.0, offset = 273.15, spellings = ["C", "degC", "celsius"])]
    Celsius,
    /// Rankine (°R): absolute scale with Fahrenheit-sized degrees.
    #[unit(
        abbreviation = "°R",
        scale = RANKINE,
        spellings = ["R", "degR", "rankine"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    Rankine,
    /// Degree Fahrenheit (°F): `K = (°F + 459.67) · 5/9`.
    #[unit(
        abbreviation = "°F",
        scale = RANKINE,
        offset = 459.67 * RANKINE,
        spellings = ["F", "degF", "fahrenheit"]
    )]
    Fahrenheit,
}
