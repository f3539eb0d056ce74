//! Temperature difference (interval) units.
//!
//! A difference between two temperatures carries no zero point, so every unit here is purely multiplicative: a
//! change of 1 °C equals a change of 1 K, and a change of 1 °F equals a change of 1 °R = 5/9 K.

use super::RANKINE;
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of temperature difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 0, 0, 0, 1, 0, 0))]
pub enum TemperatureDifference {
    /// Kelvin (K).
    #[unit(
        standard,
        abbreviation = "K",
        spellings = ["kelvin"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    Kelvin,
    /// Degree Celsius (°C).
    #[unit(abbreviation = "°C", scale = 1.0, spellings = ["C", "degC", "celsius"])]
    Celsius,
    /// Rankine (°R).
    #[unit(
        abbreviation = "°R",
        scale = RANKINE,
        spellings = ["R", "degR", "rankine"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    Rankine,
    /// Degree Fahrenheit (°F).
    #[unit(abbreviation = "°F", scale = RANKINE, spellings = ["F", "degF", "fahrenheit"])]
    Fahrenheit,
}
