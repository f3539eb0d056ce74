//! Temperature gradient units: temperature difference per unit length.
//!
//! Gradients are built on temperature *differences*, so no zero-point shift applies anywhere in this family.

use super::{FOOT, INCH, RANKINE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of temperature gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, -1, 0, 0, 1, 0, 0))]
pub enum TemperatureGradient {
    /// Kelvin per metre (K/m).
    #[unit(standard, abbreviation = "K/m", systems = [MetreKilogramSecondKelvin])]
    KelvinPerMetre,
    /// Kelvin per millimetre (K/mm).
    #[unit(abbreviation = "K/mm", scale = 1e3, systems = [MillimetreGramSecondKelvin])]
    KelvinPerMillimetre,
    /// Degree Celsius per metre (°C/m).
    #[unit(abbreviation = "°C/m", scale = 1.0, spellings = ["C/m"])]
    CelsiusPerMetre,
    /// Degree Celsius per millimetre (°C/mm).
    #[unit(abbreviation = "°C/mm", scale = 1e3, spellings = ["C/mm"])]
    CelsiusPerMillimetre,
    /// Rankine per foot (°R/ft).
    #[unit(
        abbreviation = "°R/ft",
        scale = RANKINE / FOOT,
        spellings = ["R/ft"],
        systems = [FootPoundSecondRankine]
    )]
    RankinePerFoot,
    /// Rankine per inch (°R/in).
    #[unit(
        abbreviation = "°R/in",
        scale = RANKINE / INCH,
        spellings = ["R/in"],
        systems = [InchPoundSecondRankine]
    )]
    RankinePerInch,
    /// Degree Fahrenheit per foot (°F/ft).
    #[unit(abbreviation = "°F/ft", scale = RANKINE / FOOT, spellings = ["F/ft"])]
    FahrenheitPerFoot,
    /// Degree Fahrenheit per inch (°F/in).
    #[unit(abbreviation = "°F/in", scale = RANKINE / INCH, spellings = ["F/in"])]
    FahrenheitPerInch,
}
