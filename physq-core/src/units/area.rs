//! Area units.
//!
//! The standard unit is [`Area::SquareMetre`].

use super::{FOOT, INCH, MILE, YARD};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 2, 0, 0, 0, 0, 0))]
pub enum Area {
    /// Square mile (mi^2).
    #[unit(abbreviation = "mi^2", scale = MILE * MILE, spellings = ["mi2"])]
    SquareMile,
    /// Square kilometre (km^2).
    #[unit(abbreviation = "km^2", scale = 1e6, spellings = ["km2"])]
    SquareKilometre,
    /// Hectare (ha), 10 000 m².
    #[unit(abbreviation = "ha", scale = 1e4, spellings = ["hectare", "hectares"])]
    Hectare,
    /// International acre (ac), 43 560 ft².
    #[unit(abbreviation = "ac", scale = 43_560.0 * FOOT * FOOT, spellings = ["acre", "acres"])]
    Acre,
    /// Square metre (m^2).
    #[unit(
        standard,
        abbreviation = "m^2",
        spellings = ["m2", "m*m"],
        systems = [MetreKilogramSecondKelvin]
    )]
    SquareMetre,
    /// Square yard (yd^2).
    #[unit(abbreviation = "yd^2", scale = YARD * YARD, spellings = ["yd2"])]
    SquareYard,
    /// Square foot (ft^2).
    #[unit(
        abbreviation = "ft^2",
        scale = FOOT * FOOT,
        spellings = ["ft2", "ft*ft"],
        systems = [FootPoundSecondRankine]
    )]
    SquareFoot,
    /// Square decimetre (dm^2).
    #[unit(abbreviation = "dm^2", per = 1e2, spellings = ["dm2"])]
    SquareDecimetre,
    /// Square inch (in^2).
    #[unit(
        abbreviation = "in^2",
        scale = INCH * INCH,
        spellings = ["in2", "in*in"],
        systems = [InchPoundSecondRankine]
    )]
    SquareInch,
    /// Square centimetre (cm^2).
    #[unit(abbreviation = "cm^2", per = 1e4, spellings = ["cm2"])]
    SquareCentimetre,
    /// Square millimetre (mm^2).
    #[unit(
        abbreviation = "mm^2",
        per = 1e6,
        spellings = ["mm2", "mm*mm"],
        systems = [MillimetreGramSecondKelvin]
    )]
    SquareMillimetre,
}
