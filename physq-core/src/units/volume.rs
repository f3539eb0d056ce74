//! Volume units.
//!
//! The standard unit is [`Volume::CubicMetre`]. The litre is exactly one cubic decimetre.
//!
//! ```rust
//! use physq_core::convert;
//! use physq_core::volume::Volume;
//!
//! assert_eq!(convert(1.0, Volume::CubicMetre, Volume::CubicMillimetre), 1.0e9);
//! ```

use super::{FOOT, INCH, YARD};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 3, 0, 0, 0, 0, 0))]
pub enum Volume {
    /// Cubic kilometre (km^3).
    #[unit(abbreviation = "km^3", scale = 1e9, spellings = ["km3"])]
    CubicKilometre,
    /// Cubic metre (m^3).
    #[unit(
        standard,
        abbreviation = "m^3",
        spellings = ["m3", "m*m*m"],
        systems = [MetreKilogramSecondKelvin]
    )]
    CubicMetre,
    /// Cubic yard (yd^3).
    #[unit(abbreviation = "yd^3", scale = YARD * YARD * YARD, spellings = ["yd3"])]
    CubicYard,
    /// Cubic foot (ft^3).
    #[unit(
        abbreviation = "ft^3",
        scale = FOOT * FOOT * FOOT,
        spellings = ["ft3", "ft*ft*ft"],
        systems = [FootPoundSecondRankine]
    )]
    CubicFoot,
    /// Cubic decimetre (dm^3).
    #[unit(abbreviation = "dm^3", per = 1e3, spellings = ["dm3"])]
    CubicDecimetre,
    /// Litre (L).
    #[unit(abbreviation = "L", per = 1e3, spellings = ["l", "litre", "liter", "litres", "liters"])]
    Litre,
    /// Cubic inch (in^3).
    #[unit(
        abbreviation = "in^3",
        scale = INCH * INCH * INCH,
        spellings = ["in3", "in*in*in"],
        systems = [InchPoundSecondRankine]
    )]
    CubicInch,
    /// Cubic centimetre (cm^3).
    #[unit(abbreviation = "cm^3", per = 1e6, spellings = ["cm3", "cc"])]
    CubicCentimetre,
    /// Millilitre (mL).
    #[unit(abbreviation = "mL", per = 1e6, spellings = ["ml", "millilitre", "milliliter"])]
    Millilitre,
    /// Cubic millimetre (mm^3).
    #[unit(
        abbreviation = "mm^3",
        per = 1e9,
        spellings = ["mm3", "mm*mm*mm"],
        systems = [MillimetreGramSecondKelvin]
    )]
    CubicMillimetre,
}
