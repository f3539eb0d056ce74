//! Length units.
//!
//! The standard unit is [`Length::Metre`]. Imperial lengths use the international yard and pound agreement of 1959,
//! so the foot is exactly 0.3048 m and the inch exactly 0.0254 m.
//!
//! ```rust
//! use physq_core::convert;
//! use physq_core::length::Length;
//!
//! assert_eq!(convert(1.0, Length::Inch, Length::Millimetre), 25.4);
//! ```

use super::{FOOT, INCH, MILE, YARD};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 1, 0, 0, 0, 0, 0))]
pub enum Length {
    /// Mile (mi).
    #[unit(abbreviation = "mi", scale = MILE, spellings = ["mile", "miles"])]
    Mile,
    /// Kilometre (km).
    #[unit(abbreviation = "km", scale = 1e3, spellings = ["kilometre", "kilometer", "kilometres", "kilometers"])]
    Kilometre,
    /// Metre (m).
    #[unit(
        standard,
        abbreviation = "m",
        spellings = ["metre", "meter", "metres", "meters"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Metre,
    /// Yard (yd).
    #[unit(abbreviation = "yd", scale = YARD, spellings = ["yard", "yards"])]
    Yard,
    /// Foot (ft).
    #[unit(
        abbreviation = "ft",
        scale = FOOT,
        spellings = ["foot", "feet"],
        systems = [FootPoundSecondRankine]
    )]
    Foot,
    /// Decimetre (dm).
    #[unit(abbreviation = "dm", per = 10.0, spellings = ["decimetre", "decimeter"])]
    Decimetre,
    /// Inch (in).
    #[unit(
        abbreviation = "in",
        scale = INCH,
        spellings = ["inch", "inches"],
        systems = [InchPoundSecondRankine]
    )]
    Inch,
    /// Centimetre (cm).
    #[unit(abbreviation = "cm", per = 1e2, spellings = ["centimetre", "centimeter"])]
    Centimetre,
    /// Millimetre (mm).
    #[unit(
        abbreviation = "mm",
        per = 1e3,
        spellings = ["millimetre", "millimeter", "millimetres", "millimeters"],
        systems = [MillimetreGramSecondKelvin]
    )]
    Millimetre,
    /// Milliinch (mil), a thousandth of an inch.
    #[unit(abbreviation = "mil", scale = INCH / 1e3, spellings = ["thou", "milliinch"])]
    Milliinch,
    /// Micrometre (μm).
    #[unit(abbreviation = "μm", per = 1e6, spellings = ["um", "micrometre", "micrometer", "micron"])]
    Micrometre,
    /// Nanometre (nm).
    #[unit(abbreviation = "nm", per = 1e9, spellings = ["nanometre", "nanometer"])]
    Nanometre,
}
