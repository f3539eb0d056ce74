//! Plane angle units.
//!
//! Angles are dimensionless: their signature is [`Dimensions::DIMENSIONLESS`]. The standard unit is
//! [`Angle::Radian`], consistent in every unit system.

use core::f64::consts::PI;

use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::DIMENSIONLESS)]
pub enum Angle {
    /// Radian (rad).
    #[unit(
        standard,
        abbreviation = "rad",
        spellings = ["radian", "radians"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Radian,
    /// Degree (deg).
    #[unit(abbreviation = "deg", scale = PI / 180.0, spellings = ["°", "degree", "degrees"])]
    Degree,
    /// Arcminute (arcmin), 1/60 degree.
    #[unit(abbreviation = "arcmin", scale = PI / 10_800.0, spellings = ["'", "arcminute", "arcminutes"])]
    Arcminute,
    /// Arcsecond (arcsec), 1/3600 degree.
    #[unit(abbreviation = "arcsec", scale = PI / 648_000.0, spellings = ["\"", "arcsecond", "arcseconds"])]
    Arcsecond,
    /// Revolution (rev), a full turn.
    #[unit(abbreviation = "rev", scale = 2.0 * PI, spellings = ["revolution", "revolutions", "turn", "turns"])]
    Revolution,
}
