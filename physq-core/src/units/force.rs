//! Force units.
//!
//! The standard unit is [`Force::Newton`]. The pound-force is the consistent force unit of both imperial systems.

use super::POUND_FORCE;
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-2, 1, 1, 0, 0, 0, 0))]
pub enum Force {
    /// Meganewton (MN).
    #[unit(abbreviation = "MN", scale = 1e6)]
    Meganewton,
    /// Kilonewton (kN).
    #[unit(abbreviation = "kN", scale = 1e3)]
    Kilonewton,
    /// Newton (N).
    #[unit(
        standard,
        abbreviation = "N",
        spellings = ["newton", "newtons", "kg*m/s^2"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Newton,
    /// Millinewton (mN).
    #[unit(abbreviation = "mN", per = 1e3)]
    Millinewton,
    /// Micronewton (μN), the consistent force of the millimetre-gram system (g·mm/s²).
    #[unit(
        abbreviation = "μN",
        per = 1e6,
        spellings = ["uN", "g*mm/s^2"],
        systems = [MillimetreGramSecondKelvin]
    )]
    Micronewton,
    /// Dyne (dyn), g·cm/s².
    #[unit(abbreviation = "dyn", per = 1e5, spellings = ["dyne", "dynes"])]
    Dyne,
    /// Pound-force (lbf).
    #[unit(
        abbreviation = "lbf",
        scale = POUND_FORCE,
        spellings = ["lb_f", "pound-force"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    Pound,
}
