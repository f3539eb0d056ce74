//! Power units.
//!
//! The standard unit is [`Power::Watt`]. Mechanical horsepower is defined as 550 ft·lbf/s.

use super::{FOOT, INCH, POUND_FORCE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-3, 2, 1, 0, 0, 0, 0))]
pub enum Power {
    /// Gigawatt (GW).
    #[unit(abbreviation = "GW", scale = 1e9)]
    Gigawatt,
    /// Megawatt (MW).
    #[unit(abbreviation = "MW", scale = 1e6)]
    Megawatt,
    /// Kilowatt (kW).
    #[unit(abbreviation = "kW", scale = 1e3)]
    Kilowatt,
    /// Mechanical horsepower (hp).
    #[unit(abbreviation = "hp", scale = 550.0 * FOOT * POUND_FORCE, spellings = ["horsepower"])]
    Horsepower,
    /// Watt (W).
    #[unit(
        standard,
        abbreviation = "W",
        spellings = ["watt", "watts", "J/s"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Watt,
    /// Foot-pound per second (ft·lbf/s).
    #[unit(
        abbreviation = "ft·lbf/s",
        scale = FOOT * POUND_FORCE,
        spellings = ["ft*lbf/s", "ft-lbf/s"],
        systems = [FootPoundSecondRankine]
    )]
    FootPoundPerSecond,
    /// Inch-pound per second (in·lbf/s).
    #[unit(
        abbreviation = "in·lbf/s",
        scale = INCH * POUND_FORCE,
        spellings = ["in*lbf/s", "in-lbf/s"],
        systems = [InchPoundSecondRankine]
    )]
    InchPoundPerSecond,
    /// Milliwatt (mW).
    #[unit(abbreviation = "mW", per = 1e3)]
    Milliwatt,
    /// Microwatt (μW).
    #[unit(abbreviation = "μW", per = 1e6, spellings = ["uW"])]
    Microwatt,
    /// Nanowatt (nW), the consistent power of the millimetre-gram system.
    #[unit(abbreviation = "nW", per = 1e9, systems = [MillimetreGramSecondKelvin])]
    Nanowatt,
}
