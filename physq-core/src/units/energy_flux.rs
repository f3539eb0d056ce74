//! Energy flux (heat flux) units: power per unit area.

use super::{FOOT, INCH, POUND_FORCE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of energy flux.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-3, 0, 1, 0, 0, 0, 0))]
pub enum EnergyFlux {
    /// Kilowatt per square metre (kW/m^2).
    #[unit(abbreviation = "kW/m^2", scale = 1e3, spellings = ["kW/m2"])]
    KilowattPerSquareMetre,
    /// Watt per square metre (W/m^2).
    #[unit(
        standard,
        abbreviation = "W/m^2",
        spellings = ["W/m2", "kg/s^3"],
        systems = [MetreKilogramSecondKelvin]
    )]
    WattPerSquareMetre,
    /// Nanowatt per square millimetre (nW/mm^2).
    #[unit(
        abbreviation = "nW/mm^2",
        per = 1e3,
        spellings = ["nW/mm2", "g/s^3"],
        systems = [MillimetreGramSecondKelvin]
    )]
    NanowattPerSquareMillimetre,
    /// Foot-pound per square foot per second (ft·lbf/ft^2/s), i.e. lbf/(ft·s).
    #[unit(
        abbreviation = "ft·lbf/ft^2/s",
        scale = POUND_FORCE / FOOT,
        spellings = ["ft*lbf/ft^2/s", "lbf/ft/s"],
        systems = [FootPoundSecondRankine]
    )]
    FootPoundPerSquareFootPerSecond,
    /// Inch-pound per square inch per second (in·lbf/in^2/s), i.e. lbf/(in·s).
    #[unit(
        abbreviation = "in·lbf/in^2/s",
        scale = POUND_FORCE / INCH,
        spellings = ["in*lbf/in^2/s", "lbf/in/s"],
        systems = [InchPoundSecondRankine]
    )]
    InchPoundPerSquareInchPerSecond,
}
