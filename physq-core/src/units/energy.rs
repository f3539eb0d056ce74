//! Energy units.
//!
//! The standard unit is [`Energy::Joule`].

use super::{FOOT, INCH, POUND_FORCE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of energy, work and heat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-2, 2, 1, 0, 0, 0, 0))]
pub enum Energy {
    /// Gigajoule (GJ).
    #[unit(abbreviation = "GJ", scale = 1e9)]
    Gigajoule,
    /// Megajoule (MJ).
    #[unit(abbreviation = "MJ", scale = 1e6)]
    Megajoule,
    /// Kilowatt-hour (kW·hr).
    #[unit(abbreviation = "kW·hr", scale = 3.6e6, spellings = ["kWh", "kW*hr", "kW*h"])]
    KilowattHour,
    /// Kilojoule (kJ).
    #[unit(abbreviation = "kJ", scale = 1e3)]
    Kilojoule,
    /// Watt-hour (W·hr).
    #[unit(abbreviation = "W·hr", scale = 3.6e3, spellings = ["Wh", "W*hr", "W*h"])]
    WattHour,
    /// Joule (J).
    #[unit(
        standard,
        abbreviation = "J",
        spellings = ["joule", "joules", "N*m"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Joule,
    /// Millijoule (mJ).
    #[unit(abbreviation = "mJ", per = 1e3)]
    Millijoule,
    /// Microjoule (μJ).
    #[unit(abbreviation = "μJ", per = 1e6, spellings = ["uJ"])]
    Microjoule,
    /// Nanojoule (nJ), the consistent energy of the millimetre-gram system (g·mm²/s²).
    #[unit(abbreviation = "nJ", per = 1e9, systems = [MillimetreGramSecondKelvin])]
    Nanojoule,
    /// Foot-pound (ft·lbf).
    #[unit(
        abbreviation = "ft·lbf",
        scale = FOOT * POUND_FORCE,
        spellings = ["ft*lbf", "ft-lbf"],
        systems = [FootPoundSecondRankine]
    )]
    FootPound,
    /// Inch-pound (in·lbf).
    #[unit(
        abbreviation = "in·lbf",
        scale = INCH * POUND_FORCE,
        spellings = ["in*lbf", "in-lbf"],
        systems = [InchPoundSecondRankine]
    )]
    InchPound,
}
