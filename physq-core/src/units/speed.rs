//! Linear speed units.
//!
//! The standard unit is [`Speed::MetrePerSecond`].

use super::{FOOT, INCH, MILE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-1, 1, 0, 0, 0, 0, 0))]
pub enum Speed {
    /// Metre per second (m/s).
    #[unit(
        standard,
        abbreviation = "m/s",
        spellings = ["m/sec"],
        systems = [MetreKilogramSecondKelvin]
    )]
    MetrePerSecond,
    /// Millimetre per second (mm/s).
    #[unit(
        abbreviation = "mm/s",
        per = 1e3,
        spellings = ["mm/sec"],
        systems = [MillimetreGramSecondKelvin]
    )]
    MillimetrePerSecond,
    /// Foot per second (ft/s).
    #[unit(
        abbreviation = "ft/s",
        scale = FOOT,
        spellings = ["ft/sec", "fps"],
        systems = [FootPoundSecondRankine]
    )]
    FootPerSecond,
    /// Inch per second (in/s).
    #[unit(
        abbreviation = "in/s",
        scale = INCH,
        spellings = ["in/sec", "ips"],
        systems = [InchPoundSecondRankine]
    )]
    InchPerSecond,
    /// Kilometre per second (km/s).
    #[unit(abbreviation = "km/s", scale = 1e3, spellings = ["km/sec"])]
    KilometrePerSecond,
    /// Kilometre per hour (km/hr).
    #[unit(abbreviation = "km/hr", scale = 1e3 / 3_600.0, spellings = ["km/h", "kph"])]
    KilometrePerHour,
    /// Mile per hour (mi/hr).
    #[unit(abbreviation = "mi/hr", scale = MILE / 3_600.0, spellings = ["mi/h", "mph"])]
    MilePerHour,
    /// Knot (kn), one nautical mile per hour.
    #[unit(abbreviation = "kn", scale = 1_852.0 / 3_600.0, spellings = ["kt", "knot", "knots"])]
    Knot,
}
