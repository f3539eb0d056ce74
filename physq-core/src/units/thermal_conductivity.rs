//! Thermal conductivity units.
//!
//! The standard unit is [`ThermalConductivity::WattPerMetrePerKelvin`], W/(m·K). In the imperial systems the
//! consistent unit reduces to lbf/(s·°R), because (ft·lbf/s)/(ft·°R) and (in·lbf/s)/(in·°R) cancel the length.

use super::{POUND_FORCE, RANKINE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of thermal conductivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-3, 1, 1, 0, -1, 0, 0))]
pub enum ThermalConductivity {
    /// Watt per metre per kelvin (W/m/K).
    #[unit(
        standard,
        abbreviation = "W/m/K",
        spellings = ["W/(m·K)", "W/m·K", "W/(m*K)"],
        systems = [MetreKilogramSecondKelvin]
    )]
    WattPerMetrePerKelvin,
    /// Nanowatt per millimetre per kelvin (nW/mm/K).
    #[unit(
        abbreviation = "nW/mm/K",
        per = 1e6,
        spellings = ["nW/(mm·K)", "nW/(mm*K)"],
        systems = [MillimetreGramSecondKelvin]
    )]
    NanowattPerMillimetrePerKelvin,
    /// Pound-force per second per rankine (lbf/s/°R).
    #[unit(
        abbreviation = "lbf/s/°R",
        scale = POUND_FORCE / RANKINE,
        spellings = ["lbf/s/R", "lbf/(s·°R)", "lbf/(s*R)"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    PoundPerSecondPerRankine,
}
