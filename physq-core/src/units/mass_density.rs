//! Mass density units.
//!
//! The standard unit is [`MassDensity::KilogramPerCubicMetre`]. Besides the canonical abbreviation every unit
//! accepts the exponent-free `kg/m3` form and the fully expanded `kg/m/m/m` form.
//!
//! ```rust
//! use physq_core::convert;
//! use physq_core::mass_density::MassDensity;
//!
//! let water = convert(1.0, MassDensity::GramPerCubicCentimetre, MassDensity::KilogramPerCubicMetre);
//! assert_eq!(water, 1000.0);
//! ```

use super::{FOOT, INCH, POUND, POUND_FORCE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of mass density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, -3, 1, 0, 0, 0, 0))]
pub enum MassDensity {
    /// Kilogram per cubic metre (kg/m^3).
    #[unit(
        standard,
        abbreviation = "kg/m^3",
        spellings = ["kg/m3", "kg/m/m/m"],
        systems = [MetreKilogramSecondKelvin]
    )]
    KilogramPerCubicMetre,
    /// Gram per cubic millimetre (g/mm^3).
    #[unit(
        abbreviation = "g/mm^3",
        scale = 1e6,
        spellings = ["g/mm3", "g/mm/mm/mm"],
        systems = [MillimetreGramSecondKelvin]
    )]
    GramPerCubicMillimetre,
    /// Gram per cubic centimetre (g/cm^3).
    #[unit(abbreviation = "g/cm^3", scale = 1e3, spellings = ["g/cm3", "g/cm/cm/cm", "g/cc"])]
    GramPerCubicCentimetre,
    /// Gram per litre (g/L), numerically equal to kg/m³.
    #[unit(abbreviation = "g/L", scale = 1.0, spellings = ["g/l"])]
    GramPerLitre,
    /// Slug per cubic foot (slug/ft^3).
    #[unit(
        abbreviation = "slug/ft^3",
        scale = POUND_FORCE / FOOT / (FOOT * FOOT * FOOT),
        spellings = ["slug/ft3", "slug/ft/ft/ft"],
        systems = [FootPoundSecondRankine]
    )]
    SlugPerCubicFoot,
    /// Slinch per cubic inch (slinch/in^3).
    #[unit(
        abbreviation = "slinch/in^3",
        scale = POUND_FORCE / INCH / (INCH * INCH * INCH),
        spellings = ["slinch/in3", "slinch/in/in/in"],
        systems = [InchPoundSecondRankine]
    )]
    SlinchPerCubicInch,
    /// Pound-mass per cubic foot (lbm/ft^3).
    #[unit(
        abbreviation = "lbm/ft^3",
        scale = POUND / (FOOT * FOOT * FOOT),
        spellings = ["lbm/ft3", "lb/ft^3", "lb/ft3", "lbm/ft/ft/ft"]
    )]
    PoundPerCubicFoot,
    /// Pound-mass per cubic inch (lbm/in^3).
    #[unit(
        abbreviation = "lbm/in^3",
        scale = POUND / (INCH * INCH * INCH),
        spellings = ["lbm/in3", "lb/in^3", "lb/in3", "lbm/in/in/in"]
    )]
    PoundPerCubicInch,
}
