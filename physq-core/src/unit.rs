//! Unit-family traits.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

use crate::registry::Registry;
use crate::transform::{Conversion, Transform};
use crate::{Dimensions, ParseUnitError, UnitSystem};

/// Trait implemented by every **unit family** enum.
///
/// A family is the closed set of interchangeable units for one physical quantity (all units of mass, all units of
/// volume, …). Exactly one variant is the [`STANDARD`](Self::STANDARD) unit: quantities store their values in it and
/// every conversion is routed through it, so each variant only needs a transform to and from the standard unit.
///
/// Families are declared with `#[derive(UnitFamily)]` rather than implemented by hand; see the [`units`](crate::units)
/// module for the built-in tables.
///
/// # Invariants
///
/// - `VARIANTS` lists every variant exactly once.
/// - `conversion(v)` is finite and non-degenerate (non-zero scale) for every `v`.
/// - Each spelling maps to a single variant, and every variant accepts its own abbreviation.
pub trait UnitFamily:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = ParseUnitError> + Send + Sync + 'static
{
    /// Family name, e.g. `"MassDensity"`.
    const NAME: &'static str;

    /// Reference unit values are stored in.
    const STANDARD: Self;

    /// Dimension signature shared by every unit of the family.
    const DIMENSIONS: Dimensions;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical display abbreviation.
    fn abbreviation(self) -> &'static str;

    /// Every accepted parse spelling, the abbreviation first.
    fn spellings(self) -> &'static [&'static str];

    /// Declarative conversion row of this unit.
    fn conversion(self) -> Conversion;

    /// Preferred unit of this family under a unit system.
    fn consistent_unit(system: UnitSystem) -> Self;

    /// First unit system (in [`UnitSystem::ALL`] order) whose consistent unit is `self`.
    fn related_unit_system(self) -> Option<UnitSystem>;

    /// Process-wide conversion tables of this family, built on first use.
    fn registry() -> &'static Registry<Self>;

    /// Looks a spelling up; `None` when it is not accepted by any variant.
    fn parse(s: &str) -> Option<Self> {
        Self::registry().parse(s)
    }

    /// Registered transform from `self` into the standard unit.
    fn to_standard(self) -> Transform {
        Self::registry().to_standard(self)
    }

    /// Registered transform from the standard unit into `self`.
    fn from_standard(self) -> Transform {
        Self::registry().from_standard(self)
    }

    /// Returns `true` for the standard unit.
    fn is_standard(self) -> bool {
        self == Self::STANDARD
    }
}

/// Zero-sized marker for one unit known at compile time.
///
/// `#[derive(UnitFamily)]` emits one marker per variant in a `unit` submodule next to the family enum, e.g.
/// `physq_core::mass::unit::Gram`. The transforms are associated constants, so
/// [`convert_statically`](crate::convert_statically) resolves them without consulting the registry.
pub trait StaticUnit: Copy + Default + Debug + 'static {
    /// Family the unit belongs to.
    type Family: UnitFamily;

    /// The runtime variant this marker stands for.
    const UNIT: Self::Family;

    /// Transform into the family's standard unit.
    const TO_STANDARD: Transform;

    /// Transform out of the family's standard unit.
    const FROM_STANDARD: Transform;
}

/// Standard unit of family `U`.
pub fn standard<U: UnitFamily>() -> U {
    U::STANDARD
}

/// Dimension signature of family `U`.
///
/// ```rust
/// use physq_core::mass::Mass;
/// use physq_core::volume::Volume;
/// use physq_core::related_dimensions;
///
/// assert_ne!(related_dimensions::<Mass>(), related_dimensions::<Volume>());
/// ```
pub fn related_dimensions<U: UnitFamily>() -> Dimensions {
    U::DIMENSIONS
}

/// Display abbreviation of a unit.
pub fn abbreviation<U: UnitFamily>(unit: U) -> &'static str {
    unit.abbreviation()
}

/// Parses a unit spelling of family `U`; unrecognized input yields `None`.
///
/// ```rust
/// use physq_core::mass_density::MassDensity;
/// use physq_core::parse;
///
/// assert_eq!(parse::<MassDensity>("kg/m/m/m"), Some(MassDensity::KilogramPerCubicMetre));
/// assert_eq!(parse::<MassDensity>("furlong"), None);
/// ```
pub fn parse<U: UnitFamily>(s: &str) -> Option<U> {
    U::parse(s)
}

/// Preferred unit of family `U` in a unit system.
pub fn consistent_unit<U: UnitFamily>(system: UnitSystem) -> U {
    U::consistent_unit(system)
}

/// Unit system a unit is the consistent representative of, if any.
pub fn related_unit_system<U: UnitFamily>(unit: U) -> Option<UnitSystem> {
    unit.related_unit_system()
}
