//! Mass units.
//!
//! The standard unit is [`Mass::Kilogram`]. The slug and slinch are the consistent mass units of the foot-pound and
//! inch-pound systems: one pound-force accelerates one slug at 1 ft/s² (one slinch at 1 in/s²).
//!
//! ```rust
//! use physq_core::convert;
//! use physq_core::mass::Mass;
//!
//! let g: f64 = convert(1.0, Mass::Pound, Mass::Gram);
//! assert!((g - 453.592_37).abs() < 1e-9);
//! ```

use super::{FOOT, INCH, POUND, POUND_FORCE};
use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(0, 0, 1, 0, 0, 0, 0))]
pub enum Mass {
    /// Kilogram (kg).
    #[unit(
        standard,
        abbreviation = "kg",
        spellings = ["kilogram", "kilograms"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Kilogram,
    /// Gram (g).
    #[unit(
        abbreviation = "g",
        per = 1e3,
        spellings = ["gram", "grams"],
        systems = [MillimetreGramSecondKelvin]
    )]
    Gram,
    /// Slug: lbf·s²/ft.
    #[unit(
        abbreviation = "slug",
        scale = POUND_FORCE / FOOT,
        spellings = ["slugs"],
        systems = [FootPoundSecondRankine]
    )]
    Slug,
    /// Slinch: lbf·s²/in.
    #[unit(
        abbreviation = "slinch",
        scale = POUND_FORCE / INCH,
        spellings = ["slinches"],
        systems = [InchPoundSecondRankine]
    )]
    Slinch,
    /// Avoirdupois pound-mass (lbm).
    #[unit(abbreviation = "lbm", scale = POUND, spellings = ["lb", "pound", "pounds"])]
    Pound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, UnitFamily, UnitSystem};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn kilogram_to_gram_is_exact() {
        assert_eq!(convert(1.0, Mass::Kilogram, Mass::Gram), 1000.0);
        assert_eq!(convert(1000.0, Mass::Gram, Mass::Kilogram), 1.0);
    }

    #[test]
    fn slug_in_kilograms() {
        // 1 slug = 14.593902937 kg
        let kg = convert(1.0, Mass::Slug, Mass::Kilogram);
        assert_relative_eq!(kg, 14.593_902_937_206_364, max_relative = 1e-12);
    }

    #[test]
    fn slinch_is_twelve_slugs() {
        let slugs = convert(1.0, Mass::Slinch, Mass::Slug);
        assert_relative_eq!(slugs, 12.0, max_relative = 1e-14);
    }

    #[test]
    fn pound_has_no_system() {
        assert_eq!(Mass::Pound.related_unit_system(), None);
        assert_eq!(
            Mass::Slinch.related_unit_system(),
            Some(UnitSystem::InchPoundSecondRankine)
        );
    }

    #[test]
    fn parse_accepts_long_forms() {
        assert_eq!("kilograms".parse::<Mass>(), Ok(Mass::Kilogram));
        assert_eq!("lb".parse::<Mass>(), Ok(Mass::Pound));
        assert!("KG".parse::<Mass>().is_err());
    }

    proptest! {
        #[test]
        fn prop_pound_gram_roundtrip(x in -1e9..1e9f64) {
            let back = convert(convert(x, Mass::Pound, Mass::Gram), Mass::Gram, Mass::Pound);
            prop_assert!((back - x).abs() <= 1e-15 * x.abs() * 4.0);
        }
    }
}
