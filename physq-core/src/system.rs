//! Consistent unit systems.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::error::ParseUnitSystemError;

/// A named bundle of base units designating one preferred unit per family.
///
/// Every unit family maps each system to its consistent unit through
/// [`UnitFamily::consistent_unit`](crate::UnitFamily::consistent_unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// Metre, kilogram, second, kelvin (SI).
    #[default]
    MetreKilogramSecondKelvin,
    /// Millimetre, gram, second, kelvin.
    MillimetreGramSecondKelvin,
    /// Foot, pound, second, rankine.
    FootPoundSecondRankine,
    /// Inch, pound, second, rankine.
    InchPoundSecondRankine,
}

impl UnitSystem {
    /// All systems in declaration order.
    pub const ALL: [UnitSystem; 4] = [
        UnitSystem::MetreKilogramSecondKelvin,
        UnitSystem::MillimetreGramSecondKelvin,
        UnitSystem::FootPoundSecondRankine,
        UnitSystem::InchPoundSecondRankine,
    ];

    /// Display abbreviation, e.g. `"m·kg·s·K"`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            UnitSystem::MetreKilogramSecondKelvin => "m·kg·s·K",
            UnitSystem::MillimetreGramSecondKelvin => "mm·g·s·K",
            UnitSystem::FootPoundSecondRankine => "ft·lbf·s·°R",
            UnitSystem::InchPoundSecondRankine => "in·lbf·s·°R",
        }
    }

    /// Variant name, e.g. `"MetreKilogramSecondKelvin"`.
    pub const fn name(self) -> &'static str {
        match self {
            UnitSystem::MetreKilogramSecondKelvin => "MetreKilogramSecondKelvin",
            UnitSystem::MillimetreGramSecondKelvin => "MillimetreGramSecondKelvin",
            UnitSystem::FootPoundSecondRankine => "FootPoundSecondRankine",
            UnitSystem::InchPoundSecondRankine => "InchPoundSecondRankine",
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    /// Accepts either the variant name or the abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UnitSystem::ALL
            .into_iter()
            .find(|sys| sys.name() == s || sys.abbreviation() == s)
            .ok_or_else(|| ParseUnitSystemError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_name_and_abbreviation() {
        for sys in UnitSystem::ALL {
            assert_eq!(sys.name().parse::<UnitSystem>(), Ok(sys));
            assert_eq!(sys.abbreviation().parse::<UnitSystem>(), Ok(sys));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "cgs".parse::<UnitSystem>().unwrap_err();
        assert_eq!(err, ParseUnitSystemError("cgs".to_string()));
        assert!(err.to_string().contains("cgs"));
    }

    #[test]
    fn default_is_si() {
        assert_eq!(UnitSystem::default(), UnitSystem::MetreKilogramSecondKelvin);
        assert_eq!(UnitSystem::default().to_string(), "m·kg·s·K");
    }
}
