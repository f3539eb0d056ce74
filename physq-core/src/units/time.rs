//! Time units.
//!
//! The standard unit is [`Time::Second`], which is also the consistent unit of every unit system.

use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(1, 0, 0, 0, 0, 0, 0))]
pub enum Time {
    /// Day (d), 86 400 s.
    #[unit(abbreviation = "d", scale = 86_400.0, spellings = ["day", "days"])]
    Day,
    /// Hour (hr).
    #[unit(abbreviation = "hr", scale = 3_600.0, spellings = ["h", "hour", "hours"])]
    Hour,
    /// Minute (min).
    #[unit(abbreviation = "min", scale = 60.0, spellings = ["minute", "minutes"])]
    Minute,
    /// Second (s).
    #[unit(
        standard,
        abbreviation = "s",
        spellings = ["sec", "second", "seconds"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Second,
    /// Millisecond (ms).
    #[unit(abbreviation = "ms", per = 1e3, spellings = ["millisecond", "milliseconds"])]
    Millisecond,
    /// Microsecond (μs).
    #[unit(abbreviation = "μs", per = 1e6, spellings = ["us", "microsecond", "microseconds"])]
    Microsecond,
    /// Nanosecond (ns).
    #[unit(abbreviation = "ns", per = 1e9, spellings = ["nanosecond", "nanoseconds"])]
    Nanosecond,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, UnitFamily, UnitSystem};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn second_is_consistent_everywhere() {
        for system in UnitSystem::ALL {
            assert_eq!(Time::consistent_unit(system), Time::Second);
        }
        assert_eq!(
            Time::Second.related_unit_system(),
            Some(UnitSystem::MetreKilogramSecondKelvin)
        );
        assert_eq!(Time::Hour.related_unit_system(), None);
    }

    #[test]
    fn sexagesimal_chain() {
        assert_eq!(convert(1.0, Time::Hour, Time::Minute), 60.0);
        assert_eq!(convert(1.0, Time::Day, Time::Hour), 24.0);
        assert_eq!(convert(1.5, Time::Second, Time::Millisecond), 1500.0);
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(convert(1.0, Time::Second, Time::Nanosecond), 1e9);
        assert_relative_eq!(
            convert(2500.0, Time::Microsecond, Time::Millisecond),
            2.5,
            max_relative = 1e-15
        );
        assert_eq!("us".parse::<Time>(), Ok(Time::Microsecond));
    }

    proptest! {
        #[test]
        fn prop_minute_second_scale(x in -1e9..1e9f64) {
            let s = convert(x, Time::Minute, Time::Second);
            prop_assert_eq!(s, x * 60.0);
        }
    }
}
