//! Angular speed units.
//!
//! The standard unit is [`AngularSpeed::RadianPerSecond`], consistent in every unit system. Since angles are
//! dimensionless, the signature is that of a frequency, `T^(-1)`.
//!
//! ```rust
//! use physq_core::angular_speed::AngularSpeed;
//! use physq_core::convert;
//!
//! let rpm: f64 = convert(1.0, AngularSpeed::RevolutionPerSecond, AngularSpeed::RevolutionPerMinute);
//! assert!((rpm - 60.0).abs() < 1e-12);
//! ```

use core::f64::consts::PI;

use crate::Dimensions;
use physq_derive::UnitFamily;

/// Units of angular speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitFamily)]
#[family(dimensions = Dimensions::new(-1, 0, 0, 0, 0, 0, 0))]
pub enum AngularSpeed {
    /// Radian per second (rad/s).
    #[unit(
        standard,
        abbreviation = "rad/s",
        spellings = ["rad/sec"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    RadianPerSecond,
    /// Radian per minute (rad/min).
    #[unit(abbreviation = "rad/min", per = 60.0)]
    RadianPerMinute,
    /// Radian per hour (rad/hr).
    #[unit(abbreviation = "rad/hr", per = 3_600.0, spellings = ["rad/h"])]
    RadianPerHour,
    /// Degree per second (deg/s).
    #[unit(abbreviation = "deg/s", scale = PI / 180.0, spellings = ["°/s", "deg/sec"])]
    DegreePerSecond,
    /// Degree per minute (deg/min).
    #[unit(abbreviation = "deg/min", scale = PI / 10_800.0, spellings = ["°/min"])]
    DegreePerMinute,
    /// Degree per hour (deg/hr).
    #[unit(abbreviation = "deg/hr", scale = PI / 648_000.0, spellings = ["°/hr", "deg/h"])]
    DegreePerHour,
    /// Revolution per second (rev/s).
    #[unit(abbreviation = "rev/s", scale = 2.0 * PI, spellings = ["rps"])]
    RevolutionPerSecond,
    /// Revolution per minute (rev/min).
    #[unit(abbreviation = "rev/min", scale = PI / 30.0, spellings = ["rpm"])]
    RevolutionPerMinute,
    /// Revolution per hour (rev/hr).
    #[unit(abbreviation = "rev/hr", scale = PI / 1_800.0, spellings = ["rph", "rev/h"])]
    RevolutionPerHour,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, convert_statically};
    use approx::assert_relative_eq;

    #[test]
    fn radian_to_degree_per_second() {
        let d = convert(
            1.0,
            AngularSpeed::RadianPerSecond,
            AngularSpeed::DegreePerSecond,
        );
        assert_relative_eq!(d, 180.0 / PI, max_relative = 1e-14);
        let s = convert_statically::<unit::RadianPerSecond, unit::DegreePerSecond, _>(1.0);
        assert_eq!(s, d);
    }

    #[test]
    fn rpm_to_radians() {
        assert_relative_eq!(
            convert(60.0, AngularSpeed::RevolutionPerMinute, AngularSpeed::RadianPerSecond),
            2.0 * PI,
            max_relative = 1e-14
        );
        assert_eq!("rpm".parse::<AngularSpeed>(), Ok(AngularSpeed::RevolutionPerMinute));
    }

    #[test]
    fn per_minute_and_per_hour() {
        assert_eq!(
            convert(1.0, AngularSpeed::RadianPerSecond, AngularSpeed::RadianPerHour),
            3600.0
        );
        assert_relative_eq!(
            convert(1.0, AngularSpeed::DegreePerMinute, AngularSpeed::DegreePerHour),
            60.0,
            max_relative = 1e-14
        );
    }
}
