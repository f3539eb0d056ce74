//! String-driven conversion.
//!
//! Units read from files, command lines or user input arrive as strings. These helpers parse them against a family
//! and convert in one step, returning a [`ConversionError`] instead of `None` when a spelling is not recognized.
//!
//! When even the family is only known at run time, [`convert_named`] dispatches on the family name.

use physq_core::*;

use crate::error::{ConversionError, ConversionResult};

/// Parses a spelling of family `U`, reporting the family and input on failure.
///
/// ```rust
/// use physq::mass::Mass;
/// use physq::{parse_unit, ConversionError};
///
/// assert_eq!(parse_unit::<Mass>("slug"), Ok(Mass::Slug));
/// assert_eq!(
///     parse_unit::<Mass>("stone"),
///     Err(ConversionError::UnknownUnit { family: "Mass", spelling: "stone".into() })
/// );
/// ```
pub fn parse_unit<U: UnitFamily>(spelling: &str) -> ConversionResult<U> {
    U::parse(spelling).ok_or_else(|| ConversionError::UnknownUnit {
        family: U::NAME,
        spelling: spelling.to_string(),
    })
}

/// Converts `value` between two units of family `U` given by their spellings.
///
/// ```rust
/// use physq::mass_density::MassDensity;
/// use physq::convert_str;
///
/// let v: f64 = convert_str::<MassDensity, _>(1.0, "kg/m/m/m", "lb/ft3").unwrap();
/// assert!((v - 0.062_427_960_576_144_6).abs() < 1e-12);
/// ```
pub fn convert_str<U, V>(value: V, from: &str, to: &str) -> ConversionResult<V>
where
    U: UnitFamily,
    V: Components,
{
    let from = parse_unit::<U>(from)?;
    let to = parse_unit::<U>(to)?;
    Ok(convert(value, from, to))
}

macro_rules! built_in_families {
    ($($family:ty),* $(,)?) => {
        const FAMILY_NAMES: &[&str] = &[$(<$family as UnitFamily>::NAME),*];

        fn spelling_in_family(family: &str, spelling: &str) -> Option<bool> {
            $(
                if family == <$family as UnitFamily>::NAME {
                    return Some(<$family as UnitFamily>::parse(spelling).is_some());
                }
            )*
            None
        }

        fn convert_in_family(family: &str, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
            $(
                if family == <$family as UnitFamily>::NAME {
                    return convert_str::<$family, f64>(value, from, to);
                }
            )*
            Err(ConversionError::UnknownFamily(family.to_string()))
        }
    };
}

built_in_families!(
    angle::Angle,
    angular_speed::AngularSpeed,
    area::Area,
    energy::Energy,
    energy_flux::EnergyFlux,
    force::Force,
    length::Length,
    mass::Mass,
    mass_density::MassDensity,
    power::Power,
    speed::Speed,
    temperature::Temperature,
    temperature_difference::TemperatureDifference,
    temperature_gradient::TemperatureGradient,
    thermal_conductivity::ThermalConductivity,
    time::Time,
    volume::Volume,
);

/// Names of every built-in unit family, e.g. `"MassDensity"`.
pub fn family_names() -> &'static [&'static str] {
    FAMILY_NAMES
}

/// Returns `true` when `family` names a built-in unit family.
pub fn is_known_family(family: &str) -> bool {
    FAMILY_NAMES.contains(&family)
}

/// Returns `true` when `spelling` is accepted by the built-in family called `family`.
///
/// Unknown families yield `false`.
///
/// ```rust
/// assert!(physq::is_known_spelling("Length", "ft"));
/// assert!(!physq::is_known_spelling("Length", "kg"));
/// assert!(!physq::is_known_spelling("Luminance", "cd/m^2"));
/// ```
pub fn is_known_spelling(family: &str, spelling: &str) -> bool {
    spelling_in_family(family, spelling).unwrap_or(false)
}

/// Converts a scalar between two spellings of the built-in family called `family`.
///
/// ```rust
/// let f = physq::convert_named("Temperature", 100.0, "°C", "°F").unwrap();
/// assert!((f - 212.0).abs() < 1e-9);
/// ```
pub fn convert_named(family: &str, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    convert_in_family(family, value, from, to)
}
