//! Integration-level tests for the `physq` facade crate.

use physq::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Worked conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilogram_gram_both_ways() {
    assert_eq!(convert(1.0, mass::Mass::Kilogram, mass::Mass::Gram), 1000.0);
    assert_eq!(convert(1000.0, mass::Mass::Gram, mass::Mass::Kilogram), 1.0);
}

#[test]
fn cubic_metre_to_cubic_millimetre_in_every_shape() {
    use volume::{unit, Volume};

    let scalar = convert(1.0, Volume::CubicMetre, Volume::CubicMillimetre);
    assert_relative_eq!(scalar, 1.0e9, max_relative = 1e-12);

    let v = convert(
        Vector::new(1.0, 1.0, 1.0),
        Volume::CubicMetre,
        Volume::CubicMillimetre,
    );
    for c in v.as_array() {
        assert_relative_eq!(*c, 1.0e9, max_relative = 1e-12);
    }

    let s = convert_statically::<unit::CubicMetre, unit::CubicMillimetre, _>(1.0);
    assert_relative_eq!(s, 1.0e9, max_relative = 1e-12);
}

#[test]
fn kilogram_per_cubic_metre_to_pound_per_cubic_foot() {
    let v = convert(
        1.0,
        mass_density::MassDensity::KilogramPerCubicMetre,
        mass_density::MassDensity::PoundPerCubicFoot,
    );
    assert_relative_eq!(v, 0.3048_f64.powi(3) / 0.453_592_37, max_relative = 1e-9);
}

#[test]
fn radian_to_degree_per_second() {
    let v = convert(
        1.0,
        angular_speed::AngularSpeed::RadianPerSecond,
        angular_speed::AngularSpeed::DegreePerSecond,
    );
    assert_relative_eq!(v, 180.0 / std::f64::consts::PI, max_relative = 1e-12);
}

#[test]
fn mass_density_spellings() {
    use mass_density::MassDensity;

    assert_eq!(
        parse::<MassDensity>("kg/m/m/m"),
        Some(MassDensity::KilogramPerCubicMetre)
    );
    assert_eq!(abbreviation(MassDensity::KilogramPerCubicMetre), "kg/m^3");
    assert_eq!(parse::<MassDensity>("kg per cubic furlong"), None);
}

#[test]
fn slug_is_consistent_in_foot_pound_system() {
    use mass::Mass;

    assert_eq!(
        consistent_unit::<Mass>(UnitSystem::FootPoundSecondRankine),
        Mass::Slug
    );
    assert_eq!(
        related_unit_system(Mass::Slug),
        Some(UnitSystem::FootPoundSecondRankine)
    );
}

#[test]
fn dimension_printing_and_hashing() {
    assert_eq!(Dimension::<base::Length>::new(-2).print(), "L^(-2)");
    assert_eq!(Dimension::<base::Length>::new(1).print(), "L");
    assert_eq!(Dimension::<base::Length>::new(0).print(), "");

    let d = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
    let expected = (0..7).fold(17_u64, |acc, i| {
        let e: i64 = if i == 1 { 1 } else { 0 };
        acc.wrapping_mul(31).wrapping_add(e as u64)
    });
    assert_eq!(d.hash_value(), expected);
}

#[test]
fn dimensions_order_time_first() {
    let time = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
    let length = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
    assert!(length < time);
    assert!(Dimensions::new(0, 0, 0, 0, 0, 0, -1) < Dimensions::DIMENSIONLESS);
}

#[test]
fn different_families_have_different_signatures() {
    let signatures = [
        related_dimensions::<time::Time>(),
        related_dimensions::<length::Length>(),
        related_dimensions::<area::Area>(),
        related_dimensions::<volume::Volume>(),
        related_dimensions::<angle::Angle>(),
        related_dimensions::<speed::Speed>(),
        related_dimensions::<mass::Mass>(),
        related_dimensions::<mass_density::MassDensity>(),
        related_dimensions::<force::Force>(),
        related_dimensions::<energy::Energy>(),
        related_dimensions::<power::Power>(),
        related_dimensions::<energy_flux::EnergyFlux>(),
        related_dimensions::<temperature::Temperature>(),
        related_dimensions::<temperature_gradient::TemperatureGradient>(),
        related_dimensions::<thermal_conductivity::ThermalConductivity>(),
    ];
    for (i, a) in signatures.iter().enumerate() {
        for b in &signatures[i + 1..] {
            assert_ne!(a, b, "{a} collides");
        }
    }
    assert_ne!(
        related_dimensions::<angular_speed::AngularSpeed>(),
        related_dimensions::<speed::Speed>()
    );
}

#[test]
fn energy_over_time_is_power() {
    let e = related_dimensions::<energy::Energy>();
    let t = related_dimensions::<time::Time>();
    assert_eq!(e / t, related_dimensions::<power::Power>());
    assert_eq!(
        related_dimensions::<mass::Mass>() / related_dimensions::<volume::Volume>(),
        related_dimensions::<mass_density::MassDensity>()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-family properties
// ─────────────────────────────────────────────────────────────────────────────

/// Same-unit conversions leave every shape bit-identical.
fn check_standard_noop<U: UnitFamily>() {
    let x = 0.1_f64 + 0.2;
    for &unit in U::VARIANTS {
        assert_eq!(convert(x, unit, unit).to_bits(), x.to_bits(), "{unit:?}");
        let v = convert(Vector::new(x, -x, 1e300), unit, unit);
        assert_eq!(v, Vector::new(x, -x, 1e300));
    }
    let q = Quantity::<U>::standard(x);
    assert_eq!(q.value(U::STANDARD).to_bits(), x.to_bits());
}

/// Parsing a unit's abbreviation yields the unit, and display prints it.
fn check_parse_display<U: UnitFamily>() {
    for &unit in U::VARIANTS {
        assert_eq!(parse::<U>(abbreviation(unit)), Some(unit));
        assert_eq!(unit.to_string().parse::<U>().ok(), Some(unit));
        assert!(is_known_spelling(U::NAME, abbreviation(unit)));
    }
    assert!(is_known_family(U::NAME));
}

/// Every unit system maps to a unit that maps back to it.
fn check_systems<U: UnitFamily>() {
    for system in UnitSystem::ALL {
        let unit = consistent_unit::<U>(system);
        let back = related_unit_system(unit).expect("consistent unit without a system");
        assert_eq!(consistent_unit::<U>(back), unit, "{system:?}");
    }
}

/// A → B → A returns the original within a few ulps.
fn check_roundtrip<U: UnitFamily>(x: f64) {
    for &a in U::VARIANTS {
        for &b in U::VARIANTS {
            let back = convert(convert(x, a, b), b, a);
            assert_relative_eq!(back, x, max_relative = 1e-12, epsilon = 1e-9);
        }
    }
}

/// Single-precision A → B → A. Affine temperature rows lose absolute precision near zero, hence the `epsilon`.
fn check_roundtrip_f32<U: UnitFamily>(x: f32) {
    for &a in U::VARIANTS {
        for &b in U::VARIANTS {
            let back = convert(convert(x, a, b), b, a);
            assert_relative_eq!(back, x, max_relative = 1e-5, epsilon = 1e-3);
        }
    }
}

macro_rules! family_properties {
    ($($module:ident :: $family:ident),* $(,)?) => {
        $(
            mod $module {
                use super::*;
                use physq::$module::$family;

                #[test]
                fn standard_noop() {
                    check_standard_noop::<$family>();
                }

                #[test]
                fn parse_display() {
                    check_parse_display::<$family>();
                }

                #[test]
                fn systems() {
                    check_systems::<$family>();
                }

                proptest! {
                    #[test]
                    fn roundtrip(x in -1e6..1e6f64) {
                        check_roundtrip::<$family>(x);
                    }

                    #[test]
                    fn roundtrip_f32(x in -1e6..1e6f32) {
                        check_roundtrip_f32::<$family>(x);
                    }
                }
            }
        )*
    };
}

mod families {
    use super::*;

    family_properties!(
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
}

// ─────────────────────────────────────────────────────────────────────────────
// Static and dynamic paths agree
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! assert_static_matches_dynamic {
    ($family:ident, $x:expr, $($a:ident => $b:ident),* $(,)?) => {
        $(
            let s = convert_statically::<$family::unit::$a, $family::unit::$b, _>($x);
            let d = convert($x, <$family::unit::$a as StaticUnit>::UNIT, <$family::unit::$b as StaticUnit>::UNIT);
            assert_eq!(s.to_bits(), d.to_bits(), concat!(stringify!($a), " -> ", stringify!($b)));
        )*
    };
}

#[test]
fn static_and_dynamic_paths_are_identical() {
    let x = 12.345_f64;
    assert_static_matches_dynamic!(mass, x, Kilogram => Gram, Slug => Slinch, Pound => Kilogram);
    assert_static_matches_dynamic!(temperature, x, Celsius => Fahrenheit, Kelvin => Rankine, Fahrenheit => Kelvin);
    assert_static_matches_dynamic!(length, x, Mile => Millimetre, Foot => Inch);
    assert_static_matches_dynamic!(volume, x, CubicMetre => CubicMillimetre, Litre => CubicFoot);
    assert_static_matches_dynamic!(thermal_conductivity, x, PoundPerSecondPerRankine => NanowattPerMillimetrePerKelvin);
}

proptest! {
    #[test]
    fn prop_static_equals_dynamic_on_vectors(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        use temperature::{unit, Temperature};
        let s = convert_statically::<unit::Fahrenheit, unit::Celsius, _>(PlanarVector::new(x, y));
        let d = convert(PlanarVector::new(x, y), Temperature::Fahrenheit, Temperature::Celsius);
        prop_assert_eq!(s, d);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn concurrent_conversions_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let x = i as f64;
                convert(x, energy::Energy::KilowattHour, energy::Energy::FootPound)
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let expected = convert(i as f64, energy::Energy::KilowattHour, energy::Energy::FootPound);
        assert_eq!(h.join().unwrap(), expected);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Facade surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn quantity_through_facade() {
    let q = Quantity::new(212.0, temperature::Temperature::Fahrenheit);
    assert_abs_diff_eq!(q.standard_value(), 373.15, epsilon = 1e-9);
    assert_abs_diff_eq!(q.value(temperature::Temperature::Celsius), 100.0, epsilon = 1e-9);
    assert_eq!(
        Quantity::<temperature::Temperature>::dimensions(),
        Dimensions::new(0, 0, 0, 0, 1, 0, 0)
    );
}

#[test]
fn string_conversion_and_preferences_together() {
    let prefs = Preferences::from_toml_str(
        r#"
        unit_system = "InchPoundSecondRankine"
        [units]
        Power = "hp"
        "#,
    )
    .unwrap();

    let to = prefs.preferred::<power::Power>();
    let hp = convert_str::<power::Power, _>(745.7, "W", abbreviation(to)).unwrap();
    assert_relative_eq!(hp, 1.0, max_relative = 1e-4);

    let length_unit = prefs.preferred::<length::Length>();
    assert_eq!(length_unit, length::Length::Inch);
}

#[test]
fn convert_named_matches_typed() {
    let typed = convert(3.0, force::Force::Pound, force::Force::Newton);
    let named = convert_named("Force", 3.0, "lbf", "N").unwrap();
    assert_eq!(typed, named);
    assert!(matches!(
        convert_named("Force", 3.0, "lbf", "kgf"),
        Err(ConversionError::UnknownUnit { family: "Force", .. })
    ));
}

#[test]
fn f32_temperature_roundtrip_near_zero() {
    use temperature::Temperature;

    for &a in Temperature::VARIANTS {
        for &b in Temperature::VARIANTS {
            let back = convert(convert(1e-3_f32, a, b), b, a);
            assert_abs_diff_eq!(back, 1e-3_f32, epsilon = 5e-4);
        }
    }
    let f = convert(0.0_f32, Temperature::Celsius, Temperature::Fahrenheit);
    assert_abs_diff_eq!(f, 32.0_f32, epsilon = 1e-3);
}

#[test]
fn nan_and_infinity_propagate() {
    assert!(convert(f64::NAN, length::Length::Foot, length::Length::Metre).is_nan());
    assert_eq!(
        convert(f64::INFINITY, length::Length::Metre, length::Length::Foot),
        f64::INFINITY
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde (feature = "serde")
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Report {
        density_unit: mass_density::MassDensity,
        ambient: Quantity<temperature::Temperature>,
        velocity: Quantity<speed::Speed, Vector<f64>>,
    }

    #[test]
    fn report_roundtrips_through_json() {
        let report = Report {
            density_unit: mass_density::MassDensity::PoundPerCubicFoot,
            ambient: Quantity::new(20.0, temperature::Temperature::Celsius),
            velocity: Quantity::new(
                Vector::new(1.0, 0.0, -2.0),
                speed::Speed::MillimetrePerSecond,
            ),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""density_unit":"lbm/ft^3""#));
        assert!(json.contains(r#""unit":"K""#));

        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.density_unit, report.density_unit);
        assert_relative_eq!(back.ambient.standard_value(), 293.15, max_relative = 1e-12);
        assert_eq!(back.velocity, report.velocity);
    }

    #[test]
    fn units_deserialize_from_alternate_spellings() {
        let unit: mass_density::MassDensity = serde_json::from_str(r#""lb/ft3""#).unwrap();
        assert_eq!(unit, mass_density::MassDensity::PoundPerCubicFoot);

        let ambient: Quantity<temperature::Temperature> =
            serde_json::from_str(r#"{"value": 32.0, "unit": "°F"}"#).unwrap();
        assert_relative_eq!(ambient.standard_value(), 273.15, max_relative = 1e-12);

        let err = serde_json::from_str::<mass_density::MassDensity>(r#""kg/m^4""#).unwrap_err();
        assert!(err.to_string().contains("kg/m^4"));
    }
}
