//! Minimal end-to-end example: typed, static and string-driven conversions.

use physq::length::{self, Length};
use physq::mass_density::MassDensity;
use physq::temperature::Temperature;
use physq::{convert, convert_statically, convert_str, Quantity, UnitFamily, UnitSystem, Vector};

fn main() {
    let ft = convert(1.0, Length::Metre, Length::Foot);
    println!("1 m = {ft:.4} ft");

    let inches = convert_statically::<length::unit::Foot, length::unit::Inch, _>(2.5);
    println!("2.5 ft = {inches} in");

    let v = convert(Vector::new(0.0, 100.0, -40.0), Temperature::Celsius, Temperature::Fahrenheit);
    println!("(0, 100, -40) °C = ({}, {}, {}) °F", v.x(), v.y(), v.z());

    let rho = convert_str::<MassDensity, _>(1000.0, "kg/m3", "lb/ft3").unwrap_or(f64::NAN);
    println!("water: {rho:.3} lbm/ft^3");

    let slug = MassDensity::consistent_unit(UnitSystem::FootPoundSecondRankine);
    let q = Quantity::new(1000.0, MassDensity::KilogramPerCubicMetre);
    println!("water: {} = {:.4} {}", q, q.value(slug), slug.abbreviation());
    println!("dimensions: {}", MassDensity::DIMENSIONS);
}
