//! Reading unit preferences from TOML and reporting values in the preferred units.

use physq::length::Length;
use physq::temperature::Temperature;
use physq::{convert, Preferences, UnitFamily};

const PREFERENCES: &str = r#"
unit_system = "InchPoundSecondRankine"

[units]
Temperature = "°F"
"#;

fn main() -> Result<(), physq::ConfigError> {
    let prefs = Preferences::from_toml_str(PREFERENCES)?;

    let length = prefs.preferred::<Length>();
    let temperature = prefs.preferred::<Temperature>();

    let span = convert(2.0, Length::Metre, length);
    let ambient = convert(293.15, Temperature::Kelvin, temperature);

    println!("span: {span:.3} {}", length.abbreviation());
    println!("ambient: {ambient:.2} {}", temperature.abbreviation());
    println!("{}", prefs.to_toml_string()?);
    Ok(())
}
