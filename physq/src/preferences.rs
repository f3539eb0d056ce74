//! Unit preferences file support.
//!
//! Preferences choose the unit each family is displayed or reported in: a unit system supplies a consistent default
//! for every family, and a `[units]` table overrides individual families.
//!
//! ```toml
//! unit_system = "FootPoundSecondRankine"
//!
//! [units]
//! Temperature = "°F"
//! MassDensity = "lbm/ft^3"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use physq_core::{UnitFamily, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::dynamic::{is_known_family, is_known_spelling};
use crate::error::ConfigError;

/// On-disk form of [`Preferences`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_system: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    units: BTreeMap<String, String>,
}

/// Validated unit preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    unit_system: UnitSystem,
    units: BTreeMap<String, String>,
}

impl Preferences {
    /// Preferences with no per-family overrides.
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            units: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the override for `family`.
    ///
    /// ```rust
    /// use physq::length::Length;
    /// use physq::{Preferences, UnitSystem};
    ///
    /// let prefs = Preferences::new(UnitSystem::MetreKilogramSecondKelvin)
    ///     .with_unit("Length", "km")
    ///     .unwrap();
    /// assert_eq!(prefs.preferred::<Length>(), Length::Kilometre);
    /// ```
    pub fn with_unit(mut self, family: &str, spelling: &str) -> Result<Self, ConfigError> {
        check_override(family, spelling)?;
        self.units.insert(family.to_string(), spelling.to_string());
        Ok(self)
    }

    /// Parses and validates preferences from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: PreferencesFile = toml::from_str(content)?;

        let unit_system = match file.unit_system.as_deref() {
            Some(s) => UnitSystem::from_str(s)?,
            None => UnitSystem::default(),
        };

        let prefs = Self {
            unit_system,
            units: file.units,
        };
        prefs.validate()?;

        info!(
            "Unit preferences: system {}, {} override(s)",
            prefs.unit_system.name(),
            prefs.units.len()
        );
        Ok(prefs)
    }

    /// Loads preferences from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let prefs = Self::from_toml_str(&content)?;
        info!("Loaded unit preferences from {}", path.as_ref().display());
        Ok(prefs)
    }

    /// Serializes to TOML text that [`from_toml_str`](Self::from_toml_str) reads back.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let file = PreferencesFile {
            unit_system: Some(self.unit_system.name().to_string()),
            units: self.units.clone(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// Checks every override: keys must name a built-in family and values must be spellings of it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (family, spelling) in &self.units {
            check_override(family, spelling)?;
        }
        Ok(())
    }

    /// The selected unit system.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Per-family overrides as `(family, spelling)` pairs, sorted by family name.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.units.iter().map(|(f, s)| (f.as_str(), s.as_str()))
    }

    /// Preferred unit of family `U`: the override when one is set, otherwise the unit system's consistent unit.
    pub fn preferred<U: UnitFamily>(&self) -> U {
        match self.units.get(U::NAME) {
            Some(spelling) => match U::parse(spelling) {
                Some(unit) => unit,
                None => {
                    warn!(
                        "Ignoring {} override {:?}: not a recognized spelling",
                        U::NAME,
                        spelling
                    );
                    U::consistent_unit(self.unit_system)
                }
            },
            None => U::consistent_unit(self.unit_system),
        }
    }
}

fn check_override(family: &str, spelling: &str) -> Result<(), ConfigError> {
    if !is_known_family(family) {
        warn!("Rejected unit override for unknown family {:?}", family);
        return Err(ConfigError::UnknownFamily(family.to_string()));
    }
    if !is_known_spelling(family, spelling) {
        warn!("Rejected {} override {:?}", family, spelling);
        return Err(ConfigError::UnknownUnit {
            family: family.to_string(),
            spelling: spelling.to_string(),
        });
    }
    Ok(())
}
