//! Error types for string-driven conversion and unit preferences.

use physq_core::{ParseUnitError, ParseUnitSystemError};

/// Result type for string-driven conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for conversions whose units are given as strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown {family} unit: {spelling:?}")]
    UnknownUnit {
        family: &'static str,
        spelling: String,
    },

    #[error("Unknown unit family: {0:?}")]
    UnknownFamily(String),
}

impl From<ParseUnitError> for ConversionError {
    fn from(e: ParseUnitError) -> Self {
        ConversionError::UnknownUnit {
            family: e.family,
            spelling: e.input,
        }
    }
}

/// Error type for loading and validating [`Preferences`](crate::Preferences).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown unit family: {0:?}")]
    UnknownFamily(String),

    #[error("Unknown {family} unit: {spelling:?}")]
    UnknownUnit { family: String, spelling: String },

    #[error(transparent)]
    UnknownUnitSystem(#[from] ParseUnitSystemError),
}

impl From<ConversionError> for ConfigError {
    fn from(e: ConversionError) -> Self {
        match e {
            ConversionError::UnknownUnit { family, spelling } => ConfigError::UnknownUnit {
                family: family.to_string(),
                spelling,
            },
            ConversionError::UnknownFamily(name) => ConfigError::UnknownFamily(name),
        }
    }
}
