//! Error types for string parsing.
//!
//! Conversion itself never fails at run time; the only recoverable failures are unrecognized spellings.

/// A string did not match any accepted spelling of a unit family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {family} unit: {input:?}")]
pub struct ParseUnitError {
    /// Name of the family that was searched.
    pub family: &'static str,
    /// The rejected input.
    pub input: String,
}

/// A string did not name a unit system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized unit system: {0:?}")]
pub struct ParseUnitSystemError(pub String);
