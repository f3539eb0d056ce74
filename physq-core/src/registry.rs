//! Per-family conversion tables.
//!
//! Each family owns one [`Registry`], built lazily the first time the family is used and read-only afterwards. The
//! static behind [`UnitFamily::registry`] is a [`once_cell::sync::Lazy`], so concurrent first use from several threads
//! still builds the tables exactly once.

use std::collections::HashMap;

use log::debug;

use crate::transform::Transform;
use crate::UnitFamily;

pub(crate) use once_cell::sync::Lazy;

/// Conversion and spelling tables of one unit family.
///
/// Holds one `ToStandard` and one `FromStandard` transform per variant (the standard variant maps to
/// [`Transform::Identity`]) plus the spelling → variant lookup used by [`UnitFamily::parse`].
#[derive(Debug)]
pub struct Registry<U: UnitFamily> {
    to_standard: HashMap<U, Transform>,
    from_standard: HashMap<U, Transform>,
    spellings: HashMap<&'static str, U>,
}

impl<U: UnitFamily> Registry<U> {
    /// Builds the tables from the family's declarative rows.
    ///
    /// # Panics
    ///
    /// If two variants claim the same spelling. The derive rejects literal duplicates at compile time, so this
    /// only fires for hand-written families.
    pub fn build() -> Self {
        let mut to_standard = HashMap::with_capacity(U::VARIANTS.len());
        let mut from_standard = HashMap::with_capacity(U::VARIANTS.len());
        let mut spellings = HashMap::new();

        for &unit in U::VARIANTS {
            let conversion = unit.conversion();
            to_standard.insert(unit, conversion.to_standard());
            from_standard.insert(unit, conversion.from_standard());
            for &spelling in unit.spellings() {
                if let Some(previous) = spellings.insert(spelling, unit) {
                    if previous != unit {
                        panic!(
                            "{} spelling {:?} is claimed by both {:?} and {:?}",
                            U::NAME,
                            spelling,
                            previous,
                            unit
                        );
                    }
                }
            }
        }

        debug!(
            "Registered {} conversions for {} ({} spellings)",
            to_standard.len(),
            U::NAME,
            spellings.len()
        );

        Self {
            to_standard,
            from_standard,
            spellings,
        }
    }

    /// Transform from `unit` into the standard unit.
    ///
    /// # Panics
    ///
    /// If `unit` has no entry, which means the family definition is incomplete.
    #[inline]
    #[track_caller]
    pub fn to_standard(&self, unit: U) -> Transform {
        match self.to_standard.get(&unit) {
            Some(t) => *t,
            None => missing_entry("ToStandard", U::NAME, &unit),
        }
    }

    /// Transform from the standard unit into `unit`.
    ///
    /// # Panics
    ///
    /// If `unit` has no entry, which means the family definition is incomplete.
    #[inline]
    #[track_caller]
    pub fn from_standard(&self, unit: U) -> Transform {
        match self.from_standard.get(&unit) {
            Some(t) => *t,
            None => missing_entry("FromStandard", U::NAME, &unit),
        }
    }

    /// Variant accepting `spelling`, if any.
    #[inline]
    pub fn parse(&self, spelling: &str) -> Option<U> {
        self.spellings.get(spelling).copied()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.to_standard.len()
    }

    /// Returns `true` when no variant is registered.
    pub fn is_empty(&self) -> bool {
        self.to_standard.is_empty()
    }

    /// Returns `true` when `unit` has both transforms registered.
    pub fn contains(&self, unit: U) -> bool {
        self.to_standard.contains_key(&unit) && self.from_standard.contains_key(&unit)
    }

    /// Iterates every accepted spelling with its variant, in no particular order.
    pub fn spellings(&self) -> impl Iterator<Item = (&'static str, U)> + '_ {
        self.spellings.iter().map(|(s, u)| (*s, *u))
    }
}

#[cold]
#[track_caller]
fn missing_entry(table: &str, family: &str, unit: &dyn core::fmt::Debug) -> ! {
    panic!("no {table} transform registered for {family}::{unit:?}")
}
