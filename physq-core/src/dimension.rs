//! Dimension types and traits.
//!
//! A [`Dimensions`] value is the physical "shape" of a unit family: the exponents of the seven SI base dimensions in
//! the canonical order time, length, mass, electric current, temperature, substance amount, luminous intensity.

use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Div, Mul};

/// Marker trait for the seven **base dimensions**.
///
/// Each base dimension is modelled as an empty enum, which keeps [`Dimension<K>`] values of different kinds from
/// ever being compared with each other:
///
/// ```rust
/// use physq_core::base::{Length, Time};
/// use physq_core::Dimension;
///
/// let l = Dimension::<Length>::new(2);
/// let t = Dimension::<Time>::new(-1);
/// assert_eq!(l.value(), 2);
/// assert_eq!(t.print(), "T^(-1)");
/// ```
pub trait BaseDimension: 'static {
    /// Symbol used when printing the dimension, e.g. `"L"`.
    const ABBREVIATION: &'static str;
    /// Human-readable name, e.g. `"Length"`.
    const LABEL: &'static str;
}

/// The seven base dimension kinds.
pub mod base {
    use super::BaseDimension;

    macro_rules! base_dimension {
        ($name:ident, $abbr:literal, $label:literal) => {
            #[doc = concat!("Base dimension `", $label, "` (symbol `", $abbr, "`).")]
            #[derive(Debug)]
            pub enum $name {}
            impl BaseDimension for $name {
                const ABBREVIATION: &'static str = $abbr;
                const LABEL: &'static str = $label;
            }
        };
    }

    base_dimension!(Time, "T", "Time");
    base_dimension!(Length, "L", "Length");
    base_dimension!(Mass, "M", "Mass");
    base_dimension!(ElectricCurrent, "I", "Electric Current");
    base_dimension!(Temperature, "Θ", "Temperature");
    base_dimension!(SubstanceAmount, "N", "Substance Amount");
    base_dimension!(LuminousIntensity, "J", "Luminous Intensity");
}

/// Exponent of one base dimension `K`.
///
/// Two dimensions of the same kind compare solely by their exponent.
pub struct Dimension<K: BaseDimension> {
    value: i8,
    kind: PhantomData<K>,
}

impl<K: BaseDimension> Dimension<K> {
    /// The zero exponent.
    pub const ZERO: Self = Self::new(0);

    /// Creates a dimension with the given exponent.
    #[inline]
    pub const fn new(value: i8) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Returns the exponent.
    #[inline]
    pub const fn value(self) -> i8 {
        self.value
    }

    /// Renders the dimension as its abbreviation with an exponent suffix.
    ///
    /// `0` prints as an empty string, `1` as the bare abbreviation, `n > 1` as `X^n` and `n < 0` as `X^(n)`.
    pub fn print(self) -> String {
        match self.value {
            0 => String::new(),
            1 => K::ABBREVIATION.to_string(),
            n if n > 1 => format!("{}^{}", K::ABBREVIATION, n),
            n => format!("{}^({})", K::ABBREVIATION, n),
        }
    }
}

// Manual impls: derives would require `K` itself to implement each trait.

impl<K: BaseDimension> Clone for Dimension<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: BaseDimension> Copy for Dimension<K> {}

impl<K: BaseDimension> Default for Dimension<K> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<K: BaseDimension> PartialEq for Dimension<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: BaseDimension> Eq for Dimension<K> {}

impl<K: BaseDimension> PartialOrd for Dimension<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: BaseDimension> Ord for Dimension<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: BaseDimension> Hash for Dimension<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: BaseDimension> fmt::Debug for Dimension<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::LABEL, self.value)
    }
}

impl<K: BaseDimension> Display for Dimension<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

/// Physical dimension signature of a unit family.
///
/// Ordering is lexicographic over the canonical order (time first, luminous intensity last): the first differing
/// exponent decides. The all-zero value is [`Dimensions::DIMENSIONLESS`].
///
/// ```rust
/// use physq_core::Dimensions;
///
/// let speed = Dimensions::new(-1, 1, 0, 0, 0, 0, 0);
/// let length = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
/// let time = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
/// assert_eq!(length / time, speed);
/// assert_eq!(speed.print(), "T^(-1)·L");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dimensions {
    time: Dimension<base::Time>,
    length: Dimension<base::Length>,
    mass: Dimension<base::Mass>,
    electric_current: Dimension<base::ElectricCurrent>,
    temperature: Dimension<base::Temperature>,
    substance_amount: Dimension<base::SubstanceAmount>,
    luminous_intensity: Dimension<base::LuminousIntensity>,
}

impl Dimensions {
    /// The dimensionless signature: every exponent is zero.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Creates a signature from the seven exponents in canonical order.
    #[inline]
    pub const fn new(
        time: i8,
        length: i8,
        mass: i8,
        electric_current: i8,
        temperature: i8,
        substance_amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            time: Dimension::new(time),
            length: Dimension::new(length),
            mass: Dimension::new(mass),
            electric_current: Dimension::new(electric_current),
            temperature: Dimension::new(temperature),
            substance_amount: Dimension::new(substance_amount),
            luminous_intensity: Dimension::new(luminous_intensity),
        }
    }

    /// Time exponent.
    pub const fn time(self) -> Dimension<base::Time> {
        self.time
    }

    /// Length exponent.
    pub const fn length(self) -> Dimension<base::Length> {
        self.length
    }

    /// Mass exponent.
    pub const fn mass(self) -> Dimension<base::Mass> {
        self.mass
    }

    /// Electric current exponent.
    pub const fn electric_current(self) -> Dimension<base::ElectricCurrent> {
        self.electric_current
    }

    /// Temperature exponent.
    pub const fn temperature(self) -> Dimension<base::Temperature> {
        self.temperature
    }

    /// Substance amount exponent.
    pub const fn substance_amount(self) -> Dimension<base::SubstanceAmount> {
        self.substance_amount
    }

    /// Luminous intensity exponent.
    pub const fn luminous_intensity(self) -> Dimension<base::LuminousIntensity> {
        self.luminous_intensity
    }

    /// Exponents in canonical order.
    pub const fn exponents(self) -> [i8; 7] {
        [
            self.time.value(),
            self.length.value(),
            self.mass.value(),
            self.electric_current.value(),
            self.temperature.value(),
            self.substance_amount.value(),
            self.luminous_intensity.value(),
        ]
    }

    /// Returns `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        let e = self.exponents();
        e[0] == 0 && e[1] == 0 && e[2] == 0 && e[3] == 0 && e[4] == 0 && e[5] == 0 && e[6] == 0
    }

    /// Order-sensitive hash of the seven exponents (seed 17, multiplier 31).
    pub const fn hash_value(self) -> u64 {
        let e = self.exponents();
        let mut acc: u64 = 17;
        let mut i = 0;
        while i < e.len() {
            acc = acc.wrapping_mul(31).wrapping_add(e[i] as i64 as u64);
            i += 1;
        }
        acc
    }

    /// Renders the non-zero components joined by `·`, or `"1"` when dimensionless.
    pub fn print(self) -> String {
        let parts = [
            self.time.print(),
            self.length.print(),
            self.mass.print(),
            self.electric_current.print(),
            self.temperature.print(),
            self.substance_amount.print(),
            self.luminous_intensity.print(),
        ];
        let joined = parts
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("·");
        if joined.is_empty() {
            "1".to_string()
        } else {
            joined
        }
    }

    const fn checked_combine(self, other: Self, subtract: bool) -> Option<Self> {
        let a = self.exponents();
        let b = other.exponents();
        let mut out = [0_i8; 7];
        let mut i = 0;
        while i < 7 {
            let e = if subtract {
                a[i].checked_sub(b[i])
            } else {
                a[i].checked_add(b[i])
            };
            match e {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self::new(out[0], out[1], out[2], out[3], out[4], out[5], out[6]))
    }

    /// Signature of the product of two quantities, or `None` if an exponent leaves the `i8` range.
    pub const fn checked_product(self, other: Self) -> Option<Self> {
        self.checked_combine(other, false)
    }

    /// Signature of the quotient of two quantities, or `None` if an exponent leaves the `i8` range.
    pub const fn checked_quotient(self, other: Self) -> Option<Self> {
        self.checked_combine(other, true)
    }

    /// Signature of the product of two quantities.
    ///
    /// # Panics
    ///
    /// If a summed exponent overflows `i8`. Use [`checked_product`](Self::checked_product) to handle that case.
    pub const fn product(self, other: Self) -> Self {
        match self.checked_product(other) {
            Some(d) => d,
            None => panic!("dimension exponent overflow in product"),
        }
    }

    /// Signature of the quotient of two quantities.
    ///
    /// # Panics
    ///
    /// If a subtracted exponent overflows `i8`. Use [`checked_quotient`](Self::checked_quotient) to handle that case.
    pub const fn quotient(self, other: Self) -> Self {
        match self.checked_quotient(other) {
            Some(d) => d,
            None => panic!("dimension exponent overflow in quotient"),
        }
    }
}

impl Hash for Dimensions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl Mul for Dimensions {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Div for Dimensions {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const MASS_DENSITY: Dimensions = Dimensions::new(0, -3, 1, 0, 0, 0, 0);
    const VOLUME: Dimensions = Dimensions::new(0, 3, 0, 0, 0, 0, 0);

    #[test]
    fn dimension_value_and_default() {
        assert_eq!(Dimension::<base::Mass>::new(3).value(), 3);
        assert_eq!(Dimension::<base::Mass>::default().value(), 0);
    }

    #[test]
    fn dimension_print_forms() {
        assert_eq!(Dimension::<base::Length>::new(0).print(), "");
        assert_eq!(Dimension::<base::Length>::new(1).print(), "L");
        assert_eq!(Dimension::<base::Length>::new(3).print(), "L^3");
        assert_eq!(Dimension::<base::Length>::new(-2).print(), "L^(-2)");
        assert_eq!(Dimension::<base::Temperature>::new(-1).to_string(), "Θ^(-1)");
    }

    #[test]
    fn dimension_orders_by_value() {
        let a = Dimension::<base::Time>::new(-3);
        let b = Dimension::<base::Time>::new(1);
        assert!(a < b);
        assert!(b >= a);
        assert_eq!(a, Dimension::new(-3));
    }

    #[test]
    fn dimensionless_detection() {
        assert!(Dimensions::DIMENSIONLESS.is_dimensionless());
        assert!(Dimensions::default().is_dimensionless());
        assert!(!VOLUME.is_dimensionless());
        assert_eq!(Dimensions::DIMENSIONLESS.print(), "1");
    }

    #[test]
    fn lexicographic_ordering_time_first() {
        // time differs: decides regardless of the later components
        let a = Dimensions::new(-1, 5, 5, 0, 0, 0, 0);
        let b = Dimensions::new(0, -5, -5, 0, 0, 0, 0);
        assert!(a < b);

        // equal time, length decides
        let c = Dimensions::new(0, 1, -9, 0, 0, 0, 0);
        let d = Dimensions::new(0, 2, -9, 0, 0, 0, 0);
        assert!(c < d);
        assert!(d > c);
        assert!(c <= c);
    }

    #[test]
    fn last_component_decides_when_rest_equal() {
        let a = Dimensions::new(0, 0, 0, 0, 0, 0, -1);
        let b = Dimensions::new(0, 0, 0, 0, 0, 0, 1);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_value_matches_accumulator() {
        let mut expected: u64 = 17;
        for e in MASS_DENSITY.exponents() {
            expected = expected.wrapping_mul(31).wrapping_add(e as i64 as u64);
        }
        assert_eq!(MASS_DENSITY.hash_value(), expected);
    }

    #[test]
    fn hash_is_order_sensitive() {
        let a = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
        let b = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
        assert_ne!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn usable_as_hash_set_key() {
        let set: HashSet<Dimensions> = [MASS_DENSITY, VOLUME, MASS_DENSITY].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn product_and_quotient() {
        let mass = Dimensions::new(0, 0, 1, 0, 0, 0, 0);
        assert_eq!(mass / VOLUME, MASS_DENSITY);
        assert_eq!(MASS_DENSITY * VOLUME, mass);
        assert!((VOLUME / VOLUME).is_dimensionless());
    }

    #[test]
    fn checked_arithmetic_at_exponent_limits() {
        let big = Dimensions::new(0, 100, 0, 0, 0, 0, 0);
        assert_eq!(big.checked_product(big), None);
        assert_eq!(
            big.checked_quotient(big),
            Some(Dimensions::DIMENSIONLESS)
        );

        let min = Dimensions::new(i8::MIN, 0, 0, 0, 0, 0, 0);
        assert_eq!(min.checked_quotient(min), Some(Dimensions::DIMENSIONLESS));
        assert_eq!(min.checked_quotient(Dimensions::new(1, 0, 0, 0, 0, 0, 0)), None);
        assert_eq!(
            min.checked_product(Dimensions::new(i8::MAX, 0, 0, 0, 0, 0, 0)),
            Some(Dimensions::new(-1, 0, 0, 0, 0, 0, 0))
        );

        let edge = Dimensions::new(0, 0, 0, 0, 0, 0, 127);
        assert_eq!(edge / Dimensions::DIMENSIONLESS, edge);
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow")]
    fn product_overflow_panics() {
        let big = Dimensions::new(0, 100, 0, 0, 0, 0, 0);
        let _ = big * big;
    }

    #[test]
    fn print_joins_components() {
        assert_eq!(MASS_DENSITY.print(), "L^(-3)·M");
        let conductivity = Dimensions::new(-3, 1, 1, 0, -1, 0, 0);
        assert_eq!(conductivity.to_string(), "T^(-3)·L·M·Θ^(-1)");
    }
}
