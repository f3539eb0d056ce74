//! Quantity type and its implementations.

use core::fmt::{self, Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;

use crate::convert::{convert, convert_in_place, Components};
use crate::{Dimensions, Scalar, StaticUnit, UnitFamily};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value of one unit family, stored in the family's standard unit.
///
/// `Quantity<U, V>` pairs a value of any convertible shape `V` (a scalar by default, or a vector, dyad, array …)
/// with the family `U`. Whatever unit a quantity is built from, the stored value is always expressed in
/// `U::STANDARD`; reading it back in another unit converts on the way out.
///
/// # Examples
///
/// ```rust
/// use physq_core::length::Length;
/// use physq_core::Quantity;
///
/// let a = Quantity::<Length>::new(1.0, Length::Foot);
/// let b = Quantity::<Length>::new(6.0, Length::Inch);
/// let sum = a + b;
/// assert!((sum.value(Length::Inch) - 18.0).abs() < 1e-12);
/// assert!((sum.standard_value() - 0.4572).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: UnitFamily, V = f64> {
    value: V,
    unit: PhantomData<U>,
}

impl<U: UnitFamily, V> Quantity<U, V> {
    /// Wraps a value already expressed in the standard unit.
    ///
    /// ```rust
    /// use physq_core::mass::Mass;
    /// use physq_core::Quantity;
    ///
    /// let m = Quantity::<Mass>::standard(2.0);
    /// assert_eq!(m.value(Mass::Gram), 2000.0);
    /// ```
    #[inline]
    pub const fn standard(value: V) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Borrows the stored value (in the standard unit).
    #[inline]
    pub const fn as_standard(&self) -> &V {
        &self.value
    }

    /// Unwraps the stored value (in the standard unit).
    #[inline]
    pub fn into_standard(self) -> V {
        self.value
    }

    /// The standard unit values are stored in.
    #[inline]
    pub const fn unit() -> U {
        U::STANDARD
    }

    /// Dimension signature of the family.
    #[inline]
    pub const fn dimensions() -> Dimensions {
        U::DIMENSIONS
    }
}

impl<U: UnitFamily, V: Components + Clone> Quantity<U, V> {
    /// Creates a quantity from a value expressed in `unit`.
    #[inline]
    pub fn new(mut value: V, unit: U) -> Self {
        convert_in_place(&mut value, unit, U::STANDARD);
        Self::standard(value)
    }

    /// Returns the stored value, in the standard unit.
    #[inline]
    pub fn standard_value(&self) -> V {
        self.value.clone()
    }

    /// Returns the value expressed in `unit`.
    #[inline]
    pub fn value(&self, unit: U) -> V {
        convert(self.value.clone(), U::STANDARD, unit)
    }

    /// Returns the value expressed in the compile-time unit `S`, without consulting the registry.
    ///
    /// ```rust
    /// use physq_core::length::{unit, Length};
    /// use physq_core::Quantity;
    ///
    /// let q = Quantity::<Length>::new(3.0, Length::Foot);
    /// assert_eq!(q.static_value::<unit::Foot>(), q.value(Length::Foot));
    /// ```
    #[inline]
    pub fn static_value<S: StaticUnit<Family = U>>(&self) -> V {
        let mut value = self.value.clone();
        S::FROM_STANDARD.apply_slice(value.components_mut());
        value
    }

    /// Replaces the stored value with `value` expressed in `unit`.
    #[inline]
    pub fn set(&mut self, value: V, unit: U) {
        *self = Self::new(value, unit);
    }

    /// Formats the value in `unit`, e.g. `"12 in"`.
    pub fn print(&self, unit: U) -> String
    where
        V: Display,
    {
        format!("{} {}", self.value(unit), unit)
    }
}

impl<U: UnitFamily, S: Scalar> Quantity<U, S> {
    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::standard(self.value.abs())
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::standard(self.value.min(other.value))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::standard(self.value.max(other.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison and formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitFamily, V: PartialEq> PartialEq for Quantity<U, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: UnitFamily, V: PartialOrd> PartialOrd for Quantity<U, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// Formats the standard value followed by the standard unit's abbreviation; precision flags apply to the value.
impl<U: UnitFamily, V: Display> Display for Quantity<U, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)?;
        write!(f, " {}", U::STANDARD)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitFamily, V: Add<Output = V>> Add for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::standard(self.value + rhs.value)
    }
}

impl<U: UnitFamily, V: AddAssign> AddAssign for Quantity<U, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U: UnitFamily, V: Sub<Output = V>> Sub for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::standard(self.value - rhs.value)
    }
}

impl<U: UnitFamily, V: SubAssign> SubAssign for Quantity<U, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U: UnitFamily, V: Neg<Output = V>> Neg for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::standard(-self.value)
    }
}

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<U: UnitFamily> Mul<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::standard(self.value * rhs)
                }
            }

            impl<U: UnitFamily> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: UnitFamily> Div<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::standard(self.value / rhs)
                }
            }

            /// Ratio of two quantities of the same family; the result is a plain number.
            impl<U: UnitFamily> Div for Quantity<U, $t> {
                type Output = $t;
                #[inline]
                fn div(self, rhs: Self) -> $t {
                    self.value / rhs.value
                }
            }
        )*
    };
}

scalar_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"value": <standard value>, "unit": "<standard abbreviation>"}`.
#[cfg(feature = "serde")]
impl<U: UnitFamily, V: Serialize> Serialize for Quantity<U, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", U::STANDARD.abbreviation())?;
        state.end()
    }
}

/// Deserializes from `{"value", "unit"}` where `unit` is any accepted spelling; the value is converted to the
/// standard unit.
#[cfg(feature = "serde")]
impl<'de, U, V> Deserialize<'de> for Quantity<U, V>
where
    U: UnitFamily,
    V: Components + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Quantity", deny_unknown_fields)]
        struct Repr<V> {
            value: V,
            unit: String,
        }

        let repr = Repr::<V>::deserialize(deserializer)?;
        let unit = U::parse(&repr.unit).ok_or_else(|| {
            <D::Error as serde::de::Error>::custom(crate::ParseUnitError {
                family: U::NAME,
                input: repr.unit.clone(),
            })
        })?;
        Ok(Self::new(repr.value, unit))
    }
}
