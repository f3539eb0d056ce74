//! Conversion dispatch.
//!
//! Every conversion is routed through the family's standard unit: first the source unit's `ToStandard` transform,
//! then the target unit's `FromStandard` transform. Only two transforms per unit are ever registered, and no direct
//! transform between two non-standard units exists.
//!
//! Three entry points share that algorithm:
//!
//! - [`convert_in_place`] rewrites a value through the family's [`Registry`](crate::Registry).
//! - [`convert`] does the same on a copy.
//! - [`convert_statically`] takes the units as [`StaticUnit`] marker types, so both transforms are associated
//!   constants and no table is consulted.
//!
//! Values of any shape implementing [`Components`] are accepted: scalars, arrays, slices, vectors and dyads all
//! reduce to applying the scalar transform over their backing buffer.
//!
//! ```rust
//! use physq_core::mass::{unit, Mass};
//! use physq_core::{convert, convert_statically, Vector};
//!
//! assert_eq!(convert(1.0, Mass::Kilogram, Mass::Gram), 1000.0);
//! assert_eq!(convert_statically::<unit::Gram, unit::Kilogram, _>(1000.0), 1.0);
//!
//! let v = convert(Vector::new(1.0_f32, 2.0, 3.0), Mass::Kilogram, Mass::Gram);
//! assert_eq!(v, Vector::new(1000.0, 2000.0, 3000.0));
//! ```
//!
//! Mixing families is a type error:
//!
//! ```compile_fail
//! use physq_core::mass::Mass;
//! use physq_core::volume::Volume;
//! use physq_core::convert;
//!
//! let _ = convert(1.0, Mass::Kilogram, Volume::Litre);
//! ```

use crate::containers::{Dyad, PlanarVector, SymmetricDyad, Vector};
use crate::transform::Transform;
use crate::{Scalar, StaticUnit, UnitFamily};

/// A value whose numeric components can be rewritten in place.
pub trait Components {
    /// Element type of the backing buffer.
    type Scalar: Scalar;

    /// The backing buffer.
    fn components_mut(&mut self) -> &mut [Self::Scalar];
}

macro_rules! scalar_components {
    ($($t:ty),*) => {
        $(
            impl Components for $t {
                type Scalar = $t;
                #[inline]
                fn components_mut(&mut self) -> &mut [$t] {
                    core::slice::from_mut(self)
                }
            }
        )*
    };
}

scalar_components!(f32, f64);

impl<S: Scalar, const K: usize> Components for [S; K] {
    type Scalar = S;
    #[inline]
    fn components_mut(&mut self) -> &mut [S] {
        self
    }
}

impl<S: Scalar> Components for [S] {
    type Scalar = S;
    #[inline]
    fn components_mut(&mut self) -> &mut [S] {
        self
    }
}

impl<S: Scalar> Components for Vec<S> {
    type Scalar = S;
    #[inline]
    fn components_mut(&mut self) -> &mut [S] {
        self.as_mut_slice()
    }
}

macro_rules! container_components {
    ($($name:ident),*) => {
        $(
            impl<S: Scalar> Components for $name<S> {
                type Scalar = S;
                #[inline]
                fn components_mut(&mut self) -> &mut [S] {
                    self.as_mut_slice()
                }
            }
        )*
    };
}

container_components!(PlanarVector, Vector, SymmetricDyad, Dyad);

#[inline]
fn apply_chain<V: Components + ?Sized>(value: &mut V, to_standard: Transform, from_standard: Transform) {
    let buffer = value.components_mut();
    to_standard.apply_slice(buffer);
    from_standard.apply_slice(buffer);
}

/// Re-expresses `value` from `original` into `new`, in place.
///
/// An `A → A` conversion leaves the value bit-identical.
///
/// # Panics
///
/// If the family's registry lacks an entry for either unit, which indicates an incomplete family definition.
#[inline]
pub fn convert_in_place<U, V>(value: &mut V, original: U, new: U)
where
    U: UnitFamily,
    V: Components + ?Sized,
{
    if original == new {
        return;
    }
    let registry = U::registry();
    let to_standard = if original.is_standard() {
        Transform::Identity
    } else {
        registry.to_standard(original)
    };
    let from_standard = if new.is_standard() {
        Transform::Identity
    } else {
        registry.from_standard(new)
    };
    apply_chain(value, to_standard, from_standard);
}

/// Returns a copy of `value` re-expressed from `original` into `new`.
///
/// ```rust
/// use physq_core::angular_speed::AngularSpeed;
/// use physq_core::convert;
///
/// let deg: f64 = convert(1.0, AngularSpeed::RadianPerSecond, AngularSpeed::DegreePerSecond);
/// assert!((deg - 180.0 / std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn convert<U, V>(mut value: V, original: U, new: U) -> V
where
    U: UnitFamily,
    V: Components,
{
    convert_in_place(&mut value, original, new);
    value
}

/// Converts `value` between two units fixed at compile time.
///
/// Both transforms are associated constants of the markers, so this path never touches the registry. Units from
/// different families are rejected by the `Family` bound.
#[inline]
pub fn convert_statically<A, B, V>(mut value: V) -> V
where
    A: StaticUnit,
    B: StaticUnit<Family = A::Family>,
    V: Components,
{
    convert_statically_in_place::<A, B, V>(&mut value);
    value
}

/// In-place form of [`convert_statically`].
#[inline]
pub fn convert_statically_in_place<A, B, V>(value: &mut V)
where
    A: StaticUnit,
    B: StaticUnit<Family = A::Family>,
    V: Components + ?Sized,
{
    if A::UNIT == B::UNIT {
        return;
    }
    apply_chain(value, A::TO_STANDARD, B::FROM_STANDARD);
}
