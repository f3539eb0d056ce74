//! Scale/offset transforms between a unit and its family's standard unit.

use crate::Scalar;

/// A pure numeric transform applied to values during conversion.
///
/// Constants are stored as `f64` and narrowed to the working [`Scalar`] type when applied. Only multiplications and
/// divisions by the stored constants are performed, so a [`Transform::Divide`] by `k` is exactly the inverse of a
/// [`Transform::Multiply`] by `k` up to one rounding per step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Leaves the value untouched.
    Identity,
    /// `x * k`
    Multiply(f64),
    /// `x / k`
    Divide(f64),
    /// `x * k + b`, stored as `(k, b)`.
    MultiplyAdd(f64, f64),
    /// `(x - b) / k`, stored as `(b, k)`.
    SubtractDivide(f64, f64),
}

impl Transform {
    /// Applies the transform to a single value.
    ///
    /// ```rust
    /// use physq_core::Transform;
    ///
    /// assert_eq!(Transform::Multiply(1000.0).apply(1.5_f64), 1500.0);
    /// assert_eq!(Transform::SubtractDivide(32.0, 1.8).apply(212.0_f64), 100.0);
    /// ```
    #[inline]
    pub fn apply<S: Scalar>(self, value: S) -> S {
        match self {
            Transform::Identity => value,
            Transform::Multiply(k) => value * S::from_f64(k),
            Transform::Divide(k) => value / S::from_f64(k),
            Transform::MultiplyAdd(k, b) => value * S::from_f64(k) + S::from_f64(b),
            Transform::SubtractDivide(b, k) => (value - S::from_f64(b)) / S::from_f64(k),
        }
    }

    /// Applies the transform to every element of a contiguous buffer.
    ///
    /// This is the operation every shaped conversion (vectors, dyads, arrays) reduces to.
    #[inline]
    pub fn apply_slice<S: Scalar>(self, values: &mut [S]) {
        match self {
            Transform::Identity => {}
            Transform::Multiply(k) => {
                let k = S::from_f64(k);
                values.iter_mut().for_each(|v| *v = *v * k);
            }
            Transform::Divide(k) => {
                let k = S::from_f64(k);
                values.iter_mut().for_each(|v| *v = *v / k);
            }
            Transform::MultiplyAdd(k, b) => {
                let (k, b) = (S::from_f64(k), S::from_f64(b));
                values.iter_mut().for_each(|v| *v = *v * k + b);
            }
            Transform::SubtractDivide(b, k) => {
                let (b, k) = (S::from_f64(b), S::from_f64(k));
                values.iter_mut().for_each(|v| *v = (*v - b) / k);
            }
        }
    }

    /// Returns the transform undoing this one.
    pub const fn inverse(self) -> Self {
        match self {
            Transform::Identity => Transform::Identity,
            Transform::Multiply(k) => Transform::Divide(k),
            Transform::Divide(k) => Transform::Multiply(k),
            Transform::MultiplyAdd(k, b) => Transform::SubtractDivide(b, k),
            Transform::SubtractDivide(b, k) => Transform::MultiplyAdd(k, b),
        }
    }

    /// Returns `true` for [`Transform::Identity`].
    pub const fn is_identity(self) -> bool {
        matches!(self, Transform::Identity)
    }
}

/// Declarative conversion row for one unit: `standard = value * scale + offset`.
///
/// The standard unit of a family uses [`Conversion::IDENTITY`]. Purely multiplicative units are built with
/// [`Conversion::scaled`] or [`Conversion::reciprocal`]; zero-point shifts (temperature scales) use [`Conversion::affine`]. The row kind, not the
/// numeric value of the offset, decides which [`Transform`] is produced, so the same row always yields the same
/// transform whether it is read at run time or in a `const` item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    scale: f64,
    offset: f64,
    kind: RowKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowKind {
    Identity,
    Scaled,
    Reciprocal,
    Affine,
}

impl Conversion {
    /// Conversion row of a family's standard unit.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: 0.0,
        kind: RowKind::Identity,
    };

    /// Purely multiplicative row.
    pub const fn scaled(scale: f64) -> Self {
        Self {
            scale,
            offset: 0.0,
            kind: RowKind::Scaled,
        }
    }

    /// Multiplicative row given as "`per` of this unit make one standard unit".
    ///
    /// Stores `per` itself, so decimal submultiples keep an exactly representable constant (`1e9` instead of
    /// `1e-9`).
    pub const fn reciprocal(per: f64) -> Self {
        Self {
            scale: per,
            offset: 0.0,
            kind: RowKind::Reciprocal,
        }
    }

    /// Affine row with a zero-point shift.
    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self {
            scale,
            offset,
            kind: RowKind::Affine,
        }
    }

    /// Stored constant: the multiplier for scaled and affine rows, the divisor for reciprocal rows.
    pub const fn factor(self) -> f64 {
        self.scale
    }

    /// Offset added after scaling, in standard units.
    pub const fn offset(self) -> f64 {
        self.offset
    }

    /// Returns `true` for the standard unit's row.
    pub const fn is_identity(self) -> bool {
        matches!(self.kind, RowKind::Identity)
    }

    /// Transform taking a value in this unit to the standard unit.
    pub const fn to_standard(self) -> Transform {
        match self.kind {
            RowKind::Identity => Transform::Identity,
            RowKind::Scaled => Transform::Multiply(self.scale),
            RowKind::Reciprocal => Transform::Divide(self.scale),
            RowKind::Affine => Transform::MultiplyAdd(self.scale, self.offset),
        }
    }

    /// Transform taking a standard-unit value to this unit.
    pub const fn from_standard(self) -> Transform {
        self.to_standard().inverse()
    }
}
