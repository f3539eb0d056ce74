//! Floating-point abstraction used by every conversion.
//!
//! Conversion constants are authored once as `f64` (the widest float Rust offers) and narrowed to the working type
//! at the call site through [`Scalar::from_f64`], so the same unit table serves `f32` and `f64` callers.

use core::fmt::{Debug, Display};

use num_traits::Float;

/// Numeric type a quantity or container can be expressed in.
///
/// ```rust
/// use physq_core::Scalar;
///
/// fn halve<S: Scalar>(v: S) -> S {
///     v * S::from_f64(0.5)
/// }
///
/// assert_eq!(halve(3.0_f32), 1.5);
/// assert_eq!(halve(3.0_f64), 1.5);
/// ```
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Narrows an `f64` constant into this type.
    fn from_f64(v: f64) -> Self;

    /// Widens this value to `f64`.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}
