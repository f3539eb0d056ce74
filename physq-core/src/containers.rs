//! Fixed-size value containers converted component-wise.
//!
//! These are plain numeric carriers: a container holds its components contiguously so a unit conversion can treat it
//! as one buffer. They deliberately offer no vector or tensor algebra.

use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common constructors and accessors for a container backed by `[N; $len]`.
macro_rules! container {
    ($name:ident, $len:literal) => {
        impl<N: Copy> $name<N> {
            /// Number of stored components.
            pub const LEN: usize = $len;

            #[doc = concat!("Builds a `", stringify!($name), "` from its components in storage order.")]
            #[inline]
            pub const fn from_array(components: [N; $len]) -> Self {
                Self { components }
            }

            /// Components in storage order.
            #[inline]
            pub const fn as_array(&self) -> &[N; $len] {
                &self.components
            }

            /// Mutable components in storage order.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [N] {
                &mut self.components
            }
        }

        impl<N: Copy> From<[N; $len]> for $name<N> {
            fn from(components: [N; $len]) -> Self {
                Self::from_array(components)
            }
        }

        impl<N: Copy> From<$name<N>> for [N; $len] {
            fn from(value: $name<N>) -> Self {
                value.components
            }
        }

        impl<N> Index<usize> for $name<N> {
            type Output = N;
            fn index(&self, index: usize) -> &N {
                &self.components[index]
            }
        }

        impl<N> IndexMut<usize> for $name<N> {
            fn index_mut(&mut self, index: usize) -> &mut N {
                &mut self.components[index]
            }
        }
    };
}

/// Two-component vector in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarVector<N> {
    components: [N; 2],
}

container!(PlanarVector, 2);

impl<N: Copy> PlanarVector<N> {
    /// Builds a vector from its `x` and `y` components.
    pub const fn new(x: N, y: N) -> Self {
        Self { components: [x, y] }
    }

    /// `x` component.
    pub const fn x(&self) -> N {
        self.components[0]
    }

    /// `y` component.
    pub const fn y(&self) -> N {
        self.components[1]
    }
}

/// Three-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<N> {
    components: [N; 3],
}

container!(Vector, 3);

impl<N: Copy> Vector<N> {
    /// Builds a vector from its `x`, `y` and `z` components.
    pub const fn new(x: N, y: N, z: N) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// `x` component.
    pub const fn x(&self) -> N {
        self.components[0]
    }

    /// `y` component.
    pub const fn y(&self) -> N {
        self.components[1]
    }

    /// `z` component.
    pub const fn z(&self) -> N {
        self.components[2]
    }
}

/// Symmetric second-order tensor, stored as its six independent components `xx, xy, xz, yy, yz, zz`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymmetricDyad<N> {
    components: [N; 6],
}

container!(SymmetricDyad, 6);

impl<N: Copy> SymmetricDyad<N> {
    /// Builds a symmetric dyad from its independent components.
    pub const fn new(xx: N, xy: N, xz: N, yy: N, yz: N, zz: N) -> Self {
        Self {
            components: [xx, xy, xz, yy, yz, zz],
        }
    }

    /// `xx` component.
    pub const fn xx(&self) -> N {
        self.components[0]
    }

    /// `xy` (= `yx`) component.
    pub const fn xy(&self) -> N {
        self.components[1]
    }

    /// `xz` (= `zx`) component.
    pub const fn xz(&self) -> N {
        self.components[2]
    }

    /// `yy` component.
    pub const fn yy(&self) -> N {
        self.components[3]
    }

    /// `yz` (= `zy`) component.
    pub const fn yz(&self) -> N {
        self.components[4]
    }

    /// `zz` component.
    pub const fn zz(&self) -> N {
        self.components[5]
    }
}

/// General second-order tensor, nine components in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dyad<N> {
    components: [N; 9],
}

container!(Dyad, 9);

impl<N: Copy> Dyad<N> {
    /// Builds a dyad from its rows.
    pub fn from_rows(rows: [[N; 3]; 3]) -> Self {
        let [[xx, xy, xz], [yx, yy, yz], [zx, zy, zz]] = rows;
        Self {
            components: [xx, xy, xz, yx, yy, yz, zx, zy, zz],
        }
    }

    /// Component at `row`, `column` (both in `0..3`).
    pub fn get(&self, row: usize, column: usize) -> N {
        self.components[row * 3 + column]
    }
}
