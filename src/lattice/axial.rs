//! Axial lattice coordinates and the exact 60° rotation table
//!
//! Every lattice vertex is addressed by an integer pair `(q, r)`. The basis is
//! the horizontal-row layout used throughout the engine: `q` steps one side to
//! the right, `r` steps one row down and half a side to the right.

use std::fmt;
use std::ops::{Add, Sub};

/// Integer lattice vertex
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axial {
    /// Column coordinate
    pub q: i32,
    /// Row coordinate
    pub r: i32,
}

impl Axial {
    /// Lattice origin
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a lattice vertex
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Rotate about the origin by `k` steps of 60°
    ///
    /// Any integer is accepted; the step count is reduced modulo 6.
    #[must_use]
    pub const fn rotated(self, k: i32) -> Self {
        let (q, r) = (self.q, self.r);
        match k.rem_euclid(6) {
            0 => Self::new(q, r),
            1 => Self::new(-r, q + r),
            2 => Self::new(-q - r, q),
            3 => Self::new(-q, -r),
            4 => Self::new(r, -q - r),
            _ => Self::new(q + r, -q),
        }
    }

    /// Reflect across the vertical axis through the origin
    ///
    /// This negates the q-offset measured along the row, i.e. `q + r / 2`,
    /// which keeps unit edges unit edges. Plain `q → -q` would shear the
    /// lattice.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(-self.q - self.r, self.r)
    }

    /// Index of this offset among the six unit edge directions
    ///
    /// Directions are numbered counter-clockwise on screen starting east.
    /// Returns `None` for anything that is not a single lattice edge.
    pub const fn direction_index(self) -> Option<usize> {
        match (self.q, self.r) {
            (1, 0) => Some(0),
            (1, -1) => Some(1),
            (0, -1) => Some(2),
            (-1, 0) => Some(3),
            (-1, 1) => Some(4),
            (0, 1) => Some(5),
            _ => None,
        }
    }
}

impl Add for Axial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Axial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl From<(i32, i32)> for Axial {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
