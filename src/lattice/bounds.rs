//! Finite lattice extent and cell indexing
//!
//! Bounds are an inclusive box of lattice vertices. A cell lies inside the
//! bounds when all three of its corners do, which gives every in-bounds cell a
//! dense index usable by bitsets.

use crate::lattice::axial::Axial;
use crate::lattice::cell::{Orientation, TriangleCell};

/// Inclusive vertex box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeBounds {
    /// Smallest vertex coordinates (inclusive)
    pub min: Axial,
    /// Largest vertex coordinates (inclusive)
    pub max: Axial,
}

impl LatticeBounds {
    /// Create bounds from two corners
    pub fn new(min: Axial, max: Axial) -> Self {
        Self {
            min: Axial::new(min.q.min(max.q), min.r.min(max.r)),
            max: Axial::new(min.q.max(max.q), min.r.max(max.r)),
        }
    }

    /// Smallest box holding every given vertex
    pub fn enclosing(vertices: impl IntoIterator<Item = Axial>) -> Option<Self> {
        let mut iter = vertices.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| {
            (
                Axial::new(lo.q.min(v.q), lo.r.min(v.r)),
                Axial::new(hi.q.max(v.q), hi.r.max(v.r)),
            )
        });
        Some(Self { min, max })
    }

    /// Check if a vertex is within the bounds
    pub const fn contains_vertex(&self, vertex: Axial) -> bool {
        vertex.q >= self.min.q
            && vertex.q <= self.max.q
            && vertex.r >= self.min.r
            && vertex.r <= self.max.r
    }

    /// Check if all three corners of a cell are within the bounds
    pub const fn contains_cell(&self, cell: TriangleCell) -> bool {
        let [a, b, c] = cell.corners();
        self.contains_vertex(a) && self.contains_vertex(b) && self.contains_vertex(c)
    }

    /// Cells per row of each orientation
    const fn columns(&self) -> usize {
        (self.max.q - self.min.q) as usize
    }

    /// Rows of each orientation
    const fn rows(&self) -> usize {
        (self.max.r - self.min.r) as usize
    }

    /// Number of cells that fit inside the bounds
    pub const fn cell_capacity(&self) -> usize {
        2 * self.columns() * self.rows()
    }

    /// Dense index of an in-bounds cell
    pub const fn cell_index(&self, cell: TriangleCell) -> Option<usize> {
        if !self.contains_cell(cell) {
            return None;
        }
        let column = (cell.q - self.min.q) as usize;
        let (row, parity) = match cell.orientation {
            Orientation::Down => ((cell.r - self.min.r) as usize, 0),
            Orientation::Up => ((cell.r - self.min.r - 1) as usize, 1),
        };
        Some((row * self.columns() + column) * 2 + parity)
    }

    /// Cell with the given dense index
    pub const fn cell_at(&self, index: usize) -> Option<TriangleCell> {
        if index >= self.cell_capacity() {
            return None;
        }
        let slot = index / 2;
        let column = (slot % self.columns()) as i32;
        let row = (slot / self.columns()) as i32;
        let q = self.min.q + column;
        Some(if index % 2 == 0 {
            TriangleCell::down(q, self.min.r + row)
        } else {
            TriangleCell::up(q, self.min.r + row + 1)
        })
    }

    /// Adjust a translation so a vertex set moved by it stays inside
    ///
    /// When the set is wider (or taller) than the bounds, its minimum edge is
    /// aligned with the bounds' minimum edge on that axis.
    pub fn clamp_delta(&self, vertices: &[Axial], dq: i32, dr: i32) -> (i32, i32) {
        let Some(extent) = Self::enclosing(vertices.iter().copied()) else {
            return (dq, dr);
        };
        let fit = |lo: i32, hi: i32, min: i32, max: i32, delta: i32| {
            let (lo, hi) = (lo + delta, hi + delta);
            if hi > max && lo - (hi - max) >= min {
                delta - (hi - max)
            } else if lo < min || hi > max {
                delta + (min - lo)
            } else {
                delta
            }
        };
        (
            fit(extent.min.q, extent.max.q, self.min.q, self.max.q, dq),
            fit(extent.min.r, extent.max.r, self.min.r, self.max.r, dr),
        )
    }
}
