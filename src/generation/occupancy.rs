use bitvec::prelude::*;
use std::fmt;

use crate::lattice::{LatticeBounds, TriangleCell};

/// Fixed-size bitset marking which in-bounds cells are taken
///
/// Cells are addressed through `LatticeBounds::cell_index`. Out-of-bounds
/// cells are never members and cannot be inserted.
#[derive(Clone, Debug)]
pub struct Occupancy {
    bits: BitVec,
    bounds: LatticeBounds,
}

impl Occupancy {
    /// Create an occupancy with no cells taken
    pub fn new(bounds: LatticeBounds) -> Self {
        Self {
            bits: bitvec![0; bounds.cell_capacity()],
            bounds,
        }
    }

    /// Bounds the bitset covers
    pub const fn bounds(&self) -> &LatticeBounds {
        &self.bounds
    }

    /// Mark a cell taken; returns whether it was newly taken
    pub fn insert(&mut self, cell: TriangleCell) -> bool {
        let Some(index) = self.bounds.cell_index(cell) else {
            return false;
        };
        !self.bits.replace(index, true)
    }

    /// Test cell membership
    pub fn contains(&self, cell: TriangleCell) -> bool {
        self.bounds
            .cell_index(cell)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no cells are taken
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count taken cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Release every cell
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Taken cells in index order
    pub fn cells(&self) -> Vec<TriangleCell> {
        self.bits
            .iter_ones()
            .filter_map(|index| self.bounds.cell_at(index))
            .collect()
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occupancy({} of {} cells)",
            self.count(),
            self.bounds.cell_capacity()
        )
    }
}
