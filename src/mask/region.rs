//! Ordered set of covered triangle cells

use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::lattice::{Axial, TriangleCell};

/// Set of triangle cells with deterministic iteration order
///
/// Cells iterate by `(q, r, orientation)`, so anything derived from a mask
/// (boundary walks, seeded shuffles) is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mask {
    cells: BTreeSet<TriangleCell>,
}

impl Mask {
    /// Create an empty mask
    pub const fn new() -> Self {
        Self {
            cells: BTreeSet::new(),
        }
    }

    /// Add a cell; returns whether it was newly inserted
    pub fn insert(&mut self, cell: TriangleCell) -> bool {
        self.cells.insert(cell)
    }

    /// Test cell membership
    pub fn contains(&self, cell: &TriangleCell) -> bool {
        self.cells.contains(cell)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in order
    pub fn iter(&self) -> btree_set::Iter<'_, TriangleCell> {
        self.cells.iter()
    }

    /// Smallest q and smallest r over all cells, taken independently
    pub fn min_anchor(&self) -> Option<Axial> {
        let min_q = self.cells.iter().map(|c| c.q).min()?;
        let min_r = self.cells.iter().map(|c| c.r).min()?;
        Some(Axial::new(min_q, min_r))
    }

    /// Number of a cell's edge neighbours that are in the mask
    pub fn neighbour_count(&self, cell: &TriangleCell) -> usize {
        cell.neighbours()
            .iter()
            .filter(|n| self.cells.contains(n))
            .count()
    }

    /// Test if the two masks share no cell
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.cells.is_disjoint(&other.cells)
    }

    /// Same cells shifted by a lattice delta
    #[must_use]
    pub fn translated(&self, delta: Axial) -> Self {
        self.cells
            .iter()
            .map(|c| TriangleCell::new(c.q + delta.q, c.r + delta.r, c.orientation))
            .collect()
    }
}

impl FromIterator<TriangleCell> for Mask {
    fn from_iter<I: IntoIterator<Item = TriangleCell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<TriangleCell> for Mask {
    fn extend<I: IntoIterator<Item = TriangleCell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for Mask {
    type Item = TriangleCell;
    type IntoIter = btree_set::IntoIter<TriangleCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a TriangleCell;
    type IntoIter = btree_set::Iter<'a, TriangleCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
