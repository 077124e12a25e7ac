//! Random contiguous blob polygons
//!
//! A blob grows from a random seed cell one frontier cell at a time. The
//! compactness setting biases growth toward cells already surrounded by the
//! blob, which keeps the outline smooth; lower values give stringier shapes.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::generation::occupancy::Occupancy;
use crate::io::configuration::{DEFAULT_BLOB_SIZE, DEFAULT_COMPACTNESS, DEFAULT_FILL, MAX_BLOB_ATTEMPTS};
use crate::io::error::{EngineError, Result, invalid_parameter};
use crate::lattice::{Axial, LatticeBounds, TriangleCell};
use crate::mask::{Mask, mask_to_polygon};
use crate::shape::Polygon;

/// Blob generation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobConfig {
    /// Number of triangles in the blob
    pub size: usize,
    /// Probability of growing into the most enclosed frontier cell
    pub compactness: f64,
    /// Restarts allowed before giving up
    pub max_attempts: usize,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BLOB_SIZE,
            compactness: DEFAULT_COMPACTNESS,
            max_attempts: MAX_BLOB_ATTEMPTS,
        }
    }
}

impl BlobConfig {
    /// Check that every setting is usable
    ///
    /// # Errors
    ///
    /// Returns an error for a zero size, a compactness outside `0..=1` or a
    /// zero attempt budget
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(invalid_parameter("size", &self.size, &"must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.compactness) {
            return Err(invalid_parameter(
                "compactness",
                &self.compactness,
                &"must be between 0 and 1",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Unclaimed in-bounds cells sharing an edge with the mask, in cell order
fn frontier(mask: &Mask, taken: &Occupancy) -> Vec<TriangleCell> {
    let bounds = taken.bounds();
    let cells: BTreeSet<TriangleCell> = mask
        .iter()
        .flat_map(TriangleCell::neighbours)
        .filter(|&n| bounds.contains_cell(n) && !taken.contains(n))
        .collect();
    cells.into_iter().collect()
}

/// Frontier cell with the most mask neighbours; the first one wins ties
fn most_enclosed(mask: &Mask, candidates: &[TriangleCell]) -> Option<TriangleCell> {
    let mut best: Option<(TriangleCell, usize)> = None;
    for &cell in candidates {
        let count = mask.neighbour_count(&cell);
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((cell, count));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Grow one mask of `config.size` cells, or `None` when growth gets stuck
fn grow_mask<R: Rng>(config: &BlobConfig, bounds: &LatticeBounds, rng: &mut R) -> Option<Mask> {
    let seed = bounds.cell_at(rng.random_range(0..bounds.cell_capacity()))?;
    let mut taken = Occupancy::new(*bounds);
    let mut mask = Mask::new();
    taken.insert(seed);
    mask.insert(seed);

    while mask.len() < config.size {
        let candidates = frontier(&mask, &taken);
        if candidates.is_empty() {
            return None;
        }
        let pick = if rng.random::<f64>() < config.compactness {
            most_enclosed(&mask, &candidates)?
        } else {
            *candidates.get(rng.random_range(0..candidates.len()))?
        };
        taken.insert(pick);
        mask.insert(pick);
    }

    Some(mask)
}

/// Random translation keeping every local vertex inside the bounds
fn random_origin<R: Rng>(verts: &[Axial], bounds: &LatticeBounds, current: Axial, rng: &mut R) -> Axial {
    let Some(extent) = LatticeBounds::enclosing(verts.iter().copied()) else {
        return current;
    };
    let mut pick = |lo: i32, hi: i32, fallback: i32| {
        if lo <= hi {
            rng.random_range(lo..=hi)
        } else {
            fallback
        }
    };
    let q = pick(bounds.min.q - extent.min.q, bounds.max.q - extent.max.q, current.q);
    let r = pick(bounds.min.r - extent.min.r, bounds.max.r - extent.max.r, current.r);
    Axial::new(q, r)
}

/// Generate a random contiguous polygon of `config.size` triangles
///
/// The blob is placed at a random position inside `bounds` with a random
/// `hsl(h 80% 60%)` fill. Attempts whose growth gets stuck or whose outline
/// encloses a hole are restarted from a new seed.
///
/// # Errors
///
/// Returns `InvalidParameter` for an unusable config, `InsufficientCapacity`
/// if the bounds hold fewer cells than requested, and `GenerationExhausted`
/// once `config.max_attempts` attempts have failed
pub fn make_random_blob<R: Rng>(
    config: &BlobConfig,
    bounds: &LatticeBounds,
    rng: &mut R,
) -> Result<Polygon> {
    config.validate()?;

    let available = bounds.cell_capacity();
    if config.size > available {
        return Err(EngineError::InsufficientCapacity {
            operation: "random blob",
            requested: config.size,
            available,
        });
    }

    for attempt in 1..=config.max_attempts {
        let Some(mask) = grow_mask(config, bounds, rng) else {
            debug!(attempt, "blob growth stuck, restarting");
            continue;
        };

        let mut polygon = match mask_to_polygon(&mask, DEFAULT_FILL) {
            Ok(polygon) => polygon,
            Err(err) => {
                debug!(attempt, %err, "blob outline rejected, restarting");
                continue;
            }
        };

        let mut pose = polygon.pose();
        let origin = random_origin(polygon.verts(), bounds, pose.translation(), rng);
        pose.translate(origin.q - pose.q, origin.r - pose.r);
        polygon.set_pose(pose);
        polygon.set_fill(format!("hsl({} 80% 60%)", rng.random_range(0..360)));

        debug!(attempt, cells = mask.len(), "blob generated");
        return Ok(polygon);
    }

    Err(EngineError::GenerationExhausted {
        attempts: config.max_attempts,
    })
}
