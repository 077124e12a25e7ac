//! Splitting a polygon into contiguous sub-polygons
//!
//! Seeds are drawn at random from the parent's cells and grown together one
//! ring at a time, so every region stays edge-connected and the regions tile
//! the parent exactly.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::io::error::Result;
use crate::lattice::TriangleCell;
use crate::mask::{Mask, mask_to_polygon};
use crate::shape::Polygon;

/// Grow `seeds` through `mask` by simultaneous breadth-first search
///
/// Each round, regions claim the unclaimed mask neighbours of their frontier
/// in index order, so a cell reachable by several regions in the same round
/// goes to the lowest index.
pub fn grow_regions(mask: &Mask, seeds: &[TriangleCell]) -> Vec<Mask> {
    let mut claimed: HashSet<TriangleCell> = HashSet::new();
    let mut regions: Vec<Mask> = Vec::with_capacity(seeds.len());
    let mut frontiers: Vec<Vec<TriangleCell>> = Vec::with_capacity(seeds.len());

    for &seed in seeds {
        let mut region = Mask::new();
        let mut frontier = Vec::new();
        if mask.contains(&seed) && claimed.insert(seed) {
            region.insert(seed);
            frontier.push(seed);
        }
        regions.push(region);
        frontiers.push(frontier);
    }

    while frontiers.iter().any(|f| !f.is_empty()) {
        for (region, frontier) in regions.iter_mut().zip(frontiers.iter_mut()) {
            let mut next = Vec::new();
            for cell in frontier.drain(..) {
                for neighbour in cell.neighbours() {
                    if mask.contains(&neighbour) && claimed.insert(neighbour) {
                        region.insert(neighbour);
                        next.push(neighbour);
                    }
                }
            }
            *frontier = next;
        }
    }

    regions
}

/// Split `parent` into at most `n` edge-connected polygons
///
/// With `n <= 1`, or when the parent covers no more than `n` cells, the
/// result is the parent alone. Children inherit the parent's fill and are
/// expressed in the parent's rotation and mirror frame; empty regions are
/// dropped.
///
/// # Errors
///
/// Returns `InvalidMask` if a grown region encloses another one, leaving it
/// with a hole
pub fn split_polygon<R: Rng>(parent: &Polygon, n: usize, rng: &mut R) -> Result<Vec<Polygon>> {
    let mask = parent.tri_mask();
    if n <= 1 || mask.len() <= n {
        debug!(cells = mask.len(), n, "split not needed, keeping parent");
        return Ok(vec![parent.clone()]);
    }

    let mut cells: Vec<TriangleCell> = mask.iter().copied().collect();
    cells.shuffle(rng);
    cells.truncate(n);

    let pose = parent.pose();
    let mut children = Vec::with_capacity(n);
    for region in grow_regions(&mask, &cells) {
        if region.is_empty() {
            continue;
        }
        debug!(cells = region.len(), "split region");

        let mut child = mask_to_polygon(&region, parent.fill())?;
        child.reframe(i32::from(pose.rotation()), pose.mirrored);

        if let (Some(want), Some(got)) = (region.min_anchor(), child.tri_mask().min_anchor()) {
            child.translate(want.q - got.q, want.r - got.r);
        }
        children.push(child);
    }

    Ok(children)
}
