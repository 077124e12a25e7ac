//! Mask to boundary-loop reconstruction
//!
//! Every cell contributes its three directed edges. Cells wind the same way,
//! so an edge shared by two members shows up once in each direction and both
//! copies cancel. What survives is the region's boundary, walked from its
//! lexicographically smallest vertex.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::io::error::{MaskDefect, Result, invalid_mask};
use crate::lattice::{Axial, Pose};
use crate::mask::region::Mask;
use crate::shape::Polygon;

/// Unit edge offsets, counter-clockwise on screen starting east
const DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

/// Outgoing boundary edges per vertex, one slot per direction
type Outgoing = BTreeMap<Axial, [bool; 6]>;

/// Directed edges left after shared edges cancel
pub fn boundary_edges(mask: &Mask) -> HashSet<(Axial, Axial)> {
    let mut edges = HashSet::new();
    for cell in mask {
        for (from, to) in cell.edges() {
            if !edges.remove(&(to, from)) {
                edges.insert((from, to));
            }
        }
    }
    edges
}

/// Pick the edge leaving `vertex` after arriving along direction `arrived`
///
/// Scans counter-clockwise from the edge just walked, which keeps the walk on
/// the same side of a vertex shared by two wedges of the mask.
fn successor(outgoing: &Outgoing, vertex: Axial, arrived: usize, closing: Option<usize>) -> Option<usize> {
    let back = (arrived + 3) % 6;
    let slots = outgoing.get(&vertex);
    (1..6).map(|k| (back + k) % 6).find(|&dir| {
        closing == Some(dir) || slots.is_some_and(|s| s.get(dir).copied().unwrap_or(false))
    })
}

/// Ordered boundary vertices of a simply connected, edge-contiguous mask
///
/// # Errors
///
/// Returns `InvalidMask` if the mask is empty, has no boundary, leaves a
/// dangling edge, has holes or disconnected parts, or closes with fewer than
/// three distinct vertices
pub fn boundary_loop(mask: &Mask) -> Result<Vec<Axial>> {
    if mask.is_empty() {
        return Err(invalid_mask(MaskDefect::Empty));
    }

    let edges = boundary_edges(mask);
    if edges.is_empty() {
        return Err(invalid_mask(MaskDefect::NoBoundary));
    }

    let mut outgoing = Outgoing::new();
    for &(from, to) in &edges {
        if let Some(dir) = (to - from).direction_index()
            && let Some(slot) = outgoing.entry(from).or_insert([false; 6]).get_mut(dir)
        {
            *slot = true;
        }
    }

    let Some((&start, start_slots)) = outgoing.iter().next() else {
        return Err(invalid_mask(MaskDefect::NoBoundary));
    };
    let Some(start_dir) = start_slots.iter().position(|&open| open) else {
        return Err(invalid_mask(MaskDefect::DanglingEdge { at: start }));
    };

    let total = edges.len();
    let mut visited = 0;
    let mut ordered = Vec::new();
    let (mut at, mut dir) = (start, start_dir);

    loop {
        ordered.push(at);
        if let Some(slot) = outgoing.get_mut(&at).and_then(|s| s.get_mut(dir)) {
            *slot = false;
        }
        visited += 1;

        let Some(&step) = DIRECTIONS.get(dir) else {
            return Err(invalid_mask(MaskDefect::DanglingEdge { at }));
        };
        let next = at + step;
        let closing = (next == start).then_some(start_dir);

        match successor(&outgoing, next, dir, closing) {
            Some(next_dir) if next == start && next_dir == start_dir => break,
            Some(next_dir) => {
                at = next;
                dir = next_dir;
            }
            None => return Err(invalid_mask(MaskDefect::DanglingEdge { at: next })),
        }

        if visited >= total {
            return Err(invalid_mask(MaskDefect::DanglingEdge { at: next }));
        }
    }

    if visited < total {
        return Err(invalid_mask(MaskDefect::Unreachable {
            edges: total - visited,
        }));
    }

    let distinct: BTreeSet<Axial> = ordered.iter().copied().collect();
    if distinct.len() < 3 {
        return Err(invalid_mask(MaskDefect::Degenerate {
            vertices: distinct.len(),
        }));
    }

    Ok(ordered)
}

/// Rebuild a canonical polygon from a mask
///
/// The first boundary vertex becomes the pose translation and the local
/// origin; rotation and mirror are reset.
///
/// # Errors
///
/// Returns `InvalidMask` for masks `boundary_loop` rejects
pub fn mask_to_polygon(mask: &Mask, fill: impl Into<String>) -> Result<Polygon> {
    let ordered = boundary_loop(mask)?;
    let origin = ordered.first().copied().unwrap_or(Axial::ORIGIN);
    let local = ordered.iter().map(|&v| v - origin).collect();
    Polygon::new(local, Pose::at(origin), fill)
}
