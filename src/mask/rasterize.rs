//! Polygon to triangle-mask rasterization
//!
//! A cell is covered exactly when its centroid is strictly inside the
//! polygon. Lattice polygons never pass through a centroid, so the result has
//! no partial-coverage cases. Coverage scales with the lattice, so any
//! density gives the same mask.

use geo::Coord;

use crate::io::configuration::CROSSING_EPSILON;
use crate::lattice::{Axial, Lattice, Orientation, TriangleCell, centroid_pixel};
use crate::mask::region::Mask;

/// Crossing-number point-in-polygon test over a closed pixel loop
///
/// The loop must repeat its first point at the end. Points within
/// `CROSSING_EPSILON` to the left of an edge do not toggle the parity.
pub fn point_in_ring(ring: &[Coord<f64>], point: Coord<f64>) -> bool {
    let mut inside = false;
    for (&a, &b) in ring.iter().zip(ring.iter().skip(1)) {
        let crosses = (a.y <= point.y && b.y > point.y) || (a.y > point.y && b.y <= point.y);
        if crosses {
            let t = (point.y - a.y) / (b.y - a.y);
            if point.x < t.mul_add(b.x - a.x, a.x) - CROSSING_EPSILON {
                inside = !inside;
            }
        }
    }
    inside
}

/// Rasterize a closed absolute vertex loop into the cells it covers
pub fn rasterize_loop(closed_loop: &[Axial], lattice: &Lattice) -> Mask {
    let ring: Vec<Coord<f64>> = closed_loop.iter().map(|&v| lattice.to_pixel(v)).collect();
    if ring.len() < 4 {
        return Mask::new();
    }

    // Axial box around the pixel box, one cell of margin on every side
    let (mut min_q, mut max_q) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_r, mut max_r) = (f64::INFINITY, f64::NEG_INFINITY);
    for &point in &ring {
        let (q, r) = lattice.from_pixel(point);
        min_q = min_q.min(q);
        max_q = max_q.max(q);
        min_r = min_r.min(r);
        max_r = max_r.max(r);
    }
    let q_range = (min_q.floor() as i32 - 1)..=(max_q.ceil() as i32 + 1);
    let r_range = (min_r.floor() as i32 - 1)..=(max_r.ceil() as i32 + 1);

    let side = lattice.side();
    let mut mask = Mask::new();
    for q in q_range {
        for r in r_range.clone() {
            for orientation in Orientation::ALL {
                let (x, y) = centroid_pixel(q, r, orientation, side);
                if point_in_ring(&ring, Coord { x, y }) {
                    mask.insert(TriangleCell::new(q, r, orientation));
                }
            }
        }
    }
    mask
}
