//! Inward offset of a pixel ring
//!
//! Each edge is shifted inward by the pad and consecutive shifted edges are
//! intersected. Parallel neighbours have no intersection; those vertices are
//! pushed along the incoming edge's normal instead, so insetting always
//! produces a ring.

use geo::Coord;
use tracing::{debug, warn};

use crate::io::configuration::{MIN_STYLE_PX, PARALLEL_EPSILON};

/// Each vertex with its predecessor and successor, wrapping around the ring
pub(crate) fn corner_triples(
    ring: &[Coord<f64>],
) -> impl Iterator<Item = (Coord<f64>, Coord<f64>, Coord<f64>)> + '_ {
    let prev = ring.iter().cycle().skip(ring.len().saturating_sub(1));
    let next = ring.iter().cycle().skip(1);
    prev.zip(ring).zip(next).map(|((&a, &b), &c)| (a, b, c))
}

/// Twice the signed area; positive for counter-clockwise in Y-up terms
pub fn signed_area(ring: &[Coord<f64>]) -> f64 {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
        .sum()
}

fn inward_normal(from: Coord<f64>, to: Coord<f64>) -> Option<Coord<f64>> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);
    (len > 0.0).then(|| Coord {
        x: -dy / len,
        y: dx / len,
    })
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x.mul_add(b.y, -(a.y * b.x))
}

/// Offset every edge of `ring` inward by `pad` pixels
///
/// Pads at or below `MIN_STYLE_PX` return the ring unchanged. The output
/// always winds with positive signed area and never repeats a point
/// consecutively.
pub fn inset_polygon(ring: &[Coord<f64>], pad: f64) -> Vec<Coord<f64>> {
    if ring.len() < 3 || pad <= MIN_STYLE_PX {
        return ring.to_vec();
    }

    let mut points = ring.to_vec();
    if signed_area(&points) < 0.0 {
        points.reverse();
    }

    let mut out: Vec<Coord<f64>> = Vec::with_capacity(points.len());
    for (prev, curr, next) in corner_triples(&points) {
        let (Some(n1), Some(n2)) = (inward_normal(prev, curr), inward_normal(curr, next)) else {
            debug!(x = curr.x, y = curr.y, "zero-length edge while insetting");
            continue;
        };

        // Shifted incoming line: p1 + t * d1; shifted outgoing line: p2 + s * d2
        let p1 = prev + n1 * pad;
        let p2 = curr + n2 * pad;
        let d1 = curr - prev;
        let d2 = next - curr;
        let denom = cross(d1, d2);

        let point = if denom.abs() < PARALLEL_EPSILON {
            let same_direction = d1.x.mul_add(d2.x, d1.y * d2.y) > 0.0;
            if same_direction {
                debug!(x = curr.x, y = curr.y, "collinear vertex, shifting along normal");
            } else {
                warn!(x = curr.x, y = curr.y, "antiparallel edges, shifting along normal");
            }
            curr + n1 * pad
        } else {
            let t = cross(p2 - p1, d2) / denom;
            p1 + d1 * t
        };

        if out.last() != Some(&point) {
            out.push(point);
        }
    }

    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}
