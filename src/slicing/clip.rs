//! Polygon-against-frame intersection behind a replaceable clipper

use geo::{BooleanOps, Coord, LineString};

use crate::lattice::Lattice;
use crate::shape::Polygon;
use crate::slicing::frame::Frame;

/// Boolean intersection of two simple rings
///
/// Rings are open (no repeated closing point). The result holds the exterior
/// of every intersection piece, also open; an empty result means the rings do
/// not overlap.
pub trait BooleanClipper {
    /// Intersect `subject` with `clip`
    fn intersect(&self, subject: &[Coord<f64>], clip: &[Coord<f64>]) -> Vec<Vec<Coord<f64>>>;
}

/// Clipper backed by `geo`'s boolean operations
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoClipper;

fn to_geo(ring: &[Coord<f64>]) -> geo::Polygon<f64> {
    geo::Polygon::new(LineString::from(ring.to_vec()), vec![])
}

impl BooleanClipper for GeoClipper {
    fn intersect(&self, subject: &[Coord<f64>], clip: &[Coord<f64>]) -> Vec<Vec<Coord<f64>>> {
        if subject.len() < 3 || clip.len() < 3 {
            return Vec::new();
        }
        let pieces = to_geo(subject).intersection(&to_geo(clip));
        pieces
            .0
            .iter()
            .filter_map(|piece| {
                let mut ring = piece.exterior().0.clone();
                if ring.len() > 1 && ring.first() == ring.last() {
                    ring.pop();
                }
                (ring.len() >= 3).then_some(ring)
            })
            .collect()
    }
}

/// Clip a polygon's pixel ring against a frame
pub fn clip_with_frame<C: BooleanClipper>(
    clipper: &C,
    polygon: &Polygon,
    frame: &Frame,
    lattice: &Lattice,
) -> Vec<Vec<Coord<f64>>> {
    clipper.intersect(&polygon.pixel_ring(lattice), &frame.ring(lattice))
}
