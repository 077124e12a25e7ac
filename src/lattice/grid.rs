//! Density-dependent lattice metrics and pixel conversion
//!
//! The lattice is drawn at a density that scales the triangle side: denser
//! lattices have smaller triangles and more rows and columns. Pixel space is
//! Y-down with the lattice origin at pixel `(0, 0)`.

use geo::Coord;

use crate::io::configuration::{BASE_COLS, BASE_ROWS, BASE_SIDE, DEFAULT_DENSITY};
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::axial::Axial;
use crate::lattice::bounds::LatticeBounds;

/// Lattice drawn at a particular density
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
    density: f64,
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

impl Lattice {
    /// Create a lattice at the given density
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not a positive finite number
    pub fn new(density: f64) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(invalid_parameter(
                "density",
                &density,
                &"must be a positive finite number",
            ));
        }
        Ok(Self { density })
    }

    /// Lattice whose side is exactly one pixel
    pub const fn unit() -> Self {
        Self { density: BASE_SIDE }
    }

    /// Current density
    pub const fn density(&self) -> f64 {
        self.density
    }

    /// Triangle side length in pixels
    pub fn side(&self) -> f64 {
        BASE_SIDE / self.density
    }

    /// Row height in pixels
    pub fn row_height(&self) -> f64 {
        self.side() * 3f64.sqrt() / 2.0
    }

    /// Vertex bounds of the drawable lattice
    pub fn bounds(&self) -> LatticeBounds {
        let max_q = (BASE_COLS * self.density).round() as i32 - 1;
        let max_r = (BASE_ROWS * self.density).round() as i32 - 1;
        LatticeBounds::new(Axial::ORIGIN, Axial::new(max_q.max(0), max_r.max(0)))
    }

    /// Pixel position of a lattice vertex
    pub fn to_pixel(&self, vertex: Axial) -> Coord<f64> {
        let q = f64::from(vertex.q);
        let r = f64::from(vertex.r);
        Coord {
            x: (q + r / 2.0) * self.side(),
            y: r * self.row_height(),
        }
    }

    /// Fractional axial coordinates of a pixel position
    pub fn from_pixel(&self, point: Coord<f64>) -> (f64, f64) {
        let side = self.side();
        let q = (point.x - point.y / 3f64.sqrt()) / side;
        let r = point.y * 2.0 / (3f64.sqrt() * side);
        (q, r)
    }

    /// Snap a pixel drag delta to the nearest lattice translation
    pub fn snap_delta(&self, dx: f64, dy: f64) -> Axial {
        let (q, r) = self.from_pixel(Coord { x: dx, y: dy });
        Axial::new(q.round() as i32, r.round() as i32)
    }
}
