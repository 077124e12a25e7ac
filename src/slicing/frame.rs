//! Rectangular clipping frame in pixel space
//!
//! Frame width is measured in triangle sides, height in lattice rows, so a
//! frame stays aligned with the lattice at any density.

use geo::Coord;

use crate::io::configuration::{DEFAULT_FRAME_HEIGHT_MULT, DEFAULT_FRAME_WIDTH_MULT};
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::Lattice;

/// Axis-aligned frame: origin in pixels, size in lattice units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in triangle sides
    pub width_mult: f64,
    /// Height in lattice rows
    pub height_mult: f64,
}

/// Lattice rows spanning the same pixel distance as one triangle side
fn rows_per_side() -> f64 {
    2.0 / 3f64.sqrt()
}

impl Default for Frame {
    /// Square frame `DEFAULT_FRAME_HEIGHT_MULT` rows tall at the origin
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width_mult: DEFAULT_FRAME_HEIGHT_MULT / rows_per_side(),
            height_mult: DEFAULT_FRAME_HEIGHT_MULT,
        }
    }
}

impl Frame {
    /// Create a frame from explicit multipliers
    ///
    /// # Errors
    ///
    /// Returns an error if either multiplier is negative or not finite
    pub fn new(x: f64, y: f64, width_mult: f64, height_mult: f64) -> Result<Self> {
        for (name, value) in [("width_mult", width_mult), ("height_mult", height_mult)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"must be a non-negative finite number",
                ));
            }
        }
        Ok(Self {
            x,
            y,
            width_mult,
            height_mult,
        })
    }

    /// Create a frame whose pixel aspect is `ratio.0 : ratio.1`
    ///
    /// Whichever multiplier is missing is derived from the other. With both
    /// missing the width defaults to `DEFAULT_FRAME_WIDTH_MULT`; with both
    /// given the ratio is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a ratio component is not a positive finite number,
    /// or if a given or derived multiplier fails the checks of [`Frame::new`]
    pub fn with_ratio(
        x: f64,
        y: f64,
        ratio: (f64, f64),
        width_mult: Option<f64>,
        height_mult: Option<f64>,
    ) -> Result<Self> {
        let (rw, rh) = ratio;
        for (name, value) in [("ratio_width", rw), ("ratio_height", rh)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"must be a positive finite number",
                ));
            }
        }

        let (width_mult, height_mult) = match (width_mult, height_mult) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w * rows_per_side() * rh / rw),
            (None, Some(h)) => (h / rows_per_side() * rw / rh, h),
            (None, None) => {
                let w = DEFAULT_FRAME_WIDTH_MULT;
                (w, w * rows_per_side() * rh / rw)
            }
        };
        Self::new(x, y, width_mult, height_mult)
    }

    /// Pixel width on the given lattice
    pub fn width_px(&self, lattice: &Lattice) -> f64 {
        self.width_mult * lattice.side()
    }

    /// Pixel height on the given lattice
    pub fn height_px(&self, lattice: &Lattice) -> f64 {
        self.height_mult * lattice.row_height()
    }

    /// Open clockwise-on-screen rectangle ring starting at the top-left corner
    pub fn ring(&self, lattice: &Lattice) -> Vec<Coord<f64>> {
        let (w, h) = (self.width_px(lattice), self.height_px(lattice));
        vec![
            Coord { x: self.x, y: self.y },
            Coord { x: self.x + w, y: self.y },
            Coord { x: self.x + w, y: self.y + h },
            Coord { x: self.x, y: self.y + h },
        ]
    }
}
