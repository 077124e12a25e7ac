//! Triangle cells, the atomic unit of covered area
//!
//! Each unit rhombus of the lattice holds one `Up` and one `Down` triangle.
//! Both share the horizontal edge `(q, r) → (q + 1, r)`: the `Up` triangle
//! rises one row above it, the `Down` triangle hangs one row below it.

use std::fmt;

use crate::lattice::axial::Axial;

/// Which way a triangle's apex points on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Apex one row below the base
    Down,
    /// Apex one row above the base
    Up,
}

impl Orientation {
    /// Both orientations in scan order
    pub const ALL: [Self; 2] = [Self::Down, Self::Up];
}

/// One lattice triangle addressed by its base-left corner and orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleCell {
    /// Column of the base-left corner
    pub q: i32,
    /// Row of the base-left corner
    pub r: i32,
    /// Apex direction
    pub orientation: Orientation,
}

impl TriangleCell {
    /// Create a cell
    pub const fn new(q: i32, r: i32, orientation: Orientation) -> Self {
        Self { q, r, orientation }
    }

    /// Upward triangle at `(q, r)`
    pub const fn up(q: i32, r: i32) -> Self {
        Self::new(q, r, Orientation::Up)
    }

    /// Downward triangle at `(q, r)`
    pub const fn down(q: i32, r: i32) -> Self {
        Self::new(q, r, Orientation::Down)
    }

    /// Base-left corner
    pub const fn anchor(&self) -> Axial {
        Axial::new(self.q, self.r)
    }

    /// Corner vertices in boundary winding order
    ///
    /// Consecutive corners (wrapping around) are the cell's directed edges.
    /// All cells wind the same way on screen, so an edge shared by two cells
    /// appears once in each direction.
    pub const fn corners(&self) -> [Axial; 3] {
        let (q, r) = (self.q, self.r);
        match self.orientation {
            Orientation::Up => [
                Axial::new(q + 1, r - 1),
                Axial::new(q + 1, r),
                Axial::new(q, r),
            ],
            Orientation::Down => [
                Axial::new(q, r),
                Axial::new(q + 1, r),
                Axial::new(q, r + 1),
            ],
        }
    }

    /// Directed boundary edges `(from, to)`
    pub const fn edges(&self) -> [(Axial, Axial); 3] {
        let [a, b, c] = self.corners();
        [(a, b), (b, c), (c, a)]
    }

    /// The three cells sharing an edge with this one
    pub const fn neighbours(&self) -> [Self; 3] {
        let (q, r) = (self.q, self.r);
        match self.orientation {
            Orientation::Up => [Self::down(q, r), Self::down(q, r - 1), Self::down(q + 1, r - 1)],
            Orientation::Down => [Self::up(q, r), Self::up(q - 1, r + 1), Self::up(q, r + 1)],
        }
    }
}

impl fmt::Display for TriangleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self.orientation {
            Orientation::Up => "up",
            Orientation::Down => "down",
        };
        write!(f, "{},{},{glyph}", self.q, self.r)
    }
}

/// Pixel centroid of a triangle cell for a given side length
///
/// The base point `(x0, y0)` is the pixel position of `(q, r)`; the centroid
/// sits half a side to the right and a third of a row above (`Up`) or below
/// (`Down`) it.
pub fn centroid_pixel(q: i32, r: i32, orientation: Orientation, side: f64) -> (f64, f64) {
    let h = side * 3f64.sqrt() / 2.0;
    let x0 = (f64::from(q) + f64::from(r) / 2.0) * side;
    let y0 = f64::from(r) * h;

    let cy = match orientation {
        Orientation::Up => y0 - h / 3.0,
        Orientation::Down => y0 + h / 3.0,
    };
    (x0 + side / 2.0, cy)
}
