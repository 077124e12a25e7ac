//! Built-in shape templates

use crate::io::error::Result;
use crate::lattice::{Axial, Pose};
use crate::shape::polygon::Polygon;

/// A named shape that instantiates fresh polygons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeTemplate {
    /// Single lattice triangle
    Triangle,
    /// Six-vertex chevron
    Chevron,
}

impl ShapeTemplate {
    /// Every template in display order
    pub const ALL: [Self; 2] = [Self::Triangle, Self::Chevron];

    /// Short identifier
    pub const fn key(self) -> &'static str {
        match self {
            Self::Triangle => "tri",
            Self::Chevron => "chevron",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Chevron => "Chevron",
        }
    }

    /// Local vertex loop
    pub fn vertices(self) -> Vec<Axial> {
        let pairs: &[(i32, i32)] = match self {
            Self::Triangle => &[(0, 0), (1, -1), (1, 0)],
            Self::Chevron => &[(0, 0), (4, -4), (4, -2), (3, -1), (3, -2), (0, 1)],
        };
        pairs.iter().copied().map(Axial::from).collect()
    }

    /// Create a new polygon from this template at the origin
    ///
    /// # Errors
    ///
    /// Propagates polygon construction errors
    pub fn instantiate(self, fill: impl Into<String>) -> Result<Polygon> {
        Polygon::new(self.vertices(), Pose::default(), fill)
    }

    /// Look up a template by its identifier
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}
