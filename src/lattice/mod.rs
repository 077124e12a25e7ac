//! Lattice coordinates, cells and placement
//!
//! This module contains the integer algebra everything else builds on:
//! - Axial vertices and the exact 60° rotation table
//! - Triangle cells, their edges and neighbours
//! - Poses (translation, rotation, mirror)
//! - Density-dependent pixel metrics and finite bounds

/// Axial vertex coordinates
pub mod axial;
/// Finite lattice extent and dense cell indexing
pub mod bounds;
/// Triangle cells and centroids
pub mod cell;
/// Density, side length and pixel conversion
pub mod grid;
/// Polygon placement
pub mod pose;

pub use axial::Axial;
pub use bounds::LatticeBounds;
pub use cell::{Orientation, TriangleCell, centroid_pixel};
pub use grid::Lattice;
pub use pose::Pose;
