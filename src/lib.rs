//! Polygon engine for a triangular lattice
//!
//! Polygons live on an axial vertex lattice as local vertex loops placed by a
//! pose. They rasterize into sets of unit triangles, rebuild from such sets,
//! split into random contiguous pieces, and clip against a rectangular frame
//! into inset, rounded path strings ready for drawing.

#![forbid(unsafe_code)]

/// Random blobs and polygon splitting
pub mod generation;
/// Error handling and configuration constants
pub mod io;
/// Axial coordinates, triangle cells, poses and pixel metrics
pub mod lattice;
/// Triangle masks, rasterization and boundary reconstruction
pub mod mask;
/// Polygons, canonical digests and shape sources
pub mod shape;
/// Frame clipping, insetting and corner rounding
pub mod slicing;

pub use io::error::{EngineError, MaskDefect, Result};
