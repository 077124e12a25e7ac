//! Polygons, their fingerprints and the ways to create them

/// Booth least-rotation digest
pub mod fingerprint;
/// Built-in shape templates
pub mod library;
/// User-drawn path conversion
pub mod path;
/// Posed lattice polygons
pub mod polygon;

pub use fingerprint::canonical_digest;
pub use library::ShapeTemplate;
pub use path::path_to_polygon;
pub use polygon::{Polygon, PolygonId, Transform};
