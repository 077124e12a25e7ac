//! Triangle masks and conversion between masks and polygons

/// Boundary reconstruction from a mask
pub mod boundary;
/// Centroid-based polygon rasterization
pub mod rasterize;
/// Cell set type
pub mod region;

pub use boundary::mask_to_polygon;
pub use rasterize::point_in_ring;
pub use region::Mask;
