//! Clipping polygons against a frame and styling the visible pieces

/// Memoized slicer
pub mod cache;
/// Boolean intersection
pub mod clip;
/// Clipping frame
pub mod frame;
/// Inward ring offset
pub mod inset;
/// Rounded path strings
pub mod rounding;

pub use cache::{CacheStats, CornerRadius, Slice, SliceStyle, Slicer};
pub use clip::{BooleanClipper, GeoClipper, clip_with_frame};
pub use frame::Frame;
pub use inset::inset_polygon;
pub use rounding::{inset_and_round, rounded_path};
