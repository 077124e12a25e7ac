//! Randomized polygon generation: splitting and blob growth

/// Random blob polygons
pub mod blob;
/// Bitset of taken lattice cells
pub mod occupancy;
/// Multi-seed polygon splitting
pub mod partition;

pub use blob::{BlobConfig, make_random_blob};
pub use occupancy::Occupancy;
pub use partition::{grow_regions, split_polygon};
