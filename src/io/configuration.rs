//! Engine constants and runtime configuration defaults

// Lattice metrics
/// Triangle side length in pixels at density 1.0
pub const BASE_SIDE: f64 = 50.0;
/// Lattice rows at density 1.0
pub const BASE_ROWS: f64 = 10.0;
/// Lattice columns at density 1.0
pub const BASE_COLS: f64 = 10.0;
/// Density used when none is given
pub const DEFAULT_DENSITY: f64 = 1.5;

// Point-in-polygon tests never count centroids that graze an edge
/// Horizontal tolerance for the crossing-number test
pub const CROSSING_EPSILON: f64 = 1e-9;

// Slicing
/// Default inset as a fraction of one triangle side
pub const DEFAULT_PAD_RATIO: f64 = 0.10;
/// Pads and radii below this many pixels are treated as zero
pub const MIN_STYLE_PX: f64 = 0.01;
/// Corners this close to 0 or 180 degrees are not rounded
pub const STRAIGHT_ANGLE_EPSILON: f64 = 1e-6;
/// Cross products below this magnitude mean parallel offset lines
pub const PARALLEL_EPSILON: f64 = 1e-9;
/// Decimal places written into path strings
pub const PATH_PRECISION: usize = 3;

// Frame
/// Default frame height in lattice rows
pub const DEFAULT_FRAME_HEIGHT_MULT: f64 = 7.0;
/// Default frame width when neither multiplier is given
pub const DEFAULT_FRAME_WIDTH_MULT: f64 = 4.0;

// Blob generation
/// Probability of picking the most enclosed frontier cell
pub const DEFAULT_COMPACTNESS: f64 = 0.9;
/// Default blob size in triangles
pub const DEFAULT_BLOB_SIZE: usize = 12;
// Bounds the restart loop when growth gets stuck
/// Maximum blob generation attempts before giving up
pub const MAX_BLOB_ATTEMPTS: usize = 64;

/// Fill used when the caller has no preference
pub const DEFAULT_FILL: &str = "hsl(0 0% 80%)";
