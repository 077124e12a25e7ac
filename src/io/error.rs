//! Error types for lattice, mask and generation operations

use std::fmt;

use crate::lattice::Axial;

/// Reason a mask could not be turned into a boundary loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskDefect {
    /// The mask contains no cells
    Empty,

    /// Every edge cancelled against its reverse
    NoBoundary,

    /// The boundary walk closed with fewer than three vertices
    Degenerate {
        /// Number of vertices collected before the loop closed
        vertices: usize,
    },

    /// A boundary vertex has no outgoing edge
    DanglingEdge {
        /// Vertex where the walk got stuck
        at: Axial,
    },

    /// Boundary edges remain after the outer loop closed
    ///
    /// The mask has a hole or consists of several disconnected regions.
    Unreachable {
        /// Number of boundary edges the walk never visited
        edges: usize,
    },
}

impl fmt::Display for MaskDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty mask"),
            Self::NoBoundary => write!(f, "mask reduced to zero edges"),
            Self::Degenerate { vertices } => {
                write!(f, "degenerate polygon ({vertices} vertices, need at least 3)")
            }
            Self::DanglingEdge { at } => write!(f, "dangling edge at {},{}", at.q, at.r),
            Self::Unreachable { edges } => write!(
                f,
                "{edges} boundary edges not on the outer loop (hole or disconnected region)"
            ),
        }
    }
}

/// Main error type for all engine operations
#[derive(Debug)]
pub enum EngineError {
    /// Mask is empty, holed, disconnected or degenerate
    InvalidMask {
        /// What is wrong with the mask
        defect: MaskDefect,
    },

    /// Request needs more triangles than are available
    InsufficientCapacity {
        /// Operation that was refused
        operation: &'static str,
        /// Number of triangles requested
        requested: usize,
        /// Number of triangles available
        available: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Randomized generation gave up after its retry budget
    GenerationExhausted {
        /// Number of attempts made
        attempts: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMask { defect } => write!(f, "Invalid mask: {defect}"),
            Self::InsufficientCapacity {
                operation,
                requested,
                available,
            } => write!(
                f,
                "Insufficient capacity for {operation}: requested {requested} triangles, {available} available"
            ),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GenerationExhausted { attempts } => {
                write!(f, "Generation gave up after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid mask error
pub const fn invalid_mask(defect: MaskDefect) -> EngineError {
    EngineError::InvalidMask { defect }
}
