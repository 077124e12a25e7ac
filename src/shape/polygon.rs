//! Lattice polygons: local vertex loops placed by a pose
//!
//! A polygon stores its vertices as offsets in a local frame and a pose that
//! places them on the lattice. Transforms only touch the pose, so the
//! canonical digest computed at construction stays valid for the polygon's
//! whole life.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use geo::Coord;

use crate::io::configuration::DEFAULT_FILL;
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::{Axial, Lattice, LatticeBounds, Pose};
use crate::mask::Mask;
use crate::mask::rasterize::rasterize_loop;
use crate::shape::fingerprint::canonical_digest;

static NEXT_POLYGON_ID: AtomicU64 = AtomicU64::new(1);

/// Stable polygon identity, assigned monotonically and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(u64);

impl PolygonId {
    fn next() -> Self {
        Self(NEXT_POLYGON_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single pose edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Shift by a lattice delta
    Translate {
        /// Column delta
        dq: i32,
        /// Row delta
        dr: i32,
    },
    /// Rotate by this many 60° steps
    Rotate(i32),
    /// Toggle the mirror flag
    Mirror,
}

/// Polygon on the triangular lattice
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    id: PolygonId,
    verts: Vec<Axial>,
    pose: Pose,
    fill: String,
    canon: String,
}

impl Polygon {
    /// Create a polygon from local vertices
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given
    pub fn new(verts: Vec<Axial>, pose: Pose, fill: impl Into<String>) -> Result<Self> {
        if verts.len() < 3 {
            return Err(invalid_parameter(
                "verts",
                &verts.len(),
                &"a polygon needs at least 3 vertices",
            ));
        }
        let canon = canonical_digest(&verts);
        Ok(Self {
            id: PolygonId::next(),
            verts,
            pose,
            fill: fill.into(),
            canon,
        })
    }

    /// Create a polygon from `(q, r)` pairs at the origin with the default fill
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Result<Self> {
        let verts = pairs.iter().copied().map(Axial::from).collect();
        Self::new(verts, Pose::default(), DEFAULT_FILL)
    }

    /// Stable identity
    pub const fn id(&self) -> PolygonId {
        self.id
    }

    /// Local vertex offsets
    pub fn verts(&self) -> &[Axial] {
        &self.verts
    }

    /// Current placement
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    /// Replace the placement
    pub const fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Display attribute
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Replace the display attribute
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = fill.into();
    }

    /// Canonical digest of the local shape
    pub fn canon(&self) -> &str {
        &self.canon
    }

    /// Shift the pose translation
    pub const fn translate(&mut self, dq: i32, dr: i32) {
        self.pose.translate(dq, dr);
    }

    /// Rotate by `k` steps of 60°
    pub const fn rotate(&mut self, k: i32) {
        self.pose.rotate(k);
    }

    /// Toggle the mirror flag
    pub const fn mirror(&mut self) {
        self.pose.mirror();
    }

    /// Apply a transform, keeping the result inside `bounds` when given
    ///
    /// The new pose is computed and clamped before it replaces the current
    /// one, so the polygon never ends up half-transformed.
    pub fn apply_transform(&mut self, transform: Transform, bounds: Option<&LatticeBounds>) -> Pose {
        let mut pose = self.pose;
        match transform {
            Transform::Translate { dq, dr } => pose.translate(dq, dr),
            Transform::Rotate(k) => pose.rotate(k),
            Transform::Mirror => pose.mirror(),
        }

        if let Some(bounds) = bounds {
            let placed: Vec<Axial> = self.verts.iter().map(|&v| pose.apply(v)).collect();
            let (dq, dr) = bounds.clamp_delta(&placed, 0, 0);
            pose.translate(dq, dr);
        }

        self.pose = pose;
        pose
    }

    /// Closed absolute vertex loop; the first vertex is repeated at the end
    pub fn vertices(&self) -> Vec<Axial> {
        let mut placed: Vec<Axial> = self.verts.iter().map(|&v| self.pose.apply(v)).collect();
        if let Some(&first) = placed.first() {
            placed.push(first);
        }
        placed
    }

    /// Open pixel ring of the absolute loop
    pub fn pixel_ring(&self, lattice: &Lattice) -> Vec<Coord<f64>> {
        self.verts
            .iter()
            .map(|&v| lattice.to_pixel(self.pose.apply(v)))
            .collect()
    }

    /// Triangles whose centroid lies strictly inside the polygon
    pub fn tri_mask(&self) -> Mask {
        rasterize_loop(&self.vertices(), &Lattice::unit())
    }

    /// Re-express the local vertices under another rotation and mirror
    ///
    /// The absolute loop and the id are preserved; the translation moves to
    /// the first absolute vertex and the digest is recomputed for the new
    /// local vertices.
    pub fn reframe(&mut self, rotation: i32, mirrored: bool) {
        let placed: Vec<Axial> = self.verts.iter().map(|&v| self.pose.apply(v)).collect();
        let origin = placed.first().copied().unwrap_or(Axial::ORIGIN);
        let pose = Pose::new(origin.q, origin.r, rotation, mirrored);

        self.verts = placed.iter().map(|&v| pose.unapply(v)).collect();
        self.pose = pose;
        self.canon = canonical_digest(&self.verts);
    }
}
