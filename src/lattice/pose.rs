//! Polygon placement on the lattice
//!
//! A pose maps local vertex offsets to absolute lattice vertices: mirror
//! across the vertical axis when flagged, rotate by the 60° table, then
//! translate.

use crate::lattice::axial::Axial;

/// Translation, rotation step and mirror flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pose {
    /// Translation column
    pub q: i32,
    /// Translation row
    pub r: i32,
    rotation: u8,
    /// Whether local offsets are mirrored before rotating
    pub mirrored: bool,
}

impl Pose {
    /// Create a pose, reducing the rotation into 0..6
    pub const fn new(q: i32, r: i32, rotation: i32, mirrored: bool) -> Self {
        Self {
            q,
            r,
            rotation: rotation.rem_euclid(6) as u8,
            mirrored,
        }
    }

    /// Pure translation
    pub const fn at(origin: Axial) -> Self {
        Self::new(origin.q, origin.r, 0, false)
    }

    /// Rotation step in 0..6, each step 60°
    pub const fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Translation as a lattice vertex
    pub const fn translation(&self) -> Axial {
        Axial::new(self.q, self.r)
    }

    /// Shift the translation
    pub const fn translate(&mut self, dq: i32, dr: i32) {
        self.q += dq;
        self.r += dr;
    }

    /// Add `k` rotation steps; negative `k` rotates the other way
    pub const fn rotate(&mut self, k: i32) {
        self.rotation = (self.rotation as i32 + k.rem_euclid(6)).rem_euclid(6) as u8;
    }

    /// Toggle the mirror flag
    pub const fn mirror(&mut self) {
        self.mirrored = !self.mirrored;
    }

    /// Map a local offset to its absolute vertex
    pub const fn apply(&self, local: Axial) -> Axial {
        let flipped = if self.mirrored { local.mirrored() } else { local };
        let turned = flipped.rotated(self.rotation as i32);
        Axial::new(turned.q + self.q, turned.r + self.r)
    }

    /// Map an absolute vertex back to the local offset that produces it
    pub const fn unapply(&self, absolute: Axial) -> Axial {
        let relative = Axial::new(absolute.q - self.q, absolute.r - self.r);
        let unturned = relative.rotated(-(self.rotation as i32));
        if self.mirrored {
            unturned.mirrored()
        } else {
            unturned
        }
    }
}
