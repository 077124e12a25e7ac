//! Memoized per-polygon slicing
//!
//! Slices are cached by polygon id and tagged with a stamp of every input that
//! affects them. A lookup whose stamp differs recomputes and overwrites the
//! entry; lattice or style changes clear everything.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use geo::Coord;
use tracing::debug;

use crate::io::configuration::DEFAULT_PAD_RATIO;
use crate::lattice::{Lattice, Pose};
use crate::shape::{Polygon, PolygonId};
use crate::slicing::clip::{BooleanClipper, GeoClipper, clip_with_frame};
use crate::slicing::frame::Frame;
use crate::slicing::rounding::inset_and_round;

/// Corner radius policy
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerRadius {
    /// Half the pad
    Auto,
    /// Fixed radius in pixels
    Fixed(f64),
}

/// Default slice appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceStyle {
    /// Inset as a fraction of one triangle side
    pub pad_ratio: f64,
    /// Corner rounding
    pub radius: CornerRadius,
}

impl Default for SliceStyle {
    fn default() -> Self {
        Self {
            pad_ratio: DEFAULT_PAD_RATIO,
            radius: CornerRadius::Auto,
        }
    }
}

impl SliceStyle {
    /// Inset in pixels on the given lattice
    pub fn pad_px(&self, lattice: &Lattice) -> f64 {
        lattice.side() * self.pad_ratio
    }

    /// Corner radius in pixels on the given lattice
    pub fn radius_px(&self, lattice: &Lattice) -> f64 {
        match self.radius {
            CornerRadius::Auto => self.pad_px(lattice) / 2.0,
            CornerRadius::Fixed(px) => px,
        }
    }
}

/// One visible piece of a polygon inside a frame
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Clipped ring in pixels, before insetting
    pub verts: Vec<Coord<f64>>,
    /// Fill copied from the polygon
    pub fill: String,
    /// Inset, rounded, closed path string
    pub path: String,
}

/// Inputs a cached slice list was computed from
#[derive(Clone, Debug, PartialEq, Eq)]
struct Stamp {
    frame: [u64; 4],
    pad: u64,
    radius: u64,
    pose: Pose,
    fill: String,
}

impl Stamp {
    fn new(polygon: &Polygon, frame: &Frame, pad: f64, radius: f64) -> Self {
        Self {
            frame: [
                frame.x.to_bits(),
                frame.y.to_bits(),
                frame.width_mult.to_bits(),
                frame.height_mult.to_bits(),
            ],
            pad: pad.to_bits(),
            radius: radius.to_bits(),
            pose: polygon.pose(),
            fill: polygon.fill().to_owned(),
        }
    }
}

struct CacheEntry {
    stamp: Stamp,
    slices: Vec<Slice>,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Frame slicer with a per-polygon memo
pub struct Slicer<C: BooleanClipper = GeoClipper> {
    lattice: Lattice,
    style: SliceStyle,
    clipper: C,
    entries: HashMap<PolygonId, CacheEntry>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl Default for Slicer {
    fn default() -> Self {
        Self::new(Lattice::default())
    }
}

impl Slicer {
    /// Create a slicer using the `geo` clipper
    pub fn new(lattice: Lattice) -> Self {
        Self::with_clipper(lattice, GeoClipper)
    }
}

impl<C: BooleanClipper> Slicer<C> {
    /// Create a slicer with a custom clipper
    pub fn with_clipper(lattice: Lattice, clipper: C) -> Self {
        Self {
            lattice,
            style: SliceStyle::default(),
            clipper,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Current lattice
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Current default style
    pub const fn style(&self) -> &SliceStyle {
        &self.style
    }

    /// Number of cached polygons
    pub fn cached(&self) -> usize {
        self.entries.len()
    }

    /// Switch lattice; any change clears the cache
    pub fn set_lattice(&mut self, lattice: Lattice) {
        if lattice != self.lattice {
            self.lattice = lattice;
            self.invalidate_all();
        }
    }

    /// Switch default style; any change clears the cache
    pub fn set_style(&mut self, style: SliceStyle) {
        if style != self.style {
            self.style = style;
            self.invalidate_all();
        }
    }

    /// Drop every cached entry
    pub fn invalidate_all(&mut self) {
        debug!(entries = self.entries.len(), "clearing slice cache");
        self.entries.clear();
    }

    /// Drop the entry of one polygon, e.g. after it was deleted
    pub fn forget(&mut self, id: PolygonId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Slices of `polygon` inside `frame` with the default style
    pub fn slices(&mut self, polygon: &Polygon, frame: &Frame) -> &[Slice] {
        let pad = self.style.pad_px(&self.lattice);
        let radius = self.style.radius_px(&self.lattice);
        self.get_slices(polygon, frame, pad, radius)
    }

    /// Slices of `polygon` inside `frame`, inset by `pad` and rounded by `radius`
    ///
    /// An empty list means the polygon lies outside the frame.
    pub fn get_slices(&mut self, polygon: &Polygon, frame: &Frame, pad: f64, radius: f64) -> &[Slice] {
        let stamp = Stamp::new(polygon, frame, pad, radius);

        match self.entries.entry(polygon.id()) {
            Entry::Occupied(entry) if entry.get().stamp == stamp => {
                self.stats.hits += 1;
                debug!(polygon = %polygon.id(), "slice cache hit");
                &entry.into_mut().slices
            }
            entry => {
                self.stats.misses += 1;
                debug!(polygon = %polygon.id(), "slice cache miss");
                let slices = compute_slices(&self.clipper, &self.lattice, polygon, frame, pad, radius);
                let fresh = CacheEntry { stamp, slices };
                let stored = match entry {
                    Entry::Occupied(mut occupied) => {
                        occupied.insert(fresh);
                        occupied.into_mut()
                    }
                    Entry::Vacant(vacant) => vacant.insert(fresh),
                };
                &stored.slices
            }
        }
    }
}

fn compute_slices<C: BooleanClipper>(
    clipper: &C,
    lattice: &Lattice,
    polygon: &Polygon,
    frame: &Frame,
    pad: f64,
    radius: f64,
) -> Vec<Slice> {
    clip_with_frame(clipper, polygon, frame, lattice)
        .into_iter()
        .map(|ring| {
            let path = inset_and_round(&ring, pad, radius);
            Slice {
                verts: ring,
                fill: polygon.fill().to_owned(),
                path,
            }
        })
        .collect()
}
