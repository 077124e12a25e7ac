//! Closing a user-drawn vertex path into a polygon

use crate::io::error::{Result, invalid_parameter};
use crate::lattice::{Axial, Pose};
use crate::shape::polygon::Polygon;

/// Turn a path of absolute lattice vertices into a polygon
///
/// The first vertex becomes the pose translation and every vertex is stored
/// relative to it. The path is closed implicitly.
///
/// # Errors
///
/// Returns an error if the path has fewer than three vertices
pub fn path_to_polygon(path: &[Axial], fill: impl Into<String>) -> Result<Polygon> {
    let Some(&origin) = path.first() else {
        return Err(invalid_parameter("path", &0, &"empty path"));
    };
    if path.len() < 3 {
        return Err(invalid_parameter(
            "path",
            &path.len(),
            &"a closed path needs at least 3 vertices",
        ));
    }

    let local = path.iter().map(|&v| v - origin).collect();
    Polygon::new(local, Pose::at(origin), fill)
}
