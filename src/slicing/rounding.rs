//! Rounded-corner path strings for pixel rings

use geo::Coord;

use crate::io::configuration::{MIN_STYLE_PX, PATH_PRECISION, STRAIGHT_ANGLE_EPSILON};
use crate::slicing::inset::{corner_triples, inset_polygon};

fn fmt_point(p: Coord<f64>) -> String {
    format!("{:.prec$},{:.prec$}", p.x, p.y, prec = PATH_PRECISION)
}

fn fmt_num(v: f64) -> String {
    format!("{v:.prec$}", prec = PATH_PRECISION)
}

const fn move_or_line(first: bool) -> &'static str {
    if first { "M" } else { " L" }
}

fn straight_path(points: &[Coord<f64>]) -> String {
    let mut path: String = points
        .iter()
        .enumerate()
        .map(|(i, &p)| format!("{} {}", move_or_line(i == 0), fmt_point(p)))
        .collect();
    path.push_str(" Z");
    path
}

/// Path segment for one corner: the line into it and, if it bends, the arc
fn corner_segment(
    cmd: &str,
    (p0, p1, p2): (Coord<f64>, Coord<f64>, Coord<f64>),
    radius: f64,
) -> String {
    let v1 = p0 - p1;
    let v2 = p2 - p1;
    let (len1, len2) = (v1.x.hypot(v1.y), v2.x.hypot(v2.y));
    if len1 == 0.0 || len2 == 0.0 {
        return format!("{cmd} {}", fmt_point(p1));
    }

    let cos = (v1.x.mul_add(v2.x, v1.y * v2.y) / (len1 * len2)).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if angle < STRAIGHT_ANGLE_EPSILON || (std::f64::consts::PI - angle) < STRAIGHT_ANGLE_EPSILON {
        return format!("{cmd} {}", fmt_point(p1));
    }

    let half_tan = (angle / 2.0).tan();
    let tangent = (radius / half_tan).min(len1 / 2.0).min(len2 / 2.0);
    let effective = tangent * half_tan;

    let start = p1 + v1 * (tangent / len1);
    let end = p1 + v2 * (tangent / len2);
    let sweep = u8::from(v1.x.mul_add(v2.y, -(v1.y * v2.x)) <= 0.0);

    if tangent > MIN_STYLE_PX {
        let r = fmt_num(effective);
        format!("{cmd} {} A {r},{r} 0 0,{sweep} {}", fmt_point(start), fmt_point(end))
    } else {
        format!("{cmd} {} L {}", fmt_point(start), fmt_point(p1))
    }
}

/// Closed path over `points` with every corner rounded by `radius`
///
/// The tangent distance at each corner is `radius / tan(angle / 2)`, clamped
/// to half of either adjacent edge so neighbouring arcs never overlap. Nearly
/// straight or fully folded corners are drawn as a plain line to the vertex.
/// Radii at or below `MIN_STYLE_PX` give a straight-edged path.
pub fn rounded_path(points: &[Coord<f64>], radius: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    if radius <= MIN_STYLE_PX || points.len() < 3 {
        return straight_path(points);
    }

    let mut path: String = corner_triples(points)
        .enumerate()
        .map(|(i, corner)| corner_segment(move_or_line(i == 0), corner, radius))
        .collect();
    path.push_str(" Z");
    path
}

/// Inset a ring by `pad` and round the result by `radius`
pub fn inset_and_round(ring: &[Coord<f64>], pad: f64, radius: f64) -> String {
    rounded_path(&inset_polygon(ring, pad), radius)
}
