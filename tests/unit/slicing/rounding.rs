//! Tests for rounded path generation

#[cfg(test)]
mod tests {
    use geo::Coord;
    use trislice::slicing::{inset_and_round, rounded_path};

    fn square() -> Vec<Coord<f64>> {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect()
    }

    // Tests zero radius gives a straight closed path
    // Verified by always emitting arc commands
    #[test]
    fn test_straight_path() {
        assert_eq!(
            rounded_path(&square(), 0.0),
            "M 0.000,0.000 L 10.000,0.000 L 10.000,10.000 L 0.000,10.000 Z"
        );
    }

    // Tests zero pad and zero radius reproduce the ring as a polyline
    #[test]
    fn test_identity_inset_and_round() {
        assert_eq!(inset_and_round(&square(), 0.0, 0.0), rounded_path(&square(), 0.0));
    }

    // Tests right-angle corners get arcs of the requested radius
    // Verified by flipping the sweep flag condition
    #[test]
    fn test_rounded_corners() {
        let path = rounded_path(&square(), 2.0);

        assert!(path.starts_with("M 0.000,2.000 A 2.000,2.000 0 0,1 2.000,0.000"), "{path}");
        assert_eq!(path.matches(" A ").count(), 4);
        assert!(path.ends_with(" Z"));
    }

    // Tests the full rounded path of a square, segment by segment
    #[test]
    fn test_rounded_square_path() {
        assert_eq!(
            rounded_path(&square(), 2.0),
            "M 0.000,2.000 A 2.000,2.000 0 0,1 2.000,0.000 \
             L 8.000,0.000 A 2.000,2.000 0 0,1 10.000,2.000 \
             L 10.000,8.000 A 2.000,2.000 0 0,1 8.000,10.000 \
             L 2.000,10.000 A 2.000,2.000 0 0,1 0.000,8.000 Z"
        );
    }

    // Tests the tangent distance is clamped to half an edge
    #[test]
    fn test_radius_clamped() {
        let path = rounded_path(&square(), 100.0);
        assert!(path.starts_with("M 0.000,5.000 A 5.000,5.000 0 0,1 5.000,0.000"), "{path}");
    }

    // Tests straight corners are not rounded
    #[test]
    fn test_straight_corner() {
        let points: Vec<Coord<f64>> = [(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect();
        let path = rounded_path(&points, 1.0);

        assert!(path.contains(" L 5.000,0.000"));
        assert_eq!(path.matches(" A ").count(), 4);
    }

    // Tests empty input
    #[test]
    fn test_empty() {
        assert_eq!(rounded_path(&[], 3.0), "");
    }
}
