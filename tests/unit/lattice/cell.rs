//! Tests for triangle cell corners, edges, neighbours and centroids

#[cfg(test)]
mod tests {
    use trislice::lattice::{Axial, Orientation, TriangleCell, centroid_pixel};

    // Tests the centroid formula for both orientations at side 10
    // Verified by using h/2 instead of h/3 for the vertical offset
    #[test]
    fn test_centroid_examples() {
        let (x, y) = centroid_pixel(0, 0, Orientation::Up, 10.0);
        assert!((x - 5.0).abs() < 1e-3);
        assert!((y + 2.887).abs() < 1e-3);

        let (x, y) = centroid_pixel(0, 0, Orientation::Down, 10.0);
        assert!((x - 5.0).abs() < 1e-3);
        assert!((y - 2.887).abs() < 1e-3);
    }

    // Tests corner order of both orientations
    #[test]
    fn test_corners() {
        assert_eq!(
            TriangleCell::up(0, 0).corners(),
            [Axial::new(1, -1), Axial::new(1, 0), Axial::new(0, 0)]
        );
        assert_eq!(
            TriangleCell::down(2, 3).corners(),
            [Axial::new(2, 3), Axial::new(3, 3), Axial::new(2, 4)]
        );
    }

    // Tests neighbours share an edge in opposite directions
    // Verified by reversing the Down corner order
    #[test]
    fn test_neighbours_share_reversed_edge() {
        for cell in [TriangleCell::up(1, 1), TriangleCell::down(-2, 4)] {
            for neighbour in cell.neighbours() {
                assert_ne!(neighbour.orientation, cell.orientation);
                assert!(neighbour.neighbours().contains(&cell));

                let shared = cell
                    .edges()
                    .iter()
                    .filter(|&&(a, b)| neighbour.edges().contains(&(b, a)))
                    .count();
                assert_eq!(shared, 1, "{cell} and {neighbour}");
            }
        }
    }

    // Tests every cell edge is a single lattice step
    #[test]
    fn test_edges_are_unit_steps() {
        for cell in [TriangleCell::up(0, 0), TriangleCell::down(0, 0)] {
            for (a, b) in cell.edges() {
                assert!((b - a).direction_index().is_some());
            }
        }
    }

    // Tests ordering puts Down before Up at the same anchor
    #[test]
    fn test_ordering_and_display() {
        assert!(TriangleCell::down(0, 0) < TriangleCell::up(0, 0));
        assert!(TriangleCell::up(0, 0) < TriangleCell::down(0, 1));
        assert_eq!(TriangleCell::up(2, -1).to_string(), "2,-1,up");
        assert_eq!(TriangleCell::down(0, 0).anchor(), Axial::ORIGIN);
    }
}
