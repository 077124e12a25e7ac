//! Tests for point-in-ring and centroid rasterization

#[cfg(test)]
mod tests {
    use geo::Coord;
    use trislice::lattice::{Axial, Lattice, TriangleCell};
    use trislice::mask::Mask;
    use trislice::mask::point_in_ring;
    use trislice::mask::rasterize::rasterize_loop;

    fn closed(pairs: &[(i32, i32)]) -> Vec<Axial> {
        let mut verts: Vec<Axial> = pairs.iter().copied().map(Axial::from).collect();
        verts.push(verts[0]);
        verts
    }

    // Tests crossing-number parity on a square
    // Verified by toggling on every crossing regardless of side
    #[test]
    fn test_point_in_ring() {
        let ring = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 4.0 },
            Coord { x: 0.0, y: 0.0 },
        ];
        assert!(point_in_ring(&ring, Coord { x: 2.0, y: 2.0 }));
        assert!(!point_in_ring(&ring, Coord { x: 5.0, y: 2.0 }));
        assert!(!point_in_ring(&ring, Coord { x: -1.0, y: 2.0 }));
        assert!(!point_in_ring(&ring, Coord { x: 2.0, y: 6.0 }));
    }

    // Tests a single lattice triangle covers exactly its own cell
    #[test]
    fn test_single_triangle() {
        let mask = rasterize_loop(&closed(&[(0, 0), (1, -1), (1, 0)]), &Lattice::unit());
        let expected: Mask = [TriangleCell::up(0, 0)].into_iter().collect();
        assert_eq!(mask, expected);
    }

    // Tests a unit rhombus covers its two triangles
    // Verified by testing centroids with <= instead of strict crossing
    #[test]
    fn test_rhombus() {
        let mask = rasterize_loop(&closed(&[(0, 0), (1, 0), (1, 1), (0, 1)]), &Lattice::unit());
        let expected: Mask = [TriangleCell::down(0, 0), TriangleCell::up(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(mask, expected);
    }

    // Tests coverage does not depend on density
    #[test]
    fn test_density_independent() {
        let hexagon = closed(&[(2, 0), (2, -2), (0, -2), (-2, 0), (-2, 2), (0, 2)]);
        let unit = rasterize_loop(&hexagon, &Lattice::unit());
        assert_eq!(unit.len(), 24);

        for density in [0.7, 1.5, 3.0] {
            let lattice = Lattice::new(density).unwrap();
            assert_eq!(rasterize_loop(&hexagon, &lattice), unit);
        }
    }

    // Tests too-short loops rasterize to nothing
    #[test]
    fn test_degenerate_loop() {
        assert!(rasterize_loop(&[], &Lattice::unit()).is_empty());
        assert!(rasterize_loop(&closed(&[(0, 0), (1, 0)]), &Lattice::unit()).is_empty());
    }
}
