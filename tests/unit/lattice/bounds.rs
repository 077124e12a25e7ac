//! Tests for lattice bounds, dense cell indexing and delta clamping

#[cfg(test)]
mod tests {
    use trislice::lattice::{Axial, LatticeBounds, TriangleCell};

    fn square(size: i32) -> LatticeBounds {
        LatticeBounds::new(Axial::ORIGIN, Axial::new(size, size))
    }

    // Tests corners are normalized regardless of argument order
    #[test]
    fn test_new_normalizes() {
        let bounds = LatticeBounds::new(Axial::new(5, -1), Axial::new(2, 3));
        assert_eq!(bounds.min, Axial::new(2, -1));
        assert_eq!(bounds.max, Axial::new(5, 3));
    }

    // Tests capacity counts both orientations per rhombus
    #[test]
    fn test_cell_capacity() {
        assert_eq!(square(2).cell_capacity(), 8);
        assert_eq!(square(0).cell_capacity(), 0);
    }

    // Tests cell_at and cell_index are inverse over the whole capacity
    // Verified by dropping the row offset of Up cells in cell_at
    #[test]
    fn test_index_round_trip() {
        let bounds = LatticeBounds::new(Axial::new(-2, 1), Axial::new(3, 4));
        for index in 0..bounds.cell_capacity() {
            let cell = bounds.cell_at(index).unwrap();
            assert!(bounds.contains_cell(cell), "{cell} out of bounds");
            assert_eq!(bounds.cell_index(cell), Some(index));
        }
        assert_eq!(bounds.cell_at(bounds.cell_capacity()), None);
    }

    // Tests cells poking out of the bounds have no index
    #[test]
    fn test_out_of_bounds_cells() {
        let bounds = square(2);
        assert!(!bounds.contains_cell(TriangleCell::up(0, 0)));
        assert_eq!(bounds.cell_index(TriangleCell::up(0, 0)), None);
        assert!(bounds.contains_cell(TriangleCell::up(0, 1)));
        assert!(!bounds.contains_cell(TriangleCell::down(2, 0)));
    }

    // Tests enclosing box of a vertex set
    #[test]
    fn test_enclosing() {
        assert_eq!(LatticeBounds::enclosing(Vec::new()), None);

        let bounds =
            LatticeBounds::enclosing([Axial::new(1, 4), Axial::new(-2, 0), Axial::new(3, 2)]).unwrap();
        assert_eq!(bounds.min, Axial::new(-2, 0));
        assert_eq!(bounds.max, Axial::new(3, 4));
    }

    // Tests deltas are shortened to keep the vertex set inside
    // Verified by clamping only the minimum edge
    #[test]
    fn test_clamp_delta() {
        let bounds = square(5);
        let verts = [Axial::new(0, 0), Axial::new(2, 0)];

        assert_eq!(bounds.clamp_delta(&verts, 1, 1), (1, 1));
        assert_eq!(bounds.clamp_delta(&verts, 10, 0), (3, 0));
        assert_eq!(bounds.clamp_delta(&verts, -4, -2), (0, 0));
    }

    // Tests sets wider than the bounds align with the minimum edge
    #[test]
    fn test_clamp_delta_oversized() {
        let bounds = square(2);
        let verts = [Axial::new(0, 0), Axial::new(6, 0)];
        assert_eq!(bounds.clamp_delta(&verts, 3, 0), (0, 0));
    }
}
