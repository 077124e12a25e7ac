//! Tests for mask-to-polygon boundary reconstruction

#[cfg(test)]
mod tests {
    use trislice::io::error::{EngineError, MaskDefect};
    use trislice::lattice::{Axial, TriangleCell};
    use trislice::mask::boundary::{boundary_edges, boundary_loop};
    use trislice::mask::{Mask, mask_to_polygon};
    use trislice::shape::{Polygon, ShapeTemplate};

    fn mask_of(cells: &[TriangleCell]) -> Mask {
        cells.iter().copied().collect()
    }

    fn defect(result: trislice::Result<Polygon>) -> MaskDefect {
        match result {
            Err(EngineError::InvalidMask { defect }) => defect,
            other => panic!("expected an invalid mask, got {other:?}"),
        }
    }

    // Tests a single Up cell becomes a three-vertex polygon anchored at its first vertex
    // Verified by requiring four vertices for a valid loop
    #[test]
    fn test_single_up_cell() {
        let polygon = mask_to_polygon(&mask_of(&[TriangleCell::up(0, 0)]), "red").unwrap();

        assert_eq!(
            polygon.verts(),
            &[Axial::new(0, 0), Axial::new(1, -1), Axial::new(1, 0)]
        );
        assert_eq!(polygon.pose().translation(), Axial::ORIGIN);
        assert_eq!(polygon.fill(), "red");
    }

    // Tests a single Down cell away from the origin
    #[test]
    fn test_single_down_cell() {
        let polygon = mask_to_polygon(&mask_of(&[TriangleCell::down(4, 2)]), "blue").unwrap();

        assert_eq!(polygon.verts().len(), 3);
        assert_eq!(polygon.pose().translation(), Axial::new(4, 2));
        assert_eq!(polygon.verts()[0], Axial::ORIGIN);
    }

    // Tests shared edges cancel between neighbouring cells
    #[test]
    fn test_shared_edges_cancel() {
        let rhombus = mask_of(&[TriangleCell::down(0, 0), TriangleCell::up(0, 1)]);
        assert_eq!(boundary_edges(&rhombus).len(), 4);
        assert_eq!(boundary_loop(&rhombus).unwrap().len(), 4);
    }

    // Tests the reconstructed polygon rasterizes back to the same mask
    // Verified by scanning clockwise from the back edge
    #[test]
    fn test_round_trip_templates() {
        for template in ShapeTemplate::ALL {
            let mask = template.instantiate("grey").unwrap().tri_mask();
            let rebuilt = mask_to_polygon(&mask, "grey").unwrap();
            assert_eq!(rebuilt.tri_mask(), mask, "{}", template.name());
        }
    }

    // Tests the empty mask is rejected
    #[test]
    fn test_empty_mask() {
        assert_eq!(defect(mask_to_polygon(&Mask::new(), "x")), MaskDefect::Empty);
    }

    // Tests cells touching at a single vertex are not one region
    // Verified by letting the walk switch wedges at a pinch vertex
    #[test]
    fn test_vertex_touching_cells() {
        let pinched = mask_of(&[TriangleCell::up(0, 0), TriangleCell::up(1, -1)]);
        assert_eq!(
            defect(mask_to_polygon(&pinched, "x")),
            MaskDefect::Unreachable { edges: 3 }
        );
    }

    // Tests disconnected cells are rejected
    #[test]
    fn test_disconnected_cells() {
        let apart = mask_of(&[TriangleCell::up(0, 0), TriangleCell::up(5, 5)]);
        assert!(matches!(
            defect(mask_to_polygon(&apart, "x")),
            MaskDefect::Unreachable { .. }
        ));
    }

    // Tests a ring of cells around a hole is rejected
    #[test]
    fn test_mask_with_hole() {
        let outer = Polygon::from_pairs(&[(2, 0), (2, -2), (0, -2), (-2, 0), (-2, 2), (0, 2)])
            .unwrap()
            .tri_mask();
        let inner = Polygon::from_pairs(&[(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)])
            .unwrap()
            .tri_mask();
        let ring: Mask = outer.iter().filter(|c| !inner.contains(c)).copied().collect();
        assert_eq!(ring.len(), 18);

        assert_eq!(
            defect(mask_to_polygon(&ring, "x")),
            MaskDefect::Unreachable { edges: 6 }
        );
    }
}
