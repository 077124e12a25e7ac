//! Tests for axial coordinate arithmetic, rotation and mirroring

#[cfg(test)]
mod tests {
    use trislice::lattice::Axial;

    const UNIT_DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

    // Tests six single steps bring every vertex back to itself
    // Verified by swapping the k=2 and k=4 table rows
    #[test]
    fn test_six_rotations_identity() {
        for q in -3..=3 {
            for r in -3..=3 {
                let v = Axial::new(q, r);
                let mut turned = v;
                for _ in 0..6 {
                    turned = turned.rotated(1);
                }
                assert_eq!(turned, v);
            }
        }
    }

    // Tests rotation steps compose additively for negative and large counts
    #[test]
    fn test_rotation_composition() {
        let v = Axial::new(2, -1);
        for a in -7..=7 {
            for b in -7..=7 {
                assert_eq!(v.rotated(a).rotated(b), v.rotated(a + b));
            }
        }
        assert_eq!(v.rotated(-1), v.rotated(5));
    }

    // Tests one step maps each unit direction onto the next unit direction
    // Verified by replacing the k=1 row with (r, q)
    #[test]
    fn test_rotation_permutes_unit_directions() {
        let turned: Vec<Option<usize>> = UNIT_DIRECTIONS
            .iter()
            .map(|&d| Axial::from(d).rotated(1).direction_index())
            .collect();
        assert_eq!(
            turned,
            vec![Some(5), Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
    }

    // Tests mirroring is an involution that keeps unit edges unit edges
    // Verified by mirroring with plain q negation
    #[test]
    fn test_mirror_is_lattice_reflection() {
        for &d in &UNIT_DIRECTIONS {
            let v = Axial::from(d);
            assert!(v.mirrored().direction_index().is_some(), "{v} left the lattice");
            assert_eq!(v.mirrored().mirrored(), v);
        }
        assert_eq!(Axial::new(1, 0).mirrored(), Axial::new(-1, 0));
        assert_eq!(Axial::new(0, 1).mirrored(), Axial::new(-1, 1));
    }

    // Tests non-unit offsets have no direction
    #[test]
    fn test_direction_index_rejects_long_offsets() {
        assert_eq!(Axial::new(2, 0).direction_index(), None);
        assert_eq!(Axial::new(1, 1).direction_index(), None);
        assert_eq!(Axial::ORIGIN.direction_index(), None);
    }

    // Tests arithmetic operators and display
    #[test]
    fn test_arithmetic_and_display() {
        let a = Axial::new(3, -2);
        let b = Axial::new(-1, 5);
        assert_eq!(a + b, Axial::new(2, 3));
        assert_eq!(a - b, Axial::new(4, -7));
        assert_eq!(a.to_string(), "(3, -2)");
    }
}
