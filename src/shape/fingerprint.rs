//! Congruence-invariant digest of a local vertex loop
//!
//! The digest is the lexicographically least rotation of the loop, or of its
//! mirror image when that is smaller, written as `q0,r0,q1,r1,…`. It depends
//! only on the local vertex list, never on where the polygon is placed.

use crate::lattice::Axial;

/// Start index of the lexicographically least rotation (Booth's algorithm)
///
/// Runs in linear time using a failure function over the doubled sequence.
pub fn least_rotation(sequence: &[Axial]) -> usize {
    let n = sequence.len();
    if n < 2 {
        return 0;
    }

    let doubled: Vec<Axial> = sequence.iter().chain(sequence).copied().collect();
    let mut failure: Vec<Option<usize>> = vec![None; doubled.len()];
    let mut k = 0;

    for (j, &current) in doubled.iter().enumerate().skip(1) {
        let mut matched = failure.get(j - k - 1).copied().flatten();

        while let Some(i) = matched {
            let Some(&candidate) = doubled.get(k + i + 1) else {
                break;
            };
            if current == candidate {
                break;
            }
            if current < candidate {
                k = j - i - 1;
            }
            matched = failure.get(i).copied().flatten();
        }

        let head = doubled.get(k).copied();
        let entry = match matched {
            Some(i) => Some(i + 1),
            None if head == Some(current) => Some(0),
            None => {
                if head.is_some_and(|h| current < h) {
                    k = j;
                }
                None
            }
        };
        if let Some(slot) = failure.get_mut(j - k) {
            *slot = entry;
        }
    }

    k % n
}

/// Rotate a loop so it starts at its least rotation
pub fn canonical_rotation(sequence: &[Axial]) -> Vec<Axial> {
    let start = least_rotation(sequence);
    sequence
        .iter()
        .cycle()
        .skip(start)
        .take(sequence.len())
        .copied()
        .collect()
}

/// Congruence digest of a local vertex loop
pub fn canonical_digest(vertices: &[Axial]) -> String {
    let straight = canonical_rotation(vertices);
    let mirror_image: Vec<Axial> = vertices.iter().map(|v| v.mirrored()).collect();
    let flipped = canonical_rotation(&mirror_image);

    let best = if flipped < straight { flipped } else { straight };
    best.iter()
        .map(|v| format!("{},{}", v.q, v.r))
        .collect::<Vec<_>>()
        .join(",")
}
