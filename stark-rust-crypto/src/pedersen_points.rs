//! Constant points for the Pedersen hash.
//!
//! The table holds `2 + 252 * 2` points: the shift point, the curve
//! generator, then for each of the two input slots the successive doublings
//! of the slot's low-part base (248 points) followed by the doublings of its
//! high-part base (4 points). Entry `2 + 252 * i + j` is the point a set bit
//! `j` of input `i` adds into the accumulator.

use once_cell::sync::Lazy;

use stark_rust_curve::curve_params::{
    GENERATOR, PEDERSEN_P0, PEDERSEN_P1, PEDERSEN_P2, PEDERSEN_P3, SHIFT_POINT,
};
use stark_rust_curve::AffinePoint;

/// Bits absorbed per input element.
pub(crate) const N_ELEMENT_BITS_HASH: usize = 252;

/// Input slots covered by the standard table.
pub(crate) const N_INPUT_SLOTS: usize = 2;

/// Bits covered by the low-part base of each slot; the remaining top bits use
/// the high-part base.
const LOW_PART_BITS: usize = 248;

pub(crate) static CONSTANT_POINTS: Lazy<Vec<AffinePoint>> = Lazy::new(|| {
    let mut points = Vec::with_capacity(2 + N_INPUT_SLOTS * N_ELEMENT_BITS_HASH);
    points.push(SHIFT_POINT.clone());
    points.push(GENERATOR.clone());

    for [low_base, high_base] in [
        [&*PEDERSEN_P0, &*PEDERSEN_P1],
        [&*PEDERSEN_P2, &*PEDERSEN_P3],
    ] {
        push_doublings(&mut points, low_base, LOW_PART_BITS);
        push_doublings(&mut points, high_base, N_ELEMENT_BITS_HASH - LOW_PART_BITS);
    }

    points
});

fn push_doublings(points: &mut Vec<AffinePoint>, base: &AffinePoint, count: usize) {
    let mut current = base.clone();
    for _ in 0..count {
        points.push(current.clone());
        current = current.double();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(CONSTANT_POINTS.len(), 506);
    }

    #[test]
    fn test_table_structure() {
        assert_eq!(CONSTANT_POINTS[0], *SHIFT_POINT);
        assert_eq!(CONSTANT_POINTS[1], *GENERATOR);
        assert_eq!(CONSTANT_POINTS[2], *PEDERSEN_P0);
        assert_eq!(CONSTANT_POINTS[3], PEDERSEN_P0.double());
        assert_eq!(CONSTANT_POINTS[2 + 248], *PEDERSEN_P1);
        assert_eq!(CONSTANT_POINTS[2 + 252], *PEDERSEN_P2);
        assert_eq!(CONSTANT_POINTS[2 + 252 + 248], *PEDERSEN_P3);
    }

    #[test]
    fn test_table_points_on_curve() {
        assert!(CONSTANT_POINTS.iter().all(AffinePoint::is_on_curve));
    }
}
