use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

use stark_rust_curve::{AffinePoint, Felt};

use crate::error::PedersenError;
use crate::pedersen_points::{CONSTANT_POINTS, N_ELEMENT_BITS_HASH};

static STANDARD_PARAMS: Lazy<PedersenParams> =
    Lazy::new(|| PedersenParams::from_points(CONSTANT_POINTS.clone()));

/// Constant-point table backing the Pedersen hash.
///
/// The standard table is materialized once at first use and shared
/// process-wide. An explicit table, for instance one loaded from a curve
/// constants file, can be supplied through [`from_points`](Self::from_points);
/// its layout must follow the standard one: shift point, generator, then 252
/// bit points per input slot.
#[derive(Debug, Clone)]
pub struct PedersenParams {
    points: Vec<AffinePoint>,
}

impl PedersenParams {
    /// Returns the process-wide standard table.
    pub fn standard() -> &'static Self {
        &STANDARD_PARAMS
    }

    /// Creates parameters from an explicit ordered point list.
    pub fn from_points(points: Vec<AffinePoint>) -> Self {
        Self { points }
    }

    /// Computes the Pedersen hash of a sequence of field elements. An empty
    /// sequence hashes as `[0]`.
    ///
    /// The accumulator starts at the shift point; every set bit of an input
    /// element adds the matching constant point. The x-coordinate of the
    /// final accumulator is the hash.
    pub fn hash(&self, elements: &[Felt]) -> Result<Felt, PedersenError> {
        if elements.is_empty() {
            return self.hash(&[Felt::zero()]);
        }

        if self.points.len() < 2 + elements.len() * N_ELEMENT_BITS_HASH {
            return Err(PedersenError::MissingConstantPoints);
        }

        let mut point = self.points[0].clone();
        for (index, element) in elements.iter().enumerate() {
            let mut remaining: BigUint = element.to_biguint();
            if remaining >= Felt::prime() {
                return Err(PedersenError::InvalidFieldElement);
            }

            let start = 2 + index * N_ELEMENT_BITS_HASH;
            for constant_point in &self.points[start..start + N_ELEMENT_BITS_HASH] {
                if constant_point.x() == point.x() {
                    return Err(PedersenError::PointDuplication);
                }
                if remaining.bit(0) {
                    point = &point + constant_point;
                }
                remaining >>= 1;
            }
        }

        Ok(point.x())
    }
}

/// Computes the Pedersen hash of a sequence of field elements with the
/// standard constant-point table.
pub fn pedersen_hash(elements: &[Felt]) -> Result<Felt, PedersenError> {
    PedersenParams::standard().hash(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stark_rust_curve::curve_params::{GENERATOR, SHIFT_POINT};

    // Test case ported from:
    //   https://github.com/starkware-libs/crypto-cpp/blob/95864fbe11d5287e345432dbe1e80dea3c35fc58/src/starkware/crypto/ffi/crypto_lib_test.go
    #[test]
    fn test_pedersen_hash_known_pair() {
        let a = Felt::from_hex_unchecked(
            "0x03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
        );
        let b = Felt::from_hex_unchecked(
            "0x0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
        );
        let expected = Felt::from_hex_unchecked(
            "0x030e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662",
        );

        assert_eq!(pedersen_hash(&[a, b]).unwrap(), expected);
    }

    #[test]
    fn test_pedersen_hash_of_zero_pair_is_shift_point_x() {
        // No bits set, so the accumulator never leaves the shift point.
        let hash = pedersen_hash(&[Felt::zero(), Felt::zero()]).unwrap();
        assert_eq!(hash, SHIFT_POINT.x());
    }

    #[test]
    fn test_pedersen_hash_empty_input_hashes_as_zero() {
        assert_eq!(
            pedersen_hash(&[]).unwrap(),
            pedersen_hash(&[Felt::zero()]).unwrap()
        );
    }

    #[test]
    fn test_pedersen_hash_too_many_elements() {
        let elements = vec![Felt::zero(); 3];
        match pedersen_hash(&elements) {
            Err(PedersenError::MissingConstantPoints) => {}
            _ => panic!("unexpected result"),
        }
    }

    #[test]
    fn test_pedersen_hash_short_table() {
        let params = PedersenParams::from_points(vec![SHIFT_POINT.clone(), GENERATOR.clone()]);
        match params.hash(&[Felt::from(1u64)]) {
            Err(PedersenError::MissingConstantPoints) => {}
            _ => panic!("unexpected result"),
        }
    }

    #[test]
    fn test_pedersen_hash_point_duplication() {
        // A malformed table whose first bit point is the shift point itself.
        let mut points = vec![SHIFT_POINT.clone(), GENERATOR.clone()];
        points.extend(std::iter::repeat(SHIFT_POINT.clone()).take(N_ELEMENT_BITS_HASH));

        let params = PedersenParams::from_points(points);
        match params.hash(&[Felt::from(1u64)]) {
            Err(PedersenError::PointDuplication) => {}
            _ => panic!("unexpected result"),
        }
    }
}
