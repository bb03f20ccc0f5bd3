use core::ops::{Add, Mul, Neg};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::curve_params::{ALPHA, BETA};
use crate::error::MimicEcMultError;
use crate::felt::Felt;

/// Number of ladder iterations performed by [`mimic_ec_mult_air`]. Multipliers
/// must fit in this many bits.
const MULT_AIR_BITS: u64 = 251;

/// An affine point on the STARK curve `y^2 = x^3 + alpha * x + beta`.
///
/// The point at infinity is represented with the `infinity` flag set; its
/// coordinates are both zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    x: Felt,
    y: Felt,
    infinity: bool,
}

impl AffinePoint {
    /// Creates a point from affine coordinates, returning `None` when the
    /// coordinates do not satisfy the curve equation.
    pub fn new(x: Felt, y: Felt) -> Option<Self> {
        let point = Self::new_unchecked(x, y);
        point.is_on_curve().then_some(point)
    }

    /// Creates a point from affine coordinates without checking the curve
    /// equation.
    pub const fn new_unchecked(x: Felt, y: Felt) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Returns the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: Felt::zero(),
            y: Felt::zero(),
            infinity: true,
        }
    }

    /// Returns whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> Felt {
        self.x.clone()
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> Felt {
        self.y.clone()
    }

    /// Returns whether the coordinates satisfy `y^2 = x^3 + alpha * x + beta`.
    /// The point at infinity is a group member and reports `true`.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let left = &self.y * &self.y;
        let right = &(&(&(&self.x * &self.x) * &self.x) + &(&*ALPHA * &self.x)) + &*BETA;
        left == right
    }

    /// Doubles the point.
    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::identity();
        }

        // lambda = (3 * x^2 + alpha) / (2 * y)
        let x_squared = &self.x * &self.x;
        let numerator = &(&(&x_squared + &x_squared) + &x_squared) + &*ALPHA;
        let denominator = &self.y + &self.y;
        // The denominator is non-zero by the guard above and the modulus is
        // prime, so the inverse always exists.
        let lambda = &numerator * &field_inverse(&denominator).unwrap();

        let x = &(&lambda * &lambda) - &(&self.x + &self.x);
        let y = &(&lambda * &(&self.x - &x)) - &self.y;
        Self::new_unchecked(x, y)
    }
}

// `P` itself is not representable as a `Felt`, so slope inversion goes through
// the raw field routine.
fn field_inverse(value: &Felt) -> Option<Felt> {
    crate::field::inv_mod(&value.to_biguint(), &Felt::prime())
        .and_then(|inverse| Felt::try_from(inverse).ok())
}

impl Add<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn add(self, rhs: &AffinePoint) -> AffinePoint {
        if self.infinity {
            return rhs.clone();
        }
        if rhs.infinity {
            return self.clone();
        }

        if self.x == rhs.x {
            return if self.y == rhs.y {
                self.double()
            } else {
                // Vertical case: y2 = -y1
                AffinePoint::identity()
            };
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let numerator = &rhs.y - &self.y;
        let denominator = &rhs.x - &self.x;
        // x2 != x1, so the inverse always exists.
        let lambda = &numerator * &field_inverse(&denominator).unwrap();

        let x = &(&(&lambda * &lambda) - &self.x) - &rhs.x;
        let y = &(&lambda * &(&self.x - &x)) - &self.y;
        AffinePoint::new_unchecked(x, y)
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        if self.infinity {
            AffinePoint::identity()
        } else {
            AffinePoint::new_unchecked(self.x.clone(), -&self.y)
        }
    }
}

impl Mul<&Felt> for &AffinePoint {
    type Output = AffinePoint;

    /// Double-and-add scalar multiplication over the bits of the multiplier,
    /// least significant first.
    fn mul(self, scalar: &Felt) -> AffinePoint {
        let mut product = AffinePoint::identity();
        let mut running = self.clone();

        for index in 0..scalar.bit_length() {
            if scalar.bit(index) {
                product = &product + &running;
            }
            running = running.double();
        }

        product
    }
}

/// Scalar multiplication shaped after the in-circuit STARK multiplier.
///
/// The accumulator starts at `shift`; for each of the 251 low bits of
/// `multiplier`, taken least significant first, a set bit adds the current
/// running multiple of `point` into the accumulator. The ladder fails when
/// the running point's x-coordinate coincides with the accumulator's at any
/// step, which callers handle by retrying with the negated public key.
pub fn mimic_ec_mult_air(
    multiplier: &Felt,
    point: &AffinePoint,
    shift: &AffinePoint,
) -> Result<AffinePoint, MimicEcMultError> {
    if multiplier.is_zero() || multiplier.bit_length() > MULT_AIR_BITS {
        return Err(MimicEcMultError::ScalarOutOfRange);
    }

    let mut partial = shift.clone();
    let mut running = point.clone();
    let mut remaining: BigUint = multiplier.to_biguint();

    for _ in 0..MULT_AIR_BITS {
        if partial.x == running.x {
            return Err(MimicEcMultError::RunningPointCollision);
        }
        if remaining.bit(0) {
            partial = &partial + &running;
        }
        running = running.double();
        remaining >>= 1;
    }

    Ok(partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_params::{EC_ORDER, GENERATOR, MINUS_SHIFT_POINT, SHIFT_POINT};

    #[test]
    fn test_curve_constants_on_curve() {
        assert!(GENERATOR.is_on_curve());
        assert!(SHIFT_POINT.is_on_curve());
        assert!(MINUS_SHIFT_POINT.is_on_curve());
    }

    #[test]
    fn test_new_rejects_off_curve() {
        assert!(AffinePoint::new(Felt::from(1u64), Felt::from(1u64)).is_none());
    }

    #[test]
    fn test_add_is_doubling_for_equal_points() {
        let sum = &*GENERATOR + &*GENERATOR;
        assert_eq!(sum, GENERATOR.double());
        assert!(sum.is_on_curve());
    }

    #[test]
    fn test_add_vertical_is_identity() {
        let negated = -&*GENERATOR;
        assert!((&*GENERATOR + &negated).is_identity());
    }

    #[test]
    fn test_identity_laws() {
        let identity = AffinePoint::identity();
        assert_eq!(&identity + &*GENERATOR, *GENERATOR);
        assert_eq!(&*GENERATOR + &identity, *GENERATOR);
        assert!(identity.double().is_identity());
    }

    #[test]
    fn test_scalar_mult_small() {
        let five = Felt::from(5u64);
        let expected = &(&(&*GENERATOR + &*GENERATOR) + &(&*GENERATOR + &*GENERATOR)) + &*GENERATOR;
        assert_eq!(&*GENERATOR * &five, expected);
    }

    // Test case ported from:
    //   https://github.com/starkware-libs/crypto-cpp/blob/95864fbe11d5287e345432dbe1e80dea3c35fc58/src/starkware/crypto/ffi/crypto_lib_test.go
    #[test]
    fn test_scalar_mult_matches_reference() {
        let private_key = Felt::from_hex_unchecked(
            "0x03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc",
        );
        let expected_x = Felt::from_hex_unchecked(
            "0x077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43",
        );

        assert_eq!((&*GENERATOR * &private_key).x(), expected_x);
    }

    #[test]
    fn test_scalar_mult_by_order_is_identity() {
        assert!((&*GENERATOR * &*EC_ORDER).is_identity());
    }

    #[test]
    fn test_mimic_ec_mult_air_matches_plain_mult() {
        for multiplier in [Felt::from(1u64), Felt::from(5u64), Felt::from(1u64 << 40)] {
            let shifted = mimic_ec_mult_air(&multiplier, &GENERATOR, &SHIFT_POINT).unwrap();
            let unshifted = &shifted + &*MINUS_SHIFT_POINT;
            assert_eq!(unshifted, &*GENERATOR * &multiplier);
        }
    }

    #[test]
    fn test_mimic_ec_mult_air_rejects_out_of_range() {
        match mimic_ec_mult_air(&Felt::zero(), &GENERATOR, &SHIFT_POINT) {
            Err(MimicEcMultError::ScalarOutOfRange) => {}
            _ => panic!("unexpected result"),
        }

        let too_wide = Felt::from_hex_unchecked(
            "0x0800000000000000000000000000000000000000000000000000000000000000",
        );
        match mimic_ec_mult_air(&too_wide, &GENERATOR, &SHIFT_POINT) {
            Err(MimicEcMultError::ScalarOutOfRange) => {}
            _ => panic!("unexpected result"),
        }
    }

    #[test]
    fn test_mimic_ec_mult_air_detects_collision() {
        // Multiplying the shift point by itself collides on the first step.
        match mimic_ec_mult_air(&Felt::from(1u64), &SHIFT_POINT, &SHIFT_POINT) {
            Err(MimicEcMultError::RunningPointCollision) => {}
            _ => panic!("unexpected result"),
        }
    }
}
