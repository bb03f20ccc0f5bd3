use num_traits::Zero;

use stark_rust_curve::curve_params::{
    EC_ORDER, ELEMENT_UPPER_BOUND, GENERATOR, MINUS_SHIFT_POINT, SHIFT_POINT,
};
use stark_rust_curve::{mimic_ec_mult_air, AffinePoint, Felt};

use crate::{
    fe_utils::{add_unbounded, div_mod_floor, reduce_mod},
    SignError, VerifyError,
};

/// Stark ECDSA signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The `r` value of a signature
    pub r: Felt,
    /// The `s` value of a signature
    pub s: Felt,
}

/// Computes the public key given a Stark private key.
///
/// ### Parameters
///
/// - `private_key`: The private key.
pub fn get_public_key(private_key: &Felt) -> Felt {
    (&*GENERATOR * private_key).x()
}

/// Computes ECDSA signature given a Stark private key and message hash.
///
/// ### Parameters
///
/// - `private_key`: The private key.
/// - `message`: The message hash.
/// - `k`: A random `k` value. You **MUST NOT** use the same `k` on different signatures.
pub fn sign(private_key: &Felt, message: &Felt, k: &Felt) -> Result<Signature, SignError> {
    if message.is_zero() || message >= &*ELEMENT_UPPER_BOUND {
        return Err(SignError::InvalidMessageHash);
    }
    if k.is_zero() {
        return Err(SignError::InvalidK);
    }

    // In classic ECDSA this would be x(kG) mod N; here the coordinate is used
    // directly and simply rejected when out of range.
    let r = (&*GENERATOR * k).x();
    if r.is_zero() || r >= *ELEMENT_UPPER_BOUND {
        return Err(SignError::InvalidK);
    }

    let agg = add_unbounded(&r.mul_mod(private_key, &EC_ORDER), message);
    if reduce_mod(&agg, &EC_ORDER).is_zero() {
        return Err(SignError::InvalidK);
    }

    let w = match div_mod_floor(k, &agg, &EC_ORDER) {
        Some(w) => w,
        None => return Err(SignError::InvalidK),
    };
    if w.is_zero() || w >= *ELEMENT_UPPER_BOUND {
        return Err(SignError::InvalidK);
    }

    // w is non-zero and below the prime order, so the inverse exists.
    let s = w.mod_inverse(&EC_ORDER).unwrap();

    Ok(Signature { r, s })
}

/// Verifies if a signature is valid over a message hash given a public key,
/// using the same AIR-shaped multiplication ladder the in-circuit verifier
/// runs. Returns an error instead of `false` when an input is out of range or
/// the public key is off the curve.
///
/// The curve admits two y-coordinates per x and the ladder is sensitive to
/// which one the signer held, so a failed first pass is retried with the
/// negated public key before rejecting.
///
/// ### Parameters
///
/// - `message`: The message hash.
/// - `r`: The `r` value of the signature.
/// - `s`: The `s` value of the signature.
/// - `public_key`: The public key.
pub fn verify(
    message: &Felt,
    r: &Felt,
    s: &Felt,
    public_key: &AffinePoint,
) -> Result<bool, VerifyError> {
    if message.is_zero() || message >= &*ELEMENT_UPPER_BOUND {
        return Err(VerifyError::InvalidMessageHash);
    }
    if r.is_zero() || r >= &*ELEMENT_UPPER_BOUND {
        return Err(VerifyError::InvalidR);
    }
    if s.is_zero() || s >= &*ELEMENT_UPPER_BOUND {
        return Err(VerifyError::InvalidS);
    }
    if !public_key.is_on_curve() || public_key.is_identity() {
        return Err(VerifyError::InvalidPublicKey);
    }

    let w = s.mod_inverse(&EC_ORDER).ok_or(VerifyError::InvalidS)?;
    if w.is_zero() || w >= *ELEMENT_UPPER_BOUND {
        return Err(VerifyError::InvalidS);
    }

    for candidate in [public_key.clone(), -public_key] {
        if let Some(out_x) = shifted_product_x(message, r, &w, &candidate) {
            if out_x == *r {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

// One verification branch: x(w * (message * G + r * Q)) through the shifted
// ladder. `None` when the ladder collides, which the caller treats as a
// mismatch for this branch.
fn shifted_product_x(message: &Felt, r: &Felt, w: &Felt, public_key: &AffinePoint) -> Option<Felt> {
    let zg = mimic_ec_mult_air(message, &GENERATOR, &MINUS_SHIFT_POINT).ok()?;
    let rq = mimic_ec_mult_air(r, public_key, &SHIFT_POINT).ok()?;
    let wb = mimic_ec_mult_air(w, &(&zg + &rq), &SHIFT_POINT).ok()?;

    Some((&wb + &*MINUS_SHIFT_POINT).x())
}
