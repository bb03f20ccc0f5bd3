use num_traits::{One, Zero};

use stark_rust_crypto::{
    pedersen_hash, rfc6979_generate_k, sign, verify, SignError, VerifyError,
};
pub use stark_rust_crypto::{PedersenError, Signature};
use stark_rust_curve::{AffinePoint, Felt};

mod errors {
    use core::fmt::{Display, Formatter, Result};

    /// Errors when performing ECDSA [`sign`](fn.ecdsa_sign) operations.
    #[derive(Debug)]
    pub enum EcdsaSignError {
        /// The message hash is not in the range of `(0, P - 1)`.
        MessageHashOutOfRange,
    }

    #[derive(Debug)]
    /// Errors when performing ECDSA [`verify`](fn.ecdsa_verify) operations.
    pub enum EcdsaVerifyError {
        /// The message hash is not in the range of `(0, P - 1)`.
        MessageHashOutOfRange,
        /// The public key is not a valid point on the STARK curve.
        InvalidPublicKey,
        /// The `r` value is not in the range of `(0, P - 1)`.
        SignatureROutOfRange,
        /// The `s` value is not in the range of `(0, P - 1)`.
        SignatureSOutOfRange,
    }

    impl std::error::Error for EcdsaSignError {}

    impl Display for EcdsaSignError {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Self::MessageHashOutOfRange => write!(f, "message hash out of range"),
            }
        }
    }

    impl std::error::Error for EcdsaVerifyError {}

    impl Display for EcdsaVerifyError {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Self::MessageHashOutOfRange => write!(f, "message hash out of range"),
                Self::InvalidPublicKey => write!(f, "invalid public key"),
                Self::SignatureROutOfRange => write!(f, "signature r value out of range"),
                Self::SignatureSOutOfRange => write!(f, "signature s value out of range"),
            }
        }
    }
}
pub use errors::{EcdsaSignError, EcdsaVerifyError};

/// Computes the Pedersen hash of a list of [`Felt`] by folding left to right.
///
/// The hash is computed by starting with `0` and hashing it recursively
/// against all elements in the list. For example, calling
/// `hash_elements([7, 8])` would return:
///
/// ```markdown
/// pedersen_hash(pedersen_hash(pedersen_hash(0, 7)), 8)
/// ```
///
/// The length of the list is deliberately not folded in: the account
/// contract hashes exactly the elements it is given.
pub fn hash_elements(data: &[Felt]) -> Result<Felt, PedersenError> {
    let mut current_hash = Felt::zero();

    if data.is_empty() {
        return pedersen_hash(&[current_hash, Felt::zero()]);
    }

    for element in data {
        current_hash = pedersen_hash(&[current_hash, element.clone()])?;
    }

    Ok(current_hash)
}

/// Signs a hash using deterministic ECDSA on the STARK curve.
pub fn ecdsa_sign(private_key: &Felt, message_hash: &Felt) -> Result<Signature, EcdsaSignError> {
    // Seed-retry logic ported from `cairo-lang`
    let mut seed = None;
    loop {
        let k = rfc6979_generate_k(message_hash, private_key, seed.as_ref());

        match sign(private_key, message_hash, &k) {
            Ok(sig) => {
                return Ok(sig);
            }
            Err(SignError::InvalidMessageHash) => {
                return Err(EcdsaSignError::MessageHashOutOfRange)
            }
            Err(SignError::InvalidK) => {
                // Bump seed and retry
                seed = match seed {
                    Some(prev_seed) => Some(&prev_seed + &Felt::one()),
                    None => Some(Felt::one()),
                };
            }
        };
    }
}

/// Verifies an ECDSA signature on the STARK curve.
pub fn ecdsa_verify(
    message_hash: &Felt,
    signature: &Signature,
    public_key: &AffinePoint,
) -> Result<bool, EcdsaVerifyError> {
    match verify(message_hash, &signature.r, &signature.s, public_key) {
        Ok(result) => Ok(result),
        Err(VerifyError::InvalidMessageHash) => Err(EcdsaVerifyError::MessageHashOutOfRange),
        Err(VerifyError::InvalidPublicKey) => Err(EcdsaVerifyError::InvalidPublicKey),
        Err(VerifyError::InvalidR) => Err(EcdsaVerifyError::SignatureROutOfRange),
        Err(VerifyError::InvalidS) => Err(EcdsaVerifyError::SignatureSOutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stark_rust_curve::curve_params::GENERATOR;

    fn public_point(private_key: &Felt) -> AffinePoint {
        &*GENERATOR * private_key
    }

    #[test]
    fn test_hash_elements() {
        let data = [
            Felt::from_hex_unchecked("0xaa"),
            Felt::from_hex_unchecked("0xbb"),
        ];

        let expected = pedersen_hash(&[
            pedersen_hash(&[Felt::zero(), data[0].clone()]).unwrap(),
            data[1].clone(),
        ])
        .unwrap();

        assert_eq!(hash_elements(&data).unwrap(), expected);
    }

    #[test]
    fn test_hash_elements_empty_data() {
        // With nothing to fold, the hash is pedersen(0, 0), the x-coordinate
        // of the shift point.
        let expected = Felt::from_hex_unchecked(
            "0x049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
        );

        assert_eq!(hash_elements(&[]).unwrap(), expected);
        assert_eq!(hash_elements(&[Felt::zero()]).unwrap(), expected);
    }

    #[test]
    fn test_hash_elements_single_matches_raw_pair() {
        let element = Felt::from_hex_unchecked("0x7abc");
        assert_eq!(
            hash_elements(&[element.clone()]).unwrap(),
            pedersen_hash(&[Felt::zero(), element]).unwrap()
        );
    }

    #[test]
    fn test_ecdsa_sign() {
        // Generated with `cairo-lang`
        let signature = ecdsa_sign(
            &Felt::from_hex_unchecked(
                "0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79",
            ),
            &Felt::from_hex_unchecked(
                "06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76",
            ),
        )
        .unwrap();
        let expected_r = Felt::from_hex_unchecked(
            "061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f",
        );
        let expected_s = Felt::from_hex_unchecked(
            "04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a",
        );

        assert_eq!(signature.r, expected_r);
        assert_eq!(signature.s, expected_s);
    }

    #[test]
    fn test_ecdsa_sign_deterministic() {
        let private_key = Felt::from_hex_unchecked("0x1");
        let message_hash = Felt::from_hex_unchecked("0x2");

        let first = ecdsa_sign(&private_key, &message_hash).unwrap();
        let second = ecdsa_sign(&private_key, &message_hash).unwrap();

        assert_eq!(first.r, second.r);
        assert_eq!(first.s, second.s);
    }

    #[test]
    fn test_ecdsa_sign_message_hash_out_of_range() {
        match ecdsa_sign(
            &Felt::from_hex_unchecked(
                "0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79",
            ),
            &Felt::zero(),
        ) {
            Err(EcdsaSignError::MessageHashOutOfRange) => {}
            _ => panic!("Should throw error on out of range message hash"),
        };
    }

    #[test]
    fn test_ecdsa_verify_valid_signature() {
        // Generated with `cairo-lang`
        let private_key = Felt::from_hex_unchecked(
            "0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79",
        );
        let message_hash = Felt::from_hex_unchecked(
            "06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76",
        );
        let r = Felt::from_hex_unchecked(
            "061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f",
        );
        let s = Felt::from_hex_unchecked(
            "04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a",
        );

        let public_key = public_point(&private_key);
        assert_eq!(
            public_key.x(),
            Felt::from_hex_unchecked(
                "02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159",
            )
        );

        assert!(ecdsa_verify(&message_hash, &Signature { r, s }, &public_key).unwrap());
    }

    #[test]
    fn test_ecdsa_verify_negated_public_key() {
        // The in-circuit multiplier only sees the x-coordinate, so either
        // y-candidate of the signer's point must accept.
        let private_key = Felt::from_hex_unchecked(
            "0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79",
        );
        let message_hash = Felt::from_hex_unchecked(
            "06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76",
        );

        let signature = ecdsa_sign(&private_key, &message_hash).unwrap();
        let negated = -&public_point(&private_key);

        assert!(ecdsa_verify(&message_hash, &signature, &negated).unwrap());
    }

    #[test]
    fn test_ecdsa_verify_invalid_signature() {
        // Generated with `cairo-lang`
        let private_key = Felt::from_hex_unchecked(
            "0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79",
        );
        let message_hash = Felt::from_hex_unchecked(
            "06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76",
        );
        let r = Felt::from_hex_unchecked(
            "061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f",
        );
        let s = Felt::from_hex_unchecked(
            "04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9b",
        );

        let public_key = public_point(&private_key);
        assert!(!ecdsa_verify(&message_hash, &Signature { r, s }, &public_key).unwrap());
    }
}
