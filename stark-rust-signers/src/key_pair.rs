use core::fmt::{Display, Formatter, Result as FmtResult};

use num_traits::Zero;
use zeroize::Zeroize;

use stark_rust_core::crypto::{ecdsa_sign, ecdsa_verify, EcdsaSignError, EcdsaVerifyError};
use stark_rust_crypto::Signature;
use stark_rust_curve::curve_params::{EC_ORDER, GENERATOR};
use stark_rust_curve::{AffinePoint, Felt};

/// A STARK curve private key.
///
/// The secret scalar is stored as big-endian bytes and zeroized when the key
/// is dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct SigningKey {
    secret: [u8; 32],
}

/// A STARK curve public key, always derived from a [`SigningKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey {
    point: AffinePoint,
}

/// Errors when constructing a [`SigningKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The secret scalar does not lie in `(0, N)`.
    SecretScalarOutOfRange,
}

impl std::error::Error for KeyError {}

impl Display for KeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::SecretScalarOutOfRange => write!(f, "secret scalar out of range"),
        }
    }
}

impl SigningKey {
    /// Constructs a [`SigningKey`] from a secret scalar in `(0, N)`.
    pub fn from_secret_scalar(secret_scalar: &Felt) -> Result<Self, KeyError> {
        if secret_scalar.is_zero() || secret_scalar >= &*EC_ORDER {
            return Err(KeyError::SecretScalarOutOfRange);
        }

        Ok(Self {
            secret: secret_scalar.to_bytes_be(),
        })
    }

    /// Returns the secret scalar.
    pub fn secret_scalar(&self) -> Felt {
        Felt::from_bytes_be(&self.secret)
    }

    /// Derives the matching [`VerifyingKey`].
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: &*GENERATOR * &self.secret_scalar(),
        }
    }

    /// Signs a message hash with deterministic ECDSA.
    pub fn sign(&self, hash: &Felt) -> Result<Signature, EcdsaSignError> {
        ecdsa_sign(&self.secret_scalar(), hash)
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl VerifyingKey {
    /// Returns the public key in its network form, the x-coordinate of the
    /// public point.
    pub fn scalar(&self) -> Felt {
        self.point.x()
    }

    /// Returns the full public point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Verifies a signature over a message hash against this key.
    pub fn verify(&self, hash: &Felt, signature: &Signature) -> Result<bool, EcdsaVerifyError> {
        ecdsa_verify(hash, signature, &self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stark_rust_crypto::get_public_key;

    #[test]
    fn test_from_secret_scalar_range() {
        match SigningKey::from_secret_scalar(&Felt::zero()) {
            Err(KeyError::SecretScalarOutOfRange) => {}
            _ => panic!("unexpected result"),
        }

        match SigningKey::from_secret_scalar(&EC_ORDER) {
            Err(KeyError::SecretScalarOutOfRange) => {}
            _ => panic!("unexpected result"),
        }

        assert!(SigningKey::from_secret_scalar(&Felt::from(1u64)).is_ok());
    }

    #[test]
    fn test_verifying_key_matches_low_level_derivation() {
        let secret = Felt::from_hex_unchecked(
            "0x03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc",
        );
        let signing_key = SigningKey::from_secret_scalar(&secret).unwrap();

        assert_eq!(
            signing_key.verifying_key().scalar(),
            get_public_key(&secret)
        );
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let signing_key = SigningKey::from_secret_scalar(&Felt::from(0x1234u64)).unwrap();
        let verifying_key = signing_key.verifying_key();
        let hash = Felt::from_hex_unchecked(
            "0x06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76",
        );

        let signature = signing_key.sign(&hash).unwrap();
        assert!(verifying_key.verify(&hash, &signature).unwrap());

        let tampered = Felt::from_hex_unchecked(
            "0x06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea77",
        );
        assert!(!verifying_key.verify(&tampered, &signature).unwrap());
    }
}
