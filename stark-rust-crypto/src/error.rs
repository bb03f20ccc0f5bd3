use core::fmt::{Display, Formatter, Result};

/// Errors when performing ECDSA [`sign`](crate::sign) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignError {
    /// The message hash is not in the range of `(0, P - 1)`.
    InvalidMessageHash,
    /// The nonce leads to an unusable signature; draw a fresh one.
    InvalidK,
}

/// Errors when performing ECDSA [`verify`](crate::verify) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The message hash is not in the range of `(0, P - 1)`.
    InvalidMessageHash,
    /// The `r` value is not in the range of `(0, P - 1)`.
    InvalidR,
    /// The `s` value is not in the range of `(0, P - 1)` or has no inverse
    /// modulo the curve order.
    InvalidS,
    /// The public key is not a valid point on the STARK curve.
    InvalidPublicKey,
}

/// Errors when computing the [Pedersen hash](crate::pedersen_hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedersenError {
    /// The constant-point table holds too few points for the input length.
    MissingConstantPoints,
    /// An input element does not lie in `[0, P)`.
    InvalidFieldElement,
    /// A constant point coincides in x-coordinate with the accumulator, which
    /// the hash cannot absorb. A correctly generated table makes this
    /// cryptographically improbable for well-formed inputs.
    PointDuplication,
}

impl std::error::Error for SignError {}

impl Display for SignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidMessageHash => write!(f, "invalid bit length"),
            Self::InvalidK => write!(f, "invalid k value"),
        }
    }
}

impl std::error::Error for VerifyError {}

impl Display for VerifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidMessageHash => write!(f, "invalid bit length"),
            Self::InvalidR => write!(f, "signature r value out of range"),
            Self::InvalidS => write!(f, "signature s value out of range"),
            Self::InvalidPublicKey => write!(f, "public key is not on the curve"),
        }
    }
}

impl std::error::Error for PedersenError {}

impl Display for PedersenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingConstantPoints => {
                write!(f, "must initiate precomputed constant points")
            }
            Self::InvalidFieldElement => write!(f, "input is not a valid field element"),
            Self::PointDuplication => write!(f, "constant point duplication"),
        }
    }
}
