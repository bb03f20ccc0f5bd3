use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use once_cell::sync::Lazy;

use crate::error::FeltParseError;
use crate::field;

/// The STARK field prime. Equals to `2^251 + 17 * 2^192 + 1`.
static PRIME: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_str_radix(
        "800000000000011000000000000000000000000000000000000000000000001",
        16,
    )
    .expect("hard-coded field prime is valid hex")
});

/// Field element of the 252-bit STARK prime field.
///
/// A `Felt` is a non-negative integer strictly below the field prime `P`.
/// All fallible constructors enforce the bound; arithmetic reduces modulo
/// `P`, so the bound is preserved under every operation.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Felt(BigUint);

impl Felt {
    /// Returns the field prime `P = 2^251 + 17 * 2^192 + 1`.
    pub fn prime() -> BigUint {
        PRIME.clone()
    }

    /// Parses a `0x`-prefixed hexadecimal string. Rejects values not in `[0, P)`.
    pub fn from_hex(hex: &str) -> Result<Self, FeltParseError> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let value = BigUint::from_str_radix(digits, 16)
            .map_err(|_| FeltParseError::InvalidCharacter)?;
        Self::try_from(value)
    }

    /// Parses a `0x`-prefixed hexadecimal string, panicking on malformed
    /// input. The range of the value is not checked; callers must guarantee
    /// it lies in `[0, P)`.
    pub fn from_hex_unchecked(hex: &str) -> Self {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        Self(BigUint::from_str_radix(digits, 16).expect("invalid hex string"))
    }

    /// Parses a decimal string. Rejects values not in `[0, P)`.
    pub fn from_dec_str(dec: &str) -> Result<Self, FeltParseError> {
        let value = BigUint::from_str_radix(dec, 10)
            .map_err(|_| FeltParseError::InvalidCharacter)?;
        Self::try_from(value)
    }

    /// Interprets 32 big-endian bytes as an integer, reduced modulo `P`.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        Self(BigUint::from_bytes_be(bytes) % &*PRIME)
    }

    /// Returns the value as 32 big-endian bytes.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let buffer = self.0.to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes[32 - buffer.len()..].copy_from_slice(&buffer);
        bytes
    }

    /// Returns the value as a [`BigUint`].
    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    /// Returns the value of the bit at `index`, counting from the least
    /// significant bit.
    pub fn bit(&self, index: u64) -> bool {
        self.0.bit(index)
    }

    /// Returns the minimal number of bits required to represent the value.
    pub fn bit_length(&self) -> u64 {
        self.0.bits()
    }

    /// Computes `self * rhs` modulo `modulus`. The product is taken over the
    /// integers first, so the result is exact even when it would not fit in
    /// the field.
    pub fn mul_mod(&self, rhs: &Felt, modulus: &Felt) -> Felt {
        Felt(field::mul_mod(&self.0, &rhs.0, &modulus.0))
    }

    /// Computes `self + rhs` modulo `modulus`.
    pub fn add_mod(&self, rhs: &Felt, modulus: &Felt) -> Felt {
        Felt(field::add_mod(&self.0, &rhs.0, &modulus.0))
    }

    /// Computes the multiplicative inverse of `self` modulo `modulus`, or
    /// `None` when no inverse exists.
    pub fn mod_inverse(&self, modulus: &Felt) -> Option<Felt> {
        field::inv_mod(&self.0, &modulus.0).map(Felt)
    }
}

impl TryFrom<BigUint> for Felt {
    type Error = FeltParseError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if value < *PRIME {
            Ok(Self(value))
        } else {
            Err(FeltParseError::ValueOutOfRange)
        }
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<usize> for Felt {
    fn from(value: usize) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for Felt {
    type Err = FeltParseError;

    // Hex with a `0x` prefix, plain decimal otherwise.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.starts_with("0x") || value.starts_with("0X") {
            Self::from_hex(value)
        } else {
            Self::from_dec_str(value)
        }
    }
}

impl Zero for Felt {
    fn zero() -> Self {
        Self(BigUint::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Felt {
    fn one() -> Self {
        Self(BigUint::one())
    }
}

impl Add for Felt {
    type Output = Felt;

    fn add(self, rhs: Felt) -> Felt {
        &self + &rhs
    }
}

impl Add for &Felt {
    type Output = Felt;

    fn add(self, rhs: &Felt) -> Felt {
        Felt(field::add_mod(&self.0, &rhs.0, &PRIME))
    }
}

impl Sub for &Felt {
    type Output = Felt;

    fn sub(self, rhs: &Felt) -> Felt {
        Felt(field::sub_mod(&self.0, &rhs.0, &PRIME))
    }
}

impl Mul for Felt {
    type Output = Felt;

    fn mul(self, rhs: Felt) -> Felt {
        &self * &rhs
    }
}

impl Mul for &Felt {
    type Output = Felt;

    fn mul(self, rhs: &Felt) -> Felt {
        Felt(field::mul_mod(&self.0, &rhs.0, &PRIME))
    }
}

impl Neg for &Felt {
    type Output = Felt;

    fn neg(self) -> Felt {
        if self.0.is_zero() {
            Felt::zero()
        } else {
            Felt(&*PRIME - &self.0)
        }
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
