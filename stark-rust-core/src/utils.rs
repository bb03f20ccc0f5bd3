use core::fmt::{Display, Formatter, Result as FmtResult};

use sha3::{Digest, Keccak256};

use stark_rust_curve::Felt;

/// Errors when encoding a string as a field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStringError {
    /// The encoded value does not fit in `[0, P)`.
    ValueOutOfRange,
}

impl std::error::Error for EncodeStringError {}

impl Display for EncodeStringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ValueOutOfRange => write!(f, "encoded value out of field element range"),
        }
    }
}

/// A variant of Keccak-256 whose output always fits in a field element: the
/// digest is truncated to its 250 least significant bits.
pub fn keccak_250(data: &[u8]) -> Felt {
    let mut hash: [u8; 32] = Keccak256::digest(data).into();

    // Mask the 6 most significant bits
    hash[0] &= 0x03;

    Felt::from_bytes_be(&hash)
}

/// Derives the entry-point selector from a function name, defined as
/// `keccak_250` of its UTF-8 bytes.
pub fn get_selector_from_name(func_name: &str) -> Felt {
    keccak_250(func_name.as_bytes())
}

/// Encodes the UTF-8 bytes of a string as a big-endian field element, the
/// form chain identifiers and short strings take on the network.
pub fn utf8_str_to_felt(text: &str) -> Result<Felt, EncodeStringError> {
    let value = num_bigint::BigUint::from_bytes_be(text.as_bytes());
    Felt::try_from(value).map_err(|_| EncodeStringError::ValueOutOfRange)
}
