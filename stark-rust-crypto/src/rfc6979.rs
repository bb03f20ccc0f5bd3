use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;

use stark_rust_curve::curve_params::EC_ORDER;
use stark_rust_curve::Felt;

type HmacSha256 = Hmac<Sha256>;

/// Bit size of the curve order; candidate nonces are drawn from this many
/// leading bits of each HMAC output block.
const ORDER_BITS: u64 = 252;

/// Byte length of serialized integers (`rolen`), equal to the SHA-256 output
/// length (`holen`).
const ROLEN: usize = 32;

/// Deterministically generate an ephemeral scalar `k` based on RFC 6979,
/// strictly in `(0, N)`.
///
/// Message hashes close to the field size are first shifted left by four
/// bits, compensating for the 252-bit field inside byte-aligned HMAC blocks;
/// the shift is part of the scheme's definition. A positive `seed`
/// contributes its minimal big-endian bytes as extra entropy, which the
/// signing loop uses to move past rejected nonces.
///
/// ### Parameters
///
/// - `message_hash`: The message hash.
/// - `private_key`: The private key.
/// - `seed`: The extra entropy, if any.
pub fn generate_k(message_hash: &Felt, private_key: &Felt, seed: Option<&Felt>) -> Felt {
    let order = EC_ORDER.to_biguint();

    let mut message = message_hash.to_biguint();
    let bit_length = message.bits();
    if bit_length >= 248 && bit_length % 8 <= 4 {
        message <<= 4;
    }

    let message_octets = int_to_octets(&message);
    let key_octets = int_to_octets(&private_key.to_biguint());
    let hash_octets = bits_to_octets(&message_octets, &order);
    let seed_octets = match seed {
        Some(seed) if !seed.is_zero() => seed.to_biguint().to_bytes_be(),
        _ => Vec::new(),
    };

    let mut key = [0x00u8; ROLEN];
    let mut value = [0x01u8; ROLEN];

    key = mac(&key, &[&value, &[0x00], &key_octets, &hash_octets, &seed_octets]);
    value = mac(&key, &[&value]);
    key = mac(&key, &[&value, &[0x01], &key_octets, &hash_octets, &seed_octets]);
    value = mac(&key, &[&value]);

    loop {
        value = mac(&key, &[&value]);

        let candidate = bits_to_int(&value);
        if !candidate.is_zero() && candidate < order {
            return Felt::try_from(candidate).expect("k is below the curve order");
        }

        key = mac(&key, &[&value, &[0x00]]);
        value = mac(&key, &[&value]);
    }
}

fn mac(key: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

// Leftmost 252 bits of the octet string, per RFC 6979 section 2.3.2.
fn bits_to_int(octets: &[u8]) -> BigUint {
    let value = BigUint::from_bytes_be(octets);
    let bit_length = octets.len() as u64 * 8;
    if bit_length > ORDER_BITS {
        value >> (bit_length - ORDER_BITS)
    } else {
        value
    }
}

// RFC 6979 section 2.3.4: bring the truncated value under the order, then
// serialize to `rolen` bytes.
fn bits_to_octets(octets: &[u8], order: &BigUint) -> [u8; ROLEN] {
    let z1 = bits_to_int(octets);
    let z2 = if z1 >= *order { z1 - order } else { z1 };
    int_to_octets(&z2)
}

fn int_to_octets(value: &BigUint) -> [u8; ROLEN] {
    let buffer = value.to_bytes_be();
    let mut octets = [0u8; ROLEN];
    octets[ROLEN - buffer.len()..].copy_from_slice(&buffer);
    octets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_k_deterministic() {
        let message_hash = Felt::from_hex_unchecked(
            "0x010b559a3b4dc1b7137d90521cb413b397ff07963214d128a92d65aec7182f68",
        );
        let private_key = Felt::from_hex_unchecked(
            "0x07e3184f4bef18f371bc53fc412dff1b30dbc94f758490fb8e2349bae647a642",
        );

        let first = generate_k(&message_hash, &private_key, None);
        let second = generate_k(&message_hash, &private_key, None);

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_k_in_range() {
        for seed in 0u64..8 {
            let k = generate_k(
                &Felt::from(0xdeadbeefu64),
                &Felt::from(0x1234u64),
                Some(&Felt::from(seed)),
            );
            assert!(!k.is_zero());
            assert!(k < *EC_ORDER);
        }
    }

    #[test]
    fn test_generate_k_seed_changes_output() {
        let message_hash = Felt::from(0x2u64);
        let private_key = Felt::from(0x1u64);

        let unseeded = generate_k(&message_hash, &private_key, None);
        let seeded = generate_k(&message_hash, &private_key, Some(&Felt::from(1u64)));

        assert_ne!(unseeded, seeded);
    }

    #[test]
    fn test_generate_k_zero_seed_matches_no_seed() {
        let message_hash = Felt::from(0x2u64);
        let private_key = Felt::from(0x1u64);

        assert_eq!(
            generate_k(&message_hash, &private_key, None),
            generate_k(&message_hash, &private_key, Some(&Felt::zero())),
        );
    }
}
