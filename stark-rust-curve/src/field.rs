//! Modular big-integer primitives.
//!
//! Every function takes an explicit modulus and returns a fully reduced,
//! non-negative value. The arithmetic is variable-time; the signature scheme
//! built on top of it does not require constant-time discipline.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

/// Computes `(a + b) mod m`.
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Computes `(a - b) mod m`.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Computes `(a * b) mod m`. The product is taken over the integers first.
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Computes `base^exponent mod m` by square-and-multiply.
pub fn pow_mod(base: &BigUint, exponent: &BigUint, m: &BigUint) -> BigUint {
    base.modpow(exponent, m)
}

/// Computes the multiplicative inverse of `a` modulo `m` with the extended
/// Euclidean algorithm. Returns `None` when `gcd(a, m) != 1`.
pub fn inv_mod(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = BigInt::from(a % m);
    let m = BigInt::from(m.clone());

    let extended = a.extended_gcd(&m);
    if !extended.gcd.is_one() {
        return None;
    }

    extended.x.mod_floor(&m).to_biguint()
}

/// Computes `num * denom^-1 mod m`. Returns `None` when `denom` has no
/// inverse modulo `m`.
pub fn div_mod(num: &BigUint, denom: &BigUint, m: &BigUint) -> Option<BigUint> {
    inv_mod(denom, m).map(|inverse| (num * inverse) % m)
}
