use num_bigint::BigUint;

use stark_rust_curve::{field, Felt};

/// Sum of two field elements over the integers, without reduction.
pub(crate) fn add_unbounded(augend: &Felt, addend: &Felt) -> BigUint {
    augend.to_biguint() + addend.to_biguint()
}

/// Reduces an unbounded intermediate modulo `modulus` and brings it back into
/// the field.
pub(crate) fn reduce_mod(value: &BigUint, modulus: &Felt) -> Felt {
    let reduced = value % modulus.to_biguint();
    Felt::try_from(reduced).expect("value reduced below a modulus that fits the field")
}

/// Computes `num * denom^-1` under `modulus` for unbounded intermediates.
/// Returns `None` when `denom` has no inverse.
pub(crate) fn div_mod_floor(num: &Felt, denom: &BigUint, modulus: &Felt) -> Option<Felt> {
    field::div_mod(&num.to_biguint(), denom, &modulus.to_biguint())
        .map(|value| Felt::try_from(value).expect("value reduced below a modulus that fits the field"))
}
