use once_cell::sync::Lazy;

use stark_rust_curve::Felt;

/// The chain identifier for the main network. A short string encoding of
/// `SN_MAIN`.
pub static MAINNET: Lazy<Felt> = Lazy::new(|| Felt::from_hex_unchecked("0x534e5f4d41494e"));

/// The chain identifier for the Goerli test network. A short string encoding
/// of `SN_GOERLI`.
pub static TESTNET: Lazy<Felt> = Lazy::new(|| Felt::from_hex_unchecked("0x534e5f474f45524c49"));
