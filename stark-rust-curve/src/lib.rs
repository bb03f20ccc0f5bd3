//! Field element and elliptic curve arithmetic for the STARK curve. Features include:
//!
//! - [`Felt`], a field element of the 252-bit STARK prime field
//! - [Modular big-integer primitives](mod@field)
//! - [`AffinePoint`] with full addition, doubling and scalar multiplication
//! - [The AIR-shaped multiplication ladder](fn.mimic_ec_mult_air) used by
//!   in-circuit signature verification
//! - [Curve parameters](mod@curve_params)
//!
//! # Warning
//!
//! You're advised to use high-level crypto utilities implemented by the
//! `stark-rust-core` crate if you're not familiar with cryptographic
//! primitives. Using these low-level functions incorrectly could result in
//! catastrophic consequences like leaking your private key.

#![deny(missing_docs)]

pub mod curve_params;
mod error;
mod felt;
pub mod field;
mod point;

pub use error::{FeltParseError, MimicEcMultError};
pub use felt::Felt;
pub use point::{mimic_ec_mult_air, AffinePoint};
