//! Low-level cryptography utilities for Cairo-based rollup networks. Features
//! include:
//!
//! - ECDSA operations
//!   - [Signing hashes](fn.sign)
//!   - [Verifying signatures](fn.verify)
//! - [Pedersen hash](fn.pedersen_hash)
//! - [RFC-6979](fn.rfc6979_generate_k)
//!
//! # Warning
//!
//! You're advised to use high-level crypto utilities implemented by the
//! `stark-rust-core` crate if you're not familiar with cryptographic
//! primitives. Using these low-level functions incorrectly could result in
//! catastrophic consequences like leaking your private key.

#![deny(missing_docs)]

mod ecdsa;
mod error;
mod fe_utils;
mod pedersen_hash;
mod pedersen_points;
mod rfc6979;

pub use stark_rust_curve::Felt;

pub use pedersen_hash::{pedersen_hash, PedersenParams};

pub use ecdsa::{get_public_key, sign, verify, Signature};

pub use crate::rfc6979::generate_k as rfc6979_generate_k;

pub use error::{PedersenError, SignError, VerifyError};
