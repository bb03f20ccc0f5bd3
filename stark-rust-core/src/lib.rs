//! Core data structures and high-level crypto utilities for Cairo-based
//! rollup networks: hash folding, deterministic ECDSA wrappers, entry-point
//! selectors, chain identifiers and the wire types shared with providers.

#![deny(missing_docs)]

/// Chain identifiers as field elements.
pub mod chain_id;

/// High-level cryptography wrappers.
pub mod crypto;

/// Serialization adapters for field elements.
pub mod serde;

/// Wire types shared between the account layer and providers.
pub mod types;

/// Selector derivation and string conversions.
pub mod utils;
