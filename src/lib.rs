//! Client library for Cairo-based rollup networks.
//!
//! This meta-crate re-exports the workspace members:
//!
//! - [`curve`]: field element and STARK curve arithmetic
//! - [`crypto`]: Pedersen hash, RFC 6979 and ECDSA primitives
//! - [`signers`]: key pairs with scoped private material
//! - [`core`]: high-level crypto wrappers, selectors and wire types
//! - [`providers`]: the gateway capability trait
//! - [`accounts`]: multicall encoding, hashing and signing

#![deny(missing_docs)]

/// Account abstraction.
pub mod accounts {
    pub use stark_rust_accounts::*;
}

/// Core data structures and crypto wrappers.
pub mod core {
    pub use stark_rust_core::*;
}

/// Low-level cryptography.
pub mod crypto {
    pub use stark_rust_crypto::*;
}

/// Field and curve arithmetic.
pub mod curve {
    pub use stark_rust_curve::*;
}

/// Provider capability.
pub mod providers {
    pub use stark_rust_providers::*;
}

/// Signers.
pub mod signers {
    pub use stark_rust_signers::*;
}
