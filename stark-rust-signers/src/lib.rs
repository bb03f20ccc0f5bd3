//! STARK curve key pairs with scoped private material.
//!
//! A [`SigningKey`] owns the secret scalar; it is deliberately not `Clone`
//! and its bytes are wiped on drop. Accounts derive their public point from
//! it instead of accepting arbitrary coordinates.

#![deny(missing_docs)]

mod key_pair;

pub use key_pair::{KeyError, SigningKey, VerifyingKey};
