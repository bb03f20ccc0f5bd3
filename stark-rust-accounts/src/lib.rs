//! Account abstraction over a provider: multicall calldata encoding,
//! transaction hashing and deterministic signing against the reference
//! account contract's `__execute__` entrypoint.

#![deny(missing_docs)]

mod account;
mod execution;

pub use account::{Account, AccountError};
pub use execution::{execute_calldata, Execution, EXECUTE_SELECTOR, TRANSACTION_VERSION};
