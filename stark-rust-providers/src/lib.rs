//! The provider capability: the four gateway operations the account encoder
//! consumes. Transport is somebody else's problem; implementations map their
//! failures into [`ProviderError`] and hand back the wire models from
//! `stark-rust-core`.

#![deny(missing_docs)]

use async_trait::async_trait;

use stark_rust_core::types::{AddTransactionResult, BlockId, FeeEstimate, Felt, FunctionInvoke};

mod error;

pub use error::ProviderError;

/// Gateway operations consumed by the account layer.
///
/// The capability is passed explicitly wherever it is needed; nothing in
/// this workspace reaches for ambient context.
#[async_trait]
pub trait Provider {
    /// Returns the network chain identifier, e.g. `SN_MAIN`.
    async fn chain_id(&self) -> Result<String, ProviderError>;

    /// Returns the current nonce of the account at `address`.
    async fn account_nonce(&self, address: Felt) -> Result<Felt, ProviderError>;

    /// Submits a signed invocation.
    async fn invoke(&self, invoke: FunctionInvoke) -> Result<AddTransactionResult, ProviderError>;

    /// Prices a would-be invocation against the given block.
    async fn estimate_fee(
        &self,
        invoke: FunctionInvoke,
        block: BlockId,
    ) -> Result<FeeEstimate, ProviderError>;
}
