use serde::{Deserialize, Serialize};
use serde_with::serde_as;

pub use stark_rust_crypto::Signature;
pub use stark_rust_curve::{AffinePoint, Felt};

use crate::serde::UfeHex;

/// A contract call to be executed through an account's `__execute__`
/// entrypoint.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    /// Address of the contract being invoked.
    #[serde_as(as = "UfeHex")]
    pub to: Felt,
    /// Entrypoint selector of the function being invoked.
    #[serde_as(as = "UfeHex")]
    pub selector: Felt,
    /// List of calldata to be sent for the call.
    #[serde_as(as = "Vec<UfeHex>")]
    pub calldata: Vec<Felt>,
}

/// A signed invocation payload as submitted to the sequencer gateway.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInvoke {
    /// Address of the account contract.
    #[serde_as(as = "UfeHex")]
    pub contract_address: Felt,
    /// Selector of the account entrypoint, always `__execute__`.
    #[serde_as(as = "UfeHex")]
    pub entry_point_selector: Felt,
    /// The flattened execute calldata.
    #[serde_as(as = "Vec<UfeHex>")]
    pub calldata: Vec<Felt>,
    /// The `(r, s)` pair authorizing the invocation.
    #[serde_as(as = "Vec<UfeHex>")]
    pub signature: Vec<Felt>,
    /// The maximum fee the account agrees to pay.
    #[serde_as(as = "UfeHex")]
    pub max_fee: Felt,
}

/// Response to a submitted invocation.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTransactionResult {
    /// Gateway result code.
    #[serde(default)]
    pub code: Option<String>,
    /// Hash of the accepted transaction.
    #[serde_as(as = "UfeHex")]
    pub transaction_hash: Felt,
}

/// Price quote for a would-be invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeEstimate {
    /// The estimated fee.
    pub amount: u64,
    /// Unit the fee is denominated in.
    pub unit: String,
}

/// Block identifier for read queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    /// Block identified by its hash.
    Hash(Felt),
    /// Block identified by its number.
    Number(u64),
    /// The block currently being built.
    Pending,
    /// The latest closed block.
    Latest,
}
