use once_cell::sync::Lazy;

use stark_rust_core::crypto::hash_elements;
use stark_rust_core::types::{Call, Felt};
use stark_rust_core::utils::get_selector_from_name;
use stark_rust_crypto::PedersenError;

/// Cairo string for "invoke"
static PREFIX_INVOKE: Lazy<Felt> = Lazy::new(|| Felt::from_hex_unchecked("0x696e766f6b65"));

/// Selector of the account contract's batching entrypoint.
pub static EXECUTE_SELECTOR: Lazy<Felt> = Lazy::new(|| get_selector_from_name("__execute__"));

/// Version tag folded into every transaction hash.
pub const TRANSACTION_VERSION: u64 = 0;

/// A batch of calls bound to a nonce and a fee cap, ready to be hashed and
/// signed.
#[derive(Debug, Clone)]
pub struct Execution {
    /// The calls executed atomically by the account contract.
    pub calls: Vec<Call>,
    /// The account nonce this batch consumes.
    pub nonce: Felt,
    /// The maximum fee the account agrees to pay.
    pub max_fee: Felt,
}

/// Flattens a batch of calls into the calldata accepted by `__execute__`.
///
/// The layout is consensus-critical:
///
/// ```markdown
/// [ n_calls,
///   (to, selector, data_offset, data_len) per call,
///   n_calldata, calldata...,
///   nonce ]
/// ```
///
/// `data_offset` counts the calldata elements accumulated before the call;
/// a call without calldata contributes the pair `0, 0`.
pub fn execute_calldata(calls: &[Call], nonce: &Felt) -> Vec<Felt> {
    let mut call_array = Vec::with_capacity(4 * calls.len());
    let mut flat_calldata = Vec::new();

    for call in calls {
        call_array.push(call.to.clone());
        call_array.push(call.selector.clone());

        if call.calldata.is_empty() {
            call_array.push(Felt::from(0u64));
            call_array.push(Felt::from(0u64));
            continue;
        }

        call_array.push(Felt::from(flat_calldata.len()));
        call_array.push(Felt::from(call.calldata.len()));
        flat_calldata.extend(call.calldata.iter().cloned());
    }

    let mut calldata = Vec::with_capacity(3 + call_array.len() + flat_calldata.len());
    calldata.push(Felt::from(calls.len()));
    calldata.extend(call_array);
    calldata.push(Felt::from(flat_calldata.len()));
    calldata.extend(flat_calldata);
    calldata.push(nonce.clone());

    calldata
}

impl Execution {
    /// Returns the flattened `__execute__` calldata for this batch.
    pub fn execute_calldata(&self) -> Vec<Felt> {
        execute_calldata(&self.calls, &self.nonce)
    }

    /// Computes the transaction hash of this batch for the given chain and
    /// account address.
    ///
    /// The hash folds exactly seven elements; in particular no trailing
    /// length element is appended, matching the account contract rather than
    /// older client implementations.
    pub fn transaction_hash(
        &self,
        chain_id: &Felt,
        address: &Felt,
    ) -> Result<Felt, PedersenError> {
        let calldata_hash = hash_elements(&self.execute_calldata())?;

        hash_elements(&[
            PREFIX_INVOKE.clone(),
            Felt::from(TRANSACTION_VERSION),
            address.clone(),
            EXECUTE_SELECTOR.clone(),
            calldata_hash,
            self.max_fee.clone(),
            chain_id.clone(),
        ])
    }
}
