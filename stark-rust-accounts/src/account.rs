use num_traits::Zero;

use stark_rust_core::crypto::EcdsaSignError;
use stark_rust_core::types::{
    AddTransactionResult, BlockId, Call, FeeEstimate, Felt, FunctionInvoke, Signature,
};
use stark_rust_core::utils::{utf8_str_to_felt, EncodeStringError};
use stark_rust_crypto::PedersenError;
use stark_rust_providers::{Provider, ProviderError};
use stark_rust_signers::{SigningKey, VerifyingKey};

use crate::execution::{Execution, EXECUTE_SELECTOR};

/// Errors raised while preparing, signing or submitting an execution.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// The transaction hash could not be signed.
    #[error("signing error: {0}")]
    Signing(#[from] EcdsaSignError),
    /// The transaction could not be hashed.
    #[error("hashing error: {0}")]
    Hashing(#[from] PedersenError),
    /// The provider reported a chain identifier that is not a short string.
    #[error("invalid chain id: {0}")]
    ChainId(#[from] EncodeStringError),
}

/// An account on the network: an address, a signing key and the provider
/// used to resolve nonces and submit transactions.
///
/// The public point is always derived from the private scalar at
/// construction, never supplied by the caller.
#[derive(Debug)]
pub struct Account<P> {
    provider: P,
    address: Felt,
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl<P> Account<P> {
    /// Creates a new account from a signing key, deriving the public point.
    pub fn new(signing_key: SigningKey, address: Felt, provider: P) -> Self {
        let verifying_key = signing_key.verifying_key();
        Self {
            provider,
            address,
            signing_key,
            verifying_key,
        }
    }

    /// Returns the account address.
    pub fn address(&self) -> &Felt {
        &self.address
    }

    /// Returns the account's public key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Signs a transaction hash with the account's key.
    pub fn sign_hash(&self, hash: &Felt) -> Result<Signature, AccountError> {
        Ok(self.signing_key.sign(hash)?)
    }
}

impl<P> Account<P>
where
    P: Provider + Sync,
{
    /// Executes a batch of calls through the account contract, signing with
    /// the account's key and submitting to the provider.
    pub async fn execute(
        &self,
        max_fee: &Felt,
        calls: Vec<Call>,
    ) -> Result<AddTransactionResult, AccountError> {
        let invoke = self.function_invoke(max_fee, calls).await?;
        Ok(self.provider.invoke(invoke).await?)
    }

    /// Prices a batch of calls. The probe is built with a zero fee cap, the
    /// same way it would later be executed.
    pub async fn estimate_fee(&self, calls: Vec<Call>) -> Result<FeeEstimate, AccountError> {
        let invoke = self.function_invoke(&Felt::zero(), calls).await?;
        Ok(self
            .provider
            .estimate_fee(invoke, BlockId::Pending)
            .await?)
    }

    /// Computes the transaction hash for a batch of calls under the given
    /// nonce and fee cap. The chain identifier is fetched from the provider;
    /// the hash itself is computed synchronously.
    pub async fn transaction_hash(
        &self,
        max_fee: &Felt,
        nonce: &Felt,
        calls: Vec<Call>,
    ) -> Result<Felt, AccountError> {
        let chain_id = self.chain_id().await?;
        let execution = Execution {
            calls,
            nonce: nonce.clone(),
            max_fee: max_fee.clone(),
        };
        Ok(execution.transaction_hash(&chain_id, &self.address)?)
    }

    async fn chain_id(&self) -> Result<Felt, AccountError> {
        Ok(utf8_str_to_felt(&self.provider.chain_id().await?)?)
    }

    async fn function_invoke(
        &self,
        max_fee: &Felt,
        calls: Vec<Call>,
    ) -> Result<FunctionInvoke, AccountError> {
        let chain_id = self.chain_id().await?;
        let nonce = self.provider.account_nonce(self.address.clone()).await?;

        let execution = Execution {
            calls,
            nonce,
            max_fee: max_fee.clone(),
        };
        let hash = execution.transaction_hash(&chain_id, &self.address)?;
        let signature = self.signing_key.sign(&hash)?;

        Ok(FunctionInvoke {
            contract_address: self.address.clone(),
            entry_point_selector: EXECUTE_SELECTOR.clone(),
            calldata: execution.execute_calldata(),
            signature: vec![signature.r, signature.s],
            max_fee: max_fee.clone(),
        })
    }
}
