/// Any failure from the external provider, passed through with context.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The gateway answered with an error payload.
    #[error("gateway error ({code}): {message}")]
    Gateway {
        /// Machine-readable gateway code.
        code: String,
        /// Human-readable message.
        message: String,
    },
    /// The response could not be decoded into the expected model.
    #[error("unexpected response: {0}")]
    Serialization(#[from] serde_json::Error),
}
