/// Error types for key derivation and the derivation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum HdError {
    /// Child index is 2^31 or larger before the hardened bit is applied.
    #[error("invalid derivation index {0}: must be below 2^31")]
    InvalidDerivationIndex(u32),
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
    #[error("seed produced an invalid master key")]
    InvalidMasterKey,
    #[error("derivation produced an invalid child key")]
    InvalidChildKey,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("primitives error: {0}")]
    Primitives(#[from] seedkey_primitives::PrimitivesError),
    #[error("address error: {0}")]
    Address(#[from] seedkey_address::AddressError),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
