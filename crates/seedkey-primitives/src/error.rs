/// Unified error type for all primitives operations.
///
/// Covers errors from hashing, encoding, and key handling.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// The underlying hash/MAC/KDF implementation rejected its inputs.
    #[error("cryptographic primitive failure: {0}")]
    PrimitiveFailure(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
