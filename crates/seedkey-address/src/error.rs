/// Error types for address encoding and parsing.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid address length after Base58 decoding.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Version byte or HRP not recognized.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    /// The Base58Check checksum did not match.
    #[error("checksum mismatch")]
    EncodingChecksumFailed,

    /// A public key buffer had the wrong size for the requested address type.
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// Bech32 encoding or decoding failed.
    #[error("bech32 error: {0}")]
    Bech32(String),

    /// Unknown network name.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Error bubbled up from the primitives layer.
    #[error("primitives error: {0}")]
    Primitives(#[from] seedkey_primitives::PrimitivesError),
}
