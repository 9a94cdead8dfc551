//! Wallet Import Format (WIF) encoding of raw private keys.
//!
//! A WIF string is `check_encode(version || key || [0x01])`, where the
//! trailing 0x01 marks that the matching public key is serialized in
//! compressed form. Operates on raw bytes so that keys which are not
//! valid secp256k1 scalars can still be exported.

use crate::base58::{check_decode, check_encode};
use crate::PrimitivesError;

/// Length of a raw private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Mainnet WIF version byte.
pub const MAINNET_PREFIX: u8 = 0x80;

/// Testnet/regtest WIF version byte.
pub const TESTNET_PREFIX: u8 = 0xef;

/// Compression flag byte appended for compressed public keys.
pub const COMPRESS_MAGIC: u8 = 0x01;

/// The parts of a decoded WIF string.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedWif {
    /// Network version byte.
    pub version: u8,
    /// The 32-byte private key.
    pub key: [u8; PRIVATE_KEY_LEN],
    /// Whether the compression flag was present.
    pub compressed: bool,
}

impl std::fmt::Debug for DecodedWif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedWif")
            .field("version", &self.version)
            .field("key", &"<redacted>")
            .field("compressed", &self.compressed)
            .finish()
    }
}

/// Encode a raw private key as a WIF string.
///
/// # Arguments
/// * `private_key` - Exactly 32 key bytes.
/// * `version` - Network version byte (0x80 mainnet, 0xef testnet/regtest).
/// * `compressed` - Append the compression flag.
///
/// # Returns
/// The Base58Check WIF string, or `InvalidKeyLength` if the key is not 32 bytes.
pub fn encode(
    private_key: &[u8],
    version: u8,
    compressed: bool,
) -> Result<String, PrimitivesError> {
    let key: &[u8; PRIVATE_KEY_LEN] = private_key.try_into().map_err(|_| {
        PrimitivesError::InvalidKeyLength {
            expected: PRIVATE_KEY_LEN,
            got: private_key.len(),
        }
    })?;
    Ok(encode_key(key, version, compressed))
}

/// Encode a fixed-size private key as a WIF string.
pub fn encode_key(key: &[u8; PRIVATE_KEY_LEN], version: u8, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1);
    payload.push(version);
    payload.extend_from_slice(key);
    if compressed {
        payload.push(COMPRESS_MAGIC);
    }
    check_encode(&payload)
}

/// Decode a WIF string, verifying its checksum and layout.
///
/// Accepts both the 33-byte (uncompressed) and 34-byte (compressed)
/// payload forms. The version byte is returned as-is; callers decide
/// which networks they accept.
pub fn decode(wif: &str) -> Result<DecodedWif, PrimitivesError> {
    let payload = check_decode(wif).map_err(|e| match e {
        PrimitivesError::ChecksumMismatch => PrimitivesError::ChecksumMismatch,
        other => PrimitivesError::InvalidWif(other.to_string()),
    })?;

    let compressed = match payload.len() {
        34 => {
            if payload[33] != COMPRESS_MAGIC {
                return Err(PrimitivesError::InvalidWif(
                    "malformed private key: invalid compression flag".to_string(),
                ));
            }
            true
        }
        33 => false,
        n => {
            return Err(PrimitivesError::InvalidWif(format!(
                "malformed private key: invalid payload length {}",
                n
            )));
        }
    };

    let mut key = [0u8; PRIVATE_KEY_LEN];
    key.copy_from_slice(&payload[1..1 + PRIVATE_KEY_LEN]);
    Ok(DecodedWif {
        version: payload[0],
        key,
        compressed,
    })
}
