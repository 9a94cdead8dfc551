//! Base58 encoding and decoding with optional checksum support.
//!
//! Raw Base58 treats its input as one big-endian unsigned integer and
//! preserves leading zero bytes as leading '1' characters. Base58Check
//! appends the first four bytes of SHA-256d(payload) and is the single
//! envelope shared by WIF private keys and P2PKH addresses.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Bitcoin's Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters. Empty input
/// encodes to the empty string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `InvalidCharacter` naming the first
/// character outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| map_decode_error(s, e))
}

/// Encode a payload with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The result is `encode(data || sha256d(data)[..4])`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

fn map_decode_error(input: &str, err: bs58::decode::Error) -> PrimitivesError {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            PrimitivesError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            // bs58 reports a byte offset; recover the offending char from it.
            let character = input
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            PrimitivesError::InvalidCharacter { character, index }
        }
        other => PrimitivesError::InvalidBase58(other.to_string()),
    }
}
