//! Hash function primitives.
//!
//! Provides SHA-256, double SHA-256, RIPEMD-160, Hash160, HMAC-SHA512 and
//! PBKDF2-HMAC-SHA512. These are thin wrappers over the RustCrypto
//! implementations; nothing here is hand-rolled.

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

use crate::PrimitivesError;

type HmacSha512 = Hmac<Sha512>;

/// PBKDF2 round count mandated by BIP-39.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 2048;

/// PBKDF2 output length used for BIP-39 seeds.
pub const DEFAULT_PBKDF2_OUTPUT_LEN: usize = 64;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// Computes SHA-256(SHA-256(data)). The first four bytes of this digest
/// form the Base58Check checksum.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// This is the payload of P2PKH and P2WPKH addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Compute HMAC-SHA512 of the input data with the given key.
///
/// # Arguments
/// * `key` - The HMAC key bytes.
/// * `data` - The message bytes to authenticate.
///
/// # Returns
/// A 64-byte HMAC-SHA512 tag, or `PrimitiveFailure` if the MAC
/// implementation rejects the key.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> Result<[u8; 64], PrimitivesError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| PrimitivesError::PrimitiveFailure(format!("HMAC-SHA512 key: {}", e)))?;
    mac.update(data);
    let result = mac.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result.into_bytes());
    Ok(output)
}

/// Run PBKDF2 with HMAC-SHA512 as the pseudo-random function.
///
/// # Arguments
/// * `password` - The password bytes.
/// * `salt` - The salt bytes.
/// * `iterations` - Number of rounds; must be non-zero.
/// * `output_len` - Number of output bytes; must be non-zero.
///
/// # Returns
/// The derived key bytes, or `PrimitiveFailure` for rejected parameters.
pub fn pbkdf2_sha512(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>, PrimitivesError> {
    if iterations == 0 {
        return Err(PrimitivesError::PrimitiveFailure(
            "PBKDF2 iteration count must be non-zero".to_string(),
        ));
    }
    if output_len == 0 {
        return Err(PrimitivesError::PrimitiveFailure(
            "PBKDF2 output length must be non-zero".to_string(),
        ));
    }
    let mut output = vec![0u8; output_len];
    pbkdf2::pbkdf2::<HmacSha512>(password, salt, iterations, &mut output)
        .map_err(|e| PrimitivesError::PrimitiveFailure(format!("PBKDF2-HMAC-SHA512: {}", e)))?;
    Ok(output)
}
