//! BIP-39 seed derivation.
//!
//! Turns a mnemonic phrase and optional passphrase into the 64-byte seed
//! that feeds BIP-32 master key generation:
//! PBKDF2-HMAC-SHA512(password = mnemonic, salt = "mnemonic" + passphrase).
//!
//! The mnemonic is treated as an opaque phrase. Wordlist membership and the
//! embedded checksum are not validated.

use std::fmt;

use crate::hash::{pbkdf2_sha512, DEFAULT_PBKDF2_ITERATIONS};
use crate::PrimitivesError;

/// Prefix of the PBKDF2 salt; the passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed derived from a mnemonic phrase.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; Seed::LEN]);

impl Seed {
    /// Fixed byte length of a BIP-39 seed.
    pub const LEN: usize = 64;

    /// Wrap raw seed bytes, e.g. from a test vector.
    pub fn from_bytes(bytes: [u8; Seed::LEN]) -> Self {
        Seed(bytes)
    }

    /// Build a seed from a slice, which must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; Seed::LEN] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidKeyLength {
                expected: Seed::LEN,
                got: bytes.len(),
            }
        })?;
        Ok(Seed(arr))
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; Seed::LEN] {
        &self.0
    }

    /// Lowercase hex rendering of the seed.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Derive a BIP-39 seed with the standard 2048 PBKDF2 rounds.
///
/// # Arguments
/// * `mnemonic` - The mnemonic phrase, used verbatim as UTF-8.
/// * `passphrase` - Optional extra passphrase; pass `""` for none.
///
/// # Returns
/// The 64-byte seed. Deterministic for identical inputs.
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Result<Seed, PrimitivesError> {
    derive_seed_with_iterations(mnemonic, passphrase, DEFAULT_PBKDF2_ITERATIONS)
}

/// Derive a seed with a caller-chosen PBKDF2 round count.
///
/// Only 2048 rounds produce BIP-39 compatible seeds.
pub fn derive_seed_with_iterations(
    mnemonic: &str,
    passphrase: &str,
    iterations: u32,
) -> Result<Seed, PrimitivesError> {
    let salt = format!("{}{}", SALT_PREFIX, passphrase);
    let out = pbkdf2_sha512(mnemonic.as_bytes(), salt.as_bytes(), iterations, Seed::LEN)?;
    Seed::from_slice(&out)
}
