//! secp256k1 private key with WIF import/export.
//!
//! Wraps a k256 signing key, so every value of this type is a valid
//! non-zero scalar below the curve order.

use std::fmt;

use k256::ecdsa::SigningKey;

use crate::ec::public_key::PublicKey;
use crate::wif::{self, PRIVATE_KEY_LEN};
use crate::PrimitivesError;

/// A validated secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// `InvalidKeyLength` for a wrong-sized buffer, or `InvalidPrivateKey`
    /// if the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a 64-character hexadecimal string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Create a private key from a WIF string of any network.
    ///
    /// # Returns
    /// The key together with its version byte and compression flag.
    pub fn from_wif(wif_str: &str) -> Result<(Self, wif::DecodedWif), PrimitivesError> {
        let decoded = wif::decode(wif_str)?;
        let key = Self::from_bytes(&decoded.key)?;
        Ok((key, decoded))
    }

    /// Encode as a WIF string with a custom network prefix.
    ///
    /// # Arguments
    /// * `prefix` - The network prefix byte (0x80 for mainnet, 0xef for testnet).
    /// * `compressed` - Append the compression flag byte.
    pub fn to_wif_prefix(&self, prefix: u8, compressed: bool) -> String {
        wif::encode_key(&self.to_bytes(), prefix, compressed)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        let mut out = [0u8; PRIVATE_KEY_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
