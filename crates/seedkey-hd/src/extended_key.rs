//! Master and child extended private keys.
//!
//! An [`ExtendedKey`] is a 32-byte private key plus a 32-byte chain code.
//! The master key comes from `HMAC-SHA512("Bitcoin seed", seed)`; each child
//! comes from `HMAC-SHA512(parent.chain_code, data || index)`, where the
//! left half of the MAC yields the child key and the right half its chain
//! code. How `data` is built and how the left half becomes a key is
//! selected by [`DerivationMode`].

use std::fmt;

use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use serde::{Deserialize, Serialize};
use seedkey_primitives::ec::{PrivateKey, PublicKey};
use seedkey_primitives::hash::sha512_hmac;
use seedkey_primitives::wif;

use crate::path::ChildNumber;
use crate::HdError;

/// HMAC key for master key generation.
pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// How child keys are computed from the HMAC output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationMode {
    /// Reproduces the output of older tooling: every step hashes
    /// `0x00 || parent.key || index` (hardened bit only set when the step is
    /// hardened), the raw left half becomes the child key, and no range
    /// checks are made. Non-hardened steps are not BIP-32 compatible.
    Legacy,
    /// BIP-32 `CKDpriv`: non-hardened steps hash the compressed parent
    /// public key and the child key is `(IL + parent) mod n`.
    #[default]
    Bip32,
}

/// An extended private key: key material, chain code and position.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
    depth: u8,
    child_number: Option<ChildNumber>,
}

impl ExtendedKey {
    /// Assemble an extended key from raw parts.
    pub fn new(
        key: [u8; 32],
        chain_code: [u8; 32],
        depth: u8,
        child_number: Option<ChildNumber>,
    ) -> Self {
        ExtendedKey {
            key,
            chain_code,
            depth,
            child_number,
        }
    }

    /// The raw 32-byte private key.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Number of derivation steps from the master key (0 for the master).
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The step that produced this key, `None` for the master.
    pub fn child_number(&self) -> Option<ChildNumber> {
        self.child_number
    }

    /// The key as a validated secp256k1 private key.
    ///
    /// Keys produced in [`DerivationMode::Legacy`] are not range checked,
    /// so this can fail for them.
    pub fn private_key(&self) -> Result<PrivateKey, HdError> {
        Ok(PrivateKey::from_bytes(&self.key)?)
    }

    /// The public key for this extended key.
    pub fn public_key(&self) -> Result<PublicKey, HdError> {
        Ok(self.private_key()?.pub_key())
    }

    /// WIF-encode the key with an explicit version byte.
    ///
    /// Works on the raw bytes, so it never fails.
    pub fn to_wif(&self, version: u8, compressed: bool) -> String {
        wif::encode_key(&self.key, version, compressed)
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("key", &"<redacted>")
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .finish()
    }
}

/// Derive the master extended key from a seed.
///
/// # Arguments
/// * `seed` - Seed bytes, normally the 64-byte BIP-39 seed.
/// * `mode` - In [`DerivationMode::Bip32`] a left half of zero or not below
///   the curve order is rejected.
///
/// # Returns
/// The master key at depth 0, or `InvalidMasterKey`.
pub fn derive_master(seed: &[u8], mode: DerivationMode) -> Result<ExtendedKey, HdError> {
    let mac = sha512_hmac(MASTER_HMAC_KEY, seed)?;
    let (il, ir) = split_mac(&mac);

    if mode == DerivationMode::Bip32 && nonzero_scalar(&il).is_none() {
        return Err(HdError::InvalidMasterKey);
    }

    tracing::debug!(?mode, "derived master key");
    Ok(ExtendedKey::new(il, ir, 0, None))
}

/// Derive one child of `parent`.
///
/// # Arguments
/// * `parent` - The parent extended key.
/// * `step` - Child index and hardened flag.
/// * `mode` - Derivation rule, see [`DerivationMode`].
///
/// # Returns
/// The child at `parent.depth() + 1`, or `InvalidChildKey` when the
/// BIP-32 result falls outside the valid key range.
pub fn derive_child(
    parent: &ExtendedKey,
    step: ChildNumber,
    mode: DerivationMode,
) -> Result<ExtendedKey, HdError> {
    let depth = parent
        .depth
        .checked_add(1)
        .ok_or_else(|| HdError::InvalidPath("derivation depth exceeds 255".to_string()))?;

    let mut data = Vec::with_capacity(37);
    if step.is_hardened() || mode == DerivationMode::Legacy {
        if !step.is_hardened() {
            tracing::warn!(
                depth,
                index = step.index(),
                "legacy mode derives non-hardened step from the private key"
            );
        }
        data.push(0x00);
        data.extend_from_slice(&parent.key);
    } else {
        let parent_key =
            PrivateKey::from_bytes(&parent.key).map_err(|_| HdError::InvalidChildKey)?;
        data.extend_from_slice(&parent_key.pub_key().to_compressed());
    }
    data.extend_from_slice(&step.to_be_bytes());

    let mac = sha512_hmac(&parent.chain_code, &data)?;
    let (il, ir) = split_mac(&mac);

    let key = match mode {
        DerivationMode::Legacy => il,
        DerivationMode::Bip32 => add_scalars(&il, &parent.key)?,
    };

    tracing::debug!(
        depth,
        index = step.index(),
        hardened = step.is_hardened(),
        "derived child key"
    );
    Ok(ExtendedKey::new(key, ir, depth, Some(step)))
}

fn split_mac(mac: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut il = [0u8; 32];
    let mut ir = [0u8; 32];
    il.copy_from_slice(&mac[..32]);
    ir.copy_from_slice(&mac[32..]);
    (il, ir)
}

/// Parse 32 big-endian bytes as a scalar; `None` when not below n.
fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
    Option::from(Scalar::from_repr(FieldBytes::from(*bytes)))
}

fn nonzero_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    scalar_from_bytes(bytes).filter(|s| !bool::from(s.is_zero()))
}

/// `(tweak + parent) mod n`, rejecting `tweak >= n` and a zero sum.
fn add_scalars(tweak: &[u8; 32], parent: &[u8; 32]) -> Result<[u8; 32], HdError> {
    let tweak = scalar_from_bytes(tweak).ok_or(HdError::InvalidChildKey)?;
    let parent = nonzero_scalar(parent).ok_or(HdError::InvalidChildKey)?;
    let child = tweak + parent;
    if bool::from(child.is_zero()) {
        return Err(HdError::InvalidChildKey);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&child.to_bytes());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_hex(k: &ExtendedKey) -> (String, String) {
        (hex::encode(k.key()), hex::encode(k.chain_code()))
    }

    fn step(s: &str) -> ChildNumber {
        s.parse().unwrap()
    }

    // ---- master key ----

    #[test]
    fn test_zero_seed_master() {
        let master = derive_master(&[0u8; 64], DerivationMode::Legacy).unwrap();
        assert_eq!(
            key_hex(&master),
            (
                "eafd15702fca3f80beb565e66f19e20bbad0a34b46bb12075cbf1c5d94bb27d2".to_string(),
                "cda6a96b8a91317d82fa5c6353562cd530761cf1eec6e13cfa3858b0b130b0bd".to_string(),
            )
        );
        assert_eq!(master.depth(), 0);
        assert!(master.child_number().is_none());
        assert_eq!(master, derive_master(&[0u8; 64], DerivationMode::Bip32).unwrap());
    }

    #[test]
    fn test_bip32_vector1_master() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = derive_master(&seed, DerivationMode::Bip32).unwrap();
        assert_eq!(
            key_hex(&master),
            (
                "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35".to_string(),
                "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508".to_string(),
            )
        );
        assert_eq!(
            master.public_key().unwrap().to_hex(),
            "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2"
        );
    }

    // ---- BIP-32 test vector 1 ----

    #[test]
    fn test_bip32_vector1_chain() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let mut key = derive_master(&seed, DerivationMode::Bip32).unwrap();
        let expected = [
            (
                "0'",
                "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea",
                "47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141",
            ),
            (
                "1",
                "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368",
                "2a7857631386ba23dacac34180dd1983734e444fdbf774041578e9b6adb37c19",
            ),
            (
                "2'",
                "cbce0d719ecf7431d88e6a89fa1483e02e35092af60c042b1df2ff59fa424dca",
                "04466b9cc8e161e966409ca52986c584f07e9dc81f735db683c3ff6ec7b1503f",
            ),
            (
                "2",
                "0f479245fb19a38a1954c5c7c0ebab2f9bdfd96a17563ef28a6a4b1a2a764ef4",
                "cfb71883f01676f587d023cc53a35bc7f88f724b1f8c2892ac1275ac822a3edd",
            ),
            (
                "1000000000",
                "471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8",
                "c783e67b921d2beb8f6b389cc646d7263b4145701dadd2161548a8b078e65e9e",
            ),
        ];
        for (depth, (s, k, c)) in expected.iter().enumerate() {
            key = derive_child(&key, step(s), DerivationMode::Bip32).unwrap();
            assert_eq!(key_hex(&key), (k.to_string(), c.to_string()), "step {}", s);
            assert_eq!(key.depth() as usize, depth + 1);
            assert_eq!(key.child_number(), Some(step(s)));
        }
    }

    // ---- legacy mode ----

    #[test]
    fn test_legacy_hardened_step_matches_bip32_chain_code() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let legacy = derive_master(&seed, DerivationMode::Legacy).unwrap();
        let bip32 = derive_master(&seed, DerivationMode::Bip32).unwrap();
        let a = derive_child(&legacy, step("0'"), DerivationMode::Legacy).unwrap();
        let b = derive_child(&bip32, step("0'"), DerivationMode::Bip32).unwrap();
        // Same HMAC input; only the key arithmetic differs.
        assert_eq!(a.chain_code(), b.chain_code());
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_legacy_non_hardened_step() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = derive_master(&seed, DerivationMode::Legacy).unwrap();
        let m0h = derive_child(&master, step("0'"), DerivationMode::Legacy).unwrap();
        let m0h1 = derive_child(&m0h, step("1"), DerivationMode::Legacy).unwrap();
        assert_eq!(
            key_hex(&m0h1),
            (
                "51d8cf76138b082bedba5083d43a3d753dc65ba8fd6a687956df6e84e6d8bfc0".to_string(),
                "147de8447ab340409ccdbe1e560644a0f887810e38d33c0932a31bdcc9dfe47f".to_string(),
            )
        );
    }

    #[test]
    fn test_legacy_accepts_out_of_range_parent() {
        for bytes in [[0u8; 32], [0xffu8; 32]] {
            let parent = ExtendedKey::new(bytes, [7u8; 32], 0, None);
            assert!(derive_child(&parent, step("0'"), DerivationMode::Legacy).is_ok());
            assert!(derive_child(&parent, step("0"), DerivationMode::Legacy).is_ok());
            assert!(matches!(
                derive_child(&parent, step("0'"), DerivationMode::Bip32),
                Err(HdError::InvalidChildKey)
            ));
            assert!(matches!(
                derive_child(&parent, step("0"), DerivationMode::Bip32),
                Err(HdError::InvalidChildKey)
            ));
        }
    }

    // ---- properties ----

    #[test]
    fn test_hardened_and_normal_siblings_differ() {
        let master = derive_master(&[1u8; 64], DerivationMode::Bip32).unwrap();
        let hardened = derive_child(&master, step("5'"), DerivationMode::Bip32).unwrap();
        let normal = derive_child(&master, step("5"), DerivationMode::Bip32).unwrap();
        assert_ne!(hardened.key(), normal.key());
        assert_ne!(hardened.chain_code(), normal.chain_code());
    }

    #[test]
    fn test_depth_overflow() {
        let parent = ExtendedKey::new([1u8; 32], [0u8; 32], u8::MAX, None);
        assert!(matches!(
            derive_child(&parent, step("0'"), DerivationMode::Legacy),
            Err(HdError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_to_wif_and_debug() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let key = ExtendedKey::new(bytes, [0u8; 32], 0, None);
        assert_eq!(
            key.to_wif(wif::MAINNET_PREFIX, true),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
        let debug = format!("{:?}", key);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("0000000000000001"));
    }

    #[test]
    fn test_mode_serde() {
        assert_eq!(serde_json::to_string(&DerivationMode::Legacy).unwrap(), "\"legacy\"");
        let mode: DerivationMode = serde_json::from_str("\"bip32\"").unwrap();
        assert_eq!(mode, DerivationMode::default());
    }
}
