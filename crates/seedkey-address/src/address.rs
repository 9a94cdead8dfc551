//! Bitcoin address handling.
//!
//! P2PKH addresses are `check_encode(version || hash160(pubkey))`; the
//! public key bytes are hashed exactly as supplied. P2WPKH addresses are
//! bech32 witness-v0 programs over the hash160 of a compressed key.

use std::fmt;

use bech32::{FromBase32, ToBase32, Variant};
use seedkey_primitives::base58;
use seedkey_primitives::ec::public_key::COMPRESSED_LEN;
use seedkey_primitives::hash::hash160;
use seedkey_primitives::PrimitivesError;

use crate::network::{Network, MAINNET_P2PKH, TESTNET_P2PKH};
use crate::AddressError;

/// Length of a decoded P2PKH payload: version + hash160.
const P2PKH_PAYLOAD_LEN: usize = 21;

/// Encode public key bytes as a Base58Check P2PKH address.
///
/// # Arguments
/// * `public_key` - Public key bytes (SEC1 or DER), hashed verbatim.
/// * `version` - Address version byte (0x00 mainnet, 0x6f testnet).
///
/// # Returns
/// The Base58Check address string.
pub fn encode_address(public_key: &[u8], version: u8) -> String {
    encode_hash(&hash160(public_key), version)
}

fn encode_hash(hash: &[u8; 20], version: u8) -> String {
    let mut payload = Vec::with_capacity(P2PKH_PAYLOAD_LEN);
    payload.push(version);
    payload.extend_from_slice(hash);
    base58::check_encode(&payload)
}

/// Encode a compressed public key as a bech32 P2WPKH address.
///
/// # Arguments
/// * `public_key` - 33-byte compressed SEC1 public key.
/// * `hrp` - Human-readable part ("bc", "tb", "bcrt").
pub fn p2wpkh_address(public_key: &[u8], hrp: &str) -> Result<String, AddressError> {
    if public_key.len() != COMPRESSED_LEN {
        return Err(AddressError::InvalidKeyLength {
            expected: COMPRESSED_LEN,
            got: public_key.len(),
        });
    }
    let witness_version =
        bech32::u5::try_from_u8(0).map_err(|e| AddressError::Bech32(e.to_string()))?;
    let mut data = vec![witness_version];
    data.extend(hash160(public_key).to_base32());
    bech32::encode(hrp, data, Variant::Bech32).map_err(|e| AddressError::Bech32(e.to_string()))
}

/// Decode a P2WPKH address and return its 20-byte witness program.
///
/// Fails if the HRP differs from `expected_hrp`, the witness version is
/// not 0, or the program is not 20 bytes.
pub fn p2wpkh_program(address: &str, expected_hrp: &str) -> Result<[u8; 20], AddressError> {
    let (hrp, data, variant) =
        bech32::decode(address).map_err(|e| AddressError::Bech32(e.to_string()))?;
    if hrp != expected_hrp {
        return Err(AddressError::UnsupportedAddress(format!(
            "expected HRP '{}', got '{}'",
            expected_hrp, hrp
        )));
    }
    if variant != Variant::Bech32 {
        return Err(AddressError::InvalidAddress(
            "witness v0 requires bech32, not bech32m".to_string(),
        ));
    }
    let (version, program) = data
        .split_first()
        .ok_or_else(|| AddressError::InvalidAddress(address.to_string()))?;
    if version.to_u8() != 0 {
        return Err(AddressError::UnsupportedAddress(format!(
            "witness version {}",
            version.to_u8()
        )));
    }
    let bytes = Vec::<u8>::from_base32(program).map_err(|e| AddressError::Bech32(e.to_string()))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| AddressError::InvalidAddressLength(address.to_string()))
}

/// A Base58Check P2PKH address.
///
/// Contains the 20-byte public key hash and the version byte it was
/// encoded with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The address version byte.
    pub version: u8,
}

impl Address {
    /// Parse a Base58Check-encoded P2PKH address string.
    ///
    /// Only mainnet (0x00) and testnet/regtest (0x6f) version bytes are accepted.
    pub fn from_string(addr: &str) -> Result<Self, AddressError> {
        let payload = base58::check_decode(addr).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => AddressError::EncodingChecksumFailed,
            other => AddressError::InvalidAddress(format!("'{}': {}", addr, other)),
        })?;

        if payload.len() != P2PKH_PAYLOAD_LEN {
            return Err(AddressError::InvalidAddressLength(addr.to_string()));
        }

        let version = payload[0];
        if version != MAINNET_P2PKH && version != TESTNET_P2PKH {
            return Err(AddressError::UnsupportedAddress(addr.to_string()));
        }

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&payload[1..]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            version,
        })
    }

    /// Create an address from a 20-byte public key hash and version byte.
    pub fn from_public_key_hash(hash: &[u8; 20], version: u8) -> Self {
        Address {
            address_string: encode_hash(hash, version),
            public_key_hash: *hash,
            version,
        }
    }

    /// Create an address by hashing raw public key bytes.
    pub fn from_public_key_bytes(public_key: &[u8], version: u8) -> Self {
        Self::from_public_key_hash(&hash160(public_key), version)
    }

    /// Create an address from a hex-encoded public key.
    pub fn from_public_key_hex(pub_key_hex: &str, version: u8) -> Result<Self, AddressError> {
        let bytes = hex::decode(pub_key_hex)?;
        Ok(Self::from_public_key_bytes(&bytes, version))
    }

    /// The network implied by the version byte.
    ///
    /// Testnet and regtest share 0x6f; it is reported as testnet.
    pub fn network(&self) -> Option<Network> {
        match self.version {
            MAINNET_P2PKH => Some(Network::Mainnet),
            TESTNET_P2PKH => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}
