//! Seedkey - Cryptographic primitives, encodings, and key types.
//!
//! This crate provides the leaves of the key-derivation pipeline:
//! - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160, HMAC-SHA512, PBKDF2)
//! - Base58 and Base58Check encoding/decoding
//! - BIP-39 seed derivation from a mnemonic phrase
//! - WIF (Wallet Import Format) private key encoding
//! - secp256k1 private and public key types

pub mod hash;
pub mod base58;
pub mod bip39;
pub mod wif;
pub mod ec;

mod error;
pub use error::PrimitivesError;
