//! Elliptic curve keys on secp256k1.
//!
//! Provides validated private keys (with WIF import/export) and public keys
//! (SEC1 compressed/uncompressed serialization, Hash160).

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
