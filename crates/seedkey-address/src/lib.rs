//! Seedkey - Network parameters and address encoding.
//!
//! Turns public keys into human-shareable addresses: Base58Check P2PKH
//! (hash160 + version byte + checksum) and bech32 P2WPKH. Version bytes
//! are always supplied explicitly, either directly or through a
//! [`NetworkParams`] preset.

pub mod address;
pub mod network;

mod error;
pub use error::AddressError;
pub use address::{encode_address, p2wpkh_address, p2wpkh_program, Address};
pub use network::{Network, NetworkParams};
