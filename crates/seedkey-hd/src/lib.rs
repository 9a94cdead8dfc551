//! Seedkey - Hierarchical deterministic key derivation.
//!
//! Derives a master extended key from a BIP-39 seed, walks a derivation
//! path such as `m/84'/1'/0'/0/0`, and exports the resulting private key
//! as WIF or its public key as an address. [`KeyDeriver`] ties the whole
//! mnemonic-to-output pipeline to one [`DeriveConfig`].

mod error;
pub use error::HdError;

pub mod config;
pub mod extended_key;
pub mod key_deriver;
pub mod path;

pub use config::DeriveConfig;
pub use extended_key::{derive_child, derive_master, DerivationMode, ExtendedKey};
pub use key_deriver::{derive_path, KeyDeriver};
pub use path::{ChildNumber, DerivationPath, HARDENED_OFFSET};
