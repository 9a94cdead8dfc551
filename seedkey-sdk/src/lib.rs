#![deny(missing_docs)]

//! Seedkey - Complete toolkit.
//!
//! Re-exports all Seedkey components for convenient single-crate usage.
//!
//! ```
//! use seedkey_sdk::address::Network;
//! use seedkey_sdk::hd::{DeriveConfig, KeyDeriver};
//!
//! let deriver = KeyDeriver::new(DeriveConfig::for_network(Network::Testnet)).unwrap();
//! let path = deriver.default_path(0, 0, 0).unwrap();
//! let mnemonic = "abandon abandon abandon abandon abandon abandon \
//!                 abandon abandon abandon abandon abandon about";
//! let address = deriver.derive_p2wpkh_address(mnemonic, "", &path).unwrap();
//! assert_eq!(address, "tb1q6rz28mcfaxtmd6v789l9rrlrusdprr9pqcpvkl");
//! ```

pub use seedkey_address as address;
pub use seedkey_hd as hd;
pub use seedkey_primitives as primitives;
