//! Mnemonic-to-output derivation pipeline.
//!
//! [`derive_path`] walks a path from a seed. [`KeyDeriver`] wraps the full
//! chain (mnemonic, seed, master key, path, then WIF or address) behind one
//! validated [`DeriveConfig`].

use seedkey_address::{encode_address, p2wpkh_address, NetworkParams};
use seedkey_primitives::bip39::{derive_seed_with_iterations, Seed};

use crate::config::DeriveConfig;
use crate::extended_key::{derive_child, derive_master, DerivationMode, ExtendedKey};
use crate::path::DerivationPath;
use crate::HdError;

/// Derive the extended key at `path` below the master key of `seed`.
///
/// Steps are applied in order; an empty path returns the master key.
pub fn derive_path(
    seed: &[u8],
    path: &DerivationPath,
    mode: DerivationMode,
) -> Result<ExtendedKey, HdError> {
    let master = derive_master(seed, mode)?;
    path.iter()
        .try_fold(master, |parent, step| derive_child(&parent, *step, mode))
}

/// Derives keys and addresses from mnemonics under a fixed configuration.
#[derive(Clone, Debug)]
pub struct KeyDeriver {
    config: DeriveConfig,
    params: NetworkParams,
}

impl KeyDeriver {
    /// Create a deriver, validating `config` up front.
    pub fn new(config: DeriveConfig) -> Result<Self, HdError> {
        config.validate()?;
        let params = config.network_params();
        Ok(KeyDeriver { config, params })
    }

    pub fn config(&self) -> &DeriveConfig {
        &self.config
    }

    /// Effective network parameters (preset plus overrides).
    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// `m/84'/coin'/account'/change/index` using the configured coin type.
    pub fn default_path(
        &self,
        account: u32,
        change: u32,
        index: u32,
    ) -> Result<DerivationPath, HdError> {
        DerivationPath::bip84(self.params.coin_type, account, change, index)
    }

    /// Stretch a mnemonic and passphrase into a seed.
    pub fn seed(&self, mnemonic: &str, passphrase: &str) -> Result<Seed, HdError> {
        Ok(derive_seed_with_iterations(
            mnemonic,
            passphrase,
            self.config.pbkdf2_iterations,
        )?)
    }

    /// Derive the extended key at `path` for a mnemonic.
    pub fn derive(
        &self,
        mnemonic: &str,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<ExtendedKey, HdError> {
        let seed = self.seed(mnemonic, passphrase)?;
        tracing::debug!(%path, mode = ?self.config.mode, "deriving key");
        derive_path(seed.as_bytes(), path, self.config.mode)
    }

    /// Derive the key at `path` and WIF-encode it with the configured
    /// version byte and compression flag.
    pub fn derive_wif(
        &self,
        mnemonic: &str,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<String, HdError> {
        let key = self.derive(mnemonic, passphrase, path)?;
        Ok(key.to_wif(self.params.wif_version, self.config.compressed))
    }

    /// Derive the key at `path` and encode its public key as a P2PKH address.
    ///
    /// The compressed or uncompressed public key is hashed according to the
    /// `compressed` setting, matching the WIF produced by [`derive_wif`](Self::derive_wif).
    pub fn derive_address(
        &self,
        mnemonic: &str,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<String, HdError> {
        let public_key = self.derive(mnemonic, passphrase, path)?.public_key()?;
        let address = if self.config.compressed {
            encode_address(&public_key.to_compressed(), self.params.address_version)
        } else {
            encode_address(&public_key.to_uncompressed(), self.params.address_version)
        };
        Ok(address)
    }

    /// Derive the key at `path` and encode it as a bech32 P2WPKH address.
    ///
    /// Always uses the compressed public key.
    pub fn derive_p2wpkh_address(
        &self,
        mnemonic: &str,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<String, HdError> {
        let public_key = self.derive(mnemonic, passphrase, path)?.public_key()?;
        Ok(p2wpkh_address(
            &public_key.to_compressed(),
            &self.params.bech32_hrp,
        )?)
    }
}
