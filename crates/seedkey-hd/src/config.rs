//! Derivation pipeline configuration.

use serde::{Deserialize, Serialize};
use seedkey_address::{Network, NetworkParams};
use seedkey_primitives::hash::DEFAULT_PBKDF2_ITERATIONS;

use crate::extended_key::DerivationMode;
use crate::HdError;

/// Options for [`KeyDeriver`](crate::KeyDeriver).
///
/// Deserializes from camelCase JSON; every field is optional and unknown
/// keys are rejected:
///
/// ```json
/// { "network": "testnet", "wifVersionByte": 239, "pbkdf2Iterations": 2048,
///   "compressed": true, "mode": "legacy" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DeriveConfig {
    /// Network preset supplying version bytes, coin type and HRP.
    pub network: Network,
    /// Overrides the preset's P2PKH version byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_version_byte: Option<u8>,
    /// Overrides the preset's WIF version byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wif_version_byte: Option<u8>,
    pub pbkdf2_iterations: u32,
    /// Emit compressed WIF and hash the compressed public key for addresses.
    pub compressed: bool,
    pub mode: DerivationMode,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        DeriveConfig {
            network: Network::Mainnet,
            address_version_byte: None,
            wif_version_byte: None,
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
            compressed: true,
            mode: DerivationMode::default(),
        }
    }
}

impl DeriveConfig {
    /// Default settings on the given network.
    pub fn for_network(network: Network) -> Self {
        DeriveConfig {
            network,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, HdError> {
        let config: DeriveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HdError> {
        if self.pbkdf2_iterations == 0 {
            return Err(HdError::InvalidConfig(
                "pbkdf2Iterations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The effective network parameters after applying overrides.
    pub fn network_params(&self) -> NetworkParams {
        let mut params = self.network.params();
        if let Some(version) = self.address_version_byte {
            params.address_version = version;
        }
        if let Some(version) = self.wif_version_byte {
            params.wif_version = version;
        }
        params
    }
}
