//! Network parameter sets.
//!
//! A [`NetworkParams`] value bundles every network-dependent constant the
//! pipeline needs. The presets cover mainnet, testnet and regtest; callers
//! with unusual version bytes build the struct directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// Mainnet P2PKH address version byte.
pub const MAINNET_P2PKH: u8 = 0x00;
/// Testnet/regtest P2PKH address version byte.
pub const TESTNET_P2PKH: u8 = 0x6f;
/// Mainnet WIF version byte.
pub const MAINNET_WIF: u8 = 0x80;
/// Testnet/regtest WIF version byte.
pub const TESTNET_WIF: u8 = 0xef;

/// Named Bitcoin network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet (P2PKH prefix 0x00, starts with '1').
    #[default]
    Mainnet,
    /// Bitcoin testnet (P2PKH prefix 0x6f, starts with 'm' or 'n').
    Testnet,
    /// Local regression-test network; shares testnet version bytes.
    Regtest,
}

impl Network {
    /// The parameter preset for this network.
    pub fn params(self) -> NetworkParams {
        match self {
            Network::Mainnet => NetworkParams {
                address_version: MAINNET_P2PKH,
                wif_version: MAINNET_WIF,
                coin_type: 0,
                bech32_hrp: "bc".to_string(),
            },
            Network::Testnet => NetworkParams {
                address_version: TESTNET_P2PKH,
                wif_version: TESTNET_WIF,
                coin_type: 1,
                bech32_hrp: "tb".to_string(),
            },
            Network::Regtest => NetworkParams {
                address_version: TESTNET_P2PKH,
                wif_version: TESTNET_WIF,
                coin_type: 1,
                bech32_hrp: "bcrt".to_string(),
            },
        }
    }

    /// Lowercase network name.
    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(AddressError::UnknownNetwork(other.to_string())),
        }
    }
}

/// The network-dependent constants used for encoding keys and addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    /// P2PKH address version byte.
    pub address_version: u8,
    /// WIF private key version byte.
    pub wif_version: u8,
    /// BIP-44 coin type used in derivation paths.
    pub coin_type: u32,
    /// Bech32 human-readable part for segwit addresses.
    pub bech32_hrp: String,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Network::Mainnet.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let main = Network::Mainnet.params();
        assert_eq!((main.address_version, main.wif_version, main.coin_type), (0x00, 0x80, 0));
        assert_eq!(main.bech32_hrp, "bc");

        let test = Network::Testnet.params();
        assert_eq!((test.address_version, test.wif_version, test.coin_type), (0x6f, 0xef, 1));

        let reg = Network::Regtest.params();
        assert_eq!(reg.wif_version, 0xef);
        assert_eq!(reg.bech32_hrp, "bcrt");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(" regtest ".parse::<Network>().unwrap(), Network::Regtest);
        assert!("signet".parse::<Network>().is_err());
    }

    #[test]
    fn test_params_serde_camel_case() {
        let json = serde_json::to_value(Network::Testnet.params()).unwrap();
        assert_eq!(json["addressVersion"], 0x6f);
        assert_eq!(json["wifVersion"], 0xef);
        assert_eq!(json["coinType"], 1);
        assert_eq!(json["bech32Hrp"], "tb");

        let network: Network = serde_json::from_str("\"regtest\"").unwrap();
        assert_eq!(network, Network::Regtest);
    }
}
