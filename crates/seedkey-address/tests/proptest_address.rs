use proptest::prelude::*;

use seedkey_address::{encode_address, p2wpkh_address, p2wpkh_program, Address, Network};
use seedkey_primitives::ec::PrivateKey;
use seedkey_primitives::hash::hash160;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn p2pkh_address_parses_back_to_hash(
        pubkey in prop::collection::vec(any::<u8>(), 1..80),
        testnet in any::<bool>(),
    ) {
        let network = if testnet { Network::Testnet } else { Network::Mainnet };
        let version = network.params().address_version;
        let encoded = encode_address(&pubkey, version);
        let parsed = Address::from_string(&encoded).unwrap();
        prop_assert_eq!(parsed.public_key_hash, hash160(&pubkey));
        prop_assert_eq!(parsed.network(), Some(network));
    }

    #[test]
    fn p2wpkh_program_is_hash160(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let compressed = pk.pub_key().to_compressed();
            let addr = p2wpkh_address(&compressed, "tb").unwrap();
            prop_assert!(addr.starts_with("tb1q"));
            prop_assert_eq!(p2wpkh_program(&addr, "tb").unwrap(), pk.pub_key().hash160());
        }
    }
}
