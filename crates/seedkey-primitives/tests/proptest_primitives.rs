use proptest::prelude::*;

use seedkey_primitives::base58;
use seedkey_primitives::ec::PrivateKey;
use seedkey_primitives::wif;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn base58_bytes_roundtrip(data in prop::collection::vec(any::<u8>(), 0..96)) {
        let encoded = base58::encode(&data);
        prop_assert_eq!(base58::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn base58_leading_zero_bytes_become_ones(
        zeros in 0usize..8,
        rest in prop::collection::vec(1u8..=255, 0..32),
    ) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&rest);
        let encoded = base58::encode(&data);
        let ones = encoded.chars().take_while(|c| *c == '1').count();
        prop_assert_eq!(ones, zeros);
    }

    #[test]
    fn base58_canonical_text_roundtrip(text in "[1-9A-HJ-NP-Za-km-z]{0,40}") {
        let decoded = base58::decode(&text).unwrap();
        prop_assert_eq!(base58::encode(&decoded), text);
    }

    #[test]
    fn check_encode_decode_roundtrip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base58::check_encode(&data);
        prop_assert_eq!(base58::check_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn wif_payload_is_34_or_33_bytes(
        key in prop::array::uniform32(any::<u8>()),
        version in any::<u8>(),
        compressed in any::<bool>(),
    ) {
        let encoded = wif::encode(&key, version, compressed).unwrap();
        let payload = base58::check_decode(&encoded).unwrap();
        prop_assert_eq!(payload.len(), if compressed { 34 } else { 33 });
        let decoded = wif::decode(&encoded).unwrap();
        prop_assert_eq!(decoded.version, version);
        prop_assert_eq!(decoded.key, key);
        prop_assert_eq!(decoded.compressed, compressed);
    }

    #[test]
    fn private_key_wif_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        version in any::<u8>(),
    ) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let (parsed, meta) = PrivateKey::from_wif(&pk.to_wif_prefix(version, true)).unwrap();
            prop_assert_eq!(meta.version, version);
            prop_assert_eq!(parsed.to_hex(), pk.to_hex());
            prop_assert_eq!(pk.pub_key().to_compressed().len(), 33);
        }
    }
}
