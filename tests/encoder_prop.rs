mod common;
use common::decode;
use config_bin::{ConfigRecord, encode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decoding_reproduces_input(vals in prop::array::uniform7(any::<i32>())) {
        let mut out = Vec::new();
        encode(&vals, &mut out).unwrap();
        prop_assert_eq!(out.len(), 28);
        prop_assert_eq!(decode(&out), vals.to_vec());
    }

    #[test]
    fn writer_matches_in_memory_bytes(vals in prop::array::uniform7(any::<i32>())) {
        let mut out = Vec::new();
        encode(&vals, &mut out).unwrap();
        prop_assert_eq!(out, ConfigRecord::new(vals).to_bytes().to_vec());
    }

    #[test]
    fn any_other_length_is_rejected(vals in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assume!(vals.len() != 7);
        let mut out = Vec::new();
        let err = encode(&vals, &mut out).unwrap_err();
        prop_assert!(err.is_contract_violation());
        prop_assert!(out.is_empty());
    }
}
