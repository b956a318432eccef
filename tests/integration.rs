use frodokem::traits::{Decaps, Encaps, KeyGen, SerDes};
use frodokem::{
    frodo1344_aes, frodo1344_shake, frodo640_aes, frodo640_shake, frodo976_aes, frodo976_shake,
};
use rand_chacha::rand_core::SeedableRng;


#[test]
fn test_expected_flow_640_aes() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
    for _i in 0..3 {
        // Alice runs KeyGen, and serializes pk for Bob (to bytes)
        let (alice_pk, alice_sk) = frodo640_aes::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        // Alice sends pk bytes to Bob
        let bob_pk_bytes = alice_pk_bytes;

        // Bob deserializes pk bytes, runs Encaps to get ss, and serializes ct for Alice (to bytes)
        let bob_pk = frodo640_aes::PublicKey::try_from_bytes(&bob_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        // Bob sends ct bytes to Alice
        let alice_ct_bytes = bob_ct_bytes;

        // Alice deserializes and runs Decaps
        let alice_ct = frodo640_aes::CipherText::try_from_bytes(&alice_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();

        // Alice and Bob now have the same shared secret
        assert_eq!(bob_ss, alice_ss);

        // Double check the correspondence of the serialized keypair (we already have alice_pk)
        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo640_aes::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_expected_flow_640_shake() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(456);
    for _i in 0..3 {
        let (alice_pk, alice_sk) = frodo640_shake::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        let bob_pk = frodo640_shake::PublicKey::try_from_bytes(&alice_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        let alice_ct = frodo640_shake::CipherText::try_from_bytes(&bob_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();
        assert_eq!(bob_ss, alice_ss);

        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo640_shake::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_expected_flow_976_aes() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(789);
    for _i in 0..2 {
        let (alice_pk, alice_sk) = frodo976_aes::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        let bob_pk = frodo976_aes::PublicKey::try_from_bytes(&alice_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        let alice_ct = frodo976_aes::CipherText::try_from_bytes(&bob_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();
        assert_eq!(bob_ss, alice_ss);

        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo976_aes::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_expected_flow_976_shake() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(321);
    for _i in 0..2 {
        let (alice_pk, alice_sk) = frodo976_shake::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        let bob_pk = frodo976_shake::PublicKey::try_from_bytes(&alice_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        let alice_ct = frodo976_shake::CipherText::try_from_bytes(&bob_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();
        assert_eq!(bob_ss, alice_ss);

        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo976_shake::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_expected_flow_1344_aes() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(654);
    for _i in 0..2 {
        let (alice_pk, alice_sk) = frodo1344_aes::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        let bob_pk = frodo1344_aes::PublicKey::try_from_bytes(&alice_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        let alice_ct = frodo1344_aes::CipherText::try_from_bytes(&bob_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();
        assert_eq!(bob_ss, alice_ss);

        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo1344_aes::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_expected_flow_1344_shake() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(987);
    for _i in 0..2 {
        let (alice_pk, alice_sk) = frodo1344_shake::KG::try_keygen_with_rng(&mut rng).unwrap();
        let alice_pk_bytes = alice_pk.into_bytes();

        let bob_pk = frodo1344_shake::PublicKey::try_from_bytes(&alice_pk_bytes).unwrap();
        let (bob_ss, bob_ct) = bob_pk.try_encaps_with_rng(&mut rng).unwrap();
        let bob_ct_bytes = bob_ct.into_bytes();

        let alice_ct = frodo1344_shake::CipherText::try_from_bytes(&bob_ct_bytes).unwrap();
        let alice_ss = alice_sk.try_decaps(&alice_ct).unwrap();
        assert_eq!(bob_ss, alice_ss);

        let alice_sk_bytes = alice_sk.into_bytes();
        assert!(frodo1344_shake::KG::validate_keypair_vartime(&alice_pk_bytes, &alice_sk_bytes));
    }
}


#[test]
fn test_flipped_ciphertext_rejects() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(999);
    let (pk, sk) = frodo640_aes::KG::try_keygen_with_rng(&mut rng).unwrap();
    let (ss, ct) = pk.try_encaps_with_rng(&mut rng).unwrap();
    let ct_bytes = ct.into_bytes();

    // a single flipped bit anywhere lands in implicit rejection
    for flip in [0usize, frodo640_aes::CT_LEN / 2, frodo640_aes::CT_LEN - 1] {
        let mut tampered = ct_bytes;
        tampered[flip] ^= 1;
        let tampered_ct = frodo640_aes::CipherText::try_from_bytes(&tampered).unwrap();
        let ss2 = sk.try_decaps(&tampered_ct).unwrap();
        assert_ne!(ss, ss2);
    }

    // the untouched ciphertext still agrees
    let ct2 = frodo640_aes::CipherText::try_from_bytes(&ct_bytes).unwrap();
    assert_eq!(ss, sk.try_decaps(&ct2).unwrap());
}


#[test]
fn test_official_lengths() {
    assert_eq!(
        (frodo640_aes::PK_LEN, frodo640_aes::SK_LEN, frodo640_aes::CT_LEN, frodo640_aes::SS_LEN),
        (9616, 19888, 9720, 16)
    );
    assert_eq!(
        (frodo976_aes::PK_LEN, frodo976_aes::SK_LEN, frodo976_aes::CT_LEN, frodo976_aes::SS_LEN),
        (15632, 31296, 15744, 24)
    );
    assert_eq!(
        (
            frodo1344_aes::PK_LEN,
            frodo1344_aes::SK_LEN,
            frodo1344_aes::CT_LEN,
            frodo1344_aes::SS_LEN
        ),
        (21520, 43088, 21632, 32)
    );
    assert_eq!(frodo640_aes::NAME, "FrodoKEM-640-AES");
    assert_eq!(frodo640_shake::NAME, "FrodoKEM-640-SHAKE");
    assert_eq!(frodo976_aes::NAME, "FrodoKEM-976-AES");
    assert_eq!(frodo976_shake::NAME, "FrodoKEM-976-SHAKE");
    assert_eq!(frodo1344_aes::NAME, "FrodoKEM-1344-AES");
    assert_eq!(frodo1344_shake::NAME, "FrodoKEM-1344-SHAKE");
}
