#![no_main]

use frodokem::frodo640_shake;
use frodokem::traits::{Decaps, Encaps, KeyGen, SerDes};
use libfuzzer_sys::fuzz_target;
use rand_core::{CryptoRng, RngCore};

// One keygen draw (s ‖ seedSE ‖ z) and one µ draw per encaps
const KG_RND_SIZE: usize = 48;
const MU_RND_SIZE: usize = 16;


struct TestRng {
    data: Vec<Vec<u8>>,
}

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, out: &mut [u8]) {
        let x = self.data.remove(0);
        out.copy_from_slice(&x)
    }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(out);
        Ok(()) // panic on probs is OK
    }
}

impl CryptoRng for TestRng {}

impl TestRng {
    fn new() -> Self { TestRng { data: Vec::new() } }

    fn push(&mut self, new_data: &[u8]) {
        let x = new_data.to_vec();
        self.data.push(x);
    }
}

fuzz_target!(|data: [u8; 39304]| {

    let mut rng = TestRng::new();
    let mut start = 0;
    rng.push(&data[start..start + KG_RND_SIZE]);
    start += KG_RND_SIZE;
    let keypair = frodo640_shake::KG::try_keygen_with_rng(&mut rng); // consumes 1 rng draw
    let (pk1, sk1) = keypair.unwrap(); // only rng can fail, which it won't

    let pk2_bytes = &data[start..start + frodo640_shake::PK_LEN];
    start += frodo640_shake::PK_LEN;
    let pk2 = frodo640_shake::PublicKey::try_from_bytes(pk2_bytes).unwrap(); // any content, correct length

    rng.push(&data[start..start + MU_RND_SIZE]);
    start += MU_RND_SIZE;
    let _res = pk2.try_encaps_with_rng(&mut rng);

    rng.push(&data[start..start + MU_RND_SIZE]);
    start += MU_RND_SIZE;
    let _res = pk1.try_encaps_with_rng(&mut rng);

    let sk2_bytes = &data[start..start + frodo640_shake::SK_LEN];
    start += frodo640_shake::SK_LEN;
    let sk2 = frodo640_shake::SecretKey::try_from_bytes(sk2_bytes).unwrap(); // always good

    let ct_bytes = &data[start..start + frodo640_shake::CT_LEN];
    start += frodo640_shake::CT_LEN;
    let ct = frodo640_shake::CipherText::try_from_bytes(ct_bytes).unwrap(); // always good

    let _res = sk2.try_decaps(&ct); // arbitrary sk: implicit rejection, not a panic
    let _res = sk1.try_decaps(&ct);

    assert_eq!(start, data.len());

});
