use crate::byte_fns::{i16_from_le_bytes, i16_to_le_bytes, pack, unpack};
use crate::helpers::{ensure, shake};
use crate::pke::{pke_decrypt, pke_encrypt, pke_key_gen};
use crate::types::FrodoParams;
use alloc::vec;
use rand_core::CryptoRngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;


/// Algorithm 12 `FrodoKEM.KeyGen()`.
/// Draws `s ‖ seedSE ‖ z` from the injected RNG and produces the serialized
/// key pair `pk = seedA ‖ pack(B)` and `sk = s ‖ pk ‖ Sᵀ ‖ pkh`.
pub(crate) fn frodo_key_gen(
    params: &FrodoParams, rng: &mut impl CryptoRngCore, pk: &mut [u8], sk: &mut [u8],
) -> Result<(), &'static str> {
    debug_assert_eq!(pk.len(), params.pk_len(), "Alg 12: pk buffer length");
    debug_assert_eq!(sk.len(), params.sk_len(), "Alg 12: sk buffer length");

    // 1: s ‖ seedSE ‖ z ← random bytes, drawn in a single call
    let mut randomness = vec![0u8; params.len_s + params.len_seed_se + params.len_z];
    rng.try_fill_bytes(&mut randomness).map_err(|_| "random number generator failed")?;
    let (s, rest) = randomness.split_at(params.len_s);
    let (seed_se, z) = rest.split_at(params.len_seed_se);

    // 2: seedA ← SHAKE(z)
    let mut seed_a = vec![0u8; params.len_seed_a];
    shake(params.shake, &[z], &mut seed_a);

    // 3-5: A ← Gen(seedA); Sᵀ, E ← χ(SHAKE(0x5f ‖ seedSE)); B ← A·S + E
    let (b_matrix, mut s_t) = pke_key_gen(params, &seed_a, seed_se);

    // 6: pk ← seedA ‖ Pack(B); pkh ← SHAKE(pk)
    pk[..params.len_seed_a].copy_from_slice(&seed_a);
    pack(params.d, &b_matrix, &mut pk[params.len_seed_a..]);
    let mut pkh = vec![0u8; params.len_pkh];
    shake(params.shake, &[pk], &mut pkh);

    // 7-8: sk ← s ‖ pk ‖ Sᵀ (row-major little-endian) ‖ pkh
    let p1 = params.len_s;
    let p2 = p1 + params.pk_len();
    let p3 = p2 + 2 * params.n * params.n_bar;
    sk[..p1].copy_from_slice(s);
    sk[p1..p2].copy_from_slice(pk);
    i16_to_le_bytes(&s_t, &mut sk[p2..p3]);
    sk[p3..].copy_from_slice(&pkh);

    s_t.zeroize();
    randomness.zeroize();
    Ok(())
}


/// Algorithm 13 `FrodoKEM.Encaps(pk)`.
/// Produces `ct = Pack(B′) ‖ Pack(C)` and the shared secret
/// `ss = SHAKE(ct ‖ k̂)`, where `(seedSE ‖ k̂) = SHAKE(pkh ‖ µ)` for a fresh
/// random µ.
pub(crate) fn frodo_encaps(
    params: &FrodoParams, rng: &mut impl CryptoRngCore, pk: &[u8], ct: &mut [u8],
    ss: &mut [u8],
) -> Result<(), &'static str> {
    // 1: length gate; the only caller-facing failure apart from the RNG
    ensure!(pk.len() == params.pk_len(), "incorrect public key length");
    debug_assert_eq!(ct.len(), params.ct_len(), "Alg 13: ct buffer length");
    debug_assert_eq!(ss.len(), params.len_ss, "Alg 13: ss buffer length");

    // 2: parse pk ← seedA ‖ b
    let seed_a = &pk[..params.len_seed_a];
    let b_packed = &pk[params.len_seed_a..];

    // 3: µ ← random
    let mut mu = vec![0u8; params.len_mu];
    rng.try_fill_bytes(&mut mu).map_err(|_| "random number generator failed")?;

    // 4-5: pkh ← SHAKE(pk); seedSE ‖ k̂ ← SHAKE(pkh ‖ µ)
    let mut pkh = vec![0u8; params.len_pkh];
    shake(params.shake, &[pk], &mut pkh);
    let mut seed_se_k = vec![0u8; params.len_seed_se + params.len_k];
    shake(params.shake, &[&pkh, &mu], &mut seed_se_k);
    let (seed_se, k_hat) = seed_se_k.split_at(params.len_seed_se);

    // 6-9: B′ ← S′·A + E′; C ← S′·B + E″ + Encode(µ)
    let (b_prime, c) = pke_encrypt(params, seed_a, b_packed, &mu, seed_se);

    // 10: ct ← Pack(B′) ‖ Pack(C); ss ← SHAKE(ct ‖ k̂)
    let c1_len = params.d as usize * params.n_bar * params.n / 8;
    pack(params.d, &b_prime, &mut ct[..c1_len]);
    pack(params.d, &c, &mut ct[c1_len..]);
    shake(params.shake, &[ct, k_hat], ss);

    mu.zeroize();
    seed_se_k.zeroize();
    Ok(())
}


/// Algorithm 14 `FrodoKEM.Decaps(sk, ct)`.
/// Decrypts µ′, re-encrypts it, and selects in constant time between the
/// re-derived k′ (ciphertexts match) and the stored secret `s` (mismatch:
/// implicit rejection). Both paths run the full recomputation and the final
/// SHAKE; no branch depends on matrix contents.
pub(crate) fn frodo_decaps(
    params: &FrodoParams, sk: &[u8], ct: &[u8], ss: &mut [u8],
) -> Result<(), &'static str> {
    // 1: length gates; all other failure modes are implicit rejection
    ensure!(ct.len() == params.ct_len(), "incorrect cipher length");
    ensure!(sk.len() == params.sk_len(), "incorrect secret key length");
    debug_assert_eq!(ss.len(), params.len_ss, "Alg 14: ss buffer length");
    debug_assert_eq!(params.len_s, params.len_k, "Alg 14: fallback/key length mismatch");

    // 2: split sk ← s ‖ seedA ‖ b ‖ Sᵀ ‖ pkh and ct ← c1 ‖ c2
    let p1 = params.len_s;
    let p2 = p1 + params.pk_len();
    let p3 = p2 + 2 * params.n * params.n_bar;
    let s = &sk[..p1];
    let pk = &sk[p1..p2];
    let seed_a = &pk[..params.len_seed_a];
    let b_packed = &pk[params.len_seed_a..];
    let mut s_t = i16_from_le_bytes(&sk[p2..p3]);
    let pkh = &sk[p3..];

    // 3: B′ ← Unpack(c1); C ← Unpack(c2)
    let c1_len = params.d as usize * params.n_bar * params.n / 8;
    let b_prime = unpack(params.d, &ct[..c1_len], params.n_bar, params.n);
    let c_matrix = unpack(params.d, &ct[c1_len..], params.n_bar, params.n_bar);

    // 4: µ′ ← Decode(C − B′·S)
    let mut mu_prime = pke_decrypt(params, &s_t, &b_prime, &c_matrix);
    s_t.zeroize();

    // 5: seedSE′ ‖ k′ ← SHAKE(pkh ‖ µ′)
    let mut seed_se_k = vec![0u8; params.len_seed_se + params.len_k];
    shake(params.shake, &[pkh, &mu_prime], &mut seed_se_k);
    let (seed_se, k_prime) = seed_se_k.split_at(params.len_seed_se);

    // 6-7: re-encrypt µ′ with the re-derived randomness
    let (b_pp, c_prime) = pke_encrypt(params, seed_a, b_packed, &mu_prime, seed_se);

    // 8: single-bit match over every coefficient of both halves, no early
    // exit, then bitwise selection of k′ (match) or s (implicit rejection)
    let matches = b_prime[..].ct_eq(&b_pp[..]) & c_matrix[..].ct_eq(&c_prime[..]);
    let mut selected = vec![0u8; params.len_k];
    for i in 0..params.len_k {
        selected[i] = u8::conditional_select(&s[i], &k_prime[i], matches);
    }

    // 9: ss ← SHAKE(ct ‖ selected)
    shake(params.shake, &[ct, &selected], ss);

    mu_prime.zeroize();
    seed_se_k.zeroize();
    selected.zeroize();
    Ok(())
}
