use crate::byte_fns::{decode_message, encode_message, u16_from_le_bytes, unpack};
use crate::helpers::shake;
use crate::matrix::{add_us, add_uu, mul_su, mul_us, sub_uu, transpose};
use crate::sampling::{gen_matrix_a, sample_matrix};
use crate::types::FrodoParams;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

// Domain separators prepended to seedSE before expanding noise; key
// generation and encapsulation must never share an expansion.
const DOMAIN_SEP_KEYGEN: u8 = 0x5f;
const DOMAIN_SEP_ENCAPS: u8 = 0x96;


/// Algorithm 9 `FrodoPKE.KeyGen` core.
/// Expands `seedSE` into the secret S and error E, and derives the public
/// `B = A·S + E mod q`. Returns `(B, Sᵀ)`; Sᵀ (n̄×n) is the form stored in
/// the secret key.
pub(crate) fn pke_key_gen(
    params: &FrodoParams, seed_a: &[u8], seed_se: &[u8],
) -> (Vec<u16>, Vec<i16>) {
    let (n, n_bar) = (params.n, params.n_bar);

    // r ← SHAKE(0x5f ‖ seedSE), 2·n·n̄ little-endian words
    let mut r_bytes = vec![0u8; 2 * 2 * n * n_bar];
    shake(params.shake, &[&[DOMAIN_SEP_KEYGEN], seed_se], &mut r_bytes);
    let mut r = u16_from_le_bytes(&r_bytes);
    r_bytes.zeroize();

    // Sᵀ ← SampleMatrix(r[0 : n·n̄], n̄, n); E ← SampleMatrix(r[n·n̄ : 2·n·n̄], n, n̄)
    let s_t = sample_matrix(&r[..n * n_bar], n_bar, n, params.cdf_table);
    let mut e = sample_matrix(&r[n * n_bar..], n, n_bar, params.cdf_table);
    r.zeroize();

    // B ← A·S + E mod q
    let a_matrix = gen_matrix_a(params, seed_a);
    let mut s = transpose(&s_t, n_bar, n);
    let b_matrix = add_us(&mul_us(&a_matrix, &s, n, n, n_bar, params.q), &e, params.q);
    s.zeroize();
    e.zeroize();

    (b_matrix, s_t)
}


/// Algorithm 10 `FrodoPKE.Enc` core, shared by encapsulation and the
/// re-encryption half of decapsulation.
/// Expands `seedSE` into S′, E′, E″ and returns the unpacked ciphertext
/// halves `B′ = S′·A + E′ mod q` and `C = S′·B + E″ + Encode(µ) mod q`.
pub(crate) fn pke_encrypt(
    params: &FrodoParams, seed_a: &[u8], b_packed: &[u8], mu: &[u8], seed_se: &[u8],
) -> (Vec<u16>, Vec<u16>) {
    let (n, n_bar) = (params.n, params.n_bar);

    // r ← SHAKE(0x96 ‖ seedSE), (2·m̄·n + m̄·n̄) little-endian words
    let r_words = 2 * n_bar * n + n_bar * n_bar;
    let mut r_bytes = vec![0u8; 2 * r_words];
    shake(params.shake, &[&[DOMAIN_SEP_ENCAPS], seed_se], &mut r_bytes);
    let mut r = u16_from_le_bytes(&r_bytes);
    r_bytes.zeroize();

    // S′ ← SampleMatrix(r[0 : m̄·n], m̄, n)
    // E′ ← SampleMatrix(r[m̄·n : 2·m̄·n], m̄, n)
    // E″ ← SampleMatrix(r[2·m̄·n : 2·m̄·n + m̄·n̄], m̄, n̄)
    let mut s_prime = sample_matrix(&r[..n_bar * n], n_bar, n, params.cdf_table);
    let mut e_prime = sample_matrix(&r[n_bar * n..2 * n_bar * n], n_bar, n, params.cdf_table);
    let mut e_pp = sample_matrix(&r[2 * n_bar * n..], n_bar, n_bar, params.cdf_table);
    r.zeroize();

    // B′ ← S′·A + E′ mod q
    let a_matrix = gen_matrix_a(params, seed_a);
    let b_prime = add_us(&mul_su(&s_prime, &a_matrix, n_bar, n, n, params.q), &e_prime, params.q);

    // C ← S′·B + E″ + Encode(µ) mod q
    let b_matrix = unpack(params.d, b_packed, n, n_bar);
    let v = add_us(&mul_su(&s_prime, &b_matrix, n_bar, n, n_bar, params.q), &e_pp, params.q);
    let c = add_uu(&v, &encode_message(params, mu), params.q);

    s_prime.zeroize();
    e_prime.zeroize();
    e_pp.zeroize();

    (b_prime, c)
}


/// Algorithm 11 `FrodoPKE.Dec` core.
/// Recovers `µ = Decode(C − B′·S mod q)` from the unpacked ciphertext halves
/// and the stored Sᵀ.
#[must_use]
pub(crate) fn pke_decrypt(
    params: &FrodoParams, s_t: &[i16], b_prime: &[u16], c: &[u16],
) -> Vec<u8> {
    let (n, n_bar) = (params.n, params.n_bar);
    let mut s = transpose(s_t, n_bar, n);
    let m = sub_uu(c, &mul_us(b_prime, &s, n_bar, n, n_bar, params.q), params.q);
    s.zeroize();
    decode_message(params, &m)
}
