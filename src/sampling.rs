use crate::matrix::reduce;
use crate::types::{FrodoParams, Gen};
use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;
use alloc::vec;
use alloc::vec::Vec;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake128;


/// Algorithm 5 `Frodo.Sample(r)`.
/// Converts one uniform 16-bit word into a sample from the discrete error
/// distribution χ by CDF inversion: the high 15 bits select the magnitude,
/// the low bit selects the sign lobe. The table scan accumulates a
/// strictly-less count over every entry but the last, with no early exit.
#[allow(clippy::cast_possible_wrap)] // magnitude is < table length
pub(crate) fn sample(r: u16, cdf_table: &[u16]) -> i16 {
    let t = r >> 1;
    let r0 = r & 1;
    let mut e = 0u16;
    // table values are <= 2^15 − 1, so the borrow lands in the top bit
    for z in &cdf_table[..cdf_table.len() - 1] {
        e += z.wrapping_sub(t) >> 15;
    }
    // conditional two's-complement negation for the negative lobe
    (e ^ r0.wrapping_neg()).wrapping_add(r0) as i16
}


/// Algorithm 6 `Frodo.SampleMatrix(r, n1, n2)`.
/// Fills an n1×n2 signed matrix row-major from consecutive words of `r`.
#[must_use]
pub(crate) fn sample_matrix(r: &[u16], n1: usize, n2: usize, cdf_table: &[u16]) -> Vec<i16> {
    debug_assert_eq!(r.len(), n1 * n2, "Alg 6: word count mismatch");
    r.iter().map(|word| sample(*word, cdf_table)).collect()
}


/// Algorithms 7/8 `Frodo.Gen(seedA)`.
/// Deterministic expansion of the short `seedA` into the n×n public matrix
/// A, by AES-128 or SHAKE-128 per the parameter bundle. Entries are reduced
/// mod q on the way in (a no-op when q = 2^16).
#[must_use]
pub(crate) fn gen_matrix_a(params: &FrodoParams, seed_a: &[u8]) -> Vec<u16> {
    debug_assert_eq!(seed_a.len(), params.len_seed_a, "Gen: seedA length");
    match params.gen {
        Gen::Aes128 => gen_a_aes128(params, seed_a),
        Gen::Shake128 => gen_a_shake128(params, seed_a),
    }
}


/// Algorithm 7: row blocks `(u16 LE i) ‖ (u16 LE j) ‖ 0…0` encrypted under
/// `seedA` as an AES-128 key; each 16-byte ciphertext yields 8 entries.
#[allow(clippy::cast_possible_truncation)] // n < 2^16
fn gen_a_aes128(params: &FrodoParams, seed_a: &[u8]) -> Vec<u16> {
    let n = params.n;
    let cipher = Aes128::new(GenericArray::from_slice(seed_a));
    let mut a_matrix = vec![0u16; n * n];
    for i in 0..n {
        for j in (0..n).step_by(8) {
            let mut block_bytes = [0u8; 16];
            block_bytes[..2].copy_from_slice(&(i as u16).to_le_bytes());
            block_bytes[2..4].copy_from_slice(&(j as u16).to_le_bytes());
            let mut block = GenericArray::clone_from_slice(&block_bytes);
            cipher.encrypt_block(&mut block);
            for (k, chunk) in block.chunks_exact(2).enumerate() {
                a_matrix[i * n + j + k] =
                    reduce(u16::from_le_bytes([chunk[0], chunk[1]]), params.q);
            }
        }
    }
    a_matrix
}


/// Algorithm 8: row i is the first 2n bytes of SHAKE-128(`(u16 LE i) ‖ seedA`),
/// taken as little-endian words. SHAKE-128 here is independent of the
/// variant-wide SHAKE width.
#[allow(clippy::cast_possible_truncation)] // n < 2^16
fn gen_a_shake128(params: &FrodoParams, seed_a: &[u8]) -> Vec<u16> {
    let n = params.n;
    let mut a_matrix = vec![0u16; n * n];
    let mut row_bytes = vec![0u8; 2 * n];
    for i in 0..n {
        let mut hasher = Shake128::default();
        hasher.update(&(i as u16).to_le_bytes());
        hasher.update(seed_a);
        hasher.finalize_xof().read(&mut row_bytes);
        for (j, chunk) in row_bytes.chunks_exact(2).enumerate() {
            a_matrix[i * n + j] = reduce(u16::from_le_bytes([chunk[0], chunk[1]]), params.q);
        }
    }
    a_matrix
}
