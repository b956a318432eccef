use crate::types::FrodoParams;
use alloc::vec;
use alloc::vec::Vec;

// The wire formats use two different bit orders. Pack/Unpack emit each
// coefficient MSB-first within its d-bit lane and flush bytes MSB-first;
// Encode/Decode read and write the message stream LSB-first within each
// byte. Both orders are interoperability contracts with the FrodoKEM
// specification and its KAT vectors.


/// Algorithm 3 `Frodo.Pack(C)`.
/// Packs the low `d` bits of each 16-bit coefficient of a row-major matrix
/// into a byte string of length `d·rows·cols/8` (which divides evenly for
/// all supported shapes).
#[allow(clippy::cast_possible_truncation)] // flushed accumulator byte
pub(crate) fn pack(d: u32, matrix: &[u16], bytes: &mut [u8]) {
    debug_assert_eq!(matrix.len() * d as usize, bytes.len() * 8, "Alg 3: size mismatch");
    let mask = (1u32 << d) - 1; // d <= 16
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut k = 0;
    for coeff in matrix {
        acc = (acc << d) | (u32::from(*coeff) & mask);
        bits += d;
        while bits >= 8 {
            bits -= 8;
            bytes[k] = (acc >> bits) as u8;
            k += 1;
        }
        acc &= (1 << bits) - 1;
    }
}


/// Algorithm 4 `Frodo.Unpack(b, n1, n2)`.
/// The exact inverse of `pack`, given the target dimensions.
#[allow(clippy::cast_possible_truncation)] // extracted d-bit lane
pub(crate) fn unpack(d: u32, bytes: &[u8], n1: usize, n2: usize) -> Vec<u16> {
    debug_assert_eq!(bytes.len() * 8, n1 * n2 * d as usize, "Alg 4: size mismatch");
    let mask = (1u32 << d) - 1;
    let mut matrix = vec![0u16; n1 * n2];
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut k = 0;
    for byte in bytes {
        acc = (acc << 8) | u32::from(*byte);
        bits += 8;
        while bits >= d {
            bits -= d;
            matrix[k] = ((acc >> bits) & mask) as u16;
            k += 1;
            acc &= (1 << bits) - 1;
        }
    }
    matrix
}


/// Algorithm 1 `Frodo.Encode(µ)`.
/// Maps a byte string of length `B·n̄·n̄/8` onto an n̄×n̄ matrix: bits are read
/// LSB-first, grouped B at a time into `v ∈ [0, 2^B)`, and scaled by
/// `q/2^B`. The scaling is exact because every supported q is a power of two.
#[allow(clippy::cast_possible_truncation)] // q/2^B <= 2^15 for B >= 1
pub(crate) fn encode_message(params: &FrodoParams, mu: &[u8]) -> Vec<u16> {
    let b = params.b as usize;
    debug_assert_eq!(mu.len() * 8, b * params.n_bar * params.n_bar, "Alg 1: µ length");
    debug_assert!(params.b >= 1, "Alg 1: B must be positive");
    let scale = (params.q32() >> params.b) as u16;
    let mut matrix = vec![0u16; params.n_bar * params.n_bar];
    for (idx, k_ij) in matrix.iter_mut().enumerate() {
        let mut v = 0u16;
        for l in 0..b {
            let pos = idx * b + l;
            let bit = u16::from(mu[pos / 8] >> (pos % 8)) & 1;
            v |= bit << l;
        }
        *k_ij = v * scale; // v·q/2^B < q, never overflows 16 bits
    }
    matrix
}


/// Algorithm 2 `Frodo.Decode(K)`.
/// Inverts `encode_message`: each coefficient is rounded to its nearest
/// multiple of `q/2^B` and the recovered `v = round(K·2^B/q) mod 2^B` is
/// emitted LSB-first into the output stream.
#[allow(clippy::cast_possible_truncation)] // v < 2^B <= 16
pub(crate) fn decode_message(params: &FrodoParams, matrix: &[u16]) -> Vec<u8> {
    let b = params.b as usize;
    debug_assert_eq!(matrix.len(), params.n_bar * params.n_bar, "Alg 2: matrix shape");
    let q32 = params.q32();
    let mut mu = vec![0u8; b * params.n_bar * params.n_bar / 8];
    for (idx, k_ij) in matrix.iter().enumerate() {
        // round-half-up; inputs are non-negative so this agrees with
        // round-half-to-even on everything the KEM produces
        let v = (((u32::from(*k_ij) << params.b) + (q32 >> 1)) / q32) & ((1 << params.b) - 1);
        for l in 0..b {
            let pos = idx * b + l;
            mu[pos / 8] |= (((v >> l) & 1) as u8) << (pos % 8);
        }
    }
    mu
}


/// Interprets a byte string as little-endian unsigned 16-bit words.
pub(crate) fn u16_from_le_bytes(bytes: &[u8]) -> Vec<u16> {
    debug_assert_eq!(bytes.len() % 2, 0, "u16 stream: odd byte length");
    bytes.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect()
}


/// Interprets a byte string as little-endian signed 16-bit words.
pub(crate) fn i16_from_le_bytes(bytes: &[u8]) -> Vec<i16> {
    debug_assert_eq!(bytes.len() % 2, 0, "i16 stream: odd byte length");
    bytes.chunks_exact(2).map(|c| i16::from_le_bytes([c[0], c[1]])).collect()
}


/// Serializes signed 16-bit words as little-endian bytes.
pub(crate) fn i16_to_le_bytes(words: &[i16], bytes: &mut [u8]) {
    debug_assert_eq!(words.len() * 2, bytes.len(), "i16 stream: size mismatch");
    for (chunk, word) in bytes.chunks_exact_mut(2).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}
