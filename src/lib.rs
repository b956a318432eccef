#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::doc_markdown)] // prose is full of FrodoKEM, SampleMatrix, ...
#![doc = include_str!("../README.md")]


///
/// Implements the FrodoKEM learning-with-errors key encapsulation mechanism.
/// See <https://frodokem.org/files/FrodoKEM-specification-20210604.pdf>
//
// Matrices are heap-allocated; the n×n public matrix A alone is ~3.6 MB for
// the largest parameter set.
extern crate alloc;

// Functionality map per the FrodoKEM specification
//
// Algorithm 1 Frodo.Encode(µ)                  --> byte_fns.rs
// Algorithm 2 Frodo.Decode(K)                  --> byte_fns.rs
// Algorithm 3 Frodo.Pack(C)                    --> byte_fns.rs
// Algorithm 4 Frodo.Unpack(b, n1, n2)          --> byte_fns.rs
// Algorithm 5 Frodo.Sample(r)                  --> sampling.rs
// Algorithm 6 Frodo.SampleMatrix(r, n1, n2)    --> sampling.rs
// Algorithm 7 Frodo.Gen(seedA) via AES-128     --> sampling.rs
// Algorithm 8 Frodo.Gen(seedA) via SHAKE-128   --> sampling.rs
// Algorithm 9 FrodoPKE.KeyGen                  --> pke.rs
// Algorithm 10 FrodoPKE.Enc                    --> pke.rs
// Algorithm 11 FrodoPKE.Dec                    --> pke.rs
// Algorithm 12 FrodoKEM.KeyGen()               --> kem.rs
// Algorithm 13 FrodoKEM.Encaps(pk)             --> kem.rs
// Algorithm 14 FrodoKEM.Decaps(sk, ct)         --> kem.rs
// Matrix arithmetic over Z_q                   --> matrix.rs
// SHAKE wrappers                               --> helpers.rs
//
// The six parameter sets are modules in this file with injected macro code
// that connects them into the functionality in kem.rs. Some of the 'obtuse'
// coding style is driven by clippy pedantic.

mod byte_fns;
mod helpers;
mod kem;
mod matrix;
mod pke;
mod sampling;
mod types;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;

// Relevant to all parameter sets: n̄ = m̄ = 8
const N_BAR: usize = 8;

// CDF tables of the per-level error distributions χ, monotone non-decreasing
// with all values <= 2^15 − 1. Support is ±(len − 1).
#[cfg(feature = "frodo-640")]
const CDF_TABLE_640: [u16; 13] = [
    4643, 13_363, 20_579, 25_843, 29_227, 31_145, 32_103, 32_525, 32_689, 32_745, 32_762, 32_766,
    32_767,
];
#[cfg(feature = "frodo-976")]
const CDF_TABLE_976: [u16; 11] =
    [5638, 15_915, 23_689, 28_571, 31_116, 32_217, 32_613, 32_731, 32_760, 32_766, 32_767];
#[cfg(feature = "frodo-1344")]
const CDF_TABLE_1344: [u16; 7] = [9142, 23_462, 30_338, 32_361, 32_725, 32_765, 32_767];


// This common functionality is injected into each parameter set module
macro_rules! functionality {
    () => {
        const S_LEN: usize = PARAMS.len_s;
        const PKH_LEN: usize = PARAMS.len_pkh;

        use crate::helpers::ensure;
        use crate::kem::{frodo_decaps, frodo_encaps, frodo_key_gen};
        use crate::traits::{Decaps, Encaps, KeyGen, SerDes};
        use rand_core::CryptoRngCore;
        use zeroize::{Zeroize, ZeroizeOnDrop};

        /// Serialized public key length (in bytes)
        pub const PK_LEN: usize = PARAMS.pk_len();
        /// Serialized secret key length (in bytes)
        pub const SK_LEN: usize = PARAMS.sk_len();
        /// Serialized ciphertext length (in bytes)
        pub const CT_LEN: usize = PARAMS.ct_len();
        /// Shared secret length (in bytes)
        pub const SS_LEN: usize = PARAMS.len_ss;

        /// Correctly sized public (encapsulation) key specific to the target parameter set.
        #[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
        pub struct PublicKey([u8; PK_LEN]);

        /// Correctly sized secret (decapsulation) key specific to the target parameter set.
        #[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
        pub struct SecretKey([u8; SK_LEN]);

        /// Correctly sized ciphertext specific to the target parameter set.
        #[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
        pub struct CipherText([u8; CT_LEN]);

        /// The agreed shared secret; comparison runs in constant time.
        #[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
        pub struct SharedSecret([u8; SS_LEN]);

        // Conservative (constant-time) paranoia...
        impl PartialEq for SharedSecret {
            fn eq(&self, other: &Self) -> bool {
                let mut result = true;
                for i in 0..self.0.len() {
                    result &= self.0[i] == other.0[i];
                }
                result
            }
        }

        /// Key generation for this parameter set: accepts no input, utilizes
        /// randomness, and produces a public and secret key pair. While the
        /// public key can be shared, the secret key must remain private.
        pub struct KG();

        impl KeyGen for KG {
            type PublicKey = PublicKey;
            type SecretKey = SecretKey;

            fn try_keygen_with_rng(
                rng: &mut impl CryptoRngCore,
            ) -> Result<(PublicKey, SecretKey), &'static str> {
                let (mut pk, mut sk) = ([0u8; PK_LEN], [0u8; SK_LEN]);
                frodo_key_gen(&PARAMS, rng, &mut pk, &mut sk)?;
                Ok((PublicKey(pk), SecretKey(sk)))
            }

            fn validate_keypair_vartime(pk: &[u8], sk: &[u8]) -> bool {
                if (pk.len() != PK_LEN) | (sk.len() != SK_LEN) {
                    return false;
                }
                // sk = s ‖ pk ‖ Sᵀ ‖ pkh: the embedded public key must match,
                // and pkh must equal SHAKE(pk)
                let same_pk = sk[S_LEN..S_LEN + PK_LEN] == pk[..];
                let mut pkh = [0u8; PKH_LEN];
                crate::helpers::shake(PARAMS.shake, &[pk], &mut pkh);
                let same_h = sk[SK_LEN - PKH_LEN..] == pkh[..];
                same_pk & same_h
            }
        }

        impl Encaps for PublicKey {
            type CipherText = CipherText;
            type SharedSecret = SharedSecret;

            fn try_encaps_with_rng(
                &self, rng: &mut impl CryptoRngCore,
            ) -> Result<(SharedSecret, CipherText), &'static str> {
                let (mut ct, mut ss) = ([0u8; CT_LEN], [0u8; SS_LEN]);
                frodo_encaps(&PARAMS, rng, &self.0, &mut ct, &mut ss)?;
                Ok((SharedSecret(ss), CipherText(ct)))
            }
        }

        impl Decaps for SecretKey {
            type CipherText = CipherText;
            type SharedSecret = SharedSecret;

            fn try_decaps(&self, ct: &CipherText) -> Result<SharedSecret, &'static str> {
                let mut ss = [0u8; SS_LEN];
                frodo_decaps(&PARAMS, &self.0, &ct.0, &mut ss)?;
                Ok(SharedSecret(ss))
            }
        }

        impl SerDes for PublicKey {
            type ByteArray = [u8; PK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
                // Any byte string of the correct length is a usable public
                // key; the unpacked coefficients are defined modulo q.
                ensure!(bytes.len() == PK_LEN, "incorrect public key length");
                let mut ba = [0u8; PK_LEN];
                ba.copy_from_slice(bytes);
                Ok(PublicKey(ba))
            }
        }

        impl SerDes for SecretKey {
            type ByteArray = [u8; SK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
                // Only the length is validated here; correspondence with a
                // public key can be checked with `validate_keypair_vartime`.
                ensure!(bytes.len() == SK_LEN, "incorrect secret key length");
                let mut ba = [0u8; SK_LEN];
                ba.copy_from_slice(bytes);
                Ok(SecretKey(ba))
            }
        }

        impl SerDes for CipherText {
            type ByteArray = [u8; CT_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
                // A wrong-sized ciphertext is the only decapsulation-side
                // malformation; anything else lands in implicit rejection.
                ensure!(bytes.len() == CT_LEN, "incorrect cipher length");
                let mut ba = [0u8; CT_LEN];
                ba.copy_from_slice(bytes);
                Ok(CipherText(ba))
            }
        }

        impl SerDes for SharedSecret {
            type ByteArray = [u8; SS_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
                // Not really needed but provided for symmetry.
                ensure!(bytes.len() == SS_LEN, "incorrect shared secret length");
                let mut ba = [0u8; SS_LEN];
                ba.copy_from_slice(bytes);
                Ok(SharedSecret(ba))
            }
        }
    };
}


/// Functionality for the FrodoKEM-640 parameter set with the AES-128 matrix
/// generator, claimed to be in NIST security category 1.
#[cfg(feature = "frodo-640")]
pub mod frodo640_aes {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-640-AES";

    const PARAMS: FrodoParams = FrodoParams {
        n: 640,
        n_bar: crate::N_BAR,
        q: 32_768,
        d: 15,
        b: 2,
        cdf_table: &crate::CDF_TABLE_640,
        gen: Gen::Aes128,
        shake: Shake::Shake128,
        len_seed_a: 16,
        len_seed_se: 16,
        len_z: 16,
        len_s: 16,
        len_mu: 16,
        len_k: 16,
        len_pkh: 16,
        len_ss: 16,
    };

    functionality!();
}


/// Functionality for the FrodoKEM-640 parameter set with the SHAKE-128 matrix
/// generator, claimed to be in NIST security category 1.
#[cfg(feature = "frodo-640")]
pub mod frodo640_shake {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-640-SHAKE";

    const PARAMS: FrodoParams = FrodoParams {
        n: 640,
        n_bar: crate::N_BAR,
        q: 32_768,
        d: 15,
        b: 2,
        cdf_table: &crate::CDF_TABLE_640,
        gen: Gen::Shake128,
        shake: Shake::Shake128,
        len_seed_a: 16,
        len_seed_se: 16,
        len_z: 16,
        len_s: 16,
        len_mu: 16,
        len_k: 16,
        len_pkh: 16,
        len_ss: 16,
    };

    functionality!();
}


/// Functionality for the FrodoKEM-976 parameter set with the AES-128 matrix
/// generator, claimed to be in NIST security category 3.
#[cfg(feature = "frodo-976")]
pub mod frodo976_aes {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-976-AES";

    const PARAMS: FrodoParams = FrodoParams {
        n: 976,
        n_bar: crate::N_BAR,
        q: 0, // q = 2^16
        d: 16,
        b: 3,
        cdf_table: &crate::CDF_TABLE_976,
        gen: Gen::Aes128,
        shake: Shake::Shake256,
        len_seed_a: 16,
        len_seed_se: 24,
        len_z: 16,
        len_s: 24,
        len_mu: 24,
        len_k: 24,
        len_pkh: 24,
        len_ss: 24,
    };

    functionality!();
}


/// Functionality for the FrodoKEM-976 parameter set with the SHAKE-128 matrix
/// generator, claimed to be in NIST security category 3.
#[cfg(feature = "frodo-976")]
pub mod frodo976_shake {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-976-SHAKE";

    const PARAMS: FrodoParams = FrodoParams {
        n: 976,
        n_bar: crate::N_BAR,
        q: 0, // q = 2^16
        d: 16,
        b: 3,
        cdf_table: &crate::CDF_TABLE_976,
        gen: Gen::Shake128,
        shake: Shake::Shake256,
        len_seed_a: 16,
        len_seed_se: 24,
        len_z: 16,
        len_s: 24,
        len_mu: 24,
        len_k: 24,
        len_pkh: 24,
        len_ss: 24,
    };

    functionality!();
}


/// Functionality for the FrodoKEM-1344 parameter set with the AES-128 matrix
/// generator, claimed to be in NIST security category 5.
#[cfg(feature = "frodo-1344")]
pub mod frodo1344_aes {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-1344-AES";

    const PARAMS: FrodoParams = FrodoParams {
        n: 1344,
        n_bar: crate::N_BAR,
        q: 0, // q = 2^16
        d: 16,
        b: 4,
        cdf_table: &crate::CDF_TABLE_1344,
        gen: Gen::Aes128,
        shake: Shake::Shake256,
        len_seed_a: 16,
        len_seed_se: 32,
        len_z: 16,
        len_s: 32,
        len_mu: 32,
        len_k: 32,
        len_pkh: 32,
        len_ss: 32,
    };

    functionality!();
}


/// Functionality for the FrodoKEM-1344 parameter set with the SHAKE-128 matrix
/// generator, claimed to be in NIST security category 5.
#[cfg(feature = "frodo-1344")]
pub mod frodo1344_shake {
    //!
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and secret key `sk`.
    //! 2. The originator serializes the public key via `pk.into_bytes()` and sends to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs `try_encaps()` to get the
    //!    shared secret `ss` and ciphertext `ct`.
    //! 4. The remote party serializes the ciphertext via `ct.into_bytes()` and sends to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then
    //!    runs `sk.try_decaps(&ct)` to get the shared secret `ss`.
    //! 6. Both the originator and remote party now have the same shared secret `ss`.

    use crate::types::{FrodoParams, Gen, Shake};

    /// Variant name, as spelled in the FrodoKEM specification.
    pub const NAME: &str = "FrodoKEM-1344-SHAKE";

    const PARAMS: FrodoParams = FrodoParams {
        n: 1344,
        n_bar: crate::N_BAR,
        q: 0, // q = 2^16
        d: 16,
        b: 4,
        cdf_table: &crate::CDF_TABLE_1344,
        gen: Gen::Shake128,
        shake: Shake::Shake256,
        len_seed_a: 16,
        len_seed_se: 32,
        len_z: 16,
        len_s: 32,
        len_mu: 32,
        len_k: 32,
        len_pkh: 32,
        len_ss: 32,
    };

    functionality!();
}
