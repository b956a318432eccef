use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;


/// The `KeyGen` trait is defined to allow trait objects.
pub trait KeyGen {
    /// The public key, sent from the decapsulating party to the encapsulating party.
    type PublicKey;
    /// The secret key, retained by the decapsulating party.
    type SecretKey;


    /// Generates a public and secret key pair specific to this parameter set. <br>
    /// This function utilizes the OS default random number generator and operates
    /// in constant time.
    /// # Errors
    /// Returns an error when the random number generator fails.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake; // Could also be frodo976_* or frodo1344_*.
    /// use frodokem::traits::{Decaps, Encaps, KeyGen, SerDes};
    ///
    /// let (pk, sk) = frodo640_shake::KG::try_keygen()?; // Party 1 generates the key pair
    /// let pk_bytes = pk.into_bytes(); // Party 1 serializes the public key and sends it
    ///
    /// let pk2 = frodo640_shake::PublicKey::try_from_bytes(&pk_bytes)?; // Party 2 deserializes
    /// let (ss2, ct) = pk2.try_encaps()?; // Party 2 derives the shared secret and ciphertext
    ///
    /// let ss1 = sk.try_decaps(&ct)?; // Party 1 recovers the shared secret
    /// assert_eq!(ss1, ss2);
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen() -> Result<(Self::PublicKey, Self::SecretKey), &'static str> {
        Self::try_keygen_with_rng(&mut OsRng)
    }


    /// Generates a public and secret key pair specific to this parameter set,
    /// using a provided random number generator. This is the hook for
    /// deterministic (e.g. known-answer) operation. <br>
    /// This function operates in constant time.
    /// # Errors
    /// Returns an error when the random number generator fails.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake;
    /// use frodokem::traits::{Decaps, Encaps, KeyGen};
    /// use rand_core::OsRng;
    ///
    /// let (pk, sk) = frodo640_shake::KG::try_keygen_with_rng(&mut OsRng)?;
    /// let (ss2, ct) = pk.try_encaps_with_rng(&mut OsRng)?;
    /// let ss1 = sk.try_decaps(&ct)?;
    /// assert_eq!(ss1, ss2);
    /// # }
    /// # Ok(())}
    /// ```
    fn try_keygen_with_rng(
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::PublicKey, Self::SecretKey), &'static str>;


    /// Performs validation between serialized public and secret keys, perhaps in
    /// the scenario where both have been stored to disk and then retrieved: the
    /// secret key must embed the public key byte-for-byte along with its running
    /// hash. This function is not intended to operate in constant-time.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake;
    /// use frodokem::traits::{KeyGen, SerDes};
    ///
    /// let (pk, sk) = frodo640_shake::KG::try_keygen()?;
    /// let pk_bytes = pk.into_bytes();
    /// let sk_bytes = sk.into_bytes();
    /// assert!(frodo640_shake::KG::validate_keypair_vartime(&pk_bytes, &sk_bytes));
    /// # }
    /// # Ok(())}
    /// ```
    fn validate_keypair_vartime(pk: &[u8], sk: &[u8]) -> bool;
}


/// The `Encaps` trait covers the generation of a shared secret and ciphertext
/// from a public key.
pub trait Encaps {
    /// The shared secret, agreed between the two parties.
    type SharedSecret;
    /// The ciphertext transporting the shared secret to the decapsulating party.
    type CipherText;


    /// Generates a shared secret and the ciphertext that transports it. <br>
    /// This function utilizes the OS default random number generator and
    /// operates in constant time.
    /// # Errors
    /// Returns an error when the random number generator fails; a malformed
    /// public key is caught at deserialization.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake;
    /// use frodokem::traits::{Decaps, Encaps, KeyGen};
    ///
    /// let (pk, sk) = frodo640_shake::KG::try_keygen()?;
    /// let (ss2, ct) = pk.try_encaps()?;
    /// let ss1 = sk.try_decaps(&ct)?;
    /// assert_eq!(ss1, ss2);
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_encaps(&self) -> Result<(Self::SharedSecret, Self::CipherText), &'static str> {
        self.try_encaps_with_rng(&mut OsRng)
    }


    /// Generates a shared secret and ciphertext using a provided random number
    /// generator; the hook for deterministic (e.g. known-answer) operation. <br>
    /// This function operates in constant time.
    /// # Errors
    /// Returns an error when the random number generator fails.
    fn try_encaps_with_rng(
        &self, rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::SharedSecret, Self::CipherText), &'static str>;
}


/// The `Decaps` trait covers the recovery of the shared secret from a
/// ciphertext with the secret key.
pub trait Decaps {
    /// The ciphertext received from the encapsulating party.
    type CipherText;
    /// The shared secret, agreed between the two parties.
    type SharedSecret;


    /// Recovers the shared secret from a ciphertext. An invalid-but-well-sized
    /// ciphertext is *not* an error: it yields a pseudorandom shared secret
    /// deterministically derived from the secret key (implicit rejection). <br>
    /// This function operates in constant time: both the accept and reject
    /// paths run the full re-encryption and the final SHAKE.
    /// # Errors
    /// Returns an error only for a malformed ciphertext or secret key length.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake;
    /// use frodokem::traits::{Decaps, Encaps, KeyGen};
    ///
    /// let (pk, sk) = frodo640_shake::KG::try_keygen()?;
    /// let (ss2, ct) = pk.try_encaps()?;
    /// let ss1 = sk.try_decaps(&ct)?;
    /// assert_eq!(ss1, ss2);
    /// # }
    /// # Ok(())}
    /// ```
    fn try_decaps(&self, ct: &Self::CipherText) -> Result<Self::SharedSecret, &'static str>;
}


/// The `SerDes` trait provides the byte-exact wire formats of keys and
/// ciphertexts.
pub trait SerDes {
    /// The fixed-size byte array holding the serialized form.
    type ByteArray;


    /// Produces the serialized form as a fixed-size byte array.
    fn into_bytes(self) -> Self::ByteArray;


    /// Consumes a serialized byte string, validating its length.
    /// # Errors
    /// Returns `"incorrect public key length"`, `"incorrect secret key length"`
    /// or `"incorrect cipher length"` on a byte string of the wrong size; these
    /// are the only malformed-input conditions the KEM surfaces.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "frodo-640")] {
    /// use frodokem::frodo640_shake;
    /// use frodokem::traits::{KeyGen, SerDes};
    ///
    /// let (pk, _sk) = frodo640_shake::KG::try_keygen()?;
    /// let pk_bytes = pk.into_bytes();
    /// let pk2 = frodo640_shake::PublicKey::try_from_bytes(&pk_bytes)?;
    /// assert!(frodo640_shake::PublicKey::try_from_bytes(&pk_bytes[1..]).is_err());
    /// # let _ = pk2;
    /// # }
    /// # Ok(())}
    /// ```
    fn try_from_bytes(bytes: &[u8]) -> Result<Self, &'static str>
    where
        Self: Sized;
}
