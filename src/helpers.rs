use crate::types::Shake;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};


/// If the condition is not met, return an error message. Borrowed from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($msg);
        }
    };
}

pub(crate) use ensure; // make available throughout crate


/// The variant-wide XOF: SHAKE-128 for Frodo-640, SHAKE-256 for Frodo-976
/// and Frodo-1344. Absorbs the concatenation of `inputs` and squeezes
/// exactly `out.len()` bytes.
pub(crate) fn shake(kind: Shake, inputs: &[&[u8]], out: &mut [u8]) {
    match kind {
        Shake::Shake128 => {
            let mut hasher = Shake128::default();
            inputs.iter().for_each(|b| hasher.update(b));
            hasher.finalize_xof().read(out);
        }
        Shake::Shake256 => {
            let mut hasher = Shake256::default();
            inputs.iter().for_each(|b| hasher.update(b));
            hasher.finalize_xof().read(out);
        }
    }
}
