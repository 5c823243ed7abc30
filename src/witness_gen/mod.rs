#[cfg(test)]
pub(crate) mod signature;
pub mod utils;

use ff::PrimeField;
use halo2_proofs::circuit::Value;
use log::debug;

use crate::chunk::{split_biguint_checked, ChunkConfig, Chunks};
use crate::error::{Error, Result};
use crate::pkcs1::emsa_pkcs1_v15;
use crate::sshsig::SshSig;
use utils::{array_value, chunks_to_field};

/*
    a circuit checking s^e = EM mod n needs three numbers as limbs

    n   - modulus, from the key inside the envelope
    s   - signature
    EM  - PKCS#1 v1.5 encoding of the signed-data digest

    all three are split with the same layout so limb i of each lines up
*/

/// Limb form of one SSHSIG verification instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaLimbs {
    pub n: Chunks,
    pub sig: Chunks,
    pub padded: Chunks,
}

impl RsaLimbs {
    /// `digest_hex` is the digest of the signed data, see
    /// [`crate::digest::message_digest_hex`]. Fails `ChunkOverflow` when the
    /// modulus does not fit `config`.
    pub fn generate(sig: &SshSig, digest_hex: &str, config: ChunkConfig) -> Result<Self> {
        let padded = emsa_pkcs1_v15(sig.hash_alg()?, digest_hex, sig.modulus())?;
        debug!(
            "witness limbs: {} x {} bits for {} bit modulus",
            config.num_chunks,
            config.chunk_bits,
            sig.modulus().bits()
        );
        Ok(Self {
            n: split_biguint_checked(sig.modulus(), config)?,
            sig: split_biguint_checked(&sig.signature, config)?,
            padded: split_biguint_checked(&padded, config)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct RsaWitness<F: PrimeField, const N: usize> {
    pub n: [Value<F>; N],
    pub sig: [Value<F>; N],
    pub padded: [Value<F>; N],
}

impl<F: PrimeField, const N: usize> RsaWitness<F, N> {
    pub fn generate(sig: &SshSig, digest_hex: &str, chunk_bits: usize) -> Result<Self> {
        let limbs = RsaLimbs::generate(sig, digest_hex, ChunkConfig::new(chunk_bits, N))?;
        Self::from_limbs(&limbs)
    }

    pub fn from_limbs(limbs: &RsaLimbs) -> Result<Self> {
        Ok(Self {
            n: to_values(&limbs.n)?,
            sig: to_values(&limbs.sig)?,
            padded: to_values(&limbs.padded)?,
        })
    }
}

/// Shorter limb arrays are zero extended, longer ones must only carry zeros past `N`.
fn to_values<F: PrimeField, const N: usize>(chunks: &Chunks) -> Result<[Value<F>; N]> {
    if chunks.limbs.iter().skip(N).any(|limb| limb.bits() != 0) {
        return Err(Error::ChunkOverflow {
            bits: chunks.recombine().bits(),
            capacity: (N as u64).saturating_mul(chunks.chunk_bits as u64),
        });
    }
    let limbs = chunks_to_field::<F>(chunks)?;
    let array: [F; N] = std::array::from_fn(|i| limbs.get(i).copied().unwrap_or(F::ZERO));
    Ok(array_value(array))
}
