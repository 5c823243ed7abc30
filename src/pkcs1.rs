/*
    EMSA-PKCS1-v1_5 (RFC 8017, section 9.2)

    EM = 0x00 || 0x01 || PS || 0x00 || T

    T  = DigestInfo prefix || H
    PS = 0xff repeated k - 3 - len(T) times, at least 8 of them

    k is the byte length of the modulus. EM is returned as the big-endian
    integer so it can be compared against s^e mod n directly
*/

use log::trace;
use num_bigint::BigUint;
use num_integer::Integer;

use crate::digest::HashAlg;
use crate::error::{Error, Result};

pub const MIN_PADDING_LEN: usize = 8;

pub fn modulus_byte_len(modulus: &BigUint) -> usize {
    Integer::div_ceil(&modulus.bits(), &8) as usize
}

/// Builds the encoded message for `digest_hex` under `modulus`.
pub fn emsa_pkcs1_v15(alg: HashAlg, digest_hex: &str, modulus: &BigUint) -> Result<BigUint> {
    let digest = decode_digest(alg, digest_hex)?;
    let prefix = alg.digest_info_prefix();

    let k = modulus_byte_len(modulus);
    let t_len = prefix.len() + digest.len();
    let required = 3 + t_len + MIN_PADDING_LEN;
    if k < required {
        return Err(Error::InsufficientModulusSize {
            modulus_len: k,
            required,
        });
    }
    let ps_len = k - 3 - t_len;

    let mut em = Vec::with_capacity(k);
    em.extend_from_slice(&[0x00, 0x01]);
    em.resize(2 + ps_len, 0xff);
    em.push(0x00);
    em.extend_from_slice(prefix);
    em.extend_from_slice(&digest);
    debug_assert_eq!(em.len(), k);

    trace!("encoded {} byte message with {} bytes of padding", k, ps_len);
    Ok(BigUint::from_bytes_be(&em))
}

/// SHA-512 DigestInfo variant, the one SSHSIG `rsa-sha2-512` signatures use.
pub fn pkcs1_v15_sha512(digest_hex: &str, modulus: &BigUint) -> Result<BigUint> {
    emsa_pkcs1_v15(HashAlg::Sha512, digest_hex, modulus)
}

fn decode_digest(alg: HashAlg, digest_hex: &str) -> Result<Vec<u8>> {
    let digest = hex::decode(digest_hex).map_err(|e| Error::InvalidDigest(e.to_string()))?;
    if digest.len() != alg.output_len() {
        return Err(Error::InvalidDigest(format!(
            "{} digest must be {} bytes, got {}",
            alg.as_str(),
            alg.output_len(),
            digest.len()
        )));
    }
    Ok(digest)
}
