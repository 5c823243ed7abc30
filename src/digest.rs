use async_trait::async_trait;
use log::debug;
use rsa::sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};
use crate::sshsig::SshSig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlg {
    Sha256,
    Sha512,
}

impl HashAlg {
    /// Name used in the SSHSIG `hash_algorithm` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlg::Sha256 => "sha256",
            HashAlg::Sha512 => "sha512",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "sha256" => Ok(HashAlg::Sha256),
            "sha512" => Ok(HashAlg::Sha512),
            other => Err(Error::UnsupportedHash(other.to_string())),
        }
    }

    pub fn output_len(&self) -> usize {
        match self {
            HashAlg::Sha256 => 32,
            HashAlg::Sha512 => 64,
        }
    }

    /// DER encoded DigestInfo header, the raw digest follows it directly.
    pub fn digest_info_prefix(&self) -> &'static [u8] {
        match self {
            HashAlg::Sha256 => &[
                0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
                0x02, 0x01, 0x05, 0x00, 0x04, 0x20,
            ],
            HashAlg::Sha512 => &[
                0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
                0x02, 0x03, 0x05, 0x00, 0x04, 0x40,
            ],
        }
    }
}

/// Host supplied hashing. Implementations return the lower-case hex digest.
#[async_trait]
pub trait DigestProvider: Send + Sync {
    async fn digest(&self, alg: HashAlg, data: &[u8]) -> Result<String>;
}

/// In-process SHA-2.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha2Digest;

#[async_trait]
impl DigestProvider for Sha2Digest {
    async fn digest(&self, alg: HashAlg, data: &[u8]) -> Result<String> {
        Ok(match alg {
            HashAlg::Sha256 => hex::encode(Sha256::digest(data)),
            HashAlg::Sha512 => hex::encode(Sha512::digest(data)),
        })
    }
}

/// Digest that the RSA signature inside `sig` covers for `message`:
/// `H(signed_data(H(message)))` with the envelope's hash algorithm.
pub async fn message_digest_hex(
    provider: &dyn DigestProvider,
    sig: &SshSig,
    message: &[u8],
) -> Result<String> {
    let alg = sig.hash_alg()?;
    let inner = provider.digest(alg, message).await?;
    let inner = hex::decode(&inner).map_err(|e| Error::Digest(e.to_string()))?;
    if inner.len() != alg.output_len() {
        return Err(Error::Digest(format!(
            "provider returned {} bytes for {}",
            inner.len(),
            alg.as_str()
        )));
    }
    debug!("hashing SSHSIG signed data, namespace {:?}", sig.namespace);
    provider.digest(alg, &sig.signed_data(&inner)).await
}
