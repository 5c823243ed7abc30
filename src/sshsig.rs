/*
    SSHSIG envelope (openssh PROTOCOL.sshsig)

    byte[6]   "SSHSIG"
    uint32    version (1)
    string    publickey        ssh-rsa wire key
    string    namespace
    string    reserved
    string    hash_algorithm
    string    signature        string sig-algorithm || mpint s

    what is actually signed with the key is not the message but

    byte[6]   "SSHSIG"
    string    namespace
    string    reserved
    string    hash_algorithm
    string    H(message)
*/

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, trace};
use num_bigint::BigUint;

use crate::digest::HashAlg;
use crate::error::{Error, Result};
use crate::public_key::SshRsaPublicKey;
use crate::wire::{WireReader, WireWriter};

pub const MAGIC: &[u8; 6] = b"SSHSIG";
pub const VERSION: u32 = 1;

const BEGIN_ARMOR: &str = "-----BEGIN SSH SIGNATURE-----";
const END_ARMOR: &str = "-----END SSH SIGNATURE-----";

/// Modulus and signature integers recovered from an envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParts {
    pub modulus: BigUint,
    pub signature: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SshSig {
    pub public_key: SshRsaPublicKey,
    pub namespace: String,
    pub reserved: Vec<u8>,
    pub hash_algorithm: String,
    pub signature_algorithm: String,
    pub signature: BigUint,
}

impl SshSig {
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| Error::InvalidFormat(format!("invalid base64 signature: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Accepts the `-----BEGIN SSH SIGNATURE-----` form written by `ssh-keygen -Y sign`.
    pub fn from_armored(armored: &str) -> Result<Self> {
        let body = armored
            .trim()
            .strip_prefix(BEGIN_ARMOR)
            .and_then(|rest| rest.strip_suffix(END_ARMOR))
            .ok_or_else(|| Error::InvalidFormat("missing SSH SIGNATURE armor".into()))?;
        let encoded: String = body.split_whitespace().collect();
        Self::from_base64(&encoded)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(bytes);
        reader.read_magic(MAGIC)?;

        let version = reader.read_uint32()?;
        if version != VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let public_key_blob = reader.read_string()?;
        let namespace = reader.read_string()?;
        let reserved = reader.read_string()?;
        let hash_algorithm = reader.read_string()?;
        let signature_blob = reader.read_string()?;
        if !reader.is_empty() {
            trace!("ignoring {} trailing envelope bytes", reader.remaining());
        }

        let public_key = SshRsaPublicKey::from_wire(public_key_blob)?;

        let mut sig_reader = WireReader::new(signature_blob);
        let signature_algorithm = text_field("signature algorithm", sig_reader.read_string()?)?;
        let signature = sig_reader.read_mpint()?;

        let sig = Self {
            public_key,
            namespace: text_field("namespace", namespace)?,
            reserved: reserved.to_vec(),
            hash_algorithm: text_field("hash algorithm", hash_algorithm)?,
            signature_algorithm,
            signature,
        };
        debug!(
            "parsed SSHSIG: namespace {:?}, hash {}, {} over {} bit key",
            sig.namespace,
            sig.hash_algorithm,
            sig.signature_algorithm,
            sig.public_key.bits()
        );
        Ok(sig)
    }

    pub fn hash_alg(&self) -> Result<HashAlg> {
        HashAlg::from_name(&self.hash_algorithm)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.public_key.n
    }

    pub fn parts(&self) -> SignatureParts {
        SignatureParts {
            modulus: self.public_key.n.clone(),
            signature: self.signature.clone(),
        }
    }

    /// Bytes the RSA key signed, given the digest of the message.
    pub fn signed_data(&self, message_digest: &[u8]) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer
            .write_raw(MAGIC)
            .write_string(self.namespace.as_bytes())
            .write_string(&self.reserved)
            .write_string(self.hash_algorithm.as_bytes())
            .write_string(message_digest);
        writer.into_bytes()
    }
}

// signed_data re-encodes these, so a lossy conversion would change the signed bytes
fn text_field(name: &str, bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| Error::InvalidFormat(format!("{name} is not valid UTF-8")))
}

/// Recovers `(modulus, signature)` from a base64 SSHSIG envelope.
pub fn parse_signature(encoded: &str) -> Result<SignatureParts> {
    SshSig::from_base64(encoded).map(|sig| sig.parts())
}

/// Legacy form: base64 of a bare big-endian signature.
pub fn parse_raw_signature(encoded: &str) -> Result<BigUint> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::InvalidFormat(format!("invalid base64 signature: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::InvalidFormat("empty signature".into()));
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::witness_gen::signature::encode_sshsig;

    fn envelope(version: u32, public_key: &[u8], signature_blob: &[u8]) -> String {
        let mut writer = WireWriter::new();
        writer
            .write_raw(MAGIC)
            .write_uint32(version)
            .write_string(public_key)
            .write_string(b"file")
            .write_string(b"")
            .write_string(b"sha512")
            .write_string(signature_blob);
        STANDARD.encode(writer.into_bytes())
    }

    fn sample_key() -> SshRsaPublicKey {
        SshRsaPublicKey {
            e: BigUint::from(65537u32),
            n: (BigUint::from(1u32) << 2047u32) + 12345u32,
            comment: None,
        }
    }

    #[test]
    fn test_parse_fixture_envelope() {
        let _ = env_logger::builder().is_test(true).try_init();
        let fixtures = fixtures::load();
        let sig = SshSig::from_base64(fixtures.sshsig_base64).unwrap();

        assert_eq!(sig.namespace, fixtures.sshsig_namespace);
        assert_eq!(sig.hash_algorithm, "sha512");
        assert_eq!(sig.signature_algorithm, "rsa-sha2-512");
        assert!(sig.reserved.is_empty());
        assert_eq!(sig.public_key.e, BigUint::from(65537u32));

        let parts = parse_signature(fixtures.sshsig_base64).unwrap();
        let modulus: BigUint = fixtures::SSHSIG_MODULUS_DECIMAL.parse().unwrap();
        let signature: BigUint = fixtures::SSHSIG_SIGNATURE_DECIMAL.parse().unwrap();
        assert_eq!(parts.modulus, modulus);
        assert_eq!(parts.signature, signature);
        assert_eq!(
            parts.modulus,
            crate::public_key::parse_public_key(fixtures.sshsig_public_key).unwrap()
        );
    }

    #[test]
    fn test_armored_matches_base64() {
        let fixtures = fixtures::load();
        assert_eq!(
            SshSig::from_armored(fixtures.sshsig_armored).unwrap(),
            SshSig::from_base64(fixtures.sshsig_base64).unwrap()
        );
        assert!(matches!(
            SshSig::from_armored(fixtures.sshsig_base64),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_encode_decode_keeps_integers() {
        let key = sample_key();
        let s = (BigUint::from(0xdead_beefu32) << 1900u32) + 7u32;
        let encoded = encode_sshsig(&key, "git", "sha512", "rsa-sha2-512", &s);
        let parts = parse_signature(&encoded).unwrap();
        assert_eq!(parts.modulus, key.n);
        assert_eq!(parts.signature, s);
        assert_eq!(SshSig::from_base64(&encoded).unwrap().namespace, "git");
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = STANDARD.decode(fixtures::SSHSIG_BASE64).unwrap();
        bytes[0] = b'X';
        assert_eq!(
            parse_signature(&STANDARD.encode(bytes)),
            Err(Error::BadMagic)
        );
        assert_eq!(parse_signature("U1NI"), Err(Error::BadMagic));
    }

    #[test]
    fn test_unsupported_version() {
        let encoded = envelope(2, &sample_key().to_wire(), b"");
        assert_eq!(parse_signature(&encoded), Err(Error::UnsupportedVersion(2)));
    }

    #[test]
    fn test_truncated_envelope() {
        let mut bytes = STANDARD.decode(fixtures::SSHSIG_BASE64).unwrap();
        bytes.truncate(bytes.len() - 10);
        assert!(matches!(
            parse_signature(&STANDARD.encode(bytes)),
            Err(Error::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_empty_signature_blob() {
        let encoded = envelope(1, &sample_key().to_wire(), b"");
        assert!(matches!(
            parse_signature(&encoded),
            Err(Error::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_non_rsa_key_in_envelope() {
        let mut key = WireWriter::new();
        key.write_string(b"ssh-ed25519").write_string(&[7u8; 32]);
        let encoded = envelope(1, &key.into_bytes(), b"");
        assert!(matches!(
            parse_signature(&encoded),
            Err(Error::AlgorithmMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            parse_signature("%%%"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_signed_data_layout() {
        let fixtures = fixtures::load();
        let sig = SshSig::from_base64(fixtures.sshsig_base64).unwrap();
        let data = sig.signed_data(&[0xaa; 64]);

        let mut reader = WireReader::new(&data);
        reader.read_magic(MAGIC).unwrap();
        assert_eq!(reader.read_string().unwrap(), b"file");
        assert_eq!(reader.read_string().unwrap(), b"");
        assert_eq!(reader.read_string().unwrap(), b"sha512");
        assert_eq!(reader.read_string().unwrap(), &[0xaa; 64][..]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_non_utf8_namespace() {
        let mut sig_blob = WireWriter::new();
        sig_blob
            .write_string(b"rsa-sha2-512")
            .write_mpint(&BigUint::from(99u32));
        let mut writer = WireWriter::new();
        writer
            .write_raw(MAGIC)
            .write_uint32(VERSION)
            .write_string(&sample_key().to_wire())
            .write_string(&[0x66, 0xff, 0x66])
            .write_string(b"")
            .write_string(b"sha512")
            .write_string(&sig_blob.into_bytes());
        assert_eq!(
            SshSig::from_bytes(&writer.into_bytes()),
            Err(Error::InvalidFormat("namespace is not valid UTF-8".into()))
        );

        // valid non-ascii text goes back into the signed data unchanged
        let s = BigUint::from(1u32);
        let encoded = encode_sshsig(&sample_key(), "f\u{ff}le", "sha512", "rsa-sha2-512", &s);
        let sig = SshSig::from_base64(&encoded).unwrap();
        let data = sig.signed_data(&[]);
        let mut reader = WireReader::new(&data);
        reader.read_magic(MAGIC).unwrap();
        assert_eq!(reader.read_string().unwrap(), "f\u{ff}le".as_bytes());
    }

    #[test]
    fn test_legacy_raw_signature() {
        let fixtures = fixtures::load();
        let s = parse_raw_signature(fixtures.legacy_signature).unwrap();
        assert!(s.bits() <= 1024);
        assert!(s.bits() > 1016);
        assert_eq!(s.to_bytes_be()[..2], [0x98, 0xc3]);

        assert!(matches!(parse_raw_signature(""), Err(Error::InvalidFormat(_))));
        assert!(matches!(
            parse_raw_signature("no good"),
            Err(Error::InvalidFormat(_))
        ));
    }
}
