use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use num_bigint::BigUint;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::{Digest, Sha512};
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::public_key::SshRsaPublicKey;
use crate::sshsig::{SshSig, MAGIC, VERSION};
use crate::wire::WireWriter;

const KEY_BITS: usize = 2048;

/// Encodes an SSHSIG envelope around an already computed signature.
pub fn encode_sshsig(
    key: &SshRsaPublicKey,
    namespace: &str,
    hash_algorithm: &str,
    signature_algorithm: &str,
    signature: &BigUint,
) -> String {
    let mut sig_blob = WireWriter::new();
    sig_blob
        .write_string(signature_algorithm.as_bytes())
        .write_mpint(signature);

    let mut writer = WireWriter::new();
    writer
        .write_raw(MAGIC)
        .write_uint32(VERSION)
        .write_string(&key.to_wire())
        .write_string(namespace.as_bytes())
        .write_string(b"")
        .write_string(hash_algorithm.as_bytes())
        .write_string(&sig_blob.into_bytes());
    STANDARD.encode(writer.into_bytes())
}

/// Signs `data` the way `ssh-keygen -Y sign` does with a fresh key and
/// returns the key line and the base64 envelope.
pub fn sign(data: &[u8], namespace: &str) -> (String, String) {
    let mut rng = rand_core::OsRng;

    let private_key = RsaPrivateKey::new(&mut rng, KEY_BITS).expect("failed to generate a key");
    let public_key = private_key.to_public_key();
    let key = SshRsaPublicKey {
        e: BigUint::from_bytes_be(&public_key.e().to_bytes_be()),
        n: BigUint::from_bytes_be(&public_key.n().to_bytes_be()),
        comment: Some("witness@test".to_string()),
    };

    let template = SshSig {
        public_key: key.clone(),
        namespace: namespace.to_string(),
        reserved: vec![],
        hash_algorithm: "sha512".to_string(),
        signature_algorithm: "rsa-sha2-512".to_string(),
        signature: BigUint::from(0u32),
    };
    let signed_data = template.signed_data(&Sha512::digest(data));

    let signing_key = SigningKey::<Sha512>::new(private_key);
    let sig = signing_key.sign_with_rng(&mut rng, &signed_data);
    let s = BigUint::from_bytes_be(&sig.to_bytes());

    let envelope = encode_sshsig(&key, namespace, "sha512", "rsa-sha2-512", &s);
    (key.to_line(), envelope)
}

#[test]
fn test_rsa_signature() {
    let (line, envelope) = sign(b"hello", "file");
    let sig = SshSig::from_base64(&envelope).unwrap();
    assert_eq!(sig.public_key.n, crate::public_key::parse_public_key(&line).unwrap());
    assert_eq!(sig.public_key.bits(), KEY_BITS as u64);
}
