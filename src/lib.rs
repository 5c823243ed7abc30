/*
    ssh signature -> circuit witness

    1. pull n (and e) out of an `ssh-rsa` key line or out of the key
       embedded in an SSHSIG envelope, pull s out of the envelope

    2. hash: H(message), then H(signed data) where signed data is
       "SSHSIG" || namespace || reserved || hash_algorithm || H(message)
       hashing is left to a DigestProvider so hosts can bring their own

    3. EM = EMSA-PKCS1-v1_5(H(signed data)) with k = byte length of n
       the signature is valid iff s^e mod n == EM, that last check is the
       job of whatever consumes the witness

    4. n, s and EM are cut into fixed width limbs (120 bits x 35 by default)
       so they can be fed to a circuit that cannot hold 4096 bit numbers
*/

pub mod chunk;
pub mod digest;
pub mod error;
pub mod fixtures;
pub mod pkcs1;
pub mod public_key;
pub mod sshsig;
pub mod wire;
pub mod witness_gen;

pub use chunk::{
    split_biguint, split_biguint_checked, split_into_chunks, split_into_chunks_checked,
    ChunkConfig, Chunks,
};
pub use digest::{message_digest_hex, DigestProvider, HashAlg, Sha2Digest};
pub use error::{Error, Result};
pub use pkcs1::{emsa_pkcs1_v15, pkcs1_v15_sha512};
pub use public_key::{parse_public_key, parse_public_key_list, SshRsaPublicKey};
pub use sshsig::{parse_raw_signature, parse_signature, SignatureParts, SshSig};
pub use wire::{WireReader, WireWriter};
pub use witness_gen::{RsaLimbs, RsaWitness};
