use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while decoding SSH keys and signatures or building
/// witness values from them. Every parser stops at the first bad field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed key line or base64 payload.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A type string inside the wire data is not the one expected.
    #[error("algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("bad SSHSIG magic preamble")]
    BadMagic,

    #[error("unsupported SSHSIG version {0}")]
    UnsupportedVersion(u32),

    /// The reader was asked for more bytes than the buffer holds.
    #[error("truncated data: needed {needed} bytes, {remaining} remaining")]
    TruncatedData { needed: usize, remaining: usize },

    #[error("modulus of {modulus_len} bytes is too short, at least {required} bytes required")]
    InsufficientModulusSize { modulus_len: usize, required: usize },

    /// Negative input to the chunker.
    #[error("chunking is only defined for non-negative integers")]
    DomainError,

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("unsupported hash algorithm {0:?}")]
    UnsupportedHash(String),

    #[error("value of {bits} bits does not fit into {capacity} bits of chunks")]
    ChunkOverflow { bits: u64, capacity: u64 },

    /// Limb width must stay below the field's `NUM_BITS` to be lifted into a field element.
    #[error("limb width of {0} bits is too wide for a field element")]
    LimbTooWide(usize),

    #[error("digest provider failed: {0}")]
    Digest(String),
}
