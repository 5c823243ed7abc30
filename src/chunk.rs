use log::trace;
use num_bigint::{BigInt, BigUint};

use crate::error::{Error, Result};

pub const DEFAULT_CHUNK_BITS: usize = 120;
pub const DEFAULT_NUM_CHUNKS: usize = 35;

/// Limb layout. The default 35 x 120 = 4200 bits covers 4096 bit RSA values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkConfig {
    pub chunk_bits: usize,
    pub num_chunks: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_bits: DEFAULT_CHUNK_BITS,
            num_chunks: DEFAULT_NUM_CHUNKS,
        }
    }
}

impl ChunkConfig {
    pub fn new(chunk_bits: usize, num_chunks: usize) -> Self {
        Self {
            chunk_bits,
            num_chunks,
        }
    }

    /// Saturates instead of wrapping for absurd layouts.
    pub fn capacity_bits(&self) -> u64 {
        (self.chunk_bits as u64).saturating_mul(self.num_chunks as u64)
    }

    fn mask(&self) -> BigUint {
        (BigUint::from(1u32) << self.chunk_bits) - 1u32
    }
}

/// Fixed-width limbs, least significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunks {
    pub chunk_bits: usize,
    pub limbs: Vec<BigUint>,
}

impl Chunks {
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.limbs.iter().map(|limb| limb.to_str_radix(10)).collect()
    }

    /// sum(limb[i] << i * chunk_bits)
    pub fn recombine(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::from(0u32), |acc, limb| (acc << self.chunk_bits) + limb)
    }
}

/// Splits `value` into `num_chunks` limbs of `chunk_bits` each.
///
/// Bits above `chunk_bits * num_chunks` are dropped without error, size the
/// layout for the value domain or use [`split_into_chunks_checked`].
pub fn split_into_chunks(value: &BigInt, config: ChunkConfig) -> Result<Chunks> {
    let value = value.to_biguint().ok_or(Error::DomainError)?;
    Ok(split_biguint(&value, config))
}

pub fn split_biguint(value: &BigUint, config: ChunkConfig) -> Chunks {
    let mask = config.mask();
    let mut rest = value.clone();
    let mut limbs = Vec::with_capacity(config.num_chunks);
    for _ in 0..config.num_chunks {
        limbs.push(&rest & &mask);
        rest >>= config.chunk_bits;
    }
    trace!(
        "split {} bit value into {} x {} bit chunks",
        value.bits(),
        config.num_chunks,
        config.chunk_bits
    );
    Chunks {
        chunk_bits: config.chunk_bits,
        limbs,
    }
}

/// Like [`split_into_chunks`] but refuses values that do not fit the layout.
pub fn split_into_chunks_checked(value: &BigInt, config: ChunkConfig) -> Result<Chunks> {
    let value = value.to_biguint().ok_or(Error::DomainError)?;
    split_biguint_checked(&value, config)
}

pub fn split_biguint_checked(value: &BigUint, config: ChunkConfig) -> Result<Chunks> {
    if value.bits() > config.capacity_bits() {
        return Err(Error::ChunkOverflow {
            bits: value.bits(),
            capacity: config.capacity_bits(),
        });
    }
    Ok(split_biguint(value, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::public_key::parse_public_key;

    #[test]
    fn test_small_value() {
        let chunks = split_biguint(&BigUint::from(0x1234_5678u32), ChunkConfig::new(8, 6));
        assert_eq!(
            chunks.to_decimal_strings(),
            vec!["120", "86", "52", "18", "0", "0"]
        );
        assert_eq!(chunks.len(), 6);
    }

    #[test]
    fn test_default_layout() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_bits, 120);
        assert_eq!(config.num_chunks, 35);
        assert_eq!(config.capacity_bits(), 4200);
    }

    #[test]
    fn test_recombine_fixture_moduli() {
        let fixtures = fixtures::load();
        for (name, line) in fixtures.public_keys {
            let n = parse_public_key(line).unwrap();
            let chunks = split_biguint(&n, ChunkConfig::default());
            assert_eq!(chunks.len(), 35, "{name}");
            assert!(chunks.limbs.iter().all(|limb| limb.bits() <= 120));
            assert_eq!(chunks.recombine(), n, "{name}");
        }
    }

    #[test]
    fn test_golden_limbs_2048() {
        let n: BigUint = fixtures::SSHSIG_MODULUS_DECIMAL.parse().unwrap();
        let chunks = split_biguint(&n, ChunkConfig::default()).to_decimal_strings();
        assert_eq!(chunks[0], "860276832582561898711766255234256069");
        assert_eq!(chunks[1], "309774605453358525255376947623141115");
        assert_eq!(chunks[2], "341336440385945922351657562994879990");
        assert_eq!(chunks[16], "445601530634383104422930334993700578");
        // 2048 = 17 * 120 + 8
        assert_eq!(chunks[17], "192");
        assert!(chunks[18..].iter().all(|c| c == "0"));
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(
            split_into_chunks(&BigInt::from(-5), ChunkConfig::default()),
            Err(Error::DomainError)
        );
        assert_eq!(
            split_into_chunks_checked(&BigInt::from(-1), ChunkConfig::default()),
            Err(Error::DomainError)
        );
    }

    #[test]
    fn test_overflow_is_silent_unless_checked() {
        let value = BigInt::from(0x1ffu32);
        let config = ChunkConfig::new(4, 2);

        let chunks = split_into_chunks(&value, config).unwrap();
        assert_eq!(chunks.recombine(), BigUint::from(0xffu32));

        assert_eq!(
            split_into_chunks_checked(&value, config),
            Err(Error::ChunkOverflow {
                bits: 9,
                capacity: 8
            })
        );
        assert!(split_into_chunks_checked(&BigInt::from(0xffu32), config).is_ok());
    }

    #[test]
    fn test_huge_layout_does_not_wrap() {
        let config = ChunkConfig::new(usize::MAX, 3);
        assert_eq!(config.capacity_bits(), u64::MAX);

        assert_eq!(ChunkConfig::new(1 << 40, 1 << 40).capacity_bits(), u64::MAX);
        assert_eq!(
            split_biguint_checked(&(&BigUint::from(1u32) << 64u32), ChunkConfig::new(4, 16)),
            Err(Error::ChunkOverflow {
                bits: 65,
                capacity: 64
            })
        );
    }

    #[test]
    fn test_zero() {
        let chunks = split_into_chunks(&BigInt::from(0), ChunkConfig::default()).unwrap();
        assert!(chunks.limbs.iter().all(|limb| limb.bits() == 0));
        assert_eq!(chunks.recombine(), BigUint::from(0u32));
    }
}
