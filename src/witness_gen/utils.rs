use ff::{Field, PrimeField};
use halo2_proofs::circuit::Value;
use num_bigint::BigUint;

use crate::chunk::Chunks;
use crate::error::{Error, Result};

/// Lifts every limb into `F`. Limbs must stay below the field modulus, which
/// holds whenever `chunk_bits < F::NUM_BITS`.
pub fn chunks_to_field<F: PrimeField>(chunks: &Chunks) -> Result<Vec<F>> {
    if chunks.chunk_bits >= F::NUM_BITS as usize {
        return Err(Error::LimbTooWide(chunks.chunk_bits));
    }
    chunks
        .limbs
        .iter()
        .map(|limb| {
            F::from_str_vartime(&limb.to_str_radix(10))
                .ok_or(Error::LimbTooWide(chunks.chunk_bits))
        })
        .collect()
}

pub fn array_value<const L: usize, F: Field>(array: [F; L]) -> [Value<F>; L] {
    array.map(Value::known)
}

/// Assumes a little-endian repr, true for the pasta and bn256 scalar fields.
pub fn field_to_biguint<F: PrimeField>(x: F) -> BigUint {
    BigUint::from_bytes_le(x.to_repr().as_ref())
}

#[test]
fn test_biguint_field() {
    use crate::chunk::{split_biguint, ChunkConfig};
    use halo2curves::pasta::Fp;

    let value = (BigUint::from(u128::MAX) << 200u32) + BigUint::from(u64::MAX);
    let chunks = split_biguint(&value, ChunkConfig::new(120, 4));
    let limbs = chunks_to_field::<Fp>(&chunks).unwrap();

    for (limb, field) in chunks.limbs.iter().zip(limbs.iter()) {
        assert_eq!(*limb, field_to_biguint(*field));
    }
}

#[test]
fn test_limb_wider_than_field() {
    use crate::chunk::{split_biguint, ChunkConfig};
    use halo2curves::bn256::Fr;

    let chunks = split_biguint(&BigUint::from(1u32), ChunkConfig::new(300, 2));
    assert_eq!(
        chunks_to_field::<Fr>(&chunks),
        Err(Error::LimbTooWide(300))
    );

    // bn256 has NUM_BITS = 254, so 253 bit limbs still fit
    let wide = (BigUint::from(1u32) << 252u32) + 5u32;
    let chunks = split_biguint(&wide, ChunkConfig::new(253, 1));
    let limbs = chunks_to_field::<Fr>(&chunks).unwrap();
    assert_eq!(field_to_biguint(limbs[0]), wide);

    let chunks = split_biguint(&wide, ChunkConfig::new(254, 1));
    assert_eq!(
        chunks_to_field::<Fr>(&chunks),
        Err(Error::LimbTooWide(254))
    );
}
