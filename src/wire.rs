/*
    SSH wire encoding (RFC 4251, section 5)

    uint32  - 4 bytes, big-endian
    string  - uint32 length || length raw bytes
    mpint   - string holding a two's complement big-endian magnitude,
              a leading 0x00 is present whenever the top bit would be set

    we only ever see non-negative mpints (e, n, s) so the magnitude is read
    as an unsigned big-endian integer over every byte of the string, the
    leading zero included
*/

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Cursor over a borrowed byte buffer. Reads never go past the end.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Takes `len` raw bytes and advances the cursor past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        let end = match self.pos.checked_add(len) {
            Some(end) if end <= self.buf.len() => end,
            _ => {
                return Err(Error::TruncatedData {
                    needed: len,
                    remaining,
                })
            }
        };
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_uint32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_string(&mut self) -> Result<&'a [u8]> {
        let len = self.read_uint32()? as usize;
        self.read_bytes(len)
    }

    /// Reads an mpint as an unsigned magnitude.
    pub fn read_mpint(&mut self) -> Result<BigUint> {
        Ok(BigUint::from_bytes_be(self.read_string()?))
    }

    /// Reads a string and requires it to equal `expected`.
    pub fn expect_string(&mut self, expected: &str) -> Result<()> {
        let found = self.read_string()?;
        if found != expected.as_bytes() {
            return Err(Error::AlgorithmMismatch {
                expected: expected.to_string(),
                found: String::from_utf8_lossy(found).into_owned(),
            });
        }
        Ok(())
    }

    /// Consumes a fixed preamble that carries no length prefix.
    pub fn read_magic(&mut self, magic: &[u8]) -> Result<()> {
        match self.read_bytes(magic.len()) {
            Ok(bytes) if bytes == magic => Ok(()),
            _ => Err(Error::BadMagic),
        }
    }
}

/// Append-only encoder, the inverse of [`WireReader`].
#[derive(Clone, Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_uint32(&mut self, value: u32) -> &mut Self {
        self.write_raw(&value.to_be_bytes())
    }

    pub fn write_string(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_uint32(bytes.len() as u32);
        self.write_raw(bytes)
    }

    pub fn write_mpint(&mut self, value: &BigUint) -> &mut Self {
        let mut bytes = if value.bits() == 0 {
            vec![]
        } else {
            value.to_bytes_be()
        };
        if bytes.first().map_or(false, |b| b & 0x80 != 0) {
            bytes.insert(0, 0);
        }
        self.write_string(&bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
