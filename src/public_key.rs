use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, trace};
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::wire::{WireReader, WireWriter};

pub const SSH_RSA: &str = "ssh-rsa";

/// An `ssh-rsa` public key as found in authorized_keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SshRsaPublicKey {
    pub e: BigUint,
    pub n: BigUint,
    pub comment: Option<String>,
}

impl SshRsaPublicKey {
    /// Parses `ssh-rsa <base64> [comment...]`.
    pub fn from_line(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let (key_type, blob) = match (parts.next(), parts.next()) {
            (Some(key_type), Some(blob)) => (key_type, blob),
            _ => {
                return Err(Error::InvalidFormat(
                    "expected `ssh-rsa <base64> [comment]`".into(),
                ))
            }
        };
        if key_type != SSH_RSA {
            return Err(Error::InvalidFormat(format!(
                "unsupported key type {key_type:?}"
            )));
        }

        let wire = STANDARD
            .decode(blob)
            .map_err(|e| Error::InvalidFormat(format!("invalid base64 key blob: {e}")))?;

        let comment = parts.collect::<Vec<_>>().join(" ");
        let mut key = Self::from_wire(&wire)?;
        key.comment = (!comment.is_empty()).then_some(comment);
        Ok(key)
    }

    /// Parses the wire blob `string "ssh-rsa" || mpint e || mpint n`.
    pub fn from_wire(wire: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(wire);
        Self::read(&mut reader)
    }

    pub(crate) fn read(reader: &mut WireReader<'_>) -> Result<Self> {
        reader.expect_string(SSH_RSA)?;
        let e = reader.read_mpint()?;
        let n = reader.read_mpint()?;
        debug!("parsed ssh-rsa key: {} bit modulus, e = {}", n.bits(), e);
        Ok(Self { e, n, comment: None })
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer
            .write_string(SSH_RSA.as_bytes())
            .write_mpint(&self.e)
            .write_mpint(&self.n);
        writer.into_bytes()
    }

    /// Renders the key back into authorized_keys form.
    pub fn to_line(&self) -> String {
        let blob = STANDARD.encode(self.to_wire());
        match &self.comment {
            Some(comment) => format!("{SSH_RSA} {blob} {comment}"),
            None => format!("{SSH_RSA} {blob}"),
        }
    }

    pub fn bits(&self) -> u64 {
        self.n.bits()
    }
}

/// Returns the modulus of an `ssh-rsa` key line.
pub fn parse_public_key(line: &str) -> Result<BigUint> {
    SshRsaPublicKey::from_line(line).map(|key| key.n)
}

const KEY_TYPE_PREFIXES: [&str; 3] = ["ssh-", "ecdsa-", "sk-"];

fn starts_key(fragment: &str) -> bool {
    fragment
        .split_whitespace()
        .next()
        .map_or(false, |word| KEY_TYPE_PREFIXES.iter().any(|p| word.starts_with(p)))
}

/// Parses a list of key lines separated by commas or newlines.
/// Blank entries and `#` comment lines are skipped, any bad entry fails the list.
/// A comma only starts a new entry when a key type follows it, so comments
/// may contain commas.
pub fn parse_public_key_list(text: &str) -> Result<Vec<SshRsaPublicKey>> {
    let mut entries: Vec<String> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.starts_with('#') {
            continue;
        }
        let mut fragments = line.split(',');
        let mut entry = fragments.next().unwrap_or_default().to_string();
        for fragment in fragments {
            if starts_key(fragment) {
                entries.push(std::mem::take(&mut entry));
                entry.push_str(fragment);
            } else {
                entry.push(',');
                entry.push_str(fragment);
            }
        }
        entries.push(entry);
    }

    let keys = entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(SshRsaPublicKey::from_line)
        .collect::<Result<Vec<_>>>()?;
    trace!("parsed {} keys from list", keys.len());
    Ok(keys)
}
