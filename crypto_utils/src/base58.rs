//! Base58 text encoding and the Base58Check framing (payload followed by the
//! first four bytes of its double SHA-256).

use crate::hash::sha256d;
use thiserror::Error;

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {0:?}")]
    InvalidCharacter(char),
    #[error("invalid base58 payload length")]
    InvalidLength,
    #[error("base58check checksum mismatch")]
    InvalidChecksum,
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    if s.is_empty() {
        return Err(Base58Error::InvalidLength);
    }
    bs58::decode(s).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, .. } => {
            Base58Error::InvalidCharacter(character)
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            Base58Error::InvalidCharacter(
                s.get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            )
        }
        _ => Base58Error::InvalidLength,
    })
}

/// First four bytes of SHA256(SHA256(payload)).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(payload);
    [digest[0], digest[1], digest[2], digest[3]]
}

pub fn base58_check_encode(payload: &[u8]) -> String {
    let mut framed = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    framed.extend_from_slice(payload);
    framed.extend_from_slice(&checksum(payload));
    base58_encode(&framed)
}

/// Decodes `s` and strips the checksum. The comparison is exact over all four
/// bytes.
pub fn base58_check_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let mut raw = base58_decode(s)?;
    if raw.len() < CHECKSUM_LEN {
        return Err(Base58Error::InvalidLength);
    }
    let suffix = raw.split_off(raw.len() - CHECKSUM_LEN);
    if suffix[..] != checksum(&raw)[..] {
        return Err(Base58Error::InvalidChecksum);
    }
    Ok(raw)
}
