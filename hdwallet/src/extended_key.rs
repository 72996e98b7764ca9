//! BIP32 extended key serialization.
//!
//! Layout (78 bytes): version (4) | depth (1) | parent fingerprint (4) |
//! child index (4) | chain code (32) | key data (33). The textual form appends
//! a 4-byte double-SHA256 checksum and Base58-encodes the 82 bytes.

use crate::coin::Coin;
use crate::ec;
use crate::error::{Error, Result};
use crate::private_key::PrivateKey;
use crypto_utils::base58::{base58_check_decode, base58_check_encode};

/// Length of a serialized extended key, checksum excluded.
pub const EXTENDED_KEY_LEN: usize = 78;

/// Coin assumed for extended keys whose version bytes match no known coin.
pub const REFERENCE_COIN: Coin = Coin::Bitcoin;

/// Base58Check text for a serialized extended key.
pub fn encode(bytes: &[u8; EXTENDED_KEY_LEN]) -> String {
    base58_check_encode(bytes)
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl PrivateKey {
    fn serialize(&self, version: u32, key_data: &[u8; 33]) -> [u8; EXTENDED_KEY_LEN] {
        let mut payload = Vec::with_capacity(EXTENDED_KEY_LEN);
        payload.extend_from_slice(&version.to_be_bytes());
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint.to_be_bytes());
        payload.extend_from_slice(&self.index.to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        payload.extend_from_slice(key_data);
        debug_assert_eq!(
            payload.len(),
            EXTENDED_KEY_LEN,
            "extended key layout must be exactly 78 bytes"
        );

        let mut out = [0u8; EXTENDED_KEY_LEN];
        out.copy_from_slice(&payload);
        out
    }

    /// 78-byte xprv layout: key data is `0x00 ‖ k`.
    pub fn serialize_private(&self) -> Result<[u8; EXTENDED_KEY_LEN]> {
        let version = self.coin.parameters()?.private_version;
        let mut key_data = [0u8; 33];
        key_data[1..].copy_from_slice(&self.raw);
        Ok(self.serialize(version, &key_data))
    }

    /// 78-byte xpub layout: key data is the compressed public key.
    pub fn serialize_public(&self) -> Result<[u8; EXTENDED_KEY_LEN]> {
        let version = self.coin.parameters()?.public_version;
        let key_data = ec::compressed_public_key(&self.raw)?;
        Ok(self.serialize(version, &key_data))
    }

    /// Extended private key string (xprv, Ltpv, ...).
    pub fn extended(&self) -> Result<String> {
        Ok(encode(&self.serialize_private()?))
    }

    /// Extended public key string (xpub, Ltub, ...).
    pub fn extended_public(&self) -> Result<String> {
        Ok(encode(&self.serialize_public()?))
    }

    /// Decodes an extended private key string.
    ///
    /// The coin is recovered from the version bytes; unknown versions fall
    /// back to [`REFERENCE_COIN`]. Extended public keys are rejected.
    pub fn decode_extended(s: &str) -> Result<Self> {
        Self::decode_extended_with_version(s).map(|(_, key)| key)
    }

    /// Like [`decode_extended`](Self::decode_extended), also returning the
    /// version bytes exactly as found on the wire.
    pub fn decode_extended_with_version(s: &str) -> Result<(u32, Self)> {
        let payload = base58_check_decode(s)?;
        if payload.len() != EXTENDED_KEY_LEN {
            return Err(Error::DecodingError(format!(
                "extended key must be {EXTENDED_KEY_LEN} bytes, got {}",
                payload.len()
            )));
        }

        let version = read_u32(&payload, 0);
        if Coin::from_public_version(version).is_some() {
            return Err(Error::DecodingError(
                "extended public key cannot be decoded as a private key".to_string(),
            ));
        }
        let depth = payload[4];
        let parent_fingerprint = read_u32(&payload, 5);
        let index = read_u32(&payload, 9);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&payload[13..45]);
        // Key data is 0x00 ‖ k; the leading byte is not checked.
        let mut raw = [0u8; 32];
        raw.copy_from_slice(&payload[46..78]);

        let coin = match Coin::from_private_version(version) {
            Some(coin) => coin,
            None => {
                tracing::warn!(
                    version = %format!("{version:#010x}"),
                    fallback = %REFERENCE_COIN,
                    "unrecognized extended key version"
                );
                REFERENCE_COIN
            }
        };
        tracing::debug!(%coin, depth, index, "decoded extended key");

        Ok((
            version,
            PrivateKey::from_parts(raw, chain_code, depth, parent_fingerprint, index, coin),
        ))
    }
}
