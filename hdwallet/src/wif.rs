//! Wallet Import Format rendering and raw private key import.

use crate::bignum::BigNumber;
use crate::coin::Coin;
use crate::error::{Error, Result};
use crate::private_key::PrivateKey;
use crypto_utils::base58::{base58_check_decode, base58_check_encode};
use serde::{Deserialize, Serialize};

/// Marks a WIF payload whose public key is used in compressed form.
const COMPRESSION_FLAG: u8 = 0x01;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifForm {
    Compressed,
    Uncompressed,
}

impl PrivateKey {
    pub fn wif(&self, form: WifForm) -> Result<String> {
        let params = self.coin.parameters()?;
        let mut payload = Vec::with_capacity(34);
        payload.push(params.wif_prefix);
        payload.extend_from_slice(&self.raw);
        if form == WifForm::Compressed {
            payload.push(COMPRESSION_FLAG);
        }
        Ok(base58_check_encode(&payload))
    }

    pub fn wif_compressed(&self) -> Result<String> {
        self.wif(WifForm::Compressed)
    }

    pub fn wif_uncompressed(&self) -> Result<String> {
        self.wif(WifForm::Uncompressed)
    }

    /// Private key in the coin's customary form: WIF for UTXO coins, bare
    /// lower-case hex for Ethereum.
    pub fn get(&self) -> Result<String> {
        match self.coin.default_wif_form() {
            Some(form) => self.wif(form),
            None => Ok(hex::encode(self.raw)),
        }
    }

    /// Imports a raw private key from hex, compressed WIF or uncompressed WIF.
    ///
    /// The format is detected from the string's length and, for WIF, from the
    /// decoded length and prefix byte. Imported keys cannot be derived from.
    pub fn import(pk: &str, coin: Coin) -> Result<Self> {
        let pk = pk.trim();
        let raw = match coin {
            Coin::Ethereum => decode_hex_key(pk.strip_prefix("0x").unwrap_or(pk))?,
            _ if pk.len() == 64 && pk.bytes().all(|b| b.is_ascii_hexdigit()) => {
                decode_hex_key(pk)?
            }
            _ => decode_wif(pk, coin)?.0,
        };
        if !BigNumber::is_valid_private_scalar(&raw) {
            return Err(Error::DecodingError(
                "private key is outside the secp256k1 scalar range".to_string(),
            ));
        }
        Ok(PrivateKey::imported(raw, coin))
    }
}

fn decode_hex_key(pk: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(pk).map_err(|e| Error::DecodingError(format!("invalid hex key: {e}")))?;
    to_key(&bytes)
}

fn to_key(bytes: &[u8]) -> Result<[u8; 32]> {
    bytes.try_into().map_err(|_| {
        Error::DecodingError(format!("expected a 32-byte key, got {} bytes", bytes.len()))
    })
}

/// Decodes a WIF string for `coin`, returning the key and its form.
pub fn decode_wif(wif: &str, coin: Coin) -> Result<([u8; 32], WifForm)> {
    let params = coin.parameters()?;
    let payload = base58_check_decode(wif)?;
    match payload.as_slice() {
        [prefix, key @ ..] if key.len() == 32 && *prefix == params.wif_prefix => {
            Ok((to_key(key)?, WifForm::Uncompressed))
        }
        [prefix, key @ .., COMPRESSION_FLAG] if key.len() == 32 && *prefix == params.wif_prefix => {
            Ok((to_key(key)?, WifForm::Compressed))
        }
        [prefix, ..] if *prefix != params.wif_prefix => Err(Error::DecodingError(format!(
            "WIF prefix {prefix:#04x} does not match {coin} ({:#04x})",
            params.wif_prefix
        ))),
        _ => Err(Error::DecodingError(format!(
            "unexpected WIF payload length {}",
            payload.len()
        ))),
    }
}
