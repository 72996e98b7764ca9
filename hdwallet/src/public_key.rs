use crate::coin::Coin;
use crate::ec;
use crate::error::Result;
use crypto_utils::base58::base58_check_encode;
use crypto_utils::hash::{hash160, keccak256};

/// Public half of a [`PrivateKey`](crate::PrivateKey), in both SEC1 encodings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    compressed: [u8; 33],
    uncompressed: [u8; 65],
    coin: Coin,
}

impl PublicKey {
    pub fn from_private_key(raw: &[u8; 32], coin: Coin) -> Result<Self> {
        Ok(PublicKey {
            compressed: ec::compressed_public_key(raw)?,
            uncompressed: ec::uncompressed_public_key(raw)?,
            coin,
        })
    }

    pub fn compressed(&self) -> &[u8; 33] {
        &self.compressed
    }

    pub fn uncompressed(&self) -> &[u8; 65] {
        &self.uncompressed
    }

    /// Hex rendering: uncompressed for Ethereum, compressed otherwise.
    pub fn get(&self) -> String {
        match self.coin {
            Coin::Ethereum => hex::encode(self.uncompressed),
            _ => hex::encode(self.compressed),
        }
    }

    /// Receiving address: P2PKH for UTXO coins, EIP-55 for Ethereum.
    pub fn address(&self) -> Result<String> {
        match self.coin {
            Coin::Ethereum => Ok(self.ethereum_address()),
            coin => {
                let params = coin.parameters()?;
                let mut payload = Vec::with_capacity(21);
                payload.push(params.pub_key_hash);
                payload.extend_from_slice(&hash160(&self.compressed));
                Ok(base58_check_encode(&payload))
            }
        }
    }

    fn ethereum_address(&self) -> String {
        let digest = keccak256(&self.uncompressed[1..]);
        let lower = hex::encode(&digest[12..]);
        let checksum = keccak256(lower.as_bytes());
        let mixed: String = lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = (checksum[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
                if c.is_ascii_alphabetic() && nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        format!("{}{}", self.coin.address_prefix(), mixed)
    }
}
