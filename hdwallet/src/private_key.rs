//! Private key state and child key derivation (CKDpriv).

use crate::bignum::BigNumber;
use crate::coin::Coin;
use crate::derivation::{DerivationNode, DerivationPath};
use crate::ec;
use crate::error::{Error, Result};
use crate::public_key::PublicKey;
use crypto_utils::{hash::hash160, hmac::hmac_sha512_split};
use std::fmt;

const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Where the key material came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Derived from a seed; supports further derivation.
    Hd,
    /// Imported from a hex or WIF string; carries no usable chain code.
    Imported,
}

/// A secp256k1 private key together with its BIP32 metadata.
///
/// Values are immutable: derivation returns a new key and leaves the parent
/// untouched, so a shared parent may be derived from concurrently.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) raw: [u8; 32],
    pub(crate) chain_code: [u8; 32],
    pub(crate) index: u32,
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: u32,
    pub(crate) coin: Coin,
    pub(crate) key_type: KeyType,
}

/// 4-byte key identifier prefix: HASH160(compressed pubkey)[0..4], big-endian.
fn fingerprint_of(compressed_public_key: &[u8; 33]) -> u32 {
    let id = hash160(compressed_public_key);
    u32::from_be_bytes([id[0], id[1], id[2], id[3]])
}

impl PrivateKey {
    /// Master key from a seed (BIP32 recommends 128 to 512 bits).
    pub fn from_seed(seed: &[u8], coin: Coin) -> Result<Self> {
        if !(16..=64).contains(&seed.len()) {
            return Err(Error::InvalidSeedLength(seed.len()));
        }
        let (raw, chain_code) = hmac_sha512_split(MASTER_HMAC_KEY, seed);
        if !BigNumber::is_valid_private_scalar(&raw) {
            return Err(Error::InvalidMasterKey);
        }
        tracing::debug!(%coin, "created master key");
        Ok(PrivateKey {
            raw,
            chain_code,
            index: 0,
            depth: 0,
            parent_fingerprint: 0,
            coin,
            key_type: KeyType::Hd,
        })
    }

    /// Rebuilds an HD key from its serialized fields.
    pub fn from_parts(
        raw: [u8; 32],
        chain_code: [u8; 32],
        depth: u8,
        parent_fingerprint: u32,
        index: u32,
        coin: Coin,
    ) -> Self {
        PrivateKey {
            raw,
            chain_code,
            index,
            depth,
            parent_fingerprint,
            coin,
            key_type: KeyType::Hd,
        }
    }

    pub(crate) fn imported(raw: [u8; 32], coin: Coin) -> Self {
        PrivateKey {
            raw,
            chain_code: [0u8; 32],
            index: 0,
            depth: 0,
            parent_fingerprint: 0,
            coin,
            key_type: KeyType::Imported,
        }
    }

    pub fn raw(&self) -> &[u8; 32] {
        &self.raw
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Child index as stored, hardened bit included.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> u32 {
        self.parent_fingerprint
    }

    pub fn coin(&self) -> Coin {
        self.coin
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_private_key(&self.raw, self.coin)
    }

    /// Fingerprint of this key, as recorded in its children.
    pub fn fingerprint(&self) -> Result<u32> {
        Ok(fingerprint_of(&ec::compressed_public_key(&self.raw)?))
    }

    /// Child key derivation for private keys (CKDpriv).
    pub fn derive_child(&self, node: DerivationNode) -> Result<Self> {
        if self.key_type != KeyType::Hd {
            return Err(Error::DerivationNotSupported);
        }
        let raw_index = node.raw_index()?;
        let parent_public = ec::compressed_public_key(&self.raw)?;

        // Hardened: 0x00 ‖ k_par ‖ i; otherwise serP(K_par) ‖ i. 37 bytes either way.
        let mut message = Vec::with_capacity(37);
        if node.is_hardened() {
            message.push(0u8);
            message.extend_from_slice(&self.raw);
        } else {
            message.extend_from_slice(&parent_public);
        }
        message.extend_from_slice(&raw_index.to_be_bytes());

        let (factor, chain_code) = hmac_sha512_split(&self.chain_code, &message);

        // k_i = (IL + k_par) mod n
        let order = BigNumber::curve_order();
        let factor = BigNumber::from_bytes_be(&factor);
        if factor >= order {
            return Err(Error::InvalidChildKey);
        }
        let derived = (&BigNumber::from_bytes_be(&self.raw) + &factor)
            .modulo(&order)
            .ok_or(Error::InvalidChildKey)?;
        if derived.is_zero() {
            return Err(Error::InvalidChildKey);
        }
        let raw = derived
            .to_bytes_be_padded::<32>()
            .ok_or(Error::InvalidChildKey)?;

        let depth = self.depth.checked_add(1).ok_or(Error::DepthOverflow)?;
        tracing::debug!(
            coin = %self.coin,
            depth,
            index = node.index(),
            hardened = node.is_hardened(),
            "derived child key"
        );

        Ok(PrivateKey {
            raw,
            chain_code,
            index: raw_index,
            depth,
            parent_fingerprint: fingerprint_of(&parent_public),
            coin: self.coin,
            key_type: KeyType::Hd,
        })
    }

    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.derive_private(self)
    }

    /// Recoverable ECDSA signature over a 32-byte digest.
    pub fn sign(&self, hash: &[u8; 32]) -> Result<[u8; 65]> {
        ec::sign(hash, &self.raw)
    }
}

impl PartialEq for PrivateKey {
    /// Depth and parent fingerprint are metadata and do not take part.
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
            && self.chain_code == other.chain_code
            && self.index == other.index
            && self.coin == other.coin
            && self.key_type == other.key_type
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("raw", &"<redacted>")
            .field("index", &self.index)
            .field("depth", &self.depth)
            .field("parent_fingerprint", &format_args!("{:#010x}", self.parent_fingerprint))
            .field("coin", &self.coin)
            .field("key_type", &self.key_type)
            .finish_non_exhaustive()
    }
}
