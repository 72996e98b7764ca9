use crate::coin::Coin;
use crate::error::{Error, Result};
use crate::private_key::PrivateKey;
use std::fmt;
use std::str::FromStr;

/// Bit marking a hardened child index, 2³¹.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// One step of a derivation path. The index is a 31-bit value; hardening is
/// carried by the variant, never by the index itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DerivationNode {
    Hardened(u32),
    NotHardened(u32),
}

impl DerivationNode {
    pub fn index(self) -> u32 {
        match self {
            DerivationNode::Hardened(index) | DerivationNode::NotHardened(index) => index,
        }
    }

    pub fn is_hardened(self) -> bool {
        matches!(self, DerivationNode::Hardened(_))
    }

    /// Index as serialized and fed to HMAC, hardened bit included.
    pub fn raw_index(self) -> Result<u32> {
        let index = self.index();
        if index & HARDENED_OFFSET != 0 {
            return Err(Error::InvalidChildIndex(index));
        }
        Ok(if self.is_hardened() {
            index | HARDENED_OFFSET
        } else {
            index
        })
    }
}

impl fmt::Display for DerivationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationNode::Hardened(index) => write!(f, "{index}'"),
            DerivationNode::NotHardened(index) => write!(f, "{index}"),
        }
    }
}

/// A BIP-32 derivation path (e.g., "m/44'/0'/0'/0/1").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationPath(pub Vec<DerivationNode>);

impl DerivationPath {
    /// `m/44'/coin_type'/account'/change/address_index`
    pub fn bip44(coin: Coin, account: u32, change: u32, address_index: u32) -> Self {
        DerivationPath(vec![
            DerivationNode::Hardened(44),
            DerivationNode::Hardened(coin.coin_type()),
            DerivationNode::Hardened(account),
            DerivationNode::NotHardened(change),
            DerivationNode::NotHardened(address_index),
        ])
    }

    /// Derive every node of this path in turn, starting at `root`.
    pub fn derive_private(&self, root: &PrivateKey) -> Result<PrivateKey> {
        self.0
            .iter()
            .try_fold(root.clone(), |key, &node| key.derive_child(node))
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    /// Parses "m/44'/0'/0'/0/0", "m/44h/0h" or a bare "44/0/0/0".
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let body = if s.eq_ignore_ascii_case("m") {
            return Ok(DerivationPath::default());
        } else if let Some(rest) = s.strip_prefix("m/").or_else(|| s.strip_prefix("M/")) {
            rest
        } else {
            s
        };
        if body.is_empty() {
            return Ok(DerivationPath::default());
        }

        let invalid = || Error::InvalidDerivationPath(s.to_string());
        let mut nodes = Vec::new();
        for part in body.split('/') {
            let (digits, hardened) = match part.strip_suffix(['\'', 'h', 'H']) {
                Some(digits) => (digits, true),
                None => (part, false),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let index: u32 = digits.parse().map_err(|_| invalid())?;
            if index & HARDENED_OFFSET != 0 {
                return Err(invalid());
            }
            nodes.push(if hardened {
                DerivationNode::Hardened(index)
            } else {
                DerivationNode::NotHardened(index)
            });
        }
        Ok(DerivationPath(nodes))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for node in &self.0 {
            write!(f, "/{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_index_sets_hardened_bit() {
        assert_eq!(DerivationNode::Hardened(0).raw_index(), Ok(0x8000_0000));
        assert_eq!(DerivationNode::NotHardened(7).raw_index(), Ok(7));
        assert_eq!(
            DerivationNode::Hardened(2147483647).raw_index(),
            Ok(0xffff_ffff)
        );
    }

    #[test]
    fn raw_index_rejects_caller_supplied_hardened_bit() {
        assert_eq!(
            DerivationNode::Hardened(HARDENED_OFFSET).raw_index(),
            Err(Error::InvalidChildIndex(HARDENED_OFFSET))
        );
        assert_eq!(
            DerivationNode::NotHardened(HARDENED_OFFSET + 5).raw_index(),
            Err(Error::InvalidChildIndex(HARDENED_OFFSET + 5))
        );
    }

    #[test]
    fn parse_and_display() {
        let path: DerivationPath = "m/0'/1/2h/2/1000000000".parse().unwrap();
        assert_eq!(
            path.0,
            vec![
                DerivationNode::Hardened(0),
                DerivationNode::NotHardened(1),
                DerivationNode::Hardened(2),
                DerivationNode::NotHardened(2),
                DerivationNode::NotHardened(1000000000),
            ]
        );
        assert_eq!(path.to_string(), "m/0'/1/2'/2/1000000000");
        assert_eq!("m".parse::<DerivationPath>().unwrap().to_string(), "m");
        assert_eq!(
            "44H/60H".parse::<DerivationPath>().unwrap().to_string(),
            "m/44'/60'"
        );
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        for path in ["m//1", "m/abc", "m/1''", "m/-1", "m/2147483648", "m/4294967296'"] {
            assert!(
                matches!(
                    path.parse::<DerivationPath>(),
                    Err(Error::InvalidDerivationPath(_))
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn bip44_layout() {
        assert_eq!(
            DerivationPath::bip44(Coin::Litecoin, 0, 1, 7).to_string(),
            "m/44'/2'/0'/1/7"
        );
        assert_eq!(
            DerivationPath::bip44(Coin::Ethereum, 0, 0, 0).to_string(),
            "m/44'/60'/0'/0/0"
        );
    }
}
