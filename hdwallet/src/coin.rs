//! Per-coin network constants.
//!
//! Version bytes follow SLIP-0132, coin types follow SLIP-0044.

use crate::error::{Error, Result};
use crate::wif::WifForm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Litecoin,
    BitcoinCash,
    Dash,
    Dogecoin,
}

/// Constants consumed by the extended-key, WIF and address encoders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinParameters {
    /// Version prefix of serialized extended private keys.
    pub private_version: u32,
    /// Version prefix of serialized extended public keys.
    pub public_version: u32,
    /// P2PKH address prefix.
    pub pub_key_hash: u8,
    /// P2SH address prefix.
    pub script_hash: u8,
    pub wif_prefix: u8,
}

const BITCOIN: CoinParameters = CoinParameters {
    private_version: 0x0488_ade4,
    public_version: 0x0488_b21e,
    pub_key_hash: 0x00,
    script_hash: 0x05,
    wif_prefix: 0x80,
};

const LITECOIN: CoinParameters = CoinParameters {
    private_version: 0x019d_9cfe,
    public_version: 0x019d_a462,
    pub_key_hash: 0x30,
    script_hash: 0x05,
    wif_prefix: 0xb0,
};

const DASH: CoinParameters = CoinParameters {
    private_version: 0x02fe_52cc,
    public_version: 0x02fe_52f8,
    pub_key_hash: 0x4c,
    script_hash: 0x10,
    wif_prefix: 0xcc,
};

const DOGECOIN: CoinParameters = CoinParameters {
    private_version: 0x0488_e1f4,
    public_version: 0x0488_c42e,
    pub_key_hash: 0x1e,
    script_hash: 0x16,
    wif_prefix: 0x9e,
};

impl Coin {
    /// Every supported coin. Bitcoin precedes Bitcoin Cash, so reverse lookups
    /// of the shared version bytes resolve to Bitcoin.
    pub const ALL: [Coin; 6] = [
        Coin::Bitcoin,
        Coin::Ethereum,
        Coin::Litecoin,
        Coin::BitcoinCash,
        Coin::Dash,
        Coin::Dogecoin,
    ];

    pub fn parameters(self) -> Result<CoinParameters> {
        match self {
            Coin::Bitcoin | Coin::BitcoinCash => Ok(BITCOIN),
            Coin::Litecoin => Ok(LITECOIN),
            Coin::Dash => Ok(DASH),
            Coin::Dogecoin => Ok(DOGECOIN),
            Coin::Ethereum => Err(Error::UnsupportedCoinParameters(self)),
        }
    }

    /// SLIP-0044 coin type used at the second level of a BIP44 path.
    pub fn coin_type(self) -> u32 {
        match self {
            Coin::Bitcoin => 0,
            Coin::Litecoin => 2,
            Coin::Dogecoin => 3,
            Coin::Dash => 5,
            Coin::Ethereum => 60,
            Coin::BitcoinCash => 145,
        }
    }

    /// Payment URI scheme, empty when the coin has none.
    pub fn scheme(self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Litecoin => "litecoin",
            Coin::BitcoinCash => "bitcoincash",
            Coin::Dogecoin => "dogecoin",
            Coin::Dash => "dash",
            Coin::Ethereum => "",
        }
    }

    pub fn address_prefix(self) -> &'static str {
        match self {
            Coin::Ethereum => "0x",
            _ => "",
        }
    }

    /// WIF form used when rendering a private key with the coin's defaults.
    /// Ethereum keys are rendered as hex instead.
    pub fn default_wif_form(self) -> Option<WifForm> {
        match self {
            Coin::Bitcoin | Coin::Litecoin | Coin::Dash | Coin::BitcoinCash => {
                Some(WifForm::Compressed)
            }
            Coin::Dogecoin => Some(WifForm::Uncompressed),
            Coin::Ethereum => None,
        }
    }

    pub fn from_private_version(version: u32) -> Option<Coin> {
        Self::find(|p| p.private_version == version)
    }

    pub fn from_public_version(version: u32) -> Option<Coin> {
        Self::find(|p| p.public_version == version)
    }

    fn find(predicate: impl Fn(&CoinParameters) -> bool) -> Option<Coin> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.parameters().is_ok_and(|p| predicate(&p)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Litecoin => "litecoin",
            Coin::BitcoinCash => "bitcoincash",
            Coin::Dash => "dash",
            Coin::Dogecoin => "dogecoin",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCoin(s.to_string()))
    }
}
