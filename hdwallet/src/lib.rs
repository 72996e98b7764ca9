//! Hierarchical deterministic (BIP32 / BIP44) key derivation for several
//! coins, with extended key, WIF and address encodings.

pub mod account;
pub mod bignum;
pub mod coin;
pub mod derivation;
pub mod ec;
pub mod error;
pub mod extended_key;
pub mod private_key;
pub mod public_key;
pub mod wif;

pub use account::Account;
pub use coin::{Coin, CoinParameters};
pub use derivation::{DerivationNode, DerivationPath, HARDENED_OFFSET};
pub use error::{Error, Result};
pub use private_key::{KeyType, PrivateKey};
pub use public_key::PublicKey;
pub use wif::WifForm;
