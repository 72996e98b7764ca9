use crate::coin::Coin;
use crypto_utils::base58::Base58Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied child index already carries the hardened bit.
    #[error("invalid child index {0:#010x}: hardened bit must not be set")]
    InvalidChildIndex(u32),

    /// Derivation was requested on a key imported from hex or WIF.
    #[error("derivation is not supported for imported keys")]
    DerivationNotSupported,

    #[error("decoding error: {0}")]
    DecodingError(String),

    #[error("parameters not implemented for {0}")]
    UnsupportedCoinParameters(Coin),

    #[error("unknown coin {0:?}")]
    UnknownCoin(String),

    #[error("invalid seed length {0}: expected 16 to 64 bytes")]
    InvalidSeedLength(usize),

    /// The seed hashes to a scalar outside `1..n-1`.
    #[error("seed does not produce a valid master key")]
    InvalidMasterKey,

    /// The derived scalar falls outside `1..n-1`.
    #[error("child key is not defined for this index")]
    InvalidChildKey,

    #[error("maximum derivation depth exceeded")]
    DepthOverflow,

    #[error("invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("elliptic curve operation failed: {0}")]
    Crypto(String),
}

impl From<Base58Error> for Error {
    fn from(e: Base58Error) -> Self {
        Error::DecodingError(e.to_string())
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        Error::Crypto(e.to_string())
    }
}
