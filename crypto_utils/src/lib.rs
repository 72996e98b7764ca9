//! Hash, HMAC and Base58Check primitives shared by the key encoders.

pub mod base58;
pub mod hash;
pub mod hmac;
