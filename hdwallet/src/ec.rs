//! secp256k1 operations on raw 32-byte scalars.
//!
//! Uses the library's global context, which is immutable and shared safely
//! across threads.

use crate::error::Result;
use secp256k1::{Message, PublicKey, SECP256K1, SecretKey};

fn secret_key(scalar: &[u8; 32]) -> Result<SecretKey> {
    Ok(SecretKey::from_slice(scalar)?)
}

/// 33-byte SEC1 compressed public key of `scalar`.
pub fn compressed_public_key(scalar: &[u8; 32]) -> Result<[u8; 33]> {
    let secret = secret_key(scalar)?;
    Ok(PublicKey::from_secret_key_global(&secret).serialize())
}

/// 65-byte SEC1 uncompressed public key of `scalar`.
pub fn uncompressed_public_key(scalar: &[u8; 32]) -> Result<[u8; 65]> {
    let secret = secret_key(scalar)?;
    Ok(PublicKey::from_secret_key_global(&secret).serialize_uncompressed())
}

/// Recoverable ECDSA signature over a 32-byte digest: `r ‖ s ‖ recovery_id`.
pub fn sign(hash: &[u8; 32], scalar: &[u8; 32]) -> Result<[u8; 65]> {
    let secret = secret_key(scalar)?;
    let message = Message::from_slice(hash)?;
    let (recovery_id, compact) = SECP256K1
        .sign_ecdsa_recoverable(&message, &secret)
        .serialize_compact();
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&compact);
    out[64] = recovery_id.to_i32() as u8;
    Ok(out)
}
