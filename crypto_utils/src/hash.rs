use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// SHA256(SHA256(input)), the digest behind every Base58Check checksum.
pub fn sha256d(input: &[u8]) -> [u8; 32] {
    sha256(&sha256(input))
}

pub fn ripemd160(input: &[u8]) -> [u8; 20] {
    Ripemd160::digest(input).into()
}

/// RIPEMD160(SHA256(input)): key identifiers, fingerprints and P2PKH payloads.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(input))
}

/// Legacy Keccak-256 (pre-NIST padding) as used for Ethereum addresses.
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut keccak = Keccak::v256();
    keccak.update(input);
    let mut out = [0u8; 32];
    keccak.finalize(&mut out);
    out
}
