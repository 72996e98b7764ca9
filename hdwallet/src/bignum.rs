//! Arbitrary-precision integers for scalar arithmetic modulo the curve order.

use crate::error::{Error, Result};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::ops::Add;

/// Order `n` of the secp256k1 group, big-endian.
pub const SECP256K1_CURVE_ORDER: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Sign-magnitude integer of unbounded width.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigNumber(BigInt);

impl BigNumber {
    /// Interprets `bytes` as an unsigned big-endian magnitude.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        BigNumber(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Parses hexadecimal digits with an optional leading `-` and `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let digits = body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
            .unwrap_or(body);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::DecodingError(format!("invalid hex integer {s:?}")));
        }
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| Error::DecodingError(format!("invalid hex integer {s:?}")))?;
        Ok(BigNumber(if negative { -magnitude } else { magnitude }))
    }

    pub fn curve_order() -> Self {
        Self::from_bytes_be(&SECP256K1_CURVE_ORDER)
    }

    /// True when `raw` is a usable secp256k1 private scalar, `1..n-1`.
    pub fn is_valid_private_scalar(raw: &[u8; 32]) -> bool {
        let scalar = Self::from_bytes_be(raw);
        !scalar.is_zero() && scalar < Self::curve_order()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Euclidean remainder: always in `0..|modulus|`. `None` for a zero modulus.
    pub fn modulo(&self, modulus: &BigNumber) -> Option<BigNumber> {
        if modulus.is_zero() {
            return None;
        }
        let remainder = &self.0 % &modulus.0;
        if remainder.is_negative() {
            Some(BigNumber(remainder + modulus.0.abs()))
        } else {
            Some(BigNumber(remainder))
        }
    }

    /// Big-endian encoding left-padded with zero bytes to exactly `N` bytes.
    ///
    /// Returns `None` for negative values and for values wider than `N` bytes.
    pub fn to_bytes_be_padded<const N: usize>(&self) -> Option<[u8; N]> {
        if self.0.is_negative() {
            return None;
        }
        let (_, magnitude) = self.0.to_bytes_be();
        let magnitude: &[u8] = if self.0.is_zero() { &[] } else { &magnitude };
        if magnitude.len() > N {
            return None;
        }
        let mut out = [0u8; N];
        out[N - magnitude.len()..].copy_from_slice(magnitude);
        Some(out)
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: &BigNumber) -> BigNumber {
        BigNumber(&self.0 + &rhs.0)
    }
}

impl Add for BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: BigNumber) -> BigNumber {
        BigNumber(self.0 + rhs.0)
    }
}
