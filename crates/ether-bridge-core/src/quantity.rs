//! Hex quantity and byte-string codec for provider payloads.

use alloy::primitives::{hex, U256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("invalid quantity {raw}: {reason}")]
    InvalidQuantity { raw: String, reason: String },
    #[error("quantity {0} does not fit in u64")]
    Overflow(String),
    #[error("invalid hex bytes {raw}: {reason}")]
    InvalidBytes { raw: String, reason: String },
    #[error("payload is not utf-8: {0}")]
    InvalidUtf8(String),
}

/// Parses a `0x`-prefixed hex quantity; bare decimal strings are accepted as
/// a fallback.
pub fn to_u256(raw: &str) -> Result<U256, QuantityError> {
    if raw.starts_with("0x") || raw.starts_with("0X") {
        U256::from_str_radix(raw.trim_start_matches("0x").trim_start_matches("0X"), 16).map_err(
            |e| QuantityError::InvalidQuantity {
                raw: raw.to_owned(),
                reason: e.to_string(),
            },
        )
    } else {
        raw.parse::<U256>().map_err(|e| QuantityError::InvalidQuantity {
            raw: raw.to_owned(),
            reason: e.to_string(),
        })
    }
}

pub fn to_u64(raw: &str) -> Result<u64, QuantityError> {
    let value = to_u256(raw)?;
    u64::try_from(value).map_err(|_| QuantityError::Overflow(raw.to_owned()))
}

/// Minimal hex encoding, `0x0` for zero.
pub fn from_u64(value: u64) -> String {
    format!("0x{value:x}")
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn decode_bytes(raw: &str) -> Result<Vec<u8>, QuantityError> {
    hex::decode(raw.trim_start_matches("0x")).map_err(|e| QuantityError::InvalidBytes {
        raw: raw.to_owned(),
        reason: e.to_string(),
    })
}

/// Decodes a hex-encoded utf-8 string, the shape `personal_sign` messages
/// travel in.
pub fn decode_utf8(raw: &str) -> Result<String, QuantityError> {
    let bytes = decode_bytes(raw)?;
    String::from_utf8(bytes).map_err(|e| QuantityError::InvalidUtf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_quantities() {
        assert_eq!(to_u64("0x1").expect("hex one"), 1);
        assert_eq!(to_u64("0X10").expect("upper prefix"), 16);
        assert_eq!(to_u64("42").expect("decimal fallback"), 42);
        assert_eq!(
            to_u256("0xde0b6b3a7640000").expect("one ether"),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn rejects_garbage_quantities() {
        assert!(to_u256("0xzz").is_err());
        assert!(to_u64("not a number").is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let raw = "0xffffffffffffffffff";
        assert_eq!(to_u64(raw), Err(QuantityError::Overflow(raw.to_owned())));
    }

    #[test]
    fn round_trips_minimal_hex() {
        assert_eq!(from_u64(0), "0x0");
        assert_eq!(from_u64(8453), "0x2105");
        assert_eq!(to_u64(&from_u64(8453)).expect("round trip"), 8453);
    }

    #[test]
    fn decodes_hex_payloads() {
        assert_eq!(encode_bytes(b"hello"), "0x68656c6c6f");
        assert_eq!(decode_bytes("0x68656c6c6f").expect("bytes"), b"hello");
        assert_eq!(decode_utf8("0x68656c6c6f").expect("utf8"), "hello");
        assert!(decode_utf8("0xff").is_err());
    }
}
