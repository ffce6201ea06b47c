//! 32-byte address type shared by program identifiers and derived
//! addresses.
//!
//! The text form is base58 with the Bitcoin alphabet. Parsing is strict:
//! the input must decode to exactly 32 bytes. Serde support (behind the
//! `serde` feature) uses the text form, so addresses appear as base58
//! strings in JSON.

use core::fmt;
use core::str::FromStr;

use crate::errors::{PdaResult, PdakitError};

/// Number of bytes in an address.
pub const ADDRESS_BYTES: usize = 32;

/// A program identifier or derived address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; ADDRESS_BYTES] {
        self.0
    }

    /// Parse the base58 text form.
    pub fn parse(s: &str) -> PdaResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| PdakitError::invalid_address(format!("not base58: {e}")))?;
        if bytes.len() != ADDRESS_BYTES {
            return Err(PdakitError::invalid_address(format!(
                "decoded to {} bytes, expected {ADDRESS_BYTES}",
                bytes.len()
            )));
        }
        let mut out = [0u8; ADDRESS_BYTES];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = PdakitError;

    fn from_str(s: &str) -> PdaResult<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a base58-encoded 32-byte address")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Address, E> {
                Address::parse(s).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_ones_in_base58() {
        // 32 zero bytes encode as 32 leading-zero digits.
        assert_eq!(Address::default().to_string(), "1".repeat(32));
    }

    #[test]
    fn text_round_trip() {
        let a = Address::new([7u8; 32]);
        let parsed: Address = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }

    #[test]
    fn parse_known_program_id() {
        let a = Address::parse("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap();
        assert_eq!(a.to_string(), "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    }

    #[test]
    fn reject_wrong_length() {
        let e = Address::parse("abc").unwrap_err();
        assert!(matches!(e, PdakitError::InvalidAddress { .. }));
    }

    #[test]
    fn reject_non_base58() {
        // '0' and 'l' are not in the alphabet.
        let e = Address::parse("0l0l0l0l0l0l0l0l0l0l0l0l0l0l0l0l").unwrap_err();
        assert!(matches!(e, PdakitError::InvalidAddress { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_base58_string() {
        let a = Address::new([7u8; 32]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, format!("\"{a}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
