//! Conversions between raw input strings and byte sequences.

mod hex;

pub use hex::{parse_hex, to_hex};

use crate::error::Result;

/// Reasons a hex string can fail to decode
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
    #[error("unrecognised hex character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("hex input has an odd number of digits ({0})")]
    OddLength(usize),
}

/// Trait allowing us to use .encode_hex to encode bytes
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

impl<const N: usize> Encodable for [u8; N] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

/// Trait allowing us to use .decode_hex to decode strings
pub trait Decodable {
    type DecodeError;

    fn decode_hex(&self) -> Result<Vec<u8>, Self::DecodeError>;
}

impl Decodable for str {
    type DecodeError = DecodingError;

    fn decode_hex(&self) -> Result<Vec<u8>, Self::DecodeError> {
        parse_hex(self)
    }
}

/// Turn a caller supplied string into the bytes to be hashed.
///
/// Text is taken as its UTF-8 encoding, hex input is decoded (either case is accepted).
/// ```
/// use crydi::encoding::to_bytes;
/// assert_eq!(to_bytes("abc", false).unwrap(), b"abc");
/// assert_eq!(to_bytes("6162 63".replace(' ', "").as_str(), true).unwrap(), b"abc");
/// assert!(to_bytes("6g", true).is_err());
/// ```
pub fn to_bytes(input: &str, is_hex: bool) -> Result<Vec<u8>> {
    if is_hex {
        Ok(input.decode_hex()?)
    } else {
        Ok(input.as_bytes().to_vec())
    }
}
