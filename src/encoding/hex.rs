use super::DecodingError;
use crate::util::as_chunks;

/// Parse an input string as hex, accepting digits of either case
/// ```
/// use crydi::encoding::parse_hex;
/// assert_eq!(parse_hex("12aB").unwrap(), &[0x12, 0xab]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, DecodingError> {
    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(DecodingError::InvalidCharacter {
            character,
            position,
        });
    }

    // every character is ASCII at this point so bytes and digits line up
    let (pairs, rmdr) = as_chunks::<_, 2>(input.as_bytes());
    if !rmdr.is_empty() {
        return Err(DecodingError::OddLength(input.len()));
    }

    Ok(pairs.iter().map(|&[h, l]| h2b(h) << 4 | h2b(l)).collect())
}

/// Turn a slice of bytes into a lower case hex encoded string
/// ```
/// use crydi::encoding::{Encodable, to_hex};
/// assert_eq!(to_hex([0x12, 0x34, 0x56, 0x78]), "12345678");
/// assert_eq!([0x12_u8, 0x34, 0x56, 0x78].encode_hex(), "12345678");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let bytes = input.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    out.extend(bytes.iter().copied().flat_map(b2h).map(char::from));
    out
}

/// Convert an already validated hex digit to its value
fn h2b(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => unreachable!("hex digits are validated before decoding"),
    }
}

/// Convert a byte into a pair of bytes representing its hex value
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}
