//! Merkle–Damgård strengthening and word assembly.
//!
//! The message is followed by a single `0x80` byte, zeros up to 56 mod 64, and the message length
//! in bits as a 64 bit integer. The padded bytes are then read as words in the byte order of the
//! hash function being fed.

use crate::error::{Result, SizeError};
use crate::util::{as_chunks, try_cast_as_arrays};

/// Number of bytes in one compression function input.
pub const BLOCK_SIZE: usize = 64;

/// Number of bytes taken up by the trailing length field.
const LENGTH_FIELD_SIZE: usize = 8;

/// One 512 bit block as sixteen 32 bit words.
pub type WordBlock = [u32; 16];

/// Byte order used to assemble words and to lay out the length field
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub const fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Big => u32::from_be_bytes(bytes),
            Self::Little => u32::from_le_bytes(bytes),
        }
    }

    pub const fn u32_to_bytes(self, word: u32) -> [u8; 4] {
        match self {
            Self::Big => word.to_be_bytes(),
            Self::Little => word.to_le_bytes(),
        }
    }

    /// The length field, high half first for big endian and low half first for little endian.
    const fn length_bytes(self, bit_length: u64) -> [u8; LENGTH_FIELD_SIZE] {
        match self {
            Self::Big => bit_length.to_be_bytes(),
            Self::Little => bit_length.to_le_bytes(),
        }
    }

    /// Assemble up to eight bytes into one word.
    fn assemble(self, bytes: &[u8]) -> u64 {
        let fold = |acc: u64, &b: &u8| acc << 8 | u64::from(b);
        match self {
            Self::Big => bytes.iter().fold(0, fold),
            Self::Little => bytes.iter().rev().fold(0, fold),
        }
    }
}

/// The padding appended to a message of `message_len` bytes, including the length field.
///
/// ```
/// use crydi::crypto::pad::{glue_padding, Endianness};
/// let glue = glue_padding(3, Endianness::Big);
/// assert_eq!(glue.len(), 61);
/// assert_eq!(glue[0], 0x80);
/// assert_eq!(glue[60], 24);
/// ```
pub fn glue_padding(message_len: u64, endianness: Endianness) -> Vec<u8> {
    glue_padding_with_length(message_len, message_len, endianness)
}

/// Padding for a message whose tail is `tail_len` bytes into its block, with the length field
/// describing `total_len` bytes.
fn glue_padding_with_length(tail_len: u64, total_len: u64, endianness: Endianness) -> Vec<u8> {
    let block = BLOCK_SIZE as u64;
    let used = (tail_len + 1) % block;
    let zeros = (block - LENGTH_FIELD_SIZE as u64 + block - used) % block;

    let mut glue = Vec::with_capacity(1 + zeros as usize + LENGTH_FIELD_SIZE);
    glue.push(0x80);
    glue.resize(1 + zeros as usize, 0);
    glue.extend_from_slice(&endianness.length_bytes(total_len.wrapping_mul(u8::BITS.into())));
    glue
}

/// Pad `bytes` as the continuation of `prior_len` already hashed bytes.
fn pad(bytes: &[u8], prior_len: u64, endianness: Endianness) -> Vec<u8> {
    let tail_len = bytes.len() as u64;
    let glue = glue_padding_with_length(tail_len, prior_len.wrapping_add(tail_len), endianness);

    let mut padded = Vec::with_capacity(bytes.len() + glue.len());
    padded.extend_from_slice(bytes);
    padded.extend_from_slice(&glue);
    padded
}

/// Pad the message and assemble it into words of `word_size` bytes.
///
/// Each word is returned in the low bytes of a `u64`.
pub fn pack_words(bytes: &[u8], word_size: usize, endianness: Endianness) -> Result<Vec<u64>> {
    if !word_size.is_power_of_two() || word_size > LENGTH_FIELD_SIZE {
        return Err(SizeError::InvalidWordSize(word_size).into());
    }

    let padded = pad(bytes, 0, endianness);
    if padded.len() % word_size != 0 {
        return Err(SizeError::Misaligned {
            len: padded.len(),
            word_size,
        }
        .into());
    }

    Ok(padded
        .chunks_exact(word_size)
        .map(|word| endianness.assemble(word))
        .collect())
}

/// Pad the message and split it into blocks of sixteen 32 bit words.
pub fn pack(bytes: &[u8], endianness: Endianness) -> Result<Vec<WordBlock>> {
    blocks_from_padded(&pad(bytes, 0, endianness), endianness)
}

/// Pad the message as though `prior_len` bytes had already gone through the hash.
///
/// `prior_len` has to sit on a block boundary, as it does after any complete digest.
pub fn pack_resumed(bytes: &[u8], prior_len: u64, endianness: Endianness) -> Result<Vec<WordBlock>> {
    if prior_len % BLOCK_SIZE as u64 != 0 {
        return Err(SizeError::UnalignedResume(prior_len).into());
    }

    blocks_from_padded(&pad(bytes, prior_len, endianness), endianness)
}

fn blocks_from_padded(padded: &[u8], endianness: Endianness) -> Result<Vec<WordBlock>> {
    let blocks: &[[u8; BLOCK_SIZE]] = try_cast_as_arrays(padded)?;

    Ok(blocks
        .iter()
        .map(|block| {
            let mut words: WordBlock = [0; 16];
            let (chunks, _) = as_chunks::<_, 4>(block);
            for (word, chunk) in words.iter_mut().zip(chunks) {
                *word = endianness.u32_from_bytes(*chunk);
            }
            words
        })
        .collect())
}
