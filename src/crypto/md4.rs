//! MD4 as described in RFC 1320: https://www.rfc-editor.org/rfc/rfc1320
use crate::crypto::pad::{Endianness, WordBlock};
use crate::crypto::Hasher;
use crate::error::Result;

pub mod constants {
    pub const WORD_A: u32 = u32::from_le_bytes([0x01, 0x23, 0x45, 0x67]);
    pub const WORD_B: u32 = u32::from_le_bytes([0x89, 0xab, 0xcd, 0xef]);
    pub const WORD_C: u32 = u32::from_le_bytes([0xfe, 0xdc, 0xba, 0x98]);
    pub const WORD_D: u32 = u32::from_le_bytes([0x76, 0x54, 0x32, 0x10]);

    pub const INIT_STATE: [u32; 4] = [WORD_A, WORD_B, WORD_C, WORD_D];

    /// Added in each of the three rounds
    pub const K: [u32; 3] = [0, 0x5A827999, 0x6ED9EBA1];

    /// Rotation amounts, indexed by round and step within the round
    #[rustfmt::skip]
    pub const S: [[u32; 4]; 3] = [
        [3, 7, 11, 19],
        [3, 5,  9, 13],
        [3, 9, 11, 15],
    ];

    /// Order in which the third round reads message words
    #[rustfmt::skip]
    pub const ROUND_3_ORDER: [usize; 16] = [
        0, 8, 4, 12,
        2, 10, 6, 14,
        1, 9, 5, 13,
        3, 11, 7, 15,
    ];

    pub const ROUNDS: usize = 48;
}
use constants::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Md4;

impl_digest!(
    Md4Digest,
    words = 4,
    endianness = crate::crypto::pad::Endianness::Little
);

impl Hasher for Md4 {
    type State = [u32; 4];
    type Digest = Md4Digest;

    const NAME: &'static str = "MD4";
    const ENDIANNESS: Endianness = Endianness::Little;
    const INIT_STATE: Self::State = INIT_STATE;

    #[allow(non_snake_case)]
    fn process_block(state: &mut Self::State, X: &WordBlock) {
        let [mut a, mut b, mut c, mut d] = *state;

        for t in 0..ROUNDS {
            let round = t / 16;
            let (f, k) = match t {
                0..=15 => (Ch!(b, c, d), t),
                16..=31 => (Maj!(b, c, d), (t % 4) * 4 + (t - 16) / 4),
                32..=47 => (Parity!(b, c, d), ROUND_3_ORDER[t - 32]),
                _ => unreachable!("md4 has 48 steps"),
            };

            // a = (a + f(b,c,d) + X[k] + K) <<< s, then the registers shift along
            let T = a
                .wrapping_add(f)
                .wrapping_add(X[k])
                .wrapping_add(K[round])
                .rotate_left(S[round][t % 4]);
            a = d;
            d = c;
            c = b;
            b = T;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }
}

/// MD4 of a text or hex string as lower case hex
/// ```
/// assert_eq!(crydi::crypto::md4::digest("abc", false).unwrap(), "a448017aaf21d8525fc10ae87aa6729d");
/// ```
pub fn digest(input: &str, is_hex: bool) -> Result<String> {
    Md4::hex_digest(input, is_hex)
}
