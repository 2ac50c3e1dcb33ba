//! SHA-1 implemented as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
use crate::crypto::pad::{Endianness, WordBlock};
use crate::crypto::Hasher;
use crate::error::Result;

mod context {
    const H0: u32 = 0x67452301;
    const H1: u32 = 0xEFCDAB89;
    const H2: u32 = 0x98BADCFE;
    const H3: u32 = 0x10325476;
    const H4: u32 = 0xC3D2E1F0;

    pub const INIT_STATE: [u32; 5] = [H0, H1, H2, H3, H4];

    pub const ROUNDS: usize = 80;

    pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
}
use context::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sha1;

impl_digest!(
    Sha1Digest,
    words = 5,
    endianness = crate::crypto::pad::Endianness::Big
);

impl Hasher for Sha1 {
    type State = [u32; 5];
    type Digest = Sha1Digest;

    const NAME: &'static str = "SHA-1";
    const ENDIANNESS: Endianness = Endianness::Big;
    const INIT_STATE: Self::State = INIT_STATE;

    #[allow(non_snake_case)]
    fn process_block(state: &mut Self::State, block: &WordBlock) {
        // The message schedule
        let mut W = [0_u32; ROUNDS];
        W[..16].copy_from_slice(block);

        // Expand the message into the rest of the schedule
        for t in 16..ROUNDS {
            W[t] = (W[t - 3] ^ W[t - 8] ^ W[t - 14] ^ W[t - 16]).rotate_left(1);
        }

        // Working variables
        let [mut a, mut b, mut c, mut d, mut e] = *state;

        // Compute the core rounds
        for t in 0..ROUNDS {
            let f = match t {
                0..=19 => Ch!(b, c, d),
                20..=39 => Parity!(b, c, d),
                40..=59 => Maj!(b, c, d),
                60..=79 => Parity!(b, c, d),
                _ => unreachable!("sha1 has 80 rounds"),
            };
            let T = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[t / 20])
                .wrapping_add(W[t]);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = T;
        }

        // Compute the intermediate hash values
        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }
}

/// SHA-1 of a text or hex string as lower case hex
pub fn digest(input: &str, is_hex: bool) -> Result<String> {
    Sha1::hex_digest(input, is_hex)
}
