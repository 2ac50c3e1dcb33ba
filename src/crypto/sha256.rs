//! SHA-256 implemented as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
use crate::crypto::pad::{Endianness, WordBlock};
use crate::crypto::Hasher;
use crate::error::Result;

mod context {
    #[rustfmt::skip]
    pub const K: [u32; 64] = [
        0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
        0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
        0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
        0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
        0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
        0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
        0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
        0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
    ];

    const H0: u32 = 0x6a09e667;
    const H1: u32 = 0xbb67ae85;
    const H2: u32 = 0x3c6ef372;
    const H3: u32 = 0xa54ff53a;
    const H4: u32 = 0x510e527f;
    const H5: u32 = 0x9b05688c;
    const H6: u32 = 0x1f83d9ab;
    const H7: u32 = 0x5be0cd19;

    pub const INIT_STATE: [u32; 8] = [H0, H1, H2, H3, H4, H5, H6, H7];

    pub const ROUNDS: usize = 64;

    #[allow(non_snake_case)]
    pub const fn Σ_0(x: u32) -> u32 {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    #[allow(non_snake_case)]
    pub const fn Σ_1(x: u32) -> u32 {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    pub const fn σ_0(x: u32) -> u32 {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    pub const fn σ_1(x: u32) -> u32 {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }
}
use context::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sha256;

impl_digest!(
    Sha256Digest,
    words = 8,
    endianness = crate::crypto::pad::Endianness::Big
);

impl Hasher for Sha256 {
    type State = [u32; 8];
    type Digest = Sha256Digest;

    const NAME: &'static str = "SHA-256";
    const ENDIANNESS: Endianness = Endianness::Big;
    const INIT_STATE: Self::State = INIT_STATE;

    #[allow(non_snake_case)]
    fn process_block(state: &mut Self::State, block: &WordBlock) {
        let mut W = [0_u32; ROUNDS];
        W[..16].copy_from_slice(block);

        for t in 16..ROUNDS {
            W[t] = σ_1(W[t - 2])
                .wrapping_add(W[t - 7])
                .wrapping_add(σ_0(W[t - 15]))
                .wrapping_add(W[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

        for t in 0..ROUNDS {
            // Ch and Maj are written with xor in FIPS 180-4, the or forms are equivalent
            let T1 = h
                .wrapping_add(Σ_1(e))
                .wrapping_add(Ch!(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(W[t]);
            let T2 = Σ_0(a).wrapping_add(Maj!(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(T1);
            d = c;
            c = b;
            b = a;
            a = T1.wrapping_add(T2);
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
        state[5] = state[5].wrapping_add(f);
        state[6] = state[6].wrapping_add(g);
        state[7] = state[7].wrapping_add(h);
    }
}

/// SHA-256 of a text or hex string as lower case hex
pub fn digest(input: &str, is_hex: bool) -> Result<String> {
    Sha256::hex_digest(input, is_hex)
}
