//! MD5 as described in RFC 1321: https://www.rfc-editor.org/rfc/rfc1321
use crate::crypto::pad::{Endianness, WordBlock};
use crate::crypto::Hasher;
use crate::error::Result;

// G(X,Y,Z) = XZ v Y not(Z)
macro_rules! G {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $z) | ($y & !$z)
    };
}

// I(X,Y,Z) = Y xor (X v not(Z))
macro_rules! I {
    ($x:expr, $y:expr, $z:expr) => {
        $y ^ ($x | !$z)
    };
}

mod context {
    const A: u32 = 0x67452301;
    const B: u32 = 0xefcdab89;
    const C: u32 = 0x98badcfe;
    const D: u32 = 0x10325476;

    pub const INIT_STATE: [u32; 4] = [A, B, C, D];

    /// T[i] = floor(2^32 * abs(sin(i + 1)))
    #[rustfmt::skip]
    pub const T: [u32; 64] = [
        0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
        0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
        0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
        0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
        0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
        0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
        0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
        0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
    ];

    #[rustfmt::skip]
    pub const S: [[u32; 4]; 4] = [
        [7, 12, 17, 22],
        [5,  9, 14, 20],
        [4, 11, 16, 23],
        [6, 10, 15, 21],
    ];

    pub const ROUNDS: usize = 64;
}
use context::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Md5;

impl_digest!(
    Md5Digest,
    words = 4,
    endianness = crate::crypto::pad::Endianness::Little
);

impl Hasher for Md5 {
    type State = [u32; 4];
    type Digest = Md5Digest;

    const NAME: &'static str = "MD5";
    const ENDIANNESS: Endianness = Endianness::Little;
    const INIT_STATE: Self::State = INIT_STATE;

    #[allow(non_snake_case)]
    fn process_block(state: &mut Self::State, X: &WordBlock) {
        let [mut a, mut b, mut c, mut d] = *state;

        for t in 0..ROUNDS {
            let (f, g) = match t {
                0..=15 => (Ch!(b, c, d), t),
                16..=31 => (G!(b, c, d), (5 * t + 1) % 16),
                32..=47 => (Parity!(b, c, d), (3 * t + 5) % 16),
                48..=63 => (I!(b, c, d), (7 * t) % 16),
                _ => unreachable!("md5 has 64 steps"),
            };

            let temp = a.wrapping_add(f).wrapping_add(T[t]).wrapping_add(X[g]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(temp.rotate_left(S[t / 16][t % 4]));
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }
}

/// MD5 of a text or hex string as lower case hex
pub fn digest(input: &str, is_hex: bool) -> Result<String> {
    Md5::hex_digest(input, is_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    // test vectors from https://www.rfc-editor.org/rfc/rfc1321
    #[test]
    fn test_md5_rfc_vectors() {
        let test_vectors = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "c3fcd3d76192e4007dfb496cca67e13b",
            ),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(digest(test, false).unwrap(), correct);
        }
    }

    #[test]
    fn test_md5_non_ascii_text() {
        assert_eq!(
            digest("ó", false).unwrap(),
            "5ab838a6f466a5fe1ddbc08340cc21f1"
        );
    }

    #[test]
    fn test_md5_hex_input_either_case() {
        let lower = digest("6d65737361676520646967657374", true).unwrap();
        let upper = digest("6D65737361676520646967657374", true).unwrap();
        assert_eq!(lower, "f96b697d7cb7938d525a2f31aaf161d0");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_md5_sine_table() {
        for (i, &t) in T.iter().enumerate() {
            let expected = (((i + 1) as f64).sin().abs() * 4_294_967_296.0).floor() as u32;
            assert_eq!(t, expected, "T[{i}]");
        }
    }

    #[test]
    fn test_md5_digest_to_state() {
        let digest = Md5::digest_bytes("").unwrap();
        let state: [u32; 4] = digest.into();
        assert_eq!(state[0], 0xd98c1dd4);
        assert_eq!(Md5Digest::from(state), digest);
    }
}
