use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::encoding::{to_bytes, Encodable};
use crate::error::{Error, Result};
use pad::{Endianness, WordBlock};

// Ch(X,Y,Z) = XY v not(X) Z
macro_rules! Ch {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) | (!$x & $z)
    };
}

// Maj(X,Y,Z) = XY v XZ v YZ
macro_rules! Maj {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) | ($x & $z) | ($y & $z)
    };
}

// Parity(X,Y,Z) = X xor Y xor Z
macro_rules! Parity {
    ($x:expr, $y:expr, $z:expr) => {
        $x ^ $y ^ $z
    };
}

/// Defines a fixed size digest which converts to and from the register state producing it.
macro_rules! impl_digest {
    ($name:ident, words = $words:literal, endianness = $endianness:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $name(pub [u8; $words * 4]);

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl $crate::encoding::Encodable for $name {
            fn encode_hex(&self) -> String {
                $crate::encoding::to_hex(self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::encoding::to_hex(self.0))
            }
        }

        impl From<[u32; $words]> for $name {
            fn from(state: [u32; $words]) -> Self {
                let mut bytes = [0; $words * 4];
                for (chunk, word) in bytes.chunks_exact_mut(4).zip(state) {
                    chunk.copy_from_slice(&$endianness.u32_to_bytes(word));
                }
                Self(bytes)
            }
        }

        impl From<$name> for [u32; $words] {
            fn from($name(bytes): $name) -> Self {
                let mut state = [0; $words];
                let (chunks, _) = $crate::util::as_chunks::<_, 4>(&bytes);
                for (word, chunk) in state.iter_mut().zip(chunks) {
                    *word = $endianness.u32_from_bytes(*chunk);
                }
                state
            }
        }
    };
}

pub mod hmac;
pub mod md4;
pub mod md5;
pub mod pad;
pub mod sha1;
pub mod sha256;

pub use hmac::Hmac;
pub use md4::Md4;
pub use md5::Md5;
pub use sha1::Sha1;
pub use sha256::Sha256;

/// A Merkle–Damgård hash function over 512 bit blocks.
///
/// Implementors only describe a single compression step, everything from padding to rendering
/// the digest is shared.
pub trait Hasher {
    /// The chaining registers.
    type State: Copy + fmt::Debug + Eq + From<Self::Digest>;

    type Digest: Copy + fmt::Debug + Eq + AsRef<[u8]> + Encodable + From<Self::State>;

    const NAME: &'static str;

    const BLOCK_SIZE: usize = pad::BLOCK_SIZE;

    /// Byte order used to read message words and to write out the registers.
    const ENDIANNESS: Endianness;

    const INIT_STATE: Self::State;

    /// Run the compression function for one block, feeding the result forward into `state`.
    fn process_block(state: &mut Self::State, block: &WordBlock);

    /// Fold `blocks` into `state` and produce the resulting digest.
    fn compress_from(mut state: Self::State, blocks: &[WordBlock]) -> Self::Digest {
        for block in blocks {
            Self::process_block(&mut state, block);
        }
        state.into()
    }

    fn compress(blocks: &[WordBlock]) -> Self::Digest {
        Self::compress_from(Self::INIT_STATE, blocks)
    }

    fn digest_bytes(data: impl AsRef<[u8]>) -> Result<Self::Digest> {
        let data = data.as_ref();
        let blocks = pad::pack(data, Self::ENDIANNESS)?;
        tracing::trace!(
            algorithm = Self::NAME,
            bytes = data.len(),
            blocks = blocks.len(),
            "computing digest"
        );
        Ok(Self::compress(&blocks))
    }

    /// Hash a text or hex string, returning the lower case hex digest.
    fn hex_digest(input: &str, is_hex: bool) -> Result<String> {
        let bytes = to_bytes(input, is_hex)?;
        Ok(Self::digest_bytes(bytes)?.encode_hex())
    }

    /// Continue hashing `data` after a message of `prior_len` bytes (its padding included)
    /// which produced `digest`.
    fn extend(digest: Self::Digest, prior_len: u64, data: impl AsRef<[u8]>) -> Result<Self::Digest> {
        let blocks = pad::pack_resumed(data.as_ref(), prior_len, Self::ENDIANNESS)?;
        Ok(Self::compress_from(digest.into(), &blocks))
    }
}

/// The hash functions selectable by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md4,
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::Md4, Self::Md5, Self::Sha1, Self::Sha256];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Md4 => Md4::NAME,
            Self::Md5 => Md5::NAME,
            Self::Sha1 => Sha1::NAME,
            Self::Sha256 => Sha256::NAME,
        }
    }

    pub const fn block_size(self) -> usize {
        match self {
            Self::Md4 => Md4::BLOCK_SIZE,
            Self::Md5 => Md5::BLOCK_SIZE,
            Self::Sha1 => Sha1::BLOCK_SIZE,
            Self::Sha256 => Sha256::BLOCK_SIZE,
        }
    }

    /// Length of the digest in bytes
    pub const fn digest_size(self) -> usize {
        match self {
            Self::Md4 => mem::size_of::<<Md4 as Hasher>::Digest>(),
            Self::Md5 => mem::size_of::<<Md5 as Hasher>::Digest>(),
            Self::Sha1 => mem::size_of::<<Sha1 as Hasher>::Digest>(),
            Self::Sha256 => mem::size_of::<<Sha256 as Hasher>::Digest>(),
        }
    }

    pub fn digest_bytes(self, data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Md4 => Md4::digest_bytes(data)?.as_ref().to_vec(),
            Self::Md5 => Md5::digest_bytes(data)?.as_ref().to_vec(),
            Self::Sha1 => Sha1::digest_bytes(data)?.as_ref().to_vec(),
            Self::Sha256 => Sha256::digest_bytes(data)?.as_ref().to_vec(),
        })
    }

    pub fn digest(self, input: &str, is_hex: bool) -> Result<String> {
        match self {
            Self::Md4 => Md4::hex_digest(input, is_hex),
            Self::Md5 => Md5::hex_digest(input, is_hex),
            Self::Sha1 => Sha1::hex_digest(input, is_hex),
            Self::Sha256 => Sha256::hex_digest(input, is_hex),
        }
    }

    /// Keyed digest of `message` using this algorithm as the underlying hash.
    pub fn hmac(self, key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Md4 => Hmac::<Md4>::new(key)?.mac(message)?.as_ref().to_vec(),
            Self::Md5 => Hmac::<Md5>::new(key)?.mac(message)?.as_ref().to_vec(),
            Self::Sha1 => Hmac::<Sha1>::new(key)?.mac(message)?.as_ref().to_vec(),
            Self::Sha256 => Hmac::<Sha256>::new(key)?.mac(message)?.as_ref().to_vec(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("MD4".parse::<Algorithm>(), Ok(Algorithm::Md4));
        assert_eq!("MD5".parse::<Algorithm>(), Ok(Algorithm::Md5));
        assert_eq!("SHA-1".parse::<Algorithm>(), Ok(Algorithm::Sha1));
        assert_eq!("SHA-256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
    }

    #[test]
    fn test_algorithm_from_str_fails_closed() {
        for name in ["", "SHA1", "SHA-512", "MD 5", "sha-256 ", "md5", "sha-256", "Sha-1"] {
            assert_eq!(
                name.parse::<Algorithm>(),
                Err(Error::UnsupportedAlgorithm(name.to_owned()))
            );
        }
    }

    #[test]
    fn test_algorithm_name_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.block_size(), 64);
        }
    }

    #[test]
    fn test_algorithm_digest_size_matches_core() {
        assert_eq!(Algorithm::Md4.digest_size(), 16);
        assert_eq!(Algorithm::Md5.digest_size(), 16);
        assert_eq!(Algorithm::Sha1.digest_size(), 20);
        assert_eq!(Algorithm::Sha256.digest_size(), 32);
        assert_eq!(
            Algorithm::Sha1.digest_size(),
            Sha1::digest_bytes("").unwrap().as_ref().len()
        );
    }

    #[test]
    fn test_algorithm_digest_sizes() {
        for algorithm in Algorithm::ALL {
            let digest = algorithm.digest("abc", false).unwrap();
            assert_eq!(digest.len(), algorithm.digest_size() * 2);
            assert_eq!(algorithm.digest_bytes("abc").unwrap().len(), algorithm.digest_size());
        }
    }

    #[test]
    fn test_shared_round_functions() {
        let (x, y, z) = (0xf0f0_f0f0_u32, 0xff00_ff00_u32, 0x0ff0_0ff0_u32);
        assert_eq!(Ch!(x, y, z), 0xff00_ff00);
        assert_eq!(Maj!(x, y, z), (x & y) ^ (x & z) ^ (y & z));
        assert_eq!(Parity!(x, y, z), x ^ y ^ z);
    }
}
