use crate::encoding::DecodingError;

/// Errors produced while preprocessing, packing or keying a hash computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid hex input: {0}")]
    InputFormat(#[from] DecodingError),
    #[error("no key was given for the HMAC")]
    Key,
    #[error("unsupported hash algorithm {0:?}, expected one of MD4, MD5, SHA-1 or SHA-256")]
    UnsupportedAlgorithm(String),
    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Broken invariants of the word packer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    #[error("word size {0} is not a power of two between 1 and 8")]
    InvalidWordSize(usize),
    #[error("{len} padded bytes do not divide into words of {word_size} bytes")]
    Misaligned { len: usize, word_size: usize },
    #[error("hashing can only resume on a block boundary, got {0} prior bytes")]
    UnalignedResume(u64),
    #[error("slice of {len} elements does not divide evenly into arrays of {chunk}")]
    RaggedSlice { len: usize, chunk: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
