use anyhow::Result;

use crydi::crypto::pad::glue_padding;
use crydi::crypto::{Md4, Md5, Sha1, Sha256};
use crydi::{Error, Hasher, SizeError};

const SECRET: &[u8] = b"YELLOW SUBMARINE";
const MESSAGE: &[u8] = b"comment1=cooking%20MCs;userdata=foo;comment2=%20like%20a%20pound%20of%20bacon";
const SUFFIX: &[u8] = b";admin=true;";

fn keyed<H: Hasher>(message: &[u8]) -> Result<H::Digest> {
    Ok(H::digest_bytes([SECRET, message].concat())?)
}

/// Forge the keyed digest of `MESSAGE || glue || SUFFIX` knowing only the length of the secret.
fn forge<H: Hasher>() -> Result<()> {
    let digest = keyed::<H>(MESSAGE)?;

    let prefix_len = (SECRET.len() + MESSAGE.len()) as u64;
    let glue = glue_padding(prefix_len, H::ENDIANNESS);
    let forged = H::extend(digest, prefix_len + glue.len() as u64, SUFFIX)?;

    let extended = [MESSAGE, &glue[..], SUFFIX].concat();
    assert_eq!(forged, keyed::<H>(&extended)?, "{}", H::NAME);

    Ok(())
}

#[test]
fn md4_length_extension() -> Result<()> {
    forge::<Md4>()
}

#[test]
fn md5_length_extension() -> Result<()> {
    forge::<Md5>()
}

#[test]
fn sha1_length_extension() -> Result<()> {
    forge::<Sha1>()
}

#[test]
fn sha256_length_extension() -> Result<()> {
    forge::<Sha256>()
}

#[test]
fn extend_requires_block_boundary() -> Result<()> {
    let digest = Sha1::digest_bytes(MESSAGE)?;
    assert_eq!(
        Sha1::extend(digest, MESSAGE.len() as u64, SUFFIX),
        Err(Error::Size(SizeError::UnalignedResume(MESSAGE.len() as u64)))
    );

    Ok(())
}
