use anyhow::Result;

use crydi::crypto::{hmac, md4, md5, sha1, sha256};
use crydi::{Algorithm, Error};

const RFC4231_CASE6_MESSAGE: &str = "54657374205573696e67204c6172676572205468616e20426c6f636b2d53697a65204b6579202d2048617368204b6579204669727374";

#[test]
fn empty_and_abc_digests() -> Result<()> {
    assert_eq!(md4::digest("", false)?, "31d6cfe0d16ae931b73c59d7e0c089c0");
    assert_eq!(md4::digest("abc", false)?, "a448017aaf21d8525fc10ae87aa6729d");
    assert_eq!(md5::digest("", false)?, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(md5::digest("abc", false)?, "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(sha1::digest("", false)?, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(sha1::digest("abc", false)?, "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
        sha256::digest("", false)?,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    Ok(())
}

#[test]
fn hex_and_text_input_agree() -> Result<()> {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.digest("message digest", false)?,
            algorithm.digest("6D657373616765206469676573 74".replace(' ', "").as_str(), true)?
        );
    }

    Ok(())
}

#[test]
fn hmac_md5_rfc2202_case1() -> Result<()> {
    assert_eq!(
        hmac::hmac("Hi There", "MD5", "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b", false, true)?,
        "9294727a3638bb1c13f48ef8158bfc9d"
    );

    Ok(())
}

#[test]
fn hmac_sha256_rfc4231() -> Result<()> {
    assert_eq!(
        hmac::hmac("Hi There", "SHA-256", &"0b".repeat(20), false, true)?,
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
    assert_eq!(
        hmac::hmac("what do ya want for nothing?", "SHA-256", "Jefe", false, false)?,
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    assert_eq!(
        hmac::hmac(RFC4231_CASE6_MESSAGE, "SHA-256", &"aa".repeat(131), true, true)?,
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );

    Ok(())
}

#[test]
fn long_key_is_hashed_down() -> Result<()> {
    let key = [0xaa_u8; 131];
    let hashed = Algorithm::Sha256.digest_bytes(key)?;
    assert_eq!(
        hmac::hmac(RFC4231_CASE6_MESSAGE, "SHA-256", &crydi::encoding::to_hex(key), true, true)?,
        hmac::hmac(RFC4231_CASE6_MESSAGE, "SHA-256", &crydi::encoding::to_hex(hashed), true, true)?,
    );

    Ok(())
}

#[test]
fn errors_are_reported() {
    assert_eq!(
        hmac::hmac("data", "SHA-384", "key", false, false),
        Err(Error::UnsupportedAlgorithm("SHA-384".to_owned()))
    );
    assert_eq!(
        hmac::hmac("Hi There", "md5", &"0b".repeat(16), false, true),
        Err(Error::UnsupportedAlgorithm("md5".to_owned()))
    );
    assert_eq!(hmac::hmac("data", "MD4", "", false, false), Err(Error::Key));
    for algorithm in Algorithm::ALL {
        assert!(matches!(algorithm.digest("abc", true), Err(Error::InputFormat(_))));
        assert!(matches!(algorithm.digest("xy", true), Err(Error::InputFormat(_))));
    }
}
