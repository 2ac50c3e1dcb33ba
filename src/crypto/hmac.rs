//! HMAC as described in RFC 2104, generic over the [`Hasher`]s in this crate.
use std::marker::PhantomData;

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{Algorithm, Hasher};
use crate::encoding::{to_bytes, to_hex};
use crate::error::{Error, Result};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

pub struct Hmac<H: Hasher> {
    ipad_key: Vec<u8>,
    opad_key: Vec<u8>,
    _h: PhantomData<H>,
}

impl<H: Hasher> Hmac<H> {
    /// Derive the inner and outer padded keys, failing on an empty key.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self> {
        let mut ipad_key = Self::pad_key(key.as_ref())?;
        let mut opad_key = ipad_key.clone();

        for (ik, ok) in ipad_key.iter_mut().zip(opad_key.iter_mut()) {
            *ik ^= IPAD;
            *ok ^= OPAD;
        }

        Ok(Self {
            ipad_key,
            opad_key,
            _h: PhantomData,
        })
    }

    /// Bring the key to exactly one block, hashing it down first if it is too long.
    fn pad_key(k: &[u8]) -> Result<Vec<u8>> {
        if k.is_empty() {
            return Err(Error::Key);
        }

        let mut key = if k.len() > H::BLOCK_SIZE {
            tracing::debug!(
                algorithm = H::NAME,
                key_len = k.len(),
                "hashing down long hmac key"
            );
            H::digest_bytes(k)?.as_ref().to_vec()
        } else {
            k.to_vec()
        };
        key.resize(H::BLOCK_SIZE, 0);
        Ok(key)
    }

    pub fn mac(&self, data: impl AsRef<[u8]>) -> Result<H::Digest> {
        let data = data.as_ref();

        let mut inner = Zeroizing::new(Vec::with_capacity(self.ipad_key.len() + data.len()));
        inner.extend_from_slice(&self.ipad_key);
        inner.extend_from_slice(data);
        let ihash = H::digest_bytes(inner.as_slice())?;

        let mut outer = Zeroizing::new(Vec::with_capacity(
            self.opad_key.len() + ihash.as_ref().len(),
        ));
        outer.extend_from_slice(&self.opad_key);
        outer.extend_from_slice(ihash.as_ref());
        H::digest_bytes(outer.as_slice())
    }
}

impl<H: Hasher> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.ipad_key.zeroize();
        self.opad_key.zeroize();
    }
}

/// HMAC of a text or hex message, with the hash function picked by name.
///
/// ```
/// use crydi::crypto::hmac::hmac;
/// let mac = hmac("Hi There", "MD5", "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b", false, true).unwrap();
/// assert_eq!(mac, "9294727a3638bb1c13f48ef8158bfc9d");
/// ```
pub fn hmac(
    input: &str,
    algorithm_name: &str,
    key: &str,
    is_hex_input: bool,
    is_hex_key: bool,
) -> Result<String> {
    if key.is_empty() {
        return Err(Error::Key);
    }
    let algorithm: Algorithm = algorithm_name.parse()?;

    let key = Zeroizing::new(to_bytes(key, is_hex_key)?);
    let message = to_bytes(input, is_hex_input)?;
    let mac = algorithm.hmac(key.as_slice(), message)?;

    Ok(to_hex(mac))
}
