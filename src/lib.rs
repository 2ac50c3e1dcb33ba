//! MD4, MD5, SHA-1 and SHA-256 written from scratch, plus HMAC over any of them.
//!
//! ```
//! use crydi::crypto::{md5, sha256, hmac};
//!
//! assert_eq!(md5::digest("abc", false).unwrap(), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(
//!     sha256::digest("616263", true).unwrap(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! assert!(hmac::hmac("data", "SHA-3", "key", false, false).is_err());
//! ```
//!
//! MD4 and MD5 are here for interoperability with legacy formats only.

pub mod crypto;
pub mod encoding;
mod error;
mod util;

pub use crypto::{Algorithm, Hasher};
pub use error::{Error, Result, SizeError};
