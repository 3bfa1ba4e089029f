//! crates/digests/src/backend/rustcrypto.rs
//!
//! Pure-Rust digest engine built on the RustCrypto `digest` 0.10 family.

use digest::Digest;
use md2::Md2;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::HashAlgorithm;
use crate::error::DigestError;
use crate::output::DigestOutput;

/// Streaming digest state for the pure-Rust engine.
///
/// The variant is chosen once at context creation and never changes for the
/// lifetime of the handle.
pub(crate) enum Engine {
    Md2(Md2),
    Md5(Md5),
    Rmd160(Ripemd160),
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl Engine {
    pub(crate) fn init(algorithm: HashAlgorithm) -> Result<Self, DigestError> {
        match algorithm {
            HashAlgorithm::Unknown => Err(DigestError::UnsupportedAlgorithm { algorithm }),
            HashAlgorithm::Md2 => Ok(Self::Md2(Md2::new())),
            HashAlgorithm::Md5 => Ok(Self::Md5(Md5::new())),
            HashAlgorithm::Rmd160 => Ok(Self::Rmd160(Ripemd160::new())),
            HashAlgorithm::Sha1 => Ok(Self::Sha1(Sha1::new())),
            HashAlgorithm::Sha224 => Ok(Self::Sha224(Sha224::new())),
            HashAlgorithm::Sha256 => Ok(Self::Sha256(Sha256::new())),
            HashAlgorithm::Sha384 => Ok(Self::Sha384(Sha384::new())),
            HashAlgorithm::Sha512 => Ok(Self::Sha512(Sha512::new())),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md2(state) => state.update(data),
            Self::Md5(state) => state.update(data),
            Self::Rmd160(state) => state.update(data),
            Self::Sha1(state) => state.update(data),
            Self::Sha224(state) => state.update(data),
            Self::Sha256(state) => state.update(data),
            Self::Sha384(state) => state.update(data),
            Self::Sha512(state) => state.update(data),
        }
    }

    pub(crate) fn finalize(self) -> DigestOutput {
        match self {
            Self::Md2(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Md5(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Rmd160(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Sha1(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Sha224(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Sha256(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Sha384(state) => DigestOutput::new(state.finalize().as_slice()),
            Self::Sha512(state) => DigestOutput::new(state.finalize().as_slice()),
        }
    }
}

/// Digest widths of the pure-Rust engine. Every algorithm in the
/// enumeration is compiled in, so only `Unknown` reports zero.
pub(crate) fn digest_len(algorithm: HashAlgorithm) -> usize {
    match algorithm {
        HashAlgorithm::Unknown => 0,
        HashAlgorithm::Md2 | HashAlgorithm::Md5 => 16,
        HashAlgorithm::Rmd160 | HashAlgorithm::Sha1 => 20,
        HashAlgorithm::Sha224 => 28,
        HashAlgorithm::Sha256 => 32,
        HashAlgorithm::Sha384 => 48,
        HashAlgorithm::Sha512 => 64,
    }
}
