//! crates/digests/src/backend/openssl.rs
//!
//! OpenSSL-backed digest engine, selected by the `openssl` feature.
//!
//! Legacy digests (MD2, RIPEMD-160) are resolved through their NIDs: an
//! OpenSSL build that omits them makes the lookup fail, which surfaces as
//! `digest_len() == 0` and `UnsupportedAlgorithm` rather than a broken
//! context.

use openssl::hash::{Hasher as OpensslHasher, MessageDigest};
use openssl::nid::Nid;

use crate::algorithm::HashAlgorithm;
use crate::error::DigestError;
use crate::output::DigestOutput;

/// Streaming digest state for the OpenSSL engine.
pub(crate) struct Engine {
    hasher: OpensslHasher,
}

fn message_digest(algorithm: HashAlgorithm) -> Option<MessageDigest> {
    match algorithm {
        HashAlgorithm::Unknown => None,
        HashAlgorithm::Md2 => MessageDigest::from_nid(Nid::MD2),
        HashAlgorithm::Md5 => Some(MessageDigest::md5()),
        HashAlgorithm::Rmd160 => MessageDigest::from_nid(Nid::RIPEMD160),
        HashAlgorithm::Sha1 => Some(MessageDigest::sha1()),
        HashAlgorithm::Sha224 => Some(MessageDigest::sha224()),
        HashAlgorithm::Sha256 => Some(MessageDigest::sha256()),
        HashAlgorithm::Sha384 => Some(MessageDigest::sha384()),
        HashAlgorithm::Sha512 => Some(MessageDigest::sha512()),
    }
}

impl Engine {
    pub(crate) fn init(algorithm: HashAlgorithm) -> Result<Self, DigestError> {
        let md = message_digest(algorithm)
            .ok_or(DigestError::UnsupportedAlgorithm { algorithm })?;
        let hasher =
            OpensslHasher::new(md).map_err(|_| DigestError::BackendInit { algorithm })?;
        Ok(Self { hasher })
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        self.hasher
            .update(data)
            .expect("OpenSSL digest update failed");
    }

    pub(crate) fn finalize(mut self) -> DigestOutput {
        let bytes = self
            .hasher
            .finish()
            .expect("OpenSSL digest finalisation failed");
        DigestOutput::new(bytes.as_ref())
    }
}

pub(crate) fn digest_len(algorithm: HashAlgorithm) -> usize {
    message_digest(algorithm).map_or(0, |md| md.size())
}
