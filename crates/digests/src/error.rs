//! crates/digests/src/error.rs
//!
//! Error types for the digest engine.

use thiserror::Error;

use crate::algorithm::HashAlgorithm;

/// Errors raised while setting up a digest computation.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DigestError {
    /// The algorithm is [`HashAlgorithm::Unknown`] or the compiled backend
    /// does not provide it.
    #[error("hash algorithm '{algorithm}' is not supported by the compiled digest backend")]
    UnsupportedAlgorithm {
        /// Algorithm the caller requested.
        algorithm: HashAlgorithm,
    },
    /// The backend engine rejected the algorithm while creating a context.
    #[error("digest backend failed to initialize a '{algorithm}' context")]
    BackendInit {
        /// Algorithm whose context could not be created.
        algorithm: HashAlgorithm,
    },
}
