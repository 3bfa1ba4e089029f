//! crates/hashfile/src/error.rs
//!
//! Error types for file hashing.

use std::io;

use digests::DigestError;
use thiserror::Error;

/// Errors raised while hashing file contents.
#[derive(Debug, Error)]
pub enum HashFileError {
    /// The algorithm name did not resolve to a supported algorithm.
    #[error("unknown hash type '{name}'")]
    UnknownAlgorithm {
        /// Name the caller supplied.
        name: String,
    },
    /// The digest engine refused the resolved algorithm.
    #[error(transparent)]
    Digest(#[from] DigestError),
    /// The file's size could not be queried before hashing.
    #[error("failed to query file size before hashing: {0}")]
    Stat(#[source] io::Error),
    /// The requested range reaches past the end of the file.
    #[error("hash range at offset {offset} with length {length} exceeds file size {file_size}")]
    RangeOutOfBounds {
        /// First byte of the requested range.
        offset: u64,
        /// Number of bytes requested.
        length: u64,
        /// File size at the time it was queried.
        file_size: u64,
    },
    /// Reading file contents failed partway through.
    #[error("failed to read file contents while hashing: {0}")]
    Read(#[source] io::Error),
}
