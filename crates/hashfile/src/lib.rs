//! Whole- and partial-file digest computation for download verification.
//!
//! After a transfer completes, the download engine resolves the expected
//! checksum's algorithm name and hashes the file on disk, comparing the
//! returned hex digest against the value from a Metalink manifest or
//! checksum header. [`hash_file`] treats an unopenable target as "nothing
//! to hash yet" and returns an empty string, so checksumming a file that
//! has not been downloaded does not abort the caller's verification flow;
//! the descriptor-level [`hash_file_range`] reports hard errors instead.
//!
//! File contents are memory-mapped where the platform supports it, with a
//! transparent fallback to buffered 64 KiB reads. Both paths produce
//! identical digests for identical ranges.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod hash;
mod source;

pub use error::HashFileError;
pub use hash::{hash_file, hash_file_offset, hash_file_range};
