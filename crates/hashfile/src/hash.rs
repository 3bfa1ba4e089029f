//! crates/hashfile/src/hash.rs
//!
//! Whole- and partial-file digest operations.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use digests::HashAlgorithm;

use crate::error::HashFileError;
#[cfg(unix)]
use crate::source::MappedSource;
use crate::source::{ChunkedSource, digest_source};

/// Hashes `[offset, offset + length)` of an open file and returns the
/// lowercase hex digest.
///
/// `name` is resolved through [`HashAlgorithm::from_name`]. A `length` of
/// zero means "to the end of the file". The range is validated against the
/// file's current size; reaching past the end is a
/// [`HashFileError::RangeOutOfBounds`] failure, never a silent clamp.
///
/// The contents are memory-mapped when the platform allows it, with a
/// transparent fallback to buffered 64 KiB reads; both paths produce
/// identical digests. The file's read position may move on the fallback
/// path.
///
/// # Errors
///
/// [`HashFileError::UnknownAlgorithm`] for an unresolvable name,
/// [`HashFileError::Stat`] when the size query fails,
/// [`HashFileError::RangeOutOfBounds`] for a range past end-of-file and
/// [`HashFileError::Read`] when the fallback path hits an I/O error. A
/// failure never yields a partial digest.
pub fn hash_file_range(
    name: &str,
    file: &File,
    offset: u64,
    length: u64,
) -> Result<String, HashFileError> {
    let algorithm = HashAlgorithm::from_name(name);
    if algorithm.is_unknown() {
        return Err(HashFileError::UnknownAlgorithm {
            name: name.to_owned(),
        });
    }

    let file_size = file.metadata().map_err(HashFileError::Stat)?.len();

    let length = if length == 0 { file_size } else { length };

    if offset.checked_add(length).is_none_or(|end| end > file_size) {
        return Err(HashFileError::RangeOutOfBounds {
            offset,
            length,
            file_size,
        });
    }

    debug!(%algorithm, offset, length, "hashing file range");

    #[cfg(unix)]
    if let Some(mut source) = MappedSource::new(file, offset, length) {
        let digest = digest_source(algorithm, &mut source)?;
        return Ok(digest.to_hex());
    }

    let mut source = ChunkedSource::new(file, offset, length)?;
    let digest = digest_source(algorithm, &mut source)?;
    Ok(digest.to_hex())
}

/// Hashes a byte range of the file at `path`, opening it read-only.
///
/// A path that cannot be opened is "nothing to hash": the result is
/// `Ok` with an empty string rather than an error, so checksumming a file
/// that has not been downloaded yet does not abort the caller's
/// verification flow. The descriptor is released on every exit path.
///
/// # Errors
///
/// Same failure modes as [`hash_file_range`], except for the open failure
/// described above.
pub fn hash_file_offset(
    name: &str,
    path: impl AsRef<Path>,
    offset: u64,
    length: u64,
) -> Result<String, HashFileError> {
    let path = path.as_ref();

    let Ok(file) = File::open(path) else {
        debug!(path = %path.display(), "target not openable, nothing to hash");
        return Ok(String::new());
    };

    hash_file_range(name, &file, offset, length)
}

/// Hashes the entire file at `path` and returns the lowercase hex digest.
///
/// Equivalent to [`hash_file_offset`] with offset and length zero,
/// including the empty-string result for an unopenable path.
///
/// # Errors
///
/// Same failure modes as [`hash_file_offset`].
pub fn hash_file(name: &str, path: impl AsRef<Path>) -> Result<String, HashFileError> {
    hash_file_offset(name, path, 0, 0)
}
