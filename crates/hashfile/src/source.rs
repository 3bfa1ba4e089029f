//! crates/hashfile/src/source.rs
//!
//! Byte sources feeding the digest driver.
//!
//! The mapped and buffered paths differ only in how bytes are produced;
//! both implement [`ByteSource`] so the digest-driving logic exists once.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use tracing::error;

use digests::{DigestOutput, HashAlgorithm, Hasher};

use crate::error::HashFileError;

/// Read size for the buffered fallback path.
pub(crate) const CHUNK_SIZE: usize = 64 * 1024;

/// A source of byte chunks with a fixed overall budget.
pub(crate) trait ByteSource {
    /// Produces the next chunk, `None` once the source is drained.
    fn next_chunk(&mut self) -> Result<Option<&[u8]>, HashFileError>;
}

/// Drives a streaming digest over everything `source` yields.
pub(crate) fn digest_source<S: ByteSource>(
    algorithm: HashAlgorithm,
    source: &mut S,
) -> Result<DigestOutput, HashFileError> {
    let mut hasher = Hasher::new(algorithm)?;
    while let Some(chunk) = source.next_chunk()? {
        hasher.update(chunk);
    }
    Ok(hasher.finalize())
}

/// Memory-mapped source yielding the requested range in a single chunk.
#[cfg(unix)]
pub(crate) struct MappedSource {
    map: memmap2::Mmap,
    drained: bool,
}

#[cfg(unix)]
impl MappedSource {
    /// Maps `[offset, offset + length)` of `file` read-only.
    ///
    /// Returns `None` when the range cannot be mapped — zero length, a
    /// range wider than the address space, or the kernel refusing the
    /// mapping — and the caller falls back to buffered reads.
    #[allow(unsafe_code)]
    pub(crate) fn new(file: &File, offset: u64, length: u64) -> Option<Self> {
        let length = usize::try_from(length).ok()?;
        if length == 0 {
            return None;
        }

        // SAFETY: the mapping is private and read-only over a descriptor
        // this crate never writes through. Concurrent truncation by another
        // process is the same hazard the buffered path has with a changing
        // file; the mapping itself stays valid for the requested region.
        let map = unsafe {
            memmap2::MmapOptions::new()
                .offset(offset)
                .len(length)
                .map(file)
        }
        .ok()?;

        Some(Self {
            map,
            drained: false,
        })
    }
}

#[cfg(unix)]
impl ByteSource for MappedSource {
    fn next_chunk(&mut self) -> Result<Option<&[u8]>, HashFileError> {
        if self.drained {
            return Ok(None);
        }
        self.drained = true;
        Ok(Some(&self.map[..]))
    }
}

/// Buffered fallback source reading fixed-size chunks from the file.
pub(crate) struct ChunkedSource<'a> {
    file: &'a File,
    remaining: u64,
    buf: Box<[u8]>,
}

impl<'a> ChunkedSource<'a> {
    /// Positions `file` at `offset` with a read budget of `length` bytes.
    pub(crate) fn new(
        file: &'a File,
        offset: u64,
        length: u64,
    ) -> Result<Self, HashFileError> {
        let mut pos = file;
        pos.seek(SeekFrom::Start(offset))
            .map_err(HashFileError::Read)?;

        Ok(Self {
            file,
            remaining: length,
            buf: vec![0_u8; CHUNK_SIZE].into_boxed_slice(),
        })
    }
}

impl ByteSource for ChunkedSource<'_> {
    fn next_chunk(&mut self) -> Result<Option<&[u8]>, HashFileError> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let want = if self.remaining < CHUNK_SIZE as u64 {
            self.remaining as usize
        } else {
            CHUNK_SIZE
        };

        let read = match self.file.read(&mut self.buf[..want]) {
            Ok(read) => read,
            Err(err) => {
                error!(remaining = self.remaining, "failed to read file contents");
                return Err(HashFileError::Read(err));
            }
        };

        if read == 0 {
            // EOF before the budget is exhausted: hash what was readable.
            self.remaining = 0;
            return Ok(None);
        }

        // Short reads are normal; only the byte count actually read is fed
        // to the digest and charged against the budget.
        self.remaining -= read as u64;
        Ok(Some(&self.buf[..read]))
    }
}
