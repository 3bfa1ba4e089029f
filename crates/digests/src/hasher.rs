//! crates/digests/src/hasher.rs
//!
//! Streaming and one-shot digest computation.

use core::fmt;

use crate::algorithm::HashAlgorithm;
use crate::backend::Engine;
use crate::error::DigestError;
use crate::output::DigestOutput;

/// Streaming digest context.
///
/// Created by [`Hasher::new`], fed with [`update`](Self::update) and
/// consumed by [`finalize`](Self::finalize). The concatenation of all
/// `update` calls' bytes, in call order, is the hashed message: splitting
/// the input differently never changes the digest.
///
/// A handle owns its scratch state exclusively and is not meant for shared
/// mutation; hashing in parallel means one handle per thread.
pub struct Hasher {
    engine: Engine,
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Opens a streaming digest context for `algorithm`.
    ///
    /// # Errors
    ///
    /// [`DigestError::UnsupportedAlgorithm`] for
    /// [`HashAlgorithm::Unknown`] or an algorithm the compiled backend
    /// lacks, [`DigestError::BackendInit`] when the engine rejects the
    /// algorithm at runtime. No scratch state survives a failed init.
    pub fn new(algorithm: HashAlgorithm) -> Result<Self, DigestError> {
        let engine = Engine::init(algorithm)?;
        Ok(Self { engine, algorithm })
    }

    /// Algorithm this context hashes with.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Absorbs the next `data` bytes into the digest state.
    ///
    /// May be called any number of times, including zero.
    pub fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
    }

    /// Completes the computation and returns the digest.
    ///
    /// Consumes the handle; the output length equals
    /// [`HashAlgorithm::digest_len`].
    #[must_use]
    pub fn finalize(self) -> DigestOutput {
        self.engine.finalize()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Computes the digest of `data` in a single call.
///
/// Equivalent to [`Hasher::new`] followed by one
/// [`update`](Hasher::update) and [`finalize`](Hasher::finalize); both
/// paths produce byte-identical output for the same input.
///
/// # Errors
///
/// Same failure modes as [`Hasher::new`].
pub fn hash_fast(
    algorithm: HashAlgorithm,
    data: &[u8],
) -> Result<DigestOutput, DigestError> {
    let mut hasher = Hasher::new(algorithm)?;
    hasher.update(data);
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Empty-input and "abc" vectors from the defining documents of each
    // family (RFC 1319, RFC 1321, the RIPEMD-160 paper, FIPS 180-4).
    const VECTORS: &[(HashAlgorithm, &str, &str)] = &[
        (
            HashAlgorithm::Md2,
            "8350e5a3e24c153df2275c9f80692773",
            "da853b0d3f88d99b30283a69e6ded6bb",
        ),
        (
            HashAlgorithm::Md5,
            "d41d8cd98f00b204e9800998ecf8427e",
            "900150983cd24fb0d6963f7d28e17f72",
        ),
        (
            HashAlgorithm::Rmd160,
            "9c1185a5c5e9fc54612808977ee8f548b2258d31",
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
        ),
        (
            HashAlgorithm::Sha1,
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        ),
        (
            HashAlgorithm::Sha224,
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        ),
        (
            HashAlgorithm::Sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            HashAlgorithm::Sha384,
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            HashAlgorithm::Sha512,
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    ];

    #[test]
    fn one_shot_matches_published_vectors() {
        for &(algorithm, empty_hex, abc_hex) in VECTORS {
            let empty = hash_fast(algorithm, b"").expect("supported algorithm");
            assert_eq!(empty.to_hex(), empty_hex, "{algorithm} of empty input");

            let abc = hash_fast(algorithm, b"abc").expect("supported algorithm");
            assert_eq!(abc.to_hex(), abc_hex, "{algorithm} of \"abc\"");
        }
    }

    #[test]
    fn digest_length_matches_output() {
        for &(algorithm, _, _) in VECTORS {
            let output = hash_fast(algorithm, b"abc").expect("supported algorithm");
            assert_eq!(output.len(), algorithm.digest_len());
        }
    }

    #[test]
    fn streaming_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";

        for &(algorithm, _, _) in VECTORS {
            let one_shot = hash_fast(algorithm, data).expect("supported algorithm");

            let mut hasher = Hasher::new(algorithm).expect("supported algorithm");
            for chunk in data.chunks(7) {
                hasher.update(chunk);
            }
            assert_eq!(hasher.finalize(), one_shot, "{algorithm} chunked at 7");
        }
    }

    #[test]
    fn zero_updates_equal_empty_input() {
        for &(algorithm, empty_hex, _) in VECTORS {
            let hasher = Hasher::new(algorithm).expect("supported algorithm");
            assert_eq!(hasher.finalize().to_hex(), empty_hex);
        }
    }

    #[test]
    fn unknown_algorithm_fails_before_allocation() {
        let err = Hasher::new(HashAlgorithm::Unknown).expect_err("unknown must fail");
        assert_eq!(
            err,
            DigestError::UnsupportedAlgorithm {
                algorithm: HashAlgorithm::Unknown,
            }
        );

        let err = hash_fast(HashAlgorithm::Unknown, b"data").expect_err("unknown must fail");
        assert!(matches!(err, DigestError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn handles_are_independent() {
        let mut first = Hasher::new(HashAlgorithm::Sha256).expect("supported algorithm");
        let mut second = Hasher::new(HashAlgorithm::Sha256).expect("supported algorithm");

        first.update(b"one");
        second.update(b"two");

        assert_ne!(first.finalize(), second.finalize());
    }
}
