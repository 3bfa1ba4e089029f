//! crates/digests/src/algorithm.rs
//!
//! Hash algorithm identifiers and name resolution.

use core::fmt;

use tracing::warn;

use crate::backend;

/// Hash algorithms understood by the digest engine.
///
/// [`Unknown`](Self::Unknown) is the name-resolution failure state: it never
/// maps to a usable engine and every digest operation on it fails.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HashAlgorithm {
    /// Name lookup failed, or no name was ever resolved.
    #[default]
    Unknown,
    /// MD2 (RFC 1319), still referenced by legacy manifests.
    Md2,
    /// MD5 (RFC 1321).
    Md5,
    /// RIPEMD-160.
    Rmd160,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

/// Recognized spellings, matched ASCII case-insensitively.
const NAME_TABLE: &[(&str, HashAlgorithm)] = &[
    ("sha-1", HashAlgorithm::Sha1),
    ("sha1", HashAlgorithm::Sha1),
    ("sha-224", HashAlgorithm::Sha224),
    ("sha224", HashAlgorithm::Sha224),
    ("sha-256", HashAlgorithm::Sha256),
    ("sha256", HashAlgorithm::Sha256),
    ("sha-384", HashAlgorithm::Sha384),
    ("sha384", HashAlgorithm::Sha384),
    ("sha-512", HashAlgorithm::Sha512),
    ("sha512", HashAlgorithm::Sha512),
    ("md5", HashAlgorithm::Md5),
    ("md2", HashAlgorithm::Md2),
    ("rmd160", HashAlgorithm::Rmd160),
];

impl HashAlgorithm {
    /// Resolves an algorithm name as it appears in checksum headers or
    /// Metalink manifests.
    ///
    /// Matching is ASCII case-insensitive and accepts both the hyphenated
    /// and plain spellings of the SHA family (`"sha-256"` / `"sha256"`).
    /// Empty or unrecognized names resolve to [`Self::Unknown`] and are
    /// logged with the offending name. Resolution performs no I/O.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        for (candidate, algorithm) in NAME_TABLE {
            if name.eq_ignore_ascii_case(candidate) {
                return *algorithm;
            }
        }

        warn!(name, "unknown hash type");
        Self::Unknown
    }

    /// Number of bytes in this algorithm's digest.
    ///
    /// Returns zero for [`Self::Unknown`] and for any algorithm the
    /// compiled backend does not provide. The value is fixed per algorithm
    /// for the lifetime of the process.
    #[must_use]
    pub fn digest_len(self) -> usize {
        backend::digest_len(self)
    }

    /// Canonical lowercase name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Md2 => "md2",
            Self::Md5 => "md5",
            Self::Rmd160 => "rmd160",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Returns `true` when name resolution failed.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_and_hyphenated_sha_spellings() {
        let pairs = [
            ("sha1", "sha-1", HashAlgorithm::Sha1),
            ("sha224", "sha-224", HashAlgorithm::Sha224),
            ("sha256", "sha-256", HashAlgorithm::Sha256),
            ("sha384", "sha-384", HashAlgorithm::Sha384),
            ("sha512", "sha-512", HashAlgorithm::Sha512),
        ];

        for (plain, hyphenated, expected) in pairs {
            assert_eq!(HashAlgorithm::from_name(plain), expected);
            assert_eq!(HashAlgorithm::from_name(hyphenated), expected);
        }
    }

    #[test]
    fn resolution_ignores_ascii_case() {
        assert_eq!(HashAlgorithm::from_name("MD5"), HashAlgorithm::Md5);
        assert_eq!(HashAlgorithm::from_name("Sha-256"), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::from_name("SHA512"), HashAlgorithm::Sha512);
        assert_eq!(HashAlgorithm::from_name("RMD160"), HashAlgorithm::Rmd160);
        assert_eq!(HashAlgorithm::from_name("mD2"), HashAlgorithm::Md2);
    }

    #[test]
    fn unrecognized_names_resolve_to_unknown() {
        assert_eq!(HashAlgorithm::from_name(""), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::from_name("sha3"), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::from_name("md4"), HashAlgorithm::Unknown);
        assert_eq!(
            HashAlgorithm::from_name("sha--256"),
            HashAlgorithm::Unknown
        );
    }

    #[test]
    fn unknown_has_zero_digest_len() {
        assert_eq!(HashAlgorithm::Unknown.digest_len(), 0);
        assert!(HashAlgorithm::Unknown.is_unknown());
    }

    #[test]
    fn display_matches_canonical_name() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
        assert_eq!(HashAlgorithm::Rmd160.to_string(), "rmd160");
        assert_eq!(HashAlgorithm::Unknown.to_string(), "unknown");
    }
}
