#![no_main]

//! Fuzz target for algorithm name resolution.
//!
//! Name lookup must terminate without panicking for arbitrary input,
//! including non-UTF8 byte sequences, and anything it cannot resolve must
//! land on `Unknown` with a zero digest length.

use digests::{HashAlgorithm, Hasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let name = String::from_utf8_lossy(data);
    let algorithm = HashAlgorithm::from_name(&name);

    if algorithm.is_unknown() {
        assert_eq!(algorithm.digest_len(), 0);
        assert!(Hasher::new(algorithm).is_err());
    } else {
        assert!(algorithm.digest_len() > 0);
        let mut hasher = Hasher::new(algorithm).expect("resolved algorithm");
        hasher.update(data);
        assert_eq!(hasher.finalize().len(), algorithm.digest_len());
    }
});
