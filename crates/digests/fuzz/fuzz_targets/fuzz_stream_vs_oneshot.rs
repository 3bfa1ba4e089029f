#![no_main]

//! Fuzz target for the streaming digest path.
//!
//! Feeds arbitrary byte sequences (including empty input, embedded nulls
//! and buffer-boundary sizes) through both the streaming and one-shot
//! paths for every supported algorithm. The two must agree byte for byte,
//! and neither may panic or over-read.

use digests::{HashAlgorithm, Hasher, hash_fast};
use libfuzzer_sys::fuzz_target;

const ALGORITHMS: &[HashAlgorithm] = &[
    HashAlgorithm::Md2,
    HashAlgorithm::Md5,
    HashAlgorithm::Rmd160,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha224,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
];

fuzz_target!(|input: (Vec<u8>, usize)| {
    let (data, split) = input;
    let split = split % (data.len() + 1);

    for &algorithm in ALGORITHMS {
        let one_shot = hash_fast(algorithm, &data).expect("supported algorithm");
        assert_eq!(one_shot.len(), algorithm.digest_len());

        let mut hasher = Hasher::new(algorithm).expect("supported algorithm");
        hasher.update(&data[..split]);
        hasher.update(&data[split..]);
        let streamed = hasher.finalize();

        assert_eq!(one_shot, streamed);
        assert_eq!(one_shot.to_hex().len(), algorithm.digest_len() * 2);
    }
});
