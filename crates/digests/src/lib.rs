#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod backend;
mod error;
mod hasher;
mod output;

pub use algorithm::HashAlgorithm;
pub use error::DigestError;
pub use hasher::{Hasher, hash_fast};
pub use output::{DigestOutput, MAX_DIGEST_LEN};
