//! crates/digests/src/backend.rs
//!
//! Compile-time selection of the digest backend engine.
//!
//! Exactly one engine is compiled in: the pure-Rust RustCrypto engine by
//! default, or the OpenSSL engine when the `openssl` feature is enabled.
//! Both modules export the same surface — an `Engine` with
//! `init`/`update`/`finalize` plus a `digest_len` lookup that reports zero
//! for algorithms the engine cannot provide.

#[cfg(feature = "openssl")]
#[path = "backend/openssl.rs"]
mod imp;

#[cfg(not(feature = "openssl"))]
#[path = "backend/rustcrypto.rs"]
mod imp;

pub(crate) use imp::{Engine, digest_len};
