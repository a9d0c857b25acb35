//! Pure Rust BLAKE2b (RFC 7693).
//!
//! `rsblake2` provides a streaming BLAKE2b hasher with 1–64 byte digests and
//! optional key, salt, and personalization. Zero dependencies and `no_std`
//! compatible.
//!
//! # Quick Start
//!
//! ```
//! use rsblake2::{Blake2b, Digest, blake2b};
//!
//! // One-shot computation
//! let hash = blake2b(b"hello world");
//! assert_eq!(hash.len(), 64);
//!
//! // Streaming computation
//! let mut hasher = Blake2b::default();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), hash);
//! ```
//!
//! # Keyed hashing
//!
//! ```
//! use rsblake2::{Digest, Params};
//!
//! let mut mac = Params::new().hash_length(32).key(b"secret").build()?;
//! mac.update(b"message");
//! let tag = mac.finalize();
//! assert!(mac.verify(tag.as_bytes()).is_ok());
//!
//! // The key is gone after construction, so a keyed hasher cannot be reset.
//! assert!(mac.reset().is_err());
//! # Ok::<(), rsblake2::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters and the `RSBLAKE2_BLAKE2B_FORCE` override |
//! | `alloc` | Yes | `Digest::sum` (implied by `std`) |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsblake2 = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::crypto::blake2b::{
  BLOCK_LEN, Blake2b, Blake2bConfig, Blake2bForce, Blake2bHash, Blake2bKernelId, Error, MAX_KEY_LEN, MAX_OUTPUT_LEN,
  PERSONAL_LEN, Params, SALT_LEN, blake2b, config,
};
#[cfg(feature = "std")]
pub use traits::io::{DigestReader, DigestWriter};
pub use traits::{Digest, ResetError, VerificationError};
