//! BLAKE2b hashing engine.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - BLAKE2b streaming hasher, parameter builder, and kernels.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod util;

pub use traits::Digest;
