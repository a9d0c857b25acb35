//! Hash engine traits for rsblake2.
//!
//! This crate provides the capability contract every hash engine in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Digest`] | Streaming hash with non-mutating finalize and fallible reset |
//!
//! # Error Types
//!
//! - [`ResetError`] - Reset requested on an engine that cannot rebuild its initial state
//! - [`VerificationError`] - Opaque MAC verification failure
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::{ResetError, VerificationError};
