//! BLAKE2b (RFC 7693).
//!
//! Portable, `no_std`, pure Rust implementation with 1–64 byte digests,
//! keyed (MAC) mode, salt, and personalization. Sequential mode only.
//!
//! # Example
//!
//! ```rust
//! use hashes::crypto::blake2b::{Blake2b, blake2b};
//! use traits::Digest as _;
//!
//! let mut h = Blake2b::default();
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(h.finalize(), blake2b(b"hello world"));
//!
//! let mac = Blake2b::with_config(Some(b"key".as_slice()), None, Some(b"personal".as_slice()), 32)?;
//! assert_eq!(mac.finalize().len(), 32);
//! # Ok::<(), hashes::crypto::blake2b::Error>(())
//! ```

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by BLOCK_LEN

use core::fmt;

use traits::{Digest, ResetError, VerificationError};

use self::{
  kernels::{CompressFn, compress_fn},
  params::ParameterBlock,
};
use crate::util::ct_eq;

pub mod config;
mod error;
pub mod kernels;
mod params;

pub use config::{Blake2bConfig, Blake2bForce};
pub use error::Error;
pub use kernels::Blake2bKernelId;
pub use params::Params;

/// Block size in bytes.
pub const BLOCK_LEN: usize = 128;
/// Largest digest length in bytes.
pub const MAX_OUTPUT_LEN: usize = 64;
/// Largest key length in bytes.
pub const MAX_KEY_LEN: usize = 64;
/// Salt length in bytes.
pub const SALT_LEN: usize = 16;
/// Personalization length in bytes.
pub const PERSONAL_LEN: usize = 16;

/// Chaining value, counters, flags, and the pending block.
///
/// `offset` stays within `0..=BLOCK_LEN`. A full buffer is only compressed
/// once more input arrives, so the last block always reaches finalization.
#[derive(Clone)]
struct State {
  h: [u64; 8],
  t0: u64,
  t1: u64,
  f0: u64,
  f1: u64,
  buf: [u8; BLOCK_LEN],
  offset: usize,
}

impl State {
  #[inline]
  const fn new(h: [u64; 8]) -> Self {
    Self {
      h,
      t0: 0,
      t1: 0,
      f0: 0,
      f1: 0,
      buf: [0u8; BLOCK_LEN],
      offset: 0,
    }
  }

  /// Add `n` to the 128-bit byte counter `(t0, t1)`.
  #[inline(always)]
  fn increment_counter(&mut self, n: u64) {
    let (t0, carry) = self.t0.overflowing_add(n);
    self.t0 = t0;
    self.t1 = self.t1.wrapping_add(u64::from(carry));
  }

  #[inline(always)]
  fn compress_block(&mut self, block: &[u8; BLOCK_LEN], compress: CompressFn) {
    self.increment_counter(BLOCK_LEN as u64);
    compress(&mut self.h, block, [self.t0, self.t1], [self.f0, self.f1]);
  }

  fn absorb(&mut self, mut data: &[u8], compress: CompressFn) -> usize {
    let consumed = data.len();
    loop {
      // Whole blocks straight from the input, always leaving at least one
      // byte behind for the buffer.
      while self.offset == 0 && data.len() > BLOCK_LEN {
        let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() else {
          break;
        };
        self.compress_block(block, compress);
        data = rest;
      }

      let free = BLOCK_LEN - self.offset;
      if data.len() <= free {
        let end = self.offset + data.len();
        self.buf[self.offset..end].copy_from_slice(data);
        self.offset = end;
        return consumed;
      }

      let (head, rest) = data.split_at(free);
      self.buf[self.offset..].copy_from_slice(head);
      let block = self.buf;
      self.compress_block(&block, compress);
      self.offset = 0;
      data = rest;
    }
  }

  /// Compress the pending bytes as the last block. Call on a snapshot only.
  fn finalize(&mut self, compress: CompressFn) -> Result<(), Error> {
    if self.f0 != 0 {
      return Err(Error::DoubleFinalize);
    }
    self.buf[self.offset..].fill(0);
    self.increment_counter(self.offset as u64);
    self.f0 = u64::MAX;
    compress(&mut self.h, &self.buf, [self.t0, self.t1], [self.f0, self.f1]);
    Ok(())
  }

  fn output_bytes(&self) -> [u8; MAX_OUTPUT_LEN] {
    let mut out = [0u8; MAX_OUTPUT_LEN];
    let (chunks, _) = out.as_chunks_mut::<8>();
    for (chunk, word) in chunks.iter_mut().zip(self.h) {
      *chunk = word.to_le_bytes();
    }
    out
  }
}

/// A BLAKE2b digest of 1–64 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake2bHash {
  bytes: [u8; MAX_OUTPUT_LEN],
  len: u8,
}

impl Blake2bHash {
  /// Digest bytes, exactly the configured output length.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..usize::from(self.len)]
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Always `false`: digests are at least one byte.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl AsRef<[u8]> for Blake2bHash {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::LowerHex for Blake2bHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Blake2bHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Blake2bHash({self:x})")
  }
}

/// Streaming BLAKE2b hasher.
///
/// Finalizing never mutates the hasher: [`Digest::finalize`] works on a copy,
/// so it may be called repeatedly and updates may continue afterwards.
#[derive(Clone)]
pub struct Blake2b {
  state: State,
  initial_h: [u64; 8],
  output_size: u8,
  keyed: bool,
  kernel: Blake2bKernelId,
  compress: CompressFn,
}

impl Blake2b {
  /// Unkeyed hasher producing `output_size` bytes.
  pub fn new(output_size: usize) -> Result<Self, Error> {
    Params::new().hash_length(output_size).build()
  }

  /// Keyed (MAC) hasher producing `output_size` bytes.
  pub fn new_keyed(key: &[u8], output_size: usize) -> Result<Self, Error> {
    Params::new().hash_length(output_size).key(key).build()
  }

  /// Hasher with every optional input. `None` and an empty slice are equivalent.
  pub fn with_config(
    key: Option<&[u8]>,
    salt: Option<&[u8]>,
    personalization: Option<&[u8]>,
    output_size: usize,
  ) -> Result<Self, Error> {
    Params::new()
      .hash_length(output_size)
      .key(key.unwrap_or_default())
      .salt(salt.unwrap_or_default())
      .personal(personalization.unwrap_or_default())
      .build()
  }

  pub(crate) fn from_params(params: &Params<'_>) -> Result<Self, Error> {
    let block = params.parameter_block()?;
    let kernel = params
      .requested_kernel()
      .unwrap_or_else(|| config::get().effective_kernel);
    let key = params.key_bytes();
    let mut hasher = Self::from_block(&block, kernel, !key.is_empty());

    if !key.is_empty() {
      let mut key_block = [0u8; BLOCK_LEN];
      key_block[..key.len()].copy_from_slice(key);
      hasher.state.absorb(&key_block, hasher.compress);
    }
    Ok(hasher)
  }

  fn from_block(block: &ParameterBlock, kernel: Blake2bKernelId, keyed: bool) -> Self {
    let h = block.initial_state();
    Self {
      state: State::new(h),
      initial_h: h,
      output_size: block.digest_size(),
      keyed,
      kernel,
      compress: compress_fn(kernel),
    }
  }

  /// BLAKE2b-512 of `data` in one shot.
  #[must_use]
  pub fn digest(data: &[u8]) -> Blake2bHash {
    let mut h = Self::default();
    h.update(data);
    h.finalize()
  }

  /// Whether this hasher was primed with a key.
  #[inline]
  #[must_use]
  pub const fn is_keyed(&self) -> bool {
    self.keyed
  }

  /// Name of the compression kernel in use.
  #[inline]
  #[must_use]
  pub const fn kernel_name(&self) -> &'static str {
    self.kernel.as_str()
  }

  /// Finalize a copy of the state, reporting a corrupted snapshot instead of hashing it.
  pub fn try_finalize(&self) -> Result<Blake2bHash, Error> {
    let mut snapshot = self.state.clone();
    snapshot.finalize(self.compress)?;
    Ok(Blake2bHash {
      bytes: snapshot.output_bytes(),
      len: self.output_size,
    })
  }

  /// Compare the current digest with `expected` without early exit.
  pub fn verify(&self, expected: &[u8]) -> Result<(), VerificationError> {
    if ct_eq(self.finalize().as_bytes(), expected) {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

impl Default for Blake2b {
  /// Unkeyed BLAKE2b-512.
  fn default() -> Self {
    let block = ParameterBlock::sequential(MAX_OUTPUT_LEN as u8, 0, &[], &[]);
    Self::from_block(&block, config::get().effective_kernel, false)
  }
}

impl Digest for Blake2b {
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = Blake2bHash;

  #[inline]
  fn output_size(&self) -> usize {
    usize::from(self.output_size)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> usize {
    self.state.absorb(data, self.compress)
  }

  fn finalize(&self) -> Blake2bHash {
    match self.try_finalize() {
      Ok(hash) => hash,
      // The live state never carries the last-block flag; only snapshots do.
      Err(e) => unreachable!("{e}"),
    }
  }

  fn reset(&mut self) -> Result<(), ResetError> {
    if self.keyed {
      return Err(ResetError::new());
    }
    self.state = State::new(self.initial_h);
    Ok(())
  }
}

impl fmt::Debug for Blake2b {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2b")
      .field("output_size", &self.output_size)
      .field("keyed", &self.keyed)
      .field("kernel", &self.kernel.as_str())
      .field("t0", &self.state.t0)
      .field("t1", &self.state.t1)
      .field("buffered", &self.state.offset)
      .finish_non_exhaustive()
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Blake2b {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(self.update(buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// BLAKE2b-512 of `data`.
#[inline]
#[must_use]
pub fn blake2b(data: &[u8]) -> Blake2bHash {
  Blake2b::digest(data)
}
