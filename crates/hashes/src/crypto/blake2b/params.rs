//! BLAKE2b parameter block and configuration builder.

#![allow(clippy::indexing_slicing)] // Fixed parameter-block offsets

use core::fmt;

use super::{
  Blake2b, Error, MAX_KEY_LEN, MAX_OUTPUT_LEN, PERSONAL_LEN, SALT_LEN,
  kernels::{Blake2bKernelId, IV},
};

/// Serialized parameter block length in bytes.
pub(crate) const PARAM_LEN: usize = 64;

/// The 64-byte BLAKE2b parameter block, sequential mode only.
///
/// Tree-mode fields are carried so the layout is explicit, but they are
/// always the sequential constants: fanout and depth 1, everything else 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParameterBlock {
  digest_size: u8,
  key_length: u8,
  fanout: u8,
  depth: u8,
  leaf_length: u32,
  node_offset: u32,
  xof_length: u32,
  node_depth: u8,
  inner_length: u8,
  salt: [u8; SALT_LEN],
  personal: [u8; PERSONAL_LEN],
}

impl ParameterBlock {
  /// Sequential-mode block. Inputs must already be validated; salt and
  /// personalization are right-padded with zeros.
  pub(crate) fn sequential(digest_size: u8, key_length: u8, salt: &[u8], personal: &[u8]) -> Self {
    debug_assert!(salt.len() <= SALT_LEN && personal.len() <= PERSONAL_LEN);
    let mut padded_salt = [0u8; SALT_LEN];
    for (dst, src) in padded_salt.iter_mut().zip(salt) {
      *dst = *src;
    }
    let mut padded_personal = [0u8; PERSONAL_LEN];
    for (dst, src) in padded_personal.iter_mut().zip(personal) {
      *dst = *src;
    }
    Self {
      digest_size,
      key_length,
      fanout: 1,
      depth: 1,
      leaf_length: 0,
      node_offset: 0,
      xof_length: 0,
      node_depth: 0,
      inner_length: 0,
      salt: padded_salt,
      personal: padded_personal,
    }
  }

  #[inline]
  pub(crate) const fn digest_size(&self) -> u8 {
    self.digest_size
  }

  /// Pack into the fixed 64-byte layout.
  ///
  /// | Offset | Field |
  /// |--------|-------|
  /// | 0 | digest length |
  /// | 1 | key length |
  /// | 2 | fanout |
  /// | 3 | depth |
  /// | 4..8 | leaf length (LE) |
  /// | 8..12 | node offset (LE) |
  /// | 12..16 | XOF length (LE) |
  /// | 17 | node depth |
  /// | 18 | inner length |
  /// | 19..32 | reserved |
  /// | 32..48 | salt |
  /// | 48..64 | personalization |
  #[must_use]
  pub(crate) fn marshal(&self) -> [u8; PARAM_LEN] {
    let mut buf = [0u8; PARAM_LEN];
    buf[0] = self.digest_size;
    buf[1] = self.key_length;
    buf[2] = self.fanout;
    buf[3] = self.depth;
    buf[4..8].copy_from_slice(&self.leaf_length.to_le_bytes());
    buf[8..12].copy_from_slice(&self.node_offset.to_le_bytes());
    buf[12..16].copy_from_slice(&self.xof_length.to_le_bytes());
    buf[17] = self.node_depth;
    buf[18] = self.inner_length;
    buf[32..48].copy_from_slice(&self.salt);
    buf[48..64].copy_from_slice(&self.personal);
    buf
  }

  /// Initial chaining value: `IV[i] ^ LE64(block[8i..8i + 8])`.
  #[must_use]
  pub(crate) fn initial_state(&self) -> [u64; 8] {
    let bytes = self.marshal();
    let (words, _) = bytes.as_chunks::<8>();
    let mut h = IV;
    for (word, chunk) in h.iter_mut().zip(words) {
      *word ^= u64::from_le_bytes(*chunk);
    }
    h
  }
}

/// Builder for keyed, salted, or personalized BLAKE2b hashers.
///
/// Inputs are borrowed and only validated in [`build`](Self::build). The
/// resulting hasher copies what it needs; the caller may drop the key as soon
/// as `build` returns.
///
/// # Example
///
/// ```rust
/// use hashes::crypto::blake2b::Params;
/// use traits::Digest as _;
///
/// let mut mac = Params::new()
///   .hash_length(32)
///   .key(b"secret key")
///   .personal(b"app v1")
///   .build()?;
/// mac.update(b"message");
/// assert_eq!(mac.finalize().len(), 32);
/// # Ok::<(), hashes::crypto::blake2b::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Params<'a> {
  hash_length: usize,
  key: &'a [u8],
  salt: &'a [u8],
  personal: &'a [u8],
  kernel: Option<Blake2bKernelId>,
}

impl<'a> Params<'a> {
  /// Unkeyed BLAKE2b-512 defaults.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      hash_length: MAX_OUTPUT_LEN,
      key: &[],
      salt: &[],
      personal: &[],
      kernel: None,
    }
  }

  /// Digest length in bytes, `1..=64`.
  #[inline]
  #[must_use]
  pub const fn hash_length(mut self, len: usize) -> Self {
    self.hash_length = len;
    self
  }

  /// Secret key of at most 64 bytes. An empty key means unkeyed.
  #[inline]
  #[must_use]
  pub const fn key(mut self, key: &'a [u8]) -> Self {
    self.key = key;
    self
  }

  /// Salt of at most 16 bytes, zero-padded.
  #[inline]
  #[must_use]
  pub const fn salt(mut self, salt: &'a [u8]) -> Self {
    self.salt = salt;
    self
  }

  /// Personalization string of at most 16 bytes, zero-padded.
  #[inline]
  #[must_use]
  pub const fn personal(mut self, personal: &'a [u8]) -> Self {
    self.personal = personal;
    self
  }

  /// Pin a compression kernel instead of using the configured one.
  #[inline]
  #[must_use]
  pub const fn kernel(mut self, id: Blake2bKernelId) -> Self {
    self.kernel = Some(id);
    self
  }

  /// Validate every bound and encode the parameter block.
  pub(crate) fn parameter_block(&self) -> Result<ParameterBlock, Error> {
    let digest_size = match u8::try_from(self.hash_length) {
      Ok(n) if (1..=MAX_OUTPUT_LEN).contains(&self.hash_length) => n,
      _ => {
        return Err(Error::InvalidOutputSize {
          requested: self.hash_length,
        });
      }
    };
    let key_length = match u8::try_from(self.key.len()) {
      Ok(n) if self.key.len() <= MAX_KEY_LEN => n,
      _ => return Err(Error::KeyTooLarge { len: self.key.len() }),
    };
    if self.salt.len() > SALT_LEN {
      return Err(Error::SaltTooLarge { len: self.salt.len() });
    }
    if self.personal.len() > PERSONAL_LEN {
      return Err(Error::PersonalizationTooLarge {
        len: self.personal.len(),
      });
    }
    Ok(ParameterBlock::sequential(digest_size, key_length, self.salt, self.personal))
  }

  #[inline]
  pub(crate) fn key_bytes(&self) -> &'a [u8] {
    self.key
  }

  #[inline]
  pub(crate) fn requested_kernel(&self) -> Option<Blake2bKernelId> {
    self.kernel
  }

  /// Validate and construct the hasher, priming it with the key block when keyed.
  pub fn build(&self) -> Result<Blake2b, Error> {
    Blake2b::from_params(self)
  }
}

impl Default for Params<'_> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Params<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Params")
      .field("hash_length", &self.hash_length)
      .field("key_length", &self.key.len())
      .field("salt", &self.salt)
      .field("personal", &self.personal)
      .field("kernel", &self.kernel)
      .finish()
  }
}
