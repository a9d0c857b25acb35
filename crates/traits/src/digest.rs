//! Hash engine capability trait.
//!
//! Any type implementing [`Digest`] is interchangeable with any other hash
//! engine: streaming updates, non-mutating finalize, and fallible reset.

use core::fmt::Debug;

use crate::error::ResetError;

/// Streaming cryptographic hash engine with a runtime-configured output size.
///
/// # Example
///
/// ```rust
/// # use traits::{Digest, ResetError};
/// # #[derive(Clone, Default)]
/// # struct XorDigest(u8);
/// # impl Digest for XorDigest {
/// #   const BLOCK_SIZE: usize = 1;
/// #   type Output = [u8; 1];
/// #   fn output_size(&self) -> usize { 1 }
/// #   fn update(&mut self, data: &[u8]) -> usize {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
/// #     data.len()
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0] }
/// #   fn reset(&mut self) -> Result<(), ResetError> { self.0 = 0; Ok(()) }
/// # }
/// let mut h = XorDigest::default();
/// assert_eq!(h.update(b"ab"), 2);
/// let first = h.finalize();
/// assert_eq!(h.finalize(), first);
/// assert_eq!(h.sum(vec![0xff]), vec![0xff, b'a' ^ b'b']);
/// ```
pub trait Digest: Clone {
  /// Internal block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  type Output: AsRef<[u8]> + Copy + Eq + Debug;

  /// Number of bytes [`finalize`](Self::finalize) produces.
  #[must_use]
  fn output_size(&self) -> usize;

  /// Block size of this engine, in bytes.
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Absorb `data`. Always consumes the entire input and returns its length.
  fn update(&mut self, data: &[u8]) -> usize;

  /// Absorb multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> usize {
    bufs.iter().map(|buf| self.update(buf)).sum()
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume or modify the hasher; further updates
  /// continue the original stream.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Append the digest to `prefix` and return it.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  fn sum(&self, mut prefix: alloc::vec::Vec<u8>) -> alloc::vec::Vec<u8> {
    prefix.extend_from_slice(self.finalize().as_ref());
    prefix
  }

  /// Reset the hasher to its initial state.
  ///
  /// Engines that cannot recreate their initial state (for example keyed
  /// hashes that do not retain the key) return [`ResetError`].
  fn reset(&mut self) -> Result<(), ResetError>;
}
