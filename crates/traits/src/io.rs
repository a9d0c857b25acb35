//! I/O adapters for hash engines.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every byte that actually
//! crosses the wrapper into a [`Digest`]. Short reads and short writes hash
//! only the transferred prefix.
//!
//! # Example
//!
//! ```rust
//! # use traits::{Digest, ResetError};
//! # #[derive(Clone, Default)]
//! # struct XorDigest(u8);
//! # impl Digest for XorDigest {
//! #   const BLOCK_SIZE: usize = 1;
//! #   type Output = [u8; 1];
//! #   fn output_size(&self) -> usize { 1 }
//! #   fn update(&mut self, data: &[u8]) -> usize {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
//! #     data.len()
//! #   }
//! #   fn finalize(&self) -> Self::Output { [self.0] }
//! #   fn reset(&mut self) -> Result<(), ResetError> { self.0 = 0; Ok(()) }
//! # }
//! use std::io::{Cursor, Write};
//!
//! use traits::io::{DigestReader, DigestWriter};
//!
//! let mut reader = DigestReader::new(Cursor::new(b"abc".to_vec()), XorDigest::default());
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), [b'a' ^ b'b' ^ b'c']);
//!
//! let mut writer = DigestWriter::new(Vec::new(), XorDigest::default());
//! writer.write_all(b"abc")?;
//! let (out, digest) = writer.into_parts();
//! assert_eq!(out, b"abc");
//! assert_eq!(digest, [b'a' ^ b'b' ^ b'c']);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::Digest;

/// Feed the first `n` bytes spanned by `bufs` into `hasher`.
fn update_prefix<'a, D: Digest>(hasher: &mut D, bufs: impl Iterator<Item = &'a [u8]>, mut n: usize) {
  for buf in bufs {
    if n == 0 {
      break;
    }
    let take = n.min(buf.len());
    if let Some(data) = buf.get(..take) {
      hasher.update(data);
    }
    n -= take;
  }
}

/// Wraps a [`Read`] and hashes the bytes read through it.
#[derive(Clone, Debug)]
pub struct DigestReader<R, D> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Wrap `inner`, feeding reads into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: R, hasher: D) -> Self {
    Self { inner, hasher }
  }

  /// Digest of everything read so far. Reading may continue afterwards.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Mutable access to the hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Return the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Return the inner reader, discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    update_prefix(&mut self.hasher, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }
}

/// Wraps a [`Write`] and hashes the bytes the inner writer accepts.
#[derive(Clone, Debug)]
pub struct DigestWriter<W, D> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Wrap `inner`, feeding accepted writes into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, hasher: D) -> Self {
    Self { inner, hasher }
  }

  /// Digest of everything written so far. Writing may continue afterwards.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Mutable access to the hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Return the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Return the inner writer, discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    update_prefix(&mut self.hasher, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}
