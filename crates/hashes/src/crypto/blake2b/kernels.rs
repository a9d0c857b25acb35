//! BLAKE2b compression kernels.
//!
//! Every kernel computes the same function: one 12-round compression of a
//! 128-byte block into the chaining value `h`, keyed by the byte counter
//! `t = [t0, t1]` and the finalization flags `f = [f0, f1]`.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use super::BLOCK_LEN;
use crate::util::rotr64;

pub(crate) type CompressFn = fn(&mut [u64; 8], &[u8; BLOCK_LEN], [u64; 2], [u64; 2]);

pub(crate) const ROUNDS: usize = 12;

pub(crate) const IV: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

/// Message word schedule. Round `r` uses `SIGMA[r % 10]`.
const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Working-vector indices for the four column steps followed by the four
/// diagonal steps of a round.
const LANES: [[usize; 4]; 8] = [
  [0, 4, 8, 12],
  [1, 5, 9, 13],
  [2, 6, 10, 14],
  [3, 7, 11, 15],
  [0, 5, 10, 15],
  [1, 6, 11, 12],
  [2, 7, 8, 13],
  [3, 4, 9, 14],
];

/// Compression kernel identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Blake2bKernelId {
  /// Table-driven rounds.
  Portable = 0,
  /// Fully unrolled rounds on scalar locals.
  Unrolled = 1,
}

/// Every kernel, default first.
pub const ALL: &[Blake2bKernelId] = &[Blake2bKernelId::Portable, Blake2bKernelId::Unrolled];

impl Blake2bKernelId {
  /// Stable kernel name.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Unrolled => "unrolled",
    }
  }
}

/// Look up a kernel by its [`Blake2bKernelId::as_str`] name.
#[must_use]
pub fn id_from_name(name: &str) -> Option<Blake2bKernelId> {
  match name {
    "portable" => Some(Blake2bKernelId::Portable),
    "unrolled" => Some(Blake2bKernelId::Unrolled),
    _ => None,
  }
}

#[must_use]
pub(crate) fn compress_fn(id: Blake2bKernelId) -> CompressFn {
  match id {
    Blake2bKernelId::Portable => compress_portable,
    Blake2bKernelId::Unrolled => compress_unrolled,
  }
}

#[inline(always)]
fn load_words(block: &[u8; BLOCK_LEN]) -> [u64; 16] {
  let (chunks, _) = block.as_chunks::<8>();
  let mut m = [0u64; 16];
  for (word, chunk) in m.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
  m
}

#[inline(always)]
fn g(v: &mut [u64; 16], [a, b, c, d]: [usize; 4], x: u64, y: u64) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = rotr64(v[d] ^ v[a], 32);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 24);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = rotr64(v[d] ^ v[a], 16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 63);
}

pub(crate) fn compress_portable(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: [u64; 2], f: [u64; 2]) {
  let m = load_words(block);

  let mut v = [0u64; 16];
  v[..8].copy_from_slice(&h[..]);
  v[8..].copy_from_slice(&IV);
  v[12] ^= t[0];
  v[13] ^= t[1];
  v[14] ^= f[0];
  v[15] ^= f[1];

  for r in 0..ROUNDS {
    let s = &SIGMA[r % SIGMA.len()];
    for (i, lane) in LANES.iter().enumerate() {
      g(&mut v, *lane, m[s[2 * i]], m[s[2 * i + 1]]);
    }
  }

  for i in 0..8 {
    h[i] ^= v[i] ^ v[i + 8];
  }
}

#[inline(always)]
fn g_local(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64, x: u64, y: u64) {
  *a = a.wrapping_add(*b).wrapping_add(x);
  *d = rotr64(*d ^ *a, 32);
  *c = c.wrapping_add(*d);
  *b = rotr64(*b ^ *c, 24);
  *a = a.wrapping_add(*b).wrapping_add(y);
  *d = rotr64(*d ^ *a, 16);
  *c = c.wrapping_add(*d);
  *b = rotr64(*b ^ *c, 63);
}

pub(crate) fn compress_unrolled(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: [u64; 2], f: [u64; 2]) {
  let m = load_words(block);

  let [mut v0, mut v1, mut v2, mut v3, mut v4, mut v5, mut v6, mut v7] = *h;
  let mut v8 = IV[0];
  let mut v9 = IV[1];
  let mut v10 = IV[2];
  let mut v11 = IV[3];
  let mut v12 = IV[4] ^ t[0];
  let mut v13 = IV[5] ^ t[1];
  let mut v14 = IV[6] ^ f[0];
  let mut v15 = IV[7] ^ f[1];

  macro_rules! round {
    ($r:expr) => {{
      let s = &SIGMA[$r % 10];

      g_local(&mut v0, &mut v4, &mut v8, &mut v12, m[s[0]], m[s[1]]);
      g_local(&mut v1, &mut v5, &mut v9, &mut v13, m[s[2]], m[s[3]]);
      g_local(&mut v2, &mut v6, &mut v10, &mut v14, m[s[4]], m[s[5]]);
      g_local(&mut v3, &mut v7, &mut v11, &mut v15, m[s[6]], m[s[7]]);

      g_local(&mut v0, &mut v5, &mut v10, &mut v15, m[s[8]], m[s[9]]);
      g_local(&mut v1, &mut v6, &mut v11, &mut v12, m[s[10]], m[s[11]]);
      g_local(&mut v2, &mut v7, &mut v8, &mut v13, m[s[12]], m[s[13]]);
      g_local(&mut v3, &mut v4, &mut v9, &mut v14, m[s[14]], m[s[15]]);
    }};
  }

  round!(0);
  round!(1);
  round!(2);
  round!(3);
  round!(4);
  round!(5);
  round!(6);
  round!(7);
  round!(8);
  round!(9);
  round!(10);
  round!(11);

  h[0] ^= v0 ^ v8;
  h[1] ^= v1 ^ v9;
  h[2] ^= v2 ^ v10;
  h[3] ^= v3 ^ v11;
  h[4] ^= v4 ^ v12;
  h[5] ^= v5 ^ v13;
  h[6] ^= v6 ^ v14;
  h[7] ^= v7 ^ v15;
}
