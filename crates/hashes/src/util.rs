#[inline(always)]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

/// Compare two byte strings without exiting early on the first difference.
///
/// Lengths are public and compared up front.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
  core::hint::black_box(diff) == 0
}
