use core::hint::black_box;

/// Deterministic, fast pseudo-random generator for benchmark inputs.
///
/// Not cryptographically secure; it only keeps inputs away from all-zero or
/// highly structured patterns.
#[inline]
fn xorshift64star(state: &mut u64) -> u64 {
  let mut x = *state;
  x ^= x >> 12;
  x ^= x << 25;
  x ^= x >> 27;
  *state = x;
  x.wrapping_mul(0x2545F4914F6CDD1D)
}

pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
  let mut out = vec![0u8; len];
  for b in &mut out {
    *b = (xorshift64star(&mut state) >> 56) as u8;
  }
  black_box(&out);
  out
}

/// Block-boundary sizes plus a spread of payload sizes up to 1 MiB.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  let sizes = [
    0usize,
    1,
    64,
    127,
    128,
    129,
    256,
    1024,
    4 * 1024,
    16 * 1024,
    64 * 1024,
    1024 * 1024,
  ];
  sizes
    .into_iter()
    .map(|len| (len, pseudo_random_bytes(len, 0xB1A2_EB00_C0FF_EE64)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
