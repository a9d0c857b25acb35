use hashes::crypto::blake2b::{Blake2b, Blake2bKernelId, Params, blake2b};
use proptest::prelude::*;
use traits::Digest as _;

fn blake2b512_ref(data: &[u8]) -> [u8; 64] {
  use blake2::Digest as _;
  let out = blake2::Blake2b512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn blake2b_var_ref(data: &[u8], len: usize) -> Vec<u8> {
  use blake2::digest::{Update, VariableOutput};
  let mut h = blake2::Blake2bVar::new(len).unwrap();
  h.update(data);
  let mut out = vec![0u8; len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2b_mac_ref(key: &[u8], data: &[u8]) -> Vec<u8> {
  use blake2::digest::{KeyInit, Mac};
  let mut mac = <blake2::Blake2bMac512 as KeyInit>::new_from_slice(key).unwrap();
  mac.update(data);
  mac.finalize().into_bytes().to_vec()
}

fn feed_in_steps(h: &mut Blake2b, data: &[u8]) {
  let mut i = 0usize;
  while i < data.len() {
    let step = (data[i] as usize % 97) + 1;
    let end = core::cmp::min(data.len(), i + step);
    h.update(&data[i..end]);
    i = end;
  }
}

proptest! {
  #[test]
  fn blake2b512_one_shot_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let got = blake2b(&data);
    prop_assert_eq!(got.as_bytes(), &blake2b512_ref(&data)[..]);
  }

  #[test]
  fn blake2b512_streaming_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2b512_ref(&data);
    let mut h = Blake2b::default();
    feed_in_steps(&mut h, &data);
    let got = h.finalize();
    prop_assert_eq!(got.as_bytes(), &expected[..]);
  }

  #[test]
  fn blake2b_variable_length_matches_blake2(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    len in 1usize..=64,
  ) {
    let mut h = Blake2b::new(len).unwrap();
    feed_in_steps(&mut h, &data);
    let got = h.finalize();
    prop_assert_eq!(got.as_bytes(), &blake2b_var_ref(&data, len)[..]);
  }

  #[test]
  fn blake2b_mac_matches_blake2(
    key in proptest::collection::vec(any::<u8>(), 1..=64),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
  ) {
    let mut h = Blake2b::new_keyed(&key, 64).unwrap();
    feed_in_steps(&mut h, &data);
    let got = h.finalize();
    prop_assert_eq!(got.as_bytes(), &blake2b_mac_ref(&key, &data)[..]);
  }

  #[test]
  fn blake2b_full_parameter_space_matches_blake2b_simd(
    len in 1usize..=64,
    key in proptest::collection::vec(any::<u8>(), 0..=64),
    salt in proptest::collection::vec(any::<u8>(), 0..=16),
    personal in proptest::collection::vec(any::<u8>(), 0..=16),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    unrolled in any::<bool>(),
  ) {
    let expected = blake2b_simd::Params::new()
      .hash_length(len)
      .key(&key)
      .salt(&salt)
      .personal(&personal)
      .hash(&data);

    let kernel = if unrolled { Blake2bKernelId::Unrolled } else { Blake2bKernelId::Portable };
    let mut h = Params::new()
      .hash_length(len)
      .key(&key)
      .salt(&salt)
      .personal(&personal)
      .kernel(kernel)
      .build()
      .unwrap();
    feed_in_steps(&mut h, &data);
    let got = h.finalize();
    prop_assert_eq!(got.as_bytes(), expected.as_bytes());
  }
}
