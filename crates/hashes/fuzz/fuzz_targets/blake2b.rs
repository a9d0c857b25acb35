#![no_main]

use hashes::crypto::blake2b::{Blake2b, Params, kernel_test::verify_blake2b_kernels};
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  {
    let ours = Blake2b::digest(input);
    let mut h = Blake2b::default();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use blake2::Digest as _;
    let ref_out = blake2::Blake2b512::digest(input);
    assert_eq!(ours.as_bytes(), ref_out.as_slice());
  }

  {
    // Leading bytes pick the digest length and key; the rest is the message.
    let len = input.first().map_or(64, |&b| usize::from(b % 64) + 1);
    let key = &a[..a.len().min(64)];
    let params = Params::new().hash_length(len).key(key);

    let mut h = params.build().unwrap();
    h.update(b);
    let once = h.finalize();
    assert_eq!(once.len(), len);
    assert_eq!(once, h.finalize());
    assert!(h.verify(once.as_bytes()).is_ok());

    assert!(verify_blake2b_kernels(&params, b).is_ok());
  }
});
