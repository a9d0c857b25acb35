use std::io::{Read as _, Write as _};

use hashes::crypto::blake2b::{Blake2b, Error, MAX_OUTPUT_LEN, Params, blake2b};
use proptest::prelude::*;
use traits::{
  Digest as _,
  io::{DigestReader, DigestWriter},
};

fn pattern(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(13).wrapping_add(5)).collect()
}

#[test]
fn boundary_lengths_are_consistent() {
  for len in [0usize, 1, 127, 128, 129, 255, 256, 257] {
    let data = pattern(len);
    let whole = blake2b(&data);

    let mut bytewise = Blake2b::default();
    for b in &data {
      bytewise.update(core::slice::from_ref(b));
    }
    assert_eq!(bytewise.finalize(), whole, "len={len}");

    let mut blockwise = Blake2b::default();
    for chunk in data.chunks(128) {
      blockwise.update(chunk);
    }
    assert_eq!(blockwise.finalize(), whole, "len={len}");
  }
}

#[test]
fn updates_continue_after_finalize() {
  let mut h = Blake2b::new(32).unwrap();
  h.update(b"hello ");
  let partial = h.finalize();
  assert_eq!(h.finalize(), partial);

  h.update(b"world");
  let mut fresh = Blake2b::new(32).unwrap();
  fresh.update(b"hello world");
  assert_eq!(h.finalize(), fresh.finalize());
  assert_eq!(h.try_finalize(), Ok(fresh.finalize()));
}

#[test]
fn sum_appends_digest() {
  let mut h = Blake2b::new(16).unwrap();
  h.update(b"abc");
  assert_eq!(h.sum(Vec::new()), h.finalize().as_bytes());
  let out = h.sum(b"prefix".to_vec());
  assert_eq!(&out[..6], b"prefix");
  assert_eq!(&out[6..], h.finalize().as_bytes());
  assert_eq!(h.sum(Vec::new()), h.sum(Vec::new()));
}

#[test]
fn construction_errors() {
  assert_eq!(Blake2b::new(0).unwrap_err(), Error::InvalidOutputSize { requested: 0 });
  assert_eq!(Blake2b::new(65).unwrap_err(), Error::InvalidOutputSize { requested: 65 });
  assert_eq!(
    Blake2b::new_keyed(&[0u8; 65], 64).unwrap_err(),
    Error::KeyTooLarge { len: 65 }
  );
  assert_eq!(
    Blake2b::with_config(None, Some(&[0u8; 17][..]), None, 64).unwrap_err(),
    Error::SaltTooLarge { len: 17 }
  );
  assert_eq!(
    Blake2b::with_config(None, None, Some(&[0u8; 17][..]), 64).unwrap_err(),
    Error::PersonalizationTooLarge { len: 17 }
  );
  assert!(Blake2b::with_config(Some(&[1; 64][..]), Some(&[2; 16][..]), Some(&[3; 16][..]), 1).is_ok());
}

#[test]
fn distinct_parameters_give_distinct_digests() {
  let msg = b"same message";
  let digest = |p: Params<'_>| {
    let mut h = p.build().unwrap();
    h.update(msg);
    h.finalize()
  };
  let base = digest(Params::new());
  assert_ne!(base, digest(Params::new().salt(b"s")));
  assert_ne!(base, digest(Params::new().personal(b"p")));
  assert_ne!(base, digest(Params::new().key(b"k")));
  assert_ne!(digest(Params::new().salt(b"x")), digest(Params::new().personal(b"x")));
  // Shorter digests are not truncations: the length is in the parameter block.
  assert_ne!(digest(Params::new().hash_length(32)).as_bytes(), &base.as_bytes()[..32]);
}

#[test]
fn verify_accepts_only_the_exact_tag() {
  let mut mac = Blake2b::new_keyed(b"secret", 32).unwrap();
  mac.update(b"message");
  let tag = mac.finalize();
  assert!(mac.verify(tag.as_bytes()).is_ok());
  assert!(mac.verify(&[0u8; 32]).is_err());
  assert!(mac.verify(b"").is_err());
}

#[test]
fn io_write_matches_update() {
  let data = pattern(1000);
  let mut h = Blake2b::default();
  h.write_all(&data).unwrap();
  h.flush().unwrap();
  assert_eq!(h.finalize(), blake2b(&data));
}

#[test]
fn digest_reader_hashes_what_was_read() {
  let data = pattern(777);
  let mut reader = DigestReader::new(data.as_slice(), Blake2b::default());
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();
  assert_eq!(sink, data);
  assert_eq!(reader.digest(), blake2b(&data));
}

#[test]
fn digest_writer_hashes_what_was_written() {
  let data = pattern(300);
  let mut writer = DigestWriter::new(Vec::new(), Blake2b::new(24).unwrap());
  writer.write_all(&data).unwrap();
  let (out, digest) = writer.into_parts();
  assert_eq!(out, data);

  let mut expected = Blake2b::new(24).unwrap();
  expected.update(&data);
  assert_eq!(digest, expected.finalize());
}

proptest! {
  #[test]
  fn split_point_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    split in any::<prop::sample::Index>(),
    len in 1usize..=MAX_OUTPUT_LEN,
  ) {
    let at = split.index(data.len() + 1);
    let (a, b) = data.split_at(at);

    let mut whole = Blake2b::new(len).unwrap();
    whole.update(&data);

    let mut parts = Blake2b::new(len).unwrap();
    parts.update(a);
    parts.update(b);

    let mut vectored = Blake2b::new(len).unwrap();
    prop_assert_eq!(vectored.update_vectored(&[a, b]), data.len());

    prop_assert_eq!(whole.finalize(), parts.finalize());
    prop_assert_eq!(whole.finalize(), vectored.finalize());
    prop_assert_eq!(whole.finalize().len(), len);
  }

  #[test]
  fn reset_then_rehash_matches_fresh(
    first in proptest::collection::vec(any::<u8>(), 0..600),
    second in proptest::collection::vec(any::<u8>(), 0..600),
  ) {
    let mut h = Blake2b::with_config(None, Some(b"salt".as_slice()), Some(b"pers".as_slice()), 48).unwrap();
    h.update(&first);
    h.reset().unwrap();
    h.update(&second);

    let mut fresh = Blake2b::with_config(None, Some(b"salt".as_slice()), Some(b"pers".as_slice()), 48).unwrap();
    fresh.update(&second);
    prop_assert_eq!(h.finalize(), fresh.finalize());
  }
}
