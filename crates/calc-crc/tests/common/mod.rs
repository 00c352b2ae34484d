//! Generic test harness for checksum engines.
//!
//! Works with any type implementing [`Checksum`] and verifies the protocol
//! invariants every engine must uphold:
//!
//! 1. **Chunk invariance**: any split into non-empty pieces, fed through
//!    `update` and closed with `finalize`, equals `calculate` over the whole
//! 2. **Sequence isolation**: `finalize` closes the sequence; the next one starts fresh
//! 3. **Protocol errors**: `finalize` without `update` fails

#![allow(dead_code)]

use core::marker::PhantomData;

use calc_crc::Checksum;

/// Deterministic pseudo-random bytes (xorshift).
pub fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Property checks for a checksum engine built by `make`.
pub struct ChecksumHarness<C, F> {
  make: F,
  _phantom: PhantomData<C>,
}

impl<C, F> ChecksumHarness<C, F>
where
  C: Checksum,
  C::Error: PartialEq,
  F: Fn() -> C,
{
  pub fn new(make: F) -> Self {
    Self {
      make,
      _phantom: PhantomData,
    }
  }

  fn oneshot(&self, data: &[u8]) -> C::Output {
    (self.make)().calculate(data).unwrap()
  }

  /// Feed `data` as consecutive chunks of `chunk_size` bytes.
  pub fn streaming_chunked(&self, data: &[u8], chunk_size: usize) {
    if data.is_empty() || chunk_size == 0 {
      return;
    }
    let mut engine = (self.make)();
    for chunk in data.chunks(chunk_size) {
      engine.update(chunk).unwrap();
    }
    assert_eq!(
      engine.finalize().unwrap(),
      self.oneshot(data),
      "chunk_size={chunk_size} len={}",
      data.len()
    );
  }

  pub fn streaming_byte_at_a_time(&self, data: &[u8]) {
    self.streaming_chunked(data, 1);
  }

  /// Every two-way split with both halves non-empty.
  pub fn all_splits(&self, data: &[u8]) {
    let full = self.oneshot(data);
    for split in 1..data.len() {
      let (a, b) = data.split_at(split);
      let mut engine = (self.make)();
      engine.update(a).unwrap();
      engine.update(b).unwrap();
      assert_eq!(engine.finalize().unwrap(), full, "split {split}/{}", data.len());
    }
  }

  /// Arbitrary cut points; empty pieces are skipped.
  pub fn partition(&self, data: &[u8], cuts: &[usize]) {
    if data.is_empty() {
      return;
    }
    let mut engine = (self.make)();
    let mut prev = 0;
    for &cut in cuts {
      let cut = cut.min(data.len());
      if cut > prev {
        engine.update(&data[prev..cut]).unwrap();
        prev = cut;
      }
    }
    if prev < data.len() {
      engine.update(&data[prev..]).unwrap();
    }
    assert_eq!(engine.finalize().unwrap(), self.oneshot(data));
  }

  /// Two messages back to back on one engine do not leak into each other.
  pub fn sequences_are_isolated(&self, first: &[u8], second: &[u8]) {
    let mut engine = (self.make)();
    engine.update(first).unwrap();
    engine.finalize().unwrap();
    engine.update(second).unwrap();
    assert_eq!(engine.finalize().unwrap(), self.oneshot(second));
  }

  /// `finalize` is only valid once per sequence.
  pub fn finalize_closes_sequence(&self, data: &[u8]) {
    let mut engine = (self.make)();
    assert!(engine.finalize().is_err());
    engine.update(data).unwrap();
    assert!(engine.finalize().is_ok());
    assert!(engine.finalize().is_err());
  }

  pub fn vectored(&self, bufs: &[&[u8]]) {
    let whole: Vec<u8> = bufs.concat();
    let mut engine = (self.make)();
    assert_eq!(engine.checksum_vectored(bufs).unwrap(), self.oneshot(&whole));
  }

  pub fn run_all(&self) {
    let lengths = [1usize, 2, 3, 7, 8, 9, 16, 31, 64, 255, 1024];
    for (i, &len) in lengths.iter().enumerate() {
      let data = gen_bytes(len, 0x9E37_79B9_7F4A_7C15 ^ i as u64);
      for chunk_size in [1usize, 2, 3, 7, 8, 13, 64] {
        self.streaming_chunked(&data, chunk_size);
      }
      self.partition(&data, &[0, len / 3, len / 2, len]);
      self.finalize_closes_sequence(&data);
    }
    self.all_splits(&gen_bytes(97, 42));
    self.streaming_byte_at_a_time(b"123456789");
    self.sequences_are_isolated(b"first message", b"second message");
    self.vectored(&[b"12", b"345", b"6789"]);
  }
}
