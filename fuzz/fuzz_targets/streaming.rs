//! Fuzz target for the streaming session API.
//!
//! Arbitrary parameters and chunkings must match the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use calc_crc::{CrcParams, CrcSession, CrcWidth, Kernel};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  reference: bool,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let width = CrcWidth::ALL[usize::from(input.width % CrcWidth::COUNT)];
  let mask = width.mask();
  let params = CrcParams::new(width, input.polynomial & mask)
    .with_initial(input.initial & mask)
    .with_xor_out(input.xor_out & mask)
    .with_reflection(input.reflect_in, input.reflect_out);

  let mut session = CrcSession::new();
  session.set_kernel(if input.reference { Kernel::Reference } else { Kernel::Table });
  session.init_params(&params).unwrap();

  let data = &input.data;
  if data.is_empty() {
    assert!(session.calculate(data).is_err());
    assert!(session.update(data).is_err());
    assert!(session.finalize().is_err());
    return;
  }

  let expected = session.calculate(data).unwrap();
  assert_eq!(expected & !mask, 0, "result exceeds {width}");

  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    session.update(&data[offset..end]).unwrap();
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(session.chunk_count(), chunk_idx);
  assert_eq!(session.finalize().unwrap(), expected, "{width} streaming mismatch");
  assert!(session.finalize().is_err());
});
