//! Differential fuzz target: table kernel vs bit-at-a-time reference.

#![no_main]

use arbitrary::Arbitrary;
use calc_crc::{CATALOGUE, CrcSession, Kernel, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  variant: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  if input.data.is_empty() {
    return;
  }

  let entry = &CATALOGUE[usize::from(input.variant) % CATALOGUE.len()];
  let mut session = CrcSession::new();
  session.set_kernel(Kernel::Table);
  session.init_params(&entry.params).unwrap();

  let ours = session.calculate(&input.data).unwrap();
  let bitwise = reference::crc_bitwise(&entry.params, &input.data).unwrap();
  assert_eq!(ours, bitwise, "{} mismatch", entry.name);
});
