//! Streaming protocol checks for every catalogue entry and both kernels.

mod common;

use calc_crc::{CATALOGUE, CrcConfig, CrcSession, Kernel, SharedSession};
use common::ChecksumHarness;

fn session(config: &CrcConfig, kernel: Kernel) -> CrcSession {
  let mut session = CrcSession::with_config(config.clone());
  session.set_kernel(kernel);
  session
}

#[test]
fn catalogue_table_kernel() {
  for entry in &CATALOGUE {
    let config = CrcConfig::from_params(&entry.params).unwrap();
    ChecksumHarness::new(|| session(&config, Kernel::Table)).run_all();
  }
}

#[test]
fn catalogue_reference_kernel() {
  for entry in &CATALOGUE {
    let config = CrcConfig::from_params(&entry.params).unwrap();
    ChecksumHarness::new(|| session(&config, Kernel::Reference)).run_all();
  }
}

#[test]
fn kernels_agree() {
  let data = common::gen_bytes(4096, 7);
  for entry in &CATALOGUE {
    let config = CrcConfig::from_params(&entry.params).unwrap();
    let table = session(&config, Kernel::Table).calculate(&data);
    let reference = session(&config, Kernel::Reference).calculate(&data);
    assert_eq!(table, reference, "{}", entry.name);
  }
}

#[test]
fn calculate_during_sequence_is_next_chunk() {
  let config = CrcConfig::from_params(&calc_crc::CrcParams::CRC32_ISO_HDLC).unwrap();
  let mut session = CrcSession::with_config(config);

  session.update(b"1234").unwrap();
  // Counts as the second chunk; result is the adjusted value so far.
  assert_eq!(session.calculate(b"56789"), Ok(0xCBF4_3926));
  assert_eq!(session.chunk_count(), 2);
  assert!(session.is_in_progress());
  assert_eq!(session.finalize(), Ok(0xCBF4_3926));
}

#[test]
fn shared_session_streams() {
  let shared = SharedSession::new();
  shared.init_params(&calc_crc::CrcParams::CRC16_IBM_3740).unwrap();
  let worker = shared.clone();
  std::thread::spawn(move || {
    worker.update(b"12345").unwrap();
  })
  .join()
  .unwrap();
  shared.update(b"6789").unwrap();
  assert_eq!(shared.finalize(), Ok(0x29B1));
}
