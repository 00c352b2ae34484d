//! Basic CRC usage: one-shot, streaming and custom configurations.
//!
//! Run with: `cargo run --example basic -p calc-crc`

use calc_crc::{
  CATALOGUE, CRC16_POLYNOMIAL, Crc16Config, CrcError, CrcParams, CrcSession, CrcWidth, SharedSession,
};

fn main() -> Result<(), CrcError> {
  println!("=== calc-crc Basic Examples ===\n");

  catalogue()?;
  streaming()?;
  custom()?;
  shared()?;
  errors();
  Ok(())
}

/// One-shot computation over every catalogue variant.
fn catalogue() -> Result<(), CrcError> {
  println!("--- Catalogue ---\n");

  let mut session = CrcSession::new();
  for entry in &CATALOGUE {
    session.init_params(&entry.params)?;
    let crc = session.calculate(b"123456789")?;
    let digits = usize::from(entry.params.width / 4);
    println!("{:<20} 0x{crc:0digits$X}", entry.name);
    assert_eq!(crc, entry.check);
  }

  println!();
  Ok(())
}

/// Streaming computation: process data in chunks.
fn streaming() -> Result<(), CrcError> {
  println!("--- Streaming ---\n");

  let mut session = CrcSession::new();
  session.init_params(&CrcParams::CRC32_ISO_HDLC)?;

  session.update(b"1234")?;
  session.update(b"56789")?;
  let crc = session.finalize()?;
  println!("Streaming CRC-32: 0x{crc:08X} over {} chunks", session.chunk_count());
  assert_eq!(crc, session.calculate(b"123456789")?);

  // finalize() closes the sequence; the next update starts a new message.
  session.update(b"new data")?;
  let fresh = session.finalize()?;
  println!("Fresh CRC-32:     0x{fresh:08X}");

  println!();
  Ok(())
}

/// Build a configuration by hand and adjust it after init.
fn custom() -> Result<(), CrcError> {
  println!("--- Custom Configuration ---\n");

  let config = Crc16Config::new(CRC16_POLYNOMIAL).with_initial(0xFFFF).with_final_xor(0xFFFF);
  let mut session = CrcSession::with_config(config);
  println!("CRC-16 all-ones:  0x{:04X}", session.calculate(b"123456789")?);

  if let Some(config) = session.config_mut().and_then(|c| c.as_width_mut::<u16>()) {
    config.initial_value = 0;
    config.final_xor_value = 0;
  }
  println!("CRC-16 zeroed:    0x{:04X}", session.calculate(b"123456789")?);

  let params = CrcParams::new(CrcWidth::Crc16, 0x8005).with_reflection(true, true);
  session.init_params(&params)?;
  println!("CRC-16 reflected: 0x{:04X}", session.calculate(b"123456789")?);

  println!();
  Ok(())
}

/// One session shared across threads.
fn shared() -> Result<(), CrcError> {
  println!("--- Shared Session ---\n");

  let shared = SharedSession::new();
  shared.init_params(&CrcParams::CRC64_XZ)?;

  let worker = shared.clone();
  let handle = std::thread::spawn(move || worker.update(b"12345"));
  handle.join().map_err(|_| CrcError::Error)??;
  shared.update(b"6789")?;

  println!("CRC-64 (XZ):      0x{:016X}", shared.finalize()?);
  println!();
  Ok(())
}

/// Protocol violations surface as error codes.
fn errors() {
  println!("--- Errors ---\n");

  let mut session = CrcSession::new();
  for err in [
    session.calculate(b"data").err(),
    session.finalize().err(),
    session.init_params(&CrcParams::CRC8_SMBUS.with_initial(0x100)).err(),
  ]
  .into_iter()
  .flatten()
  {
    println!("code {}: {err}", err.code());
  }
}
