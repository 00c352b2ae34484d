//! Parameterized CRC-8/16/32/64 engine.
//!
//! This crate computes Rocksoft-model CRCs for any polynomial, initial value,
//! final XOR and input/output reflection at the four register widths, either
//! in one shot or incrementally across chunks.
//!
//! # Components
//!
//! | Item | Role |
//! |------|------|
//! | [`build_table`] | 256-entry forward lookup table for a polynomial |
//! | [`reflect`] | Bit reversal of a width-sized value |
//! | [`CrcConfig`] | Per-width parameters plus their derived table |
//! | [`CrcSession`] | `init` / `calculate` / `update` / `finalize` engine |
//! | [`CrcParams`] | Width-erased parameters and a catalogue of known CRCs |
//!
//! # Example
//!
//! ```rust
//! use calc_crc::{CRC16_POLYNOMIAL, Crc16Config, CrcSession};
//!
//! let config = Crc16Config::new(CRC16_POLYNOMIAL)
//!   .with_initial(0xFFFF)
//!   .with_final_xor(0xFFFF);
//! let mut session = CrcSession::with_config(config);
//!
//! // One-shot computation
//! let crc = session.calculate(b"123456789")?;
//! assert_eq!(crc, 0xD64E);
//!
//! // Chunked computation yields the same value
//! session.update(b"1234")?;
//! session.update(b"56789")?;
//! assert_eq!(session.finalize()?, crc);
//! # Ok::<(), calc_crc::CrcError>(())
//! ```
//!
//! # Configuration
//!
//! `CALC_CRC_FORCE=reference` makes new sessions use the bitwise reference
//! kernel instead of the table kernel (see [`kernel`]).
//!
//! # no_std Support
//!
//! The engine is `no_std` compatible. Disable the `std` feature for embedded
//! use; this drops [`SharedSession`] and the environment override.
//!
//! ```toml
//! [dependencies]
//! calc-crc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod config;
mod error;
pub mod kernel;
mod params;
pub mod reference;
mod reflect;
mod session;
#[cfg(feature = "std")]
mod sync;
mod table;
mod width;
mod word;

pub use config::{Crc8Config, Crc16Config, Crc32Config, Crc64Config, CrcConfig, WidthConfig};
pub use error::CrcError;
pub use kernel::{CrcForce, Kernel};
pub use params::{
  CATALOGUE, CRC8_POLYNOMIAL, CRC16_POLYNOMIAL, CRC32_POLYNOMIAL, CRC64_POLYNOMIAL, CatalogEntry, CrcParams, find,
};
pub use reflect::{reflect, reflect_byte};
pub use session::CrcSession;
#[cfg(feature = "std")]
pub use sync::SharedSession;
pub use table::{build_table, table_entry};
pub use traits::Checksum;
pub use width::CrcWidth;
pub use word::CrcWord;
