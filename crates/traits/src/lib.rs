//! Checksum protocol traits for calc-crc.
//!
//! This crate defines the incremental checksum protocol that engines in this
//! workspace conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Protocol
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | [`Checksum::calculate`] | One-shot value over a complete buffer |
//! | [`Checksum::update`] | Feed the next chunk of a message |
//! | [`Checksum::finalize`] | Close the message and read its value |
//!
//! Every operation is fallible: engines report protocol and argument errors
//! through their own [`Checksum::Error`] type instead of panicking.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod checksum;

pub use checksum::Checksum;
