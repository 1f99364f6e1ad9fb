// Copyright (c) 2026 udpcraft Contributors
// SPDX-License-Identifier: Apache-2.0

//! udpcraft-protocol
//!
//! Wire framing for items travelling between portals:
//!
//! ```text
//! len(name) ‖ name ‖ HMAC-SHA256(key, serial_be ‖ data) ‖ serial_be ‖ data
//! ```
//!
//! The unnamed form drops the first two fields. Only `serial_be ‖ data` is
//! authenticated. This crate builds and verifies such messages and renders
//! them as reference fixtures for other implementations.

#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

pub mod message;
pub mod render;
pub mod store;
pub mod vectors;
pub mod verify;

pub use message::{
    build_fixture, encode_payload, frame_message, sign_payload, Fixture, FixtureError,
    FixtureParams, MAX_DATA_LEN, MAX_NAME_LEN, SERIAL_LEN, SIGNATURE_LEN,
};
pub use render::{
    byte_string_literal, from_signed, javadump, render_report, signed_byte_dump, to_signed,
    Report, JAVADUMP_BLOCK_SIZE,
};
pub use store::{sign_with_store, MemoryStore, SignatureDataStore};
pub use verify::{is_valid_portal_name, verify_message, VerifiedMessage, VerifyError};
