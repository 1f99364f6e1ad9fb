//! Pinned item-message vectors shared with the other implementations of the
//! portal protocol.

use crate::message::FixtureParams;

pub const REFERENCE_KEY: &[u8] = b"foobar";
pub const REFERENCE_SERIAL: i32 = 1;
pub const REFERENCE_DATA: &[u8] = b"this is only a test";
pub const REFERENCE_PORTAL_NAME: &[u8] = b"testportal";

const SHORT_PORTAL_NAME: &[u8] = b"foobar";

pub const REFERENCE_SIGNATURE_HEX: &str =
    "38e03d68579a4a29ddf5bed38d0edd694bf7e49a7bc23a82a8ae6e23cc9a2a45";

/// The named reference message as the `byte[]` literal the plugin's test
/// suite pins.
#[rustfmt::skip]
pub const REFERENCE_NAMED_MESSAGE: [i8; 66] = [
      10,  116,  101,  115,  116,  112,  111,  114,  116,   97,  108,   56,  -32,   61,  104,   87,
    -102,   74,   41,  -35,  -11,  -66,  -45, -115,   14,  -35,  105,   75,   -9,  -28, -102,  123,
     -62,   58, -126,  -88,  -82,  110,   35,  -52, -102,   42,   69,    0,    0,    0,    1,  116,
     104,  105,  115,   32,  105,  115,   32,  111,  110,  108,  121,   32,   97,   32,  116,  101,
     115,  116,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMessageVector {
    pub key: &'static [u8],
    pub serial: i32,
    pub data: &'static [u8],
    pub portal_name: Option<&'static [u8]>,
    pub expected_signature_hex: &'static str,
    pub expected_message_len: usize,
}

impl ItemMessageVector {
    pub const fn params(&self) -> FixtureParams<'static> {
        FixtureParams {
            key: self.key,
            serial: self.serial,
            data: self.data,
            name: self.portal_name,
        }
    }
}

pub const ITEM_MESSAGE_TEST_VECTORS: &[ItemMessageVector] = &[
    ItemMessageVector {
        key: REFERENCE_KEY,
        serial: REFERENCE_SERIAL,
        data: REFERENCE_DATA,
        portal_name: None,
        expected_signature_hex: REFERENCE_SIGNATURE_HEX,
        expected_message_len: 55,
    },
    ItemMessageVector {
        key: REFERENCE_KEY,
        serial: REFERENCE_SERIAL,
        data: REFERENCE_DATA,
        portal_name: Some(REFERENCE_PORTAL_NAME),
        expected_signature_hex: REFERENCE_SIGNATURE_HEX,
        expected_message_len: 66,
    },
    ItemMessageVector {
        key: REFERENCE_KEY,
        serial: -2,
        data: b"x",
        portal_name: Some(SHORT_PORTAL_NAME),
        expected_signature_hex: "795088c742db71785e8f341edefa6babf4b23a112c6f2e2cf9fbc89f8417e1c3",
        expected_message_len: 44,
    },
];
