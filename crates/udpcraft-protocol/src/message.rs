use hmac::{Hmac, Mac};
use sha2::Sha256;

pub const SIGNATURE_LEN: usize = 32;
pub const SERIAL_LEN: usize = 4;
/// The name length travels in a single byte.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;
pub const MAX_DATA_LEN: usize = (i32::MAX / 2) as usize;

pub(crate) type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("name is {len} bytes but the length prefix holds at most {}", MAX_NAME_LEN)]
    NameTooLong { len: usize },
    #[error("payload data is {len} bytes but at most {} can be signed", MAX_DATA_LEN)]
    PayloadTooLarge { len: usize },
    /// Unreachable with SHA-256, which accepts keys of any length.
    #[error("hmac key rejected")]
    InvalidKey,
}

/// Inputs of one fixture. The reference vectors are available through
/// [`FixtureParams::reference`] and [`FixtureParams::reference_named`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureParams<'a> {
    pub key: &'a [u8],
    pub serial: i32,
    pub data: &'a [u8],
    pub name: Option<&'a [u8]>,
}

impl FixtureParams<'static> {
    pub const fn reference() -> Self {
        Self {
            key: crate::vectors::REFERENCE_KEY,
            serial: crate::vectors::REFERENCE_SERIAL,
            data: crate::vectors::REFERENCE_DATA,
            name: None,
        }
    }

    pub const fn reference_named() -> Self {
        Self {
            name: Some(crate::vectors::REFERENCE_PORTAL_NAME),
            ..Self::reference()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    name: Option<Vec<u8>>,
    serial: i32,
    payload: Vec<u8>,
    signature: [u8; SIGNATURE_LEN],
    message: Vec<u8>,
}

impl Fixture {
    pub fn name(&self) -> Option<&[u8]> {
        self.name.as_deref()
    }

    pub fn serial(&self) -> i32 {
        self.serial
    }

    /// `serial_be ‖ data`, the authenticated part of the message.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn signature(&self) -> &[u8; SIGNATURE_LEN] {
        &self.signature
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    pub fn into_message(self) -> Vec<u8> {
        self.message
    }
}

pub fn encode_payload(serial: i32, data: &[u8]) -> Result<Vec<u8>, FixtureError> {
    if data.len() > MAX_DATA_LEN {
        return Err(FixtureError::PayloadTooLarge { len: data.len() });
    }
    let mut payload = Vec::with_capacity(SERIAL_LEN + data.len());
    payload.extend_from_slice(&serial.to_be_bytes());
    payload.extend_from_slice(data);
    Ok(payload)
}

pub fn sign_payload(key: &[u8], payload: &[u8]) -> Result<[u8; SIGNATURE_LEN], FixtureError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| FixtureError::InvalidKey)?;
    mac.update(payload);
    Ok(mac.finalize().into_bytes().into())
}

fn name_prefix(name: &[u8]) -> Result<u8, FixtureError> {
    u8::try_from(name.len()).map_err(|_| FixtureError::NameTooLong { len: name.len() })
}

pub fn frame_message(
    name: Option<&[u8]>,
    signature: &[u8; SIGNATURE_LEN],
    payload: &[u8],
) -> Result<Vec<u8>, FixtureError> {
    let header_len = name.map_or(0, |n| 1 + n.len());
    let mut message = Vec::with_capacity(header_len + SIGNATURE_LEN + payload.len());
    if let Some(name) = name {
        message.push(name_prefix(name)?);
        message.extend_from_slice(name);
    }
    message.extend_from_slice(signature);
    message.extend_from_slice(payload);
    Ok(message)
}

pub fn build_fixture(params: &FixtureParams<'_>) -> Result<Fixture, FixtureError> {
    if let Some(name) = params.name {
        name_prefix(name)?;
    }

    let payload = encode_payload(params.serial, params.data)?;
    let signature = sign_payload(params.key, &payload)?;
    let message = frame_message(params.name, &signature, &payload)?;

    tracing::debug!(
        serial = params.serial,
        payload_len = payload.len(),
        message_len = message.len(),
        named = params.name.is_some(),
        "built item message"
    );

    Ok(Fixture {
        name: params.name.map(<[u8]>::to_vec),
        serial: params.serial,
        payload,
        signature,
        message,
    })
}
