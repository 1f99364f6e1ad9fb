use hmac::Mac;

use crate::message::{HmacSha256, SERIAL_LEN, SIGNATURE_LEN};
use crate::store::SignatureDataStore;

const MIN_PORTAL_NAME_LEN: usize = 3;
const MAX_PORTAL_NAME_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedMessage {
    pub portal_name: String,
    pub serial: i32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("message truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("invalid portal name")]
    InvalidPortalName,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("serial {serial} is already void")]
    SerialAlreadyVoid { serial: i32 },
    /// Unreachable with SHA-256, which accepts keys of any length.
    #[error("hmac key rejected")]
    InvalidKey,
}

/// Portal names are 3 to 16 characters of `[0-9A-Za-z_/]`.
pub fn is_valid_portal_name(name: &[u8]) -> bool {
    (MIN_PORTAL_NAME_LEN..=MAX_PORTAL_NAME_LEN).contains(&name.len())
        && name
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'/')
}

fn ensure_len(message: &[u8], needed: usize) -> Result<(), VerifyError> {
    if message.len() < needed {
        return Err(VerifyError::Truncated {
            needed,
            actual: message.len(),
        });
    }
    Ok(())
}

/// Checks a named message against the store's secret and consumes its
/// serial. The portal name is not covered by the signature, so a message
/// re-framed under another valid name is accepted.
pub fn verify_message<S: SignatureDataStore + ?Sized>(
    store: &mut S,
    message: &[u8],
) -> Result<VerifiedMessage, VerifyError> {
    ensure_len(message, 1)?;
    let name_len = usize::from(message[0]);
    let name_end = 1 + name_len;
    ensure_len(message, name_end)?;

    let name = &message[1..name_end];
    if !is_valid_portal_name(name) {
        return Err(VerifyError::InvalidPortalName);
    }
    let portal_name: String = name.iter().map(|&b| char::from(b)).collect();

    let mac_end = name_end + SIGNATURE_LEN;
    ensure_len(message, mac_end + SERIAL_LEN)?;
    let expected = &message[name_end..mac_end];
    let signed = &message[mac_end..];

    let mut mac = HmacSha256::new_from_slice(store.secret()).map_err(|_| VerifyError::InvalidKey)?;
    mac.update(signed);
    if mac.verify_slice(expected).is_err() {
        tracing::warn!(portal = %portal_name, "item message signature verification failed");
        return Err(VerifyError::InvalidSignature);
    }

    let (serial_bytes, data) = signed.split_at(SERIAL_LEN);
    let serial = i32::from_be_bytes([
        serial_bytes[0],
        serial_bytes[1],
        serial_bytes[2],
        serial_bytes[3],
    ]);
    if !store.void_serial(serial) {
        tracing::warn!(portal = %portal_name, serial, "rejected replayed item message");
        return Err(VerifyError::SerialAlreadyVoid { serial });
    }

    tracing::debug!(portal = %portal_name, serial, data_len = data.len(), "verified item message");
    Ok(VerifiedMessage {
        portal_name,
        serial,
        data: data.to_vec(),
    })
}
