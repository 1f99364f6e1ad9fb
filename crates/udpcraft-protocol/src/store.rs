use std::collections::HashSet;
use std::fmt;

use crate::message::{build_fixture, Fixture, FixtureError, FixtureParams};

/// Secret and serial bookkeeping shared by the signing and verifying side
/// of a portal.
pub trait SignatureDataStore {
    fn secret(&self) -> &[u8];

    /// Hands out the serial for the next outgoing message.
    fn next_serial(&mut self) -> i32;

    /// Marks `serial` as consumed. Returns `false` if it already was, which
    /// the verifier treats as a replay.
    fn void_serial(&mut self, serial: i32) -> bool;
}

#[derive(Clone)]
pub struct MemoryStore {
    secret: Vec<u8>,
    current_serial: i32,
    voided: HashSet<i32>,
}

impl MemoryStore {
    pub fn new(secret: impl Into<Vec<u8>>, current_serial: i32) -> Self {
        Self {
            secret: secret.into(),
            current_serial,
            voided: HashSet::new(),
        }
    }

    pub fn current_serial(&self) -> i32 {
        self.current_serial
    }

    pub fn is_void(&self, serial: i32) -> bool {
        self.voided.contains(&serial)
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("secret", &"<redacted>")
            .field("current_serial", &self.current_serial)
            .field("voided", &self.voided.len())
            .finish()
    }
}

impl SignatureDataStore for MemoryStore {
    fn secret(&self) -> &[u8] {
        &self.secret
    }

    fn next_serial(&mut self) -> i32 {
        let serial = self.current_serial;
        self.current_serial = serial.wrapping_add(1);
        serial
    }

    fn void_serial(&mut self, serial: i32) -> bool {
        self.voided.insert(serial)
    }
}

/// Signs `data` for the portal `name` under the store's secret, consuming
/// one serial.
pub fn sign_with_store<S: SignatureDataStore + ?Sized>(
    store: &mut S,
    name: &[u8],
    data: &[u8],
) -> Result<Fixture, FixtureError> {
    let serial = store.next_serial();
    build_fixture(&FixtureParams {
        key: store.secret(),
        serial,
        data,
        name: Some(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::{REFERENCE_DATA, REFERENCE_KEY, REFERENCE_PORTAL_NAME};

    #[test]
    fn serials_count_up_and_wrap() {
        let mut store = MemoryStore::new(REFERENCE_KEY, i32::MAX - 1);
        assert_eq!(store.next_serial(), i32::MAX - 1);
        assert_eq!(store.next_serial(), i32::MAX);
        assert_eq!(store.next_serial(), i32::MIN);
        assert_eq!(store.current_serial(), i32::MIN + 1);
    }

    #[test]
    fn voiding_twice_reports_replay() {
        let mut store = MemoryStore::new(REFERENCE_KEY, 0);
        assert!(store.void_serial(5));
        assert!(store.is_void(5));
        assert!(!store.void_serial(5));
        assert!(!store.is_void(6));
    }

    #[test]
    fn store_signing_matches_reference_message() {
        let mut store = MemoryStore::new(REFERENCE_KEY, 1);
        let fixture = sign_with_store(&mut store, REFERENCE_PORTAL_NAME, REFERENCE_DATA)
            .expect("reference data signs");
        let reference =
            build_fixture(&FixtureParams::reference_named()).expect("reference builds");
        assert_eq!(fixture, reference);
        assert_eq!(store.current_serial(), 2);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let store = MemoryStore::new("hunter2", 0);
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
