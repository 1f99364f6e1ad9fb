#![no_main]

use libfuzzer_sys::fuzz_target;
use udpcraft_protocol::vectors::REFERENCE_KEY;
use udpcraft_protocol::{build_fixture, verify_message, FixtureParams, MemoryStore};

fuzz_target!(|data: &[u8]| {
    let mut store = MemoryStore::new(REFERENCE_KEY, 0);
    if let Ok(verified) = verify_message(&mut store, data) {
        let rebuilt = build_fixture(&FixtureParams {
            key: REFERENCE_KEY,
            serial: verified.serial,
            data: &verified.data,
            name: Some(verified.portal_name.as_bytes()),
        });
        assert_eq!(rebuilt.ok().map(|f| f.into_message()), Some(data.to_vec()));
        assert!(verify_message(&mut store, data).is_err());
    }
});
