use proptest::prelude::*;
use udpcraft_protocol::{
    build_fixture, from_signed, signed_byte_dump, to_signed, FixtureParams, SERIAL_LEN,
    SIGNATURE_LEN,
};

proptest! {
    #[test]
    fn unnamed_message_length_and_layout(
        key in proptest::collection::vec(any::<u8>(), 0..80),
        serial in any::<i32>(),
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let fixture = build_fixture(&FixtureParams { key: &key, serial, data: &data, name: None })
            .map_err(|e| TestCaseError::fail(format!("build failed: {e}")))?;

        let serial_be = serial.to_be_bytes();
        prop_assert_eq!(fixture.signature().len(), SIGNATURE_LEN);
        prop_assert_eq!(fixture.message().len(), SIGNATURE_LEN + SERIAL_LEN + data.len());
        prop_assert_eq!(&fixture.message()[SIGNATURE_LEN..SIGNATURE_LEN + SERIAL_LEN], &serial_be[..]);
        prop_assert_eq!(&fixture.message()[SIGNATURE_LEN + SERIAL_LEN..], data.as_slice());
    }

    #[test]
    fn named_message_length_and_prefix(
        serial in any::<i32>(),
        data in proptest::collection::vec(any::<u8>(), 0..128),
        name in proptest::collection::vec(any::<u8>(), 0..=255),
    ) {
        let base = FixtureParams { key: b"foobar", serial, data: &data, name: None };
        let plain = build_fixture(&base)
            .map_err(|e| TestCaseError::fail(format!("build failed: {e}")))?;
        let named = build_fixture(&FixtureParams { name: Some(name.as_slice()), ..base })
            .map_err(|e| TestCaseError::fail(format!("build failed: {e}")))?;

        prop_assert_eq!(named.message().len(), 1 + name.len() + SIGNATURE_LEN + SERIAL_LEN + data.len());
        prop_assert_eq!(usize::from(named.message()[0]), name.len());
        prop_assert_eq!(&named.message()[1..1 + name.len()], name.as_slice());
        prop_assert_eq!(plain.signature(), named.signature());
        prop_assert_eq!(&named.message()[1 + name.len()..], plain.message());
    }

    #[test]
    fn oversized_names_are_rejected(extra in 1usize..64) {
        let name = vec![b'a'; 255 + extra];
        let params = FixtureParams { name: Some(name.as_slice()), ..FixtureParams::reference() };
        prop_assert!(build_fixture(&params).is_err());
    }

    #[test]
    fn signed_remap_round_trips(v in any::<u8>()) {
        let s = to_signed(v);
        prop_assert!((-128..=127).contains(&i16::from(s)));
        prop_assert_eq!(from_signed(s), v);
        prop_assert_eq!(((i16::from(s) + 128) % 256) as u8, v.wrapping_add(128));
    }

    #[test]
    fn dump_groups_sixteen_per_line(bytes in proptest::collection::vec(any::<u8>(), 1..200)) {
        let dump = signed_byte_dump(&bytes, 16);
        let lines: Vec<&str> = dump.split('\n').collect();
        prop_assert_eq!(lines.len(), bytes.len().div_ceil(16));

        let (last, full) = lines.split_last().ok_or_else(|| TestCaseError::fail("no lines"))?;
        for line in full {
            prop_assert!(line.ends_with(','));
            prop_assert_eq!(line.trim_end_matches(',').split(", ").count(), 16);
        }
        prop_assert!(!last.ends_with(','));
        let tail = bytes.len() - 16 * full.len();
        prop_assert_eq!(last.split(", ").count(), tail);

        let parsed: Vec<u8> = dump
            .split(',')
            .map(|t| t.trim().parse::<i8>().map(from_signed))
            .collect::<Result<_, _>>()
            .map_err(|e| TestCaseError::fail(format!("bad dump token: {e}")))?;
        prop_assert_eq!(parsed, bytes);
    }
}
