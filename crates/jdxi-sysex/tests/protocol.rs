//! Protocol-level tests for jdxi-sysex.
//!
//! Properties over arbitrary inputs plus compose -> parse -> convert flows
//! that cross module boundaries.

use jdxi_sysex::{
    address::{offsets, DIGITAL_SYNTH_1},
    checksum, compose_write, parse, validate_checksum, AddressMap, AddressOffset, Command,
    DigitalPartialParam, Error, Parameter, PartType, ProtocolError, SysExAddress,
};
use proptest::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn valid_byte() -> impl Strategy<Value = u8> {
    0u8..=0x7F
}

// ---------------------------------------------------------------------------
// 1. Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn test_checksum_invariant(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
        prop_assert_eq!((sum + checksum(&bytes) as u32) % 128, 0);

        let mut with_checksum = bytes.clone();
        with_checksum.push(checksum(&bytes));
        prop_assert!(validate_checksum(&with_checksum));
    }

    #[test]
    fn test_address_round_trip(
        msb in valid_byte(),
        umb in valid_byte(),
        lmb in valid_byte(),
        lsb in valid_byte(),
    ) {
        let addr = SysExAddress::new(msb, umb, lmb, lsb).unwrap();
        prop_assert_eq!(addr.as_bytes(), [msb, umb, lmb, lsb]);
    }

    #[test]
    fn test_offset_composition(
        msb in valid_byte(),
        base in (valid_byte(), valid_byte(), valid_byte()),
        d1 in (0u8..0x40, 0u8..0x40, 0u8..0x40),
        d2 in (0u8..0x40, 0u8..0x40, 0u8..0x40),
    ) {
        let addr = SysExAddress::new(msb, base.0, base.1, base.2).unwrap();
        let (d1, d2) = (AddressOffset::from(d1), AddressOffset::from(d2));
        let stepwise = addr.with_offset(d1).and_then(|a| a.with_offset(d2));
        let combined = addr.with_offset(d1 + d2);
        if let Ok(stepwise) = stepwise {
            prop_assert_eq!(combined, Ok(stepwise));
        } else {
            prop_assert!(combined.is_err());
        }
    }

    #[test]
    fn test_compose_parse_round_trip(
        addr in (valid_byte(), valid_byte(), valid_byte(), valid_byte()),
        value in valid_byte(),
    ) {
        let addr = SysExAddress::new(addr.0, addr.1, addr.2, addr.3).unwrap();
        let message = parse(&compose_write(addr, value).unwrap()).unwrap();
        prop_assert_eq!(message.command, Command::Write);
        prop_assert_eq!(message.address, addr);
        prop_assert_eq!(message.payload, vec![value]);
    }

    #[test]
    fn test_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse(&bytes);
    }

    #[test]
    fn test_truncation_is_too_short(len in 0usize..14) {
        let bytes = compose_write(DIGITAL_SYNTH_1, 0x40).unwrap();
        prop_assert_eq!(
            parse(&bytes[..len]),
            Err(ProtocolError::TooShort { len, min: 14 })
        );
    }

    #[test]
    fn test_header_corruption(index in 0usize..7, byte in any::<u8>()) {
        let mut bytes = compose_write(DIGITAL_SYNTH_1, 0x40).unwrap();
        prop_assume!(bytes[index] != byte);
        bytes[index] = byte;
        prop_assert_eq!(parse(&bytes), Err(ProtocolError::BadHeader));
    }

    /// A flip that keeps the byte 7-bit only breaks the checksum.
    #[test]
    fn test_flipped_7bit_data_byte_is_checksum_mismatch(
        index in 8usize..13,
        flip in 1u8..0x80,
    ) {
        let mut bytes = compose_write(
            SysExAddress::new(0x19, 0x42, 0x00, 0x2A).unwrap(),
            0x33,
        )
        .unwrap();
        bytes[index] ^= flip;
        let is_mismatch = matches!(parse(&bytes), Err(ProtocolError::ChecksumMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// Setting bit 7 is caught by the data byte check, before the checksum.
    #[test]
    fn test_high_bit_data_byte_is_invalid_data_byte(
        index in 8usize..14,
        flip in 0x80u8..=0xFF,
    ) {
        let mut bytes = compose_write(
            SysExAddress::new(0x19, 0x42, 0x00, 0x2A).unwrap(),
            0x33,
        )
        .unwrap();
        bytes[index] ^= flip;
        prop_assert_eq!(
            parse(&bytes),
            Err(ProtocolError::InvalidDataByte { index, byte: bytes[index] })
        );
    }
}

// ---------------------------------------------------------------------------
// 2. End-to-end flows
// ---------------------------------------------------------------------------

/// Write a bipolar value into Digital 1, parse it back and convert for display.
#[test]
fn test_digital_write_end_to_end() {
    init_logging();
    let addr = SysExAddress::new(0x19, 0x01, 0x00, 0x21).unwrap();
    let bytes = compose_write(addr, 100).unwrap();
    assert_eq!(bytes.len(), 15);

    let message = parse(&bytes).unwrap();
    assert_eq!(message.command, Command::Write);
    assert_eq!(message.address, addr);
    assert_eq!(message.payload, vec![100]);

    let pitch_env = DigitalPartialParam::OscPitchEnvDepth.descriptor();
    assert!(pitch_env.bipolar);
    assert_eq!(pitch_env.converter().to_display(100), 36);
}

/// Edit a partial parameter by name and attribute the echoed DT1 back to it.
#[test]
fn test_named_parameter_through_address_map() {
    init_logging();
    let base = DIGITAL_SYNTH_1
        .with_offset(offsets::DIGITAL_PARTIAL_2)
        .unwrap();
    let descriptor = PartType::DigitalPartial.by_name("OSC_PITCH").unwrap();
    let raw = descriptor.converter().to_midi(-12).unwrap();
    assert_eq!(raw, 52);

    let bytes = compose_write(descriptor.address(base).unwrap(), raw).unwrap();
    let message = parse(&bytes).unwrap();

    let location = AddressMap::locate(message.address).unwrap();
    assert_eq!(location.part, PartType::DigitalPartial);
    assert_eq!(location.base, base);
    let echoed = location.descriptor().unwrap();
    assert_eq!(echoed.name, "OSC_PITCH");
    assert_eq!(echoed.converter().to_display(message.value().unwrap()), -12);
}

#[test]
fn test_out_of_range_edit_is_rejected_before_composing() {
    let err = DigitalPartialParam::OscPitch
        .descriptor()
        .converter()
        .to_midi(30)
        .unwrap_err();
    assert_eq!(
        err,
        Error::ValueOutOfRange {
            parameter: "OSC_PITCH",
            value: 30,
            min: -24,
            max: 24,
        }
    );
    assert!(DigitalPartialParam::OscPitch
        .address(SysExAddress::new(0x19, 0x01, 0x20, 0x7E).unwrap())
        .is_err());
}
