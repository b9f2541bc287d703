//! Turns decoded DT1 messages into parameter events for the UI.
//!
//! A DT1 may carry one value or a whole block (the reply to an RQ1). Payload
//! byte `i` belongs to offset `o + i`, where `o` is the offset of the message
//! address. Four-byte parameters consume four payload bytes. Offsets with no
//! parameter are skipped.

use jdxi_sysex::{
    message::Command, parameter::wide::decode_nibbles, AddressMap, Location, PartType,
    SysExAddress, SysExMessage,
};
use serde::Serialize;
use tracing::{debug, trace};

/// One parameter value reported by the synth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterEvent {
    pub part: PartType,
    /// Base address of the block the parameter lives in.
    pub base: SysExAddress,
    pub parameter: &'static str,
    /// Wire value; above 7Fh only for four-byte parameters.
    pub raw: u16,
    pub display: i32,
    /// Label of an enumerated value.
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InboundDecoder;

impl InboundDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, message: &SysExMessage) -> Vec<ParameterEvent> {
        if message.command != Command::Write {
            debug!(address = %message.address, "Ignoring inbound RQ1");
            return Vec::new();
        }
        let Some(start) = AddressMap::locate(message.address) else {
            debug!(address = %message.address, "DT1 outside known parameter blocks");
            return Vec::new();
        };

        let payload = &message.payload;
        let mut events = Vec::new();
        let mut i = 0;
        while i < payload.len() {
            let Some(location) = start.advance(i) else {
                trace!(
                    address = %message.address,
                    remaining = payload.len() - i,
                    "Payload runs past the block's 7-bit offset range"
                );
                break;
            };
            i += match decode_at(&location, &payload[i..]) {
                Some((event, consumed)) => {
                    events.push(event);
                    consumed
                }
                None => 1,
            };
        }
        events
    }
}

/// Event for the parameter at `location`, and how many payload bytes it used.
fn decode_at(location: &Location, data: &[u8]) -> Option<(ParameterEvent, usize)> {
    if let Some(wide) = location.wide_parameter() {
        if let Some(&[a, b, c, d]) = data.get(..4) {
            return match decode_nibbles([a, b, c, d]) {
                Ok(raw) => Some((
                    ParameterEvent {
                        part: location.part,
                        base: location.base,
                        parameter: wide.name,
                        raw,
                        display: wide.to_display(raw),
                        label: None,
                    },
                    4,
                )),
                Err(e) => {
                    debug!(parameter = wide.name, error = %e, "Bad nibble data");
                    None
                }
            };
        }
        trace!(parameter = wide.name, "Truncated four-byte parameter");
        return None;
    }

    let descriptor = location.descriptor().ok()?;
    let raw = *data.first()?;
    let converter = descriptor.converter();
    Some((
        ParameterEvent {
            part: location.part,
            base: location.base,
            parameter: descriptor.name,
            raw: raw as u16,
            display: converter.to_display(raw),
            label: converter.label(raw),
        },
        1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdxi_sysex::address::{offsets, ANALOG_SYNTH, DIGITAL_SYNTH_1, TEMPORARY_PROGRAM};
    use jdxi_sysex::{parse, MessageComposer};

    fn write_block(address: SysExAddress, data: &[u8]) -> SysExMessage {
        let bytes = MessageComposer::default()
            .compose_write_block(address, data)
            .unwrap();
        parse(&bytes).unwrap()
    }

    #[test]
    fn test_single_value() {
        let message = write_block(ANALOG_SYNTH.parameter(0x20).unwrap(), &[76]);
        let events = InboundDecoder::new().decode(&message);
        assert_eq!(
            events,
            vec![ParameterEvent {
                part: PartType::Analog,
                base: ANALOG_SYNTH,
                parameter: "OSC_PITCH_COARSE",
                raw: 76,
                display: 12,
                label: None,
            }]
        );
    }

    #[test]
    fn test_bulk_block_skips_reserved_offsets() {
        let base = DIGITAL_SYNTH_1
            .with_offset(offsets::DIGITAL_PARTIAL_1)
            .unwrap();
        // OSC_WAVE, OSC_WAVE_VARIATION, reserved, OSC_PITCH
        let message = write_block(base, &[3, 1, 0, 52]);
        let events = InboundDecoder::new().decode(&message);
        let names: Vec<_> = events.iter().map(|e| e.parameter).collect();
        assert_eq!(names, vec!["OSC_WAVE", "OSC_WAVE_VARIATION", "OSC_PITCH"]);
        assert_eq!(events[0].label, Some("TRI"));
        assert_eq!(events[2].display, -12);
    }

    #[test]
    fn test_wide_parameter_in_bulk() {
        let base = TEMPORARY_PROGRAM;
        let message = write_block(base.parameter(0x10).unwrap(), &[100, 0x02, 0x0E, 0x0E, 0x00]);
        let events = InboundDecoder::new().decode(&message);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].parameter, "PROGRAM_LEVEL");
        assert_eq!(events[1].parameter, "PROGRAM_TEMPO");
        assert_eq!(events[1].raw, 12000);
        assert_eq!(events[1].display, 12000);
    }

    #[test]
    fn test_truncated_wide_parameter_is_skipped() {
        let message = write_block(TEMPORARY_PROGRAM.parameter(0x11).unwrap(), &[0x02, 0x0E]);
        assert!(InboundDecoder::new().decode(&message).is_empty());
    }

    #[test]
    fn test_read_and_unknown_addresses_ignored() {
        let request = parse(
            &MessageComposer::default().compose_request(ANALOG_SYNTH, PartType::Analog.block_size()),
        )
        .unwrap();
        assert!(InboundDecoder::new().decode(&request).is_empty());

        let system = write_block(jdxi_sysex::address::SYSTEM, &[1, 2, 3]);
        assert!(InboundDecoder::new().decode(&system).is_empty());
    }

    #[test]
    fn test_stops_at_end_of_offset_range() {
        let message = write_block(ANALOG_SYNTH.parameter(0x7E).unwrap(), &[0, 0, 0, 0]);
        assert!(InboundDecoder::new().decode(&message).is_empty());
    }
}
