//! Hardware tests against a connected JD-Xi.
//!
//! Requires the synth on USB with its MIDI ports visible as "JD-Xi".
//! All tests are `#[ignore]` so CI doesn't fail without hardware.
//!
//! Run with:
//!   cargo test -p jdxi-midi-io --test hardware -- --ignored --test-threads=1

#![cfg(feature = "midi-io")]

use crossbeam_channel::Receiver;
use jdxi_midi_io::{MidiInputManager, MidiOutputManager, SysExReceiver, SysExSink};
use jdxi_sysex::address::ANALOG_SYNTH;
use jdxi_sysex::{Command, MessageComposer, PartType, SysExMessage};
use std::thread;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PORT_NAME: &str = "JD-Xi";
const CONNECT_SETTLE: Duration = Duration::from_millis(200);
const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

fn connect() -> (MidiOutputManager, MidiInputManager, Receiver<SysExMessage>) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
    let output = MidiOutputManager::new().expect("Failed to start output thread");
    output
        .connect_by_name(PORT_NAME)
        .expect("JD-Xi output not found. Connect the synth over USB");

    let (receiver, messages) = SysExReceiver::channel(256);
    let input = MidiInputManager::new(receiver).expect("Failed to start input thread");
    input
        .connect_by_name(PORT_NAME)
        .expect("JD-Xi input not found");

    thread::sleep(CONNECT_SETTLE);
    assert!(output.is_connected());
    assert!(input.is_connected());
    while messages.try_recv().is_ok() {}
    (output, input, messages)
}

// ===========================================================================
// Group 1: Requests
// ===========================================================================

#[test]
#[ignore]
fn test_analog_block_request() {
    let (output, _input, messages) = connect();
    let request = MessageComposer::default().compose_request(ANALOG_SYNTH, PartType::Analog.block_size());
    output.send_bytes(request).unwrap();

    let reply = messages
        .recv_timeout(REPLY_TIMEOUT)
        .expect("No reply to analog RQ1");
    assert_eq!(reply.command, Command::Write);
    assert_eq!(reply.address, ANALOG_SYNTH);
    assert_eq!(reply.payload.len(), PartType::Analog.block_size().len());
}

// ===========================================================================
// Group 2: Connection lifecycle
// ===========================================================================

#[test]
#[ignore]
fn test_disconnect_and_reconnect() {
    let (output, input, _messages) = connect();
    output.disconnect();
    input.disconnect();
    thread::sleep(CONNECT_SETTLE);
    assert!(!output.is_connected());
    assert!(output.connected_device_name().is_none());

    let name = output.connect_by_name(PORT_NAME).unwrap();
    assert!(name.contains(PORT_NAME));
    assert!(output.is_connected());
}

#[test]
#[ignore]
fn test_device_listing() {
    let outputs = MidiOutputManager::list_devices();
    let inputs = MidiInputManager::list_devices();
    assert!(outputs.iter().any(|d| d.name.contains(PORT_NAME)));
    assert!(inputs.iter().any(|d| d.name.contains(PORT_NAME)));
}
