//! Integration tests for jdxi-midi-io.
//!
//! These tests exercise sink and receiver together without hardware MIDI devices.

use jdxi_midi_io::{Error, LoopbackSink, SysExReceiver, SysExSink};
use jdxi_sysex::address::{ANALOG_SYNTH, DIGITAL_SYNTH_1};
use jdxi_sysex::{compose_write, parse, Command, MessageComposer, MessageParser, PartType};
use std::sync::Arc;
use std::thread;

// ---------------------------------------------------------------------------
// 1. Request / reply through a loopback
// ---------------------------------------------------------------------------

/// An RQ1 sent to the loopback comes back as a DT1 on the receiver's channel.
#[test]
fn test_request_reply_round_trip() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (receiver, replies) = SysExReceiver::channel(8);
    let sink = LoopbackSink::with_responder(receiver, |bytes| {
        let request = parse(bytes).ok()?;
        (request.command == Command::Read)
            .then(|| compose_write(request.address, 0x40).ok())
            .flatten()
    });

    let request = MessageComposer::default().compose_request(ANALOG_SYNTH, PartType::Analog.block_size());
    sink.send_bytes(request.clone()).unwrap();

    let reply = replies.try_recv().unwrap();
    assert_eq!(reply.command, Command::Write);
    assert_eq!(reply.address, ANALOG_SYNTH);
    assert_eq!(reply.value(), Some(0x40));
    assert_eq!(sink.sent(), vec![request]);

    // DT1 is not answered
    sink.send_bytes(compose_write(ANALOG_SYNTH, 1).unwrap()).unwrap();
    assert!(replies.try_recv().is_err());
}

/// Replies for a different device id are dropped by the receiver's parser.
#[test]
fn test_receiver_filters_device_id() {
    let (receiver, replies) = SysExReceiver::channel(8);
    let receiver = receiver.with_parser(MessageParser::new(0x11));

    assert!(!receiver.on_bytes(&compose_write(DIGITAL_SYNTH_1, 5).unwrap()));
    let composer = MessageComposer::new(0x11).unwrap();
    assert!(receiver.on_bytes(&composer.compose_write(DIGITAL_SYNTH_1, 5).unwrap()));
    assert_eq!(replies.try_iter().count(), 1);
}

// ---------------------------------------------------------------------------
// 2. Connection state
// ---------------------------------------------------------------------------

#[test]
fn test_disconnect_rejects_sends() {
    let sink = LoopbackSink::new();
    let shared: Arc<dyn SysExSink> = Arc::new(sink.clone());
    shared.send_bytes(compose_write(ANALOG_SYNTH, 1).unwrap()).unwrap();

    shared.disconnect();
    assert!(!sink.is_connected());
    assert!(matches!(
        shared.send_bytes(compose_write(ANALOG_SYNTH, 2).unwrap()),
        Err(Error::NotConnected)
    ));
    assert_eq!(sink.sent().len(), 1);
}

/// Sends from several threads all land, each thread's in order.
#[test]
fn test_concurrent_senders() {
    let sink = LoopbackSink::new();
    let handles: Vec<_> = (0..4u8)
        .map(|t| {
            let sink = sink.clone();
            thread::spawn(move || {
                for value in 0..16u8 {
                    let address = ANALOG_SYNTH.parameter(0x16 + t).unwrap();
                    sink.send_bytes(compose_write(address, value).unwrap()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let sent = sink.take_sent();
    assert_eq!(sent.len(), 64);
    for t in 0..4u8 {
        let values: Vec<u8> = sent
            .iter()
            .map(|bytes| parse(bytes).unwrap())
            .filter(|m| m.address.lsb() == 0x16 + t)
            .filter_map(|m| m.value())
            .collect();
        assert_eq!(values, (0..16).collect::<Vec<u8>>());
    }
    assert!(sink.sent().is_empty());
}
