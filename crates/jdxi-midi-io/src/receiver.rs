//! Inbound SysEx decoding.
//!
//! [`SysExReceiver`] is what a MIDI input callback calls with raw bytes. It
//! drops everything that is not a JD-Xi SysEx message, parses the rest and
//! hands each decoded message to a handler on the calling thread. No locks are
//! taken, so it is safe to run on the driver's callback thread.

use crossbeam_channel::{bounded, Receiver, TrySendError};
use jdxi_sysex::message::SYSEX_START;
use jdxi_sysex::{MessageParser, SysExMessage};
use std::sync::Arc;
use tracing::{debug, warn};

type Handler = Arc<dyn Fn(SysExMessage) + Send + Sync>;

#[derive(Clone)]
pub struct SysExReceiver {
    parser: MessageParser,
    handler: Handler,
}

impl SysExReceiver {
    pub fn new(handler: impl Fn(SysExMessage) + Send + Sync + 'static) -> Self {
        Self {
            parser: MessageParser::default(),
            handler: Arc::new(handler),
        }
    }

    /// Receiver that forwards decoded messages into a bounded channel.
    /// Messages arriving while the channel is full are dropped.
    pub fn channel(capacity: usize) -> (Self, Receiver<SysExMessage>) {
        let (tx, rx) = bounded(capacity);
        let receiver = Self::new(move |message| match tx.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                debug!(address = %message.address, "SysEx queue full, dropping message");
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("SysEx queue closed, dropping message");
            }
        });
        (receiver, rx)
    }

    pub fn with_parser(mut self, parser: MessageParser) -> Self {
        self.parser = parser;
        self
    }

    /// Returns true if the bytes decoded into a message.
    pub fn on_bytes(&self, bytes: &[u8]) -> bool {
        if bytes.first() != Some(&SYSEX_START) {
            debug!(len = bytes.len(), "Ignoring non-SysEx MIDI message");
            return false;
        }
        match self.parser.parse(bytes) {
            Ok(message) => {
                (self.handler)(message);
                true
            }
            Err(e) => {
                warn!(error = %e, len = bytes.len(), "Dropping malformed SysEx message");
                false
            }
        }
    }
}

impl std::fmt::Debug for SysExReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysExReceiver")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdxi_sysex::{address::ANALOG_SYNTH, compose_write, Command};

    #[test]
    fn test_decodes_into_channel() {
        let (receiver, rx) = SysExReceiver::channel(8);
        let bytes = compose_write(ANALOG_SYNTH.parameter(0x2A).unwrap(), 0x40).unwrap();

        assert!(receiver.on_bytes(&bytes));
        let message = rx.try_recv().unwrap();
        assert_eq!(message.command, Command::Write);
        assert_eq!(message.value(), Some(0x40));
    }

    #[test]
    fn test_ignores_channel_messages() {
        let (receiver, rx) = SysExReceiver::channel(8);
        assert!(!receiver.on_bytes(&[0x90, 60, 100]));
        assert!(!receiver.on_bytes(&[]));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drops_malformed_and_continues() {
        let (receiver, rx) = SysExReceiver::channel(8);
        let good = compose_write(ANALOG_SYNTH, 0x01).unwrap();
        let mut corrupt = good.clone();
        corrupt[12] = 0x02;

        assert!(!receiver.on_bytes(&corrupt));
        assert!(!receiver.on_bytes(&good[..10]));
        assert!(receiver.on_bytes(&good));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_full_queue_drops() {
        let (receiver, rx) = SysExReceiver::channel(1);
        let bytes = compose_write(ANALOG_SYNTH, 0x01).unwrap();
        assert!(receiver.on_bytes(&bytes));
        assert!(receiver.on_bytes(&bytes));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_preserves_arrival_order() {
        let (receiver, rx) = SysExReceiver::channel(128);
        for value in 0..100u8 {
            let bytes = compose_write(ANALOG_SYNTH.parameter(0x33).unwrap(), value).unwrap();
            receiver.on_bytes(&bytes);
        }
        let values: Vec<u8> = rx.try_iter().filter_map(|m| m.value()).collect();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }
}
