//! Outbound byte sinks.

use crate::error::{Error, Result};
use crate::receiver::SysExReceiver;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Destination for composed SysEx messages.
///
/// Implementations must preserve send order.
pub trait SysExSink: Send + Sync {
    fn send_bytes(&self, bytes: Vec<u8>) -> Result<()>;

    fn is_connected(&self) -> bool;

    /// Closes the connection. Later sends fail with `NotConnected`.
    fn disconnect(&self) {}
}

type Responder = Arc<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

/// In-process sink that records every message.
///
/// Optionally answers messages through a [`SysExReceiver`], standing in for
/// a synth that replies to RQ1 with DT1.
#[derive(Clone)]
pub struct LoopbackSink {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    connected: Arc<AtomicBool>,
    reply: Option<(SysExReceiver, Responder)>,
}

impl LoopbackSink {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            connected: Arc::new(AtomicBool::new(true)),
            reply: None,
        }
    }

    pub fn with_responder(
        receiver: SysExReceiver,
        respond: impl Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Some((receiver, Arc::new(respond))),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().clone()
    }

    pub fn take_sent(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *self.sent.lock())
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

impl Default for LoopbackSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SysExSink for LoopbackSink {
    fn send_bytes(&self, bytes: Vec<u8>) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        let reply = self.reply.as_ref().and_then(|(receiver, respond)| {
            respond(&bytes).map(|response| (receiver, response))
        });
        self.sent.lock().push(bytes);
        if let Some((receiver, response)) = reply {
            debug!(len = response.len(), "Loopback reply");
            receiver.on_bytes(&response);
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn disconnect(&self) {
        self.set_connected(false);
    }
}

impl std::fmt::Debug for LoopbackSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackSink")
            .field("sent", &self.sent.lock().len())
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
