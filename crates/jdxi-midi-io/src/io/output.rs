//! SysEx output: device enumeration, connection, and sending via a dedicated thread.

use crate::error::{Error, Result};
use crate::sink::SysExSink;
use arc_swap::ArcSwap;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use midir::{MidiOutput, MidiOutputConnection};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const COMMAND_CAPACITY: usize = 1024;
const CLIENT_NAME: &str = "jdxi-editor-output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiOutputDevice {
    pub index: usize,
    pub name: String,
}

enum OutputCommand {
    Connect(usize, Sender<Result<String>>),
    Disconnect,
    Send(Vec<u8>),
    Shutdown,
}

/// Owns the midir output connection on the `jdxi-midi-output` thread.
///
/// Messages are queued on a bounded channel and written in send order.
pub struct MidiOutputManager {
    command_sender: Sender<OutputCommand>,
    connected_device: Arc<ArcSwap<Option<String>>>,
    is_connected: Arc<AtomicBool>,
}

impl MidiOutputManager {
    pub fn new() -> Result<Self> {
        let (command_sender, command_receiver) = bounded(COMMAND_CAPACITY);
        let connected_device = Arc::new(ArcSwap::new(Arc::new(None)));
        let is_connected = Arc::new(AtomicBool::new(false));

        let connected_device_clone = Arc::clone(&connected_device);
        let is_connected_clone = Arc::clone(&is_connected);

        thread::Builder::new()
            .name("jdxi-midi-output".to_string())
            .spawn(move || {
                Self::output_thread(command_receiver, connected_device_clone, is_connected_clone);
            })
            .map_err(|e| Error::MidiDevice(format!("Failed to spawn MIDI output thread: {}", e)))?;

        Ok(Self {
            command_sender,
            connected_device,
            is_connected,
        })
    }

    fn output_thread(
        command_receiver: Receiver<OutputCommand>,
        connected_device: Arc<ArcSwap<Option<String>>>,
        is_connected: Arc<AtomicBool>,
    ) {
        let mut connection: Option<MidiOutputConnection> = None;

        let release = |connection: &mut Option<MidiOutputConnection>| {
            if let Some(conn) = connection.take() {
                conn.close();
                is_connected.store(false, Ordering::SeqCst);
                connected_device.store(Arc::new(None));
            }
        };

        loop {
            match command_receiver.recv_timeout(Duration::from_millis(100)) {
                Ok(OutputCommand::Connect(device_index, reply)) => {
                    release(&mut connection);
                    let result = Self::connect_to_device(device_index).map(|(conn, name)| {
                        connection = Some(conn);
                        is_connected.store(true, Ordering::SeqCst);
                        connected_device.store(Arc::new(Some(name.clone())));
                        name
                    });
                    match &result {
                        Ok(name) => info!(device = %name, "MIDI output connected"),
                        Err(e) => warn!(error = %e, "MIDI output connection failed"),
                    }
                    let _ = reply.send(result);
                }
                Ok(OutputCommand::Disconnect) => {
                    release(&mut connection);
                    info!("MIDI output disconnected");
                }
                Ok(OutputCommand::Send(bytes)) => match connection.as_mut() {
                    Some(conn) => {
                        if let Err(e) = conn.send(&bytes) {
                            warn!(error = %e, len = bytes.len(), "Failed to send SysEx");
                        }
                    }
                    None => debug!("Cannot send SysEx: no device connected"),
                },
                Ok(OutputCommand::Shutdown) => {
                    release(&mut connection);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn connect_to_device(device_index: usize) -> Result<(MidiOutputConnection, String)> {
        let midi_output = MidiOutput::new(CLIENT_NAME)?;

        let ports = midi_output.ports();
        let port = ports.get(device_index).ok_or_else(|| {
            Error::MidiDevice(format!("MIDI output device {} not found", device_index))
        })?;

        let port_name = midi_output
            .port_name(port)
            .unwrap_or_else(|_| format!("Device {}", device_index));

        let connection = midi_output.connect(port, "jdxi-output")?;

        Ok((connection, port_name))
    }

    pub fn list_devices() -> Vec<MidiOutputDevice> {
        let mut devices = Vec::new();
        if let Ok(midi_output) = MidiOutput::new("jdxi-device-list") {
            for (index, port) in midi_output.ports().iter().enumerate() {
                let name = midi_output
                    .port_name(port)
                    .unwrap_or_else(|_| format!("Unknown Device {}", index));
                devices.push(MidiOutputDevice { index, name });
            }
        }
        devices
    }

    /// Blocks until the output thread has opened the port. Returns the
    /// port name.
    pub fn connect(&self, device_index: usize) -> Result<String> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_sender
            .send(OutputCommand::Connect(device_index, reply_tx))
            .map_err(|_| Error::ChannelClosed)?;
        reply_rx.recv().map_err(|_| Error::ChannelClosed)?
    }

    /// Connects to the first device whose name contains `name`, ignoring case.
    pub fn connect_by_name(&self, name: &str) -> Result<String> {
        let needle = name.to_lowercase();
        let device = Self::list_devices()
            .into_iter()
            .find(|d| d.name.to_lowercase().contains(&needle))
            .ok_or_else(|| {
                Error::MidiDevice(format!("No MIDI output device found matching '{}'", name))
            })?;
        self.connect(device.index)
    }

    pub fn connected_device_name(&self) -> Option<String> {
        self.connected_device.load().as_ref().clone()
    }
}

impl SysExSink for MidiOutputManager {
    fn send_bytes(&self, bytes: Vec<u8>) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        match self.command_sender.try_send(OutputCommand::Send(bytes)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                debug!("MIDI output command channel full");
                Err(Error::ChannelFull)
            }
            Err(TrySendError::Disconnected(_)) => Err(Error::ChannelClosed),
        }
    }

    fn is_connected(&self) -> bool {
        self.is_connected.load(Ordering::SeqCst)
    }

    fn disconnect(&self) {
        // Sends after this point fail with NotConnected.
        self.is_connected.store(false, Ordering::SeqCst);
        let _ = self.command_sender.send(OutputCommand::Disconnect);
    }
}

impl Drop for MidiOutputManager {
    fn drop(&mut self) {
        let _ = self.command_sender.send(OutputCommand::Shutdown);
    }
}
