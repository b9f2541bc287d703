//! SysEx input: device enumeration and a midir connection feeding a
//! [`SysExReceiver`].

use crate::error::{Error, Result};
use crate::receiver::SysExReceiver;
use arc_swap::ArcSwap;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use midir::{Ignore, MidiInput, MidiInputConnection};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

const CLIENT_NAME: &str = "jdxi-editor-input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiInputDevice {
    pub index: usize,
    pub name: String,
}

enum InputCommand {
    Connect(usize, Sender<Result<String>>),
    Disconnect,
    Shutdown,
}

/// Owns the midir input connection on the `jdxi-midi-input` thread. The
/// driver callback decodes SysEx through the receiver.
pub struct MidiInputManager {
    command_sender: Sender<InputCommand>,
    connected_device: Arc<ArcSwap<Option<String>>>,
    is_connected: Arc<AtomicBool>,
}

impl MidiInputManager {
    pub fn new(receiver: SysExReceiver) -> Result<Self> {
        let (command_sender, command_receiver) = bounded(16);
        let connected_device = Arc::new(ArcSwap::new(Arc::new(None)));
        let is_connected = Arc::new(AtomicBool::new(false));

        let connected_device_clone = Arc::clone(&connected_device);
        let is_connected_clone = Arc::clone(&is_connected);

        thread::Builder::new()
            .name("jdxi-midi-input".to_string())
            .spawn(move || {
                Self::input_thread(
                    command_receiver,
                    receiver,
                    connected_device_clone,
                    is_connected_clone,
                );
            })
            .map_err(|e| Error::MidiDevice(format!("Failed to spawn MIDI input thread: {}", e)))?;

        Ok(Self {
            command_sender,
            connected_device,
            is_connected,
        })
    }

    fn input_thread(
        command_receiver: Receiver<InputCommand>,
        receiver: SysExReceiver,
        connected_device: Arc<ArcSwap<Option<String>>>,
        is_connected: Arc<AtomicBool>,
    ) {
        let mut connection: Option<MidiInputConnection<()>> = None;

        let release = |connection: &mut Option<MidiInputConnection<()>>| {
            if let Some(conn) = connection.take() {
                conn.close();
                is_connected.store(false, Ordering::SeqCst);
                connected_device.store(Arc::new(None));
            }
        };

        loop {
            match command_receiver.recv_timeout(Duration::from_millis(100)) {
                Ok(InputCommand::Connect(device_index, reply)) => {
                    release(&mut connection);
                    let result = Self::connect_to_device(device_index, receiver.clone()).map(
                        |(conn, name)| {
                            connection = Some(conn);
                            is_connected.store(true, Ordering::SeqCst);
                            connected_device.store(Arc::new(Some(name.clone())));
                            name
                        },
                    );
                    match &result {
                        Ok(name) => info!(device = %name, "MIDI input connected"),
                        Err(e) => warn!(error = %e, "MIDI input connection failed"),
                    }
                    let _ = reply.send(result);
                }
                Ok(InputCommand::Disconnect) => {
                    release(&mut connection);
                    info!("MIDI input disconnected");
                }
                Ok(InputCommand::Shutdown) => {
                    release(&mut connection);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn connect_to_device(
        device_index: usize,
        receiver: SysExReceiver,
    ) -> Result<(MidiInputConnection<()>, String)> {
        let mut midi_input = MidiInput::new(CLIENT_NAME)?;
        // SysEx is filtered out by default.
        midi_input.ignore(Ignore::None);

        let ports = midi_input.ports();
        let port = ports.get(device_index).ok_or_else(|| {
            Error::MidiDevice(format!("MIDI input device {} not found", device_index))
        })?;

        let port_name = midi_input
            .port_name(port)
            .unwrap_or_else(|_| format!("Device {}", device_index));

        let connection = midi_input.connect(
            port,
            "jdxi-input",
            move |_timestamp, message, _| {
                receiver.on_bytes(message);
            },
            (),
        )?;

        Ok((connection, port_name))
    }

    pub fn list_devices() -> Vec<MidiInputDevice> {
        let mut devices = Vec::new();
        if let Ok(midi_input) = MidiInput::new("jdxi-device-list") {
            for (index, port) in midi_input.ports().iter().enumerate() {
                let name = midi_input
                    .port_name(port)
                    .unwrap_or_else(|_| format!("Unknown Device {}", index));
                devices.push(MidiInputDevice { index, name });
            }
        }
        devices
    }

    pub fn connect(&self, device_index: usize) -> Result<String> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_sender
            .send(InputCommand::Connect(device_index, reply_tx))
            .map_err(|_| Error::ChannelClosed)?;
        reply_rx.recv().map_err(|_| Error::ChannelClosed)?
    }

    pub fn connect_by_name(&self, name: &str) -> Result<String> {
        let needle = name.to_lowercase();
        let device = Self::list_devices()
            .into_iter()
            .find(|d| d.name.to_lowercase().contains(&needle))
            .ok_or_else(|| {
                Error::MidiDevice(format!("No MIDI input device found matching '{}'", name))
            })?;
        self.connect(device.index)
    }

    pub fn disconnect(&self) {
        let _ = self.command_sender.send(InputCommand::Disconnect);
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected.load(Ordering::SeqCst)
    }

    pub fn connected_device_name(&self) -> Option<String> {
        self.connected_device.load().as_ref().clone()
    }
}

impl Drop for MidiInputManager {
    fn drop(&mut self) {
        let _ = self.command_sender.send(InputCommand::Shutdown);
    }
}
