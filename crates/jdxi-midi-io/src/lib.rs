//! MIDI transport for the JD-Xi editor.
//!
//! Outbound SysEx goes through a [`SysExSink`]: the midir-backed
//! [`MidiOutputManager`] or the in-process [`LoopbackSink`]. Inbound bytes go
//! through a [`SysExReceiver`], which the midir input callback drives.
//!
//! Feature gates: `midi-io` (hardware I/O via midir).

pub mod error;
pub use error::{Error, Result};

mod receiver;
pub use receiver::SysExReceiver;

mod sink;
pub use sink::{LoopbackSink, SysExSink};

#[cfg(feature = "midi-io")]
mod io;

#[cfg(feature = "midi-io")]
pub use io::{MidiInputDevice, MidiInputManager, MidiOutputDevice, MidiOutputManager};
