//! Hardware MIDI I/O.
//!
//! Device enumeration, connection, and SysEx transfer via midir.
//! Requires the `midi-io` feature.

mod input;
mod output;

pub use input::{MidiInputDevice, MidiInputManager};
pub use output::{MidiOutputDevice, MidiOutputManager};
