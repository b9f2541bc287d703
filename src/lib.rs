//! # jdxi - Roland JD-Xi editor core
//!
//! Everything an editor front end needs below the widgets.
//!
//! ## Architecture
//!
//! `jdxi` is an umbrella crate that coordinates:
//! - **jdxi-sysex** - SysEx codec (addresses, DT1/RQ1, checksum, parameter
//!   registry, value conversion)
//! - **jdxi-midi-io** - MIDI transport (output thread, input decoding,
//!   loopback sink)
//!
//! and adds the editor session: configuration, parameter edits, refresh
//! with cancellation, and inbound parameter events.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jdxi::prelude::*;
//!
//! let editor = Editor::builder().midi_io().build()?;
//!
//! let partial_1 = DIGITAL_SYNTH_1.with_offset(offsets::DIGITAL_PARTIAL_1)?;
//! editor.set_parameter(partial_1, DigitalPartialParam::OscPitch, -12)?;
//!
//! editor.refresh(SynthArea::Digital1, &CancelToken::new())?;
//! for event in editor.events().try_iter() {
//!     println!("{} = {}", event.parameter, event.display);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `midi-io`
//! - `midi-io` - Hardware MIDI I/O via midir

/// Re-export of jdxi-sysex for direct access
pub use jdxi_sysex as sysex;

/// Re-export of jdxi-midi-io for direct access
pub use jdxi_midi_io as midi_io;

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::EditorConfig;

mod editor;
pub use editor::{CancelToken, Editor, EditorBuilder, RefreshReport};

mod inbound;
pub use inbound::{InboundDecoder, ParameterEvent};

pub mod prelude {
    pub use crate::{
        CancelToken, Editor, EditorConfig, Error, ParameterEvent, RefreshReport, Result,
    };
    pub use jdxi_midi_io::{LoopbackSink, SysExSink};
    pub use jdxi_sysex::address::{
        offsets, ANALOG_SYNTH, DIGITAL_SYNTH_1, DIGITAL_SYNTH_2, DRUM_KIT, TEMPORARY_PROGRAM,
    };
    pub use jdxi_sysex::{
        AnalogParam, ArpeggioParam, DelayParam, DigitalCommonParam, DigitalModifyParam,
        DigitalPartialParam, DrumCommonParam, DrumNoteParam, Effect1Param, Effect2Param,
        Parameter, PartType, ProgramCommonParam, ReverbParam, SynthArea, SysExAddress,
        VocalFxParam,
    };
}
