//! Centralized error type for the jdxi umbrella crate.
//!
//! Wraps codec and transport errors so `?` propagates across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Sysex(#[from] jdxi_sysex::Error),

    #[error("MIDI: {0}")]
    Midi(#[from] jdxi_midi_io::Error),

    #[error("Config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No MIDI transport configured")]
    NoTransport,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
