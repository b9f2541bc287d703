//! Error types for the JD-Xi SysEx codec.

use crate::address::SysExAddress;
use crate::parameter::PartType;
use thiserror::Error;

/// Reasons an inbound byte sequence is rejected by the parser.
///
/// None of these are fatal: the receive path logs the message and drops it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("SysEx message too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("SysEx header is not a JD-Xi header")]
    BadHeader,

    #[error("unsupported command byte {0:#04X}")]
    BadCommand(u8),

    #[error("SysEx message does not end with F7h")]
    BadTerminator,

    #[error("byte {byte:#04X} at index {index} is not a 7-bit data byte")]
    InvalidDataByte { index: usize, byte: u8 },

    #[error("checksum mismatch: computed {expected:#04X}, message carries {found:#04X}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("address byte out of range: {value:#X} (must be <= 7Fh)")]
    AddressOutOfRange { value: u16 },

    #[error("{parameter}: value {value} outside {min}..={max}")]
    ValueOutOfRange {
        parameter: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("unknown {part} parameter: {parameter}")]
    UnknownParameter { part: PartType, parameter: String },

    #[error("unknown synth area: {0}")]
    UnknownArea(String),

    #[error("address {0} is not inside a known parameter block")]
    UnknownAddress(SysExAddress),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = std::result::Result<T, Error>;
