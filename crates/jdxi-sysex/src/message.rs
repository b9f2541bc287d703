//! DT1 / RQ1 message composition and parsing.
//!
//! Wire format:
//!
//! ```text
//! F0 41 <dev> 00 00 00 0E <cmd> <msb> <umb> <lmb> <lsb> [payload] <sum> F7
//! ```
//!
//! `cmd` is `12` (DT1, data set) or `11` (RQ1, data request). The checksum
//! covers the address and payload bytes.

use crate::address::SysExAddress;
use crate::checksum::checksum;
use crate::error::{Error, ProtocolError, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const ROLAND_ID: u8 = 0x41;
pub const DEFAULT_DEVICE_ID: u8 = 0x10;
pub const JD_XI_MODEL_ID: [u8; 4] = [0x00, 0x00, 0x00, 0x0E];

/// Start byte, manufacturer, device and four model bytes.
pub const HEADER_LEN: usize = 7;
/// Header, command, address, checksum and terminator.
pub const MIN_MESSAGE_LEN: usize = HEADER_LEN + 1 + 4 + 1 + 1;

const ADDRESS_START: usize = HEADER_LEN + 1;
const PAYLOAD_START: usize = ADDRESS_START + 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// RQ1
    Read = 0x11,
    /// DT1
    Write = 0x12,
}

impl Command {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x11 => Some(Command::Read),
            0x12 => Some(Command::Write),
            _ => None,
        }
    }

    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Command::Read => f.write_str("RQ1"),
            Command::Write => f.write_str("DT1"),
        }
    }
}

/// A decoded or about-to-be-encoded SysEx message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExMessage {
    pub command: Command,
    pub address: SysExAddress,
    /// DT1: parameter data. RQ1: the four size bytes.
    pub payload: Vec<u8>,
    pub checksum: u8,
}

impl SysExMessage {
    /// The single data byte of a one-parameter DT1.
    pub fn value(&self) -> Option<u8> {
        match (self.command, self.payload.as_slice()) {
            (Command::Write, [value]) => Some(*value),
            _ => None,
        }
    }
}

/// RQ1 size field: a byte count as four 7-bit bytes, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize([u8; 4]);

impl BlockSize {
    pub const MAX_LEN: usize = 0x0FFF_FFFF;

    pub fn from_len(len: usize) -> Result<Self> {
        if len > Self::MAX_LEN {
            return Err(Error::ValueOutOfRange {
                parameter: "block size",
                value: i32::try_from(len).unwrap_or(i32::MAX),
                min: 0,
                max: Self::MAX_LEN as i32,
            });
        }
        Ok(Self([
            ((len >> 21) & 0x7F) as u8,
            ((len >> 14) & 0x7F) as u8,
            ((len >> 7) & 0x7F) as u8,
            (len & 0x7F) as u8,
        ]))
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
        check_data_bytes("size", &bytes)?;
        Ok(Self(bytes))
    }

    /// For size constants. Bytes above 7Fh fail constant evaluation.
    pub const fn from_bytes_const(bytes: [u8; 4]) -> Self {
        assert!(bytes[0] <= 0x7F && bytes[1] <= 0x7F && bytes[2] <= 0x7F && bytes[3] <= 0x7F);
        Self(bytes)
    }

    pub fn len(self) -> usize {
        self.0
            .iter()
            .fold(0usize, |acc, &byte| (acc << 7) | byte as usize)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub const fn as_bytes(self) -> [u8; 4] {
        self.0
    }
}

fn check_data_bytes(parameter: &'static str, bytes: &[u8]) -> Result<()> {
    match bytes.iter().find(|&&byte| byte > 0x7F) {
        Some(&byte) => Err(Error::ValueOutOfRange {
            parameter,
            value: byte as i32,
            min: 0,
            max: 0x7F,
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Composer
// ============================================================================

/// Builds DT1 and RQ1 byte sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageComposer {
    device_id: u8,
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID,
        }
    }
}

impl MessageComposer {
    pub fn new(device_id: u8) -> Result<Self> {
        check_data_bytes("device id", &[device_id])?;
        Ok(Self { device_id })
    }

    pub fn device_id(&self) -> u8 {
        self.device_id
    }

    /// DT1 setting one parameter.
    pub fn compose_write(&self, address: SysExAddress, value: u8) -> Result<Vec<u8>> {
        self.compose_write_block(address, &[value])
    }

    /// DT1 carrying consecutive data bytes starting at `address`.
    pub fn compose_write_block(&self, address: SysExAddress, data: &[u8]) -> Result<Vec<u8>> {
        check_data_bytes("value", data)?;
        Ok(self.frame(Command::Write, address, data))
    }

    /// RQ1 for `size` bytes starting at `address`.
    pub fn compose_read(&self, address: SysExAddress, size: [u8; 4]) -> Result<Vec<u8>> {
        let size = BlockSize::from_bytes(size)?;
        Ok(self.compose_request(address, size))
    }

    pub fn compose_request(&self, address: SysExAddress, size: BlockSize) -> Vec<u8> {
        self.frame(Command::Read, address, &size.as_bytes())
    }

    fn frame(&self, command: Command, address: SysExAddress, payload: &[u8]) -> Vec<u8> {
        let mut body = Vec::with_capacity(4 + payload.len());
        body.extend_from_slice(&address.as_bytes());
        body.extend_from_slice(payload);

        let mut bytes = Vec::with_capacity(MIN_MESSAGE_LEN + payload.len());
        bytes.extend_from_slice(&header(self.device_id));
        bytes.push(command.as_byte());
        bytes.extend_from_slice(&body);
        bytes.push(checksum(&body));
        bytes.push(SYSEX_END);
        bytes
    }
}

fn header(device_id: u8) -> [u8; HEADER_LEN] {
    let [m0, m1, m2, m3] = JD_XI_MODEL_ID;
    [SYSEX_START, ROLAND_ID, device_id, m0, m1, m2, m3]
}

// ============================================================================
// Parser
// ============================================================================

/// Validates inbound byte sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageParser {
    device_id: u8,
}

impl Default for MessageParser {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID,
        }
    }
}

impl MessageParser {
    pub fn new(device_id: u8) -> Self {
        Self { device_id }
    }

    /// Checks, in order: length, header, command, terminator, data bytes,
    /// checksum. The first failing check determines the error, so a corrupted
    /// byte with bit 7 set is `InvalidDataByte`, never `ChecksumMismatch`.
    pub fn parse(&self, bytes: &[u8]) -> std::result::Result<SysExMessage, ProtocolError> {
        if bytes.len() < MIN_MESSAGE_LEN {
            return Err(ProtocolError::TooShort {
                len: bytes.len(),
                min: MIN_MESSAGE_LEN,
            });
        }
        if bytes[..HEADER_LEN] != header(self.device_id) {
            return Err(ProtocolError::BadHeader);
        }
        let command =
            Command::from_byte(bytes[HEADER_LEN]).ok_or(ProtocolError::BadCommand(bytes[HEADER_LEN]))?;
        let last = bytes.len() - 1;
        if bytes[last] != SYSEX_END {
            return Err(ProtocolError::BadTerminator);
        }
        if let Some((index, &byte)) = bytes[ADDRESS_START..last]
            .iter()
            .enumerate()
            .find(|(_, &byte)| byte > 0x7F)
        {
            return Err(ProtocolError::InvalidDataByte {
                index: ADDRESS_START + index,
                byte,
            });
        }

        let checksum_index = last - 1;
        let body = &bytes[ADDRESS_START..checksum_index];
        let expected = checksum(body);
        let found = bytes[checksum_index];
        if expected != found {
            return Err(ProtocolError::ChecksumMismatch { expected, found });
        }

        let address = SysExAddress::from_validated([
            bytes[ADDRESS_START],
            bytes[ADDRESS_START + 1],
            bytes[ADDRESS_START + 2],
            bytes[ADDRESS_START + 3],
        ]);
        Ok(SysExMessage {
            command,
            address,
            payload: bytes[PAYLOAD_START..checksum_index].to_vec(),
            checksum: found,
        })
    }
}

/// DT1 with the default device id.
pub fn compose_write(address: SysExAddress, value: u8) -> Result<Vec<u8>> {
    MessageComposer::default().compose_write(address, value)
}

/// RQ1 with the default device id.
pub fn compose_read(address: SysExAddress, size: [u8; 4]) -> Result<Vec<u8>> {
    MessageComposer::default().compose_read(address, size)
}

/// Parses a message addressed to the default device id.
pub fn parse(bytes: &[u8]) -> std::result::Result<SysExMessage, ProtocolError> {
    MessageParser::default().parse(bytes)
}
