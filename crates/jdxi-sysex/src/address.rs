//! JD-Xi hierarchical memory addresses.
//!
//! An address is four 7-bit bytes: MSB (area), UMB (part), LMB (group) and
//! LSB (parameter offset). Editor sections hold a base address for their
//! block and derive per-parameter addresses from it with constant offsets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Add;

const MAX_BYTE: u16 = 0x7F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 4]", into = "[u8; 4]")]
pub struct SysExAddress {
    msb: u8,
    umb: u8,
    lmb: u8,
    lsb: u8,
}

impl SysExAddress {
    pub fn new(msb: u8, umb: u8, lmb: u8, lsb: u8) -> Result<Self> {
        for byte in [msb, umb, lmb, lsb] {
            check_byte(byte as u16)?;
        }
        Ok(Self { msb, umb, lmb, lsb })
    }

    /// Constructor for address constants. Out-of-range bytes fail constant
    /// evaluation.
    pub const fn new_const(msb: u8, umb: u8, lmb: u8, lsb: u8) -> Self {
        assert!(msb <= 0x7F && umb <= 0x7F && lmb <= 0x7F && lsb <= 0x7F);
        Self { msb, umb, lmb, lsb }
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
        let [msb, umb, lmb, lsb] = bytes;
        Self::new(msb, umb, lmb, lsb)
    }

    /// Caller has already checked every byte is 7-bit.
    pub(crate) const fn from_validated(bytes: [u8; 4]) -> Self {
        let [msb, umb, lmb, lsb] = bytes;
        Self { msb, umb, lmb, lsb }
    }

    /// New address with each delta added to UMB, LMB and LSB.
    pub fn with_offset(self, offset: impl Into<AddressOffset>) -> Result<Self> {
        let offset = offset.into();
        Ok(Self {
            msb: self.msb,
            umb: add_checked(self.umb, offset.umb)?,
            lmb: add_checked(self.lmb, offset.lmb)?,
            lsb: add_checked(self.lsb, offset.lsb)?,
        })
    }

    /// Address of the parameter `offset` bytes into this block.
    pub fn parameter(self, offset: u8) -> Result<Self> {
        self.with_offset((0, 0, offset))
    }

    /// Same block, parameter offset reset to zero.
    pub fn block_base(self) -> Self {
        Self { lsb: 0, ..self }
    }

    pub const fn as_bytes(self) -> [u8; 4] {
        [self.msb, self.umb, self.lmb, self.lsb]
    }

    pub const fn msb(self) -> u8 {
        self.msb
    }

    pub const fn umb(self) -> u8 {
        self.umb
    }

    pub const fn lmb(self) -> u8 {
        self.lmb
    }

    pub const fn lsb(self) -> u8 {
        self.lsb
    }
}

fn check_byte(value: u16) -> Result<u8> {
    if value > MAX_BYTE {
        return Err(Error::AddressOutOfRange { value });
    }
    Ok(value as u8)
}

fn add_checked(byte: u8, delta: u8) -> Result<u8> {
    check_byte(byte as u16 + delta as u16)
}

impl TryFrom<[u8; 4]> for SysExAddress {
    type Error = Error;

    fn try_from(bytes: [u8; 4]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<SysExAddress> for [u8; 4] {
    fn from(address: SysExAddress) -> Self {
        address.as_bytes()
    }
}

impl Display for SysExAddress {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{:02X} {:02X} {:02X} {:02X}",
            self.msb, self.umb, self.lmb, self.lsb
        )
    }
}

/// Deltas applied to UMB, LMB and LSB of a base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddressOffset {
    pub umb: u8,
    pub lmb: u8,
    pub lsb: u8,
}

impl AddressOffset {
    pub const fn new(umb: u8, lmb: u8, lsb: u8) -> Self {
        Self { umb, lmb, lsb }
    }
}

impl From<(u8, u8, u8)> for AddressOffset {
    fn from((umb, lmb, lsb): (u8, u8, u8)) -> Self {
        Self { umb, lmb, lsb }
    }
}

/// Component-wise; saturates so an overflowing sum still fails `with_offset`.
impl Add for AddressOffset {
    type Output = AddressOffset;

    fn add(self, rhs: AddressOffset) -> AddressOffset {
        AddressOffset {
            umb: self.umb.saturating_add(rhs.umb),
            lmb: self.lmb.saturating_add(rhs.lmb),
            lsb: self.lsb.saturating_add(rhs.lsb),
        }
    }
}

// ============================================================================
// Area bases
// ============================================================================

pub const SETUP: SysExAddress = SysExAddress::new_const(0x01, 0x00, 0x00, 0x00);
pub const SYSTEM: SysExAddress = SysExAddress::new_const(0x02, 0x00, 0x00, 0x00);
pub const TEMPORARY_PROGRAM: SysExAddress = SysExAddress::new_const(0x18, 0x00, 0x00, 0x00);
pub const DIGITAL_SYNTH_1: SysExAddress = SysExAddress::new_const(0x19, 0x01, 0x00, 0x00);
pub const DIGITAL_SYNTH_2: SysExAddress = SysExAddress::new_const(0x19, 0x21, 0x00, 0x00);
pub const ANALOG_SYNTH: SysExAddress = SysExAddress::new_const(0x19, 0x42, 0x00, 0x00);
pub const DRUM_KIT: SysExAddress = SysExAddress::new_const(0x19, 0x70, 0x00, 0x00);

/// Group offsets within an area.
pub mod offsets {
    use super::AddressOffset;

    // Temporary program
    pub const PROGRAM_COMMON: AddressOffset = AddressOffset::new(0x00, 0x00, 0x00);
    pub const VOCAL_FX: AddressOffset = AddressOffset::new(0x00, 0x01, 0x00);
    pub const EFFECT_1: AddressOffset = AddressOffset::new(0x00, 0x02, 0x00);
    pub const EFFECT_2: AddressOffset = AddressOffset::new(0x00, 0x04, 0x00);
    pub const DELAY: AddressOffset = AddressOffset::new(0x00, 0x06, 0x00);
    pub const REVERB: AddressOffset = AddressOffset::new(0x00, 0x08, 0x00);
    pub const ARPEGGIO: AddressOffset = AddressOffset::new(0x00, 0x40, 0x00);

    // Digital synth tone
    pub const DIGITAL_COMMON: AddressOffset = AddressOffset::new(0x00, 0x00, 0x00);
    pub const DIGITAL_PARTIAL_1: AddressOffset = AddressOffset::new(0x00, 0x20, 0x00);
    pub const DIGITAL_PARTIAL_2: AddressOffset = AddressOffset::new(0x00, 0x21, 0x00);
    pub const DIGITAL_PARTIAL_3: AddressOffset = AddressOffset::new(0x00, 0x22, 0x00);
    pub const DIGITAL_MODIFY: AddressOffset = AddressOffset::new(0x00, 0x50, 0x00);

    // Drum kit
    pub const DRUM_COMMON: AddressOffset = AddressOffset::new(0x00, 0x00, 0x00);

    pub const FIRST_DRUM_KEY: u8 = 36;
    pub const LAST_DRUM_KEY: u8 = 72;
    pub(crate) const FIRST_DRUM_NOTE_LMB: u8 = 0x2E;

    /// Partial 1..=3 of a digital tone.
    pub const fn digital_partial(partial: u8) -> Option<AddressOffset> {
        match partial {
            1 => Some(DIGITAL_PARTIAL_1),
            2 => Some(DIGITAL_PARTIAL_2),
            3 => Some(DIGITAL_PARTIAL_3),
            _ => None,
        }
    }

    /// Drum kit partial for MIDI key 36..=72. Each partial block is wider
    /// than 128 bytes, so consecutive keys are two LMB steps apart.
    pub const fn drum_note(key: u8) -> Option<AddressOffset> {
        if key < FIRST_DRUM_KEY || key > LAST_DRUM_KEY {
            return None;
        }
        Some(AddressOffset::new(
            0x00,
            FIRST_DRUM_NOTE_LMB + 2 * (key - FIRST_DRUM_KEY),
            0x00,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_high_bytes() {
        assert!(SysExAddress::new(0x19, 0x01, 0x20, 0x7F).is_ok());
        assert_eq!(
            SysExAddress::new(0x80, 0x00, 0x00, 0x00),
            Err(Error::AddressOutOfRange { value: 0x80 })
        );
        assert!(SysExAddress::new(0x19, 0x01, 0xFF, 0x00).is_err());
    }

    #[test]
    fn test_as_bytes_wire_order() {
        let addr = SysExAddress::new(0x19, 0x01, 0x20, 0x03).unwrap();
        assert_eq!(addr.as_bytes(), [0x19, 0x01, 0x20, 0x03]);
        assert_eq!(addr.to_string(), "19 01 20 03");
    }

    #[test]
    fn test_with_offset_specialises_partial() {
        let partial_2 = DIGITAL_SYNTH_1
            .with_offset(offsets::DIGITAL_PARTIAL_2)
            .unwrap();
        assert_eq!(partial_2.as_bytes(), [0x19, 0x01, 0x21, 0x00]);

        let pitch = partial_2.parameter(0x03).unwrap();
        assert_eq!(pitch.as_bytes(), [0x19, 0x01, 0x21, 0x03]);
        assert_eq!(pitch.block_base(), partial_2);
    }

    #[test]
    fn test_with_offset_out_of_range() {
        let addr = SysExAddress::new(0x19, 0x70, 0x76, 0x7F).unwrap();
        assert_eq!(
            addr.parameter(1),
            Err(Error::AddressOutOfRange { value: 0x80 })
        );
        assert!(addr.with_offset((0x10, 0, 0)).is_err());
    }

    #[test]
    fn test_offset_addition_saturates() {
        let a = AddressOffset::new(0xF0, 1, 2);
        let b = AddressOffset::new(0x20, 3, 4);
        assert_eq!(a + b, AddressOffset::new(0xFF, 4, 6));
        assert!(DRUM_KIT.with_offset(a + b).is_err());
    }

    #[test]
    fn test_drum_note_offsets() {
        assert_eq!(offsets::drum_note(35), None);
        assert_eq!(offsets::drum_note(73), None);
        assert_eq!(
            offsets::drum_note(36),
            Some(AddressOffset::new(0, 0x2E, 0))
        );
        assert_eq!(
            offsets::drum_note(72),
            Some(AddressOffset::new(0, 0x76, 0))
        );
    }

    #[test]
    fn test_digital_partial_offsets() {
        assert_eq!(offsets::digital_partial(0), None);
        assert_eq!(offsets::digital_partial(3), Some(offsets::DIGITAL_PARTIAL_3));
        assert_eq!(offsets::digital_partial(4), None);
    }
}
