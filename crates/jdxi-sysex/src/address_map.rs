//! Attributes wire addresses to parameter blocks.

use crate::address::{
    offsets::{FIRST_DRUM_KEY, FIRST_DRUM_NOTE_LMB, LAST_DRUM_KEY},
    SysExAddress,
};
use crate::error::{Error, Result};
use crate::parameter::{ParameterDescriptor, PartType, WideParameter};

const PROGRAM_MSB: u8 = 0x18;
const TONE_MSB: u8 = 0x19;
const DIGITAL_1_UMB: u8 = 0x01;
const DIGITAL_2_UMB: u8 = 0x21;
const ANALOG_UMB: u8 = 0x42;
const DRUM_UMB: u8 = 0x70;

/// Where an address sits: which block kind, the block's base address, and
/// the offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub part: PartType,
    pub base: SysExAddress,
    pub offset: u8,
}

impl Location {
    pub fn descriptor(&self) -> Result<&'static ParameterDescriptor> {
        self.part.by_offset(self.offset)
    }

    pub fn wide_parameter(&self) -> Option<&'static WideParameter> {
        self.part.wide_at(self.offset)
    }

    /// Same block, `delta` bytes further on.
    pub fn advance(&self, delta: usize) -> Option<Location> {
        let offset = u8::try_from(self.offset as usize + delta).ok()?;
        (offset <= 0x7F).then_some(Location { offset, ..*self })
    }

    /// MIDI key of a drum note block. `None` for a base that is not a note
    /// block, including hand-built locations.
    pub fn drum_key(&self) -> Option<u8> {
        if self.part != PartType::DrumNote {
            return None;
        }
        let steps = self.base.lmb().checked_sub(FIRST_DRUM_NOTE_LMB)?;
        if steps % 2 != 0 {
            return None;
        }
        let key = FIRST_DRUM_KEY + steps / 2;
        (key <= LAST_DRUM_KEY).then_some(key)
    }
}

/// Lookup from wire address to parameter block.
pub struct AddressMap;

impl AddressMap {
    pub fn locate(address: SysExAddress) -> Option<Location> {
        let part = part_at(address.msb(), address.umb(), address.lmb())?;
        Some(Location {
            part,
            base: address.block_base(),
            offset: address.lsb(),
        })
    }

    pub fn try_locate(address: SysExAddress) -> Result<Location> {
        Self::locate(address).ok_or(Error::UnknownAddress(address))
    }
}

fn part_at(msb: u8, umb: u8, lmb: u8) -> Option<PartType> {
    match (msb, umb) {
        (PROGRAM_MSB, 0x00) => match lmb {
            0x00 => Some(PartType::ProgramCommon),
            0x01 => Some(PartType::VocalFx),
            0x02 => Some(PartType::Effect1),
            0x04 => Some(PartType::Effect2),
            0x06 => Some(PartType::Delay),
            0x08 => Some(PartType::Reverb),
            0x40 => Some(PartType::Arpeggio),
            _ => None,
        },
        (TONE_MSB, DIGITAL_1_UMB | DIGITAL_2_UMB) => match lmb {
            0x00 => Some(PartType::DigitalCommon),
            0x20..=0x22 => Some(PartType::DigitalPartial),
            0x50 => Some(PartType::DigitalModify),
            _ => None,
        },
        (TONE_MSB, ANALOG_UMB) if lmb == 0x00 => Some(PartType::Analog),
        (TONE_MSB, DRUM_UMB) => {
            let last_note_lmb = FIRST_DRUM_NOTE_LMB + 2 * (LAST_DRUM_KEY - FIRST_DRUM_KEY);
            if lmb == 0x00 {
                Some(PartType::DrumCommon)
            } else if (FIRST_DRUM_NOTE_LMB..=last_note_lmb).contains(&lmb)
                && (lmb - FIRST_DRUM_NOTE_LMB) % 2 == 0
            {
                Some(PartType::DrumNote)
            } else {
                None
            }
        }
        _ => None,
    }
}
