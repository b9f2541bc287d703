//! Canned RQ1 requests for refreshing editor state.

use crate::address::{
    offsets, AddressOffset, SysExAddress, ANALOG_SYNTH, DIGITAL_SYNTH_1, DIGITAL_SYNTH_2,
    DRUM_KIT, TEMPORARY_PROGRAM,
};
use crate::error::{Error, Result};
use crate::message::MessageComposer;
use crate::parameter::PartType;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use tracing::debug;

/// A refreshable region of the synth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthArea {
    Program,
    Digital1,
    Digital2,
    Analog,
    Drums,
}

impl SynthArea {
    pub const ALL: &'static [SynthArea] = &[
        SynthArea::Program,
        SynthArea::Digital1,
        SynthArea::Digital2,
        SynthArea::Analog,
        SynthArea::Drums,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SynthArea::Program => "program",
            SynthArea::Digital1 => "digital1",
            SynthArea::Digital2 => "digital2",
            SynthArea::Analog => "analog",
            SynthArea::Drums => "drums",
        }
    }

    /// Blocks requested on refresh, in send order.
    pub fn blocks(self) -> Vec<(PartType, SysExAddress)> {
        let mut blocks = Vec::new();
        let mut push = |part: PartType, area: SysExAddress, offset: AddressOffset| {
            // Offsets come from the constant table and always fit.
            if let Ok(base) = area.with_offset(offset) {
                blocks.push((part, base));
            }
        };
        match self {
            SynthArea::Program => {
                push(PartType::ProgramCommon, TEMPORARY_PROGRAM, offsets::PROGRAM_COMMON);
                push(PartType::VocalFx, TEMPORARY_PROGRAM, offsets::VOCAL_FX);
                push(PartType::Effect1, TEMPORARY_PROGRAM, offsets::EFFECT_1);
                push(PartType::Effect2, TEMPORARY_PROGRAM, offsets::EFFECT_2);
                push(PartType::Delay, TEMPORARY_PROGRAM, offsets::DELAY);
                push(PartType::Reverb, TEMPORARY_PROGRAM, offsets::REVERB);
                push(PartType::Arpeggio, TEMPORARY_PROGRAM, offsets::ARPEGGIO);
            }
            SynthArea::Digital1 | SynthArea::Digital2 => {
                let area = if self == SynthArea::Digital1 {
                    DIGITAL_SYNTH_1
                } else {
                    DIGITAL_SYNTH_2
                };
                push(PartType::DigitalCommon, area, offsets::DIGITAL_COMMON);
                push(PartType::DigitalPartial, area, offsets::DIGITAL_PARTIAL_1);
                push(PartType::DigitalPartial, area, offsets::DIGITAL_PARTIAL_2);
                push(PartType::DigitalPartial, area, offsets::DIGITAL_PARTIAL_3);
                push(PartType::DigitalModify, area, offsets::DIGITAL_MODIFY);
            }
            SynthArea::Analog => {
                push(PartType::Analog, ANALOG_SYNTH, AddressOffset::default());
            }
            SynthArea::Drums => {
                push(PartType::DrumCommon, DRUM_KIT, offsets::DRUM_COMMON);
                for key in offsets::FIRST_DRUM_KEY..=offsets::LAST_DRUM_KEY {
                    if let Some(note) = offsets::drum_note(key) {
                        push(PartType::DrumNote, DRUM_KIT, note);
                    }
                }
            }
        }
        blocks
    }
}

impl Display for SynthArea {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Case-insensitive; spaces, dashes and underscores are ignored, so
/// `"Digital-1"` and `"digital_1"` both name [`SynthArea::Digital1`].
impl FromStr for SynthArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "program" => Ok(SynthArea::Program),
            "digital1" => Ok(SynthArea::Digital1),
            "digital2" => Ok(SynthArea::Digital2),
            "analog" => Ok(SynthArea::Analog),
            "drums" | "drum" => Ok(SynthArea::Drums),
            _ => Err(Error::UnknownArea(s.to_string())),
        }
    }
}

/// Builds the RQ1 sequence for a refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequencer {
    composer: MessageComposer,
}

impl RequestSequencer {
    pub fn new(composer: MessageComposer) -> Self {
        Self { composer }
    }

    pub fn for_area(&self, area: SynthArea) -> Vec<Vec<u8>> {
        let requests: Vec<Vec<u8>> = area
            .blocks()
            .into_iter()
            .map(|(part, base)| self.composer.compose_request(base, part.block_size()))
            .collect();
        debug!(area = %area, count = requests.len(), "Built refresh requests");
        requests
    }

    pub fn for_area_name(&self, name: &str) -> Result<Vec<Vec<u8>>> {
        Ok(self.for_area(name.parse()?))
    }

    /// Every area in [`SynthArea::ALL`] order.
    pub fn all(&self) -> Vec<Vec<u8>> {
        SynthArea::ALL
            .iter()
            .flat_map(|&area| self.for_area(area))
            .collect()
    }
}

/// Requests for `area` with the default device id.
pub fn for_area(area: SynthArea) -> Vec<Vec<u8>> {
    RequestSequencer::default().for_area(area)
}
