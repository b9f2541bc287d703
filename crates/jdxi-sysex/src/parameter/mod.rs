//! Parameter descriptors and the per-part registry.
//!
//! Every JD-Xi parameter block (program common, digital partial, analog
//! tone, drum note, ...) gets a compile-time enum of its parameters, backed by
//! a constant descriptor table. Name lookups go through the enum; the wire
//! boundary, where only an address offset is known, uses a 128-entry index
//! built during constant evaluation.
//!
//! Descriptor invariants (`midi_min <= midi_max <= 127`, bipolar ranges
//! straddle 64, unique offsets per part) are checked when the index is built,
//! so a bad table fails to compile.

use crate::address::SysExAddress;
use crate::convert::ValueConverter;
use crate::error::{Error, Result};
use crate::message::BlockSize;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Raw value that bipolar parameters transmit for display zero.
pub const BIPOLAR_CENTER: u8 = 64;

/// `(raw value, label)` pairs for enumerated parameters.
pub type ValueLabels = &'static [(u8, &'static str)];

/// Static metadata for one single-byte parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    /// Offset from the owning block's base address.
    pub address_offset: u8,
    pub midi_min: u8,
    pub midi_max: u8,
    /// `(display_min, display_max)`; `None` means the display range equals
    /// the MIDI range.
    pub display_range: Option<(i32, i32)>,
    /// Display value is `raw - 64`.
    pub bipolar: bool,
    pub labels: Option<ValueLabels>,
}

impl ParameterDescriptor {
    pub const fn new(name: &'static str, address_offset: u8, midi_min: u8, midi_max: u8) -> Self {
        Self {
            name,
            address_offset,
            midi_min,
            midi_max,
            display_range: None,
            bipolar: false,
            labels: None,
        }
    }

    /// Marks the parameter as centred on raw 64.
    pub const fn centered(mut self) -> Self {
        self.bipolar = true;
        self
    }

    pub const fn with_display(mut self, display_min: i32, display_max: i32) -> Self {
        self.display_range = Some((display_min, display_max));
        self
    }

    pub const fn with_labels(mut self, labels: ValueLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub const fn display_min(&self) -> i32 {
        if self.bipolar {
            return self.midi_min as i32 - BIPOLAR_CENTER as i32;
        }
        match self.display_range {
            Some((min, _)) => min,
            None => self.midi_min as i32,
        }
    }

    pub const fn display_max(&self) -> i32 {
        if self.bipolar {
            return self.midi_max as i32 - BIPOLAR_CENTER as i32;
        }
        match self.display_range {
            Some((_, max)) => max,
            None => self.midi_max as i32,
        }
    }

    /// Full wire address of this parameter inside the block at `base`.
    pub fn address(&self, base: SysExAddress) -> Result<SysExAddress> {
        base.parameter(self.address_offset)
    }

    pub fn converter(&self) -> ValueConverter<'_> {
        ValueConverter::new(self)
    }
}

/// A compile-time parameter identifier belonging to one [`PartType`].
pub trait Parameter: Copy + std::fmt::Debug + 'static {
    const PART: PartType;

    fn descriptor(self) -> &'static ParameterDescriptor;

    fn address(self, base: SysExAddress) -> Result<SysExAddress> {
        self.descriptor().address(base)
    }
}

/// Offset -> table position, `NO_ENTRY` where no parameter lives.
pub(crate) const NO_ENTRY: u8 = u8::MAX;

/// Builds the offset index for a descriptor table, failing constant
/// evaluation if any descriptor breaks an invariant.
pub(crate) const fn index_by_offset(descriptors: &[ParameterDescriptor]) -> [u8; 128] {
    assert!(descriptors.len() < NO_ENTRY as usize);
    let mut index = [NO_ENTRY; 128];
    let mut i = 0;
    while i < descriptors.len() {
        let d = &descriptors[i];
        assert!(d.midi_min <= d.midi_max, "midi_min above midi_max");
        assert!(d.midi_max <= 0x7F, "raw range is not 7-bit");
        assert!(d.address_offset <= 0x7F, "offset is not 7-bit");
        if d.bipolar {
            assert!(
                d.midi_min <= BIPOLAR_CENTER && d.midi_max >= BIPOLAR_CENTER,
                "bipolar range does not straddle 64"
            );
        }
        if let Some((min, max)) = d.display_range {
            assert!(min < max, "display range must be ascending");
            assert!(d.midi_min < d.midi_max, "display range over a single raw value");
        }
        let slot = d.address_offset as usize;
        assert!(index[slot] == NO_ENTRY, "duplicate address offset");
        index[slot] = i as u8;
        i += 1;
    }
    index
}

/// Declares a parameter enum together with its descriptor table.
macro_rules! parameter_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $part:ident {
            $( $variant:ident => $desc:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            pub(crate) const DESCRIPTORS: &'static [$crate::parameter::ParameterDescriptor] =
                &[$( $desc, )+];

            const OFFSET_INDEX: [u8; 128] =
                $crate::parameter::index_by_offset(Self::DESCRIPTORS);

            pub fn descriptor(self) -> &'static $crate::parameter::ParameterDescriptor {
                &Self::DESCRIPTORS[self as usize]
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|param| param.descriptor().name == name)
            }

            pub fn from_offset(offset: u8) -> Option<Self> {
                let slot = Self::OFFSET_INDEX.get(offset as usize).copied()?;
                Self::ALL.get(slot as usize).copied()
            }
        }

        impl $crate::parameter::Parameter for $name {
            const PART: $crate::parameter::PartType = $crate::parameter::PartType::$part;

            fn descriptor(self) -> &'static $crate::parameter::ParameterDescriptor {
                $name::descriptor(self)
            }
        }
    };
}

// Part tables use the macro above, so they are declared after it.
mod analog;
mod digital;
mod drum;
mod program;
pub mod wide;

pub use analog::AnalogParam;
pub use digital::{DigitalCommonParam, DigitalModifyParam, DigitalPartialParam};
pub use drum::{DrumCommonParam, DrumNoteParam};
pub use program::{
    ArpeggioParam, DelayParam, Effect1Param, Effect2Param, ProgramCommonParam, ReverbParam,
    VocalFxParam,
};
pub use wide::WideParameter;

/// Kind of parameter block. Each kind has its own offset space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartType {
    ProgramCommon,
    VocalFx,
    Effect1,
    Effect2,
    Delay,
    Reverb,
    Arpeggio,
    DigitalCommon,
    DigitalPartial,
    DigitalModify,
    Analog,
    DrumCommon,
    DrumNote,
}

impl PartType {
    pub const ALL: &'static [PartType] = &[
        PartType::ProgramCommon,
        PartType::VocalFx,
        PartType::Effect1,
        PartType::Effect2,
        PartType::Delay,
        PartType::Reverb,
        PartType::Arpeggio,
        PartType::DigitalCommon,
        PartType::DigitalPartial,
        PartType::DigitalModify,
        PartType::Analog,
        PartType::DrumCommon,
        PartType::DrumNote,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartType::ProgramCommon => "program common",
            PartType::VocalFx => "vocal FX",
            PartType::Effect1 => "effect 1",
            PartType::Effect2 => "effect 2",
            PartType::Delay => "delay",
            PartType::Reverb => "reverb",
            PartType::Arpeggio => "arpeggio",
            PartType::DigitalCommon => "digital common",
            PartType::DigitalPartial => "digital partial",
            PartType::DigitalModify => "digital modify",
            PartType::Analog => "analog",
            PartType::DrumCommon => "drum common",
            PartType::DrumNote => "drum note",
        }
    }

    pub fn descriptors(self) -> &'static [ParameterDescriptor] {
        match self {
            PartType::ProgramCommon => ProgramCommonParam::DESCRIPTORS,
            PartType::VocalFx => VocalFxParam::DESCRIPTORS,
            PartType::Effect1 => Effect1Param::DESCRIPTORS,
            PartType::Effect2 => Effect2Param::DESCRIPTORS,
            PartType::Delay => DelayParam::DESCRIPTORS,
            PartType::Reverb => ReverbParam::DESCRIPTORS,
            PartType::Arpeggio => ArpeggioParam::DESCRIPTORS,
            PartType::DigitalCommon => DigitalCommonParam::DESCRIPTORS,
            PartType::DigitalPartial => DigitalPartialParam::DESCRIPTORS,
            PartType::DigitalModify => DigitalModifyParam::DESCRIPTORS,
            PartType::Analog => AnalogParam::DESCRIPTORS,
            PartType::DrumCommon => DrumCommonParam::DESCRIPTORS,
            PartType::DrumNote => DrumNoteParam::DESCRIPTORS,
        }
    }

    pub fn wide_parameters(self) -> &'static [WideParameter] {
        match self {
            PartType::ProgramCommon => wide::PROGRAM_COMMON,
            PartType::Effect1 => wide::EFFECT_1,
            PartType::Effect2 => wide::EFFECT_2,
            PartType::Delay => wide::DELAY,
            PartType::Reverb => wide::REVERB,
            PartType::DigitalPartial => wide::DIGITAL_PARTIAL,
            PartType::DrumNote => wide::DRUM_NOTE,
            _ => &[],
        }
    }

    /// Size of the whole block, as requested by RQ1.
    pub fn block_size(self) -> BlockSize {
        let bytes = match self {
            PartType::ProgramCommon => [0x00, 0x00, 0x00, 0x40],
            PartType::VocalFx => [0x00, 0x00, 0x00, 0x18],
            PartType::Effect1 | PartType::Effect2 => [0x00, 0x00, 0x01, 0x11],
            PartType::Delay => [0x00, 0x00, 0x00, 0x64],
            PartType::Reverb => [0x00, 0x00, 0x00, 0x63],
            PartType::Arpeggio => [0x00, 0x00, 0x00, 0x0C],
            PartType::DigitalCommon => [0x00, 0x00, 0x00, 0x40],
            PartType::DigitalPartial => [0x00, 0x00, 0x00, 0x3D],
            PartType::DigitalModify => [0x00, 0x00, 0x00, 0x25],
            PartType::Analog => [0x00, 0x00, 0x00, 0x45],
            PartType::DrumCommon => [0x00, 0x00, 0x00, 0x12],
            PartType::DrumNote => [0x00, 0x00, 0x01, 0x43],
        };
        BlockSize::from_bytes_const(bytes)
    }

    pub fn by_name(self, name: &str) -> Result<&'static ParameterDescriptor> {
        let found = match self {
            PartType::ProgramCommon => ProgramCommonParam::from_name(name).map(|p| p.descriptor()),
            PartType::VocalFx => VocalFxParam::from_name(name).map(|p| p.descriptor()),
            PartType::Effect1 => Effect1Param::from_name(name).map(|p| p.descriptor()),
            PartType::Effect2 => Effect2Param::from_name(name).map(|p| p.descriptor()),
            PartType::Delay => DelayParam::from_name(name).map(|p| p.descriptor()),
            PartType::Reverb => ReverbParam::from_name(name).map(|p| p.descriptor()),
            PartType::Arpeggio => ArpeggioParam::from_name(name).map(|p| p.descriptor()),
            PartType::DigitalCommon => DigitalCommonParam::from_name(name).map(|p| p.descriptor()),
            PartType::DigitalPartial => {
                DigitalPartialParam::from_name(name).map(|p| p.descriptor())
            }
            PartType::DigitalModify => DigitalModifyParam::from_name(name).map(|p| p.descriptor()),
            PartType::Analog => AnalogParam::from_name(name).map(|p| p.descriptor()),
            PartType::DrumCommon => DrumCommonParam::from_name(name).map(|p| p.descriptor()),
            PartType::DrumNote => DrumNoteParam::from_name(name).map(|p| p.descriptor()),
        };
        found.ok_or_else(|| Error::UnknownParameter {
            part: self,
            parameter: name.to_string(),
        })
    }

    pub fn by_offset(self, offset: u8) -> Result<&'static ParameterDescriptor> {
        let found = match self {
            PartType::ProgramCommon => ProgramCommonParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::VocalFx => VocalFxParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::Effect1 => Effect1Param::from_offset(offset).map(|p| p.descriptor()),
            PartType::Effect2 => Effect2Param::from_offset(offset).map(|p| p.descriptor()),
            PartType::Delay => DelayParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::Reverb => ReverbParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::Arpeggio => ArpeggioParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::DigitalCommon => {
                DigitalCommonParam::from_offset(offset).map(|p| p.descriptor())
            }
            PartType::DigitalPartial => {
                DigitalPartialParam::from_offset(offset).map(|p| p.descriptor())
            }
            PartType::DigitalModify => {
                DigitalModifyParam::from_offset(offset).map(|p| p.descriptor())
            }
            PartType::Analog => AnalogParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::DrumCommon => DrumCommonParam::from_offset(offset).map(|p| p.descriptor()),
            PartType::DrumNote => DrumNoteParam::from_offset(offset).map(|p| p.descriptor()),
        };
        found.ok_or_else(|| Error::UnknownParameter {
            part: self,
            parameter: format!("offset {:02X}h", offset),
        })
    }

    pub fn wide_by_name(self, name: &str) -> Result<&'static WideParameter> {
        self.wide_parameters()
            .iter()
            .find(|wide| wide.name == name)
            .ok_or_else(|| Error::UnknownParameter {
                part: self,
                parameter: name.to_string(),
            })
    }

    /// Wide parameter whose first byte sits at `offset`.
    pub fn wide_at(self, offset: u8) -> Option<&'static WideParameter> {
        self.wide_parameters()
            .iter()
            .find(|wide| wide.address_offset == offset)
    }
}

impl Display for PartType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Shared value label tables
// ============================================================================

pub(crate) const OFF_ON: ValueLabels = &[(0, "OFF"), (1, "ON")];

pub(crate) const LFO_SHAPES: ValueLabels = &[
    (0, "TRI"),
    (1, "SIN"),
    (2, "SAW"),
    (3, "SQR"),
    (4, "S&H"),
    (5, "RND"),
];

pub(crate) const TEMPO_SYNC_NOTES: ValueLabels = &[
    (0, "16"),
    (1, "12"),
    (2, "8"),
    (3, "4"),
    (4, "2"),
    (5, "1"),
    (6, "3/4"),
    (7, "2/3"),
    (8, "1/2"),
    (9, "3/8"),
    (10, "1/3"),
    (11, "1/4"),
    (12, "3/16"),
    (13, "1/6"),
    (14, "1/8"),
    (15, "3/32"),
    (16, "1/12"),
    (17, "1/16"),
    (18, "1/24"),
    (19, "1/32"),
];
