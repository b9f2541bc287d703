//! Four-byte nibblised parameters.
//!
//! A handful of JD-Xi values are wider than seven bits: the program tempo,
//! the effect, delay and reverb parameter banks, and PCM wave numbers. Each
//! occupies four consecutive addresses carrying one nibble per byte, most
//! significant first.

use crate::convert::rescale;
use crate::error::{Error, Result};

/// Static metadata for one four-byte parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideParameter {
    pub name: &'static str,
    /// Offset of the first (most significant) nibble.
    pub address_offset: u8,
    pub raw_min: u16,
    pub raw_max: u16,
    pub display_min: i32,
    pub display_max: i32,
}

impl WideParameter {
    pub const fn new(name: &'static str, address_offset: u8, raw_min: u16, raw_max: u16) -> Self {
        Self {
            name,
            address_offset,
            raw_min,
            raw_max,
            display_min: raw_min as i32,
            display_max: raw_max as i32,
        }
    }

    pub const fn with_display(mut self, display_min: i32, display_max: i32) -> Self {
        self.display_min = display_min;
        self.display_max = display_max;
        self
    }

    pub fn to_display(&self, raw: u16) -> i32 {
        rescale(
            raw as i32,
            (self.raw_min as i32, self.raw_max as i32),
            (self.display_min, self.display_max),
        )
    }

    pub fn to_midi(&self, display: i32) -> Result<u16> {
        if display < self.display_min || display > self.display_max {
            return Err(self.out_of_range(display));
        }
        let raw = rescale(
            display,
            (self.display_min, self.display_max),
            (self.raw_min as i32, self.raw_max as i32),
        );
        if raw < self.raw_min as i32 || raw > self.raw_max as i32 {
            return Err(self.out_of_range(display));
        }
        Ok(raw as u16)
    }

    /// Display value to the four data bytes of a DT1 payload.
    pub fn encode(&self, display: i32) -> Result<[u8; 4]> {
        self.to_midi(display).map(encode_nibbles)
    }

    /// Four data bytes of a DT1 payload to the display value.
    pub fn decode(&self, bytes: [u8; 4]) -> Result<i32> {
        decode_nibbles(bytes).map(|raw| self.to_display(raw))
    }

    fn out_of_range(&self, value: i32) -> Error {
        Error::ValueOutOfRange {
            parameter: self.name,
            value,
            min: self.display_min,
            max: self.display_max,
        }
    }
}

pub fn encode_nibbles(value: u16) -> [u8; 4] {
    [
        ((value >> 12) & 0x0F) as u8,
        ((value >> 8) & 0x0F) as u8,
        ((value >> 4) & 0x0F) as u8,
        (value & 0x0F) as u8,
    ]
}

/// Fails if any byte carries more than a nibble.
pub fn decode_nibbles(bytes: [u8; 4]) -> Result<u16> {
    bytes.iter().try_fold(0u16, |acc, &nibble| {
        if nibble > 0x0F {
            return Err(Error::ValueOutOfRange {
                parameter: "nibble",
                value: nibble as i32,
                min: 0,
                max: 0x0F,
            });
        }
        Ok((acc << 4) | nibble as u16)
    })
}

const fn bank<const N: usize>(
    names: [&'static str; N],
    first_offset: u8,
    raw: (u16, u16),
    display: (i32, i32),
) -> [WideParameter; N] {
    let mut params = [WideParameter::new("", 0, 0, 0); N];
    let mut i = 0;
    while i < N {
        params[i] = WideParameter::new(names[i], first_offset + 4 * i as u8, raw.0, raw.1)
            .with_display(display.0, display.1);
        i += 1;
    }
    params
}

// Effect parameter banks are signed, centred on raw 32768.
const SIGNED_RAW: (u16, u16) = (12768, 52768);
const SIGNED_DISPLAY: (i32, i32) = (-20000, 20000);

pub const PROGRAM_COMMON: &[WideParameter] =
    &[WideParameter::new("PROGRAM_TEMPO", 0x11, 500, 30000)];

pub const EFFECT_1: &[WideParameter] = &bank(
    [
        "EFX1_PARAM_1",
        "EFX1_PARAM_2",
        "EFX1_PARAM_3",
        "EFX1_PARAM_4",
        "EFX1_PARAM_5",
        "EFX1_PARAM_6",
        "EFX1_PARAM_7",
        "EFX1_PARAM_8",
    ],
    0x11,
    SIGNED_RAW,
    SIGNED_DISPLAY,
);

pub const EFFECT_2: &[WideParameter] = &bank(
    [
        "EFX2_PARAM_1",
        "EFX2_PARAM_2",
        "EFX2_PARAM_3",
        "EFX2_PARAM_4",
        "EFX2_PARAM_5",
        "EFX2_PARAM_6",
        "EFX2_PARAM_7",
        "EFX2_PARAM_8",
    ],
    0x11,
    SIGNED_RAW,
    SIGNED_DISPLAY,
);

pub const DELAY: &[WideParameter] = &bank(
    [
        "DELAY_PARAM_1",
        "DELAY_PARAM_2",
        "DELAY_PARAM_3",
        "DELAY_PARAM_4",
        "DELAY_PARAM_5",
        "DELAY_PARAM_6",
        "DELAY_PARAM_7",
        "DELAY_PARAM_8",
    ],
    0x04,
    SIGNED_RAW,
    SIGNED_DISPLAY,
);

pub const REVERB: &[WideParameter] = &bank(
    [
        "REVERB_PARAM_1",
        "REVERB_PARAM_2",
        "REVERB_PARAM_3",
        "REVERB_PARAM_4",
        "REVERB_PARAM_5",
        "REVERB_PARAM_6",
        "REVERB_PARAM_7",
        "REVERB_PARAM_8",
    ],
    0x03,
    SIGNED_RAW,
    SIGNED_DISPLAY,
);

pub const DIGITAL_PARTIAL: &[WideParameter] =
    &[WideParameter::new("PCM_WAVE_NUMBER", 0x35, 0, 16384)];

pub const DRUM_NOTE: &[WideParameter] = &[
    WideParameter::new("WMT1_WAVE_GROUP_ID", 0x22, 0, 16384),
    WideParameter::new("WMT1_WAVE_NUMBER_L", 0x26, 0, 16384),
    WideParameter::new("WMT1_WAVE_NUMBER_R", 0x2A, 0, 16384),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles_most_significant_first() {
        assert_eq!(encode_nibbles(0x1234), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(encode_nibbles(12000), [0x02, 0x0E, 0x0E, 0x00]);
        assert_eq!(decode_nibbles([0x0F, 0x0F, 0x0F, 0x0F]).unwrap(), 0xFFFF);
    }

    #[test]
    fn test_decode_rejects_wide_bytes() {
        assert!(matches!(
            decode_nibbles([0x00, 0x10, 0x00, 0x00]),
            Err(Error::ValueOutOfRange { value: 0x10, .. })
        ));
    }

    #[test]
    fn test_program_tempo() {
        let tempo = &PROGRAM_COMMON[0];
        assert_eq!(tempo.encode(12000).unwrap(), [0x02, 0x0E, 0x0E, 0x00]);
        assert_eq!(tempo.decode([0x02, 0x0E, 0x0E, 0x00]).unwrap(), 12000);
        assert!(tempo.encode(499).is_err());
        assert!(tempo.encode(30001).is_err());
    }

    #[test]
    fn test_signed_bank_centre() {
        let param = &EFFECT_1[0];
        assert_eq!(param.to_midi(0).unwrap(), 32768);
        assert_eq!(param.to_display(12768), -20000);
        assert_eq!(param.to_display(52768), 20000);
        assert_eq!(param.encode(0).unwrap(), [0x08, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_banks_are_four_bytes_apart() {
        let offsets: Vec<u8> = DELAY.iter().map(|p| p.address_offset).collect();
        assert_eq!(offsets, vec![0x04, 0x08, 0x0C, 0x10, 0x14, 0x18, 0x1C, 0x20]);
        assert_eq!(EFFECT_2[7].address_offset, 0x2D);
        assert_eq!(EFFECT_2[7].name, "EFX2_PARAM_8");
    }
}
