//! Raw <-> display value conversion.
//!
//! Three shapes of parameter exist on the JD-Xi:
//! - bipolar, where the display value is `raw - 64`;
//! - linear, where `[midi_min, midi_max]` maps onto an explicit display range;
//! - identity, where the display value is the raw value.
//!
//! Linear maps round half up in both directions. When the display span is at
//! least the raw span the round trip `to_midi(to_display(raw))` is exact;
//! otherwise it is off by at most one raw unit.

use crate::error::{Error, Result};
use crate::parameter::{ParameterDescriptor, BIPOLAR_CENTER};

/// Linear map of `value` from `from` onto `to`, rounding half up.
pub(crate) fn rescale(value: i32, from: (i32, i32), to: (i32, i32)) -> i32 {
    let den = from.1 as i64 - from.0 as i64;
    if den == 0 {
        return to.0;
    }
    let num = (value as i64 - from.0 as i64) * (to.1 as i64 - to.0 as i64);
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let step = (2 * num + den).div_euclid(2 * den);
    (to.0 as i64 + step) as i32
}

/// Conversion functions bound to one descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ValueConverter<'a> {
    descriptor: &'a ParameterDescriptor,
}

impl<'a> ValueConverter<'a> {
    pub fn new(descriptor: &'a ParameterDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &'a ParameterDescriptor {
        self.descriptor
    }

    /// `(display_min, display_max)` accepted by [`to_midi`](Self::to_midi).
    pub fn display_range(&self) -> (i32, i32) {
        (self.descriptor.display_min(), self.descriptor.display_max())
    }

    /// Total: raw values outside the descriptor range still convert.
    pub fn to_display(&self, raw: u8) -> i32 {
        let d = self.descriptor;
        if d.bipolar {
            return raw as i32 - BIPOLAR_CENTER as i32;
        }
        match d.display_range {
            Some(display) => rescale(raw as i32, (d.midi_min as i32, d.midi_max as i32), display),
            None => raw as i32,
        }
    }

    pub fn to_midi(&self, display: i32) -> Result<u8> {
        let d = self.descriptor;
        let (min, max) = self.display_range();
        if display < min || display > max {
            return Err(self.out_of_range(display));
        }
        let raw = if d.bipolar {
            display + BIPOLAR_CENTER as i32
        } else {
            match d.display_range {
                Some(range) => rescale(display, range, (d.midi_min as i32, d.midi_max as i32)),
                None => display,
            }
        };
        if raw < d.midi_min as i32 || raw > d.midi_max as i32 {
            return Err(self.out_of_range(display));
        }
        let raw = raw as u8;
        if let Some(labels) = d.labels {
            if !labels.iter().any(|&(value, _)| value == raw) {
                return Err(self.out_of_range(display));
            }
        }
        Ok(raw)
    }

    /// Checks a raw value against the descriptor, e.g. before a direct write.
    pub fn validate_raw(&self, raw: u8) -> Result<u8> {
        let d = self.descriptor;
        let listed = d
            .labels
            .map_or(true, |labels| labels.iter().any(|&(value, _)| value == raw));
        if raw < d.midi_min || raw > d.midi_max || !listed {
            return Err(Error::ValueOutOfRange {
                parameter: d.name,
                value: raw as i32,
                min: d.midi_min as i32,
                max: d.midi_max as i32,
            });
        }
        Ok(raw)
    }

    /// Label of an enumerated raw value.
    pub fn label(&self, raw: u8) -> Option<&'static str> {
        self.descriptor
            .labels?
            .iter()
            .find(|&&(value, _)| value == raw)
            .map(|&(_, label)| label)
    }

    fn out_of_range(&self, value: i32) -> Error {
        let (min, max) = self.display_range();
        Error::ValueOutOfRange {
            parameter: self.descriptor.name,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{
        AnalogParam, DigitalPartialParam, Effect2Param, PartType, ProgramCommonParam,
    };

    #[test]
    fn test_rescale_rounds_half_up() {
        assert_eq!(rescale(0, (0, 2), (0, 1)), 0);
        assert_eq!(rescale(1, (0, 2), (0, 1)), 1);
        assert_eq!(rescale(1, (0, 4), (-1, 0)), -1);
        assert_eq!(rescale(2, (0, 4), (-1, 0)), 0);
        assert_eq!(rescale(5, (5, 5), (3, 9)), 3);
    }

    #[test]
    fn test_bipolar_round_trip_every_part() {
        for &part in PartType::ALL {
            for descriptor in part.descriptors().iter().filter(|d| d.bipolar) {
                let conv = descriptor.converter();
                for raw in descriptor.midi_min..=descriptor.midi_max {
                    let display = conv.to_display(raw);
                    assert_eq!(display, raw as i32 - 64);
                    assert_eq!(conv.to_midi(display).unwrap(), raw, "{}", descriptor.name);
                }
            }
        }
    }

    #[test]
    fn test_osc_pitch_coarse() {
        let conv = AnalogParam::OscPitchCoarse.descriptor().converter();
        assert_eq!(conv.to_display(40), -24);
        assert_eq!(conv.to_display(64), 0);
        assert_eq!(conv.to_display(88), 24);
        assert_eq!(conv.to_midi(-24).unwrap(), 40);
        assert!(conv.to_midi(25).is_err());
    }

    #[test]
    fn test_keyfollow_linear_mapping() {
        let conv = DigitalPartialParam::FilterCutoffKeyfollow
            .descriptor()
            .converter();
        assert_eq!(conv.to_display(54), -100);
        assert_eq!(conv.to_display(64), 0);
        assert_eq!(conv.to_display(74), 100);
        assert_eq!(conv.to_display(55), -90);
        assert_eq!(conv.to_midi(-100).unwrap(), 54);
        assert_eq!(conv.to_midi(100).unwrap(), 74);
        assert_eq!(conv.to_midi(-90).unwrap(), 55);
        assert_eq!(
            conv.to_midi(101),
            Err(Error::ValueOutOfRange {
                parameter: "FILTER_CUTOFF_KEYFOLLOW",
                value: 101,
                min: -100,
                max: 100,
            })
        );
    }

    #[test]
    fn test_offset_display_range() {
        let conv = ProgramCommonParam::VocalEffectNumber.descriptor().converter();
        assert_eq!(conv.display_range(), (1, 21));
        assert_eq!(conv.to_display(0), 1);
        assert_eq!(conv.to_midi(21).unwrap(), 20);
        assert!(conv.to_midi(0).is_err());
    }

    #[test]
    fn test_lossy_round_trip_bounded() {
        let lossy = ParameterDescriptor::new("LOSSY", 0x00, 0, 127).with_display(0, 100);
        let conv = lossy.converter();
        for raw in 0..=127u8 {
            let back = conv.to_midi(conv.to_display(raw)).unwrap();
            assert!(
                (back as i32 - raw as i32).abs() <= 1,
                "raw {} came back as {}",
                raw,
                back
            );
        }
        assert_eq!(conv.to_display(127), 100);
        assert_eq!(conv.to_midi(100).unwrap(), 127);
    }

    #[test]
    fn test_expanding_round_trip_exact() {
        let wide = ParameterDescriptor::new("WIDE", 0x00, 0, 10).with_display(0, 1000);
        let conv = wide.converter();
        for raw in 0..=10u8 {
            assert_eq!(conv.to_midi(conv.to_display(raw)).unwrap(), raw);
        }
    }

    #[test]
    fn test_identity() {
        let conv = AnalogParam::FilterCutoff.descriptor().converter();
        assert_eq!(conv.to_display(100), 100);
        assert_eq!(conv.to_midi(0).unwrap(), 0);
        assert!(conv.to_midi(128).is_err());
        assert!(conv.to_midi(-1).is_err());
    }

    #[test]
    fn test_enumerated_values() {
        let conv = Effect2Param::Type.descriptor().converter();
        assert_eq!(conv.to_midi(5).unwrap(), 5);
        assert_eq!(conv.label(5), Some("FLANGER"));
        assert_eq!(conv.label(3), None);
        assert!(matches!(
            conv.to_midi(3),
            Err(Error::ValueOutOfRange { value: 3, .. })
        ));
        assert!(conv.validate_raw(3).is_err());
        assert_eq!(conv.validate_raw(8).unwrap(), 8);
    }

    #[test]
    fn test_to_display_is_total() {
        let conv = AnalogParam::OscPitchCoarse.descriptor().converter();
        assert_eq!(conv.to_display(0), -64);
        assert_eq!(conv.to_display(127), 63);
        assert!(conv.validate_raw(0).is_err());
    }
}
