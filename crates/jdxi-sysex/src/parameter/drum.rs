//! Drum kit blocks: kit common (`19 70 00 xx`) and per-key partials
//! (`19 70 2E xx` for key 36 up to `19 70 76 xx` for key 72).

use super::{ParameterDescriptor as P, ValueLabels, OFF_ON};

const ENV_MODES: ValueLabels = &[(0, "NO-SUS"), (1, "SUSTAIN")];

const OUTPUT_ASSIGN: ValueLabels = &[
    (0, "EFX1"),
    (1, "EFX2"),
    (2, "DLY"),
    (3, "REV"),
    (4, "DIR"),
];

const WAVE_GAINS: ValueLabels = &[(0, "-6dB"), (1, "0dB"), (2, "+6dB"), (3, "+12dB")];

const FXM_COLORS: ValueLabels = &[(0, "1"), (1, "2"), (2, "3"), (3, "4")];

const ALTERNATE_PAN: ValueLabels = &[(0, "OFF"), (1, "ON"), (2, "REVERSE")];

parameter_set! {
    pub enum DrumCommonParam for DrumCommon {
        KitLevel => P::new("KIT_LEVEL", 0x0C, 0, 127),
    }
}

parameter_set! {
    pub enum DrumNoteParam for DrumNote {
        PartialLevel => P::new("PARTIAL_LEVEL", 0x0C, 0, 127),
        PartialCoarseTune => P::new("PARTIAL_COARSE_TUNE", 0x0D, 0, 127),
        PartialFineTune => P::new("PARTIAL_FINE_TUNE", 0x0E, 14, 114).centered(),
        PartialRandomPitchDepth => P::new("PARTIAL_RANDOM_PITCH_DEPTH", 0x0F, 0, 30),
        PartialPan => P::new("PARTIAL_PAN", 0x10, 0, 127).centered(),
        PartialRandomPanDepth => P::new("PARTIAL_RANDOM_PAN_DEPTH", 0x11, 0, 63),
        PartialAlternatePanDepth => P::new("PARTIAL_ALTERNATE_PAN_DEPTH", 0x12, 1, 127).centered(),
        PartialEnvMode => P::new("PARTIAL_ENV_MODE", 0x13, 0, 1).with_labels(ENV_MODES),
        PartialOutputLevel => P::new("PARTIAL_OUTPUT_LEVEL", 0x14, 0, 127),
        PartialChorusSendLevel => P::new("PARTIAL_CHORUS_SEND_LEVEL", 0x19, 0, 127),
        PartialReverbSendLevel => P::new("PARTIAL_REVERB_SEND_LEVEL", 0x1A, 0, 127),
        PartialOutputAssign => P::new("PARTIAL_OUTPUT_ASSIGN", 0x1B, 0, 4).with_labels(OUTPUT_ASSIGN),
        PartialPitchBendRange => P::new("PARTIAL_PITCH_BEND_RANGE", 0x1C, 0, 48),
        PartialReceiveExpression => P::new("PARTIAL_RECEIVE_EXPRESSION", 0x1D, 0, 1).with_labels(OFF_ON),
        PartialReceiveHold1 => P::new("PARTIAL_RECEIVE_HOLD_1", 0x1E, 0, 1).with_labels(OFF_ON),
        Wmt1WaveSwitch => P::new("WMT1_WAVE_SWITCH", 0x20, 0, 1).with_labels(OFF_ON),
        Wmt1WaveGain => P::new("WMT1_WAVE_GAIN", 0x2E, 0, 3).with_labels(WAVE_GAINS),
        Wmt1WaveFxmSwitch => P::new("WMT1_WAVE_FXM_SWITCH", 0x2F, 0, 1).with_labels(OFF_ON),
        Wmt1WaveFxmColor => P::new("WMT1_WAVE_FXM_COLOR", 0x30, 0, 3).with_labels(FXM_COLORS),
        Wmt1WaveFxmDepth => P::new("WMT1_WAVE_FXM_DEPTH", 0x31, 0, 16),
        Wmt1WaveTempoSync => P::new("WMT1_WAVE_TEMPO_SYNC", 0x32, 0, 1).with_labels(OFF_ON),
        Wmt1WaveCoarseTune => P::new("WMT1_WAVE_COARSE_TUNE", 0x33, 16, 112).centered(),
        Wmt1WaveFineTune => P::new("WMT1_WAVE_FINE_TUNE", 0x34, 14, 114).centered(),
        Wmt1WavePan => P::new("WMT1_WAVE_PAN", 0x35, 0, 127).centered(),
        Wmt1WaveRandomPanSwitch => P::new("WMT1_WAVE_RANDOM_PAN_SWITCH", 0x36, 0, 1).with_labels(OFF_ON),
        Wmt1WaveAlternatePanSwitch => P::new("WMT1_WAVE_ALTERNATE_PAN_SWITCH", 0x37, 0, 2).with_labels(ALTERNATE_PAN),
        Wmt1WaveLevel => P::new("WMT1_WAVE_LEVEL", 0x38, 0, 127),
        Wmt1VelocityRangeLower => P::new("WMT1_VELOCITY_RANGE_LOWER", 0x39, 1, 127),
        Wmt1VelocityRangeUpper => P::new("WMT1_VELOCITY_RANGE_UPPER", 0x3A, 1, 127),
        Wmt1VelocityFadeWidthLower => P::new("WMT1_VELOCITY_FADE_WIDTH_LOWER", 0x3B, 0, 127),
        Wmt1VelocityFadeWidthUpper => P::new("WMT1_VELOCITY_FADE_WIDTH_UPPER", 0x3C, 0, 127),
    }
}
