//! Temporary program blocks: common, vocal FX, effects and arpeggio.

use super::{ParameterDescriptor as P, ValueLabels, OFF_ON};

const VOCAL_EFFECT_TYPES: ValueLabels = &[(0, "OFF"), (1, "VOCODER"), (2, "AUTO-PITCH")];

const OUTPUT_ASSIGN: ValueLabels = &[
    (0, "EFX1"),
    (1, "EFX2"),
    (2, "DLY"),
    (3, "REV"),
    (4, "DIR"),
];

const AUTO_PITCH_TYPES: ValueLabels = &[(0, "SOFT"), (1, "HARD"), (2, "ELECTRIC1"), (3, "ELECTRIC2")];

const VOCODER_ENVELOPES: ValueLabels = &[(0, "SHARP"), (1, "SOFT"), (2, "LONG")];

const EFFECT_1_TYPES: ValueLabels = &[
    (0, "THRU"),
    (1, "DISTORTION"),
    (2, "FUZZ"),
    (3, "COMPRESSOR"),
    (4, "BIT CRUSHER"),
];

// Effect 2 shares the type numbering with effect 1, so its values skip 1..=4.
const EFFECT_2_TYPES: ValueLabels = &[
    (0, "THRU"),
    (5, "FLANGER"),
    (6, "PHASER"),
    (7, "RING MOD"),
    (8, "SLICER"),
];

const EFFECT_1_OUTPUT: ValueLabels = &[(0, "DIR"), (1, "EFX2")];

const ARPEGGIO_GRIDS: ValueLabels = &[
    (0, "04_"),
    (1, "08_"),
    (2, "08L"),
    (3, "08H"),
    (4, "08t"),
    (5, "16_"),
    (6, "16L"),
    (7, "16H"),
    (8, "16t"),
];

const ARPEGGIO_DURATIONS: ValueLabels = &[
    (0, "30"),
    (1, "40"),
    (2, "50"),
    (3, "60"),
    (4, "70"),
    (5, "80"),
    (6, "90"),
    (7, "100"),
    (8, "120"),
    (9, "FUL"),
];

const ARPEGGIO_MOTIFS: ValueLabels = &[
    (0, "UP/L"),
    (1, "UP/H"),
    (2, "UP/_"),
    (3, "dn/L"),
    (4, "dn/H"),
    (5, "dn/_"),
    (6, "Ud/L"),
    (7, "Ud/H"),
    (8, "Ud/_"),
    (9, "rn/L"),
    (10, "rn/_"),
    (11, "PHRASE"),
];

parameter_set! {
    /// Program common (`18 00 00 xx`).
    pub enum ProgramCommonParam for ProgramCommon {
        ProgramLevel => P::new("PROGRAM_LEVEL", 0x10, 0, 127),
        VocalEffect => P::new("VOCAL_EFFECT", 0x16, 0, 2).with_labels(VOCAL_EFFECT_TYPES),
        VocalEffectNumber => P::new("VOCAL_EFFECT_NUMBER", 0x1C, 0, 20).with_display(1, 21),
        VocalEffectPart => P::new("VOCAL_EFFECT_PART", 0x1D, 0, 1).with_display(1, 2),
        AutoNoteSwitch => P::new("AUTO_NOTE_SWITCH", 0x1E, 0, 1).with_labels(OFF_ON),
    }
}

parameter_set! {
    /// Program vocal effect (`18 00 01 xx`).
    pub enum VocalFxParam for VocalFx {
        Level => P::new("LEVEL", 0x00, 0, 127),
        Pan => P::new("PAN", 0x01, 0, 127).centered(),
        DelaySendLevel => P::new("DELAY_SEND_LEVEL", 0x02, 0, 127),
        ReverbSendLevel => P::new("REVERB_SEND_LEVEL", 0x03, 0, 127),
        OutputAssign => P::new("OUTPUT_ASSIGN", 0x04, 0, 4).with_labels(OUTPUT_ASSIGN),
        AutoPitchSwitch => P::new("AUTO_PITCH_SWITCH", 0x05, 0, 1).with_labels(OFF_ON),
        AutoPitchType => P::new("AUTO_PITCH_TYPE", 0x06, 0, 3).with_labels(AUTO_PITCH_TYPES),
        AutoPitchScale => P::new("AUTO_PITCH_SCALE", 0x07, 0, 1),
        AutoPitchKey => P::new("AUTO_PITCH_KEY", 0x08, 0, 23),
        AutoPitchNote => P::new("AUTO_PITCH_NOTE", 0x09, 0, 11),
        AutoPitchGender => P::new("AUTO_PITCH_GENDER", 0x0A, 0, 20).with_display(-10, 10),
        AutoPitchOctave => P::new("AUTO_PITCH_OCTAVE", 0x0B, 0, 2).with_display(-1, 1),
        AutoPitchBalance => P::new("AUTO_PITCH_BALANCE", 0x0C, 0, 100),
        VocoderSwitch => P::new("VOCODER_SWITCH", 0x0D, 0, 1).with_labels(OFF_ON),
        VocoderEnvelope => P::new("VOCODER_ENVELOPE", 0x0E, 0, 2).with_labels(VOCODER_ENVELOPES),
        VocoderLevel => P::new("VOCODER_LEVEL", 0x0F, 0, 127),
        VocoderMicSens => P::new("VOCODER_MIC_SENS", 0x10, 0, 127),
        VocoderSynthLevel => P::new("VOCODER_SYNTH_LEVEL", 0x11, 0, 127),
        VocoderMicMix => P::new("VOCODER_MIC_MIX", 0x12, 0, 127),
        VocoderMicHpf => P::new("VOCODER_MIC_HPF", 0x13, 0, 13),
    }
}

parameter_set! {
    /// Program effect 1 (`18 00 02 xx`).
    pub enum Effect1Param for Effect1 {
        Type => P::new("EFX1_TYPE", 0x00, 0, 4).with_labels(EFFECT_1_TYPES),
        Level => P::new("EFX1_LEVEL", 0x01, 0, 127),
        DelaySendLevel => P::new("EFX1_DELAY_SEND_LEVEL", 0x02, 0, 127),
        ReverbSendLevel => P::new("EFX1_REVERB_SEND_LEVEL", 0x03, 0, 127),
        OutputAssign => P::new("EFX1_OUTPUT_ASSIGN", 0x04, 0, 1).with_labels(EFFECT_1_OUTPUT),
    }
}

parameter_set! {
    /// Program effect 2 (`18 00 04 xx`).
    pub enum Effect2Param for Effect2 {
        Type => P::new("EFX2_TYPE", 0x00, 0, 8).with_labels(EFFECT_2_TYPES),
        Level => P::new("EFX2_LEVEL", 0x01, 0, 127),
        DelaySendLevel => P::new("EFX2_DELAY_SEND_LEVEL", 0x02, 0, 127),
        ReverbSendLevel => P::new("EFX2_REVERB_SEND_LEVEL", 0x03, 0, 127),
    }
}

parameter_set! {
    /// Program delay (`18 00 06 xx`). The delay type and time live in the
    /// wide parameters.
    pub enum DelayParam for Delay {
        Level => P::new("DELAY_LEVEL", 0x01, 0, 127),
        ReverbSendLevel => P::new("DELAY_REVERB_SEND_LEVEL", 0x03, 0, 127),
    }
}

parameter_set! {
    /// Program reverb (`18 00 08 xx`).
    pub enum ReverbParam for Reverb {
        Level => P::new("REVERB_LEVEL", 0x01, 0, 127),
    }
}

parameter_set! {
    /// Program controller / arpeggio (`18 00 40 xx`).
    pub enum ArpeggioParam for Arpeggio {
        Grid => P::new("ARPEGGIO_GRID", 0x01, 0, 8).with_labels(ARPEGGIO_GRIDS),
        Duration => P::new("ARPEGGIO_DURATION", 0x02, 0, 9).with_labels(ARPEGGIO_DURATIONS),
        Switch => P::new("ARPEGGIO_SWITCH", 0x03, 0, 1).with_labels(OFF_ON),
        Style => P::new("ARPEGGIO_STYLE", 0x05, 0, 127).with_display(1, 128),
        Motif => P::new("ARPEGGIO_MOTIF", 0x06, 0, 11).with_labels(ARPEGGIO_MOTIFS),
        OctaveRange => P::new("ARPEGGIO_OCTAVE_RANGE", 0x07, 61, 67).centered(),
        AccentRate => P::new("ARPEGGIO_ACCENT_RATE", 0x09, 0, 100),
        Velocity => P::new("ARPEGGIO_VELOCITY", 0x0A, 0, 127),
    }
}
