//! Digital synth tone blocks: common, partial and modify.

use super::{ParameterDescriptor as P, ValueLabels, LFO_SHAPES, OFF_ON, TEMPO_SYNC_NOTES};

const OSC_WAVES: ValueLabels = &[
    (0, "SAW"),
    (1, "SQR"),
    (2, "PW-SQR"),
    (3, "TRI"),
    (4, "SINE"),
    (5, "NOISE"),
    (6, "SUPER-SAW"),
    (7, "PCM"),
];

const WAVE_VARIATIONS: ValueLabels = &[(0, "A"), (1, "B"), (2, "C")];

const FILTER_MODES: ValueLabels = &[
    (0, "BYPASS"),
    (1, "LPF"),
    (2, "HPF"),
    (3, "BPF"),
    (4, "PKG"),
    (5, "LPF2"),
    (6, "LPF3"),
    (7, "LPF4"),
];

const FILTER_SLOPES: ValueLabels = &[(0, "-12dB"), (1, "-24dB")];

const WAVE_GAINS: ValueLabels = &[(0, "-6dB"), (1, "0dB"), (2, "+6dB"), (3, "+12dB")];

const RING_SWITCH: ValueLabels = &[(0, "OFF"), (2, "ON")];

const PORTAMENTO_MODES: ValueLabels = &[(0, "NORMAL"), (1, "LEGATO")];

const UNISON_SIZES: ValueLabels = &[(0, "2"), (1, "4"), (2, "6"), (3, "8")];

const ENVELOPE_LOOP_MODES: ValueLabels = &[(0, "OFF"), (1, "FREE-RUN"), (2, "TEMPO-SYNC")];

parameter_set! {
    /// Digital tone common (`19 01 00 xx` / `19 21 00 xx`).
    pub enum DigitalCommonParam for DigitalCommon {
        ToneLevel => P::new("TONE_LEVEL", 0x0C, 0, 127),
        PortamentoSwitch => P::new("PORTAMENTO_SWITCH", 0x12, 0, 1).with_labels(OFF_ON),
        PortamentoTime => P::new("PORTAMENTO_TIME", 0x13, 0, 127),
        MonoSwitch => P::new("MONO_SWITCH", 0x14, 0, 1).with_labels(OFF_ON),
        OctaveShift => P::new("OCTAVE_SHIFT", 0x15, 61, 67).centered(),
        PitchBendRangeUp => P::new("PITCH_BEND_RANGE_UP", 0x16, 0, 24),
        PitchBendRangeDown => P::new("PITCH_BEND_RANGE_DOWN", 0x17, 0, 24),
        Partial1Switch => P::new("PARTIAL1_SWITCH", 0x19, 0, 1).with_labels(OFF_ON),
        Partial1Select => P::new("PARTIAL1_SELECT", 0x1A, 0, 1).with_labels(OFF_ON),
        Partial2Switch => P::new("PARTIAL2_SWITCH", 0x1B, 0, 1).with_labels(OFF_ON),
        Partial2Select => P::new("PARTIAL2_SELECT", 0x1C, 0, 1).with_labels(OFF_ON),
        Partial3Switch => P::new("PARTIAL3_SWITCH", 0x1D, 0, 1).with_labels(OFF_ON),
        Partial3Select => P::new("PARTIAL3_SELECT", 0x1E, 0, 1).with_labels(OFF_ON),
        RingSwitch => P::new("RING_SWITCH", 0x1F, 0, 2).with_labels(RING_SWITCH),
        UnisonSwitch => P::new("UNISON_SWITCH", 0x2E, 0, 1).with_labels(OFF_ON),
        PortamentoMode => P::new("PORTAMENTO_MODE", 0x31, 0, 1).with_labels(PORTAMENTO_MODES),
        LegatoSwitch => P::new("LEGATO_SWITCH", 0x32, 0, 1).with_labels(OFF_ON),
        AnalogFeel => P::new("ANALOG_FEEL", 0x34, 0, 127),
        WaveShape => P::new("WAVE_SHAPE", 0x35, 0, 127),
        ToneCategory => P::new("TONE_CATEGORY", 0x36, 0, 127),
        UnisonSize => P::new("UNISON_SIZE", 0x3C, 0, 3).with_labels(UNISON_SIZES),
    }
}

parameter_set! {
    /// Digital tone partial (`19 01 20 xx` .. `19 01 22 xx`).
    pub enum DigitalPartialParam for DigitalPartial {
        OscWave => P::new("OSC_WAVE", 0x00, 0, 7).with_labels(OSC_WAVES),
        OscWaveVariation => P::new("OSC_WAVE_VARIATION", 0x01, 0, 2).with_labels(WAVE_VARIATIONS),
        OscPitch => P::new("OSC_PITCH", 0x03, 40, 88).centered(),
        OscDetune => P::new("OSC_DETUNE", 0x04, 14, 114).centered(),
        OscPulseWidthModDepth => P::new("OSC_PULSE_WIDTH_MOD_DEPTH", 0x05, 0, 127),
        OscPulseWidth => P::new("OSC_PULSE_WIDTH", 0x06, 0, 127),
        OscPitchEnvAttackTime => P::new("OSC_PITCH_ENV_ATTACK_TIME", 0x07, 0, 127),
        OscPitchEnvDecay => P::new("OSC_PITCH_ENV_DECAY", 0x08, 0, 127),
        OscPitchEnvDepth => P::new("OSC_PITCH_ENV_DEPTH", 0x09, 1, 127).centered(),
        FilterMode => P::new("FILTER_MODE", 0x0A, 0, 7).with_labels(FILTER_MODES),
        FilterSlope => P::new("FILTER_SLOPE", 0x0B, 0, 1).with_labels(FILTER_SLOPES),
        FilterCutoff => P::new("FILTER_CUTOFF", 0x0C, 0, 127),
        FilterCutoffKeyfollow => P::new("FILTER_CUTOFF_KEYFOLLOW", 0x0D, 54, 74).with_display(-100, 100),
        FilterEnvVelocitySens => P::new("FILTER_ENV_VELOCITY_SENS", 0x0E, 1, 127).centered(),
        FilterResonance => P::new("FILTER_RESONANCE", 0x0F, 0, 127),
        FilterEnvAttackTime => P::new("FILTER_ENV_ATTACK_TIME", 0x10, 0, 127),
        FilterEnvDecayTime => P::new("FILTER_ENV_DECAY_TIME", 0x11, 0, 127),
        FilterEnvSustainLevel => P::new("FILTER_ENV_SUSTAIN_LEVEL", 0x12, 0, 127),
        FilterEnvReleaseTime => P::new("FILTER_ENV_RELEASE_TIME", 0x13, 0, 127),
        FilterEnvDepth => P::new("FILTER_ENV_DEPTH", 0x14, 1, 127).centered(),
        AmpLevel => P::new("AMP_LEVEL", 0x15, 0, 127),
        AmpLevelVelocitySens => P::new("AMP_LEVEL_VELOCITY_SENS", 0x16, 1, 127).centered(),
        AmpEnvAttackTime => P::new("AMP_ENV_ATTACK_TIME", 0x17, 0, 127),
        AmpEnvDecayTime => P::new("AMP_ENV_DECAY_TIME", 0x18, 0, 127),
        AmpEnvSustainLevel => P::new("AMP_ENV_SUSTAIN_LEVEL", 0x19, 0, 127),
        AmpEnvReleaseTime => P::new("AMP_ENV_RELEASE_TIME", 0x1A, 0, 127),
        AmpPan => P::new("AMP_PAN", 0x1B, 0, 127).centered(),
        LfoShape => P::new("LFO_SHAPE", 0x1C, 0, 5).with_labels(LFO_SHAPES),
        LfoRate => P::new("LFO_RATE", 0x1D, 0, 127),
        LfoTempoSyncSwitch => P::new("LFO_TEMPO_SYNC_SWITCH", 0x1E, 0, 1).with_labels(OFF_ON),
        LfoTempoSyncNote => P::new("LFO_TEMPO_SYNC_NOTE", 0x1F, 0, 19).with_labels(TEMPO_SYNC_NOTES),
        LfoFadeTime => P::new("LFO_FADE_TIME", 0x20, 0, 127),
        LfoKeyTrigger => P::new("LFO_KEY_TRIGGER", 0x21, 0, 1).with_labels(OFF_ON),
        LfoPitchDepth => P::new("LFO_PITCH_DEPTH", 0x22, 1, 127).centered(),
        LfoFilterDepth => P::new("LFO_FILTER_DEPTH", 0x23, 1, 127).centered(),
        LfoAmpDepth => P::new("LFO_AMP_DEPTH", 0x24, 1, 127).centered(),
        LfoPanDepth => P::new("LFO_PAN_DEPTH", 0x25, 1, 127).centered(),
        ModLfoShape => P::new("MOD_LFO_SHAPE", 0x26, 0, 5).with_labels(LFO_SHAPES),
        ModLfoRate => P::new("MOD_LFO_RATE", 0x27, 0, 127),
        ModLfoTempoSyncSwitch => P::new("MOD_LFO_TEMPO_SYNC_SWITCH", 0x28, 0, 1).with_labels(OFF_ON),
        ModLfoTempoSyncNote => P::new("MOD_LFO_TEMPO_SYNC_NOTE", 0x29, 0, 19).with_labels(TEMPO_SYNC_NOTES),
        OscPulseWidthShift => P::new("OSC_PULSE_WIDTH_SHIFT", 0x2A, 0, 127),
        ModLfoPitchDepth => P::new("MOD_LFO_PITCH_DEPTH", 0x2C, 1, 127).centered(),
        ModLfoFilterDepth => P::new("MOD_LFO_FILTER_DEPTH", 0x2D, 1, 127).centered(),
        ModLfoAmpDepth => P::new("MOD_LFO_AMP_DEPTH", 0x2E, 1, 127).centered(),
        ModLfoPanDepth => P::new("MOD_LFO_PAN_DEPTH", 0x2F, 1, 127).centered(),
        CutoffAftertouchSens => P::new("CUTOFF_AFTERTOUCH_SENS", 0x30, 1, 127).centered(),
        LevelAftertouchSens => P::new("LEVEL_AFTERTOUCH_SENS", 0x31, 1, 127).centered(),
        WaveGain => P::new("WAVE_GAIN", 0x34, 0, 3).with_labels(WAVE_GAINS),
        HpfCutoff => P::new("HPF_CUTOFF", 0x39, 0, 127),
        SuperSawDetune => P::new("SUPER_SAW_DETUNE", 0x3A, 0, 127),
        ModLfoRateControl => P::new("MOD_LFO_RATE_CONTROL", 0x3B, 1, 127).centered(),
        AmpLevelKeyfollow => P::new("AMP_LEVEL_KEYFOLLOW", 0x3C, 54, 74).with_display(-100, 100),
    }
}

parameter_set! {
    /// Digital tone modify (`19 01 50 xx`).
    pub enum DigitalModifyParam for DigitalModify {
        AttackTimeIntervalSens => P::new("ATTACK_TIME_INTERVAL_SENS", 0x01, 0, 127),
        ReleaseTimeIntervalSens => P::new("RELEASE_TIME_INTERVAL_SENS", 0x02, 0, 127),
        PortamentoTimeIntervalSens => P::new("PORTAMENTO_TIME_INTERVAL_SENS", 0x03, 0, 127),
        EnvelopeLoopMode => P::new("ENVELOPE_LOOP_MODE", 0x04, 0, 2).with_labels(ENVELOPE_LOOP_MODES),
        EnvelopeLoopSyncNote => P::new("ENVELOPE_LOOP_SYNC_NOTE", 0x05, 0, 19).with_labels(TEMPO_SYNC_NOTES),
        ChromaticPortamento => P::new("CHROMATIC_PORTAMENTO", 0x06, 0, 1).with_labels(OFF_ON),
    }
}
