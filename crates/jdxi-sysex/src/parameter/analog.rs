//! Analog synth tone block (`19 42 00 xx`).

use super::{ParameterDescriptor as P, ValueLabels, LFO_SHAPES, OFF_ON, TEMPO_SYNC_NOTES};

const OSC_WAVEFORMS: ValueLabels = &[(0, "SAW"), (1, "TRI"), (2, "PW-SQR")];

const SUB_OSC_TYPES: ValueLabels = &[(0, "OFF"), (1, "OCT-1"), (2, "OCT-2")];

parameter_set! {
    pub enum AnalogParam for Analog {
        LfoShape => P::new("LFO_SHAPE", 0x16, 0, 5).with_labels(LFO_SHAPES),
        LfoRate => P::new("LFO_RATE", 0x17, 0, 127),
        LfoFadeTime => P::new("LFO_FADE_TIME", 0x18, 0, 127),
        LfoTempoSyncSwitch => P::new("LFO_TEMPO_SYNC_SWITCH", 0x19, 0, 1).with_labels(OFF_ON),
        LfoTempoSyncNote => P::new("LFO_TEMPO_SYNC_NOTE", 0x1A, 0, 19).with_labels(TEMPO_SYNC_NOTES),
        LfoPitchDepth => P::new("LFO_PITCH_DEPTH", 0x1B, 1, 127).centered(),
        LfoFilterDepth => P::new("LFO_FILTER_DEPTH", 0x1C, 1, 127).centered(),
        LfoAmpDepth => P::new("LFO_AMP_DEPTH", 0x1D, 1, 127).centered(),
        LfoKeyTrigger => P::new("LFO_KEY_TRIGGER", 0x1E, 0, 1).with_labels(OFF_ON),
        OscWaveform => P::new("OSC_WAVEFORM", 0x1F, 0, 2).with_labels(OSC_WAVEFORMS),
        OscPitchCoarse => P::new("OSC_PITCH_COARSE", 0x20, 40, 88).centered(),
        OscPitchFine => P::new("OSC_PITCH_FINE", 0x21, 14, 114).centered(),
        OscPulseWidth => P::new("OSC_PULSE_WIDTH", 0x22, 0, 127),
        OscPulseWidthModDepth => P::new("OSC_PULSE_WIDTH_MOD_DEPTH", 0x23, 0, 127),
        OscPitchEnvVelocitySens => P::new("OSC_PITCH_ENV_VELOCITY_SENS", 0x24, 1, 127).centered(),
        OscPitchEnvAttackTime => P::new("OSC_PITCH_ENV_ATTACK_TIME", 0x25, 0, 127),
        OscPitchEnvDecay => P::new("OSC_PITCH_ENV_DECAY", 0x26, 0, 127),
        OscPitchEnvDepth => P::new("OSC_PITCH_ENV_DEPTH", 0x27, 1, 127).centered(),
        SubOscillatorType => P::new("SUB_OSCILLATOR_TYPE", 0x28, 0, 2).with_labels(SUB_OSC_TYPES),
        FilterSwitch => P::new("FILTER_SWITCH", 0x29, 0, 1).with_labels(OFF_ON),
        FilterCutoff => P::new("FILTER_CUTOFF", 0x2A, 0, 127),
        FilterCutoffKeyfollow => P::new("FILTER_CUTOFF_KEYFOLLOW", 0x2B, 54, 74).with_display(-100, 100),
        FilterResonance => P::new("FILTER_RESONANCE", 0x2C, 0, 127),
        FilterEnvVelocitySens => P::new("FILTER_ENV_VELOCITY_SENS", 0x2D, 1, 127).centered(),
        FilterEnvAttackTime => P::new("FILTER_ENV_ATTACK_TIME", 0x2E, 0, 127),
        FilterEnvDecayTime => P::new("FILTER_ENV_DECAY_TIME", 0x2F, 0, 127),
        FilterEnvSustainLevel => P::new("FILTER_ENV_SUSTAIN_LEVEL", 0x30, 0, 127),
        FilterEnvReleaseTime => P::new("FILTER_ENV_RELEASE_TIME", 0x31, 0, 127),
        FilterEnvDepth => P::new("FILTER_ENV_DEPTH", 0x32, 1, 127).centered(),
        AmpLevel => P::new("AMP_LEVEL", 0x33, 0, 127),
        AmpLevelKeyfollow => P::new("AMP_LEVEL_KEYFOLLOW", 0x34, 54, 74).with_display(-100, 100),
        AmpLevelVelocitySens => P::new("AMP_LEVEL_VELOCITY_SENS", 0x35, 1, 127).centered(),
        AmpEnvAttackTime => P::new("AMP_ENV_ATTACK_TIME", 0x36, 0, 127),
        AmpEnvDecayTime => P::new("AMP_ENV_DECAY_TIME", 0x37, 0, 127),
        AmpEnvSustainLevel => P::new("AMP_ENV_SUSTAIN_LEVEL", 0x38, 0, 127),
        AmpEnvReleaseTime => P::new("AMP_ENV_RELEASE_TIME", 0x39, 0, 127),
        PortamentoSwitch => P::new("PORTAMENTO_SWITCH", 0x3A, 0, 1).with_labels(OFF_ON),
        PortamentoTime => P::new("PORTAMENTO_TIME", 0x3B, 0, 127),
        LegatoSwitch => P::new("LEGATO_SWITCH", 0x3C, 0, 1).with_labels(OFF_ON),
        OctaveShift => P::new("OCTAVE_SHIFT", 0x3D, 61, 67).centered(),
        PitchBendRangeUp => P::new("PITCH_BEND_RANGE_UP", 0x3E, 0, 24),
        PitchBendRangeDown => P::new("PITCH_BEND_RANGE_DOWN", 0x3F, 0, 24),
        LfoPitchModulationControl => P::new("LFO_PITCH_MODULATION_CONTROL", 0x41, 1, 127).centered(),
        LfoFilterModulationControl => P::new("LFO_FILTER_MODULATION_CONTROL", 0x42, 1, 127).centered(),
        LfoAmpModulationControl => P::new("LFO_AMP_MODULATION_CONTROL", 0x43, 1, 127).centered(),
        LfoRateModulationControl => P::new("LFO_RATE_MODULATION_CONTROL", 0x44, 1, 127).centered(),
    }
}
