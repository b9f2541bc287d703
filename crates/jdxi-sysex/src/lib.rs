//! System-Exclusive codec for the Roland JD-Xi.
//!
//! Provides the four-byte address space, DT1/RQ1 composition and parsing with
//! the Roland checksum, the per-part parameter registry, and raw <-> display
//! value conversion.
//!
//! Everything here is synchronous and touches no shared state, so parsing and
//! conversion are safe to run on a MIDI driver callback thread.

pub mod error;
pub use error::{Error, ProtocolError, Result};

pub mod address;
pub use address::{AddressOffset, SysExAddress};

mod address_map;
pub use address_map::{AddressMap, Location};

mod checksum;
pub use checksum::{checksum, validate_checksum};

mod convert;
pub use convert::ValueConverter;

pub mod message;
pub use message::{
    compose_read, compose_write, parse, BlockSize, Command, MessageComposer, MessageParser,
    SysExMessage,
};

pub mod parameter;
pub use parameter::{
    AnalogParam, ArpeggioParam, DelayParam, DigitalCommonParam, DigitalModifyParam,
    DigitalPartialParam, DrumCommonParam, DrumNoteParam, Effect1Param, Effect2Param, Parameter,
    ParameterDescriptor, PartType, ProgramCommonParam, ReverbParam, VocalFxParam, WideParameter,
};

mod request;
pub use request::{for_area, RequestSequencer, SynthArea};
