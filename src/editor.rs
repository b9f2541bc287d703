//! Editor session: parameter edits, refreshes and inbound events over one
//! transport.

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::inbound::{InboundDecoder, ParameterEvent};
use crossbeam_channel::{bounded, Receiver, TrySendError};
use jdxi_midi_io::{SysExReceiver, SysExSink};
use jdxi_sysex::{
    MessageComposer, MessageParser, Parameter, ParameterDescriptor, PartType, RequestSequencer,
    SynthArea, SysExAddress,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

#[cfg(feature = "midi-io")]
use jdxi_midi_io::{MidiInputManager, MidiOutputManager};

/// Shared flag that stops a refresh between two requests.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Outcome of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    pub area: SynthArea,
    pub sent: usize,
    pub total: usize,
    pub cancelled: bool,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.sent == self.total
    }
}

/// Builder for an [`Editor`].
///
/// # Example
///
/// ```ignore
/// let editor = Editor::builder()
///     .config(EditorConfig::load("jdxi.toml")?)
///     .midi_io()
///     .build()?;
/// ```
pub struct EditorBuilder {
    config: EditorConfig,
    transport: Option<Box<dyn FnOnce(SysExReceiver) -> Result<Transport>>>,
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            transport: None,
        }
    }
}

impl EditorBuilder {
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: `10h`
    pub fn device_id(mut self, device_id: u8) -> Self {
        self.config.device_id = device_id;
        self
    }

    /// Default: 8192. Zero is rejected by [`build`](Self::build).
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.event_capacity = capacity;
        self
    }

    /// Default: 0 (no pause)
    pub fn request_interval_ms(mut self, interval_ms: u64) -> Self {
        self.config.request_interval_ms = interval_ms;
        self
    }

    /// Sends through `sink`. Inbound bytes must be fed to
    /// [`Editor::handle_sysex`] or to [`Editor::receiver`].
    pub fn sink(self, sink: impl SysExSink + 'static) -> Self {
        self.sink_with(move |_| sink)
    }

    /// Builds the sink from the editor's inbound receiver, for transports
    /// that deliver replies themselves.
    pub fn sink_with<S, F>(mut self, factory: F) -> Self
    where
        S: SysExSink + 'static,
        F: FnOnce(SysExReceiver) -> S + 'static,
    {
        self.transport = Some(Box::new(move |receiver| {
            Ok(Transport {
                sink: Arc::new(factory(receiver)),
                #[cfg(feature = "midi-io")]
                input: None,
            })
        }));
        self
    }

    /// Opens the hardware ports named in the config (`"JD-Xi"` by default).
    #[cfg(feature = "midi-io")]
    pub fn midi_io(mut self) -> Self {
        let output_port = self.config.output_port().to_string();
        let input_port = self.config.input_port().to_string();
        self.transport = Some(Box::new(move |receiver| {
            let output = MidiOutputManager::new()?;
            output.connect_by_name(&output_port)?;
            let input = MidiInputManager::new(receiver)?;
            input.connect_by_name(&input_port)?;
            Ok(Transport {
                sink: Arc::new(output),
                input: Some(input),
            })
        }));
        self
    }

    pub fn build(self) -> Result<Editor> {
        self.config.validate()?;
        let composer = MessageComposer::new(self.config.device_id)?;
        let (event_tx, events) = bounded(self.config.event_capacity);
        let dropped_events = Arc::new(AtomicUsize::new(0));

        let decoder = InboundDecoder::new();
        let dropped = Arc::clone(&dropped_events);
        let receiver = SysExReceiver::new(move |message| {
            for event in decoder.decode(&message) {
                match event_tx.try_send(event) {
                    Ok(()) => {}
                    Err(TrySendError::Full(event)) => {
                        let total = dropped.fetch_add(1, Ordering::Relaxed) + 1;
                        warn!(parameter = event.parameter, total, "Event queue full, dropping event");
                    }
                    Err(TrySendError::Disconnected(_)) => return,
                }
            }
        })
        .with_parser(MessageParser::new(self.config.device_id));

        let factory = self.transport.ok_or(Error::NoTransport)?;
        let transport = factory(receiver.clone())?;

        Ok(Editor {
            transport,
            composer,
            sequencer: RequestSequencer::new(composer),
            receiver,
            events,
            dropped_events,
            config: self.config,
            refreshes: Mutex::new(Vec::new()),
        })
    }
}

struct Transport {
    sink: Arc<dyn SysExSink>,
    #[cfg(feature = "midi-io")]
    input: Option<MidiInputManager>,
}

/// A connected editing session.
///
/// `Editor` is `Send + Sync`; a refresh can run on another thread while the
/// UI keeps editing and draining [`events`](Self::events).
pub struct Editor {
    transport: Transport,
    composer: MessageComposer,
    sequencer: RequestSequencer,
    receiver: SysExReceiver,
    events: Receiver<ParameterEvent>,
    dropped_events: Arc<AtomicUsize>,
    config: EditorConfig,
    refreshes: Mutex<Vec<CancelToken>>,
}

impl Editor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::default()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.transport.sink.is_connected()
    }

    /// Converts `display` and writes it to `param` in the block at `base`.
    /// Returns the raw value sent.
    pub fn set_parameter<P: Parameter>(&self, base: SysExAddress, param: P, display: i32) -> Result<u8> {
        self.set_display(base, param.descriptor(), display)
    }

    pub fn set_parameter_by_name(
        &self,
        part: PartType,
        base: SysExAddress,
        name: &str,
        display: i32,
    ) -> Result<u8> {
        self.set_display(base, part.by_name(name)?, display)
    }

    /// Writes a raw value without display conversion.
    pub fn set_raw(&self, base: SysExAddress, descriptor: &ParameterDescriptor, raw: u8) -> Result<()> {
        let raw = descriptor.converter().validate_raw(raw)?;
        let address = descriptor.address(base)?;
        self.send(self.composer.compose_write(address, raw)?)?;
        debug!(parameter = descriptor.name, %address, raw, "Raw parameter sent");
        Ok(())
    }

    /// Writes a four-byte parameter. Returns the value sent.
    pub fn set_wide_parameter(
        &self,
        part: PartType,
        base: SysExAddress,
        name: &str,
        display: i32,
    ) -> Result<u16> {
        let wide = part.wide_by_name(name)?;
        let raw = wide.to_midi(display)?;
        let address = base.parameter(wide.address_offset)?;
        let data = jdxi_sysex::parameter::wide::encode_nibbles(raw);
        self.send(self.composer.compose_write_block(address, &data)?)?;
        debug!(parameter = wide.name, %address, raw, "Wide parameter sent");
        Ok(raw)
    }

    fn set_display(&self, base: SysExAddress, descriptor: &ParameterDescriptor, shown: i32) -> Result<u8> {
        let raw = descriptor.converter().to_midi(shown)?;
        let address = descriptor.address(base)?;
        self.send(self.composer.compose_write(address, raw)?)?;
        debug!(parameter = descriptor.name, %address, display = shown, raw, "Parameter sent");
        Ok(raw)
    }

    fn send(&self, bytes: Vec<u8>) -> Result<()> {
        self.transport.sink.send_bytes(bytes).map_err(Error::from)
    }

    /// Sends the RQ1 sequence for `area`, checking `cancel` before each
    /// request. Replies arrive later as events.
    pub fn refresh(&self, area: SynthArea, cancel: &CancelToken) -> Result<RefreshReport> {
        self.tracked(cancel, || self.send_requests(area, cancel))
    }

    /// Refreshes every area, stopping early once cancelled.
    pub fn refresh_all(&self, cancel: &CancelToken) -> Result<Vec<RefreshReport>> {
        self.tracked(cancel, || {
            let mut reports = Vec::with_capacity(SynthArea::ALL.len());
            for &area in SynthArea::ALL {
                let report = self.send_requests(area, cancel)?;
                reports.push(report);
                if report.cancelled {
                    break;
                }
            }
            Ok(reports)
        })
    }

    /// Runs `f` with `cancel` registered, so [`disconnect`](Self::disconnect)
    /// can reach it.
    fn tracked<T>(&self, cancel: &CancelToken, f: impl FnOnce() -> T) -> T {
        self.refreshes.lock().push(cancel.clone());
        let result = f();
        let mut refreshes = self.refreshes.lock();
        if let Some(index) = refreshes.iter().position(|token| token.same_as(cancel)) {
            refreshes.swap_remove(index);
        }
        result
    }

    fn send_requests(&self, area: SynthArea, cancel: &CancelToken) -> Result<RefreshReport> {
        let requests = self.sequencer.for_area(area);
        let total = requests.len();
        let interval = self.config.request_interval();
        info!(area = %area, requests = total, "Refreshing");

        let mut sent = 0;
        for request in requests {
            if cancel.is_cancelled() {
                break;
            }
            if let Err(e) = self.send(request) {
                // Disconnect closes the sink right after cancelling.
                if cancel.is_cancelled() {
                    break;
                }
                return Err(e);
            }
            sent += 1;
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        let cancelled = cancel.is_cancelled() && sent < total;
        if cancelled {
            info!(area = %area, sent, total, "Refresh cancelled");
        }
        Ok(RefreshReport {
            area,
            sent,
            total,
            cancelled,
        })
    }

    /// Decodes inbound bytes. Parameter events appear on [`events`](Self::events).
    pub fn handle_sysex(&self, bytes: &[u8]) -> bool {
        self.receiver.on_bytes(bytes)
    }

    /// Inbound decoder that feeds this editor's event queue.
    pub fn receiver(&self) -> SysExReceiver {
        self.receiver.clone()
    }

    pub fn events(&self) -> &Receiver<ParameterEvent> {
        &self.events
    }

    /// Events discarded because the queue was full.
    pub fn dropped_events(&self) -> usize {
        self.dropped_events.load(Ordering::Relaxed)
    }

    /// Cancels running refreshes and closes the transport.
    pub fn disconnect(&self) {
        for token in self.refreshes.lock().iter() {
            token.cancel();
        }
        self.transport.sink.disconnect();
        #[cfg(feature = "midi-io")]
        if let Some(input) = &self.transport.input {
            input.disconnect();
        }
        info!("Editor disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdxi_midi_io::LoopbackSink;
    use jdxi_sysex::address::{offsets, ANALOG_SYNTH, DIGITAL_SYNTH_1, TEMPORARY_PROGRAM};
    use jdxi_sysex::{parse, AnalogParam, Command, DigitalPartialParam};

    fn loopback_editor() -> (Editor, LoopbackSink) {
        let sink = LoopbackSink::new();
        let editor = Editor::builder().sink(sink.clone()).build().unwrap();
        (editor, sink)
    }

    #[test]
    fn test_build_without_transport() {
        assert!(matches!(Editor::builder().build(), Err(Error::NoTransport)));
    }

    #[test]
    fn test_zero_event_capacity() {
        let result = Editor::builder()
            .event_capacity(0)
            .sink(LoopbackSink::new())
            .build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_device_id() {
        let result = Editor::builder()
            .device_id(0x80)
            .sink(LoopbackSink::new())
            .build();
        assert!(matches!(result, Err(Error::Sysex(_))));
    }

    #[test]
    fn test_set_parameter_sends_dt1() {
        let (editor, sink) = loopback_editor();
        let raw = editor
            .set_parameter(ANALOG_SYNTH, AnalogParam::FilterCutoffKeyfollow, 100)
            .unwrap();
        assert_eq!(raw, 74);

        let sent = sink.take_sent();
        assert_eq!(sent.len(), 1);
        let message = parse(&sent[0]).unwrap();
        assert_eq!(message.command, Command::Write);
        assert_eq!(message.address.as_bytes(), [0x19, 0x42, 0x00, 0x2B]);
        assert_eq!(message.value(), Some(74));
    }

    #[test]
    fn test_set_parameter_with_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        let (editor, sink) = loopback_editor();
        let raw = editor
            .set_parameter(ANALOG_SYNTH, AnalogParam::OscPitchCoarse, -12)
            .unwrap();
        assert_eq!(raw, 52);
        assert_eq!(parse(&sink.sent()[0]).unwrap().value(), Some(52));
    }

    #[test]
    fn test_out_of_range_sends_nothing() {
        let (editor, sink) = loopback_editor();
        let partial = DIGITAL_SYNTH_1.with_offset(offsets::DIGITAL_PARTIAL_1).unwrap();
        assert!(editor
            .set_parameter(partial, DigitalPartialParam::OscPitch, 25)
            .is_err());
        assert!(editor
            .set_parameter_by_name(PartType::DigitalPartial, partial, "NOPE", 0)
            .is_err());
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_set_raw_validates() {
        let (editor, sink) = loopback_editor();
        let descriptor = PartType::Effect2.by_name("EFX2_TYPE").unwrap();
        let base = TEMPORARY_PROGRAM.with_offset(offsets::EFFECT_2).unwrap();
        assert!(editor.set_raw(base, descriptor, 3).is_err());
        editor.set_raw(base, descriptor, 6).unwrap();
        assert_eq!(parse(&sink.sent()[0]).unwrap().value(), Some(6));
    }

    #[test]
    fn test_set_wide_parameter() {
        let (editor, sink) = loopback_editor();
        let raw = editor
            .set_wide_parameter(PartType::ProgramCommon, TEMPORARY_PROGRAM, "PROGRAM_TEMPO", 12000)
            .unwrap();
        assert_eq!(raw, 12000);
        let message = parse(&sink.sent()[0]).unwrap();
        assert_eq!(message.address.as_bytes(), [0x18, 0x00, 0x00, 0x11]);
        assert_eq!(message.payload, vec![0x02, 0x0E, 0x0E, 0x00]);
    }

    #[test]
    fn test_send_while_disconnected() {
        let (editor, sink) = loopback_editor();
        sink.set_connected(false);
        let result = editor.set_parameter(ANALOG_SYNTH, AnalogParam::AmpLevel, 100);
        assert!(matches!(
            result,
            Err(Error::Midi(jdxi_midi_io::Error::NotConnected))
        ));
    }

    #[test]
    fn test_refresh_report() {
        let (editor, sink) = loopback_editor();
        let report = editor.refresh(SynthArea::Digital1, &CancelToken::new()).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.total, 5);
        assert_eq!(sink.sent().len(), 5);
        assert!(editor.refreshes.lock().is_empty());
    }

    #[test]
    fn test_refresh_precancelled() {
        let (editor, sink) = loopback_editor();
        let cancel = CancelToken::new();
        cancel.cancel();
        let reports = editor.refresh_all(&cancel).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].cancelled);
        assert_eq!(reports[0].sent, 0);
        assert!(sink.sent().is_empty());
    }
}
