//! Editor configuration, loadable from TOML.
//!
//! ```toml
//! device_id = 16
//! output_port = "JD-Xi"
//! input_port = "JD-Xi"
//! event_capacity = 8192
//! request_interval_ms = 20
//! ```
//!
//! Every key is optional.

use crate::error::{Error, Result};
use jdxi_sysex::message::DEFAULT_DEVICE_ID;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Port name fragment used when no port is configured.
pub const DEFAULT_PORT_NAME: &str = "JD-Xi";

/// Holds every event of a full `refresh_all` with room to spare.
pub const DEFAULT_EVENT_CAPACITY: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// SysEx device id, `10h` unless the synth is set otherwise.
    pub device_id: u8,
    /// Case-insensitive substring of the output port name.
    pub output_port: Option<String>,
    /// Case-insensitive substring of the input port name.
    pub input_port: Option<String>,
    /// Capacity of the parameter event queue. Must be non-zero.
    pub event_capacity: usize,
    /// Pause between refresh requests. Zero sends back to back.
    pub request_interval_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID,
            output_port: None,
            input_port: None,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            request_interval_ms: 0,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a zero `event_capacity`.
    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(Error::InvalidConfig(
                "event_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn output_port(&self) -> &str {
        self.output_port.as_deref().unwrap_or(DEFAULT_PORT_NAME)
    }

    pub fn input_port(&self) -> &str {
        self.input_port.as_deref().unwrap_or(DEFAULT_PORT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdxi_sysex::SynthArea;

    #[test]
    fn test_empty_config_is_default() {
        let config = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.device_id, 0x10);
        assert_eq!(config.output_port(), "JD-Xi");
        assert_eq!(config.request_interval(), Duration::ZERO);
    }

    #[test]
    fn test_parse_full_config() {
        let config = EditorConfig::from_toml_str(
            r#"
            device_id = 17
            output_port = "UM-ONE"
            input_port = "JD-Xi MIDI"
            event_capacity = 64
            request_interval_ms = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.device_id, 0x11);
        assert_eq!(config.output_port(), "UM-ONE");
        assert_eq!(config.input_port(), "JD-Xi MIDI");
        assert_eq!(config.event_capacity, 64);
        assert_eq!(config.request_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            EditorConfig::from_toml_str("devcie_id = 16"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_toml_str("device_id = 300"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_zero_event_capacity_rejected() {
        assert!(matches!(
            EditorConfig::from_toml_str("event_capacity = 0"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(EditorConfig::from_toml_str("event_capacity = 1").is_ok());
    }

    #[test]
    fn test_default_capacity_holds_full_refresh() {
        let events: usize = SynthArea::ALL
            .iter()
            .flat_map(|area| area.blocks())
            .map(|(part, _)| part.descriptors().len() + part.wide_parameters().len())
            .sum();
        assert!(events <= EditorConfig::default().event_capacity);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EditorConfig::load("/nonexistent/jdxi.toml"),
            Err(Error::Io(_))
        ));
    }
}
