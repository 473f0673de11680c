use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::CodesError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MAX_DELAY_MS: u64 = 60_000;
/// Largest `start - end`; the whole range is queued before printing.
pub const MAX_SPAN: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// First value queued.
    pub start: i64,
    /// Last value queued; it is queued twice.
    pub end: i64,
    /// Pause after every drained value, in milliseconds.
    pub delay_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start: 10,
            end: 0,
            delay_ms: 1000,
        }
    }
}

impl CountdownConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl ConfigSection for CountdownConfig {
    fn section_name() -> &'static str {
        "countdown"
    }

    fn validate(&self) -> Result<(), CodesError> {
        if self.start < self.end {
            return Err(CodesError::Configuration(format!(
                "Countdown start ({}) must not be below end ({})",
                self.start, self.end
            )));
        }
        match self.start.checked_sub(self.end) {
            Some(span) if span <= MAX_SPAN => {}
            _ => {
                return Err(CodesError::Configuration(format!(
                    "Countdown span from {} to {} exceeds {} values",
                    self.start, self.end, MAX_SPAN
                )));
            }
        }
        if self.delay_ms > MAX_DELAY_MS {
            return Err(CodesError::Configuration(format!(
                "Countdown delay must be at most {} ms",
                MAX_DELAY_MS
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Countdown".to_string(),
            fields: vec![
                FieldManifest {
                    name: "start".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.start),
                    value: serde_json::json!(self.start),
                    min: None,
                    max: None,
                    description: "First value pushed onto the queue".to_string(),
                },
                FieldManifest {
                    name: "end".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.end),
                    value: serde_json::json!(self.end),
                    min: Some(self.start.saturating_sub(MAX_SPAN) as f64),
                    max: Some(self.start as f64),
                    description: "Last value pushed onto the queue".to_string(),
                },
                FieldManifest {
                    name: "delay_ms".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.delay_ms),
                    value: serde_json::json!(self.delay_ms),
                    min: Some(0.0),
                    max: Some(MAX_DELAY_MS as f64),
                    description: "Pause after each printed value".to_string(),
                },
            ],
        }
    }
}
