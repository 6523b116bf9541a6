//! Typed metadata values with raw and human renderings.

use crate::utils::{format_bit_rate, format_bytes, format_duration, format_frequency, format_seconds};

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A single value attached to a metadata entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetaValue {
    Text(String),
    Integer { value: i64, unit: Option<&'static str> },
    Float { value: f64, unit: Option<&'static str> },
    Duration(Duration),
    /// Size in bytes.
    Bytes(u64),
    /// Bits per second.
    BitRate(u64),
    /// Hertz.
    SampleRate(u32),
    /// Frames per second.
    FrameRate(f64),
    DateTime(NaiveDateTime),
}

impl MetaValue {
    /// Integer with a unit suffix in human output ("800 pixels").
    pub fn with_unit(value: i64, unit: &'static str) -> Self {
        MetaValue::Integer {
            value,
            unit: Some(unit),
        }
    }

    /// Human-readable rendering.
    pub fn human(&self) -> String {
        match self {
            MetaValue::Text(text) => text.clone(),
            MetaValue::Integer { value, unit: Some(unit) } => format!("{value} {unit}"),
            MetaValue::Integer { value, unit: None } => value.to_string(),
            MetaValue::Float { value, unit: Some(unit) } => format!("{value} {unit}"),
            MetaValue::Float { value, unit: None } => value.to_string(),
            MetaValue::Duration(duration) => format_duration(*duration),
            MetaValue::Bytes(bytes) => format_bytes(*bytes),
            MetaValue::BitRate(rate) => format_bit_rate(*rate),
            MetaValue::SampleRate(rate) => format_frequency(*rate),
            MetaValue::FrameRate(fps) => format!("{fps:.1} fps"),
            MetaValue::DateTime(date) => date.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Raw rendering: plain numbers, ISO dates, no units.
    pub fn raw(&self) -> String {
        match self {
            MetaValue::Text(text) => text.clone(),
            MetaValue::Integer { value, .. } => value.to_string(),
            MetaValue::Float { value, .. } => value.to_string(),
            MetaValue::Duration(duration) => format_seconds(*duration),
            MetaValue::Bytes(bytes) => bytes.to_string(),
            MetaValue::BitRate(rate) => rate.to_string(),
            MetaValue::SampleRate(rate) => rate.to_string(),
            MetaValue::FrameRate(fps) => fps.to_string(),
            MetaValue::DateTime(date) => date.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// True for text values that hold nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, MetaValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human())
    }
}

impl From<String> for MetaValue {
    fn from(text: String) -> Self {
        MetaValue::Text(text)
    }
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::Text(text.to_string())
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Integer { value, unit: None }
    }
}

impl From<u32> for MetaValue {
    fn from(value: u32) -> Self {
        MetaValue::Integer {
            value: i64::from(value),
            unit: None,
        }
    }
}

impl From<Duration> for MetaValue {
    fn from(duration: Duration) -> Self {
        MetaValue::Duration(duration)
    }
}

impl From<NaiveDateTime> for MetaValue {
    fn from(date: NaiveDateTime) -> Self {
        MetaValue::DateTime(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_human_and_raw_integer() {
        let value = MetaValue::with_unit(800, "pixels");
        assert_eq!(value.human(), "800 pixels");
        assert_eq!(value.raw(), "800");
    }

    #[test]
    fn test_human_and_raw_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 45))
            .unwrap();
        let value = MetaValue::from(date);
        assert_eq!(value.human(), "2024-06-01 12:30:45");
        assert_eq!(value.raw(), "2024-06-01T12:30:45");
    }

    #[test]
    fn test_rates() {
        assert_eq!(MetaValue::SampleRate(44_100).human(), "44.1 kHz");
        assert_eq!(MetaValue::BitRate(128_000).raw(), "128000");
        assert_eq!(MetaValue::FrameRate(25.0).human(), "25.0 fps");
    }

    #[test]
    fn test_blank_text() {
        assert!(MetaValue::from("   ").is_blank());
        assert!(!MetaValue::from("x").is_blank());
        assert!(!MetaValue::from(0i64).is_blank());
    }
}
