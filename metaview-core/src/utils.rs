//! Utility functions for formatting metadata values.
//!
//! This module provides the human-readable renderings used by metadata
//! values: durations, byte sizes, bit rates, frequencies and text
//! truncation.

use std::time::Duration;

/// Marker appended to values cut by [`truncate_text`].
pub const TRUNCATION_MARKER: &str = "(...)";

/// Formats a duration as its non-zero units, largest first
/// (e.g. 63.12s -> "1 min 3 sec 120 ms"). A zero duration is "0 ms".
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    if total_ms == 0 {
        return "0 ms".to_string();
    }

    let days = total_ms / 86_400_000;
    let hours = (total_ms / 3_600_000) % 24;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days} {}", if days == 1 { "day" } else { "days" }));
    }
    if hours > 0 {
        parts.push(format!("{hours} {}", if hours == 1 { "hour" } else { "hours" }));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} min"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds} sec"));
    }
    if millis > 0 {
        parts.push(format!("{millis} ms"));
    }
    parts.join(" ")
}

/// Formats a duration as seconds with millisecond precision ("63.120").
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats a bit rate given in bits per second (e.g. 128000 -> "128.0 Kbit/sec").
#[must_use]
pub fn format_bit_rate(bits_per_sec: u64) -> String {
    let rate = bits_per_sec as f64;
    if rate >= 1_000_000.0 {
        format!("{:.1} Mbit/sec", rate / 1_000_000.0)
    } else if rate >= 1000.0 {
        format!("{:.1} Kbit/sec", rate / 1000.0)
    } else {
        format!("{bits_per_sec} bit/sec")
    }
}

/// Formats a frequency in hertz (e.g. 44100 -> "44.1 kHz").
#[must_use]
pub fn format_frequency(hertz: u32) -> String {
    if hertz >= 1000 {
        format!("{:.1} kHz", f64::from(hertz) / 1000.0)
    } else {
        format!("{hertz} Hz")
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut.
///
/// The marker counts towards the limit, so the result never exceeds
/// `max_chars` characters. Limits too small for the marker cut plainly.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= TRUNCATION_MARKER.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(TRUNCATION_MARKER.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Returns the lowercased extension of `path`, if any.
#[must_use]
pub fn lowercase_extension(path: &std::path::Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0 ms");
        assert_eq!(format_duration(Duration::from_millis(63_120)), "1 min 3 sec 120 ms");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1 hour");
        assert_eq!(format_duration(Duration::from_secs(2 * 86_400 + 7200 + 5)), "2 days 2 hours 5 sec");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(Duration::from_millis(63_120)), "63.120");
        assert_eq!(format_seconds(Duration::from_secs(2)), "2.000");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GiB");
    }

    #[test]
    fn test_format_bit_rate() {
        assert_eq!(format_bit_rate(800), "800 bit/sec");
        assert_eq!(format_bit_rate(128_000), "128.0 Kbit/sec");
        assert_eq!(format_bit_rate(1_411_200), "1.4 Mbit/sec");
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(500), "500 Hz");
        assert_eq!(format_frequency(44_100), "44.1 kHz");
        assert_eq!(format_frequency(48_000), "48.0 kHz");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijklmnop", 10), "abcde(...)");
        assert_eq!(truncate_text("éééééééééééé", 10).chars().count(), 10);
    }

    #[test]
    fn test_truncate_text_below_marker_length() {
        assert_eq!(truncate_text("abcdefgh", 3), "abc");
        assert_eq!(truncate_text("abcdefgh", 5), "abcde");
        assert_eq!(truncate_text("abcdefgh", 6), "a(...)");
        assert_eq!(truncate_text("abcdefgh", 0), "");
    }

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(lowercase_extension(Path::new("a/B.JPG")).as_deref(), Some("jpg"));
        assert_eq!(lowercase_extension(Path::new("noext")), None);
    }
}
