//! Container and stream metadata from the external `ffprobe` tool.
//!
//! This backend accepts any input, so it only takes part in detection when
//! `CoreConfig::enable_ffprobe` is set. Failures to spawn ffprobe, a
//! non-zero exit or unreadable JSON all surface as [`CoreError`].

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::metadata::{MetaKey, MetaValue, Metadata};
use crate::parser::{InputSource, MetadataParser};

use ::ffprobe::{FfProbeError, Stream};

use std::time::Duration;

const ID: &str = "ffprobe";

/// Parser that delegates to `ffprobe` through the `ffprobe` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfprobeParser;

impl MetadataParser for FfprobeParser {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Any container ffprobe understands (external tool, opt-in)"
    }

    fn matches(&self, _source: &InputSource) -> bool {
        true
    }

    fn requires_external_tool(&self) -> bool {
        true
    }

    fn extract(&self, source: &mut InputSource, _config: &CoreConfig) -> CoreResult<Metadata> {
        log::debug!("Running ffprobe on {}", source.path().display());
        let probe = ::ffprobe::ffprobe(source.path()).map_err(map_ffprobe_error)?;

        let mut metadata = Metadata::new();
        metadata.set_opt(MetaKey::Duration, parse_seconds(probe.format.duration.as_deref()));
        metadata.set_opt(
            MetaKey::BitRate,
            parse_number::<u64>(probe.format.bit_rate.as_deref()).map(MetaValue::BitRate),
        );
        metadata.set(MetaKey::Format, probe.format.format_name.as_str());

        let (mut videos, mut audios, mut others) = (0, 0, 0);
        for stream in &probe.streams {
            let title = match stream.codec_type.as_deref() {
                Some("video") => {
                    videos += 1;
                    format!("Video stream #{videos}")
                }
                Some("audio") => {
                    audios += 1;
                    format!("Audio stream #{audios}")
                }
                _ => {
                    others += 1;
                    format!("Stream #{others}")
                }
            };
            metadata.add_group(title, stream_metadata(stream));
        }

        if metadata.is_empty() {
            return Ok(metadata);
        }
        metadata.set(MetaKey::FileSize, MetaValue::Bytes(source.size()));
        Ok(metadata)
    }
}

fn map_ffprobe_error(err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => {
            CoreError::Ffprobe(format!("could not start ffprobe: {io_err}"))
        }
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            CoreError::Ffprobe(format!(
                "ffprobe exited with {}: {}",
                output.status,
                stderr.trim()
            ))
        }
        FfProbeError::Deserialize(err) => {
            CoreError::Ffprobe(format!("unreadable ffprobe output: {err}"))
        }
        _ => CoreError::Ffprobe(format!("{err:?}")),
    }
}

fn parse_number<T: std::str::FromStr>(text: Option<&str>) -> Option<T> {
    text.and_then(|text| text.trim().parse().ok())
}

fn parse_seconds(text: Option<&str>) -> Option<Duration> {
    parse_number::<f64>(text)
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .map(Duration::from_secs_f64)
}

/// Parses ffprobe's `num/den` rates; `0/0` and malformed text give `None`.
fn parse_frame_rate(text: &str) -> Option<f64> {
    let (num, den) = text.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 || num <= 0.0 {
        return None;
    }
    Some(num / den)
}

fn stream_metadata(stream: &Stream) -> Metadata {
    let mut metadata = Metadata::new();
    match stream.codec_type.as_deref() {
        Some("video") => {
            metadata.set_opt(
                MetaKey::Width,
                stream.width.map(|width| MetaValue::with_unit(width, "pixels")),
            );
            metadata.set_opt(
                MetaKey::Height,
                stream.height.map(|height| MetaValue::with_unit(height, "pixels")),
            );
            metadata.set_opt(
                MetaKey::FrameRate,
                parse_frame_rate(&stream.avg_frame_rate).map(MetaValue::FrameRate),
            );
            metadata.set_opt(
                MetaKey::FrameCount,
                parse_number::<i64>(stream.nb_frames.as_deref()),
            );
        }
        Some("audio") => {
            metadata.set_opt(MetaKey::Channels, stream.channels);
            metadata.set_opt(
                MetaKey::SampleRate,
                parse_number::<u32>(stream.sample_rate.as_deref()).map(MetaValue::SampleRate),
            );
        }
        _ => {}
    }
    metadata.set_opt(MetaKey::Compression, stream.codec_name.clone());
    metadata
}
