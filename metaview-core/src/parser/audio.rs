//! Audio container metadata through symphonia.
//!
//! Detection is by signature only; symphonia then probes the container,
//! reads its tags (including ID3v2 ahead of MP3 frames) and exposes the
//! codec parameters of each track. No audio is decoded.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, parse_error};
use crate::metadata::{MetaKey, MetaValue, Metadata};
use crate::parser::{InputSource, MetadataParser};

use symphonia::core::codecs::{CODEC_TYPE_NULL, CodecParameters};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey};
use symphonia::core::probe::Hint;

use std::time::Duration;

const ID: &str = "audio";

/// Containers recognised from their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Flac,
    Mpeg,
    Adts,
    Wave,
    Ogg,
    Mp4,
    Matroska,
}

impl Container {
    fn detect(signature: &[u8]) -> Option<Self> {
        match signature {
            [b'f', b'L', b'a', b'C', ..] => Some(Container::Flac),
            [b'I', b'D', b'3', ..] => Some(Container::Mpeg),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Container::Wave),
            [b'O', b'g', b'g', b'S', ..] => Some(Container::Ogg),
            [_, _, _, _, b'f', b't', b'y', b'p', ..] => Some(Container::Mp4),
            [0x1A, 0x45, 0xDF, 0xA3, ..] => Some(Container::Matroska),
            // MPEG frame sync; layer bits 00 mean ADTS AAC
            [0xFF, second, ..] if second & 0xE0 == 0xE0 => {
                if (second >> 1) & 0x03 == 0 {
                    Some(Container::Adts)
                } else {
                    Some(Container::Mpeg)
                }
            }
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Container::Flac => "FLAC",
            Container::Mpeg => "MPEG audio",
            Container::Adts => "ADTS AAC",
            Container::Wave => "Microsoft WAVE",
            Container::Ogg => "Ogg",
            Container::Mp4 => "ISO base media (MP4)",
            Container::Matroska => "Matroska",
        }
    }

    fn mime_type(self) -> &'static str {
        match self {
            Container::Flac => "audio/flac",
            Container::Mpeg => "audio/mpeg",
            Container::Adts => "audio/aac",
            Container::Wave => "audio/x-wav",
            Container::Ogg => "audio/ogg",
            Container::Mp4 => "audio/mp4",
            Container::Matroska => "video/x-matroska",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Container::Flac => "flac",
            Container::Mpeg => "mp3",
            Container::Adts => "aac",
            Container::Wave => "wav",
            Container::Ogg => "ogg",
            Container::Mp4 => "m4a",
            Container::Matroska => "mkv",
        }
    }
}

/// Parser for FLAC, MP3, AAC, WAV, Ogg, MP4 and Matroska audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioParser;

impl MetadataParser for AudioParser {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Audio containers (FLAC, MP3, AAC, WAV, Ogg, MP4, Matroska)"
    }

    fn matches(&self, source: &InputSource) -> bool {
        Container::detect(source.signature()).is_some()
    }

    fn mime_type(&self, source: &InputSource) -> Option<&'static str> {
        Container::detect(source.signature()).map(Container::mime_type)
    }

    fn extract(&self, source: &mut InputSource, _config: &CoreConfig) -> CoreResult<Metadata> {
        let container = Container::detect(source.signature())
            .ok_or_else(|| CoreError::UnsupportedFormat(source.path().to_path_buf()))?;

        let stream = MediaSourceStream::new(
            Box::new(source.file_handle()?),
            MediaSourceStreamOptions::default(),
        );
        // The file's own extension first; the signature only guesses the family.
        let extension = source
            .extension()
            .unwrap_or_else(|| container.extension().to_string());
        let mut hint = Hint::new();
        hint.with_extension(&extension);

        let mut probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| parse_error(ID, e))?;

        let mut metadata = Metadata::new();

        // Tags found before the container (ID3v2) come first, then the container's own.
        if let Some(revision) = probed.metadata.get().as_ref().and_then(|m| m.current()) {
            add_tags(&mut metadata, revision);
        }
        let mut format = probed.format;
        if let Some(revision) = format.metadata().current() {
            add_tags(&mut metadata, revision);
        }

        let streams: Vec<Metadata> = format
            .tracks()
            .iter()
            .filter(|track| track.codec_params.codec != CODEC_TYPE_NULL)
            .map(|track| {
                let mut stream = track_metadata(&track.codec_params);
                stream.set_opt(MetaKey::Language, track.language.clone());
                stream
            })
            .collect();
        drop(format);

        match streams.len() {
            0 => {}
            1 => {
                let stream = streams.into_iter().next().unwrap_or_default();
                let duration = stream.first(MetaKey::Duration).cloned();
                metadata.merge(stream);
                if let Some(MetaValue::Duration(duration)) = duration {
                    metadata.set_opt(MetaKey::BitRate, average_bit_rate(source.size(), duration));
                }
            }
            _ => {
                for (index, stream) in streams.into_iter().enumerate() {
                    metadata.add_group(format!("Audio stream #{}", index + 1), stream);
                }
            }
        }

        if metadata.is_empty() {
            return Ok(metadata);
        }
        metadata.set(MetaKey::Format, container.name());
        metadata.set(MetaKey::MimeType, container.mime_type());
        metadata.set(MetaKey::FileSize, MetaValue::Bytes(source.size()));
        Ok(metadata)
    }
}

fn tag_key(key: StandardTagKey) -> Option<MetaKey> {
    match key {
        StandardTagKey::TrackTitle => Some(MetaKey::Title),
        StandardTagKey::Writer | StandardTagKey::Lyricist => Some(MetaKey::Author),
        StandardTagKey::Artist => Some(MetaKey::Artist),
        StandardTagKey::Album => Some(MetaKey::Album),
        StandardTagKey::AlbumArtist => Some(MetaKey::AlbumArtist),
        StandardTagKey::Composer => Some(MetaKey::Composer),
        StandardTagKey::Genre => Some(MetaKey::Genre),
        StandardTagKey::TrackNumber => Some(MetaKey::TrackNumber),
        StandardTagKey::TrackTotal => Some(MetaKey::TrackTotal),
        StandardTagKey::DiscNumber => Some(MetaKey::DiscNumber),
        StandardTagKey::Language => Some(MetaKey::Language),
        StandardTagKey::Date | StandardTagKey::ReleaseDate | StandardTagKey::OriginalDate => {
            Some(MetaKey::CreationDate)
        }
        StandardTagKey::Comment => Some(MetaKey::Comment),
        StandardTagKey::Description => Some(MetaKey::Description),
        StandardTagKey::Copyright => Some(MetaKey::Copyright),
        StandardTagKey::Encoder | StandardTagKey::EncodedBy => Some(MetaKey::Producer),
        StandardTagKey::Label => Some(MetaKey::Organization),
        _ => None,
    }
}

fn add_tags(metadata: &mut Metadata, revision: &MetadataRevision) {
    for tag in revision.tags() {
        match tag.std_key.and_then(tag_key) {
            Some(key) => metadata.set(key, tag.value.to_string().trim()),
            None => log::trace!("Skipping tag {}", tag.key),
        }
    }
}

/// Stream duration from frame count and time base (or sample rate).
fn track_duration(params: &CodecParameters) -> Option<Duration> {
    let frames = params.n_frames?;
    if let Some(time_base) = params.time_base {
        let time = time_base.calc_time(frames);
        return Some(Duration::from_secs(time.seconds) + Duration::from_secs_f64(time.frac));
    }
    let rate = params.sample_rate.filter(|rate| *rate > 0)?;
    Some(Duration::from_secs_f64(frames as f64 / f64::from(rate)))
}

fn track_metadata(params: &CodecParameters) -> Metadata {
    let mut stream = Metadata::new();
    stream.set_opt(MetaKey::Duration, track_duration(params));
    stream.set_opt(
        MetaKey::Channels,
        params.channels.map(|channels| channels.count() as u32),
    );
    stream.set_opt(MetaKey::SampleRate, params.sample_rate.map(MetaValue::SampleRate));
    stream.set_opt(
        MetaKey::BitsPerSample,
        params
            .bits_per_sample
            .map(|bits| MetaValue::with_unit(i64::from(bits), "bits")),
    );
    stream.set_opt(
        MetaKey::Compression,
        symphonia::default::get_codecs()
            .get_codec(params.codec)
            .map(|descriptor| descriptor.long_name),
    );
    stream
}

/// Whole-file bit rate; `None` for durations under a millisecond.
fn average_bit_rate(size: u64, duration: Duration) -> Option<MetaValue> {
    let seconds = duration.as_secs_f64();
    if seconds < 0.001 {
        return None;
    }
    Some(MetaValue::BitRate((size as f64 * 8.0 / seconds).round() as u64))
}
