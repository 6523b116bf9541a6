//! Known metadata fields.
//!
//! Every field has a machine name (used in raw output and JSON), a human
//! label and a priority. Priorities run from 100 (most important) to 999;
//! a priority level `N` keeps the fields below `(N + 1) * 100`.

use serde::Serialize;

/// Lowest priority value a field can carry.
pub const MIN_PRIORITY: u16 = 100;

/// Highest priority value a field can carry.
pub const MAX_PRIORITY: u16 = 999;

/// A metadata field known to metaview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKey {
    // ---- Identity ----
    Title,
    Author,
    Artist,
    Album,
    AlbumArtist,
    Composer,

    // ---- Core technical properties ----
    Duration,
    Width,
    Height,
    Channels,
    SampleRate,
    BitsPerSample,
    FrameRate,
    FrameCount,

    // ---- Encoding ----
    BitsPerPixel,
    PixelFormat,
    ImageOrientation,
    BitRate,
    Compression,

    // ---- Cataloguing ----
    Genre,
    TrackNumber,
    TrackTotal,
    DiscNumber,
    Language,

    // ---- Capture ----
    CreationDate,
    LastModification,
    CameraManufacturer,
    CameraModel,
    ExposureTime,
    FNumber,
    IsoSpeed,
    FocalLength,
    Flash,
    WidthDpi,
    HeightDpi,
    Latitude,
    Longitude,
    Altitude,

    // ---- Free text ----
    Comment,
    Description,
    Copyright,
    Producer,
    Organization,

    // ---- Container ----
    Format,
    FormatVersion,
    MimeType,
    Endianness,
    FileSize,
}

impl MetaKey {
    /// Machine-readable name, used when rendering raw output.
    pub fn name(self) -> &'static str {
        match self {
            MetaKey::Title => "title",
            MetaKey::Author => "author",
            MetaKey::Artist => "artist",
            MetaKey::Album => "album",
            MetaKey::AlbumArtist => "album_artist",
            MetaKey::Composer => "music_composer",
            MetaKey::Duration => "duration",
            MetaKey::Width => "width",
            MetaKey::Height => "height",
            MetaKey::Channels => "nb_channel",
            MetaKey::SampleRate => "sample_rate",
            MetaKey::BitsPerSample => "bits_per_sample",
            MetaKey::FrameRate => "frame_rate",
            MetaKey::FrameCount => "frame_count",
            MetaKey::BitsPerPixel => "bits_per_pixel",
            MetaKey::PixelFormat => "pixel_format",
            MetaKey::ImageOrientation => "image_orientation",
            MetaKey::BitRate => "bit_rate",
            MetaKey::Compression => "compression",
            MetaKey::Genre => "music_genre",
            MetaKey::TrackNumber => "track_number",
            MetaKey::TrackTotal => "track_total",
            MetaKey::DiscNumber => "disc_number",
            MetaKey::Language => "language",
            MetaKey::CreationDate => "creation_date",
            MetaKey::LastModification => "last_modification",
            MetaKey::CameraManufacturer => "camera_manufacturer",
            MetaKey::CameraModel => "camera_model",
            MetaKey::ExposureTime => "exposure_time",
            MetaKey::FNumber => "fnumber",
            MetaKey::IsoSpeed => "iso_speed_ratings",
            MetaKey::FocalLength => "focal_length",
            MetaKey::Flash => "flash",
            MetaKey::WidthDpi => "width_dpi",
            MetaKey::HeightDpi => "height_dpi",
            MetaKey::Latitude => "latitude",
            MetaKey::Longitude => "longitude",
            MetaKey::Altitude => "altitude",
            MetaKey::Comment => "comment",
            MetaKey::Description => "description",
            MetaKey::Copyright => "copyright",
            MetaKey::Producer => "producer",
            MetaKey::Organization => "organization",
            MetaKey::Format => "format",
            MetaKey::FormatVersion => "format_version",
            MetaKey::MimeType => "mime_type",
            MetaKey::Endianness => "endian",
            MetaKey::FileSize => "file_size",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MetaKey::Title => "Title",
            MetaKey::Author => "Author",
            MetaKey::Artist => "Artist",
            MetaKey::Album => "Album",
            MetaKey::AlbumArtist => "Album artist",
            MetaKey::Composer => "Music composer",
            MetaKey::Duration => "Duration",
            MetaKey::Width => "Image width",
            MetaKey::Height => "Image height",
            MetaKey::Channels => "Channel",
            MetaKey::SampleRate => "Sample rate",
            MetaKey::BitsPerSample => "Bits/sample",
            MetaKey::FrameRate => "Frame rate",
            MetaKey::FrameCount => "Frame count",
            MetaKey::BitsPerPixel => "Bits/pixel",
            MetaKey::PixelFormat => "Pixel format",
            MetaKey::ImageOrientation => "Image orientation",
            MetaKey::BitRate => "Bit rate",
            MetaKey::Compression => "Compression",
            MetaKey::Genre => "Music genre",
            MetaKey::TrackNumber => "Track number",
            MetaKey::TrackTotal => "Track total",
            MetaKey::DiscNumber => "Disc number",
            MetaKey::Language => "Language",
            MetaKey::CreationDate => "Creation date",
            MetaKey::LastModification => "Last modification",
            MetaKey::CameraManufacturer => "Camera manufacturer",
            MetaKey::CameraModel => "Camera model",
            MetaKey::ExposureTime => "Exposure time",
            MetaKey::FNumber => "F-number",
            MetaKey::IsoSpeed => "ISO speed rating",
            MetaKey::FocalLength => "Focal length",
            MetaKey::Flash => "Flash",
            MetaKey::WidthDpi => "Image DPI width",
            MetaKey::HeightDpi => "Image DPI height",
            MetaKey::Latitude => "Latitude",
            MetaKey::Longitude => "Longitude",
            MetaKey::Altitude => "Altitude",
            MetaKey::Comment => "Comment",
            MetaKey::Description => "Description",
            MetaKey::Copyright => "Copyright",
            MetaKey::Producer => "Producer",
            MetaKey::Organization => "Organization",
            MetaKey::Format => "Format",
            MetaKey::FormatVersion => "Format version",
            MetaKey::MimeType => "MIME type",
            MetaKey::Endianness => "Endianness",
            MetaKey::FileSize => "File size",
        }
    }

    /// Display priority, between [`MIN_PRIORITY`] and [`MAX_PRIORITY`].
    pub fn priority(self) -> u16 {
        match self {
            MetaKey::Title => 100,
            MetaKey::Author => 101,
            MetaKey::Artist => 102,
            MetaKey::Album => 103,
            MetaKey::AlbumArtist => 104,
            MetaKey::Composer => 105,
            MetaKey::Duration => 200,
            MetaKey::Width => 201,
            MetaKey::Height => 202,
            MetaKey::Channels => 203,
            MetaKey::SampleRate => 204,
            MetaKey::BitsPerSample => 205,
            MetaKey::FrameRate => 206,
            MetaKey::FrameCount => 207,
            MetaKey::BitsPerPixel => 300,
            MetaKey::PixelFormat => 301,
            MetaKey::ImageOrientation => 302,
            MetaKey::BitRate => 303,
            MetaKey::Compression => 304,
            MetaKey::Genre => 400,
            MetaKey::TrackNumber => 401,
            MetaKey::TrackTotal => 402,
            MetaKey::DiscNumber => 403,
            MetaKey::Language => 404,
            MetaKey::CreationDate => 500,
            MetaKey::LastModification => 501,
            MetaKey::CameraManufacturer => 502,
            MetaKey::CameraModel => 503,
            MetaKey::ExposureTime => 504,
            MetaKey::FNumber => 505,
            MetaKey::IsoSpeed => 506,
            MetaKey::FocalLength => 507,
            MetaKey::Flash => 508,
            MetaKey::WidthDpi => 509,
            MetaKey::HeightDpi => 510,
            MetaKey::Latitude => 511,
            MetaKey::Longitude => 512,
            MetaKey::Altitude => 513,
            MetaKey::Comment => 600,
            MetaKey::Description => 601,
            MetaKey::Copyright => 602,
            MetaKey::Producer => 603,
            MetaKey::Organization => 604,
            MetaKey::Format => 700,
            MetaKey::FormatVersion => 701,
            MetaKey::MimeType => 800,
            MetaKey::Endianness => 801,
            MetaKey::FileSize => 900,
        }
    }
}

/// Highest priority value shown at `level` (1..=9).
#[must_use]
pub fn max_priority_for_level(level: u8) -> u16 {
    let level = u16::from(level.clamp(1, 9));
    level * 100 + 99
}
