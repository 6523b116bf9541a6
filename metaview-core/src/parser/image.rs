//! Still image metadata.
//!
//! Headers (dimensions, pixel layout) come from the `image` crate's
//! decoders, which read only as far as the header. Camera and capture
//! fields come from the EXIF block through kamadak-exif; images without
//! EXIF simply carry fewer fields.

use crate::config::CoreConfig;
use crate::error::{CoreResult, parse_error};
use crate::metadata::{MetaKey, MetaValue, Metadata};
use crate::parser::{InputSource, MetadataParser};

use ::image::{ColorType, ImageDecoder, ImageFormat, ImageReader};
use chrono::NaiveDate;

const ID: &str = "image";

/// Parser for JPEG, PNG, GIF, TIFF, WebP, BMP and ICO files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageParser;

/// Display name and MIME type of the formats this parser handles.
fn format_info(format: ImageFormat) -> Option<(&'static str, &'static str)> {
    match format {
        ImageFormat::Jpeg => Some(("JPEG", "image/jpeg")),
        ImageFormat::Png => Some(("PNG", "image/png")),
        ImageFormat::Gif => Some(("GIF", "image/gif")),
        ImageFormat::Tiff => Some(("TIFF", "image/tiff")),
        ImageFormat::WebP => Some(("WebP", "image/webp")),
        ImageFormat::Bmp => Some(("BMP", "image/bmp")),
        ImageFormat::Ico => Some(("ICO", "image/x-icon")),
        _ => None,
    }
}

fn detect(source: &InputSource) -> Option<(ImageFormat, &'static str, &'static str)> {
    let format = ::image::guess_format(source.signature()).ok()?;
    let (name, mime) = format_info(format)?;
    Some((format, name, mime))
}

fn pixel_format_name(color: ColorType) -> String {
    match color {
        ColorType::L8 | ColorType::L16 => "Grayscale".to_string(),
        ColorType::La8 | ColorType::La16 => "Grayscale with alpha".to_string(),
        ColorType::Rgb8 | ColorType::Rgb16 => "RGB".to_string(),
        ColorType::Rgba8 | ColorType::Rgba16 => "RGBA".to_string(),
        ColorType::Rgb32F => "RGB (float)".to_string(),
        ColorType::Rgba32F => "RGBA (float)".to_string(),
        other => format!("{other:?}"),
    }
}

impl MetadataParser for ImageParser {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Still images (JPEG, PNG, GIF, TIFF, WebP, BMP, ICO) with EXIF"
    }

    fn matches(&self, source: &InputSource) -> bool {
        detect(source).is_some()
    }

    fn mime_type(&self, source: &InputSource) -> Option<&'static str> {
        detect(source).map(|(_, _, mime)| mime)
    }

    fn extract(&self, source: &mut InputSource, _config: &CoreConfig) -> CoreResult<Metadata> {
        let (format, name, mime) = detect(source).ok_or_else(|| {
            crate::error::CoreError::UnsupportedFormat(source.path().to_path_buf())
        })?;
        let mut metadata = Metadata::new();

        let decoder = ImageReader::with_format(source.reader()?, format)
            .into_decoder()
            .map_err(|e| parse_error(ID, e))?;
        let (width, height) = decoder.dimensions();
        let color = decoder.color_type();
        drop(decoder);

        metadata.set(MetaKey::Width, MetaValue::with_unit(i64::from(width), "pixels"));
        metadata.set(MetaKey::Height, MetaValue::with_unit(i64::from(height), "pixels"));
        metadata.set(
            MetaKey::BitsPerPixel,
            MetaValue::with_unit(i64::from(color.bits_per_pixel()), "bits"),
        );
        metadata.set(MetaKey::PixelFormat, pixel_format_name(color));

        match exif::Reader::new().read_from_container(source.reader()?) {
            Ok(exif) => add_exif_fields(&mut metadata, &exif),
            Err(exif::Error::NotFound(_)) => {
                log::debug!("No EXIF data in {}", source.path().display());
            }
            Err(err) => {
                log::debug!("Ignoring unreadable EXIF in {}: {}", source.path().display(), err);
            }
        }

        metadata.set(MetaKey::Compression, name);
        metadata.set(MetaKey::MimeType, mime);
        metadata.set(MetaKey::FileSize, MetaValue::Bytes(source.size()));
        Ok(metadata)
    }
}

// ============================================================================
// EXIF
// ============================================================================

fn primary_field(exif: &exif::Exif, tag: exif::Tag) -> Option<&exif::Field> {
    exif.get_field(tag, exif::In::PRIMARY)
}

/// First ASCII string of a field, without padding or NULs.
fn ascii_value(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
    match &primary_field(exif, tag)?.value {
        exif::Value::Ascii(strings) => strings
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_matches(['\0', ' ']).to_string())
            .filter(|text| !text.is_empty()),
        _ => None,
    }
}

/// Field value as kamadak-exif displays it, units included.
fn display_value(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
    let field = primary_field(exif, tag)?;
    let text = field.display_value().with_unit(exif).to_string();
    let text = text.trim_matches('"').to_string();
    if text.is_empty() { None } else { Some(text) }
}

fn date_value(exif: &exif::Exif, tag: exif::Tag) -> Option<MetaValue> {
    let field = primary_field(exif, tag)?;
    let exif::Value::Ascii(strings) = &field.value else {
        return None;
    };
    let bytes = strings.first()?;
    match exif::DateTime::from_ascii(bytes) {
        Ok(date) => NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
            .and_then(|day| {
                day.and_hms_opt(u32::from(date.hour), u32::from(date.minute), u32::from(date.second))
            })
            .map(MetaValue::DateTime),
        Err(_) => Some(MetaValue::Text(String::from_utf8_lossy(bytes).trim().to_string())),
    }
}

fn orientation_name(value: u32) -> Option<&'static str> {
    match value {
        1 => Some("Horizontal (normal)"),
        2 => Some("Mirrored horizontal"),
        3 => Some("Rotated 180"),
        4 => Some("Mirrored vertical"),
        5 => Some("Mirrored horizontal then rotated 90 CCW"),
        6 => Some("Rotated 90 CW"),
        7 => Some("Mirrored horizontal then rotated 90 CW"),
        8 => Some("Rotated 90 CCW"),
        _ => None,
    }
}

fn resolution_value(exif: &exif::Exif, tag: exif::Tag) -> Option<MetaValue> {
    match &primary_field(exif, tag)?.value {
        exif::Value::Rational(values) => {
            let dpi = values.first()?.to_f64();
            dpi.is_finite()
                .then(|| MetaValue::with_unit(dpi.round() as i64, "DPI"))
        }
        _ => None,
    }
}

/// Degrees/minutes/seconds rationals to signed decimal degrees.
fn gps_coordinate(exif: &exif::Exif, tag: exif::Tag, ref_tag: exif::Tag, negative: char) -> Option<f64> {
    let exif::Value::Rational(parts) = &primary_field(exif, tag)?.value else {
        return None;
    };
    if parts.len() < 3 {
        return None;
    }
    let degrees = parts[0].to_f64() + parts[1].to_f64() / 60.0 + parts[2].to_f64() / 3600.0;
    let reference = ascii_value(exif, ref_tag).unwrap_or_default();
    Some(if reference.contains(negative) { -degrees } else { degrees })
}

fn add_exif_fields(metadata: &mut Metadata, exif: &exif::Exif) {
    use exif::Tag;

    metadata.set_opt(MetaKey::Title, ascii_value(exif, Tag::ImageDescription));
    metadata.set_opt(MetaKey::Author, ascii_value(exif, Tag::Artist));

    let original = date_value(exif, Tag::DateTimeOriginal);
    let modified = date_value(exif, Tag::DateTime);
    match original {
        Some(created) => {
            metadata.set(MetaKey::CreationDate, created);
            metadata.set_opt(MetaKey::LastModification, modified);
        }
        None => metadata.set_opt(MetaKey::CreationDate, modified),
    }

    metadata.set_opt(MetaKey::CameraManufacturer, ascii_value(exif, Tag::Make));
    metadata.set_opt(MetaKey::CameraModel, ascii_value(exif, Tag::Model));
    metadata.set_opt(MetaKey::ExposureTime, display_value(exif, Tag::ExposureTime));
    metadata.set_opt(MetaKey::FNumber, display_value(exif, Tag::FNumber));
    metadata.set_opt(
        MetaKey::IsoSpeed,
        primary_field(exif, Tag::PhotographicSensitivity).and_then(|field| field.value.get_uint(0)),
    );
    metadata.set_opt(MetaKey::FocalLength, display_value(exif, Tag::FocalLength));
    metadata.set_opt(MetaKey::Flash, display_value(exif, Tag::Flash));
    metadata.set_opt(
        MetaKey::ImageOrientation,
        primary_field(exif, Tag::Orientation)
            .and_then(|field| field.value.get_uint(0))
            .and_then(orientation_name),
    );
    metadata.set_opt(MetaKey::WidthDpi, resolution_value(exif, Tag::XResolution));
    metadata.set_opt(MetaKey::HeightDpi, resolution_value(exif, Tag::YResolution));

    if let Some(latitude) = gps_coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, 'S') {
        metadata.set(MetaKey::Latitude, MetaValue::Float { value: latitude, unit: None });
    }
    if let Some(longitude) = gps_coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, 'W') {
        metadata.set(MetaKey::Longitude, MetaValue::Float { value: longitude, unit: None });
    }
    if let Some(exif::Value::Rational(values)) = primary_field(exif, Tag::GPSAltitude).map(|f| &f.value) {
        if let Some(altitude) = values.first() {
            metadata.set(
                MetaKey::Altitude,
                MetaValue::Float {
                    value: altitude.to_f64(),
                    unit: Some("meters"),
                },
            );
        }
    }

    metadata.set_opt(MetaKey::Copyright, ascii_value(exif, Tag::Copyright));
    metadata.set_opt(MetaKey::Producer, ascii_value(exif, Tag::Software));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_info() {
        assert_eq!(format_info(ImageFormat::Png), Some(("PNG", "image/png")));
        assert_eq!(format_info(ImageFormat::Jpeg).map(|(_, mime)| mime), Some("image/jpeg"));
        assert_eq!(format_info(ImageFormat::Hdr), None);
    }

    #[test]
    fn test_orientation_names() {
        assert_eq!(orientation_name(1), Some("Horizontal (normal)"));
        assert_eq!(orientation_name(6), Some("Rotated 90 CW"));
        assert_eq!(orientation_name(0), None);
    }

    #[test]
    fn test_pixel_format_name() {
        assert_eq!(pixel_format_name(ColorType::Rgb8), "RGB");
        assert_eq!(pixel_format_name(ColorType::La8), "Grayscale with alpha");
    }
}
