// metaview-core/tests/format_tests.rs
//
// Field coverage of the built-in image and audio parsers.

mod common;

use metaview_core::*;
use tempfile::tempdir;

fn lines_of(metadata: &Metadata) -> Vec<String> {
    render(metadata).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn test_jpeg_exif_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = common::write_jpeg_with_exif(dir.path(), "photo.jpg");

    let metadata = retrieve(&path).expect("jpeg should yield metadata");
    let lines = lines_of(&metadata);

    assert_eq!(lines[0], "Image width: 64 pixels");
    assert_eq!(lines[1], "Image height: 48 pixels");
    assert!(lines.contains(&"Camera manufacturer: Acme".to_string()));
    assert!(lines.contains(&"Camera model: Pinhole 3000".to_string()));
    assert!(lines.contains(&"Creation date: 2024-06-01 12:30:45".to_string()));
    assert!(lines.contains(&"Image orientation: Rotated 90 CW".to_string()));
    assert!(lines.contains(&"MIME type: image/jpeg".to_string()));
    Ok(())
}

#[test]
fn test_jpeg_raw_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = common::write_jpeg_with_exif(dir.path(), "photo.jpg");

    let config = CoreConfigBuilder::new().human(false).build()?;
    let metadata = Retriever::new(&config).retrieve(&path).unwrap();
    let text = render_with(&metadata, &config.plaintext_options())?;

    assert!(text.starts_with("width: 64\nheight: 48\n"));
    assert!(text.contains("creation_date: 2024-06-01T12:30:45"));
    assert!(text.contains("camera_manufacturer: Acme"));
    Ok(())
}

#[test]
fn test_png_without_exif_is_fine() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = common::write_png(dir.path(), "plain.png", 3, 2);

    let metadata = retrieve(&path).unwrap();
    assert!(!metadata.has(MetaKey::CameraManufacturer));
    assert_eq!(metadata.first(MetaKey::PixelFormat), Some(&MetaValue::from("RGB")));
    Ok(())
}

#[test]
fn test_wav_stream_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = common::write_wav(dir.path(), "tone.wav");

    let metadata = retrieve(&path).expect("wav should yield metadata");
    assert!(metadata.groups().is_empty());

    let lines = lines_of(&metadata);
    assert_eq!(lines[0], "Duration: 1 sec");
    assert!(lines.contains(&"Channel: 1".to_string()));
    assert!(lines.contains(&"Sample rate: 8.0 kHz".to_string()));
    assert!(lines.contains(&"Bits/sample: 16 bits".to_string()));
    assert!(lines.contains(&"MIME type: audio/x-wav".to_string()));
    assert!(lines.iter().any(|line| line.starts_with("Bit rate: ")));
    Ok(())
}

#[test]
fn test_mime_and_parser_queries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let png = common::write_png(dir.path(), "plain.png", 3, 2);
    let wav = common::write_wav(dir.path(), "tone.wav");

    let config = CoreConfig::default();
    let retriever = Retriever::new(&config);
    assert_eq!(retriever.mime_type(&png)?, Some("image/png"));
    assert_eq!(retriever.mime_type(&wav)?, Some("audio/x-wav"));
    assert!(retriever.parser_description(&wav)?.starts_with("Audio"));
    Ok(())
}
