// metaview-core/tests/common/mod.rs
//
// Media fixtures generated at test time.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};

/// Writes a black PNG of the given size.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height).save(&path).unwrap();
    path
}

fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

/// Writes a small JPEG carrying camera make/model, capture date and
/// orientation in an EXIF APP1 segment.
pub fn write_jpeg_with_exif(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(64, 48).save(&path).unwrap();

    let make = ascii(Tag::Make, "Acme");
    let model = ascii(Tag::Model, "Pinhole 3000");
    let taken = ascii(Tag::DateTimeOriginal, "2024:06:01 12:30:45");
    let orientation = Field {
        tag: Tag::Orientation,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![6]),
    };

    let mut writer = Writer::new();
    writer.push_field(&make);
    writer.push_field(&model);
    writer.push_field(&taken);
    writer.push_field(&orientation);
    let mut tiff = std::io::Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let jpeg = fs::read(&path).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    fs::write(&path, out).unwrap();
    path
}

/// 16-bit mono PCM WAV of silence.
pub fn wav_bytes(sample_rate: u32, seconds: u32) -> Vec<u8> {
    let block_align: u16 = 2;
    let data_len = sample_rate * seconds * u32::from(block_align);

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // channels
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);
    bytes
}

pub fn write_wav(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, wav_bytes(8000, 1)).unwrap();
    path
}

pub fn write_text(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "nothing to see here\n").unwrap();
    path
}
