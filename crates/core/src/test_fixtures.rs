// Byte-level fixtures: a minimal JPEG with one EXIF DateTime field and a
// minimal ISO-BMFF container with an mvhd creation time.

use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

const QT_TO_UNIX_OFFSET: i64 = 2_082_844_800;

pub(crate) fn jpeg_bytes_with_datetime(datetime: &str) -> Vec<u8> {
    let mut value = datetime.as_bytes().to_vec();
    value.push(0); // ASCII values are NUL-terminated

    // TIFF header (II, little-endian), IFD0 offset 8.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    // IFD0: one entry, value stored right after the IFD.
    let value_offset = 8 + 2 + 12 + 4;
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x0132u16.to_le_bytes()); // DateTime
    tiff.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    tiff.extend_from_slice(&(value.len() as u32).to_le_bytes());
    tiff.extend_from_slice(&(value_offset as u32).to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no further IFD
    tiff.extend_from_slice(&value);

    let mut jpeg = Vec::new();
    jpeg.extend_from_slice(&[0xFF, 0xD8]); // SOI
    jpeg.extend_from_slice(&[0xFF, 0xE1]); // APP1
    let app1_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&app1_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]); // EOI
    jpeg
}

pub(crate) fn write_jpeg_with_datetime(path: &Path, datetime: &str) {
    fs::write(path, jpeg_bytes_with_datetime(datetime)).expect("write jpeg fixture");
}

pub(crate) fn mp4_bytes_with_creation(creation: NaiveDateTime) -> Vec<u8> {
    let qt_seconds = (creation.and_utc().timestamp() + QT_TO_UNIX_OFFSET) as u32;

    let mut mvhd = Vec::new();
    mvhd.extend_from_slice(&108u32.to_be_bytes());
    mvhd.extend_from_slice(b"mvhd");
    mvhd.extend_from_slice(&[0, 0, 0, 0]); // version 0, no flags
    mvhd.extend_from_slice(&qt_seconds.to_be_bytes()); // creation_time
    mvhd.extend_from_slice(&qt_seconds.to_be_bytes()); // modification_time
    mvhd.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    mvhd.extend_from_slice(&0u32.to_be_bytes()); // duration
    mvhd.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    mvhd.extend_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
    mvhd.extend_from_slice(&[0u8; 10]); // reserved
    for entry in [
        0x0001_0000u32,
        0,
        0,
        0,
        0x0001_0000,
        0,
        0,
        0,
        0x4000_0000,
    ] {
        mvhd.extend_from_slice(&entry.to_be_bytes()); // identity matrix
    }
    mvhd.extend_from_slice(&[0u8; 24]); // pre_defined
    mvhd.extend_from_slice(&2u32.to_be_bytes()); // next_track_ID
    assert_eq!(mvhd.len(), 108);

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&16u32.to_be_bytes());
    bytes.extend_from_slice(b"ftyp");
    bytes.extend_from_slice(b"isom");
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(&((8 + mvhd.len()) as u32).to_be_bytes());
    bytes.extend_from_slice(b"moov");
    bytes.extend_from_slice(&mvhd);
    bytes
}

pub(crate) fn write_mp4_with_creation(path: &Path, creation: NaiveDateTime) {
    fs::write(path, mp4_bytes_with_creation(creation)).expect("write mp4 fixture");
}
