use crate::error::MediaError;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

// Seconds between the QuickTime epoch (1904-01-01 UTC) and the Unix epoch.
const QT_TO_UNIX_OFFSET: i64 = 2_082_844_800;

pub fn extract_creation_date(path: &Path) -> Result<Option<NaiveDateTime>, MediaError> {
    let mut file = File::open(path).map_err(|source| MediaError::MetadataIo {
        path: path.to_path_buf(),
        source,
    })?;
    let meta = file.metadata().map_err(|source| MediaError::MetadataIo {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.is_dir() {
        return Err(MediaError::MetadataIo {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::IsADirectory),
        });
    }

    let encoded = match read_encoded_date(&mut file, meta.len()) {
        Ok(Some(encoded)) => encoded,
        Ok(None) => {
            debug!(path = %path.display(), "no mvhd creation time");
            return Ok(None);
        }
        Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => {
            debug!(path = %path.display(), "truncated container");
            return Ok(None);
        }
        Err(source) => {
            return Err(MediaError::MetadataIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let modified = meta.modified().map_err(|source| MediaError::MetadataIo {
        path: path.to_path_buf(),
        source,
    })?;
    let modification = DateTime::<Local>::from(modified).naive_local();

    Ok(Some(reconcile(encoded, modification, path)))
}

// A skew of whole hours under a day looks like a mislabeled timezone on the
// encoded date; the local modification date wins then. Sub-hour skews do not
// count as timezone offsets.
pub(crate) fn reconcile(
    encoded: NaiveDateTime,
    modification: NaiveDateTime,
    path: &Path,
) -> NaiveDateTime {
    if encoded == modification {
        return encoded;
    }

    let diff_seconds = (encoded - modification).num_seconds().abs();
    if diff_seconds < SECONDS_PER_DAY && diff_seconds % SECONDS_PER_HOUR == 0 {
        debug!(path = %path.display(), diff_seconds, "using modification date");
        modification
    } else {
        debug!(path = %path.display(), diff_seconds, "using encoded date");
        encoded
    }
}

#[derive(Debug, Clone, Copy)]
struct BoxRange {
    data_start: u64,
    data_end: u64,
}

fn read_encoded_date<R: Read + Seek>(
    reader: &mut R,
    len: u64,
) -> io::Result<Option<NaiveDateTime>> {
    let Some(moov) = find_box(reader, 0, len, *b"moov")? else {
        return Ok(None);
    };
    let Some(mvhd) = find_box(reader, moov.data_start, moov.data_end, *b"mvhd")? else {
        return Ok(None);
    };

    reader.seek(SeekFrom::Start(mvhd.data_start))?;
    let mut version_and_flags = [0u8; 4];
    reader.read_exact(&mut version_and_flags)?;
    let qt_seconds = if version_and_flags[0] == 1 {
        read_u64_be(reader)?
    } else {
        read_u32_be(reader)? as u64
    };

    // Encoders that do not know the capture time write zero (1904-01-01).
    if qt_seconds == 0 {
        return Ok(None);
    }

    let unix_seconds = match i64::try_from(qt_seconds)
        .ok()
        .and_then(|qt| qt.checked_sub(QT_TO_UNIX_OFFSET))
    {
        Some(unix) => unix,
        None => return Ok(None),
    };
    Ok(DateTime::<Utc>::from_timestamp(unix_seconds, 0).map(|utc| utc.naive_utc()))
}

fn find_box<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    end: u64,
    kind: [u8; 4],
) -> io::Result<Option<BoxRange>> {
    let mut offset = start;
    while offset + 8 <= end {
        reader.seek(SeekFrom::Start(offset))?;
        let mut header = [0u8; 8];
        reader.read_exact(&mut header)?;
        let mut size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as u64;
        let mut header_size = 8u64;

        if size == 1 {
            // "largesize" box, real size follows the type
            size = read_u64_be(reader)?;
            header_size = 16;
        } else if size == 0 {
            // size zero means the box runs to the end of the enclosure
            size = end.saturating_sub(offset);
        }
        if size < header_size {
            return Ok(None);
        }

        let box_end = offset.saturating_add(size).min(end);
        if box_end <= offset {
            return Ok(None);
        }

        if header[4..8] == kind {
            return Ok(Some(BoxRange {
                data_start: offset + header_size,
                data_end: box_end,
            }));
        }
        offset = box_end;
    }
    Ok(None)
}

fn read_u32_be<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64_be<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}
