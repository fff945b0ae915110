use crate::error::MediaError;
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

// EXIF date strings look like `2025:11:09 16:38:56`, no timezone
const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

pub fn extract_creation_date(path: &Path) -> Result<Option<NaiveDateTime>, MediaError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => return soft_unless_directory(path, source),
    };
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::Io(source)) => return soft_unless_directory(path, source),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no parseable EXIF");
            return Ok(None);
        }
    };

    let Some(field) = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY))
    else {
        debug!(path = %path.display(), "EXIF has no date field");
        return Ok(None);
    };

    // take the raw ASCII bytes, display_value() would quote the string
    let raw = match &field.value {
        Value::Ascii(values) if !values.is_empty() => {
            String::from_utf8_lossy(&values[0]).to_string()
        }
        _ => field.display_value().to_string(),
    };

    match NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(err) => {
            debug!(path = %path.display(), raw = %raw, error = %err, "unparseable EXIF date");
            Ok(None)
        }
    }
}

// The hard class for images is narrow: only directory-as-file propagates,
// it means the filesystem changed underneath the classification stage.
fn soft_unless_directory(
    path: &Path,
    source: std::io::Error,
) -> Result<Option<NaiveDateTime>, MediaError> {
    if source.kind() == std::io::ErrorKind::IsADirectory {
        return Err(MediaError::MetadataIo {
            path: path.to_path_buf(),
            source,
        });
    }
    debug!(path = %path.display(), error = %source, "could not read file");
    Ok(None)
}
