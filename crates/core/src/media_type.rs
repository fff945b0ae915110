use crate::error::MediaError;
use crate::{exif_reader, mp4_reader};
use chrono::NaiveDateTime;
use std::path::Path;

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[("jpg", "jpg"), ("jpeg", "jpg"), ("png", "png")];
const VIDEO_EXTENSIONS: &[(&str, &str)] = &[("mp4", "mp4")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    fn extension_table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            MediaType::Image => IMAGE_EXTENSIONS,
            MediaType::Video => VIDEO_EXTENSIONS,
        }
    }

    pub fn is_supported(self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.extension_table()
            .iter()
            .any(|(variant, _)| *variant == extension)
    }

    // callers filter with is_supported first; unreachable for a
    // pre-filtered entry
    pub fn normalize_extension(self, extension: &str) -> Result<&'static str, MediaError> {
        let lowered = extension.to_ascii_lowercase();
        self.extension_table()
            .iter()
            .find(|(variant, _)| *variant == lowered)
            .map(|(_, canonical)| *canonical)
            .ok_or_else(|| MediaError::UnsupportedExtension(extension.to_string()))
    }

    // Ok(None) means no timestamp could be derived (soft); Err is
    // reserved for hard filesystem failures
    pub fn extract_creation_date(
        self,
        path: &Path,
    ) -> Result<Option<NaiveDateTime>, MediaError> {
        match self {
            MediaType::Image => exif_reader::extract_creation_date(path),
            MediaType::Video => mp4_reader::extract_creation_date(path),
        }
    }
}
