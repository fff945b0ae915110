use crate::error::MediaError;
use crate::file_info::{FileInformation, RenameResult};
use crate::media_type::MediaType;
use crate::rename::rename_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

// The directory is enumerated up front, unsorted, so a bad directory fails
// before any entry is processed and renamed files cannot feed back into the
// walk. Processing stays lazy, one entry per next(); an Err item is only
// produced for hard metadata I/O failures.
pub fn rename_with_date(
    directory: &Path,
    media_type: MediaType,
    prefix: &str,
    suffix: &str,
) -> Result<RenameWalk, MediaError> {
    let read_dir = fs::read_dir(directory).map_err(|source| MediaError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| MediaError::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;
        entries.push(entry.path());
    }

    Ok(RenameWalk {
        entries: entries.into_iter(),
        media_type,
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
    })
}

#[derive(Debug)]
pub struct RenameWalk {
    entries: std::vec::IntoIter<PathBuf>,
    media_type: MediaType,
    prefix: String,
    suffix: String,
}

impl RenameWalk {
    fn process(&self, path: PathBuf) -> Result<Option<RenameResult>, MediaError> {
        let mut file_info = match FileInformation::from_path(&path) {
            Ok(info) => info,
            Err(_) => {
                debug!(path = %path.display(), "skipping directory entry");
                return Ok(None);
            }
        };

        if !self.media_type.is_supported(&file_info.extension) {
            debug!(path = %path.display(), "unsupported extension");
            return Ok(Some(RenameResult::unchanged(path)));
        }

        // hard metadata I/O errors propagate
        file_info.date_created = self.media_type.extract_creation_date(&file_info.path)?;
        if file_info.date_created.is_none() {
            info!(path = %path.display(), "no creation date found, not renaming");
            return Ok(Some(RenameResult::unchanged(path)));
        }

        match rename_file(&file_info, self.media_type, &self.prefix, &self.suffix) {
            Ok(renamed) => Ok(Some(RenameResult::renamed(path, renamed.path))),
            Err(err @ MediaError::FileAlreadyExists(_)) => {
                warn!(path = %path.display(), error = %err, "not renaming");
                Ok(Some(RenameResult::unchanged(path)))
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "rename failed");
                Ok(Some(RenameResult::unchanged(path)))
            }
        }
    }
}

impl Iterator for RenameWalk {
    type Item = Result<RenameResult, MediaError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = self.entries.next()?;
            match self.process(path) {
                Ok(Some(result)) => return Some(Ok(result)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
