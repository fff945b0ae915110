use crate::error::MediaError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInformation {
    pub path: PathBuf,
    pub dir: PathBuf,
    pub name: String,
    pub extension: String,
    pub date_created: Option<NaiveDateTime>,
}

impl FileInformation {
    pub fn from_path(path: &Path) -> Result<Self, MediaError> {
        if path.is_dir() {
            return Err(MediaError::NotAFile(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            name: path
                .file_stem()
                .map(|v| v.to_string_lossy().to_string())
                .unwrap_or_default(),
            extension: path
                .extension()
                .map(|v| v.to_string_lossy().to_string())
                .unwrap_or_default(),
            date_created: None,
        })
    }
}

// new_name equals old_name whenever no rename happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub old_name: PathBuf,
    pub new_name: PathBuf,
    pub success: bool,
}

impl RenameResult {
    pub(crate) fn renamed(old_name: PathBuf, new_name: PathBuf) -> Self {
        Self {
            old_name,
            new_name,
            success: true,
        }
    }

    pub(crate) fn unchanged(path: PathBuf) -> Self {
        Self {
            old_name: path.clone(),
            new_name: path,
            success: false,
        }
    }
}
