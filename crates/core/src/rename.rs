use crate::error::MediaError;
use crate::file_info::FileInformation;
use crate::media_type::MediaType;
use crate::planner::plan_rename;
use std::fs;
use tracing::debug;

// No overwrite and no auto-suffixing: an occupied target fails and leaves
// both files untouched.
pub fn rename_file(
    file_info: &FileInformation,
    media_type: MediaType,
    prefix: &str,
    suffix: &str,
) -> Result<FileInformation, MediaError> {
    let renamed = plan_rename(file_info, media_type, prefix, suffix)?;
    debug!(from = %file_info.path.display(), to = %renamed.path.display(), "planned rename");

    if renamed.path.exists() {
        return Err(MediaError::FileAlreadyExists(renamed.path));
    }

    fs::rename(&file_info.path, &renamed.path).map_err(|source| MediaError::Rename {
        from: file_info.path.clone(),
        to: renamed.path.clone(),
        source,
    })?;

    Ok(renamed)
}
