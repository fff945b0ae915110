use crate::error::MediaError;
use crate::file_info::FileInformation;
use crate::media_type::MediaType;

// output filenames carry the creation date as 20251109T163856
const FILENAME_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

// A missing date_created here is a stage-sequencing defect, not a
// recoverable condition.
pub fn plan_rename(
    file_info: &FileInformation,
    media_type: MediaType,
    prefix: &str,
    suffix: &str,
) -> Result<FileInformation, MediaError> {
    let date_created = file_info
        .date_created
        .expect("date_created must be set before planning a rename");

    let name = format!(
        "{prefix}{}{suffix}",
        date_created.format(FILENAME_DATE_FORMAT)
    );
    let extension = media_type.normalize_extension(&file_info.extension)?;
    let path = file_info.dir.join(format!("{name}.{extension}"));

    Ok(FileInformation {
        path,
        dir: file_info.dir.clone(),
        name,
        extension: extension.to_string(),
        date_created: file_info.date_created,
    })
}
