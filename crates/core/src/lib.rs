mod error;
mod exif_reader;
mod file_info;
mod media_type;
mod mp4_reader;
mod planner;
mod rename;
#[cfg(test)]
mod test_fixtures;
mod walker;

pub use error::MediaError;
pub use file_info::{FileInformation, RenameResult};
pub use media_type::MediaType;
pub use planner::plan_rename;
pub use rename::rename_file;
pub use walker::{rename_with_date, RenameWalk};
