use std::path::PathBuf;
use thiserror::Error;

// Only MetadataIo and ReadDir escape a directory walk; the rest are
// converted into failed results per entry.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(String),

    #[error("file already exists: {0}")]
    FileAlreadyExists(PathBuf),

    #[error("could not read metadata of {path}")]
    MetadataIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not rename {from} to {to}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
