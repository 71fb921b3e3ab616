use std::path::PathBuf;
use thiserror::Error;

/// Result type for captioning operations
pub type CaptionResult<T> = Result<T, CaptionError>;

/// Everything that can go wrong while loading, paging or editing captions.
///
/// All variants are recoverable: the session is left untouched and the
/// presentation layer decides how loudly to report them.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Target or control folder is unset or does not exist
    #[error("{0} image folder is missing or does not exist")]
    MissingDirectory(&'static str),

    /// Caption file extension is empty
    #[error("Please provide an extension for the caption files")]
    MissingExtension,

    /// Target and control folders share no image filenames
    #[error("No shared images found between the target and control directories")]
    EmptyIntersection,

    /// Page request could not be parsed as a finite number
    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    /// Operation requires a successful load first
    #[error("No images loaded")]
    NoActiveSession,

    /// Slot index is outside the rendered page or holds no image
    #[error("Slot {0} has no image loaded")]
    SlotNotLoaded(usize),

    /// Caption read/write or directory listing failure
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaptionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaptionError::Io {
            path: path.into(),
            source,
        }
    }
}
