use std::path::PathBuf;

use enough::StopReason;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a bitmap")]
    NotBitmap,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl BitmapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BitmapError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

/// Errors that cause a single filter to be skipped.
///
/// None of these abort a pipeline run; they are reported and the next
/// filter proceeds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    #[error("unknown filter -{0}")]
    UnknownFilter(String),

    #[error("incorrect number of parameters for filter -{filter}: expected {expected}, got {actual}")]
    ArgumentCount {
        filter: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid parameter for filter -{filter}: {value}")]
    InvalidParameter { filter: String, value: String },
}
