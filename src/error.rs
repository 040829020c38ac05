//! Error types

use thiserror::Error;

/// Result type alias for rendering and output
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a render or a save
///
/// Unknown elements, unknown colors and missing dimensions are not
///   errors; they degrade silently
#[derive(Error, Debug)]
pub enum Error {
    /// XML failed to parse
    #[error("Invalid document: {0}")]
    Document(#[from] roxmltree::Error),

    /// Root element is not <svg>
    #[error("Expected <svg> root element, found <{0}>")]
    MissingRoot(String),

    /// Root width or height exceeds the size an image may have
    #[error("Image size {width}x{height} is too large")]
    TooLarge {
        width: usize,
        height: usize,
    },

    /// Numeric token in `points` or `d` is not a number
    #[error("Invalid number {token:?} in attribute {attribute}")]
    Parse {
        attribute: &'static str,
        token: String,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Output file type is not supported
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Image has no pixels to write
    #[error("Image is empty, width or height is zero")]
    EmptyImage,
}

impl Error {
    pub(crate) fn parse(attribute: &'static str, token: &str) -> Self {
        Error::Parse { attribute, token: token.to_string() }
    }
}
