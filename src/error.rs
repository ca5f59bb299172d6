//! Reader errors.

/// Errors thrown when constructing a boolean reader.
///
/// All fallibility lives in construction. Once a reader exists, the decode
/// primitives are infallible; truncated input yields defined but meaningless
/// symbols instead of an error.
#[derive(Debug)]
pub enum ReaderError {
    /// The declared partition size is not covered by the given buffer.
    InvalidInput,
    /// The marker bit at the start of the stream was zero, so the stream is
    /// corrupt or out of sync. The partition must not be parsed further.
    DesyncStream,
}

impl std::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReaderError::InvalidInput => {
                write!(f, "partition size exceeds the input buffer")
            }
            ReaderError::DesyncStream => {
                write!(f, "marker bit check failed, stream is desynchronized")
            }
        }
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
