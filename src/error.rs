use thiserror::Error;

/// Error types for queue search operations.
///
/// Only [`QueueSearchError::InvalidFormat`] can come out of the pure core
/// (clock-string parsing). The remaining variants belong to the boundary layer
/// and the command line tool.
///
/// # Error Handling Examples
///
/// ```rust
/// use queue_search::{parse_clock_to_seconds, QueueSearchError};
///
/// match parse_clock_to_seconds("1:2:3:4") {
///     Ok(seconds) => println!("Seeking to {seconds}s"),
///     Err(QueueSearchError::InvalidFormat(input)) => {
///         eprintln!("Not a valid time: {input}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum QueueSearchError {
    /// A clock string could not be parsed.
    ///
    /// Raised when a segment is not an integer or when there are more
    /// segments than seconds, minutes and hours. Callers should report
    /// this to the user instead of seeking to zero.
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    /// An injected collaborator (suggestion source, favourite store) failed.
    #[error("Suggestion source failed: {0}")]
    Suggestion(String),

    /// Settings could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// File system I/O errors.
    ///
    /// This can occur when the command line tool reads a queue file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A queue file was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
