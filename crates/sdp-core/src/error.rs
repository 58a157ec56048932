use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict surfaces of the codec.
///
/// Attribute parsers never return these: a malformed attribute yields `None`
/// fields instead. Only whole-description validation, typed enum parsing and
/// configuration loading can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The session description was empty
    #[error("Empty session description")]
    EmptyDescription,

    /// A line did not have the `<type>=<value>` shape
    #[error("Invalid SDP line {line}: {content:?}")]
    InvalidLine {
        /// 1-based line number after splitting
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// Unknown media direction token
    #[error("Invalid media direction: {0}")]
    InvalidDirection(String),

    /// Session configuration could not be decoded
    #[error("Invalid session configuration: {0}")]
    Config(#[from] serde_json::Error),
}
