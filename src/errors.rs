use thiserror::Error;

/// A type specifier that the grammar could not derive.
///
/// Carries the offending specifier so the caller can report it against the
/// annotation it came from and carry on with the rest of the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse type specifier '{input}': {message} (offset {offset})")]
pub struct ParseError {
    pub input: String,
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    pub fn new(input: &str, message: impl Into<String>, offset: usize) -> Self {
        Self {
            input: input.to_string(),
            message: message.into(),
            offset,
        }
    }
}

/// Errors that can occur while loading documentation inputs.
#[derive(Error, Debug)]
pub enum DocLinkError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("symbol table error: {message} (path: {path})")]
    Symbols { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `DocLinkError`.
pub type Result<T> = std::result::Result<T, DocLinkError>;
