//! Error management.

use derive_more::Display;

#[derive(Debug, Display)]
pub enum RecordError {
    #[display(fmt = "line {}: {}", line, message)]
    Parse { line: usize, message: String },
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
