//! Communication records read from log files.

pub use error::RecordError;
pub use parser::{parse_record, parse_records, read_records};

pub mod error;

mod parser;

use crate::types::UserId;
use derive_more::Display;

/// One logged communication from `source` to `target`.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display(fmt = "{}    {}    {}", timestamp, source, target)]
pub struct Record {
    timestamp: String,
    source: UserId,
    target: UserId,
}

impl Record {
    pub fn new(timestamp: String, source: UserId, target: UserId) -> Self {
        Self {
            timestamp,
            source,
            target,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}
