//! Error module
//!

use thiserror::Error;

/// Everything that can go wrong while reading ARGOS records.
///
/// Structural errors (`MalformedHeader`, `MalformedCoordinates`, `BadTagId`)
/// abort the whole run, `BadCoordinate` only discards the offending record.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgosError {
    #[error("malformed header at line {line}: {tokens} tokens, need {min}")]
    MalformedHeader { line: usize, tokens: usize, min: usize },
    #[error("malformed coordinate line at line {line}: {tokens} tokens, need {min}")]
    MalformedCoordinates { line: usize, tokens: usize, min: usize },
    #[error("bad tag id {0:?} at line {1}")]
    BadTagId(String, usize),
    #[error("bad coordinate token {0:?}")]
    BadCoordinate(String),
    #[error("bad timestamp {0:?}")]
    BadTimestamp(String),
}
