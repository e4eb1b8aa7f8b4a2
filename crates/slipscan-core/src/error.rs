//! Error types for the slipscan-core library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the slip understanding pipeline.
///
/// Only the analyzer raises: either the gateway produced no text at all,
/// or it did and an operation-specific mandatory field was not populated.
/// The two stay distinguishable so callers can tell "image unreadable"
/// from "image readable but wager data absent".
#[derive(Error, Debug)]
pub enum SlipscanError {
    /// The gateway could not produce text for the image.
    #[error("text extraction failed: {0}")]
    Extraction(#[from] ExtractionFailedError),

    /// Parsing succeeded but a mandatory field of the requested
    /// projection is absent. Carries the first missing field in the
    /// operation's documented order.
    #[error("missing required field: {0}")]
    MissingRequiredField(FieldName),
}

/// Errors from the external text-recognition gateway.
#[derive(Error, Debug)]
pub enum ExtractionFailedError {
    /// The image resource could not be read.
    #[error("image not readable: {}", .0.display())]
    ImageUnreadable(PathBuf),

    /// The recognition engine ran but failed.
    #[error("recognition engine failed: {0}")]
    Engine(String),

    /// I/O failure while invoking the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Projected field names, rendered with their wire spelling so error
/// messages line up with serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    MatchName,
    MatchDate,
    MatchTime,
    TipCategory,
    Odds,
    Stake,
    Outcome,
}

impl FieldName {
    /// The camelCase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::MatchName => "matchName",
            FieldName::MatchDate => "matchDate",
            FieldName::MatchTime => "matchTime",
            FieldName::TipCategory => "tipCategory",
            FieldName::Odds => "odds",
            FieldName::Stake => "stake",
            FieldName::Outcome => "outcome",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for the slipscan library.
pub type Result<T> = std::result::Result<T, SlipscanError>;
