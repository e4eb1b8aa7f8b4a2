//! Core library for betting-slip image understanding.
//!
//! This crate provides:
//! - A gateway trait for the external text-recognition engine
//! - Total parsing of recognized slip text into structured tip data
//!   (English/Hungarian labels, field coercion, confidence estimates)
//! - Three caller-facing projections with typed missing-field failures
//!
//! The pipeline holds no shared state; the one side effect is the single
//! gateway call each analyzer operation makes.

pub mod analyzer;
pub mod error;
pub mod gateway;
pub mod models;
pub mod slip;

pub use analyzer::SlipAnalyzer;
pub use error::{ExtractionFailedError, FieldName, Result, SlipscanError};
pub use gateway::TextExtractionGateway;
pub use models::config::{GatewayConfig, ParserConfig, SlipscanConfig};
pub use models::slip::{EntityKind, ExtractedEntity, ParsedTipData, TipCategory};
pub use models::views::{AutoFillTip, BettingSlipData, MatchData};
pub use slip::{parse_slip, TipParser};

#[cfg(feature = "native")]
pub use gateway::TesseractGateway;
