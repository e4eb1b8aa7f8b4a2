//! Caller-facing projection shapes.
//!
//! These three value objects are the only data crossing the pipeline's
//! outward boundary. Mandatory fields are mandatory at the type level;
//! a view is only constructed once the analyzer has verified them.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slip::TipCategory;

/// Match identification projection. Every field is mandatory here;
/// financial fields on the slip are ignored for this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub match_name: String,

    pub match_date: NaiveDate,

    #[serde(with = "super::hhmm")]
    pub match_time: NaiveTime,
}

/// Raw-slip projection. Financial and outcome fields may be absent; the
/// caller completes them by hand, so partial results are valid output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettingSlipData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    pub tip_category: TipCategory,

    pub confidence: u8,

    /// The gateway's text output, verbatim.
    pub extracted_text: String,
}

/// Fully-populated projection used to pre-fill the tip creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFillTip {
    /// Synthesized from the match name.
    pub title: String,

    pub tip_category: TipCategory,

    pub match_name: String,

    pub match_date: NaiveDate,

    pub odds: Decimal,

    pub stake: Decimal,

    pub outcome: String,

    pub confidence: u8,

    #[serde(
        default,
        with = "super::opt_hhmm",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_time: Option<NaiveTime>,
}
