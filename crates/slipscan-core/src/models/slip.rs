//! Parsed betting-slip data model.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured result of parsing one slip's recognized text.
///
/// Produced once per input and immutable afterwards. Absent fields stay
/// absent; no sentinel value ever stands in for missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTipData {
    /// Matched event, e.g. "Team A vs Team B".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_name: Option<String>,

    /// Event date (ISO on the wire).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_date: Option<NaiveDate>,

    /// Kickoff in 24-hour clock, `HH:MM` on the wire.
    #[serde(
        default,
        with = "super::opt_hhmm",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_time: Option<NaiveTime>,

    /// Wager shape detected on the slip.
    pub tip_category: TipCategory,

    /// Decimal odds; always above the configured floor when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds: Option<Decimal>,

    /// Wagered amount; always positive when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake: Option<Decimal>,

    /// Picked outcome code, e.g. "1" or "X2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    /// Coarse quality estimate, 1 (poor) to 5 (complete).
    pub confidence: u8,

    /// Fraction of the six primary fields that were populated.
    pub confidence_score: f32,

    /// The recognition output exactly as received, for diagnostics.
    pub raw_text: String,

    /// Lines the label table did not claim, best-effort classified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extracted_entities: Vec<ExtractedEntity>,
}

/// Wager shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    /// One event, one pick.
    SingleBet,
    /// Several picks combined on one slip.
    ComboBet,
    /// Explicitly marked system wager.
    SystemBet,
}

impl Default for TipCategory {
    fn default() -> Self {
        Self::SingleBet
    }
}

/// A line the parser could not attach to any field, kept for diagnostics
/// only. Never feeds the primary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// Best-effort classification.
    pub kind: EntityKind,

    /// The line content, whitespace-collapsed.
    pub value: String,
}

/// Best-effort classification of an unmatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The whole line is a number.
    #[serde(rename = "numeric")]
    Numeric,
    /// The line contains something shaped like a date.
    #[serde(rename = "date-like")]
    DateLike,
    /// Anything else.
    #[serde(rename = "unclassified")]
    Unclassified,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tip_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&TipCategory::SingleBet).unwrap(),
            "\"single_bet\""
        );
        assert_eq!(
            serde_json::to_string(&TipCategory::ComboBet).unwrap(),
            "\"combo_bet\""
        );
        assert_eq!(
            serde_json::to_string(&TipCategory::SystemBet).unwrap(),
            "\"system_bet\""
        );
    }

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&EntityKind::DateLike).unwrap(),
            "\"date-like\""
        );
        assert_eq!(
            serde_json::to_string(&EntityKind::Numeric).unwrap(),
            "\"numeric\""
        );
    }

    #[test]
    fn test_parsed_tip_serializes_camel_case_and_omits_absent() {
        let parsed = ParsedTipData {
            match_name: Some("Team A vs Team B".to_string()),
            match_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            match_time: NaiveTime::from_hms_opt(18, 30, 0),
            tip_category: TipCategory::SingleBet,
            odds: None,
            stake: None,
            outcome: None,
            confidence: 2,
            confidence_score: 0.5,
            raw_text: "MATCH: Team A vs Team B".to_string(),
            extracted_entities: Vec::new(),
        };

        let json: serde_json::Value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["matchName"], "Team A vs Team B");
        assert_eq!(json["matchDate"], "2025-06-10");
        assert_eq!(json["matchTime"], "18:30");
        assert_eq!(json["tipCategory"], "single_bet");
        assert!(json.get("odds").is_none());
        assert!(json.get("stake").is_none());
        assert!(json.get("extractedEntities").is_none());
    }
}
