//! Total parser turning raw recognition output into structured tip data.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::slip::{EntityKind, ExtractedEntity, ParsedTipData, TipCategory};

use super::rules::{
    coerce_date, coerce_odds, coerce_stake, coerce_time, match_label, LabelField,
    patterns::{DATE_LIKE, DECIMAL_LINE, SYSTEM_BET},
};

/// Primary fields feeding `confidence_score`.
const PRIMARY_FIELD_COUNT: usize = 6;

/// Slip text parser.
///
/// Total over its input: garbage in means absent fields and a low
/// confidence out, never an error. A value that fails coercion is
/// treated the same as an absent one.
pub struct TipParser {
    min_odds: Decimal,
}

impl TipParser {
    /// Create a parser with the default odds floor (1.01).
    pub fn new() -> Self {
        Self {
            min_odds: Decimal::new(101, 2),
        }
    }

    /// Override the odds floor.
    pub fn with_min_odds(mut self, min_odds: Decimal) -> Self {
        self.min_odds = min_odds;
        self
    }

    /// Parse raw slip text into structured tip data.
    pub fn parse(&self, text: &str) -> ParsedTipData {
        info!("parsing betting slip from {} characters of text", text.len());

        let normalized = normalize(text);

        let mut match_candidates: Vec<String> = Vec::new();
        let mut match_date: Option<NaiveDate> = None;
        let mut match_time: Option<NaiveTime> = None;
        let mut odds: Option<Decimal> = None;
        let mut stake: Option<Decimal> = None;
        let mut outcome: Option<String> = None;
        let mut entities: Vec<ExtractedEntity> = Vec::new();

        for line in normalized.lines() {
            if line.is_empty() {
                continue;
            }

            // First value that coerces wins; every match-labeled line is
            // kept as a candidate for the category heuristic.
            match match_label(line) {
                Some((LabelField::Match, value)) => {
                    match_candidates.push(value.to_string());
                }
                Some((LabelField::Date, value)) => {
                    if match_date.is_none() {
                        match_date = coerce_date(value);
                    }
                }
                Some((LabelField::Time, value)) => {
                    if match_time.is_none() {
                        match_time = coerce_time(value);
                    }
                }
                Some((LabelField::Odds, value)) => {
                    if odds.is_none() {
                        odds = coerce_odds(value, self.min_odds);
                    }
                }
                Some((LabelField::Stake, value)) => {
                    if stake.is_none() {
                        stake = coerce_stake(value);
                    }
                }
                Some((LabelField::Outcome, value)) => {
                    if outcome.is_none() {
                        outcome = Some(value.to_string());
                    }
                }
                None => entities.push(classify_line(line)),
            }
        }

        let tip_category = if SYSTEM_BET.is_match(&normalized) {
            TipCategory::SystemBet
        } else if match_candidates.len() > 1 {
            TipCategory::ComboBet
        } else {
            TipCategory::SingleBet
        };

        let ambiguous_match = match_candidates.len() > 1;
        let match_name = match_candidates.into_iter().next();

        let mut confidence: i8 = 5;
        if odds.is_none() {
            confidence -= 1;
        }
        if stake.is_none() {
            confidence -= 1;
        }
        if outcome.is_none() {
            confidence -= 1;
        }
        if match_date.is_none() {
            confidence -= 1;
        }
        if ambiguous_match {
            confidence -= 1;
        }
        let confidence = confidence.max(1) as u8;

        let populated = [
            match_name.is_some(),
            match_date.is_some(),
            match_time.is_some(),
            odds.is_some(),
            stake.is_some(),
            outcome.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        let confidence_score = populated as f32 / PRIMARY_FIELD_COUNT as f32;

        debug!(
            "parsed slip: category={:?} confidence={} score={:.2} entities={}",
            tip_category,
            confidence,
            confidence_score,
            entities.len()
        );

        ParsedTipData {
            match_name,
            match_date,
            match_time,
            tip_category,
            odds,
            stake,
            outcome,
            confidence,
            confidence_score,
            raw_text: text.to_string(),
            extracted_entities: entities,
        }
    }
}

impl Default for TipParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the default configuration.
pub fn parse_slip(text: &str) -> ParsedTipData {
    TipParser::new().parse(text)
}

/// Unify line endings and collapse whitespace runs within each line.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Best-effort classification for lines the label table did not claim.
fn classify_line(line: &str) -> ExtractedEntity {
    let kind = if DECIMAL_LINE.is_match(line) {
        EntityKind::Numeric
    } else if DATE_LIKE.is_match(line) {
        EntityKind::DateLike
    } else {
        EntityKind::Unclassified
    };

    ExtractedEntity {
        kind,
        value: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_slip_extracts_every_field() {
        let text = "MATCH: Team A vs Team B\n\
                    DATE: 2025-06-10\n\
                    TIME: 20:45\n\
                    ODDS: 2.5\n\
                    STAKE: 5\n\
                    OUTCOME: 1";

        let parsed = parse_slip(text);

        assert_eq!(parsed.match_name.as_deref(), Some("Team A vs Team B"));
        assert_eq!(parsed.match_date, NaiveDate::from_ymd_opt(2025, 6, 10));
        assert_eq!(parsed.match_time, NaiveTime::from_hms_opt(20, 45, 0));
        assert_eq!(parsed.odds, Some(dec("2.5")));
        assert_eq!(parsed.stake, Some(dec("5")));
        assert_eq!(parsed.outcome.as_deref(), Some("1"));
        assert_eq!(parsed.tip_category, TipCategory::SingleBet);
        assert_eq!(parsed.confidence, 5);
        assert_eq!(parsed.confidence_score, 1.0);
        assert!(parsed.extracted_entities.is_empty());
    }

    #[test]
    fn test_hungarian_slip() {
        let text = "MECCS: Fradi vs Újpest\n\
                    DÁTUM: 10.06.2025\n\
                    IDŐPONT: 18.30\n\
                    SZORZÓ: 2,75\n\
                    TÉT: 1500\n\
                    EREDMÉNY: X";

        let parsed = parse_slip(text);

        assert_eq!(parsed.match_name.as_deref(), Some("Fradi vs Újpest"));
        assert_eq!(parsed.match_date, NaiveDate::from_ymd_opt(2025, 6, 10));
        assert_eq!(parsed.match_time, NaiveTime::from_hms_opt(18, 30, 0));
        assert_eq!(parsed.odds, Some(dec("2.75")));
        assert_eq!(parsed.stake, Some(dec("1500")));
        assert_eq!(parsed.outcome.as_deref(), Some("X"));
        assert_eq!(parsed.confidence, 5);
        assert_eq!(parsed.confidence_score, 1.0);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_slip("");

        assert_eq!(parsed.match_name, None);
        assert_eq!(parsed.match_date, None);
        assert_eq!(parsed.odds, None);
        assert_eq!(parsed.stake, None);
        assert_eq!(parsed.outcome, None);
        assert_eq!(parsed.tip_category, TipCategory::SingleBet);
        assert_eq!(parsed.confidence, 1);
        assert_eq!(parsed.confidence_score, 0.0);
        assert_eq!(parsed.raw_text, "");
    }

    #[test]
    fn test_never_panics_on_garbage() {
        for input in [
            "\u{0}\u{1}\u{2}binary\u{ff}",
            "🎰🎲⚽",
            "::::----::::",
            "ODDS ODDS ODDS",
            "\r\n\r\n\r\n",
            "á\r\né",
        ] {
            let parsed = parse_slip(input);
            assert!((1..=5).contains(&parsed.confidence));
            assert!((0.0..=1.0).contains(&parsed.confidence_score));
            assert_eq!(parsed.raw_text, input);
        }
    }

    #[test]
    fn test_unparseable_values_demoted_to_absent() {
        let text = "MATCH: Team A vs Team B\n\
                    DATE: tomorrow\n\
                    ODDS: abc\n\
                    STAKE: -5\n\
                    OUTCOME: 1";

        let parsed = parse_slip(text);

        assert_eq!(parsed.match_name.as_deref(), Some("Team A vs Team B"));
        assert_eq!(parsed.match_date, None);
        assert_eq!(parsed.odds, None);
        assert_eq!(parsed.stake, None);
        assert_eq!(parsed.outcome.as_deref(), Some("1"));
        // odds, stake, and date all count against the ladder
        assert_eq!(parsed.confidence, 2);
    }

    #[test]
    fn test_odds_at_floor_are_absent() {
        let parsed = parse_slip("ODDS: 1.01");
        assert_eq!(parsed.odds, None);

        let parsed = parse_slip("ODDS: 1.02");
        assert_eq!(parsed.odds, Some(dec("1.02")));
    }

    #[test]
    fn test_combo_category_from_multiple_match_lines() {
        let text = "MATCH: Team A vs Team B\n\
                    MATCH: Team C vs Team D\n\
                    DATE: 2025-06-10\n\
                    ODDS: 3.8\n\
                    STAKE: 10\n\
                    OUTCOME: 1/1";

        let parsed = parse_slip(text);

        assert_eq!(parsed.tip_category, TipCategory::ComboBet);
        // First candidate wins, the ambiguity costs one confidence step.
        assert_eq!(parsed.match_name.as_deref(), Some("Team A vs Team B"));
        assert_eq!(parsed.confidence, 4);
    }

    #[test]
    fn test_system_keyword_wins_over_combo() {
        let text = "SYSTEM 2/3\n\
                    MATCH: Team A vs Team B\n\
                    MATCH: Team C vs Team D";

        let parsed = parse_slip(text);
        assert_eq!(parsed.tip_category, TipCategory::SystemBet);
    }

    #[test]
    fn test_hungarian_system_keyword() {
        let parsed = parse_slip("rendszer szelvény\nMATCH: A vs B");
        assert_eq!(parsed.tip_category, TipCategory::SystemBet);
    }

    #[test]
    fn test_first_coercible_value_wins() {
        let text = "DATE: not a date\nDATE: 2025-06-10";
        let parsed = parse_slip(text);
        assert_eq!(parsed.match_date, NaiveDate::from_ymd_opt(2025, 6, 10));
    }

    #[test]
    fn test_unmatched_lines_become_entities_in_order() {
        let text = "Szelvényszám 123456\n\
                    2.5\n\
                    10.06.2025\n\
                    MATCH: Team A vs Team B";

        let parsed = parse_slip(text);

        let kinds: Vec<EntityKind> = parsed
            .extracted_entities
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Unclassified,
                EntityKind::Numeric,
                EntityKind::DateLike
            ]
        );
        assert_eq!(parsed.extracted_entities[1].value, "2.5");
        // Diagnostics never feed the primary fields.
        assert_eq!(parsed.match_date, None);
        assert_eq!(parsed.odds, None);
    }

    #[test]
    fn test_whitespace_and_line_endings_normalized() {
        let text = "MATCH:   Team   A  vs   Team B\r\nODDS:\t2.5\r\n";
        let parsed = parse_slip(text);
        assert_eq!(parsed.match_name.as_deref(), Some("Team A vs Team B"));
        assert_eq!(parsed.odds, Some(dec("2.5")));
    }

    #[test]
    fn test_raw_text_preserved_verbatim() {
        let text = "MATCH:   Team A\r\nnoise";
        let parsed = parse_slip(text);
        assert_eq!(parsed.raw_text, text);
    }

    #[test]
    fn test_missing_time_lowers_score_not_confidence() {
        let text = "MATCH: Team A vs Team B\n\
                    DATE: 2025-06-10\n\
                    ODDS: 2.5\n\
                    STAKE: 5\n\
                    OUTCOME: 1";

        let parsed = parse_slip(text);
        assert_eq!(parsed.confidence, 5);
        assert!((parsed.confidence_score - 5.0 / 6.0).abs() < f32::EPSILON);
    }
}
