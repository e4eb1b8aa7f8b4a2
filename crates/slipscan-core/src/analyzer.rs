//! Orchestrator composing the gateway call, the parser, and the
//! caller-specific projections.

use std::path::Path;

use tracing::debug;

use crate::error::{FieldName, Result, SlipscanError};
use crate::gateway::TextExtractionGateway;
use crate::models::slip::ParsedTipData;
use crate::models::views::{AutoFillTip, BettingSlipData, MatchData};
use crate::slip::TipParser;

/// Slip image analyzer: one gateway call per operation, a shared parse,
/// then a shape-specific projection.
///
/// Holds no state beyond the gateway and parser values, so a single
/// analyzer can serve concurrent invocations without coordination.
pub struct SlipAnalyzer<G> {
    gateway: G,
    parser: TipParser,
}

impl<G: TextExtractionGateway> SlipAnalyzer<G> {
    /// Build an analyzer around a text-extraction gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            parser: TipParser::new(),
        }
    }

    /// Replace the default parser with a tuned one.
    pub fn with_parser(mut self, parser: TipParser) -> Self {
        self.parser = parser;
        self
    }

    /// Extract match identification from a slip image.
    ///
    /// Required, in reporting order: match name, date, time. Financial
    /// fields on the slip are ignored for this projection.
    pub fn extract_match_data(&self, image: impl AsRef<Path>) -> Result<MatchData> {
        let parsed = self.read_and_parse(image.as_ref())?;

        let match_name = parsed.match_name.ok_or(missing(FieldName::MatchName))?;
        let match_date = parsed.match_date.ok_or(missing(FieldName::MatchDate))?;
        let match_time = parsed.match_time.ok_or(missing(FieldName::MatchTime))?;

        Ok(MatchData {
            match_name,
            match_date,
            match_time,
        })
    }

    /// Recognize a slip without any mandatory-field check.
    ///
    /// Partial results are valid output here; the caller completes
    /// absent fields by hand.
    pub fn recognize_betting_slip(&self, image: impl AsRef<Path>) -> Result<BettingSlipData> {
        let parsed = self.read_and_parse(image.as_ref())?;

        Ok(BettingSlipData {
            odds: parsed.odds,
            stake: parsed.stake,
            outcome: parsed.outcome,
            tip_category: parsed.tip_category,
            confidence: parsed.confidence,
            extracted_text: parsed.raw_text,
        })
    }

    /// Produce a fully-populated tip form payload.
    ///
    /// Required, in reporting order: match name, date, category, odds,
    /// stake, outcome. The category is an enum and always carries a
    /// value, so the check continues with odds. Time stays optional.
    pub fn auto_fill_tip(&self, image: impl AsRef<Path>) -> Result<AutoFillTip> {
        let parsed = self.read_and_parse(image.as_ref())?;

        let match_name = parsed.match_name.ok_or(missing(FieldName::MatchName))?;
        let match_date = parsed.match_date.ok_or(missing(FieldName::MatchDate))?;
        let odds = parsed.odds.ok_or(missing(FieldName::Odds))?;
        let stake = parsed.stake.ok_or(missing(FieldName::Stake))?;
        let outcome = parsed.outcome.ok_or(missing(FieldName::Outcome))?;

        Ok(AutoFillTip {
            title: match_name.clone(),
            tip_category: parsed.tip_category,
            match_name,
            match_date,
            odds,
            stake,
            outcome,
            confidence: parsed.confidence,
            match_time: parsed.match_time,
        })
    }

    /// Exactly one gateway call, then the shared parse. A gateway
    /// failure propagates as-is and is never demoted to empty data.
    fn read_and_parse(&self, image: &Path) -> Result<ParsedTipData> {
        let text = self.gateway.extract_text(image)?;
        debug!(
            "gateway produced {} characters for {}",
            text.len(),
            image.display()
        );
        Ok(self.parser.parse(&text))
    }
}

fn missing(field: FieldName) -> SlipscanError {
    SlipscanError::MissingRequiredField(field)
}
