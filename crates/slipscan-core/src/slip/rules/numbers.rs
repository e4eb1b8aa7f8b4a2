//! Decimal coercion for odds and stake values.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a decimal the way slips print them: dot or comma as the decimal
/// separator, grouping spaces tolerated.
pub fn parse_loose_decimal(s: &str) -> Option<Decimal> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty()
        || !cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return None;
    }

    let normalized = cleaned.replace(',', ".");
    // More than one separator left means grouping we cannot trust.
    if normalized.matches('.').count() > 1 {
        return None;
    }

    Decimal::from_str(&normalized).ok()
}

/// Coerce a raw odds value; anything at or below `min_odds` is absent.
pub fn coerce_odds(raw: &str, min_odds: Decimal) -> Option<Decimal> {
    let value = first_decimal(raw)?;
    (value > min_odds).then_some(value)
}

/// Coerce a raw stake value; non-positive stakes are absent.
pub fn coerce_stake(raw: &str) -> Option<Decimal> {
    let value = first_decimal(raw)?;
    (value > Decimal::ZERO).then_some(value)
}

/// Whole value first, then the leading token; slip lines often trail
/// currency marks or bookmaker noise.
fn first_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    parse_loose_decimal(raw).or_else(|| {
        raw.split_whitespace()
            .next()
            .and_then(parse_loose_decimal)
    })
}
