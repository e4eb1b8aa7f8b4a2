//! Declarative label table for slip lines.
//!
//! Each rule maps a set of English/Hungarian label keywords to one field.
//! Recognition output frequently loses diacritics, so every accented
//! keyword also appears accent-stripped. Adding a language or synonym is
//! a data change here, not a code change.

/// Fields a slip line can be labeled as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Match,
    Date,
    Time,
    Odds,
    Stake,
    Outcome,
}

/// One row of the label table.
pub struct LabelRule {
    pub field: LabelField,
    pub keywords: &'static [&'static str],
}

/// English and Hungarian label synonyms.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        field: LabelField::Match,
        keywords: &["match", "meccs", "mérkőzés", "merkozes"],
    },
    LabelRule {
        field: LabelField::Date,
        keywords: &["date", "dátum", "datum"],
    },
    LabelRule {
        field: LabelField::Time,
        keywords: &["time", "időpont", "idopont"],
    },
    LabelRule {
        field: LabelField::Odds,
        keywords: &["odds", "szorzó", "szorzo"],
    },
    LabelRule {
        field: LabelField::Stake,
        keywords: &["stake", "tét", "tet"],
    },
    LabelRule {
        field: LabelField::Outcome,
        keywords: &["outcome", "eredmény", "eredmeny"],
    },
];

/// Match a line against the label table.
///
/// The label lookup is case-insensitive; the returned value keeps the
/// original casing. A keyword only counts when followed by a delimiter
/// (colon, dash, or a whitespace run) and a non-empty remainder.
pub fn match_label(line: &str) -> Option<(LabelField, &str)> {
    for rule in LABEL_RULES {
        for keyword in rule.keywords {
            if let Some(rest) = strip_keyword(line, keyword) {
                if let Some(value) = strip_delimiter(rest) {
                    return Some((rule.field, value));
                }
            }
        }
    }
    None
}

/// Case-insensitive prefix strip; returns the remainder of `line`.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut rest = line.trim_start();
    for expected in keyword.chars() {
        let c = rest.chars().next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }
    Some(rest)
}

/// Accept `:` or `-` (optionally space-padded) or a whitespace run as the
/// label/value delimiter. An empty remainder is no match.
fn strip_delimiter(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    if let Some(value) = trimmed
        .strip_prefix(':')
        .or_else(|| trimmed.strip_prefix('-'))
    {
        let value = value.trim();
        return (!value.is_empty()).then_some(value);
    }

    // No punctuation: require at least one whitespace character between
    // keyword and value, so "MATCHES ..." does not read as MATCH.
    if trimmed.len() < rest.len() && !trimmed.is_empty() {
        return Some(trimmed.trim_end());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        assert_eq!(
            match_label("MATCH: Team A vs Team B"),
            Some((LabelField::Match, "Team A vs Team B"))
        );
        assert_eq!(match_label("ODDS: 2.5"), Some((LabelField::Odds, "2.5")));
        assert_eq!(match_label("STAKE: 5"), Some((LabelField::Stake, "5")));
        assert_eq!(match_label("OUTCOME: 1"), Some((LabelField::Outcome, "1")));
    }

    #[test]
    fn test_hungarian_labels() {
        assert_eq!(
            match_label("MECCS: Fradi vs Újpest"),
            Some((LabelField::Match, "Fradi vs Újpest"))
        );
        assert_eq!(
            match_label("DÁTUM: 2025-06-10"),
            Some((LabelField::Date, "2025-06-10"))
        );
        assert_eq!(
            match_label("Tét: 1500"),
            Some((LabelField::Stake, "1500"))
        );
        assert_eq!(
            match_label("EREDMÉNY: X"),
            Some((LabelField::Outcome, "X"))
        );
    }

    #[test]
    fn test_accent_stripped_variants() {
        assert_eq!(
            match_label("IDOPONT: 18:30"),
            Some((LabelField::Time, "18:30"))
        );
        assert_eq!(
            match_label("eredmeny: 2"),
            Some((LabelField::Outcome, "2"))
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            match_label("MATCH - Team A vs Team B"),
            Some((LabelField::Match, "Team A vs Team B"))
        );
        assert_eq!(match_label("ODDS 2.5"), Some((LabelField::Odds, "2.5")));
        assert_eq!(match_label("odds : 2.5"), Some((LabelField::Odds, "2.5")));
    }

    #[test]
    fn test_label_is_case_insensitive_value_keeps_casing() {
        assert_eq!(
            match_label("match: Team A VS Team B"),
            Some((LabelField::Match, "Team A VS Team B"))
        );
    }

    #[test]
    fn test_partial_word_is_not_a_label() {
        assert_eq!(match_label("MATCHES played this week"), None);
        assert_eq!(match_label("datewise report"), None);
    }

    #[test]
    fn test_empty_value_is_no_match() {
        assert_eq!(match_label("MATCH:"), None);
        assert_eq!(match_label("MATCH:   "), None);
        assert_eq!(match_label("ODDS"), None);
    }

    #[test]
    fn test_mid_line_label_is_ignored() {
        assert_eq!(match_label("the match: Team A vs Team B"), None);
    }
}
