//! Rule-based coercion for slip fields.

pub mod dates;
pub mod labels;
pub mod numbers;
pub mod patterns;

pub use dates::{coerce_date, coerce_time};
pub use labels::{match_label, LabelField, LabelRule, LABEL_RULES};
pub use numbers::{coerce_odds, coerce_stake, parse_loose_decimal};
