//! Common regex patterns for slip field coercion.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns
    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4})\b"
    ).unwrap();

    // Clock time: HH:MM or HH.MM
    pub static ref TIME_HM: Regex = Regex::new(
        r"\b(\d{1,2})[:.](\d{2})\b"
    ).unwrap();

    // A whole line that is nothing but a number
    pub static ref DECIMAL_LINE: Regex = Regex::new(
        r"^\d+(?:[.,]\d+)?$"
    ).unwrap();

    // Loose date shape anywhere in a line; diagnostics classification only
    pub static ref DATE_LIKE: Regex = Regex::new(
        r"\b\d{1,4}[./\-]\d{1,2}[./\-]\d{1,4}\b"
    ).unwrap();

    // Explicit system-bet marker (EN/HU)
    pub static ref SYSTEM_BET: Regex = Regex::new(
        r"(?i)\b(?:system|rendszer)\b"
    ).unwrap();
}
