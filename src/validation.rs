//! Stateless validation helpers for operator-typed input.
//!
//! Parsing returns `Option`: `None` means invalid. No sentinel value that a
//! legitimate parse could collide with.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound for a plausible patient age.
pub const MAX_PATIENT_AGE: u8 = 150;

/// Upper bound for a doctor's years of experience.
pub const MAX_EXPERIENCE_YEARS: u8 = 70;

static CONTACT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+()-]{10,}$").expect("valid regex"));

/// Trims and parses. `None` on empty or non-numeric input.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Like [`parse_integer`], additionally `None` outside `min..=max`.
pub fn parse_integer_in_range(text: &str, min: i64, max: i64) -> Option<i64> {
    parse_integer(text).filter(|v| (min..=max).contains(v))
}

/// Non-blank after trimming.
pub fn is_valid_string(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Digits, spaces, hyphens, plus sign, and parentheses; at least 10 characters.
pub fn is_valid_contact_number(text: &str) -> bool {
    CONTACT_NUMBER_RE.is_match(text)
}

pub fn is_valid_age(age: i64) -> bool {
    (0..=i64::from(MAX_PATIENT_AGE)).contains(&age)
}
