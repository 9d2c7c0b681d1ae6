//! Shape validation for emails and phone numbers.
//!
//! These are syntactic checks only: no deliverability lookups, no RFC 5322
//! parsing. Both functions are pure and never fail.

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with no '@' inside local or domain and at least one
// character after the dot. Deliberately unanchored at the end.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email regex compiles"));

// Optional leading '+', then digits. No spaces, dashes, or parentheses.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("phone regex compiles"));

/// Check that `s` has the shape `local@domain.tld`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Check that `s` is one or more digits, optionally prefixed with '+'.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}
