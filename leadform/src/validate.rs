//! Field predicates shared by live (per-keystroke) and submit-time checks.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Address shape accepted by the form: something, `@`, something, `.`, something,
/// with no whitespace and exactly one `@` per part.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Message rendered under the email input while the address is malformed.
pub const INVALID_EMAIL_HINT: &str = "Please enter a valid email address";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex literal"))
}

/// The one email predicate. Both the inline hint and `submit` go through here.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Inline hint for the email input.
///
/// Empty input gets no hint: the visitor has not started typing yet, and the
/// required-field check reports it on submit.
pub fn inline_email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() || is_valid_email(email) {
        None
    } else {
        Some(INVALID_EMAIL_HINT)
    }
}

/// A meeting date is selectable when it is today or later.
pub fn is_selectable_meeting_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Parse the challenge answer. Surrounding whitespace is ignored; anything
/// else that is not an integer yields `None`.
pub fn parse_challenge_answer(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
