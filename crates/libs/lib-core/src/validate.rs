//! # Email Validation
//!
//! The validation predicate behind the form: five ordered string checks
//! applied to a submitted candidate, short-circuiting on the first failure.
//!
//! ## Rule Chain
//!
//! 1. At least 6 characters
//! 2. Must not start with `@` or `.`
//! 3. Exactly one `@` and exactly one `.`
//! 4. The `.` must sit at exactly one of the last-4 / last-3 character
//!    positions (exclusive-or)
//! 5. No spaces anywhere
//!
//! Every outcome, acceptance or rejection, is a normal [`Verdict`] value.
//! The predicate is pure and total: any string input, including the empty
//! string a missing form field is normalized to, produces a verdict without
//! panicking.
//!
//! All lengths and positions are counted in characters, not bytes, so
//! multi-byte input cannot shift the rule boundaries.

use std::fmt;

/// Outcome of running a candidate through the rule chain.
///
/// Each variant carries a fixed user-facing message; the page renders
/// [`Verdict::message`] verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Rejected by rule 1: fewer than 6 characters.
    TooShort,
    /// Rejected by rule 2: starts with `@` or `.`.
    BadStart,
    /// Rejected by rule 3: `@` count or `.` count differs from 1.
    WrongSymbolCount,
    /// Rejected by rule 4: the `.` is not at exactly one of the two
    /// trailing positions the rule inspects.
    BadDotPosition,
    /// Rejected by rule 5: contains a space.
    ContainsSpace,
    /// Passed all five rules.
    Valid,
}

impl Verdict {
    /// The fixed message rendered into the page for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::TooShort => "Invalid email: should be at least 6 characters long.",
            Verdict::BadStart => "Invalid email: should not start with '@' or '.'",
            Verdict::WrongSymbolCount => {
                "Invalid email: should contain exactly one '@' and one '.'"
            }
            Verdict::BadDotPosition => {
                "Invalid email: '.' should be at least 2 characters after '@'"
            }
            Verdict::ContainsSpace => "Invalid email: should not contain spaces.",
            Verdict::Valid => "Valid email!",
        }
    }

    /// Whether the candidate was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run a candidate through the five-rule chain and return the verdict.
///
/// Rules run in fixed order and the first failure wins; later rules never
/// see a candidate an earlier rule rejected. Rule 1 establishes a length
/// floor of 6 characters, so the positional rules (2 and 4) always have the
/// characters they inspect.
///
/// Rule 4 is deliberately literal: the single `.` must be the 3rd- or
/// 4th-from-last character, but not both positions at once. This is far
/// stricter than real-world address syntax (it accepts `user@mail.com` and
/// `user@mail.co` but rejects longer TLDs) and is kept as the documented
/// contract rather than generalized.
///
/// # Example
///
/// ```rust
/// use lib_core::validate::{validate_email, Verdict};
///
/// assert_eq!(validate_email("user@mail.com"), Verdict::Valid);
/// assert_eq!(validate_email("a@b"), Verdict::TooShort);
/// ```
pub fn validate_email(candidate: &str) -> Verdict {
    let chars: Vec<char> = candidate.chars().collect();
    let len = chars.len();

    // Rule 1: minimum length of 6 characters.
    if len < 6 {
        return Verdict::TooShort;
    }

    // Rule 2: must not start with '@' or '.'. Safe to index: len >= 6.
    if chars[0] == '@' || chars[0] == '.' {
        return Verdict::BadStart;
    }

    // Rule 3: exactly one '@' and exactly one '.' over the whole string.
    let at_count = chars.iter().filter(|&&c| c == '@').count();
    let dot_count = chars.iter().filter(|&&c| c == '.').count();
    if at_count != 1 || dot_count != 1 {
        return Verdict::WrongSymbolCount;
    }

    // Rule 4: exclusive-or over the 4th- and 3rd-from-last positions.
    if !((chars[len - 4] == '.') ^ (chars[len - 3] == '.')) {
        return Verdict::BadDotPosition;
    }

    // Rule 5: no spaces. Runs last and still overrides the rules above.
    if chars.contains(&' ') {
        return Verdict::ContainsSpace;
    }

    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Rule 1: minimum length ==========

    #[test]
    fn test_short_candidate_rejected() {
        assert_eq!(validate_email("a@b"), Verdict::TooShort);
        assert_eq!(validate_email("a@b.c"), Verdict::TooShort); // 5 chars
    }

    #[test]
    fn test_empty_string_rejected_as_too_short() {
        // A missing form field is normalized to "" at the HTTP boundary and
        // must land here rather than panic in a positional rule.
        assert_eq!(validate_email(""), Verdict::TooShort);
    }

    #[test]
    fn test_length_counted_in_chars_not_bytes() {
        // 5 characters, 10 bytes in UTF-8: still too short.
        assert_eq!(validate_email("ααααα"), Verdict::TooShort);
    }

    // ========== Rule 2: leading character ==========

    #[test]
    fn test_leading_at_rejected() {
        assert_eq!(validate_email("@bcdef"), Verdict::BadStart);
    }

    #[test]
    fn test_leading_dot_rejected() {
        assert_eq!(validate_email(".bcdef"), Verdict::BadStart);
    }

    #[test]
    fn test_short_leading_at_hits_length_rule_first() {
        // Rule order matters: a 3-char "@bc" never reaches the start rule.
        assert_eq!(validate_email("@bc"), Verdict::TooShort);
    }

    // ========== Rule 3: symbol cardinality ==========

    #[test]
    fn test_two_ats_rejected() {
        assert_eq!(validate_email("a@@b.c"), Verdict::WrongSymbolCount);
    }

    #[test]
    fn test_missing_dot_rejected() {
        assert_eq!(validate_email("ab@cdef"), Verdict::WrongSymbolCount);
    }

    #[test]
    fn test_missing_at_rejected() {
        assert_eq!(validate_email("ab.cdef"), Verdict::WrongSymbolCount);
    }

    #[test]
    fn test_two_dots_rejected() {
        assert_eq!(validate_email("user@mail.co.uk"), Verdict::WrongSymbolCount);
    }

    // ========== Rule 4: dot position ==========

    #[test]
    fn test_dot_fourth_from_last_accepted() {
        // '.' at position -4, e.g. a three-letter TLD.
        assert_eq!(validate_email("user@mail.com"), Verdict::Valid);
    }

    #[test]
    fn test_dot_third_from_last_accepted() {
        // '.' at position -3, e.g. a two-letter TLD.
        assert_eq!(validate_email("user@mail.co"), Verdict::Valid);
        assert_eq!(validate_email("ab@cd.ef"), Verdict::Valid);
    }

    #[test]
    fn test_dot_second_from_last_rejected() {
        // '.' at position -2: neither inspected position holds it.
        assert_eq!(validate_email("user@mail.c"), Verdict::BadDotPosition);
    }

    #[test]
    fn test_dot_too_far_from_end_rejected() {
        // '.' at position -5.
        assert_eq!(validate_email("a@b.cdefg"), Verdict::BadDotPosition);
        // Four-letter TLDs fall outside the rule's window.
        assert_eq!(validate_email("user@mail.info"), Verdict::BadDotPosition);
    }

    #[test]
    fn test_dot_last_character_rejected() {
        assert_eq!(validate_email("user@mailc."), Verdict::BadDotPosition);
    }

    // ========== Rule 5: no spaces ==========

    #[test]
    fn test_space_rejected_even_when_all_other_rules_pass() {
        // One '@', one '.', dot at -3, no bad start: only rule 5 fires.
        assert_eq!(validate_email("ab @cd.ef"), Verdict::ContainsSpace);
    }

    #[test]
    fn test_space_after_earlier_failure_reports_earlier_rule() {
        // The space rule runs last; a cardinality failure wins first.
        assert_eq!(validate_email("a b@c@d.e"), Verdict::WrongSymbolCount);
    }

    // ========== General properties ==========

    #[test]
    fn test_verdict_is_idempotent() {
        let inputs = ["user@mail.com", "a@b", "@bcdef", "ab @cd.ef", ""];
        for input in inputs {
            assert_eq!(validate_email(input), validate_email(input));
        }
    }

    #[test]
    fn test_messages_are_fixed_strings() {
        assert_eq!(
            validate_email("a@b").message(),
            "Invalid email: should be at least 6 characters long."
        );
        assert_eq!(validate_email("user@mail.com").message(), "Valid email!");
    }

    #[test]
    fn test_valid_flag() {
        assert!(validate_email("user@mail.com").is_valid());
        assert!(!validate_email("a@b").is_valid());
    }

    #[test]
    fn test_display_matches_message() {
        let verdict = validate_email("user@mail.c");
        assert_eq!(verdict.to_string(), verdict.message());
    }
}
