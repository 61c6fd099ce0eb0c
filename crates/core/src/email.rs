//! Email shape validation.

use std::sync::LazyLock;

use regex::Regex;

/// The accepted email shape. Intentionally a fixed pattern, not full RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("invalid email pattern")
});

/// Returns true if `email` matches the accepted shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("alice.smith+tag@example.org"));
        assert!(validate_email("x_y%z@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email(""));
        assert!(!validate_email("a b@example.com"));
    }

    #[test]
    fn requires_two_letter_tld() {
        assert!(!validate_email("a@b.c"));
        assert!(validate_email("a@b.cc"));
    }
}
