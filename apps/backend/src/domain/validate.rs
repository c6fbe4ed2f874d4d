//! Field validation helpers shared by the service layer.

use lazy_regex::{lazy_regex, Lazy, Regex};

use crate::errors::DomainError;

static EMAIL: Lazy<Regex> = lazy_regex!(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$");

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Reject empty or whitespace-only required fields.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("reclutamiento@techcorp.com"));
        assert!(is_valid_email("maria.gonzalez@ejemplo.com"));
        assert!(is_valid_email("a+b@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn require_non_empty_rejects_whitespace() {
        assert!(require_non_empty("title", "  ").is_err());
        assert!(require_non_empty("title", "Desarrollador").is_ok());
    }
}
