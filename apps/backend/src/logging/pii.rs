use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Centralized registry for PII redaction regex patterns.
///
/// The records this API stores carry two kinds of PII that may end up in log
/// lines: email addresses (accounts, profiles, job contacts) and phone
/// numbers (profile and job contact phones). All patterns are vetted
/// literals with a single allow per construction site.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    /// SAFETY: This regex pattern is a vetted literal that compiles successfully
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Phone pattern: matches NANP-style contact numbers as stored in
    /// profiles and job postings (e.g. "809-555-1234", "809 555 1234")
    /// SAFETY: This regex pattern is a vetted literal that compiles successfully
    pub fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b([0-9]{3})[-. ][0-9]{3}[-. ][0-9]{4}\b").unwrap()
        });
        &PHONE_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// This function conservatively masks:
/// - Emails: keeps first character of local part, replaces rest with ***, keeps full domain
/// - Phone numbers: keeps the area code, masks the subscriber digits
///
/// Order: emails first, then phones, to avoid double-processing.
pub fn redact(input: &str) -> String {
    // First redact emails
    let email_redacted = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        if let Some(at_pos) = full_match.find('@') {
            let local_part = &full_match[..at_pos];
            let domain = &full_match[at_pos..];

            if local_part.is_empty() {
                // Edge case: no local part, just return the domain
                domain.to_string()
            } else {
                // Keep first char, replace rest with ***, keep full domain
                let first_char = &local_part[..1];
                format!("{first_char}***{domain}")
            }
        } else {
            // Fallback: shouldn't happen with proper email regex
            full_match.to_string()
        }
    });

    // Then redact phone numbers, keeping only the area code
    PiiRegexRegistry::phone()
        .replace_all(&email_redacted, "$1-***-****")
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
///
/// This provides ergonomic logging of sensitive data by automatically
/// applying PII redaction when the value is formatted for display.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
