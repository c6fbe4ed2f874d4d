//! Error codes for the Comunidad admin backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Comunidad admin backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid record id in a route path
    InvalidId,
    /// Invalid email address
    InvalidEmail,
    /// Invalid or missing HTTP header
    InvalidHeader,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// User not found
    UserNotFound,
    /// Job posting not found
    JobNotFound,
    /// User profile not found
    ProfileNotFound,
    /// Job application not found
    ApplicationNotFound,
    /// Professional area not found
    AreaNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Username already taken
    UniqueUsername,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidId => "INVALID_ID",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::JobNotFound => "JOB_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::ApplicationNotFound => "APPLICATION_NOT_FOUND",
            Self::AreaNotFound => "AREA_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::UniqueUsername => "UNIQUE_USERNAME",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        // Verify that all error codes produce the expected SCREAMING_SNAKE_CASE strings
        assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
        assert_eq!(ErrorCode::InvalidEmail.as_str(), "INVALID_EMAIL");
        assert_eq!(ErrorCode::InvalidHeader.as_str(), "INVALID_HEADER");
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::UserNotFound.as_str(), "USER_NOT_FOUND");
        assert_eq!(ErrorCode::JobNotFound.as_str(), "JOB_NOT_FOUND");
        assert_eq!(ErrorCode::ProfileNotFound.as_str(), "PROFILE_NOT_FOUND");
        assert_eq!(
            ErrorCode::ApplicationNotFound.as_str(),
            "APPLICATION_NOT_FOUND"
        );
        assert_eq!(ErrorCode::AreaNotFound.as_str(), "AREA_NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::UniqueUsername.as_str(), "UNIQUE_USERNAME");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::InvalidId), "INVALID_ID");
        assert_eq!(format!("{}", ErrorCode::JobNotFound), "JOB_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::UniqueUsername), "UNIQUE_USERNAME");
    }
}
