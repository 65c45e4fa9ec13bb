//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum account holder name length, counted after trimming
pub const MIN_NAME_LENGTH: usize = 3;

/// Number of digits a postal code must carry once punctuation is stripped
pub const ZIP_CODE_DIGITS: usize = 8;

/// Position of the hyphen in a formatted postal code
pub const ZIP_CODE_PREFIX_LENGTH: usize = 5;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Upper bound on configured JWT expiration (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;
