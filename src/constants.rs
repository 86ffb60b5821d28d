//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Origins allowed to make credentialed requests when none are configured
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,http://localhost:3000";

/// Maximum accepted request body size (blog content is markdown text)
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Session token lifetime in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 2;

/// Name of the cookie carrying the session token
pub const AUTH_COOKIE_NAME: &str = "authToken";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Maximum first/last name length
pub const MAX_NAME_LENGTH: u64 = 100;

// =============================================================================
// CONTENT LIMITS
// =============================================================================

/// Maximum blog title length
pub const MAX_BLOG_TITLE_LENGTH: u64 = 200;

/// Maximum blog synopsis length
pub const MAX_BLOG_SYNOPSIS_LENGTH: u64 = 1000;

/// Maximum blog content length
pub const MAX_BLOG_CONTENT_LENGTH: u64 = 200_000;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 64;

/// Maximum moderation reason length
pub const MAX_DISABLE_REASON_LENGTH: u64 = 500;

/// Maximum comment length
pub const MAX_COMMENT_LENGTH: u64 = 5000;

// =============================================================================
// ENVIRONMENTS
// =============================================================================

/// Deployment environment names
pub mod environments {
    pub const DEVELOPMENT: &str = "development";
    pub const PRODUCTION: &str = "production";
    pub const TEST: &str = "test";
}
