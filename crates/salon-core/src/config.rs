//! Centralized configuration for the Autosalon backend.
//!
//! Fixed limits for sanitization, validation, pagination and the HTTP
//! surface, plus the mail defaults the contact handler falls back to.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Autosalon Volketswil";
    pub const SITE_DOMAIN: &'static str = "autosalonvolketswil.ch";
}

/// Sanitization limits.
pub struct SanitizeConfig;

impl SanitizeConfig {
    /// Maximum characters kept from a free-text field of an ingested record.
    pub const MAX_TEXT_LENGTH: usize = 1000;
    /// Maximum characters accepted in a textual search field.
    pub const MAX_QUERY_LENGTH: usize = 100;
}

/// Domain ranges for numeric search bounds.
pub struct ValidationConfig;

impl ValidationConfig {
    pub const PRICE_RANGE: (i64, i64) = (0, 10_000_000);
    pub const MILEAGE_RANGE: (i64, i64) = (0, 2_000_000);
    pub const POWER_RANGE: (i64, i64) = (0, 2_000);
}

/// Pagination defaults and bounds.
pub struct SearchConfig;

impl SearchConfig {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const DEFAULT_OFFSET: i64 = 0;
    pub const MAX_LIMIT: i64 = 100;
    pub const MAX_OFFSET: i64 = 10_000;
}

/// HTTP surface limits.
pub struct ServerConfig;

impl ServerConfig {
    /// Request bodies above this many bytes are rejected before parsing.
    pub const MAX_BODY_BYTES: usize = 10_000;
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
}

/// Transactional email defaults.
pub struct MailConfig;

impl MailConfig {
    pub const DEFAULT_RECIPIENT: &'static str = "info@dennisdiepolder.com";
    pub const DEFAULT_SENDER: &'static str = "info@dennisdiepolder.com";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    pub const TIMESTAMP_FORMAT: &'static str = "%d.%m.%Y %H:%M:%S";
}
