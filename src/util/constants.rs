// VCScout - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "VCScout";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "VCScout";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Licence identifier from the package manifest.
pub const APP_LICENSE: &str = env!("CARGO_PKG_LICENSE");

/// Copyright holder shown in the About dialog.
pub const COPYRIGHT_HOLDER: &str = "VCScout contributors";

/// First year of the copyright notice.
pub const COPYRIGHT_YEAR: u16 = 2026;

// =============================================================================
// Backend
// =============================================================================

/// Environment variable holding the backend base URL.
pub const API_URL_ENV_VAR: &str = "VCSCOUT_API_URL";

/// Path of the chat endpoint, relative to the base URL.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Path of the remote profile-search endpoint, relative to the base URL.
pub const QA_ENDPOINT: &str = "/api/qa";

/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Default timeout for a single outbound HTTP call.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable HTTP timeout.
pub const MIN_HTTP_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable HTTP timeout.
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// Corpus limits
// =============================================================================

/// Maximum size of a user corpus file in bytes.
pub const MAX_CORPUS_FILE_SIZE: u64 = 8 * 1024 * 1024; // 8 MB

/// Maximum number of firm profiles held in the corpus (built-in + user).
pub const MAX_CORPUS_RECORDS: usize = 10_000;

// =============================================================================
// Chat
// =============================================================================

/// First bot turn shown in every new conversation.
pub const CHAT_GREETING: &str =
    "Hi! I'm your AI assistant for finding VCs and investors. How can I help you today?";

/// Bot turn substituted when the chat call fails.
pub const CHAT_APOLOGY: &str = "Sorry, I couldn't get a response from the server.";

/// Maximum number of chat/search/health messages processed per UI frame.
pub const MAX_MESSAGES_PER_FRAME: usize = 64;

/// Repaint cadence while a request is outstanding (ms).
pub const IN_FLIGHT_REPAINT_MS: u64 = 100;

// =============================================================================
// Presentation
// =============================================================================

/// Characters of a firm description shown on a result card before "Read more".
pub const CARD_DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Industries offered as one-click chips above the search box.
pub const POPULAR_INDUSTRIES: &[&str] = &[
    "Fintech",
    "Healthcare",
    "Automotive",
    "Fashion",
    "EdTech",
    "SaaS",
    "E-commerce",
    "AI/ML",
    "Blockchain",
    "CleanTech",
];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of user or bot text included in debug output.
pub const DEBUG_MAX_TEXT_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
