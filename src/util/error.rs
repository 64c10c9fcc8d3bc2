// VCScout - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all VCScout operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum VcScoutError {
    /// User input was rejected before any work started.
    Query(QueryError),

    /// Corpus loading or validation failed.
    Corpus(CorpusError),

    /// Profile search failed.
    Search(SearchError),

    /// Chat call failed.
    Chat(ChatError),

    /// Backend health check failed.
    Health(HealthError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for VcScoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(e) => write!(f, "Input error: {e}"),
            Self::Corpus(e) => write!(f, "Corpus error: {e}"),
            Self::Search(e) => write!(f, "Search error: {e}"),
            Self::Chat(e) => write!(f, "Chat error: {e}"),
            Self::Health(e) => write!(f, "Health check error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for VcScoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Query(e) => Some(e),
            Self::Corpus(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Chat(e) => Some(e),
            Self::Health(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// Input rejected at the session boundary.
///
/// The presentation layer disables the triggering controls in both cases, so
/// seeing one of these at runtime means a caller skipped that check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Input was empty or whitespace-only.
    Empty { field: &'static str },

    /// A request of this kind is already outstanding.
    InFlight { field: &'static str },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InFlight { field } => {
                write!(f, "a {field} request is already in progress")
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl From<QueryError> for VcScoutError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

// ---------------------------------------------------------------------------
// Corpus errors
// ---------------------------------------------------------------------------

/// Errors related to loading and validating firm-profile records.
#[derive(Debug)]
pub enum CorpusError {
    /// JSON document could not be parsed.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Corpus file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A single JSON Lines record could not be parsed (non-fatal; line skipped).
    LineParse {
        path: PathBuf,
        line_number: usize,
        source: serde_json::Error,
    },

    /// A required field is empty.
    MissingField {
        record_id: String,
        field: &'static str,
    },

    /// Two records in the same source share an id.
    DuplicateId { id: String, path: PathBuf },

    /// Maximum number of records exceeded.
    TooManyRecords { count: usize, max: usize },

    /// I/O error reading a corpus file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse JSON '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Corpus '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::LineParse {
                path,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: not a valid firm record: {source}",
                path.display()
            ),
            Self::MissingField { record_id, field } => {
                write!(f, "Record '{record_id}': missing required field '{field}'")
            }
            Self::DuplicateId { id, path } => {
                write!(f, "Duplicate record id '{id}' in '{}'", path.display())
            }
            Self::TooManyRecords { count, max } => {
                write!(f, "Too many records loaded ({count}), maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading corpus '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonParse { source, .. } => Some(source),
            Self::LineParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CorpusError> for VcScoutError {
    fn from(e: CorpusError) -> Self {
        Self::Corpus(e)
    }
}

// ---------------------------------------------------------------------------
// Search errors
// ---------------------------------------------------------------------------

/// Errors from a network-backed profile search.
///
/// The in-memory search never produces these.
#[derive(Debug)]
pub enum SearchError {
    /// The request could not be sent or no response arrived.
    Request { url: String, source: reqwest::Error },

    /// The backend answered with a non-success status.
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    Decode { url: String, source: reqwest::Error },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { url, source } => write!(f, "Request to '{url}' failed: {source}"),
            Self::Status { url, status } => write!(f, "'{url}' returned HTTP {status}"),
            Self::Decode { url, source } => {
                write!(f, "Unreadable response from '{url}': {source}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<SearchError> for VcScoutError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Chat errors
// ---------------------------------------------------------------------------

/// Transport-level failure of a single chat call.
///
/// Never retried; the session converts it into the fixed apology turn.
#[derive(Debug)]
pub enum ChatError {
    /// The request could not be sent or no response arrived.
    Request { url: String, source: reqwest::Error },

    /// The backend answered with a non-success status.
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not `{ "text": string }`.
    Decode { url: String, source: reqwest::Error },
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { url, source } => write!(f, "Request to '{url}' failed: {source}"),
            Self::Status { url, status } => write!(f, "'{url}' returned HTTP {status}"),
            Self::Decode { url, source } => {
                write!(f, "Unreadable response from '{url}': {source}")
            }
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<ChatError> for VcScoutError {
    fn from(e: ChatError) -> Self {
        Self::Chat(e)
    }
}

// ---------------------------------------------------------------------------
// Health errors
// ---------------------------------------------------------------------------

/// Failure of the startup health check. Informational only.
#[derive(Debug)]
pub enum HealthError {
    /// The request could not be sent or no response arrived.
    Request { url: String, source: reqwest::Error },

    /// The backend answered with a non-success status.
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected health JSON.
    Decode { url: String, source: reqwest::Error },

    /// The check thread ended without reporting.
    NoReport,
}

impl fmt::Display for HealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { url, source } => write!(f, "Request to '{url}' failed: {source}"),
            Self::Status { url, status } => write!(f, "'{url}' returned HTTP {status}"),
            Self::Decode { url, source } => {
                write!(f, "Unreadable health response from '{url}': {source}")
            }
            Self::NoReport => write!(f, "Health check ended without a result"),
        }
    }
}

impl std::error::Error for HealthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } | Self::NoReport => None,
        }
    }
}

impl From<HealthError> for VcScoutError {
    fn from(e: HealthError) -> Self {
        Self::Health(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// No backend base URL was supplied by any source.
    MissingBaseUrl,

    /// The backend base URL could not be parsed.
    InvalidBaseUrl {
        value: String,
        reason: String,
    },

    /// The HTTP client could not be constructed.
    HttpClient { source: reqwest::Error },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::MissingBaseUrl => write!(
                f,
                "No backend URL configured. Set {} or pass --api-url, \
                 or add [backend] base_url to {}.",
                super::constants::API_URL_ENV_VAR,
                super::constants::CONFIG_FILE_NAME,
            ),
            Self::InvalidBaseUrl { value, reason } => {
                write!(f, "Backend URL '{value}' is invalid: {reason}")
            }
            Self::HttpClient { source } => {
                write!(f, "Could not initialise HTTP client: {source}")
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::HttpClient { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for VcScoutError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for VCScout results.
pub type Result<T> = std::result::Result<T, VcScoutError>;
