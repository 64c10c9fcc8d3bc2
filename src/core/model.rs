// VCScout - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Firm profile
// =============================================================================

/// One venture-capital firm, as listed in the corpus.
///
/// Records are created once when the corpus is loaded and never mutated.
/// Field names follow the camelCase JSON used by the corpus files and the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmProfile {
    /// Unique within the corpus for the lifetime of the process.
    pub id: String,

    /// Display name; never empty after validation.
    pub firm_name: String,

    /// Single primary industry tag.
    pub industry_focus: String,

    /// Secondary tags. Order is kept for display only.
    #[serde(default)]
    pub sectors: Vec<String>,

    pub contact_person: ContactPerson,

    /// Contact address; never empty after validation.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub description: String,
}

/// Key contact at a firm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub name: String,
    pub designation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

// =============================================================================
// Chat
// =============================================================================

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Assistant",
        }
    }
}

/// One entry of the append-only chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    /// Monotonically increasing within one conversation, starting at 1.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Backend health
// =============================================================================

/// Body of the backend's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub qa_count: usize,
    #[serde(default)]
    pub vc_count: usize,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
