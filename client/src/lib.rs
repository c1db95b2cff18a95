//! Async HTTP clients for the terascope team analysis services.
//!
//! Three collaborators live behind this crate:
//!
//! - the analysis backend, which grades a team export ([`AnalyzerClient::analyze`])
//! - paste-hosting sites, from which team text is fetched and extracted
//!   ([`fetch_team`])
//! - the usage-statistics feed ([`AnalyzerClient::usage_stats`])
//!
//! Team text itself is handled by `terascope-notation`; everything here is
//! transport and extraction.

mod analysis;
mod error;
mod paste;
mod usage;

pub use analysis::{AnalysisPoint, Suggestion, TeamAnalysis};
pub use error::ClientError;
pub use paste::{clean_team_text, extract_team_text, fetch_team, is_allowed_url};
pub use usage::UsageEntry;

/// Default analysis backend address for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the team analysis backend.
pub struct AnalyzerClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl AnalyzerClient {
    /// Create a client against the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AnalyzerClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
