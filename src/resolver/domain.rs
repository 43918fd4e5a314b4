//! Internal domain models for music resolution.
//!
//! These types are OUR types - they don't change when the lookup service
//! changes its response shape. Service responses get converted into these
//! types via the adapter.

use serde::Serialize;

/// Cover image used whenever the lookup has no cover to offer
pub const DEFAULT_COVER: &str =
    "https://wework.qpic.cn/wwpic3az/503309_zafbLebUS7KK741_1764389837/0";

/// A music reference resolved into a playable link plus display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMusic {
    /// Playable direct link (empty when unresolved)
    pub url: String,
    /// Cover image URL (never empty)
    pub cover: String,
    /// Track title (empty when unknown)
    pub name: String,
    /// Artist name (empty when unknown)
    pub artist: String,
}

impl ResolvedMusic {
    /// The record returned when resolution fails for any reason
    pub fn unresolved(default_cover: &str) -> Self {
        Self {
            url: String::new(),
            cover: default_cover.to_string(),
            name: String::new(),
            artist: String::new(),
        }
    }

    /// A direct link passed through untouched
    pub fn direct(url: impl Into<String>, default_cover: &str) -> Self {
        Self {
            url: url.into(),
            ..Self::unresolved(default_cover)
        }
    }

    /// Whether a playable link is available
    pub fn is_playable(&self) -> bool {
        !self.url.is_empty()
    }

    /// One-line description for display
    pub fn summary(&self) -> String {
        let title = if self.name.is_empty() { "Unknown title" } else { self.name.as_str() };
        let artist = if self.artist.is_empty() { "Unknown artist" } else { self.artist.as_str() };
        format!("{} - {}", artist, title)
    }
}

impl Default for ResolvedMusic {
    fn default() -> Self {
        Self::unresolved(DEFAULT_COVER)
    }
}

/// Errors that can occur while looking up a track.
///
/// These never leave the resolver: they are logged and turned into
/// [`ResolvedMusic::unresolved`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Empty track identifier")]
    EmptyIdentifier,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
