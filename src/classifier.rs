//! Link classification - extracts platform track identifiers from share links.
//!
//! A reference is either a share link from a supported streaming platform or
//! anything else. Anything else is treated by the resolver as a direct link,
//! so a miss here is a normal outcome, not an error.
//!
//! # Supported platforms
//!
//! | Platform          | Marker          | Identifier            |
//! |-------------------|-----------------|-----------------------|
//! | NetEase Cloud Music | `music.163.com` | first digit run after the marker |
//!
//! The marker match is case-insensitive. Any non-digit characters may sit
//! between the marker and the digits, which covers the usual share link
//! shapes (`/song?id=`, `/#/song?id=`, `/m/song/`, ...).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// NetEase share links: domain marker, optional non-digit filler, digit run.
///
/// The marker is matched ASCII case-insensitively so that Unicode case
/// folding (e.g. `ſ` for `s`) does not widen it.
static NETEASE_SONG_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u:music\.163\.com)[^0-9]*([0-9]+)").unwrap());

/// Streaming platforms whose share links can be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// NetEase Cloud Music (music.163.com)
    Netease,
}

impl Platform {
    /// Human readable platform name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Netease => "NetEase Cloud Music",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Platform::Netease => &NETEASE_SONG_ID,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A track identifier extracted from a share link
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformIdentifier {
    platform: Platform,
    id: String,
}

impl PlatformIdentifier {
    /// Wrap an identifier that was obtained some other way (e.g. stored ids)
    pub fn new(platform: Platform, id: impl Into<String>) -> Self {
        Self {
            platform,
            id: id.into(),
        }
    }

    /// The platform this identifier belongs to
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for PlatformIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Extract a platform identifier from a music reference.
///
/// Returns `None` when no supported platform marker is present, or when the
/// marker is not followed by any digits.
pub fn classify(reference: &str) -> Option<PlatformIdentifier> {
    [Platform::Netease].into_iter().find_map(|platform| {
        platform
            .pattern()
            .captures(reference)
            .and_then(|caps| caps.get(1))
            .map(|id| PlatformIdentifier::new(platform, id.as_str()))
    })
}
