//! Lookup service Data Transfer Objects
//!
//! The lookup service (`?type=song&id=<id>`) answers with a JSON array of
//! track objects. Every field is optional at this boundary: the service is
//! untrusted, and a missing or `null` field must fall back to a default
//! rather than fail the whole lookup.
//!
//! Example response:
//!
//! ```json
//! [{
//!     "id": 1901371647,
//!     "name": "Song",
//!     "artist": "Artist",
//!     "url": "https://m701.music.126.net/.../song.mp3",
//!     "pic": "https://p1.music.126.net/.../cover.jpg",
//!     "lrc": "..."
//! }]
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level lookup response.
///
/// Only an array carries track data. Any other JSON value (object, string,
/// number, ...) is accepted but treated as an empty placeholder. Elements
/// stay raw until [`LookupResponse::into_first`], so a malformed second
/// element can't spoil the first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Tracks(Vec<Value>),
    Other(serde::de::IgnoredAny),
}

impl LookupResponse {
    /// The first track of the response, or an empty placeholder
    pub fn into_first(self) -> TrackInfo {
        match self {
            LookupResponse::Tracks(tracks) => match tracks.into_iter().next() {
                Some(first) => serde_json::from_value(first).unwrap_or_else(|e| {
                    tracing::debug!("Ignoring non-object track entry: {}", e);
                    TrackInfo::default()
                }),
                None => TrackInfo::default(),
            },
            LookupResponse::Other(_) => TrackInfo::default(),
        }
    }
}

/// A single track as the lookup service describes it.
///
/// Fields decode independently: a value of the wrong type is dropped on its
/// own instead of failing the whole track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackInfo {
    /// Direct playable URL
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// Cover image URL
    #[serde(default, deserialize_with = "lenient_string")]
    pub pic: Option<String>,
    /// Track title
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Artist name(s), already joined by the service
    #[serde(default, deserialize_with = "lenient_string")]
    pub artist: Option<String>,
}

/// Accept strings, treat `null` and any other JSON type as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            tracing::debug!("Ignoring non-string track field: {}", other);
            None
        }
    })
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_track_array() {
        let json = r#"[{
            "id": 1901371647,
            "name": "Song",
            "artist": "Artist",
            "url": "https://example.com/song.mp3",
            "pic": "https://example.com/cover.jpg",
            "lrc": "[00:00.00] lyrics"
        }]"#;

        let response: LookupResponse =
            serde_json::from_str(json).expect("Should parse track array");
        let track = response.into_first();

        assert_eq!(track.url.as_deref(), Some("https://example.com/song.mp3"));
        assert_eq!(track.pic.as_deref(), Some("https://example.com/cover.jpg"));
        assert_eq!(track.name.as_deref(), Some("Song"));
        assert_eq!(track.artist.as_deref(), Some("Artist"));
    }

    #[test]
    fn test_parse_empty_array() {
        let response: LookupResponse = serde_json::from_str("[]").expect("Should parse []");
        let track = response.into_first();
        assert!(track.url.is_none());
        assert!(track.pic.is_none());
    }

    #[test]
    fn test_object_is_placeholder() {
        let json = r#"{"url": "https://example.com/song.mp3", "pic": "p"}"#;
        let response: LookupResponse = serde_json::from_str(json).expect("Should parse object");
        assert!(matches!(response, LookupResponse::Other(_)));
        assert!(response.into_first().url.is_none());
    }

    #[test]
    fn test_null_fields_are_none() {
        let json = r#"[{"url": null, "pic": null, "name": "Song"}]"#;
        let track = serde_json::from_str::<LookupResponse>(json).unwrap().into_first();
        assert!(track.url.is_none());
        assert!(track.pic.is_none());
        assert_eq!(track.name.as_deref(), Some("Song"));
        assert!(track.artist.is_none());
    }

    #[test]
    fn test_only_first_track_is_used() {
        let json = r#"[{"name": "First"}, {"name": "Second"}]"#;
        let track = serde_json::from_str::<LookupResponse>(json).unwrap().into_first();
        assert_eq!(track.name.as_deref(), Some("First"));
    }

    #[test]
    fn test_wrong_field_type_only_drops_that_field() {
        let json = r#"[{"url": "U", "pic": "P", "name": 42, "artist": ["A", "B"]}]"#;
        let track = serde_json::from_str::<LookupResponse>(json).unwrap().into_first();
        assert_eq!(track.url.as_deref(), Some("U"));
        assert_eq!(track.pic.as_deref(), Some("P"));
        assert!(track.name.is_none());
        assert!(track.artist.is_none());
    }

    #[test]
    fn test_bad_later_element_keeps_first() {
        let json = r#"[{"url": "U"}, 7]"#;
        let track = serde_json::from_str::<LookupResponse>(json).unwrap().into_first();
        assert_eq!(track.url.as_deref(), Some("U"));
    }

    #[test]
    fn test_non_object_first_element_is_placeholder() {
        let track = serde_json::from_str::<LookupResponse>("[1]").unwrap().into_first();
        assert!(track.url.is_none());
    }

    #[test]
    fn test_malformed_body_fails() {
        assert!(serde_json::from_str::<LookupResponse>("<html>oops</html>").is_err());
        assert!(serde_json::from_str::<LookupResponse>("").is_err());
    }
}
