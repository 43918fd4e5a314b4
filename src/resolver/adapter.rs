//! Adapter layer: Convert lookup DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If the lookup service renames a field, only this file and dto.rs change.

use super::domain::ResolvedMusic;
use super::dto;

/// Convert a lookup response into a resolved record.
///
/// Each field defaults independently. A missing or `null` field takes the
/// default; an explicit empty string is kept as-is, except for the cover,
/// which is never left empty.
pub fn to_resolved(response: dto::LookupResponse, default_cover: &str) -> ResolvedMusic {
    let track = response.into_first();

    ResolvedMusic {
        url: track.url.unwrap_or_default(),
        cover: track
            .pic
            .filter(|pic| !pic.is_empty())
            .unwrap_or_else(|| default_cover.to_string()),
        name: track.name.unwrap_or_default(),
        artist: track.artist.unwrap_or_default(),
    }
}
