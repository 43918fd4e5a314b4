//! Trait definitions for the lookup service.
//!
//! The trait lets the resolver run against the real HTTP client in
//! production and against canned responses in tests.
//!
//! # Example
//!
//! ```ignore
//! use track_resolver::resolver::{MusicResolver, TrackLookup};
//!
//! struct FixedLookup;
//!
//! #[async_trait]
//! impl TrackLookup for FixedLookup { ... }
//!
//! let resolver = MusicResolver::with_lookup(FixedLookup);
//! ```

use async_trait::async_trait;

use super::domain::{LookupError, ResolvedMusic};

/// Trait for song id lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait TrackLookup: Send + Sync {
    /// Look up a song id and return its resolved record.
    async fn lookup(&self, id: &str) -> Result<ResolvedMusic, LookupError>;

    /// Cover to use when resolution fails.
    fn default_cover(&self) -> &str;
}

#[async_trait]
impl TrackLookup for super::client::LookupClient {
    async fn lookup(&self, id: &str) -> Result<ResolvedMusic, LookupError> {
        self.lookup(id).await
    }

    fn default_cover(&self) -> &str {
        self.default_cover()
    }
}
