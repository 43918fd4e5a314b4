//! Resolver service - turns music references into playable records
//!
//! This is the high-level API:
//! 1. Classify the reference (share link or direct link)
//! 2. Share link: look up the song id on the lookup service
//! 3. Direct link: pass it through with the default cover
//!
//! Every failure is logged and degraded to the unresolved record. Callers
//! always get a well-formed [`ResolvedMusic`] back.

use futures::future::join_all;

use crate::classifier::classify;
use crate::config::LookupConfig;
use crate::resolver::{
    client::LookupClient,
    domain::{LookupError, ResolvedMusic},
    traits::TrackLookup,
};

/// Service for resolving music references
pub struct MusicResolver<L = LookupClient> {
    lookup: L,
}

impl MusicResolver<LookupClient> {
    /// Create a resolver backed by the HTTP lookup client
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self::with_lookup(LookupClient::new(config)?))
    }
}

impl<L: TrackLookup> MusicResolver<L> {
    /// Create a resolver backed by any lookup implementation
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve a reference into a playable record.
    ///
    /// Never fails: lookup errors produce the unresolved record.
    pub async fn resolve(&self, reference: &str) -> ResolvedMusic {
        match classify(reference) {
            Some(id) => {
                tracing::info!("Found {} song id: {}", id.platform(), id);
                self.lookup_track(id.as_str()).await
            }
            None => {
                tracing::info!("Using direct link: {}", reference);
                ResolvedMusic::direct(reference, self.lookup.default_cover())
            }
        }
    }

    /// Look up a song id directly, skipping classification.
    ///
    /// An empty id is answered with the unresolved record without any
    /// network traffic.
    pub async fn lookup_track(&self, id: &str) -> ResolvedMusic {
        if id.is_empty() {
            tracing::debug!("Empty song id, skipping lookup");
            return self.unresolved();
        }

        match self.lookup.lookup(id).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!("Failed to look up song {}: {}", id, e);
                self.unresolved()
            }
        }
    }

    /// Resolve several references concurrently, keeping input order
    pub async fn resolve_all<S: AsRef<str>>(&self, references: &[S]) -> Vec<ResolvedMusic> {
        join_all(references.iter().map(|r| self.resolve(r.as_ref()))).await
    }

    fn unresolved(&self) -> ResolvedMusic {
        ResolvedMusic::unresolved(self.lookup.default_cover())
    }
}

/// Convenience function to resolve a reference with default settings
pub async fn resolve(reference: &str) -> ResolvedMusic {
    let config = LookupConfig::default();
    match MusicResolver::new(&config) {
        Ok(resolver) => resolver.resolve(reference).await,
        Err(e) => {
            tracing::warn!("Lookup client unavailable: {}", e);
            match classify(reference) {
                Some(_) => ResolvedMusic::unresolved(&config.default_cover),
                None => ResolvedMusic::direct(reference, &config.default_cover),
            }
        }
    }
}

/// Convenience function to look up a song id with default settings
pub async fn lookup_track(id: &str) -> ResolvedMusic {
    let config = LookupConfig::default();
    match MusicResolver::new(&config) {
        Ok(resolver) => resolver.lookup_track(id).await,
        Err(e) => {
            tracing::warn!("Lookup client unavailable: {}", e);
            ResolvedMusic::unresolved(&config.default_cover)
        }
    }
}
