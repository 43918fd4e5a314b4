//! Music resolution - turns share links and direct links into playable records.
//!
//! # Architecture
//!
//! Same split as every external-service integration in this crate:
//! - **Domain models** (`domain.rs`) - Our types, independent of the service
//! - **DTOs** (`dto.rs`) - Exact lookup response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the lookup service
//! - **Traits** (`traits.rs`) - Lookup seam for mocking
//! - **Service** (`service.rs`) - Classification + lookup + fail-soft defaults
//!
//! # Usage
//!
//! ```ignore
//! use track_resolver::resolver::{MusicResolver, resolve};
//!
//! // One-off with default settings
//! let music = resolve("https://music.163.com/song?id=1901371647").await;
//! println!("{} ({})", music.summary(), music.url);
//!
//! // Reusable, with custom settings
//! let resolver = MusicResolver::new(&config.lookup)?;
//! let music = resolver.resolve("https://example.com/song.mp3").await;
//! ```

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod traits;

pub use client::LookupClient;
pub use domain::{DEFAULT_COVER, LookupError, ResolvedMusic};
pub use service::{MusicResolver, lookup_track, resolve};
pub use traits::TrackLookup;
