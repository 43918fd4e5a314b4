//! Track Resolver - turns music share links into playable direct links.
//!
//! A reference is either a NetEase Cloud Music share link or a direct audio
//! URL. Share links are resolved through a lookup service into a direct link
//! plus cover, title and artist; direct links are passed through. Resolution
//! never fails: any problem yields a record with an empty `url` and the
//! default cover.
//!
//! ```ignore
//! let music = track_resolver::resolve("https://music.163.com/song?id=1901371647").await;
//! if music.is_playable() {
//!     println!("{} -> {}", music.summary(), music.url);
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
#[cfg(test)]
pub mod test_utils;

pub use classifier::{Platform, PlatformIdentifier, classify};
pub use resolver::{DEFAULT_COVER, MusicResolver, ResolvedMusic, lookup_track, resolve};
