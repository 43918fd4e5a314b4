//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! binary uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`LookupError`], [`ConfigError`]) for detailed handling
//! - Resolution itself never returns these; it degrades to default records
//!
//! # Example
//!
//! ```ignore
//! use track_resolver::error::{Result, ResultExt};
//!
//! fn build() -> Result<MusicResolver> {
//!     let resolver = MusicResolver::new(&config.lookup)?; // LookupError auto-converts
//!     Ok(resolver)
//! }
//! ```

use crate::config::ConfigError;
use crate::resolver::LookupError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lookup client setup error
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line or config value
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid setting error.
    pub fn invalid_setting(message: impl Into<String>) -> Self {
        Self::InvalidSetting(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, LookupError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Lookup(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
