// src/error.rs
// =============================================================================
// Error types for link following.
//
// Only failures that must stop the whole run live here. Things like a broken
// link or a URL are normal outcomes and are reported as a `SkipReason` by the
// classifier instead (see follow/classify.rs).
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a traversal.
#[derive(Debug, Error)]
pub enum FollowError {
    #[error("failed to inspect {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Errors raised while building the alias configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl FollowError {
    // Wraps a stat / read_dir failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FollowError::Io {
            path: path.into(),
            source,
        }
    }
}
