//! Error types for Icicle controls.
//!
//! Layout itself is total and never fails; errors only come from loading
//! and validating configuration.

use std::io;
use std::path::Path;

/// Errors produced while configuring Icicle controls.
#[derive(Debug, thiserror::Error)]
pub enum IcicleError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl IcicleError {
    /// Prefix a `Config` message with the file it came from. Other variants
    /// are returned unchanged so callers can still match on them.
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Self::Config(msg) => Self::Config(format!("{}: {msg}", path.display())),
            other => other,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, IcicleError>;
