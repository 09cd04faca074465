use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a raw mapping from a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// A required source file does not exist.
    #[error("missing required source {}", .0.display())]
    Missing(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}
