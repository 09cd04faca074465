//! TOML configuration files.
//!
//! Unlike env files, TOML keeps native scalar types and nested tables, so a
//! `[section]` binds onto a nested record field of the same name.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::{read_source, RawSource};
use super::LoadError;
use crate::RawMapping;

/// Reads a whole TOML document as one raw mapping.
///
/// A missing optional file yields an empty mapping, so every field of the
/// destination keeps its current value or its default.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
    required: bool,
}

impl TomlFileSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawSource for TomlFileSource {
    fn load(&self) -> Result<RawMapping, LoadError> {
        let contents = match read_source(&self.path, self.required)? {
            Some(contents) => contents,
            None => {
                debug!(path = %self.path.display(), "optional toml file not found");
                return Ok(RawMapping::new());
            }
        };

        let mapping: RawMapping = toml::from_str(&contents).map_err(|source| LoadError::Toml {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), entries = mapping.len(), "loaded toml file");
        Ok(mapping)
    }
}
