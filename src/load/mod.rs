//! Loading raw configuration mappings from files.

mod env_file;
mod error;
mod source;
mod toml_file;

use std::path::Path;

use crate::{Error, RawMapping, Record};

pub use env_file::{parse_line, EnvFileSource, DEFAULT_ENV_FILE};
pub use error::LoadError;
pub use source::RawSource;
pub use toml_file::TomlFileSource;

/// Loads a required env file into a raw mapping of string values.
///
/// An empty path loads [`DEFAULT_ENV_FILE`].
pub fn load_file(path: impl AsRef<Path>) -> Result<RawMapping, Error> {
    Ok(EnvFileSource::new(path, true).load()?)
}

/// Loads a required env file and binds it onto `destination`.
///
/// On error `destination` may be partially written and should be discarded.
pub fn load_into<R: Record>(path: impl AsRef<Path>, destination: &mut R) -> Result<(), Error> {
    EnvFileSource::new(path, true).load_into(destination)
}
