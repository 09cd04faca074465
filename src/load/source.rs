use std::path::Path;

use super::LoadError;
use crate::{Binder, Error, RawMapping, Record};

/// Something that produces a raw configuration mapping.
pub trait RawSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<RawMapping, LoadError>;

    /// Loads the mapping and binds it onto `destination`.
    fn load_into<R: Record>(&self, destination: &mut R) -> Result<(), Error>
    where
        Self: Sized,
    {
        let data = self.load()?;
        Binder::for_record(destination).bind(&data)?;
        Ok(())
    }
}

/// Reads a file into a string.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(crate) fn read_source(path: &Path, required: bool) -> Result<Option<String>, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(LoadError::Missing(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
