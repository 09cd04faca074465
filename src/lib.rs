pub mod bind;
pub mod load;
mod error;

pub use bind::{bind, BindError, Bindable, Binder, Destination, Field, FieldKind, Record, Slot};
pub use error::Error;
pub use load::{
    load_file, load_into, parse_line, EnvFileSource, LoadError, RawSource, TomlFileSource,
    DEFAULT_ENV_FILE,
};

/// Key/value pairs produced by a loader, as consumed by the binder.
pub type RawMapping = toml::Table;
