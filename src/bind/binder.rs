use std::any::type_name;

use toml::Value;
use tracing::trace;

use super::coerce::{assign_str, assign_value};
use super::directive::Directive;
use super::record::{Bindable, Record, Slot};
use super::BindError;
use crate::RawMapping;

/// What the caller hands to the binder.
///
/// Only a mutable borrow of a record can be bound. Any `&mut T` converts
/// into a destination; [`Destination::owned`] describes a value that was
/// passed by value and is rejected.
#[derive(Debug)]
pub enum Destination<'a> {
    Owned(&'static str),
    Borrowed(Slot<'a>),
}

impl Destination<'_> {
    pub fn owned<T: Bindable>(_value: T) -> Self {
        Destination::Owned(type_name::<T>())
    }
}

impl<'a, T: Bindable + ?Sized> From<&'a mut T> for Destination<'a> {
    fn from(value: &'a mut T) -> Self {
        Destination::Borrowed(value.slot())
    }
}

/// Binds a raw mapping onto a record, field by field.
///
/// ```
/// use envbind::{record, Binder, RawMapping};
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Server {
///         #[bind("host,default=localhost")]
///         pub host: String,
///         pub port: u16,
///     }
/// }
///
/// let mut data = RawMapping::new();
/// data.insert("port".into(), "8080".into());
///
/// let mut server = Server::default();
/// Binder::new(&mut server)?.bind(&data)?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// # Ok::<(), envbind::BindError>(())
/// ```
#[derive(Debug)]
#[must_use = "a binder does nothing until .bind() is called"]
pub struct Binder<'a> {
    record: &'a mut dyn Record,
}

impl<'a> Binder<'a> {
    /// Checks the destination before any field is touched.
    pub fn new(destination: impl Into<Destination<'a>>) -> Result<Self, BindError> {
        match destination.into() {
            Destination::Owned(name) => Err(BindError::NotAReference(name)),
            Destination::Borrowed(Slot::Record(record)) => Ok(Self { record }),
            Destination::Borrowed(slot) => Err(BindError::NotARecord(slot.type_name())),
        }
    }

    /// A binder for a value statically known to be a record.
    pub fn for_record(record: &'a mut dyn Record) -> Self {
        Self { record }
    }

    /// Binds `data` in field declaration order, stopping at the first error.
    ///
    /// Fields written before the failure keep their new values.
    pub fn bind(self, data: &RawMapping) -> Result<(), BindError> {
        bind_record(data, self.record)
    }
}

/// Binds `data` onto `destination`.
///
/// Shorthand for `Binder::new(destination)?.bind(data)`.
pub fn bind<'a>(
    data: &RawMapping,
    destination: impl Into<Destination<'a>>,
) -> Result<(), BindError> {
    Binder::new(destination)?.bind(data)
}

fn bind_record(data: &RawMapping, record: &mut dyn Record) -> Result<(), BindError> {
    for field in record.fields() {
        let Some(slot) = field.slot else {
            trace!(field = field.name, "skipping field that cannot be set");
            continue;
        };

        let directive = Directive::parse(field.tag);
        let key = directive.key(field.name);

        // Nested records bind only from a non-empty table at their key.
        // Dotted keys such as `server.port` are not expanded.
        let slot = match slot {
            Slot::Record(nested) => {
                match data.get(key) {
                    Some(Value::Table(table)) if !table.is_empty() => bind_record(table, nested)?,
                    _ => trace!(field = field.name, key, "no nested table for record field"),
                }
                continue;
            }
            slot => slot,
        };

        match data.get(key) {
            Some(value) => assign_value(slot, value)?,
            None => {
                if let Some(default) = directive.default {
                    assign_str(slot, default)?;
                }
                // Checked after the default is written, so a required field
                // still reports missing even though it now holds its default.
                if directive.required {
                    return Err(BindError::RequiredFieldMissing(key.to_string()));
                }
            }
        }
    }

    Ok(())
}
