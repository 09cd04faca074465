//! Binding raw mappings onto typed records.
//!
//! Each record field is looked up by its declared name or the key override
//! from its annotation, coerced into the field's type, and written in place.
//! Nested records are bound recursively from nested tables.

mod binder;
mod coerce;
mod directive;
mod error;
mod macros;
mod record;

pub use binder::{bind, Binder, Destination};
pub use directive::Directive;
pub use error::BindError;
pub use record::{Bindable, Field, FieldKind, FloatTarget, IntTarget, Record, Slot};
