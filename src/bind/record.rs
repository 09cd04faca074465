//! Field introspection for bindable records.
//!
//! A record exposes its fields through [`Record::fields`], each as a
//! [`Field`] holding the declared name, the annotation string and a typed
//! [`Slot`] that borrows the field mutably. Scalar types map themselves to a
//! slot through [`Bindable`].

use std::any::type_name;
use std::num::TryFromIntError;

/// The closed set of field kinds the binder distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    Float,
    Record,
    Unsupported,
}

/// A structured value whose fields can be bound from a raw mapping.
///
/// Usually generated by [`record!`](crate::record). A manual implementation
/// lists every field in declaration order:
///
/// ```
/// use envbind::{Bindable, Field, Record, Slot};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     secret: String,
/// }
///
/// impl Record for Server {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", "", &mut self.host),
///             Field::new("port", ",default=8080", &mut self.port),
///             Field::readonly("secret", ""),
///         ]
///     }
/// }
///
/// impl Bindable for Server {
///     fn slot(&mut self) -> Slot<'_> {
///         Slot::Record(self)
///     }
/// }
/// ```
pub trait Record {
    fn fields(&mut self) -> Vec<Field<'_>>;

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// A value that can be the target of a binding.
pub trait Bindable {
    fn slot(&mut self) -> Slot<'_>;
}

/// Mutable, typed handle to a single bindable value.
pub enum Slot<'a> {
    Text(&'a mut String),
    Int(&'a mut dyn IntTarget),
    Bool(&'a mut bool),
    Float(&'a mut dyn FloatTarget),
    Record(&'a mut dyn Record),
    /// A type the binder has no coercion for; carries its type name.
    Unsupported(&'static str),
}

impl Slot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Text(_) => FieldKind::Text,
            Slot::Int(_) => FieldKind::Integer,
            Slot::Bool(_) => FieldKind::Boolean,
            Slot::Float(_) => FieldKind::Float,
            Slot::Record(_) => FieldKind::Record,
            Slot::Unsupported(_) => FieldKind::Unsupported,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Text(_) => type_name::<String>(),
            Slot::Int(target) => target.type_name(),
            Slot::Bool(_) => type_name::<bool>(),
            Slot::Float(target) => target.type_name(),
            Slot::Record(record) => record.type_name(),
            Slot::Unsupported(name) => *name,
        }
    }
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.type_name()).finish()
    }
}

impl std::fmt::Debug for dyn Record + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One field of a record, as seen by the binder.
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: &'static str,
    pub(crate) tag: &'static str,
    /// `None` for fields that cannot be set from outside.
    pub(crate) slot: Option<Slot<'a>>,
}

impl<'a> Field<'a> {
    pub fn new<T: Bindable + ?Sized>(
        name: &'static str,
        tag: &'static str,
        value: &'a mut T,
    ) -> Self {
        Self {
            name,
            tag,
            slot: Some(value.slot()),
        }
    }

    /// A field the binder must leave alone.
    pub fn readonly(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            slot: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn is_settable(&self) -> bool {
        self.slot.is_some()
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.slot.as_ref().map(Slot::kind)
    }
}

/// Integer storage of any width, written through `i64`.
///
/// Every source value is read as an `i64` first, so `u64` and `usize`
/// fields only accept values up to `i64::MAX`.
pub trait IntTarget {
    fn set_i64(&mut self, value: i64) -> Result<(), TryFromIntError>;

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Floating-point storage of any width, written through `f64`.
pub trait FloatTarget {
    fn set_f64(&mut self, value: f64);

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

macro_rules! impl_int {
    ($($ty:ty),*) => {$(
        impl IntTarget for $ty {
            fn set_i64(&mut self, value: i64) -> Result<(), TryFromIntError> {
                *self = <$ty>::try_from(value)?;
                Ok(())
            }
        }

        impl Bindable for $ty {
            fn slot(&mut self) -> Slot<'_> {
                Slot::Int(self)
            }
        }
    )*};
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FloatTarget for f32 {
    fn set_f64(&mut self, value: f64) {
        *self = value as f32;
    }
}

impl FloatTarget for f64 {
    fn set_f64(&mut self, value: f64) {
        *self = value;
    }
}

impl Bindable for f32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(self)
    }
}

impl Bindable for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(self)
    }
}

impl Bindable for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

impl Bindable for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Bindable for char {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(type_name::<Self>())
    }
}

impl<T> Bindable for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(type_name::<Self>())
    }
}

impl<T> Bindable for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(type_name::<Self>())
    }
}
