/// Declares a struct and implements [`Record`](crate::Record) and
/// [`Bindable`](crate::Bindable) for it.
///
/// Every field is bound. An optional `#[bind("...")]` attribute on a field
/// supplies its annotation: a key override, `required`, and `default=<value>`,
/// comma separated. Doc comments may precede it; fields accept no other
/// attributes.
///
/// ```
/// envbind::record! {
///     #[derive(Debug, Default)]
///     pub struct Database {
///         /// Host name or address.
///         #[bind("db_host,required")]
///         pub host: String,
///         #[bind(",default=5432")]
///         pub port: u16,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (@tag) => { "" };
    (@tag $tag:literal) => { $tag };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[bind($tag:literal)])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $($crate::Field::new(
                        ::std::stringify!($field),
                        $crate::record!(@tag $($tag)?),
                        &mut self.$field,
                    ),)*
                ]
            }
        }

        impl $crate::Bindable for $name {
            fn slot(&mut self) -> $crate::Slot<'_> {
                $crate::Slot::Record(self)
            }
        }
    };
}
