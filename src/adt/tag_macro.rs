//! The `tag!` macro for tagged product types.

/// Declares a tagged product type.
///
/// `tag!` takes a struct declaration and generates, alongside the struct:
///
/// - `Name::new(field, ...)`, taking the fields positionally in declaration order;
/// - `From<(Type, ...)>`, so `Name::from((a, b))` builds the same value;
/// - a read-only accessor per field (fields are private and never reassigned);
/// - `cata(handler)`, which hands every field to `handler` by value;
/// - `Display`, rendering `Name` or `Name(field, ...)`;
/// - an implementation of [`Tagged`](crate::adt::Tagged).
///
/// `Display` is implemented when every field type implements `Display`.
///
/// # Examples
///
/// ```rust
/// use adtkit::tag;
/// use adtkit::adt::Tagged;
///
/// tag! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub struct Point {
///         x: i32,
///         y: i32,
///     }
/// }
///
/// let point = Point::new(1, 2);
/// assert_eq!(point, Point::from((1, 2)));
/// assert_eq!(*point.x(), 1);
/// assert_eq!(point.to_string(), "Point(1, 2)");
/// assert_eq!(point.field_names(), &["x", "y"]);
/// assert_eq!(point.cata(|x, y| x + y), 3);
/// ```
///
/// Generic parameters are accepted without bounds:
///
/// ```rust
/// use adtkit::tag;
///
/// tag! {
///     #[derive(Debug, PartialEq)]
///     pub struct Labelled<T> {
///         label: String,
///         value: T,
///     }
/// }
///
/// let labelled = Labelled::new("answer".to_string(), 42);
/// assert_eq!(labelled.to_string(), "Labelled(answer, 42)");
/// ```
#[macro_export]
macro_rules! tag {
    (
        $(#[$meta:meta])*
        $visibility:vis struct $name:ident $(<$($generic:ident),+ $(,)?>)? {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $visibility struct $name $(<$($generic),+>)? {
            $(
                $(#[$field_meta])*
                $field: $field_type,
            )*
        }

        impl $(<$($generic),+>)? $name $(<$($generic),+>)? {
            /// Constructs a value from its fields, in declaration order.
            #[must_use]
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            pub const fn new($($field: $field_type),*) -> Self {
                Self { $($field),* }
            }

            $(
                #[doc = concat!("Returns the `", stringify!($field), "` field.")]
                #[must_use]
                pub const fn $field(&self) -> &$field_type {
                    &self.$field
                }
            )*

            /// Hands every field to `handler`, in declaration order, and returns its result.
            pub fn cata<Output, Handler>(self, handler: Handler) -> Output
            where
                Handler: FnOnce($($field_type),*) -> Output,
            {
                handler($(self.$field),*)
            }
        }

        impl $(<$($generic),+>)? ::core::convert::From<($($field_type,)*)>
            for $name $(<$($generic),+>)?
        {
            fn from(($($field,)*): ($($field_type,)*)) -> Self {
                Self::new($($field),*)
            }
        }

        impl $(<$($generic),+>)? ::core::fmt::Display for $name $(<$($generic),+>)?
        where
            $($field_type: ::core::fmt::Display,)*
        {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::adt::write_tagged(
                    formatter,
                    stringify!($name),
                    &[$(&self.$field as &dyn ::core::fmt::Display),*],
                )
            }
        }

        impl $(<$($generic),+>)? $crate::adt::Tagged for $name $(<$($generic),+>)? {
            const UNION: &'static str = stringify!($name);
            const VARIANTS: &'static [&'static str] = &[stringify!($name)];

            fn tag(&self) -> &'static str {
                stringify!($name)
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }
        }
    };
}
