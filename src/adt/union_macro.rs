//! The `union!` macro for tagged sum types.

/// Declares a tagged union (sum type).
///
/// `union!` takes an enum declaration whose variants are either nullary
/// (`Nothing`) or carry named fields (`Just { value: T }`) and generates,
/// alongside the enum:
///
/// - a snake-case constructor per variant (`Maybe::just(value)`, `Maybe::nothing()`);
/// - an `is_<variant>` predicate per variant;
/// - `cata(on_first, on_second, ...)`, taking one handler per variant in
///   declaration order; each handler receives that variant's fields by value;
/// - `Display`, rendering `Variant` or `Variant(field, ...)`;
/// - an implementation of [`Tagged`](crate::adt::Tagged) whose `UNION` is the
///   enum's name.
///
/// Nullary variants are plain unit cases: every `Nothing` is the same
/// zero-sized value, so there is nothing to allocate or share.
///
/// Because `cata` takes its handlers positionally, forgetting a case is a
/// compile error rather than a runtime failure.
///
/// # Examples
///
/// ```rust
/// use adtkit::union;
/// use adtkit::adt::Tagged;
///
/// union! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub enum Shape {
///         Circle { radius: f64 },
///         Rectangle { width: f64, height: f64 },
///         Empty,
///     }
/// }
///
/// let shape = Shape::rectangle(2.0, 3.0);
/// assert!(shape.is_rectangle());
/// assert_eq!(shape.to_string(), "Rectangle(2, 3)");
/// assert_eq!(shape.tag(), "Rectangle");
///
/// let area = shape.cata(
///     |radius| std::f64::consts::PI * radius * radius,
///     |width, height| width * height,
///     || 0.0,
/// );
/// assert_eq!(area, 6.0);
/// assert_eq!(Shape::empty(), Shape::Empty);
/// ```
#[macro_export]
macro_rules! union {
    (
        $(#[$meta:meta])*
        $visibility:vis enum $name:ident $(<$($generic:ident),+ $(,)?>)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({
                    $(
                        $(#[$field_meta:meta])*
                        $field:ident : $field_type:ty
                    ),* $(,)?
                })?
            ),+ $(,)?
        }
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            $visibility enum $name $(<$($generic),+>)? {
                $(
                    $(#[$variant_meta])*
                    $variant $({ $($(#[$field_meta])* $field: $field_type),* })?,
                )+
            }

            impl $(<$($generic),+>)? $name $(<$($generic),+>)? {
                $(
                    #[doc = "Constructs the `" $variant "` variant."]
                    #[must_use]
                    pub const fn [<$variant:snake>]($($($field: $field_type),*)?) -> Self {
                        Self::$variant $({ $($field),* })?
                    }

                    #[doc = "Returns `true` if this is the `" $variant "` variant."]
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant { .. })
                    }
                )+

                /// Invokes the handler matching this value's variant with its
                /// fields, in declaration order, and returns the handler's result.
                pub fn cata<Output, $([<$variant Case>]),+>(
                    self,
                    $([<on_ $variant:snake>]: [<$variant Case>]),+
                ) -> Output
                where
                    $([<$variant Case>]: FnOnce($($($field_type),*)?) -> Output,)+
                {
                    match self {
                        $(
                            Self::$variant { $($($field),*)? } => {
                                [<on_ $variant:snake>]($($($field),*)?)
                            }
                        )+
                    }
                }
            }

            impl $(<$($generic),+>)? ::core::fmt::Display for $name $(<$($generic),+>)?
            where
                $($($($field_type: ::core::fmt::Display,)*)?)+
            {
                fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    match self {
                        $(
                            Self::$variant { $($($field),*)? } => $crate::adt::write_tagged(
                                formatter,
                                stringify!($variant),
                                &[$($($field as &dyn ::core::fmt::Display),*)?],
                            ),
                        )+
                    }
                }
            }

            impl $(<$($generic),+>)? $crate::adt::Tagged for $name $(<$($generic),+>)? {
                const UNION: &'static str = stringify!($name);
                const VARIANTS: &'static [&'static str] = &[$(stringify!($variant)),+];

                fn tag(&self) -> &'static str {
                    match self {
                        $(Self::$variant { .. } => stringify!($variant),)+
                    }
                }

                fn field_names(&self) -> &'static [&'static str] {
                    match self {
                        $(Self::$variant { .. } => &[$($(stringify!($field)),*)?],)+
                    }
                }
            }
        }
    };
}
