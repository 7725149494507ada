//! The `Tagged` trait shared by every value the ADT engine generates.

use std::fmt;

/// Runtime view of a value declared through [`tag!`](crate::tag) or
/// [`union!`](crate::union).
///
/// The compiler already knows which variant a value is; `Tagged` exposes the
/// same information as data, which is what rendering, logging and
/// diagnostics need.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::Tagged;
/// use adtkit::data::Maybe;
///
/// let value = Maybe::just(3);
/// assert_eq!(value.tag(), "Just");
/// assert_eq!(value.field_names(), &["value"]);
/// assert_eq!(<Maybe<i32> as Tagged>::UNION, "Maybe");
/// assert_eq!(<Maybe<i32> as Tagged>::VARIANTS, &["Just", "Nothing"]);
/// ```
pub trait Tagged {
    /// The parent name. For a product type this is the type's own name.
    const UNION: &'static str;

    /// Every variant name, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// The variant name of this value.
    fn tag(&self) -> &'static str;

    /// The names of the fields this value carries, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// The number of fields this value carries.
    #[inline]
    fn arity(&self) -> usize {
        self.field_names().len()
    }

    /// Returns `true` if this value's variant is named `name`.
    #[inline]
    fn is_variant(&self, name: &str) -> bool {
        self.tag() == name
    }
}

/// Renders a tagged value as `Tag` or `Tag(field, field, ...)`.
///
/// This is the `Display` body generated by both ADT macros.
///
/// # Errors
///
/// Propagates any error returned by the formatter or a field's `Display`.
pub fn write_tagged(
    formatter: &mut fmt::Formatter<'_>,
    tag: &str,
    fields: &[&dyn fmt::Display],
) -> fmt::Result {
    formatter.write_str(tag)?;
    if fields.is_empty() {
        return Ok(());
    }
    formatter.write_str("(")?;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{field}")?;
    }
    formatter.write_str(")")
}
