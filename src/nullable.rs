use core::fmt;

/// A value that may be explicitly empty.
///
/// A present key is allowed to map to "no value", and that state is distinct
/// from the key being absent altogether. An empty `Nullable` renders as the
/// literal token `null`, which is how it appears in the array's `Display`
/// form.
///
/// # Examples
///
/// ```rust
/// use assoc_array::{AssocArray, Nullable};
///
/// let mut map = AssocArray::new();
/// map.set("a", Nullable::from(1)).unwrap();
/// map.set("b", Nullable::none()).unwrap();
///
/// assert!(map.has_key(&"b"));
/// assert_eq!(map.to_string(), "{a:1, b:null}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    /// An explicitly empty value.
    pub const fn none() -> Self {
        Nullable(None)
    }

    /// Wraps a present value.
    pub const fn some(value: T) -> Self {
        Nullable(Some(value))
    }

    /// Returns `true` if no value is present.
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the value, if one is present.
    pub const fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwraps into the underlying option.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable(Some(value))
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable(value)
    }
}

impl<T> fmt::Display for Nullable<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn renders_null_when_empty() {
        let empty: Nullable<i32> = Nullable::none();
        assert_eq!(empty.to_string(), "null");
        assert_eq!(Nullable::some(7).to_string(), "7");
    }

    #[test]
    fn conversions() {
        assert_eq!(Nullable::from(3), Nullable::some(3));
        assert_eq!(Nullable::<i32>::from(None), Nullable::none());
        assert_eq!(Nullable::some(3).into_inner(), Some(3));
        assert_eq!(Nullable::<i32>::none().into_inner(), None);
        assert!(Nullable::<i32>::default().is_none());
        assert_eq!(Nullable::some(5).as_ref(), Some(&5));
    }
}
