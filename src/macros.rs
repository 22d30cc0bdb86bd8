//! The `set!` macro for set literals.

/// Creates a [`Set`](crate::Set) from a list of values.
///
/// Duplicate values collapse into one element.
///
/// # Syntax
///
/// - `set![]` - An empty set
/// - `set![a, b, c]` - A set of the distinct values among `a`, `b`, `c`
///
/// # Examples
///
/// ```
/// use setops::set;
///
/// let permissions = set!["read", "write", "read"];
/// assert_eq!(permissions.len(), 2);
///
/// let empty: setops::Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };

    ($($value:expr),+ $(,)?) => {
        $crate::Set::from([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Set;
    use rstest::rstest;

    #[rstest]
    fn test_set_macro_collapses_duplicates() {
        let set = set![1, 2, 3, 3, 2, 1];
        assert_eq!(set.to_string(), "{1, 2, 3}");
    }

    #[rstest]
    fn test_set_macro_trailing_comma() {
        assert_eq!(set![1, 2,], Set::from([1, 2]));
    }

    #[rstest]
    fn test_set_macro_empty() {
        let set: Set<&str> = set![];
        assert!(set.is_empty());
    }
}
