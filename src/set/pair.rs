//! Ordered pairs, the element type of cartesian products.

use std::fmt;

/// An ordered pair of values.
///
/// Equality, ordering and hashing are derived componentwise, so a `Pair`
/// is a valid set element whenever both of its components are.
///
/// # Examples
///
/// ```rust
/// use setops::Pair;
///
/// let pair = Pair::new("x", 1);
/// assert_eq!(pair.first, "x");
/// assert_eq!(pair.second, 1);
/// assert_eq!(pair.to_string(), "(x, 1)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from its two components.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the pair into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

static_assertions::assert_impl_all!(Pair<i32, String>: Clone, Eq, std::hash::Hash, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn test_tuple_conversions() {
        let pair: Pair<i32, &str> = (1, "one").into();
        assert_eq!(pair, Pair::new(1, "one"));

        let (first, second): (i32, &str) = pair.into();
        assert_eq!(first, 1);
        assert_eq!(second, "one");
    }

    #[rstest]
    fn test_componentwise_hash_and_equality() {
        let pairs: HashSet<Pair<i32, i32>> =
            [Pair::new(1, 2), Pair::new(1, 2), Pair::new(2, 1)].into_iter().collect();
        assert_eq!(pairs.len(), 2);
    }
}
