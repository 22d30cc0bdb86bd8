//! Functional combinators: map, filter and reduce.
//!
//! # Reduction Order
//!
//! Sets have no element order, and [`reduce`] visits elements in whatever
//! order the underlying table yields them. That order is not a fold-left
//! over any particular sequence and may differ between two calls on the
//! same set. Supply an associative and commutative combiner whenever the
//! result must be deterministic.

use std::hash::Hash;

use super::container::Set;
use super::view::SetView;

/// Returns `{ function(e) : e in set }`.
///
/// The result may be smaller than `set` when `function` is not injective.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, map};
///
/// let numbers = Set::from([1, 2, 3]);
/// assert_eq!(map(&numbers, |element| -element).to_string(), "{-1, -2, -3}");
/// assert_eq!(map(&numbers, |element| element % 2).len(), 2);
/// ```
pub fn map<E, U, V, F>(set: &V, function: F) -> Set<U>
where
    U: Hash + Eq,
    V: SetView<E> + ?Sized,
    F: FnMut(&E) -> U,
{
    let mut result = Set::with_capacity(set.len());
    result.extend(set.elements().map(function));
    result
}

/// Returns the elements of `set` for which `predicate` returns `true`.
///
/// The result is allocated for `set.len()` elements; clone it to release
/// the unused capacity when the filter is selective.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, filter};
///
/// let numbers = Set::from([1, 2, 3, 4, 5]);
/// let odds = filter(&numbers, |element| element % 2 == 1);
/// assert_eq!(odds.to_string(), "{1, 3, 5}");
/// ```
pub fn filter<E, V, F>(set: &V, mut predicate: F) -> Set<E>
where
    E: Clone + Hash + Eq,
    V: SetView<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    let mut result = Set::with_capacity(set.len());
    result.extend(set.elements().filter(|element| predicate(element)).cloned());
    result
}

/// Folds every element of `set` into `initial` with `function`.
///
/// The visiting order is unspecified; see the [module documentation](self).
///
/// # Examples
///
/// ```rust
/// use setops::{Set, reduce};
///
/// let numbers = Set::from([1, 2, 3, 4]);
/// let sum = reduce(&numbers, 0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 10);
/// ```
pub fn reduce<E, A, V, F>(set: &V, initial: A, function: F) -> A
where
    V: SetView<E> + ?Sized,
    F: FnMut(A, &E) -> A,
{
    set.elements().fold(initial, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_changes_element_type() {
        let set = Set::from([1, 22, 333]);
        let lengths = map(&set, |element| element.to_string().len());
        assert_eq!(lengths, Set::from([1, 2, 3]));
    }

    #[rstest]
    fn test_map_of_absent_is_empty() {
        let absent: Option<&Set<i32>> = None;
        assert!(map(&absent, |element| element * 2).is_empty());
    }

    #[rstest]
    fn test_filter_preallocates_source_size() {
        let set: Set<i32> = (0..64).collect();
        let filtered = filter(&set, |element| *element == 0);
        assert_eq!(filtered, Set::from([0]));
        assert!(filtered.capacity() >= 64);
        assert!(filtered.clone().capacity() < 64);
    }

    #[rstest]
    fn test_reduce_with_commutative_combiner() {
        let set = Set::from(["a", "bb", "ccc"]);
        let total = reduce(&set, 0, |accumulator, element| accumulator + element.len());
        assert_eq!(total, 6);
    }

    #[rstest]
    fn test_reduce_of_empty_returns_initial() {
        let set: Set<i32> = Set::new();
        assert_eq!(reduce(&set, 42, |accumulator, element| accumulator + element), 42);
    }
}
