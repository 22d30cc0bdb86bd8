//! Set algebra.
//!
//! All operations here are pure: they build a fresh [`Set`] and never
//! mutate their inputs. Absent inputs read as empty.
//!
//! The n-ary operations take a slice of views. An empty slice is always
//! legal and produces the empty set.
//!
//! # Examples
//!
//! ```rust
//! use setops::{Set, difference, union};
//!
//! let admin = Set::from(["read", "write", "delete", "admin"]);
//! let editor = Set::from(["read", "write"]);
//! let viewer = Set::from(["read"]);
//!
//! let everything = union(&[&admin, &editor, &viewer]);
//! assert_eq!(everything.to_string(), "{admin, delete, read, write}");
//!
//! let exclusive = difference(&admin, &[&editor, &viewer]);
//! assert_eq!(exclusive.to_string(), "{admin, delete}");
//! ```

use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::container::Set;
use super::pair::Pair;
use super::view::SetView;

/// Returns every element found in any of `sets`.
///
/// The result is allocated for the sum of the input sizes.
///
/// # Complexity
///
/// O(N) where N is the sum of the input sizes
#[must_use]
pub fn union<E, S>(sets: &[S]) -> Set<E>
where
    E: Clone + Hash + Eq,
    S: SetView<E>,
{
    let capacity = sets.iter().map(|set| set.len()).sum();
    let mut result = Set::with_capacity(capacity);
    for set in sets {
        result.extend(set.elements().cloned());
    }
    result
}

/// Returns the elements found in every one of `sets`.
///
/// Only the smallest input is iterated; each of its elements is probed
/// against the other inputs. An empty or absent input among two or more
/// forces an empty result.
///
/// # Complexity
///
/// O(k * min) where k is the number of inputs and min the smallest size
///
/// # Examples
///
/// ```rust
/// use setops::{Set, intersection};
///
/// let result = intersection(&[
///     Set::from([1, 2, 3, 4]),
///     Set::from([2, 3, 4, 5]),
///     Set::from([3, 4, 5, 6]),
/// ]);
/// assert_eq!(result.to_string(), "{3, 4}");
/// ```
#[must_use]
pub fn intersection<E, S>(sets: &[S]) -> Set<E>
where
    E: Clone + Hash + Eq,
    S: SetView<E>,
{
    let Some((smallest_index, smallest)) = sets
        .iter()
        .enumerate()
        .min_by_key(|(_, set)| set.len())
    else {
        return Set::new();
    };

    let mut result = Set::with_capacity(smallest.len());
    for element in smallest.elements() {
        let in_all = sets
            .iter()
            .enumerate()
            .all(|(index, set)| index == smallest_index || set.contains(element));
        if in_all {
            result.insert(element.clone());
        }
    }
    result
}

/// Returns the elements of `minuend` that are in none of `subtrahends`.
///
/// With two or more subtrahends their union is built first, so each
/// element of `minuend` is probed once.
///
/// # Complexity
///
/// O(len(minuend) + S) where S is the sum of the subtrahend sizes
#[must_use]
pub fn difference<E, M, S>(minuend: &M, subtrahends: &[S]) -> Set<E>
where
    E: Clone + Hash + Eq,
    M: SetView<E> + ?Sized,
    S: SetView<E>,
{
    if minuend.is_empty() {
        return Set::new();
    }
    match subtrahends {
        [] => minuend.elements().cloned().collect_with_capacity(minuend.len()),
        [subtrahend] => retain_absent(minuend, subtrahend),
        _ => retain_absent(minuend, &union(subtrahends)),
    }
}

fn retain_absent<E, M, S>(minuend: &M, excluded: &S) -> Set<E>
where
    E: Clone + Hash + Eq,
    M: SetView<E> + ?Sized,
    S: SetView<E> + ?Sized,
{
    minuend
        .elements()
        .filter(|element| !excluded.contains(element))
        .cloned()
        .collect_with_capacity(minuend.len())
}

/// Returns the elements found in an odd number of `sets`.
///
/// This is the n-ary exclusive or: every occurrence of an element toggles
/// its membership in the result, so `symmetric_difference(&[a, a, a])`
/// equals `a`.
///
/// # Complexity
///
/// O(N) where N is the sum of the input sizes
///
/// # Examples
///
/// ```rust
/// use setops::{Set, symmetric_difference};
///
/// let result = symmetric_difference(&[
///     Set::from([1, 2, 3]),
///     Set::from([3, 4, 5]),
///     Set::from([5, 6, 7]),
/// ]);
/// assert_eq!(result.to_string(), "{1, 2, 4, 6, 7}");
/// ```
#[must_use]
pub fn symmetric_difference<E, S>(sets: &[S]) -> Set<E>
where
    E: Clone + Hash + Eq,
    S: SetView<E>,
{
    let capacity = sets.iter().map(|set| set.len()).sum();
    let mut result = Set::with_capacity(capacity);
    for set in sets {
        for element in set.elements() {
            if !result.remove(element) {
                result.insert(element.clone());
            }
        }
    }
    result
}

/// Returns every [`Pair`] whose first component is from `first` and whose
/// second component is from `second`.
///
/// # Complexity
///
/// O(n * m)
///
/// # Examples
///
/// ```rust
/// use setops::{Pair, Set, cartesian_product};
///
/// let product = cartesian_product(&Set::from([1, 2]), &Set::from(['a']));
/// assert_eq!(product, Set::from([Pair::new(1, 'a'), Pair::new(2, 'a')]));
/// ```
#[must_use]
pub fn cartesian_product<A, B, VA, VB>(first: &VA, second: &VB) -> Set<Pair<A, B>>
where
    A: Clone + Hash + Eq,
    B: Clone + Hash + Eq,
    VA: SetView<A> + ?Sized,
    VB: SetView<B> + ?Sized,
{
    if first.is_empty() || second.is_empty() {
        return Set::new();
    }
    let capacity = first.len().checked_mul(second.len()).unwrap_or_default();
    let mut result = Set::with_capacity(capacity);
    for left in first.elements() {
        for right in second.elements() {
            result.insert(Pair::new(left.clone(), right.clone()));
        }
    }
    result
}

trait CollectWithCapacity<E> {
    fn collect_with_capacity(self, capacity: usize) -> Set<E>;
}

impl<E: Hash + Eq, I: Iterator<Item = E>> CollectWithCapacity<E> for I {
    fn collect_with_capacity(self, capacity: usize) -> Set<E> {
        let mut result = Set::with_capacity(capacity);
        result.extend(self);
        result
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<E: Clone + Hash + Eq> BitOr<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the union of `self` and `other`.
    fn bitor(self, other: &Set<E>) -> Self::Output {
        union(&[self, other])
    }
}

impl<E: Clone + Hash + Eq> BitAnd<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the intersection of `self` and `other`.
    fn bitand(self, other: &Set<E>) -> Self::Output {
        intersection(&[self, other])
    }
}

impl<E: Clone + Hash + Eq> Sub<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the elements of `self` that are not in `other`.
    fn sub(self, other: &Set<E>) -> Self::Output {
        difference(self, &[other])
    }
}

impl<E: Clone + Hash + Eq> BitXor<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the elements in exactly one of `self` and `other`.
    fn bitxor(self, other: &Set<E>) -> Self::Output {
        symmetric_difference(&[self, other])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn permissions() -> (Set<&'static str>, Set<&'static str>, Set<&'static str>) {
        (
            Set::from(["read", "write", "delete", "admin"]),
            Set::from(["read", "write"]),
            Set::from(["read"]),
        )
    }

    #[rstest]
    fn test_union_of_permissions() {
        let (admin, editor, viewer) = permissions();
        let result = union(&[&admin, &editor, &viewer]);
        assert_eq!(result.to_string(), "{admin, delete, read, write}");
    }

    #[rstest]
    fn test_union_of_nothing_is_empty() {
        let sets: [&Set<i32>; 0] = [];
        assert!(union(&sets).is_empty());
    }

    #[rstest]
    fn test_union_with_absent() {
        let set = Set::from([1, 2]);
        assert_eq!(union(&[Some(&set), None]), set);
    }

    #[rstest]
    fn test_intersection_of_nothing_is_empty() {
        let sets: [Set<i32>; 0] = [];
        assert!(intersection(&sets).is_empty());
    }

    #[rstest]
    fn test_intersection_of_one_is_copy() {
        let set = Set::from([1, 2, 3]);
        let result = intersection(&[&set]);
        assert_eq!(result, set);
    }

    #[rstest]
    fn test_intersection_with_absent_is_empty() {
        let set = Set::from([1, 2, 3]);
        assert!(intersection(&[Some(&set), None]).is_empty());
    }

    #[rstest]
    fn test_difference_of_permissions() {
        let (admin, editor, viewer) = permissions();
        assert_eq!(
            difference(&admin, &[&editor, &viewer]).to_string(),
            "{admin, delete}"
        );
    }

    #[rstest]
    #[case(vec![], Set::from([1, 2, 3]))]
    #[case(vec![Set::from([2])], Set::from([1, 3]))]
    #[case(vec![Set::from([2]), Set::from([3, 4])], Set::from([1]))]
    #[case(vec![Set::from([1, 2, 3])], Set::new())]
    fn test_difference_paths(#[case] subtrahends: Vec<Set<i32>>, #[case] expected: Set<i32>) {
        let minuend = Set::from([1, 2, 3]);
        assert_eq!(difference(&minuend, &subtrahends), expected);
    }

    #[rstest]
    fn test_difference_of_empty_minuend() {
        let minuend: Set<i32> = Set::new();
        assert!(difference(&minuend, &[Set::from([1])]).is_empty());
    }

    #[rstest]
    fn test_symmetric_difference_counts_parity() {
        let set = Set::from([1, 2]);
        assert!(symmetric_difference(&[&set, &set]).is_empty());
        assert_eq!(symmetric_difference(&[&set, &set, &set]), set);
    }

    #[rstest]
    fn test_cartesian_product_with_empty() {
        let empty: Set<i32> = Set::new();
        assert!(cartesian_product(&Set::from([1, 2]), &empty).is_empty());
        assert!(cartesian_product(&empty, &Set::from([1, 2])).is_empty());
    }

    #[rstest]
    fn test_cartesian_product_size() {
        let product = cartesian_product(&Set::from([1, 2, 3]), &Set::from(["a", "b"]));
        assert_eq!(product.len(), 6);
        assert!(product.contains(&Pair::new(3, "b")));
    }

    #[rstest]
    fn test_foreign_containers_as_inputs() {
        let left: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let right: HashSet<i32> = [3, 4].into_iter().collect();
        assert_eq!(union(&[&left, &right]), Set::from([1, 2, 3, 4]));
        assert_eq!(difference(&left, &[&right]), Set::from([1, 2]));
    }

    #[rstest]
    fn test_operators() {
        let left = Set::from([1, 2, 3]);
        let right = Set::from([2, 3, 4]);
        assert_eq!(&left | &right, Set::from([1, 2, 3, 4]));
        assert_eq!(&left & &right, Set::from([2, 3]));
        assert_eq!(&left - &right, Set::from([1]));
        assert_eq!(&left ^ &right, Set::from([1, 4]));
    }
}
