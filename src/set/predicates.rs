//! Predicates over sets.
//!
//! None of these functions mutate their inputs. Absent inputs read as
//! empty, which fixes the vacuous cases:
//!
//! | Call                          | Empty / absent `set` |
//! |-------------------------------|----------------------|
//! | `contains_any(set, values)`   | `false`              |
//! | `contains_all(set, &[])`      | `true`               |
//! | `some(set, predicate)`        | `false`              |
//! | `every(set, predicate)`       | `true`               |
//! | `subset(set, superset)`       | `true`               |

use super::view::SetView;

/// Returns `true` if `value` is in `set`.
#[inline]
#[must_use]
pub fn contains<E, V>(set: &V, value: &E) -> bool
where
    V: SetView<E> + ?Sized,
{
    set.contains(value)
}

/// Returns `true` if at least one of `values` is in `set`.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, contains_any};
///
/// let set = Set::from([1, 2, 3]);
/// assert!(contains_any(&set, &[5, 3]));
/// assert!(!contains_any(&set, &[]));
/// ```
#[must_use]
pub fn contains_any<E, V>(set: &V, values: &[E]) -> bool
where
    V: SetView<E> + ?Sized,
{
    !set.is_empty() && values.iter().any(|value| set.contains(value))
}

/// Returns `true` if every one of `values` is in `set`.
///
/// An empty `values` is vacuously contained in any set.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, contains_all};
///
/// let admin = Set::from(["read", "write", "delete", "admin"]);
/// assert!(contains_all(&admin, &["delete", "admin"]));
/// assert!(contains_all(&Set::<&str>::new(), &[]));
/// ```
#[must_use]
pub fn contains_all<E, V>(set: &V, values: &[E]) -> bool
where
    V: SetView<E> + ?Sized,
{
    if values.is_empty() {
        return true;
    }
    !set.is_empty() && values.iter().all(|value| set.contains(value))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first element that satisfies `predicate`.
#[must_use]
pub fn some<E, V, F>(set: &V, predicate: F) -> bool
where
    V: SetView<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    set.elements().any(predicate)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails `predicate`. Vacuously `true`
/// for an empty set.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, every};
///
/// let mixed = Set::from([1, 2, 3, 4]);
/// assert!(every(&mixed, |element| *element > 0));
/// assert!(!every(&mixed, |element| element % 2 == 0));
/// ```
#[must_use]
pub fn every<E, V, F>(set: &V, predicate: F) -> bool
where
    V: SetView<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    set.elements().all(predicate)
}

/// Returns `true` if both sets hold the same elements.
///
/// The two sides may be different container types.
///
/// # Complexity
///
/// O(len(first))
#[must_use]
pub fn equal<E, A, B>(first: &A, second: &B) -> bool
where
    A: SetView<E> + ?Sized,
    B: SetView<E> + ?Sized,
{
    first.len() == second.len() && first.elements().all(|element| second.contains(element))
}

/// Returns `true` if the two sets share at least one element.
///
/// The smaller set is iterated and probed against the larger one.
///
/// # Complexity
///
/// O(min(len(first), len(second)))
#[must_use]
pub fn overlaps<E, A, B>(first: &A, second: &B) -> bool
where
    A: SetView<E> + ?Sized,
    B: SetView<E> + ?Sized,
{
    if first.is_empty() || second.is_empty() {
        return false;
    }
    if first.len() <= second.len() {
        first.elements().any(|element| second.contains(element))
    } else {
        second.elements().any(|element| first.contains(element))
    }
}

/// Returns `true` if every element of `subset` is in `superset`.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, subset};
///
/// let small = Set::from([1, 2]);
/// let large = Set::from([1, 2, 3]);
///
/// assert!(subset(&small, &large));
/// assert!(!subset(&large, &small));
/// assert!(subset(&Set::new(), &small));
/// ```
#[must_use]
pub fn subset<E, A, B>(subset: &A, superset: &B) -> bool
where
    A: SetView<E> + ?Sized,
    B: SetView<E> + ?Sized,
{
    if subset.is_empty() {
        return true;
    }
    subset.len() <= superset.len() && subset.elements().all(|element| superset.contains(element))
}

/// Returns `true` if `subset` is a subset of `superset` and the two differ.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, proper_subset};
///
/// let set = Set::from([1, 2]);
/// assert!(proper_subset(&Set::from([1]), &set));
/// assert!(!proper_subset(&set, &set));
/// ```
#[must_use]
pub fn proper_subset<E, A, B>(subset: &A, superset: &B) -> bool
where
    A: SetView<E> + ?Sized,
    B: SetView<E> + ?Sized,
{
    subset.len() < superset.len() && self::subset(subset, superset)
}
