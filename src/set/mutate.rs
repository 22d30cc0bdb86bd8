//! In-place mutation.
//!
//! Every function here takes its target by `&mut D` where `D: SetMut<E>`,
//! so it works on [`Set`](super::Set), on standard library sets, and on
//! `Option<_>`. An absent (`None`) target is left untouched.

use super::view::SetMut;

/// Inserts each of `values` into `set`.
///
/// Values already present are left untouched.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, insert};
///
/// let mut set = Set::from([1]);
/// insert(&mut set, [1, 2, 3]);
/// assert_eq!(set.len(), 3);
/// ```
pub fn insert<E, D, I>(set: &mut D, values: I)
where
    D: SetMut<E> + ?Sized,
    I: IntoIterator<Item = E>,
{
    for value in values {
        set.insert_element(value);
    }
}

/// Removes each of `values` from `set`.
///
/// Values that are not present are ignored; deleting from an empty or
/// absent set does nothing.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, delete};
///
/// let mut set = Set::from([1, 2, 3]);
/// delete(&mut set, &[1, 4]);
/// assert_eq!(set, Set::from([2, 3]));
/// ```
pub fn delete<E, D>(set: &mut D, values: &[E])
where
    D: SetMut<E> + ?Sized,
{
    if set.is_empty() {
        return;
    }
    for value in values {
        set.remove_element(value);
    }
}

/// Removes every element for which `predicate` returns `true`.
///
/// `predicate` is called at most once per element.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, delete_if};
///
/// let mut numbers = Set::from([1, 2, 3, 4, 5]);
/// delete_if(&mut numbers, |element| element % 2 == 0);
/// assert_eq!(numbers.to_string(), "{1, 3, 5}");
/// ```
pub fn delete_if<E, D, F>(set: &mut D, mut predicate: F)
where
    D: SetMut<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    set.retain_elements(|element| !predicate(element));
}

/// Replaces `old` with `new` if `old` is present.
///
/// When `new` is already present the net effect is the removal of `old`.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, replace};
///
/// let mut set = Set::from([1, 2]);
/// replace(&mut set, &1, 10);
/// replace(&mut set, &5, 50);
/// assert_eq!(set, Set::from([2, 10]));
/// ```
pub fn replace<E, D>(set: &mut D, old: &E, new: E)
where
    D: SetMut<E> + ?Sized,
{
    if set.remove_element(old) {
        set.insert_element(new);
    }
}

/// Replaces every element `e` with `function(e)`.
///
/// The elements are taken out before any mapped value is inserted, so
/// `function` may map into values that were already in the set. Since
/// `function` need not be injective, the set may shrink.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, replace_with};
///
/// let mut set = Set::from([1, 2, 3]);
/// replace_with(&mut set, |element| element + 1);
/// assert_eq!(set, Set::from([2, 3, 4]));
///
/// replace_with(&mut set, |element| element % 2);
/// assert_eq!(set, Set::from([0, 1]));
/// ```
pub fn replace_with<E, D, F>(set: &mut D, function: F)
where
    D: SetMut<E> + ?Sized,
    F: FnMut(E) -> E,
{
    let snapshot = set.drain_elements();
    insert(set, snapshot.into_iter().map(function));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Set;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn test_insert_collapses_duplicates() {
        let mut set = Set::new();
        insert(&mut set, [1, 1, 2]);
        assert_eq!(set, Set::from([1, 2]));
    }

    #[rstest]
    fn test_delete_from_empty_is_noop() {
        let mut set: Set<i32> = Set::new();
        delete(&mut set, &[1, 2]);
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_delete_from_absent_is_noop() {
        let mut absent: Option<Set<i32>> = None;
        delete(&mut absent, &[1]);
        delete_if(&mut absent, |_| true);
        assert!(absent.is_none());
    }

    #[rstest]
    fn test_delete_if_calls_predicate_once_per_element() {
        let mut set = Set::from([1, 2, 3, 4]);
        let mut calls = 0;
        delete_if(&mut set, |element| {
            calls += 1;
            *element > 2
        });
        assert_eq!(calls, 4);
        assert_eq!(set, Set::from([1, 2]));
    }

    #[rstest]
    #[case(1, 1, Set::from([1, 2]))]
    #[case(1, 2, Set::from([2]))]
    #[case(1, 3, Set::from([2, 3]))]
    #[case(9, 3, Set::from([1, 2]))]
    fn test_replace(#[case] old: i32, #[case] new: i32, #[case] expected: Set<i32>) {
        let mut set = Set::from([1, 2]);
        replace(&mut set, &old, new);
        assert_eq!(set, expected);
    }

    #[rstest]
    fn test_replace_with_overlapping_codomain() {
        let mut set = Set::from([1, 2, 3]);
        replace_with(&mut set, |element| element * 2);
        assert_eq!(set, Set::from([2, 4, 6]));
    }

    #[rstest]
    fn test_mutation_on_std_hash_set() {
        let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
        delete_if(&mut set, |element| *element == 2);
        replace(&mut set, &3, 30);
        insert(&mut set, [4]);
        assert_eq!(set, HashSet::from([1, 30, 4]));
    }
}
