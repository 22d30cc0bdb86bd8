//! The [`Set`] container.
//!
//! `Set<E>` is a thin wrapper around `HashMap<E, ()>`. Every element maps
//! to the unit value, so the table carries no information beyond
//! membership.
//!
//! - O(1) expected `contains`, `insert`, `remove`
//! - O(1) `len` and `is_empty`
//! - Iteration order is unspecified and may change between iterations
//!
//! # Examples
//!
//! ```rust
//! use setops::Set;
//!
//! let mut set = Set::from_slice(&[1, 2, 3, 3, 2, 1]);
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.to_string(), "{1, 2, 3}");
//!
//! set.insert(4);
//! assert!(set.contains(&4));
//! ```

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet, hash_map};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::DefaultHashBuilder;
use super::iter::{Chunks, try_chunk};
use super::view::{SetMut, SetView};
use crate::error::InvalidArgumentError;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of distinct elements backed by a hash table.
///
/// # Time Complexity
///
/// | Operation       | Complexity        |
/// |-----------------|-------------------|
/// | `new`           | O(1)              |
/// | `with_capacity` | O(1)              |
/// | `contains`      | O(1) expected     |
/// | `insert`        | O(1) expected     |
/// | `remove`        | O(1) expected     |
/// | `len`           | O(1)              |
/// | `clone`         | O(n)              |
/// | `grow`          | O(n)              |
/// | `to_string`     | O(n log n)        |
///
/// # Examples
///
/// ```rust
/// use setops::Set;
///
/// let set: Set<&str> = ["read", "write"].into_iter().collect();
/// assert!(set.contains("read"));
/// assert!(!set.contains("admin"));
/// ```
pub struct Set<E> {
    inner: HashMap<E, (), DefaultHashBuilder>,
}

impl<E> Set<E> {
    /// Creates a new empty set without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns an iterator over the elements in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.inner.keys(),
        }
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<E: Hash + Eq> Set<E> {
    /// Creates an empty set with space for at least `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows the addressable size.
    /// See [`try_with_capacity`](Self::try_with_capacity) for the fallible form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(set) => set,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an empty set with space for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the capacity cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, InvalidArgumentError> {
        let mut set = Self::new();
        set.inner
            .try_reserve(capacity)
            .map_err(|_| InvalidArgumentError::capacity_overflow("with_capacity", "capacity"))?;
        Ok(set)
    }

    /// Creates a set from the distinct values of `slice`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::from_slice(&["a", "b", "a"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[E]) -> Self
    where
        E: Clone,
    {
        let mut set = Self::with_capacity(slice.len());
        set.extend(slice.iter().cloned());
        set
    }

    /// Creates a set of `function(value)` for every value of `slice`.
    ///
    /// Values that map to the same element collapse into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::from_slice_with(&[1, 2, 3, 3, 2, 1], |value| -value);
    /// assert_eq!(set.to_string(), "{-1, -2, -3}");
    /// ```
    pub fn from_slice_with<A, F>(slice: &[A], function: F) -> Self
    where
        F: FnMut(&A) -> E,
    {
        let mut set = Self::with_capacity(slice.len());
        set.extend(slice.iter().map(function));
        set
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::from(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Adds `element`, returning `true` if it was not already present.
    ///
    /// An element already present is left untouched.
    #[inline]
    pub fn insert(&mut self, element: E) -> bool {
        match self.inner.entry(element) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(());
                true
            }
        }
    }

    /// Removes `element`, returning `true` if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        self.inner.retain(|element, ()| keep(element));
    }

    /// Returns a copy of this set with room for `additional` more elements.
    ///
    /// The returned set is a new container; mutating it never affects `self`.
    ///
    /// # Panics
    ///
    /// Panics if `len + additional` overflows the addressable size.
    #[must_use]
    pub fn grow(&self, additional: usize) -> Self
    where
        E: Clone,
    {
        grow(self, additional)
    }

    /// Fallible form of [`grow`](Self::grow).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the grown capacity cannot be allocated.
    pub fn try_grow(&self, additional: usize) -> Result<Self, InvalidArgumentError>
    where
        E: Clone,
    {
        try_grow(self, additional)
    }

    /// Returns the elements as a vector in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        to_vec(self)
    }

    /// Returns `function(element)` for every element, in unspecified order.
    pub fn to_vec_with<A, F>(&self, function: F) -> Vec<A>
    where
        F: FnMut(&E) -> A,
    {
        to_vec_with(self, function)
    }

    /// Returns a lazy iterator over disjoint subsets of at most `size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setops::Set;
    ///
    /// let set = Set::from([1, 2, 3, 4, 5, 6, 7]);
    /// let sizes: Vec<usize> = set.chunks(3).map(|chunk| chunk.len()).collect();
    /// assert_eq!(sizes, vec![3, 3, 1]);
    /// ```
    pub fn chunks(&self, size: usize) -> Chunks<Iter<'_, E>> {
        match self.try_chunks(size) {
            Ok(chunks) => chunks,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`chunks`](Self::chunks).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `size` is zero.
    pub fn try_chunks(&self, size: usize) -> Result<Chunks<Iter<'_, E>>, InvalidArgumentError> {
        try_chunk(self, size)
    }
}

// =============================================================================
// Container Operations
// =============================================================================

/// Inserts every element of `source` into `destination`.
///
/// Elements of `destination` that are not in `source` are kept.
/// Copying into an absent destination does nothing.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, copy};
///
/// let mut destination = Set::from([1, 2]);
/// copy(&mut destination, &Set::from([2, 3]));
/// assert_eq!(destination, Set::from([1, 2, 3]));
/// ```
pub fn copy<E, D, S>(destination: &mut D, source: &S)
where
    E: Clone,
    D: SetMut<E> + ?Sized,
    S: SetView<E> + ?Sized,
{
    for element in source.elements() {
        destination.insert_element(element.clone());
    }
}

/// Returns a new set equal to `set` with room for `additional` more elements.
///
/// # Panics
///
/// Panics if `set.len() + additional` overflows the addressable size.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, grow};
///
/// let set = Set::from([1, 2]);
/// let mut grown = grow(&set, 10);
/// grown.insert(3);
///
/// assert!(grown.capacity() >= 12);
/// assert_eq!(set.len(), 2);
/// ```
#[must_use]
pub fn grow<E, V>(set: &V, additional: usize) -> Set<E>
where
    E: Clone + Hash + Eq,
    V: SetView<E> + ?Sized,
{
    match try_grow(set, additional) {
        Ok(grown) => grown,
        Err(error) => panic!("{error}"),
    }
}

/// Fallible form of [`grow`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the grown capacity cannot be allocated.
pub fn try_grow<E, V>(set: &V, additional: usize) -> Result<Set<E>, InvalidArgumentError>
where
    E: Clone + Hash + Eq,
    V: SetView<E> + ?Sized,
{
    let overflow = || InvalidArgumentError::capacity_overflow("grow", "additional");
    let capacity = set.len().checked_add(additional).ok_or_else(overflow)?;
    let mut grown = Set::try_with_capacity(capacity).map_err(|_| overflow())?;
    grown.extend(set.elements().cloned());
    Ok(grown)
}

/// Returns the elements of `set` as a vector in unspecified order.
///
/// For an absent set use `Option::map`, which keeps the absence:
///
/// ```rust
/// use setops::{Set, to_vec};
///
/// let absent: Option<&Set<i32>> = None;
/// assert_eq!(absent.map(|set| to_vec(set)), None);
/// ```
#[must_use]
pub fn to_vec<E, V>(set: &V) -> Vec<E>
where
    E: Clone,
    V: SetView<E> + ?Sized,
{
    set.elements().cloned().collect()
}

/// Returns `function(element)` for every element of `set`, in unspecified order.
pub fn to_vec_with<E, A, V, F>(set: &V, function: F) -> Vec<A>
where
    V: SetView<E> + ?Sized,
    F: FnMut(&E) -> A,
{
    let mut result = Vec::with_capacity(set.len());
    result.extend(set.elements().map(function));
    result
}

/// Renders `set` as `{e1, e2, ...}`.
///
/// Each element is rendered with [`Display`](fmt::Display) and the rendered
/// strings are sorted lexicographically, so numbers sort as text:
/// `10` comes before `2`. An empty or absent set renders as `{}`.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, render};
///
/// assert_eq!(render(&Set::from([2, 10, 1])), "{1, 10, 2}");
/// assert_eq!(render(&Set::<i32>::new()), "{}");
/// ```
#[must_use]
pub fn render<E, V>(set: &V) -> String
where
    E: fmt::Display,
    V: SetView<E> + ?Sized,
{
    if set.is_empty() {
        return "{}".to_owned();
    }
    let mut rendered: Vec<String> = set.elements().map(ToString::to_string).collect();
    rendered.sort_unstable();
    format!("{{{}}}", rendered.join(", "))
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
#[derive(Clone)]
pub struct Iter<'a, E> {
    inner: hash_map::Keys<'a, E, ()>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Iter<'_, E> {}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<E> {
    inner: hash_map::IntoKeys<E, ()>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for IntoIter<E> {}

// =============================================================================
// View Implementations
// =============================================================================

impl<E: Hash + Eq> SetView<E> for Set<E> {
    type Elements<'a>
        = Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.inner.contains_key(element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

impl<E: Hash + Eq> SetMut<E> for Set<E> {
    fn insert_element(&mut self, element: E) -> bool {
        self.insert(element)
    }

    fn remove_element(&mut self, element: &E) -> bool {
        self.remove(element)
    }

    fn retain_elements<F>(&mut self, keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        self.retain(keep);
    }

    fn drain_elements(&mut self) -> Vec<E> {
        self.inner.drain().map(|(element, ())| element).collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for Set<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Clones into a table sized for the current length, releasing any excess
/// capacity left behind by removals.
impl<E: Clone + Hash + Eq> Clone for Set<E> {
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.len());
        clone.extend(self.iter().cloned());
        clone
    }
}

impl<E: Hash + Eq> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<E: Hash + Eq> Eq for Set<E> {}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display + Hash + Eq> fmt::Display for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&render(self))
    }
}

impl<E: Hash + Eq> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Hash + Eq> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, E: Copy + Hash + Eq + 'a> Extend<&'a E> for Set<E> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<E: Hash + Eq, const N: usize> From<[E; N]> for Set<E> {
    fn from(array: [E; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(array);
        set
    }
}

impl<E: Hash + Eq> From<Vec<E>> for Set<E> {
    fn from(vector: Vec<E>) -> Self {
        let mut set = Self::with_capacity(vector.len());
        set.extend(vector);
        set
    }
}

impl<E: Hash + Eq, S: BuildHasher> From<HashSet<E, S>> for Set<E> {
    fn from(set: HashSet<E, S>) -> Self {
        let mut result = Self::with_capacity(set.len());
        result.extend(set);
        result
    }
}

impl<E: Hash + Eq, S: BuildHasher> From<HashMap<E, (), S>> for Set<E> {
    fn from(map: HashMap<E, (), S>) -> Self {
        let mut result = Self::with_capacity(map.len());
        result.extend(map.into_keys());
        result
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default, Eq);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default, Eq);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(100)]
    fn test_with_capacity_reserves(#[case] capacity: usize) {
        let set: Set<i32> = Set::with_capacity(capacity);
        assert!(set.is_empty());
        assert!(set.capacity() >= capacity);
    }

    #[rstest]
    fn test_try_with_capacity_rejects_overflow() {
        let error = Set::<u64>::try_with_capacity(usize::MAX).unwrap_err();
        assert_eq!(error.operation, "with_capacity");
        assert_eq!(error.argument, "capacity");
    }

    #[rstest]
    #[should_panic(expected = "with_capacity: invalid argument `capacity`")]
    fn test_with_capacity_panics_on_overflow() {
        let _ = Set::<u64>::with_capacity(usize::MAX);
    }

    #[rstest]
    fn test_insert_reports_novelty() {
        let mut set = Set::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove_reports_presence() {
        let mut set = Set::from([1, 2]);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set, Set::from([2]));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = Set::from([1, 2, 3]);
        let mut clone = original.clone();
        clone.insert(4);
        clone.remove(&1);

        assert_eq!(original, Set::from([1, 2, 3]));
        assert_eq!(clone, Set::from([2, 3, 4]));
    }

    #[rstest]
    fn test_clone_of_absent_is_absent() {
        let absent: Option<&Set<i32>> = None;
        assert!(absent.cloned().is_none());
    }

    #[rstest]
    fn test_grow_returns_distinct_container() {
        let set = Set::from([1, 2]);
        let mut grown = set.grow(8);
        grown.insert(3);

        assert!(grown.capacity() >= 10);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&3));
    }

    #[rstest]
    fn test_try_grow_rejects_overflow() {
        let set = Set::from([1]);
        let error = set.try_grow(usize::MAX).unwrap_err();
        assert_eq!(error.operation, "grow");
        assert_eq!(error.argument, "additional");
    }

    #[rstest]
    fn test_copy_keeps_destination_elements() {
        let mut destination = Set::from([1, 2]);
        copy(&mut destination, &Set::from([2, 3]));
        assert_eq!(destination, Set::from([1, 2, 3]));
    }

    #[rstest]
    fn test_copy_into_absent_is_noop() {
        let mut absent: Option<Set<i32>> = None;
        copy(&mut absent, &Set::from([1]));
        assert!(absent.is_none());
    }

    #[rstest]
    #[case(Set::new(), "{}")]
    #[case(Set::from([1]), "{1}")]
    #[case(Set::from([3, 1, 2]), "{1, 2, 3}")]
    #[case(Set::from([2, 10]), "{10, 2}")]
    fn test_display_sorts_rendered_elements(#[case] set: Set<i32>, #[case] expected: &str) {
        assert_eq!(set.to_string(), expected);
    }

    #[rstest]
    fn test_render_absent() {
        let absent: Option<&Set<i32>> = None;
        assert_eq!(render(&absent), "{}");
    }

    #[rstest]
    fn test_to_vec_with() {
        let set = Set::from([1, 2, 3]);
        let mut doubled = set.to_vec_with(|element| element * 2);
        doubled.sort_unstable();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_from_unit_map() {
        let map: HashMap<&str, ()> = [("read", ()), ("write", ())].into_iter().collect();
        let set = Set::from(map);
        assert_eq!(set.to_string(), "{read, write}");
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left: Set<i32> = [1, 2, 3].into_iter().collect();
        let right: Set<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, Set::from([1, 2]));
    }
}
