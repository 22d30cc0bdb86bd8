//! Lazy traversal.
//!
//! Every sequence here is a pull-based [`Iterator`]: nothing is computed
//! until the consumer asks for the next item, and dropping the iterator
//! early stops all further work. Intermediate state (the current chunk,
//! the set of already-yielded elements) is owned by the iterator and is
//! released with it.
//!
//! The sequences are single-shot. Iterating the same set again may visit
//! its elements in a different order.
//!
//! # Examples
//!
//! ```rust
//! use setops::{Set, chunk, union_seq};
//!
//! let set: Set<i32> = (1..=7).collect();
//! let sizes: Vec<usize> = chunk(&set, 3).map(|chunk| chunk.len()).collect();
//! assert_eq!(sizes, vec![3, 3, 1]);
//!
//! let first = Set::from([1, 2]);
//! let second = Set::from([2, 3]);
//! assert_eq!(union_seq([&first, &second]).count(), 3);
//! ```

use std::hash::Hash;
use std::iter::FusedIterator;

use super::container::Set;
use super::view::{SetMut, SetView};
use crate::error::InvalidArgumentError;

/// Returns a lazy iterator over every element of `set`.
///
/// Creating the iterator is O(1); exhausting it is O(len).
#[inline]
pub fn all<E, V>(set: &V) -> V::Elements<'_>
where
    V: SetView<E> + ?Sized,
{
    set.elements()
}

/// Drains `sequence` into `set`, collapsing duplicates.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, insert_seq};
///
/// let mut set = Set::from([1]);
/// insert_seq(&mut set, (1..=3).chain(1..=3));
/// assert_eq!(set, Set::from([1, 2, 3]));
/// ```
pub fn insert_seq<E, D, I>(set: &mut D, sequence: I)
where
    D: SetMut<E> + ?Sized,
    I: IntoIterator<Item = E>,
{
    for element in sequence {
        set.insert_element(element);
    }
}

/// Collects `sequence` into a new set.
#[must_use]
pub fn collect<E, I>(sequence: I) -> Set<E>
where
    E: Hash + Eq,
    I: IntoIterator<Item = E>,
{
    let mut set = Set::new();
    insert_seq(&mut set, sequence);
    set
}

/// Returns a lazy iterator over disjoint subsets of `set` with `size`
/// elements each, except possibly the last.
///
/// An empty set yields no chunks at all. Each chunk is a freshly allocated
/// [`Set`] owned by the consumer.
///
/// # Panics
///
/// Panics if `size` is zero. See [`try_chunk`] for the fallible form.
pub fn chunk<E, V>(set: &V, size: usize) -> Chunks<V::Elements<'_>>
where
    V: SetView<E> + ?Sized,
{
    match try_chunk(set, size) {
        Ok(chunks) => chunks,
        Err(error) => panic!("{error}"),
    }
}

/// Fallible form of [`chunk`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `size` is zero.
pub fn try_chunk<E, V>(set: &V, size: usize) -> Result<Chunks<V::Elements<'_>>, InvalidArgumentError>
where
    V: SetView<E> + ?Sized,
{
    if size == 0 {
        return Err(InvalidArgumentError {
            operation: "chunk",
            argument: "size",
            reason: "cannot be less than 1",
        });
    }
    Ok(Chunks {
        elements: set.elements(),
        size,
    })
}

/// Returns a lazy iterator over the distinct elements of every set in
/// `sets`, in first-seen order.
///
/// `sets` yields borrowed views, so any [`SetView`] works as an input,
/// including unit-valued maps and absent (`None`) sets. The input sets are
/// pulled one at a time, and the iterator remembers what it has yielded,
/// so its memory is bounded by the size of the union.
///
/// # Examples
///
/// ```rust
/// use setops::{Set, union_seq};
///
/// let sets = vec![Set::from([1, 2]), Set::from([2, 3]), Set::from([3])];
/// let union: Set<i32> = union_seq(&sets).collect();
/// assert_eq!(union, Set::from([1, 2, 3]));
///
/// let present = Set::from([4]);
/// assert_eq!(union_seq(&[Some(&present), None]).collect::<Vec<_>>(), vec![4]);
/// ```
pub fn union_seq<'a, E, S, I>(sets: I) -> UnionSeq<'a, E, S, I::IntoIter>
where
    E: Clone + Hash + Eq + 'a,
    S: SetView<E> + 'a,
    I: IntoIterator<Item = &'a S>,
{
    UnionSeq {
        sets: sets.into_iter(),
        current: None,
        seen: Set::new(),
    }
}

// =============================================================================
// Chunks
// =============================================================================

/// Lazy iterator returned by [`chunk`].
pub struct Chunks<I> {
    elements: I,
    size: usize,
}

impl<'a, E, I> Iterator for Chunks<I>
where
    E: Clone + Hash + Eq + 'a,
    I: Iterator<Item = &'a E>,
{
    type Item = Set<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (lower, upper) = self.elements.size_hint();
        let capacity = self.size.min(upper.unwrap_or(lower));
        let mut chunk = Set::with_capacity(capacity);
        chunk.extend(self.elements.by_ref().take(self.size).cloned());
        if chunk.is_empty() { None } else { Some(chunk) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.elements.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<'a, E, I> FusedIterator for Chunks<I>
where
    E: Clone + Hash + Eq + 'a,
    I: FusedIterator<Item = &'a E>,
{
}

static_assertions::assert_not_impl_any!(Chunks<super::container::Iter<'static, i32>>: Clone);

// =============================================================================
// UnionSeq
// =============================================================================

/// Lazy iterator returned by [`union_seq`].
pub struct UnionSeq<'a, E, S, I>
where
    E: 'a,
    S: SetView<E> + 'a,
{
    sets: I,
    current: Option<S::Elements<'a>>,
    seen: Set<&'a E>,
}

impl<'a, E, S, I> Iterator for UnionSeq<'a, E, S, I>
where
    E: Clone + Hash + Eq + 'a,
    S: SetView<E> + 'a,
    I: Iterator<Item = &'a S>,
{
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(elements) = self.current.as_mut() {
                for element in elements.by_ref() {
                    if self.seen.insert(element) {
                        return Some(element.clone());
                    }
                }
            }
            match self.sets.next() {
                Some(set) => self.current = Some(set.elements()),
                None => {
                    self.current = None;
                    return None;
                }
            }
        }
    }
}

impl<'a, E, S, I> FusedIterator for UnionSeq<'a, E, S, I>
where
    E: Clone + Hash + Eq + 'a,
    S: SetView<E> + 'a,
    I: FusedIterator<Item = &'a S>,
{
}
