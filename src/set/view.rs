//! Read and write views over set-shaped containers.
//!
//! Every operation in this crate is written against two small traits
//! rather than against [`Set`](super::Set) directly:
//!
//! - [`SetView`]: read-only access (cardinality, membership, elements)
//! - [`SetMut`]: in-place insertion and removal
//!
//! Both are implemented for [`Set`](super::Set), for the standard library's
//! `HashSet<E, S>` and `HashMap<E, (), S>`, and for references. This keeps
//! foreign map-shaped containers usable as inputs to every operation.
//!
//! # Absent sets
//!
//! `Option<V>` implements both traits. `None` reads as the empty set, and
//! mutating `None` is a silent no-op:
//!
//! ```rust
//! use setops::{Set, SetView, delete, union};
//!
//! let present = setops::set![1, 2];
//! let absent: Option<&Set<i32>> = None;
//!
//! assert_eq!(absent.len(), 0);
//! assert_eq!(union(&[Some(&present), absent]), present);
//!
//! let mut nothing: Option<Set<i32>> = None;
//! delete(&mut nothing, &[1]);
//! assert!(nothing.is_none());
//! ```

use std::collections::{BTreeSet, HashMap, HashSet, btree_set, hash_map, hash_set};
use std::hash::{BuildHasher, Hash};
use std::iter::Flatten;

// =============================================================================
// Trait Definitions
// =============================================================================

/// Read-only access to a collection of distinct elements.
///
/// Implementors must never yield the same element twice from
/// [`elements`](Self::elements), and [`len`](Self::len) must equal the
/// number of elements yielded.
pub trait SetView<E> {
    /// Iterator over borrowed elements, in unspecified order.
    type Elements<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is present.
    fn contains(&self, element: &E) -> bool;

    /// Returns an iterator over the elements.
    fn elements(&self) -> Self::Elements<'_>;
}

/// In-place mutation of a collection of distinct elements.
pub trait SetMut<E>: SetView<E> {
    /// Adds `element`, returning `true` if it was not already present.
    fn insert_element(&mut self, element: E) -> bool;

    /// Removes `element`, returning `true` if it was present.
    fn remove_element(&mut self, element: &E) -> bool;

    /// Keeps only the elements for which `keep` returns `true`.
    ///
    /// `keep` is called exactly once per element.
    fn retain_elements<F>(&mut self, keep: F)
    where
        F: FnMut(&E) -> bool;

    /// Removes every element, returning them in unspecified order.
    fn drain_elements(&mut self) -> Vec<E>;
}

// =============================================================================
// Standard Library Containers
// =============================================================================

impl<E: Hash + Eq, S: BuildHasher> SetView<E> for HashSet<E, S> {
    type Elements<'a>
        = hash_set::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

impl<E: Hash + Eq, S: BuildHasher> SetMut<E> for HashSet<E, S> {
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
        self.drain().collect()
    }
}

impl<E: Hash + Eq, S: BuildHasher> SetView<E> for HashMap<E, (), S> {
    type Elements<'a>
        = hash_map::Keys<'a, E, ()>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.contains_key(element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.keys()
    }
}

impl<E: Hash + Eq, S: BuildHasher> SetMut<E> for HashMap<E, (), S> {
    fn insert_element(&mut self, element: E) -> bool {
        self.insert(element, ()).is_none()
    }

    fn remove_element(&mut self, element: &E) -> bool {
        self.remove(element).is_some()
    }

    fn retain_elements<F>(&mut self, mut keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        self.retain(|element, ()| keep(element));
    }

    fn drain_elements(&mut self) -> Vec<E> {
        self.drain().map(|(element, ())| element).collect()
    }
}

/// Ordered sets are accepted as read sources only.
impl<E: Ord> SetView<E> for BTreeSet<E> {
    type Elements<'a>
        = btree_set::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }
}

// =============================================================================
// Forwarding Implementations
// =============================================================================

impl<E, V: SetView<E> + ?Sized> SetView<E> for &V {
    type Elements<'a>
        = V::Elements<'a>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        (**self).contains(element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        (**self).elements()
    }
}

impl<E, V: SetView<E> + ?Sized> SetView<E> for &mut V {
    type Elements<'a>
        = V::Elements<'a>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        (**self).contains(element)
    }

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        (**self).elements()
    }
}

impl<E, D: SetMut<E> + ?Sized> SetMut<E> for &mut D {
    fn insert_element(&mut self, element: E) -> bool {
        (**self).insert_element(element)
    }

    fn remove_element(&mut self, element: &E) -> bool {
        (**self).remove_element(element)
    }

    fn retain_elements<F>(&mut self, keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        (**self).retain_elements(keep);
    }

    fn drain_elements(&mut self) -> Vec<E> {
        (**self).drain_elements()
    }
}

// =============================================================================
// Absent Sets
// =============================================================================

impl<E, V: SetView<E>> SetView<E> for Option<V> {
    type Elements<'a>
        = Flatten<std::option::IntoIter<V::Elements<'a>>>
    where
        Self: 'a,
        E: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().map_or(0, |view| view.len())
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.as_ref().is_some_and(|view| view.contains(element))
    }

    fn elements(&self) -> Self::Elements<'_> {
        self.as_ref()
            .map(|view| view.elements())
            .into_iter()
            .flatten()
    }
}

/// Mutating an absent set does nothing.
impl<E, D: SetMut<E>> SetMut<E> for Option<D> {
    fn insert_element(&mut self, element: E) -> bool {
        self.as_mut()
            .is_some_and(|target| target.insert_element(element))
    }

    fn remove_element(&mut self, element: &E) -> bool {
        self.as_mut()
            .is_some_and(|target| target.remove_element(element))
    }

    fn retain_elements<F>(&mut self, keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        if let Some(target) = self.as_mut() {
            target.retain_elements(keep);
        }
    }

    fn drain_elements(&mut self) -> Vec<E> {
        self.as_mut()
            .map_or_else(Vec::new, |target| target.drain_elements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_hash_set_view() {
        let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(SetView::len(&set), 3);
        assert!(SetView::contains(&set, &2));
        assert_eq!(set.elements().count(), 3);
    }

    #[rstest]
    fn test_unit_map_view() {
        let map: HashMap<&str, ()> = [("read", ()), ("write", ())].into_iter().collect();
        assert_eq!(SetView::len(&map), 2);
        assert!(SetView::contains(&map, &"read"));
        assert!(!SetView::contains(&map, &"admin"));
    }

    #[rstest]
    fn test_btree_set_view() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        let elements: Vec<&i32> = set.elements().collect();
        assert_eq!(elements, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_absent_view_reads_as_empty() {
        let absent: Option<HashSet<i32>> = None;
        assert_eq!(absent.len(), 0);
        assert!(absent.is_empty());
        assert!(!SetView::contains(&absent, &1));
        assert_eq!(absent.elements().count(), 0);
    }

    #[rstest]
    fn test_present_option_forwards() {
        let present: Option<HashSet<i32>> = Some([1, 2].into_iter().collect());
        assert_eq!(present.len(), 2);
        assert!(SetView::contains(&present, &1));
        assert_eq!(present.elements().count(), 2);
    }

    #[rstest]
    fn test_absent_mutation_is_noop() {
        let mut absent: Option<HashSet<i32>> = None;
        assert!(!absent.insert_element(1));
        assert!(!absent.remove_element(&1));
        absent.retain_elements(|_| false);
        assert!(absent.drain_elements().is_empty());
        assert!(absent.is_none());
    }

    #[rstest]
    fn test_unit_map_mutation() {
        let mut map: HashMap<i32, ()> = HashMap::new();
        assert!(map.insert_element(1));
        assert!(!map.insert_element(1));
        assert!(map.insert_element(2));
        map.retain_elements(|element| *element > 1);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2]);
        assert!(map.remove_element(&2));
        assert!(map.is_empty());
    }
}
