//! The generic set and its operations.
//!
//! The operations are layered leaves first:
//!
//! - [`container`](Set): construction, capacity, membership, rendering
//! - mutation: [`insert`], [`delete`], [`delete_if`], [`replace`], [`replace_with`]
//! - algebra: [`union`], [`intersection`], [`difference`], [`symmetric_difference`],
//!   [`cartesian_product`]
//! - predicates: [`contains`], [`contains_any`], [`contains_all`], [`some`], [`every`],
//!   [`equal`], [`overlaps`], [`subset`], [`proper_subset`]
//! - functional: [`map`], [`filter`], [`reduce`]
//! - lazy traversal: [`all`], [`insert_seq`], [`collect`], [`chunk`], [`union_seq`]
//!
//! Read operations accept any [`SetView`] and write operations any
//! [`SetMut`]; see the [`view`] module for the containers that qualify.
//!
//! # Examples
//!
//! ```rust
//! use setops::{Set, contains_all, difference, union};
//!
//! let admin = Set::from(["read", "write", "delete", "admin"]);
//! let editor = Set::from(["read", "write"]);
//! let viewer = Set::from(["read"]);
//!
//! assert!(contains_all(&admin, &["delete", "admin"]));
//! assert_eq!(union(&[&admin, &editor, &viewer]).to_string(), "{admin, delete, read, write}");
//! assert_eq!(difference(&admin, &[&editor, &viewer]).to_string(), "{admin, delete}");
//! ```

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash builder used by [`Set`].
///
/// When the `ahash` feature is enabled, this is `ahash::RandomState`,
/// which hashes faster than SipHash.
///
/// When the `ahash` feature is disabled (default), this is the standard
/// library's `RandomState`.
///
/// Both are seeded randomly, so iteration order stays unspecified.
#[cfg(feature = "ahash")]
pub(crate) type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(feature = "ahash"))]
pub(crate) type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod algebra;
mod container;
mod functional;
mod iter;
mod mutate;
mod pair;
mod predicates;
pub mod view;

pub use algebra::cartesian_product;
pub use algebra::difference;
pub use algebra::intersection;
pub use algebra::symmetric_difference;
pub use algebra::union;
pub use container::IntoIter;
pub use container::Iter;
pub use container::Set;
pub use container::copy;
pub use container::grow;
pub use container::render;
pub use container::to_vec;
pub use container::to_vec_with;
pub use container::try_grow;
pub use functional::filter;
pub use functional::map;
pub use functional::reduce;
pub use iter::Chunks;
pub use iter::UnionSeq;
pub use iter::all;
pub use iter::chunk;
pub use iter::collect;
pub use iter::insert_seq;
pub use iter::try_chunk;
pub use iter::union_seq;
pub use mutate::delete;
pub use mutate::delete_if;
pub use mutate::insert;
pub use mutate::replace;
pub use mutate::replace_with;
pub use pair::Pair;
pub use predicates::contains;
pub use predicates::contains_all;
pub use predicates::contains_any;
pub use predicates::equal;
pub use predicates::every;
pub use predicates::overlaps;
pub use predicates::proper_subset;
pub use predicates::some;
pub use predicates::subset;
pub use view::SetMut;
pub use view::SetView;
