//! # setops
//!
//! A generic hash set with a broad surface of set operations.
//!
//! ## Overview
//!
//! [`Set<E>`](Set) is an unordered collection of distinct elements backed by
//! a hash table. Around it this crate provides:
//!
//! - **Container**: construction, capacity, cloning, growing, rendering
//! - **Mutation**: insert, delete, predicate deletion, replacement
//! - **Set Algebra**: union, intersection, difference, symmetric difference,
//!   cartesian product
//! - **Predicates**: equality, subset, overlap, quantifiers, containment
//! - **Functional**: map, filter, reduce
//! - **Lazy Traversal**: element iteration, chunking, lazy union of many sets
//!
//! Every read operation accepts any [`SetView`], which covers [`Set`],
//! `std::collections::HashSet`, `HashMap<E, ()>` and `Option<_>` (where
//! `None` reads as the empty set). Every mutation accepts any [`SetMut`].
//!
//! ## Iteration Order
//!
//! Iteration order is unspecified and may differ between two iterations of
//! the same set. The only deterministic output is [`render`] (and
//! `Display`), which sorts the rendered elements as strings.
//!
//! ## Feature Flags
//!
//! - `ahash`: Hash with `ahash::RandomState` instead of the standard library's
//!   `RandomState`
//!
//! ## Example
//!
//! ```rust
//! use setops::prelude::*;
//!
//! let set1 = set![1, 2, 3];
//! let set2 = set![3, 4, 5];
//! let set3 = set![5, 6, 7];
//!
//! assert_eq!(union(&[&set1, &set2, &set3]).to_string(), "{1, 2, 3, 4, 5, 6, 7}");
//! assert_eq!(symmetric_difference(&[&set1, &set2, &set3]).to_string(), "{1, 2, 4, 6, 7}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type, its traits, every operation and the `set!` macro.
///
/// # Usage
///
/// ```rust
/// use setops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::set;
    pub use crate::set::*;
}

pub mod error;
mod macros;
pub mod set;

pub use error::InvalidArgumentError;
pub use set::*;
