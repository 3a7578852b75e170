//! # lazyseq
//!
//! `lazyseq` is a small library of lazy sequence operators (filtering, projection,
//! counting, type narrowing, sorting and reversal) over Rust iterators.
//!
//! Its centerpiece is a **stable, key-based sort with a pluggable comparator**:
//! elements are ordered by a key extracted from each element, keys are compared
//! through any [`Comparator`], and elements with equal keys keep their original
//! relative order.
//!
//! ## Key Features
//!
//! - **Two-phase operators**: Every operator validates its arguments when it is
//!   called and defers the actual work until the result is pulled.
//! - **Pluggable ordering**: [`order_by`] takes an optional comparator and falls
//!   back to the natural order of the key when none is given.
//! - **Adaptive materialization**: Sequences of known length are copied in one
//!   pass; others are buffered with a doubling growth strategy.
//! - **Type narrowing**: [`of_type`] and [`cast`] work over dynamically typed
//!   elements (`Box<dyn Any>`, optionally null) through the [`Dynamic`] trait.
//!
//! ## Usage
//!
//! ### Free functions
//!
//! The functions in [`ops`] take nullable arguments as `Option`s and report
//! absent ones as [`SequenceError::ArgumentNull`], before any element is read.
//!
//! ```rust
//! use lazyseq::{order_by, SequenceError};
//!
//! let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//! let sorted = order_by(Some(vec![44, 56, 123, 456]), Some(|x: &i32| x - 100), Some(by_abs))?;
//! assert_eq!(sorted.collect::<Vec<_>>(), vec![123, 56, 44, 456]);
//!
//! let missing_key = order_by(Some(vec![1, 2]), None::<fn(&i32) -> i32>, Some(by_abs));
//! assert!(matches!(missing_key, Err(SequenceError::ArgumentNull { name: "key" })));
//! # Ok::<(), SequenceError>(())
//! ```
//!
//! ### Method chaining
//!
//! [`SequenceExt`] offers the same operators as methods on any iterator.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let words = vec!["kiwi", "fig", "banana", "pear"];
//! let sorted = words.into_iter().order_by(|w| w.len()).to_array();
//!
//! assert_eq!(sorted, vec!["fig", "kiwi", "pear", "banana"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Ordering**: O(n²) comparisons in the worst case, O(n) on sorted input.
//!   The key extractor runs on both sides of every comparison; keys are not cached.
//! - **Materialization**: Amortized O(n) copying.

pub mod algo;
pub mod buffer;
pub mod core;
pub mod error;
pub mod ext;
pub mod ops;

pub use crate::core::{Comparator, Dynamic, NaturalOrder, OrDefault};
pub use error::{Result, SequenceError};
pub use ext::SequenceExt;
pub use ops::{all, cast, count, count_by, filter, of_type, order_by, range, reverse, select, to_array};

pub mod prelude {
    pub use crate::core::{Comparator, Dynamic, NaturalOrder};
    pub use crate::error::SequenceError;
    pub use crate::ext::SequenceExt;
    pub use crate::ops::{all, cast, count, count_by, filter, of_type, order_by, range, reverse, select, to_array};
}
