//! Method-call form of the sequence operators.
//!
//! Arguments passed to these methods are always present, so the argument
//! checks of [`crate::ops`] cannot fail and the lazy sequences are returned
//! directly.

use crate::buffer::materialize;
use crate::core::{Comparator, Dynamic, NaturalOrder};
use crate::error::Result;
use crate::ops::{self, Cast, OfType, OrderBy, Reverse, Select, Where};
use std::any::Any;

/// Extension methods available on every iterator.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let names = ["carol", "al", "bob", "dave"]
///     .into_iter()
///     .where_by(|name| name.len() > 2)
///     .order_by(|name| name.len())
///     .select(str::to_uppercase)
///     .to_array();
///
/// assert_eq!(names, vec!["BOB", "DAVE", "CAROL"]);
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// Lazily keeps the elements that satisfy `predicate`.
    fn where_by<P>(self, predicate: P) -> Where<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Where::new(self, predicate)
    }

    /// Lazily projects each element through `selector`.
    fn select<R, F>(self, selector: F) -> Select<Self, F>
    where
        F: FnMut(Self::Item) -> R,
    {
        Select::new(self, selector)
    }

    /// Stable sort by the natural order of the extracted key.
    fn order_by<K, F>(self, key: F) -> OrderBy<Self, F, NaturalOrder>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        OrderBy::new(self, key, NaturalOrder)
    }

    /// Stable sort by the extracted key under `comparator`.
    fn order_by_with<K, F, C>(self, key: F, comparator: C) -> OrderBy<Self, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparator<K>,
    {
        OrderBy::new(self, key, comparator)
    }

    /// Collects the sequence through the materializing buffer.
    fn to_array(self) -> Vec<Self::Item> {
        materialize(self).into_vec()
    }

    /// Counts the elements that satisfy `predicate`.
    fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold(0, |count, item| if predicate(&item) { count + 1 } else { count })
    }

    /// Lazily yields the elements in reverse order. See [`ops::reverse`].
    fn reversed(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Lazily keeps only the elements whose runtime type is `T`.
    fn of_type<T: Any>(self) -> OfType<Self, T>
    where
        Self::Item: Dynamic,
    {
        OfType::new(self)
    }

    /// Narrows every element to `T`. See [`ops::cast`].
    fn cast<T: Any>(self) -> Result<Cast<Self::Item, T>>
    where
        Self::Item: Dynamic,
    {
        ops::cast(Some(self))
    }
}

impl<I: Iterator> SequenceExt for I {}
