//! Sequence operators.
//!
//! Every operator that returns a sequence works in two phases. Argument checks
//! run when the operator is called and are reported through the returned
//! [`Result`]. The transformation itself is deferred to the returned iterator
//! and only runs while elements are pulled from it.
//!
//! Nullable arguments are taken as `Option`s; `None` is reported as
//! [`SequenceError::ArgumentNull`]. The comparator of [`order_by`] is the one
//! exception: `None` selects the natural order of the key.

use crate::algo::sort_by_key_with;
use crate::buffer::materialize;
use crate::core::{Comparator, Dynamic, OrDefault};
use crate::error::{Result, SequenceError, required};
use std::any::{Any, type_name};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::vec;

// ============================================================================
// Where / Select
// ============================================================================

/// Lazily filters a sequence based on a predicate.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::filter;
///
/// let evens = filter(Some(1..=6), Some(|x: &i32| x % 2 == 0)).unwrap();
/// assert_eq!(evens.collect::<Vec<_>>(), vec![2, 4, 6]);
///
/// assert!(filter(Some(1..=6), None::<fn(&i32) -> bool>).is_err());
/// ```
pub fn filter<I, P>(source: Option<I>, predicate: Option<P>) -> Result<Where<I::IntoIter, P>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let source = required(source, "source")?;
    let predicate = required(predicate, "predicate")?;
    Ok(Where::new(source.into_iter(), predicate))
}

/// Iterator returned by [`filter`].
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Where<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Where<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for Where<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.source.by_ref().find(|item| predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I: FusedIterator, P: FnMut(&I::Item) -> bool> FusedIterator for Where<I, P> {}

/// Lazily projects each element of a sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::select;
///
/// let lengths = select(Some(["a", "bb", "ccc"]), Some(|s: &str| s.len())).unwrap();
/// assert_eq!(lengths.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn select<I, R, F>(source: Option<I>, selector: Option<F>) -> Result<Select<I::IntoIter, F>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    let source = required(source, "source")?;
    let selector = required(selector, "selector")?;
    Ok(Select::new(source.into_iter(), selector))
}

/// Iterator returned by [`select`].
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Select<I, F> {
    source: I,
    selector: F,
}

impl<I, F> Select<I, F> {
    pub(crate) fn new(source: I, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<I: Iterator, R, F: FnMut(I::Item) -> R> Iterator for Select<I, F> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.next().map(&mut self.selector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: ExactSizeIterator, R, F: FnMut(I::Item) -> R> ExactSizeIterator for Select<I, F> {}

impl<I: FusedIterator, R, F: FnMut(I::Item) -> R> FusedIterator for Select<I, F> {}

// ============================================================================
// Eager operators
// ============================================================================

/// Creates a vector holding every element of the sequence, in order.
pub fn to_array<I: IntoIterator>(source: Option<I>) -> Result<Vec<I::Item>> {
    let source = required(source, "source")?;
    Ok(materialize(source).into_vec())
}

/// Determines whether every element satisfies `predicate`.
///
/// Stops at the first element that fails. An empty sequence yields `true`.
pub fn all<I, P>(source: Option<I>, predicate: Option<P>) -> Result<bool>
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let source = required(source, "source")?;
    let mut predicate = required(predicate, "predicate")?;
    for item in source {
        if !predicate(item) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns the number of elements in the sequence.
pub fn count<I: IntoIterator>(source: Option<I>) -> Result<usize> {
    let source = required(source, "source")?;
    Ok(source.into_iter().fold(0, |count, _| count + 1))
}

/// Returns the number of elements that satisfy `predicate`.
pub fn count_by<I, P>(source: Option<I>, predicate: Option<P>) -> Result<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let source = required(source, "source")?;
    let mut predicate = required(predicate, "predicate")?;
    Ok(source
        .into_iter()
        .fold(0, |count, item| if predicate(&item) { count + 1 } else { count }))
}

// ============================================================================
// Range
// ============================================================================

/// Generates `count` consecutive integers starting at `start`.
///
/// Values past `i32::MAX` wrap around.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::range;
///
/// assert_eq!(range(-2, 4).unwrap().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
/// assert!(range(0, -1).is_err());
/// ```
pub fn range(start: i32, count: i32) -> Result<Range> {
    let remaining = usize::try_from(count).map_err(|_| SequenceError::ArgumentOutOfRange {
        name: "count",
        value: i64::from(count),
    })?;
    Ok(Range {
        next: start,
        remaining,
    })
}

/// Iterator returned by [`range`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Range {
    next: i32,
    remaining: usize,
}

impl Iterator for Range {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Range {}

impl FusedIterator for Range {}

// ============================================================================
// OrderBy
// ============================================================================

/// Sorts the elements of a sequence in ascending order of a key.
///
/// The sort is stable and is performed the first time the returned sequence is
/// pulled; calling `order_by` only validates its arguments. An absent
/// `comparator` selects the natural order of `K`.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::order_by;
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// let sorted = order_by(
///     Some(vec![44, 56, 123, 456, 11, 13, 154, 879, 11111]),
///     Some(|x: &i32| x - 100),
///     Some(by_abs),
/// )
/// .unwrap();
///
/// assert_eq!(
///     sorted.collect::<Vec<_>>(),
///     vec![123, 56, 154, 44, 13, 11, 456, 879, 11111]
/// );
/// ```
pub fn order_by<I, K, F, C>(
    source: Option<I>,
    key: Option<F>,
    comparator: Option<C>,
) -> Result<OrderBy<I::IntoIter, F, OrDefault<C>>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
    C: Comparator<K>,
{
    let source = required(source, "source")?;
    let key = required(key, "key")?;
    Ok(OrderBy::new(source.into_iter(), key, OrDefault::from(comparator)))
}

/// Iterator returned by [`order_by`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct OrderBy<I: Iterator, F, C> {
    state: OrderState<I, F, C>,
}

enum OrderState<I: Iterator, F, C> {
    Pending { source: I, key: F, comparator: C },
    Sorted(vec::IntoIter<I::Item>),
    // Only observable if the key extractor or comparator panicked mid-sort.
    Poisoned,
}

impl<I: Iterator, F, C> OrderBy<I, F, C> {
    pub(crate) fn new(source: I, key: F, comparator: C) -> Self {
        Self {
            state: OrderState::Pending {
                source,
                key,
                comparator,
            },
        }
    }
}

impl<I, K, F, C> OrderBy<I, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparator<K>,
{
    fn sorted(&mut self) -> Option<&mut vec::IntoIter<I::Item>> {
        if matches!(self.state, OrderState::Pending { .. }) {
            if let OrderState::Pending {
                source,
                key,
                comparator,
            } = std::mem::replace(&mut self.state, OrderState::Poisoned)
            {
                self.state = OrderState::Sorted(sort_by_key_with(source, key, comparator).into_iter());
            }
        }
        match &mut self.state {
            OrderState::Sorted(items) => Some(items),
            _ => None,
        }
    }
}

impl<I, K, F, C> Iterator for OrderBy<I, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparator<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.sorted()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            OrderState::Pending { source, .. } => source.size_hint(),
            OrderState::Sorted(items) => items.size_hint(),
            OrderState::Poisoned => (0, Some(0)),
        }
    }
}

impl<I, K, F, C> FusedIterator for OrderBy<I, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparator<K>,
{
}

// ============================================================================
// OfType / Cast
// ============================================================================

/// Lazily keeps only the elements whose runtime type is `T`.
///
/// Null elements are skipped.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::of_type;
/// use std::any::Any;
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1), Box::new("two") as Box<dyn Any>, Box::new(3)];
/// let ints = of_type::<i32, _>(Some(mixed)).unwrap();
/// assert_eq!(ints.collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn of_type<T, I>(source: Option<I>) -> Result<OfType<I::IntoIter, T>>
where
    T: Any,
    I: IntoIterator,
    I::Item: Dynamic,
{
    let source = required(source, "source")?;
    Ok(OfType::new(source.into_iter()))
}

/// Iterator returned by [`of_type`].
#[derive(Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct OfType<I, T> {
    source: I,
    _target: PhantomData<fn() -> T>,
}

impl<I, T> OfType<I, T> {
    pub(crate) fn new(source: I) -> Self {
        Self {
            source,
            _target: PhantomData,
        }
    }
}

impl<I, T> Iterator for OfType<I, T>
where
    T: Any,
    I: Iterator,
    I::Item: Dynamic,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source
            .by_ref()
            .find_map(|item| item.downcast::<T>().ok().flatten())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Narrows every element of the sequence to `T`.
///
/// The whole sequence is read and checked before this returns: the first
/// element that is neither null nor a `T` fails the call with
/// [`SequenceError::InvalidCast`]. The returned sequence yields `None` for null
/// elements.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::cast;
/// use std::any::Any;
///
/// let words: Vec<Option<Box<dyn Any>>> = vec![Some(Box::new("abc") as Box<dyn Any>), None];
/// let narrowed = cast::<&str, _>(Some(words)).unwrap();
/// assert_eq!(narrowed.collect::<Vec<_>>(), vec![Some("abc"), None]);
///
/// let mixed: Vec<Option<Box<dyn Any>>> =
///     vec![Some(Box::new("abc") as Box<dyn Any>), None, Some(Box::new(11) as Box<dyn Any>)];
/// assert!(cast::<&str, _>(Some(mixed)).is_err());
/// ```
pub fn cast<T, I>(source: Option<I>) -> Result<Cast<I::Item, T>>
where
    T: Any,
    I: IntoIterator,
    I::Item: Dynamic,
{
    let source = required(source, "source")?;
    let items = materialize(source).into_vec();
    if let Some(index) = items.iter().position(|item| !(item.is_null() || item.is::<T>())) {
        return Err(SequenceError::InvalidCast {
            index,
            target: type_name::<T>(),
        });
    }
    Ok(Cast::new(items))
}

/// Iterator returned by [`cast`].
#[derive(Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Cast<E, T> {
    items: vec::IntoIter<E>,
    _target: PhantomData<fn() -> T>,
}

impl<E, T> Cast<E, T> {
    fn new(items: Vec<E>) -> Self {
        Self {
            items: items.into_iter(),
            _target: PhantomData,
        }
    }
}

impl<E: Dynamic, T: Any> Iterator for Cast<E, T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Option<T>> {
        // Every element was checked in `cast`, so the downcast cannot fail here.
        self.items.next().map(|item| item.downcast::<T>().ok().flatten())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<E: Dynamic, T: Any> ExactSizeIterator for Cast<E, T> {}

// ============================================================================
// Reverse
// ============================================================================

/// Lazily inverts the order of the elements of a sequence.
///
/// The source is materialized the first time the result is pulled. An empty
/// source produces a single `Err(SequenceError::EmptySequence)`.
///
/// # Examples
///
/// ```
/// use lazyseq::ops::reverse;
/// use lazyseq::SequenceError;
///
/// let reversed = reverse(Some(vec![1, 2, 3])).unwrap();
/// assert_eq!(reversed.collect::<Result<Vec<_>, _>>(), Ok(vec![3, 2, 1]));
///
/// let mut empty = reverse(Some(Vec::<i32>::new())).unwrap();
/// assert_eq!(empty.next(), Some(Err(SequenceError::EmptySequence)));
/// assert_eq!(empty.next(), None);
/// ```
pub fn reverse<I: IntoIterator>(source: Option<I>) -> Result<Reverse<I::IntoIter>> {
    let source = required(source, "source")?;
    Ok(Reverse::new(source.into_iter()))
}

/// Iterator returned by [`reverse`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Reverse<I: Iterator> {
    state: ReverseState<I>,
}

enum ReverseState<I: Iterator> {
    Pending(I),
    Buffered(vec::IntoIter<I::Item>),
    Done,
}

impl<I: Iterator> Reverse<I> {
    pub(crate) fn new(source: I) -> Self {
        Self {
            state: ReverseState::Pending(source),
        }
    }
}

impl<I: Iterator> Iterator for Reverse<I> {
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let ReverseState::Pending(_) = self.state {
            if let ReverseState::Pending(source) = std::mem::replace(&mut self.state, ReverseState::Done) {
                let buffer = materialize(source);
                if buffer.is_empty() {
                    return Some(Err(SequenceError::EmptySequence));
                }
                self.state = ReverseState::Buffered(buffer.into_vec().into_iter());
            }
        }
        match &mut self.state {
            ReverseState::Buffered(items) => items.next_back().map(Ok),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Pending(source) => {
                let (lower, upper) = source.size_hint();
                (lower.min(1), upper.map(|upper| upper.max(1)))
            }
            ReverseState::Buffered(items) => items.size_hint(),
            ReverseState::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for Reverse<I> {}
