//! Core traits and types for lazyseq.
//!
//! This module defines:
//! - [`Comparator`]: The three-way comparison used by the ordering operators.
//! - [`NaturalOrder`] and [`OrDefault`]: The default order and the call-time
//!   substitution of an absent comparator.
//! - [`Dynamic`]: Runtime type checks for dynamically typed elements, used by
//!   [`of_type`](crate::ops::of_type) and [`cast`](crate::ops::cast).

use std::any::Any;
use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// The comparator must answer consistently for equal keys, otherwise the
/// stability of [`order_by`](crate::ops::order_by) does not hold.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use lazyseq::core::Comparator;
/// use std::cmp::Ordering;
///
/// struct ByAbs;
///
/// impl Comparator<i32> for ByAbs {
///     fn compare(&self, left: &i32, right: &i32) -> Ordering {
///         left.abs().cmp(&right.abs())
///     }
/// }
///
/// assert_eq!(ByAbs.compare(&-7, &3), Ordering::Greater);
/// ```
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator as well.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// The natural order of `K`, i.e. [`Ord::cmp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// A caller-supplied comparator, or the natural order when none was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrDefault<C> {
    Custom(C),
    Natural,
}

impl<C> From<Option<C>> for OrDefault<C> {
    fn from(comparator: Option<C>) -> Self {
        match comparator {
            Some(comparator) => OrDefault::Custom(comparator),
            None => OrDefault::Natural,
        }
    }
}

impl<K: Ord + ?Sized, C: Comparator<K>> Comparator<K> for OrDefault<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        match self {
            OrDefault::Custom(comparator) => comparator.compare(left, right),
            OrDefault::Natural => NaturalOrder.compare(left, right),
        }
    }
}

/// A dynamically typed element that may be null.
///
/// The runtime type tag is the element's [`std::any::TypeId`]; `None` in the
/// `Option` forms is the null element.
///
/// # Examples
///
/// ```
/// use lazyseq::core::Dynamic;
/// use std::any::Any;
///
/// let value: Option<Box<dyn Any>> = Some(Box::new("abc"));
/// assert!(value.is::<&str>());
/// assert!(!value.is::<i32>());
/// assert_eq!(value.downcast::<&str>().ok(), Some(Some("abc")));
/// ```
pub trait Dynamic: Sized {
    /// Returns `true` for the null element.
    fn is_null(&self) -> bool;

    /// Returns `true` if the element is non-null and its runtime type is `T`.
    fn is<T: Any>(&self) -> bool;

    /// Narrows the element to `T`.
    ///
    /// Returns `Ok(None)` for null, `Ok(Some(value))` when the runtime type is `T`,
    /// and gives the element back as `Err` otherwise.
    fn downcast<T: Any>(self) -> Result<Option<T>, Self>;
}

macro_rules! impl_dynamic_for_box {
    ($any:ty) => {
        impl Dynamic for Box<$any> {
            fn is_null(&self) -> bool {
                false
            }

            fn is<T: Any>(&self) -> bool {
                (**self).is::<T>()
            }

            fn downcast<T: Any>(self) -> Result<Option<T>, Self> {
                <Box<$any>>::downcast::<T>(self).map(|value| Some(*value))
            }
        }

        impl Dynamic for Option<Box<$any>> {
            fn is_null(&self) -> bool {
                self.is_none()
            }

            fn is<T: Any>(&self) -> bool {
                self.as_ref().is_some_and(|value| Dynamic::is::<T>(value))
            }

            fn downcast<T: Any>(self) -> Result<Option<T>, Self> {
                match self {
                    None => Ok(None),
                    Some(value) => Dynamic::downcast::<T>(value).map_err(Some),
                }
            }
        }
    };
}

impl_dynamic_for_box!(dyn Any);
impl_dynamic_for_box!(dyn Any + Send);

#[cfg(test)]
mod tests {
    use super::*;

    fn by_abs(left: &i32, right: &i32) -> Ordering {
        left.abs().cmp(&right.abs())
    }

    #[test]
    fn absent_comparator_falls_back_to_natural_order() {
        let comparator: OrDefault<fn(&i32, &i32) -> Ordering> = None.into();
        assert!(matches!(comparator, OrDefault::Natural));
        assert_eq!(comparator.compare(&-5, &3), Ordering::Less);
    }

    #[test]
    fn supplied_comparator_is_used() {
        let comparator = OrDefault::from(Some(by_abs));
        assert_eq!(comparator.compare(&-5, &3), Ordering::Greater);
        assert_eq!(comparator.compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn boxed_any_reports_its_type() {
        let value: Box<dyn Any> = Box::new(11_i32);
        assert!(!value.is_null());
        assert!(Dynamic::is::<i32>(&value));
        assert!(!Dynamic::is::<String>(&value));

        let value = Dynamic::downcast::<String>(value).unwrap_err();
        assert_eq!(Dynamic::downcast::<i32>(value).ok(), Some(Some(11)));
    }

    #[test]
    fn null_downcasts_to_none() {
        let value: Option<Box<dyn Any + Send>> = None;
        assert!(value.is_null());
        assert!(!value.is::<i32>());
        assert_eq!(value.downcast::<i32>().ok(), Some(None));
    }
}
