use lazyseq::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;

fn by_abs(left: &i32, right: &i32) -> Ordering {
    left.abs().cmp(&right.abs())
}

fn ordered<K, F, C>(source: Vec<i32>, key: F, comparator: C) -> Vec<i32>
where
    K: Ord,
    F: FnMut(&i32) -> K,
    C: Comparator<K>,
{
    order_by(Some(source), Some(key), Some(comparator))
        .unwrap()
        .collect()
}

#[test]
fn test_int_key_shifted_by_abs() {
    let actual = ordered(vec![44, 56, 123, 456, 11, 13, 154, 879, 11111], |x| x - 100, by_abs);
    assert_eq!(actual, vec![123, 56, 154, 44, 13, 11, 456, 879, 11111]);
}

#[test]
fn test_int_key_last_digit_keeps_ties_in_order() {
    // 56 and 456 share the key 6.
    let actual = ordered(vec![44, 56, 456, 11, 13, 158, 879], |x| x % 10, by_abs);
    assert_eq!(actual, vec![11, 13, 44, 56, 456, 158, 879]);
}

#[test]
fn test_int_key_square_root() {
    let actual = ordered(vec![49, 25, 64, 625, 100], |x| f64::from(*x).sqrt() as i32, by_abs);
    assert_eq!(actual, vec![25, 49, 64, 100, 625]);
}

#[test]
fn test_string_key_by_length() {
    let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
    let actual = ordered(vec![49, 25, 64, 625, 100], |x| x.to_string(), by_len);
    assert_eq!(actual, vec![49, 25, 64, 625, 100]);
}

#[test]
fn test_string_key_by_position_of_one() {
    let position = |s: &String| s.find('1').map_or(-1, |p| p as i64);
    let by_position = move |a: &String, b: &String| position(a).cmp(&position(b));
    let actual = ordered(vec![49, 41, 25, 64, 625, 100], |x| x.to_string(), by_position);
    assert_eq!(actual, vec![49, 25, 64, 625, 100, 41]);
}

#[test]
fn test_absent_comparator_uses_natural_order() {
    let sorted = order_by(Some(vec![3, -7, 1, 0]), Some(|x: &i32| *x), None::<fn(&i32, &i32) -> Ordering>)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(sorted, vec![-7, 0, 1, 3]);
}

#[test]
fn test_absent_source_or_key_fails_eagerly() {
    let missing_key = order_by(Some(vec![1, 2, 3]), None::<fn(&i32) -> i32>, None::<fn(&i32, &i32) -> Ordering>);
    assert!(matches!(missing_key, Err(SequenceError::ArgumentNull { name: "key" })));

    let missing_source = order_by(None::<Vec<i32>>, Some(|x: &i32| x % 10), Some(by_abs));
    assert!(matches!(missing_source, Err(SequenceError::ArgumentNull { name: "source" })));
}

#[test]
fn test_sorting_is_deferred_until_first_pull() {
    let calls = Cell::new(0);
    let key = |x: &i32| {
        calls.set(calls.get() + 1);
        *x
    };

    let mut sorted = order_by(Some(vec![3, 1, 2]), Some(key), Some(by_abs)).unwrap();
    assert_eq!(calls.get(), 0);

    assert_eq!(sorted.next(), Some(1));
    let after_first_pull = calls.get();
    assert!(after_first_pull > 0);

    assert_eq!(sorted.collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(calls.get(), after_first_pull);
}

#[test]
fn test_source_is_not_read_at_call_time() {
    let pulled = Cell::new(0);
    let source = (0..5).inspect(|_| pulled.set(pulled.get() + 1));

    let sorted = order_by(Some(source), Some(|x: &i32| -x), None::<NaturalOrder>).unwrap();
    assert_eq!(pulled.get(), 0);
    assert_eq!(sorted.collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    assert_eq!(pulled.get(), 5);
}

#[test]
fn test_sorting_is_idempotent() {
    let once = ordered(vec![44, 56, 123, 456, 11, 13, 154, 879, 11111], |x| x % 7, by_abs);
    let twice = ordered(once.clone(), |x| x % 7, by_abs);
    assert_eq!(once, twice);
}

#[test]
fn test_chained_order_by_with() {
    let records = vec![("b", 2), ("a", 1), ("c", 2), ("d", 1)];
    let sorted = records
        .into_iter()
        .order_by_with(|r| r.1, |a: &i32, b: &i32| b.cmp(a))
        .select(|r| r.0)
        .to_array();
    assert_eq!(sorted, vec!["b", "c", "a", "d"]);
}

#[test]
fn test_size_hint_after_sort() {
    let mut sorted = vec![5, 4, 3].into_iter().order_by(|x| *x);
    assert_eq!(sorted.size_hint(), (3, Some(3)));
    sorted.next();
    assert_eq!(sorted.size_hint(), (2, Some(2)));
}
