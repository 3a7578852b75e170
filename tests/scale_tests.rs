use lazyseq::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_materialize_1m_unsized() {
    let count = 1_000_000;
    let start = Instant::now();
    let evens = range(0, count).unwrap().where_by(|x| x % 2 == 0).to_array();
    println!("Materialized {} elements in {:?}", evens.len(), start.elapsed());

    assert_eq!(evens.len(), 500_000);
    assert!(evens.windows(2).all(|w| w[1] - w[0] == 2));
}

#[test]
fn test_order_by_presorted_is_linear() {
    // Sorted input costs one comparison per element.
    let count = 200_000;
    let start = Instant::now();
    let sorted = range(0, count).unwrap().order_by(|x| *x).to_array();
    println!("Ordered {} presorted elements in {:?}", sorted.len(), start.elapsed());

    assert_eq!(sorted.len(), 200_000);
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_order_by_5k_random() {
    let count = 5_000;
    let mut rng = rand::rng();
    let input: Vec<u16> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    let sorted = input.clone().into_iter().order_by(|x| *x).to_array();
    println!("Ordered {} random elements in {:?}", count, start.elapsed());

    let mut expected = input;
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
#[ignore]
fn test_order_by_50k_reversed() {
    // Worst case for insertion: every element walks the whole placed prefix.
    let count = 50_000;
    let start = Instant::now();
    let sorted = range(0, count).unwrap().order_by(|x| -x).to_array();
    println!("Ordered {} reversed elements in {:?}", count, start.elapsed());

    assert_eq!(sorted.first(), Some(&(count - 1)));
    assert_eq!(sorted.last(), Some(&0));
}
