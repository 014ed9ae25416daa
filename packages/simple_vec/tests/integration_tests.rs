//! Integration tests for the `simple_vec` package.
//!
//! These exercise the public API end to end: growth, positional editing, checked access,
//! copy and move semantics and comparisons.

use std::mem;

use simple_vec::{Error, SimpleVec, reserve, simple_vec};

#[test]
fn push_erase_insert_pop_scenario() {
    let mut items = SimpleVec::new();

    items.push_back(1);
    items.push_back(2);
    items.push_back(3);
    assert_eq!(items, [1, 2, 3]);
    assert_eq!(items.len(), 3);

    items.erase(1);
    assert_eq!(items, [1, 3]);
    assert_eq!(items.len(), 2);

    items.insert(1, 5);
    assert_eq!(items, [1, 5, 3]);
    assert_eq!(items.len(), 3);

    items.pop_back();
    assert_eq!(items, [1, 5]);
    assert_eq!(items.len(), 2);
}

#[test]
fn pushes_read_back_in_order_with_monotonic_capacity() {
    let mut items = SimpleVec::new();
    let mut previous_capacity = items.capacity();

    for value in 0..1000_u32 {
        items.push_back(value);

        assert!(items.capacity() >= items.len());
        assert!(items.capacity() >= previous_capacity);
        previous_capacity = items.capacity();
    }

    assert_eq!(items.len(), 1000);

    for (index, value) in (0..1000_u32).enumerate() {
        assert_eq!(items[index], value);
    }
}

#[test]
fn reserve_within_capacity_changes_nothing() {
    let mut items = simple_vec![1, 2, 3];
    items.reserve(8);

    let before = items.clone();

    for capacity in 0..=8 {
        items.reserve(capacity);

        assert_eq!(items.capacity(), 8);
        assert_eq!(items, before);
    }
}

#[test]
fn insert_then_erase_round_trip() {
    let original = simple_vec!["a", "b", "c", "d"];

    for index in 0..=original.len() {
        let mut items = original.clone();

        items.insert(index, "x");
        items.erase(index);

        assert_eq!(items, original);
    }
}

#[test]
fn move_leaves_source_empty() {
    let mut source = simple_vec![1, 2, 3];

    let destination = mem::take(&mut source);

    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert_eq!(destination, [1, 2, 3]);
}

#[test]
fn copy_is_independent() {
    let original = simple_vec![1, 2, 3];

    let mut copy = original.clone();
    copy[0] = 100;
    copy.push_back(4);
    copy.erase(1);

    assert_eq!(original, [1, 2, 3]);
    assert_eq!(copy, [100, 3, 4]);
}

#[test]
fn copy_assignment_keeps_source() {
    let source = simple_vec![7, 8];
    let mut target = simple_vec![1, 2, 3, 4, 5];

    target.clone_from(&source);
    target.push_back(9);

    assert_eq!(source, [7, 8]);
    assert_eq!(target, [7, 8, 9]);
}

#[test]
fn at_boundary() {
    let items = simple_vec![10, 20, 30];

    assert_eq!(items.at(items.len() - 1), Ok(&30));
    assert_eq!(
        items.at(items.len()),
        Err(Error::OutOfRange { index: 3, len: 3 })
    );

    let empty = SimpleVec::<u8>::new();
    assert!(matches!(empty.at(0), Err(Error::OutOfRange { .. })));
}

#[test]
fn resize_scenario() {
    let mut items = SimpleVec::<u32>::with_reserved(reserve(8));
    items.extend([1, 2, 3, 4, 5, 6]);
    assert_eq!(items.capacity(), 8);

    items.resize(0);
    assert_eq!(items.len(), 0);
    assert_eq!(items.capacity(), 8);

    let storage = items.as_ptr();
    items.resize(5);

    assert_eq!(items, [0, 0, 0, 0, 0]);
    assert_eq!(items.capacity(), 8);
    assert_eq!(items.as_ptr(), storage);
}

#[test]
fn literal_list_equals_pushes() {
    let literal = simple_vec![1, 2, 3];

    assert_eq!(literal.len(), 3);
    assert_eq!(literal.capacity(), 3);

    let mut pushed = SimpleVec::new();
    pushed.push_back(1);
    pushed.push_back(2);
    pushed.push_back(3);

    assert_eq!(literal, pushed);
}

#[test]
fn equality_and_ordering() {
    let a = simple_vec![1, 2, 3];
    let b = simple_vec![1, 2, 3];
    let c = simple_vec![1, 2];
    let d = simple_vec![2];

    assert!(a == b);
    assert!(a != c);
    assert!(c < a);
    assert!(a < d);
    assert!(a <= b);
    assert!(a >= b);
    assert!(d > a);
    assert!(d >= c);
}

#[test]
fn reserved_construction_allocates_without_items() {
    let items: SimpleVec<String> = reserve(32).into();

    assert!(items.is_empty());
    assert_eq!(items.capacity(), 32);
}

#[test]
fn try_operations_report_allocation_failure() {
    let mut items = simple_vec![1_u64, 2, 3];

    let error = items.try_reserve(usize::MAX).unwrap_err();

    assert!(matches!(error, Error::AllocationFailure { .. }));
    assert_eq!(items, [1, 2, 3]);
    assert_eq!(items.capacity(), 3);

    // The sequence is still fully usable afterwards.
    items.try_push_back(4).unwrap();
    assert_eq!(items, [1, 2, 3, 4]);
}

#[test]
fn owned_iteration() {
    let items = simple_vec!["a".to_string(), "b".to_string()];

    let joined: String = items.into_iter().collect();

    assert_eq!(joined, "ab");
}

#[test]
fn moves_between_threads() {
    let items = simple_vec![1, 2, 3];

    let sum = std::thread::spawn(move || items.iter().sum::<i32>())
        .join()
        .unwrap();

    assert_eq!(sum, 6);
}
