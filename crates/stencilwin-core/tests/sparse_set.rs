//! SparseSet generational handle tests.
//!
//! Window handles are `IndexSlot`s, so these cover the guarantees the window
//! arena relies on: stale handles resolve to nothing and slots are reused
//! under a new generation.

use stencilwin_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    let idx2 = set.push(100);

    assert_eq!(*set.get(idx), 42);
    assert_eq!(*set.get(idx2), 100);
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    *set.get_mut(idx) = 100;

    assert_eq!(*set.get(idx), 100);
}

#[test]
fn test_try_get_invalid_returns_none() {
    let set = SparseSet::<i32>::new();
    assert_eq!(set.try_get(IndexSlot::new(0, 999)), None);
}

#[test]
fn test_try_get_after_remove_returns_none() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    assert_eq!(set.try_remove(idx), Some(42));
    assert_eq!(set.try_get(idx), None);
    assert!(!set.contains(idx));
}

#[test]
fn test_double_remove_is_clean() {
    let mut set = SparseSet::new();

    let idx = set.push(7);
    assert_eq!(set.try_remove(idx), Some(7));
    assert_eq!(set.try_remove(idx), None);
    assert_eq!(set.len(), 0);
}

#[test]
fn test_stale_handle_does_not_alias_reused_slot() {
    let mut set = SparseSet::new();

    let old = set.push("first");
    set.remove(old);
    let new = set.push("second");

    assert_eq!(old.index(), new.index());
    assert_eq!(set.try_get(old), None);
    assert_eq!(set.try_get_mut(old), None);
    assert_eq!(set.try_get(new), Some(&"second"));
}

#[test]
#[should_panic(expected = "invalid generation")]
fn test_use_after_free_panics() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    set.remove(idx);
    let _ = set.get(idx);
}

#[test]
fn test_len_tracks_push_and_remove() {
    let mut set = SparseSet::new();
    assert!(set.is_empty());

    let a = set.push(1);
    set.push(2);
    set.push(3);
    assert_eq!(set.len(), 3);

    set.remove(a);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_clear_invalidates_handles() {
    let mut set = SparseSet::new();
    let a = set.push(1);
    let b = set.push(2);

    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.try_get(a), None);
    assert_eq!(set.try_get(b), None);
}

#[test]
fn test_slots_yield_live_handles() {
    let mut set = SparseSet::new();
    let a = set.push('a');
    let b = set.push('b');
    let c = set.push('c');
    set.remove(b);

    let slots: Vec<_> = set.slots().collect();
    assert_eq!(slots, vec![(a, &'a'), (c, &'c')]);
}

#[test]
fn test_iter_mut() {
    let mut set = SparseSet::new();
    set.push(1);
    set.push(2);

    for val in set.iter_mut() {
        *val *= 10;
    }

    let values: Vec<_> = set.iter().copied().collect();
    assert_eq!(values, vec![10, 20]);
}
