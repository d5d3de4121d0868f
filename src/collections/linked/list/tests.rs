#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::util::alloc::LiveCounted;
use crate::util::error::EmptyAccess;
use crate::util::panic::assert_panics;

/// Walks the ring both ways and checks the back-link identities the sentinel
/// anchors.
fn assert_ring_intact<T>(list: &LinkedList<T>) {
    let mut node = SENTINEL;
    for _ in 0..=list.len() {
        let next = list.nodes[node].next;
        assert_eq!(
            list.nodes[next].prev, node,
            "next(n) and prev(next(n)) should agree for every ring member."
        );
        node = next;
    }
    assert_eq!(
        node, SENTINEL,
        "Following next len + 1 times should return to the sentinel."
    );
}

#[test]
fn test_new_is_self_linked() {
    let list: LinkedList<u8> = LinkedList::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.nodes[SENTINEL].next, SENTINEL);
    assert_eq!(list.nodes[SENTINEL].prev, SENTINEL);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_push_both_ends() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_front(0);
    list.push_back(2);

    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&2));
    assert_ring_intact(&list);
}

#[test]
fn test_pop_both_ends() {
    let mut list: LinkedList<_> = (0..5).collect();

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(4));
    assert_eq!(list.len(), 3);
    assert_ring_intact(&list);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None, "Popping an empty list should be checked.");
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.len(), 0);
    assert_ring_intact(&list);
}

#[test]
fn test_single_element_needs_no_special_case() {
    let mut list = LinkedList::new();
    list.push_back(7);
    assert_eq!(list.front(), list.back());
    assert_ring_intact(&list);

    assert_eq!(list.pop_back(), Some(7));
    assert!(list.is_empty());
    assert_ring_intact(&list);
}

#[test]
fn test_arena_slot_reuse() {
    let mut list: LinkedList<_> = (0..4).collect();
    let arena_len = list.nodes.len();

    list.pop_front();
    list.pop_back();
    list.push_back(10);
    list.push_front(20);

    assert_eq!(
        list.nodes.len(),
        arena_len,
        "Unlinked arena slots should be reused before the arena grows."
    );
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [20, 1, 2, 10]);
    assert_ring_intact(&list);
}

#[test]
fn test_get() {
    let list: LinkedList<_> = (0..10).collect();

    for i in 0..10 {
        assert_eq!(*list.get(i), i, "Seeking from either end should agree.");
    }

    assert_eq!(
        list.try_get(10).expect_err("index is out of bounds").to_string(),
        "Index 10 out of bounds for collection with 10 elements!"
    );
    assert!(list.try_get(10).expect_err("index is out of bounds").is_index_out_of_bounds());

    assert_panics!(
        {
            let list: LinkedList<_> = (0..3).collect();
            *list.get(3)
        },
        "Infallible access past the end should panic."
    );
}

#[test]
fn test_iter_bidirectional() {
    let list: LinkedList<_> = (0..4).collect();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);
    assert_eq!(list.iter().len(), 4);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&2));
    assert_eq!(iter.next(), None, "Meeting in the middle should exhaust the iterator.");
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter() {
    let list: LinkedList<_> = (0..4).collect();
    let mut iter = list.into_iter();

    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn test_contains_and_eq() {
    let list: LinkedList<_> = (0..4).collect();
    assert!(list.contains(&2));
    assert!(!list.contains(&4));

    let clone = list.clone();
    assert_eq!(clone, list);
    assert_ne!(clone, (0..3).collect());
}

#[test]
fn test_sentinel_payload_stays_empty() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.pop_front();
    list.push_front(2);

    assert_eq!(list.nodes[SENTINEL].payload.value(), Err(EmptyAccess));
}

#[test]
fn test_live_count_returns_to_zero() {
    let live = Rc::new(Cell::new(0_isize));

    {
        let mut list = LinkedList::new();
        for _ in 0..10 {
            list.push_back(LiveCounted::new(&live));
            list.push_front(LiveCounted::new(&live));
        }
        assert_eq!(live.get(), 20);

        list.pop_front();
        list.pop_back();
        let clone = list.clone();
        assert_eq!(live.get(), 36);

        drop(clone.into_iter());
        assert!(live.get() > 0);
    }

    assert_eq!(
        live.get(),
        0,
        "Every node payload should be dropped exactly once."
    );
}
