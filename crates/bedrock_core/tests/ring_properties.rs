//! Property tests for ring cursor arithmetic and the ring buffer.
//!
//! Run with: cargo test --package bedrock_core --test ring_properties

use std::collections::VecDeque;

use bedrock_core::{RingBuffer, RingIndex};
use proptest::prelude::*;

/// A power-of-two ring plus two cursors inside it.
fn ring_and_cursors() -> impl Strategy<Value = (RingIndex, usize, usize)> {
    (1u32..=12).prop_flat_map(|shift| {
        let capacity = 1usize << shift;
        (
            Just(RingIndex::new(capacity).unwrap()),
            0..capacity,
            0..capacity,
        )
    })
}

#[derive(Clone, Debug)]
enum Op {
    Push(u16),
    Pop,
    PopBack,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::PopBack),
    ]
}

proptest! {
    #[test]
    fn retreat_undoes_advance((ring, index, _) in ring_and_cursors()) {
        prop_assert_eq!(ring.retreat(ring.advance(index)), index);
        prop_assert_eq!(ring.advance(ring.retreat(index)), index);
        prop_assert!(ring.advance(index) < ring.capacity());
        prop_assert!(ring.retreat(index) < ring.capacity());
    }

    #[test]
    fn equal_cursors_are_empty((ring, head, _) in ring_and_cursors()) {
        prop_assert!(ring.is_empty(head, head));
        prop_assert!(!ring.is_full(head, head));
        prop_assert_eq!(ring.count(head, head), 0);
    }

    #[test]
    fn full_iff_count_is_usable((ring, head, tail) in ring_and_cursors()) {
        prop_assert_eq!(
            ring.is_full(head, tail),
            ring.count(head, tail) == ring.capacity() - 1
        );
        prop_assert_eq!(ring.count(head, tail) + ring.free(head, tail), ring.usable());
    }

    #[test]
    fn buffer_matches_deque(
        shift in 1u32..=5,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut ring: RingBuffer<u16> = RingBuffer::new(1 << shift).unwrap();
        let mut model: VecDeque<u16> = VecDeque::new();
        let usable = ring.capacity();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let pushed = ring.push(v);
                    if model.len() < usable {
                        prop_assert_eq!(pushed, Ok(()));
                        model.push_back(v);
                    } else {
                        prop_assert_eq!(pushed, Err(v));
                    }
                }
                Op::Pop => prop_assert_eq!(ring.pop(), model.pop_front()),
                Op::PopBack => prop_assert_eq!(ring.pop_back(), model.pop_back()),
            }
            prop_assert_eq!(ring.len(), model.len());
            prop_assert_eq!(ring.is_full(), model.len() == usable);
            prop_assert_eq!(ring.peek(), model.front());
        }

        let drained: Vec<u16> = ring.iter().copied().collect();
        let expected: Vec<u16> = model.into_iter().collect();
        prop_assert_eq!(drained, expected);
    }
}

#[test]
fn capacity_eight_walkthrough() {
    let ring = RingIndex::new(8).unwrap();
    let (mut head, tail) = (0, 0);

    assert!(ring.is_empty(head, tail));
    assert!(!ring.is_full(head, tail));
    assert_eq!(ring.count(head, tail), 0);

    while !ring.is_full(head, tail) {
        head = ring.advance(head);
    }

    assert_eq!(head, 7);
    assert_eq!(ring.advance(head), tail);
    assert_eq!(ring.count(head, tail), 7);
}
