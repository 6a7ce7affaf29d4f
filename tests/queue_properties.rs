//! Property tests for the bounded collection utilities.

use attest::util::{BoundedQueue, HeadTailAccumulator, RotatingQueue};
use proptest::prelude::*;

proptest! {
    /// A bounded queue never holds more than its capacity, regardless of
    /// how many inserts are attempted.
    #[test]
    fn bounded_queue_never_exceeds_capacity(capacity in 0usize..64, inserts in 0usize..256) {
        let mut queue = BoundedQueue::new(capacity);
        for i in 0..inserts {
            queue.offer(i);
            prop_assert!(queue.len() <= capacity);
        }
        prop_assert_eq!(queue.len(), inserts.min(capacity));
    }

    /// Rejected offers leave the contents unchanged.
    #[test]
    fn bounded_queue_rejected_offer_changes_nothing(capacity in 1usize..32, extra in 1usize..32) {
        let mut queue = BoundedQueue::new(capacity);
        for i in 0..capacity {
            prop_assert!(queue.offer(i));
        }
        let before: Vec<usize> = queue.iter().copied().collect();
        for i in 0..extra {
            prop_assert!(!queue.offer(capacity + i));
            prop_assert!(queue.add(capacity + i).is_err());
        }
        let after: Vec<usize> = queue.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    /// A full bounded queue fails `add` with a message naming its capacity.
    #[test]
    fn bounded_queue_add_error_names_capacity(capacity in 0usize..16) {
        let mut queue = BoundedQueue::new(capacity);
        for i in 0..capacity {
            queue.add(i).expect("queue should accept elements below capacity");
        }
        let error = queue.add(capacity).expect_err("queue should be full");
        prop_assert_eq!(
            error.to_string(),
            format!("queue is full, capacity is {}", capacity)
        );
    }

    /// After n > capacity inserts, a rotating queue holds exactly the last
    /// `capacity` elements, in insertion order.
    #[test]
    fn rotating_queue_keeps_last_elements(capacity in 1usize..32, inserts in 0usize..256) {
        let mut queue = RotatingQueue::new(capacity);
        for i in 0..inserts {
            queue.push(i);
        }
        let held: Vec<usize> = queue.iter().copied().collect();
        let expected: Vec<usize> = (inserts.saturating_sub(capacity)..inserts).collect();
        prop_assert_eq!(held, expected);
        prop_assert!(queue.len() <= capacity);
    }

    /// Below its combined capacity the accumulator retains every element;
    /// above it, exactly the first `head` and last `tail`.
    #[test]
    fn head_tail_retains_ends(head in 0usize..16, tail in 0usize..16, inserts in 0usize..128) {
        let mut acc = HeadTailAccumulator::new(head, tail);
        for i in 0..inserts {
            acc.add(i);
        }
        let retained: Vec<usize> = acc.iter().copied().collect();
        if inserts <= head + tail {
            let all: Vec<usize> = (0..inserts).collect();
            prop_assert_eq!(retained, all);
            prop_assert!(acc.is_exhaustive());
        } else {
            let mut expected: Vec<usize> = (0..head).collect();
            expected.extend(inserts - tail..inserts);
            prop_assert_eq!(retained, expected);
            prop_assert!(!acc.is_exhaustive());
        }
    }

    /// Iteration is restartable and stable.
    #[test]
    fn head_tail_iteration_is_restartable(head in 0usize..8, tail in 0usize..8, inserts in 0usize..64) {
        let mut acc = HeadTailAccumulator::new(head, tail);
        for i in 0..inserts {
            acc.add(i);
        }
        let first: Vec<usize> = acc.iter().copied().collect();
        let second: Vec<usize> = acc.iter().copied().collect();
        prop_assert_eq!(first, second);
    }
}
