// Property tests for the chain, view and rotation laws

use proptest::prelude::*;
use ptrdrills::memory::heap::Heap;
use ptrdrills::{push_front, rotate3, traverse, BoundedView, Link};

proptest! {
    #[test]
    fn prop_push_front_prepends(prior in prop::collection::vec(any::<i32>(), 0..32), v in any::<i32>()) {
        let mut heap = Heap::default();
        let mut head: Link = None;
        for &x in prior.iter().rev() {
            push_front(&mut heap, &mut head, x).unwrap();
        }
        let before: Vec<i32> = traverse(&heap, head).collect();
        prop_assert_eq!(&before, &prior);

        push_front(&mut heap, &mut head, v).unwrap();
        let after: Vec<i32> = traverse(&heap, head).collect();
        let mut expected = vec![v];
        expected.extend(before);
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn prop_traversal_reverses_insertion(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut heap = Heap::default();
        let mut head: Link = None;
        for &v in &values {
            push_front(&mut heap, &mut head, v).unwrap();
        }
        let walked: Vec<i32> = traverse(&heap, head).collect();
        let reversed: Vec<i32> = values.iter().rev().copied().collect();
        prop_assert_eq!(walked, reversed);
    }

    #[test]
    fn prop_single_element_endpoint_sum_doubles(x in any::<i32>()) {
        let buffer = [x];
        let view = BoundedView::full(&buffer);
        prop_assert_eq!(view.endpoint_sum(), 2 * i64::from(x));
    }

    #[test]
    fn prop_range_sum_matches_slice(
        buffer in prop::collection::vec(any::<i32>(), 0..64),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (x, y) = (a.index(buffer.len() + 1), b.index(buffer.len() + 1));
        let (begin, end) = (x.min(y), x.max(y));
        let view = BoundedView::new(&buffer, begin, end).unwrap();

        let expected: i64 = buffer[begin..end].iter().map(|&v| i64::from(v)).sum();
        prop_assert_eq!(view.range_sum(), expected);
        if begin == end {
            prop_assert_eq!(view.endpoint_sum(), 0);
        }
    }

    #[test]
    fn prop_three_rotations_are_identity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (mut x, mut y, mut z) = (a, b, c);
        rotate3(&mut x, &mut y, &mut z);
        prop_assert_eq!((x, y, z), (b, c, a));
        rotate3(&mut x, &mut y, &mut z);
        rotate3(&mut x, &mut y, &mut z);
        prop_assert_eq!((x, y, z), (a, b, c));
    }
}
