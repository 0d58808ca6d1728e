//! Property-based tests for window narrowing: every in-bounds request
//! succeeds with the expected range, every out-of-bounds request fails
//! closed.

use byte_window::Window;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_tail_in_bounds(len in 0usize..1024, offset in 0usize..2048) {
        let w = Window::full(len);

        match w.tail(offset) {
            Some(t) => {
                prop_assert!(offset <= len);
                prop_assert_eq!(t.len(), len - offset);
                prop_assert_eq!(t.range(), offset..len);
            }
            None => prop_assert!(offset > len),
        }
    }

    #[test]
    fn prop_sub_in_bounds(
        len in 0usize..1024,
        offset in 0usize..2048,
        count in 0usize..2048,
    ) {
        let w = Window::full(len);

        match w.sub(offset, count) {
            Some(s) => {
                prop_assert!(offset + count <= len);
                prop_assert_eq!(s.len(), count);
                prop_assert_eq!(s.range(), offset..offset + count);
            }
            None => prop_assert!(offset + count > len),
        }
    }

    // Repeated narrowing must never escape the original bounds, no matter
    // the step sequence.
    #[test]
    fn prop_narrowing_chain_stays_inside(
        len in 0usize..1024,
        steps in prop::collection::vec(0usize..64, 0..32),
    ) {
        let mut w = Window::full(len);

        for step in steps {
            match w.tail(step) {
                Some(narrowed) => {
                    prop_assert!(narrowed.range().start >= w.range().start);
                    prop_assert!(narrowed.range().end <= len);
                    w = narrowed;
                }
                None => prop_assert!(step > w.len()),
            }
        }
    }

    // A sub-window of a sub-window indexes the original buffer correctly.
    #[test]
    fn prop_sub_composes(len in 1usize..512, a in 0usize..512, b in 0usize..512) {
        let w = Window::full(len);

        if let Some(outer) = w.tail(a % len) {
            if let Some(inner) = outer.sub(0, b % (outer.len() + 1)) {
                prop_assert_eq!(inner.range().start, a % len);
                prop_assert!(inner.range().end <= len);
            }
        }
    }
}

#[test]
fn empty_window_trivial_requests_succeed() {
    let w = Window::empty();
    assert!(w.sub(0, 0).is_some());
    assert!(w.tail(0).is_some());
    assert!(w.sub(0, 1).is_none());
}
