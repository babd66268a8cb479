//! Property-based invariants for the window calculator.
//!
//! 1. Indices stay ordered and inside the list
//! 2. The offset always equals `first_index * item_height`
//! 3. Scrolling further never moves the window start backwards
//! 4. A unit buffer covers exactly the viewport
//! 5. The window reaches the end of the list once the viewport does

use proptest::prelude::*;
use scroll_window::{ScrollWindow, ScrollWindowOptions, ViewportGeometry, compute_window};

// ── Strategies ──────────────────────────────────────────────────────────

fn item_height_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (1u32..200).prop_map(f64::from),
        0.25f64..150.0,
    ]
}

fn buffer_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), Just(1.5), Just(2.0), -1.0f64..5.0]
}

proptest! {
    #[test]
    fn indices_are_ordered_and_bounded(
        scroll_top in -1_000.0f64..1_000_000.0,
        client_height in 0.0f64..4_000.0,
        item_count in 0usize..20_000,
        item_height in item_height_strategy(),
        buffer_size in buffer_strategy(),
    ) {
        let w = compute_window(scroll_top, client_height, item_count, item_height, buffer_size);
        prop_assert!(w.first_index <= w.last_index);
        prop_assert!(w.last_index <= item_count);
        prop_assert_eq!(w.element_offset_height, w.first_index as f64 * item_height);
        prop_assert!(w.element_offset_height >= 0.0);
    }

    #[test]
    fn empty_list_collapses_to_zero(
        scroll_top in 0.0f64..1_000_000.0,
        client_height in 0.0f64..4_000.0,
        item_height in item_height_strategy(),
        buffer_size in buffer_strategy(),
    ) {
        let w = compute_window(scroll_top, client_height, 0, item_height, buffer_size);
        prop_assert_eq!(w, ScrollWindow::EMPTY);
    }

    #[test]
    fn first_index_is_monotonic_in_scroll_top(
        a in 0.0f64..500_000.0,
        delta in 0.0f64..50_000.0,
        client_height in 1.0f64..4_000.0,
        item_count in 1usize..20_000,
        item_height in item_height_strategy(),
        buffer_size in buffer_strategy(),
    ) {
        let lo = compute_window(a, client_height, item_count, item_height, buffer_size);
        let hi = compute_window(a + delta, client_height, item_count, item_height, buffer_size);
        prop_assert!(hi.first_index >= lo.first_index);
    }

    #[test]
    fn unit_buffer_covers_exactly_the_viewport(
        scroll_top in 0.0f64..100_000.0,
        client_height in 1.0f64..2_000.0,
        item_height in (1u32..120).prop_map(f64::from),
    ) {
        let item_count = 1_000_000;
        let w = compute_window(scroll_top, client_height, item_count, item_height, 1.0);
        prop_assert_eq!(w.first_index, (scroll_top / item_height).floor() as usize);
        prop_assert_eq!(w.len(), (client_height / item_height).ceil() as usize);
    }

    #[test]
    fn window_reaches_the_end_of_the_list(
        item_count in 1usize..5_000,
        item_height in (1u32..120).prop_map(f64::from),
        client_height in (1u32..2_000).prop_map(f64::from),
    ) {
        let total = item_count as f64 * item_height;
        let scroll_top = (total - client_height).max(0.0);
        let w = compute_window(scroll_top, client_height, item_count, item_height, 1.0);
        prop_assert_eq!(w.last_index, item_count);
    }

    #[test]
    fn overscrolled_window_is_clipped_to_the_list(
        item_count in 1usize..5_000,
        item_height in item_height_strategy(),
        client_height in 1.0f64..2_000.0,
        buffer_size in buffer_strategy(),
    ) {
        let total = item_count as f64 * item_height;
        let w = compute_window(total, client_height, item_count, item_height, buffer_size);
        prop_assert_eq!(w.last_index, item_count);
    }

    #[test]
    fn options_and_free_function_agree(
        scroll_top in 0.0f64..100_000.0,
        client_height in 0.0f64..2_000.0,
        item_count in 0usize..5_000,
        item_height in item_height_strategy(),
        buffer_size in buffer_strategy(),
    ) {
        let options = ScrollWindowOptions::new(item_height)
            .expect("positive item height must be valid")
            .with_container_buffer_size(buffer_size);
        let geometry = ViewportGeometry::new(scroll_top, client_height);
        prop_assert_eq!(
            options.window_for(geometry, item_count),
            compute_window(scroll_top, client_height, item_count, item_height, buffer_size)
        );
    }
}
