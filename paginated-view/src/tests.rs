use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn pages(count: usize) -> Vec<usize> {
    (0..count).collect()
}

fn view(count: usize, options: PaginatedViewOptions) -> PaginatedView<usize> {
    PaginatedView::new(pages(count), options, 320)
}

fn full_indexes(v: &mut PaginatedView<usize>) -> Vec<usize> {
    let mut out = Vec::new();
    v.render_pages(|slot, page| {
        if slot.is_full() {
            assert_eq!(page, Some(&slot.index));
            out.push(slot.index);
        } else {
            assert_eq!(page, None);
        }
    });
    out
}

fn settle(v: &mut PaginatedView<usize>, offset_x: f64) -> usize {
    v.on_scroll_begin();
    v.on_scroll_end(offset_x)
}

#[test]
fn defaults_match_documented_options() {
    let o = PaginatedViewOptions::default();
    assert_eq!(o.style, ContainerStyle::Fill);
    assert!(o.scroll_enabled);
    assert!(o.animated);
    assert!(!o.shows_horizontal_scroll_indicator);
    assert!(o.on_index_change.is_none());
    assert!(o.keep_already_rendered);
    assert_eq!(o.cached_page_count, 3);
    assert_eq!(o.container_width, None);
    assert!(!o.dynamic_width);
}

#[test]
fn initial_state_is_idle_on_first_page() {
    let v = view(5, PaginatedViewOptions::new());
    assert_eq!(v.selected_index(), 0);
    assert_eq!(v.phase(), ScrollPhase::Idle);
    assert!(!v.is_scrolling());
    assert_eq!(v.rendered_count(), 0);
}

#[test]
fn window_contains_is_inclusive_and_saturates() {
    let w = PageWindow::new(2, 1);
    assert!(!w.contains(0));
    assert!(w.contains(1));
    assert!(w.contains(2));
    assert!(w.contains(3));
    assert!(!w.contains(4));
    assert_eq!(w.range(5), 1..4);

    let w = PageWindow::new(0, 3);
    assert!(w.contains(0));
    assert!(w.contains(3));
    assert!(!w.contains(4));
    assert_eq!(w.range(2), 0..2);

    let w = PageWindow::new(usize::MAX, 2);
    assert!(w.contains(usize::MAX));
    assert_eq!(w.range(10), 10..10);
}

#[test]
fn radius_one_around_middle_page_renders_three() {
    let mut v = view(5, PaginatedViewOptions::new().with_cached_page_count(1));
    v.restore_state(PagerState {
        selected_index: 2,
        is_scrolling: false,
        viewport_width: 320,
    });

    assert!(!v.should_render_page(0));
    assert!(v.should_render_page(1));
    assert!(v.should_render_page(2));
    assert!(v.should_render_page(3));
    assert!(!v.should_render_page(4));

    let mut slots = Vec::new();
    v.collect_pages(&mut slots);
    let content: Vec<PageContent> = slots.iter().map(|s| s.content).collect();
    assert_eq!(
        content,
        [
            PageContent::Placeholder,
            PageContent::Full,
            PageContent::Full,
            PageContent::Full,
            PageContent::Placeholder,
        ]
    );
    assert_eq!(slots[3].start, 960);
    assert_eq!(slots[3].end(), 1280);
}

#[test]
fn zero_radius_renders_only_the_selected_page() {
    let mut v = view(4, PaginatedViewOptions::new().with_cached_page_count(0));
    assert_eq!(full_indexes(&mut v), [0]);
}

#[test]
fn kept_pages_stay_full_after_scrolling_away() {
    let mut v = view(10, PaginatedViewOptions::new().with_cached_page_count(1));
    assert_eq!(full_indexes(&mut v), [0, 1]);

    settle(&mut v, 5.0 * 320.0);
    assert_eq!(v.selected_index(), 5);
    assert_eq!(full_indexes(&mut v), [0, 1, 4, 5, 6]);
    assert_eq!(v.rendered_indexes(), [0, 1, 4, 5, 6]);

    settle(&mut v, 9.0 * 320.0);
    assert_eq!(full_indexes(&mut v), [0, 1, 4, 5, 6, 8, 9]);
}

#[test]
fn without_keep_already_rendered_pages_fall_back_to_placeholders() {
    let mut v = view(
        10,
        PaginatedViewOptions::new()
            .with_cached_page_count(1)
            .with_keep_already_rendered(false),
    );
    assert_eq!(full_indexes(&mut v), [0, 1]);

    settle(&mut v, 5.0 * 320.0);
    assert_eq!(full_indexes(&mut v), [4, 5, 6]);
    // The history is still recorded; it just isn't consulted.
    assert!(v.was_rendered(0));
    assert!(!v.should_render_page(0));
}

#[test]
fn page_slot_does_not_record_rendering() {
    let v = view(3, PaginatedViewOptions::new().with_cached_page_count(0));
    let slot = v.page_slot(0).unwrap();
    assert!(slot.is_full());
    assert!(!v.was_rendered(0));
    assert_eq!(v.page_slot(1).unwrap().content, PageContent::Placeholder);
    assert_eq!(v.page_slot(3), None);
}

#[test]
fn window_rule_holds_for_random_navigation() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..50 {
        let count = rng.gen_range_usize(1, 30);
        let radius = rng.gen_range_usize(1, 5);
        let keep = rng.gen_bool();
        let mut v = view(
            count,
            PaginatedViewOptions::new()
                .with_cached_page_count(radius)
                .with_keep_already_rendered(keep),
        );

        let mut history: Vec<bool> = alloc::vec![false; count];
        for _ in 0..20 {
            let target = rng.gen_range_usize(0, count);
            settle(&mut v, (target as f64) * 320.0);
            let s = v.selected_index();
            assert_eq!(s, target);

            let full = full_indexes(&mut v);
            for i in 0..count {
                let in_window = i + radius >= s && i <= s + radius;
                let expected = in_window || (keep && history[i]);
                assert_eq!(full.contains(&i), expected, "i={i} s={s} r={radius} keep={keep}");
            }
            for i in full {
                history[i] = true;
            }
            for (i, &seen) in history.iter().enumerate() {
                if seen {
                    assert!(v.was_rendered(i));
                }
            }
        }
    }
}

#[test]
fn goto_computes_offset_from_viewport_width() {
    let v = view(5, PaginatedViewOptions::new());
    assert_eq!(
        v.goto(3, Some(false)),
        Some(ScrollTo {
            x: 960,
            animated: false
        })
    );
    assert_eq!(v.selected_index(), 0);
    assert_eq!(v.phase(), ScrollPhase::Idle);
}

#[test]
fn goto_defaults_animate_to_the_animated_option() {
    let v = view(5, PaginatedViewOptions::new());
    assert_eq!(v.goto(1, None).map(|c| c.animated), Some(true));

    let v = view(5, PaginatedViewOptions::new().with_animated(false));
    assert_eq!(v.goto(1, None).map(|c| c.animated), Some(false));
    assert_eq!(v.goto(1, Some(true)).map(|c| c.animated), Some(true));
}

#[test]
fn goto_past_the_last_page_is_ignored() {
    let v = view(5, PaginatedViewOptions::new());
    assert!(v.goto(4, None).is_some());
    assert_eq!(v.goto(5, None), None);
    assert_eq!(v.goto(usize::MAX, None), None);

    let empty = view(0, PaginatedViewOptions::new());
    assert_eq!(empty.goto(0, None), None);
}

#[test]
fn goto_while_scrolling_is_ignored() {
    let mut v = view(5, PaginatedViewOptions::new());
    v.on_scroll_begin();
    assert_eq!(v.goto(2, Some(false)), None);
    assert_eq!(v.selected_index(), 0);
    assert!(v.is_scrolling());

    v.on_scroll_end(0.0);
    assert!(v.goto(2, Some(false)).is_some());
}

#[test]
fn settle_rounds_offset_to_nearest_page_and_reports_once() {
    let calls = Arc::new(Mutex::new(Vec::<usize>::new()));
    let sink = Arc::clone(&calls);
    let mut v = view(
        5,
        PaginatedViewOptions::new().with_on_index_change(Some(move |i: usize| {
            sink.lock().unwrap().push(i);
        })),
    );

    v.on_scroll_begin();
    assert!(v.is_scrolling());
    assert_eq!(v.on_scroll_end(645.0), 2);
    assert_eq!(v.selected_index(), 2);
    assert_eq!(v.phase(), ScrollPhase::Idle);
    assert_eq!(*calls.lock().unwrap(), [2]);
}

#[test]
fn settle_rounds_half_up_and_clamps() {
    let mut v = view(5, PaginatedViewOptions::new());
    assert_eq!(v.index_for_offset(159.9), 0);
    assert_eq!(v.index_for_offset(160.0), 1);
    assert_eq!(v.index_for_offset(480.0), 2);
    assert_eq!(v.index_for_offset(-40.0), 0);
    assert_eq!(v.index_for_offset(f64::NAN), 0);
    assert_eq!(v.index_for_offset(10_000.0), 4);

    assert_eq!(settle(&mut v, 1e12), 4);
}

#[test]
fn settle_reports_even_when_the_page_does_not_change() {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let mut v = view(
        3,
        PaginatedViewOptions::new().with_on_index_change(Some(move |_: usize| {
            c.fetch_add(1, Ordering::Relaxed);
        })),
    );
    settle(&mut v, 10.0);
    settle(&mut v, 0.0);
    assert_eq!(count.load(Ordering::Relaxed), 2);
    assert_eq!(v.selected_index(), 0);
}

#[test]
fn settle_without_callback_still_updates_selection() {
    let mut v = view(3, PaginatedViewOptions::new());
    assert_eq!(settle(&mut v, 640.0), 2);
    assert_eq!(v.selected_index(), 2);
}

#[test]
fn zero_viewport_width_settles_on_first_page() {
    let mut v = PaginatedView::new(pages(3), PaginatedViewOptions::new(), 0);
    assert_eq!(v.total_width(), 0);
    assert_eq!(settle(&mut v, 500.0), 0);
    assert_eq!(v.goto(2, None).map(|c| c.x), Some(0));
}

#[test]
fn viewport_width_resolution_order() {
    let v = view(2, PaginatedViewOptions::new());
    assert_eq!(v.viewport_width(), 320);

    let v = view(2, PaginatedViewOptions::new().with_container_width(Some(200)));
    assert_eq!(v.viewport_width(), 200);

    let v = view(2, PaginatedViewOptions::new().with_container_width(Some(0)));
    assert_eq!(v.viewport_width(), 320);

    let mut v = view(
        2,
        PaginatedViewOptions::new()
            .with_container_width(Some(200))
            .with_dynamic_width(true),
    );
    assert_eq!(v.viewport_width(), 200);
    v.on_layout(300);
    assert_eq!(v.viewport_width(), 300);
    assert_eq!(v.measured_width(), Some(300));
}

#[test]
fn layout_is_ignored_without_dynamic_width() {
    let mut v = view(2, PaginatedViewOptions::new());
    v.on_layout(100);
    assert_eq!(v.measured_width(), None);
    assert_eq!(v.viewport_width(), 320);
}

#[test]
fn total_width_tracks_viewport_changes() {
    let mut v = view(5, PaginatedViewOptions::new());
    assert_eq!(v.total_width(), 5 * 320);

    v.set_window_width(568);
    assert_eq!(v.viewport_width(), 568);
    assert_eq!(v.total_width(), 5 * 568);
    assert_eq!(v.goto(2, None).map(|c| c.x), Some(2 * 568));

    v.update_options(|o| o.dynamic_width = true);
    v.on_layout(400);
    assert_eq!(v.total_width(), 5 * 400);
    assert_eq!(v.surface_props().content_width, 5 * 400);
    assert_eq!(v.surface_props().page_width, 400);
}

#[test]
fn empty_sequence_renders_nothing() {
    let mut v: PaginatedView<usize> =
        PaginatedView::new(Children::None, PaginatedViewOptions::new(), 320);
    assert!(v.is_empty());
    assert_eq!(v.total_width(), 0);
    assert!(full_indexes(&mut v).is_empty());
    assert_eq!(settle(&mut v, 300.0), 0);
    assert_eq!(v.surface_props().content_width, 0);
}

#[test]
fn children_normalize_to_a_page_list() {
    assert_eq!(Children::<u8>::None.into_pages(), Vec::<u8>::new());
    assert_eq!(Children::one(7u8).into_pages(), [7]);
    assert_eq!(Children::from(Some(7u8)).len(), 1);
    assert!(Children::<u8>::from(None).is_empty());
    assert_eq!(Children::from(alloc::vec![1u8, 2, 3]).into_pages(), [1, 2, 3]);
    let collected: Children<u8> = (0..4).collect();
    assert_eq!(collected.len(), 4);

    let v = PaginatedView::new(Children::one("only"), PaginatedViewOptions::new(), 100);
    assert_eq!(v.item_count(), 1);
    assert_eq!(v.page(0), Some(&"only"));
}

#[test]
fn surface_props_gate_gestures_on_animated() {
    let v = view(3, PaginatedViewOptions::new());
    let p = v.surface_props();
    assert!(p.horizontal);
    assert!(p.paging_enabled);
    assert!(!p.bounces);
    assert!(p.scroll_enabled);
    assert!(!p.shows_horizontal_scroll_indicator);
    assert!(!p.wants_layout);

    let v = view(3, PaginatedViewOptions::new().with_animated(false));
    assert!(!v.surface_props().scroll_enabled);

    let v = view(3, PaginatedViewOptions::new().with_scroll_enabled(false));
    assert!(!v.surface_props().scroll_enabled);

    let v = view(
        3,
        PaginatedViewOptions::new()
            .with_shows_horizontal_scroll_indicator(true)
            .with_dynamic_width(true)
            .with_style(ContainerStyle::Fixed {
                width: 320,
                height: 480,
            }),
    );
    let p = v.surface_props();
    assert!(p.shows_horizontal_scroll_indicator);
    assert!(p.wants_layout);
    assert_eq!(
        p.style,
        ContainerStyle::Fixed {
            width: 320,
            height: 480
        }
    );
}

#[test]
fn set_pages_clamps_selection_and_keeps_history() {
    let mut v = view(10, PaginatedViewOptions::new().with_cached_page_count(1));
    full_indexes(&mut v);
    settle(&mut v, 8.0 * 320.0);
    full_indexes(&mut v);

    v.set_pages(pages(4));
    assert_eq!(v.item_count(), 4);
    assert_eq!(v.selected_index(), 3);
    assert!(v.was_rendered(9));
    assert_eq!(full_indexes(&mut v), [0, 1, 2, 3]);
}

#[test]
fn on_change_fires_for_render_relevant_state_only() {
    let seen = Arc::new(Mutex::new(Vec::<PagerState>::new()));
    let sink = Arc::clone(&seen);
    let mut v = view(
        5,
        PaginatedViewOptions::new().with_on_change(Some(move |s: PagerState| {
            sink.lock().unwrap().push(s);
        })),
    );

    full_indexes(&mut v);
    assert!(seen.lock().unwrap().is_empty());

    v.on_scroll_begin();
    v.on_scroll_begin();
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert!(seen.lock().unwrap()[0].is_scrolling);

    // Phase + index change coalesce into one notification.
    v.on_scroll_end(640.0);
    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[1],
            PagerState {
                selected_index: 2,
                is_scrolling: false,
                viewport_width: 320,
            }
        );
    }

    v.set_window_width(320);
    assert_eq!(seen.lock().unwrap().len(), 2);
    v.set_window_width(400);
    assert_eq!(seen.lock().unwrap().len(), 3);
    assert_eq!(seen.lock().unwrap()[2].viewport_width, 400);
}

#[test]
fn batch_update_coalesces_notifications() {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let mut v = view(
        5,
        PaginatedViewOptions::new().with_on_change(Some(move |_: PagerState| {
            c.fetch_add(1, Ordering::Relaxed);
        })),
    );
    v.batch_update(|v| {
        v.set_window_width(100);
        v.on_scroll_begin();
        v.on_scroll_end(200.0);
    });
    assert_eq!(count.load(Ordering::Relaxed), 1);
    assert_eq!(v.selected_index(), 2);
}

#[test]
fn state_roundtrip_clamps_selection() {
    let mut v = view(5, PaginatedViewOptions::new());
    settle(&mut v, 960.0);
    let snapshot = v.state();
    assert_eq!(
        snapshot,
        PagerState {
            selected_index: 3,
            is_scrolling: false,
            viewport_width: 320,
        }
    );

    let mut other = view(2, PaginatedViewOptions::new());
    other.restore_state(snapshot);
    assert_eq!(other.selected_index(), 1);

    other.restore_state(PagerState {
        selected_index: 0,
        is_scrolling: true,
        viewport_width: 0,
    });
    assert!(other.is_scrolling());
    assert_eq!(other.goto(1, None), None);
}
