use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

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
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, Default)]
struct Counters {
    created: Arc<AtomicUsize>,
    destroyed: Arc<AtomicUsize>,
}

impl Counters {
    fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
struct Pill {
    id: usize,
    size: Size,
    data: Option<u32>,
    position: Position,
    active: bool,
    animated: Option<usize>,
    destroyed: Arc<AtomicUsize>,
}

impl PillView for Pill {
    fn compute_size(&self) -> Size {
        self.size
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn animate(&mut self, stagger_index: usize) {
        self.animated = Some(stagger_index);
    }

    fn destroy(&mut self) {
        self.destroyed.fetch_add(1, Ordering::Relaxed);
    }
}

impl BindData<u32> for Pill {
    fn init_with_data(&mut self, data: &u32) {
        self.data = Some(*data);
    }
}

fn pill_type(name: &str, size: Size, counters: &Counters) -> ItemType<Pill> {
    let counters = counters.clone();
    ItemType::new(name, move || Pill {
        id: counters.created.fetch_add(1, Ordering::Relaxed),
        size,
        data: None,
        position: Position::default(),
        active: false,
        animated: None,
        destroyed: Arc::clone(&counters.destroyed),
    })
}

#[derive(Debug, Default)]
struct Recorder {
    shown_from: Vec<usize>,
    scroll_moves: usize,
    created: Vec<usize>,
    finished: Vec<(usize, Option<u32>)>,
    canceled: usize,
}

impl ListHooks<Pill> for Recorder {
    fn on_show_pills_from(&mut self, first_visible: usize) {
        self.shown_from.push(first_visible);
    }

    fn on_scroll_moved(&mut self) {
        self.scroll_moves += 1;
    }

    fn on_view_created(&mut self, type_index: usize, _view: &mut Pill) {
        self.created.push(type_index);
    }

    fn on_focus_finished(&mut self, index: usize, view: Option<&mut Pill>) {
        self.finished.push((index, view.and_then(|v| v.data)));
    }

    fn on_focus_canceled(&mut self) {
        self.canceled += 1;
    }
}

type TestList = ListController<u32, Pill, Recorder>;

fn row(height: f32) -> Size {
    Size::new(300.0, height)
}

fn uniform_items(count: usize) -> Vec<Item<u32>> {
    (0..count).map(|i| Item::new(0, i as u32)).collect()
}

fn uniform_list(count: usize, height: f32, viewport: f32) -> (TestList, Counters, ItemType<Pill>) {
    let counters = Counters::default();
    let ty = pill_type("row", row(height), &counters);
    let mut list = ListController::with_hooks(
        ListOptions::default(),
        row(viewport),
        Recorder::default(),
    );
    list.setup(vec![ty.clone()], uniform_items(count)).unwrap();
    (list, counters, ty)
}

fn assert_invariants(list: &TestList) {
    let window = list.visible_window();
    for i in 0..list.item_count() {
        let inside = window.is_some_and(|w| w.contains(i));
        let view = list.view(i);
        assert_eq!(view.is_some(), inside, "slot {i} vs window {window:?}");
        if let Some(view) = view {
            assert!(view.active, "slot {i} holds an inactive view");
            assert_eq!(view.data, Some(list.items()[i].data), "slot {i} bound to wrong data");
        }
    }
    for t in 0..8 {
        let Some(stats) = list.pool_stats(t) else {
            break;
        };
        assert_eq!(list.active_count_of(t) + stats.idle, stats.created, "type {t}");
    }
}

fn expected_window(
    table: &PositionTable,
    offset: f32,
    extent: f32,
    look_ahead: f32,
) -> Option<VisibleWindow> {
    let n = table.len();
    if n == 0 {
        return None;
    }
    let mut first = 0;
    while first + 1 < n && table.trailing(first) <= offset {
        first += 1;
    }
    let mut last = first;
    for i in first + 1..n {
        if table.leading(i) - offset < extent + look_ahead * table.size(i) {
            last = i;
        } else {
            break;
        }
    }
    Some(VisibleWindow { first, last })
}

#[test]
fn layout_centers_items_and_adds_padding() {
    let sizes = [row(10.0), row(20.0), row(30.0)];
    let items: Vec<Item<()>> = (0..3).map(|t| Item::new(t, ())).collect();
    let table = build_layout(&items, &sizes, Padding::new(5.0, 7.0), 2.0, Axis::Vertical).unwrap();

    // running: 5 -> 17 -> 39 -> 71, then +7 trailing padding
    assert_eq!(table.centers(), &[10.0, 27.0, 54.0]);
    assert_eq!(table.leading(1), 17.0);
    assert_eq!(table.trailing(1), 37.0);
    assert_eq!(table.content_extent(), 78.0);
    assert_eq!(table.position(2), Position { x: 0.0, y: 54.0 });
}

#[test]
fn layout_of_zero_items_is_just_padding() {
    let items: Vec<Item<()>> = Vec::new();
    let table =
        build_layout(&items, &[row(10.0)], Padding::new(4.0, 6.0), 3.0, Axis::Vertical).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.content_extent(), 10.0);
    assert_eq!(table.index_at_offset(0.0), None);
    assert_eq!(table.first_visible_from(3, 0.0), None);
}

#[test]
fn layout_rejects_unknown_type_index() {
    let items = [Item::new(0, ()), Item::new(2, ())];
    let err = build_layout(&items, &[row(10.0)], Padding::default(), 0.0, Axis::Vertical)
        .unwrap_err();
    assert_eq!(
        err,
        SetupError::TypeIndexOutOfRange {
            item: 1,
            type_index: 2,
            type_count: 1,
        }
    );
}

#[test]
fn horizontal_layout_uses_width_and_zeroes_the_cross_axis() {
    let items = [Item::new(0, ()), Item::new(0, ())];
    let table = build_layout(
        &items,
        &[Size::new(40.0, 999.0)],
        Padding::default(),
        0.0,
        Axis::Horizontal,
    )
    .unwrap();
    assert_eq!(table.content_extent(), 80.0);
    assert_eq!(table.position(1), Position { x: 60.0, y: 0.0 });
}

#[test]
fn layout_is_monotonic_for_random_sizes() {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let type_sizes: Vec<Size> = (0..4)
            .map(|_| row(rng.gen_range_usize(0, 120) as f32))
            .collect();
        let count = rng.gen_range_usize(0, 200);
        let items: Vec<Item<()>> = (0..count)
            .map(|_| Item::new(rng.gen_range_usize(0, 4), ()))
            .collect();
        let spacing = rng.gen_range_usize(0, 10) as f32;
        let padding = Padding::new(
            rng.gen_range_usize(0, 30) as f32,
            rng.gen_range_usize(0, 30) as f32,
        );
        let table = build_layout(&items, &type_sizes, padding, spacing, Axis::Vertical).unwrap();

        for w in table.centers().windows(2) {
            assert!(w[0] <= w[1]);
        }
        let sum: f32 = items.iter().map(|it| type_sizes[it.type_index].height).sum();
        let min_extent = sum + spacing * count as f32 + padding.leading + padding.trailing;
        assert!(table.content_extent() >= min_extent - 0.01);
    }
}

#[test]
fn index_at_offset_matches_first_visible_walk() {
    let sizes = [row(10.0), row(25.0)];
    let items: Vec<Item<()>> = (0..40).map(|i| Item::new(i % 2, ())).collect();
    let table = build_layout(&items, &sizes, Padding::new(3.0, 3.0), 2.0, Axis::Vertical).unwrap();
    for step in 0..800 {
        let offset = step as f32 - 10.0;
        let searched = table.index_at_offset(offset);
        for candidate in [0, 7, 39, 100] {
            assert_eq!(table.first_visible_from(candidate, offset), searched);
        }
    }
}

#[test]
fn pool_reuses_released_views_and_conserves_instances() {
    let counters = Counters::default();
    let mut pool = ViewPool::new();
    let mut created = Vec::new();
    pool.configure(vec![pill_type("row", row(20.0), &counters)], |t, _| {
        created.push(t)
    })
    .unwrap();
    assert_eq!(created, [0]);
    assert_eq!(pool.type_size(0), Some(row(20.0)));
    assert_eq!(pool.stats(0), Some(PoolStats { created: 1, idle: 1 }));

    let a = pool.acquire(0);
    let b = pool.acquire(0);
    assert_eq!(pool.stats(0), Some(PoolStats { created: 2, idle: 0 }));
    assert_eq!(pool.stats(0).unwrap().active(), 2);

    let a_id = a.id;
    pool.release(0, a);
    let again = pool.acquire(0);
    assert_eq!(again.id, a_id);
    assert!(!again.active);

    pool.release(0, again);
    pool.release(0, b);
    assert_eq!(pool.stats(0), Some(PoolStats { created: 2, idle: 2 }));

    pool.destroy_all();
    assert_eq!(counters.destroyed(), 2);
    assert_eq!(pool.type_count(), 0);
}

#[test]
fn basic_reveal_activates_visible_items_plus_one_look_ahead() {
    let (list, counters, _) = uniform_list(100, 50.0, 220.0);

    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 5 }));
    assert!(list.view(5).is_some());
    assert!((6..100).all(|i| list.view(i).is_none()));
    // The size probe is parked in the pool and reused.
    assert_eq!(counters.created(), 6);
    assert_eq!(list.pool_stats(0), Some(PoolStats { created: 6, idle: 0 }));
    assert_eq!(list.hooks().created.len(), 6);
    assert_eq!(list.hooks().shown_from, [0]);
    assert_invariants(&list);
}

#[test]
fn zero_look_ahead_keeps_strictly_visible_items() {
    let counters = Counters::default();
    let mut list = ListController::with_hooks(
        ListOptions::default().with_look_ahead(0.0),
        row(220.0),
        Recorder::default(),
    );
    list.setup(vec![pill_type("row", row(50.0), &counters)], uniform_items(100))
        .unwrap();
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 4 }));
}

#[test]
fn scrolling_by_one_item_recycles_the_leaving_view() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);
    let leaving = list.view(0).unwrap().id;

    list.on_scroll_offset_changed(50.0);

    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 1, last: 6 }));
    assert!(list.view(0).is_none());
    let entering = list.view(6).unwrap();
    assert_eq!(entering.id, leaving);
    assert_eq!(entering.data, Some(6));
    assert_eq!(counters.created(), 6);
    assert_eq!(list.hooks().shown_from, [0, 1]);
    assert_eq!(list.hooks().scroll_moves, 1);
    assert_invariants(&list);
}

#[test]
fn active_views_are_positioned_in_viewport_coordinates() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    assert_eq!(list.view(1).unwrap().position, Position { x: 0.0, y: 75.0 });

    list.on_scroll_offset_changed(50.0);
    assert_eq!(list.view(1).unwrap().position, Position { x: 0.0, y: 25.0 });
    assert_eq!(list.view(6).unwrap().position, Position { x: 0.0, y: 275.0 });
}

#[test]
fn reconciling_twice_at_the_same_offset_changes_nothing() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);
    list.on_scroll_offset_changed(130.0);
    let ids: Vec<(usize, usize)> = (0..100)
        .filter_map(|i| list.view(i).map(|v| (i, v.id)))
        .collect();

    list.on_scroll_offset_changed(130.0);
    list.scroll_to_offset(130.0);

    let again: Vec<(usize, usize)> = (0..100)
        .filter_map(|i| list.view(i).map(|v| (i, v.id)))
        .collect();
    assert_eq!(ids, again);
    assert_eq!(counters.created(), 6);
    assert_invariants(&list);
}

#[test]
fn large_jumps_reconcile_without_growing_the_pool() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);

    list.on_scroll_offset_changed(4000.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 80, last: 85 }));
    assert_invariants(&list);

    list.on_scroll_offset_changed(0.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 5 }));
    assert_invariants(&list);
    assert_eq!(counters.created(), 6);
}

#[test]
fn random_scrolling_keeps_slots_equal_to_the_window() {
    let mut rng = Lcg::new(0xC0FFEE);
    let counters = Counters::default();
    let types = vec![
        pill_type("small", row(20.0), &counters),
        pill_type("medium", row(35.0), &counters),
        pill_type("large", row(60.0), &counters),
    ];
    let items: Vec<Item<u32>> = (0..300)
        .map(|i| Item::new(rng.gen_range_usize(0, 3), i as u32))
        .collect();
    let options = ListOptions::default().with_padding(12.0, 8.0).with_spacing(3.0);
    let mut list = ListController::with_hooks(options, row(240.0), Recorder::default());
    list.setup(types, items).unwrap();

    let max = list.max_scroll_offset() as usize;
    let mut offset = 0usize;
    for _ in 0..500 {
        offset = if rng.gen_bool() {
            // Small drag.
            let step = rng.gen_range_usize(0, 60);
            if rng.gen_bool() {
                offset.saturating_sub(step)
            } else {
                (offset + step).min(max + 40)
            }
        } else {
            // Fling or jump, sometimes past the edges.
            rng.gen_range_usize(0, max + 40)
        };
        let offset_f = offset as f32 - 20.0;
        list.on_scroll_offset_changed(offset_f);

        let expected = expected_window(list.layout(), offset_f, 240.0, 1.0);
        assert_eq!(list.visible_window(), expected, "offset {offset_f}");
        assert_invariants(&list);
    }
    assert_eq!(list.hooks().created.len(), counters.created());
}

#[test]
fn focus_snap_scrolls_to_the_item_and_reports_its_view() {
    let (mut list, _, _) = uniform_list(20, 40.0, 200.0);

    let target = list.focus_on(15, false);

    assert_eq!(target, Some(600.0));
    assert_eq!(list.scroll_offset(), 600.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 15, last: 19 }));
    assert_eq!(list.hooks().finished, [(15, Some(15))]);
    assert!(!list.is_focusing());
    assert_invariants(&list);
}

#[test]
fn focus_target_is_always_clamped_into_the_content() {
    for align in [Align::Start, Align::Center, Align::End, Align::Fraction(0.3)] {
        let counters = Counters::default();
        let mut list = ListController::with_hooks(
            ListOptions::default()
                .with_focus_align(align)
                .with_padding(10.0, 10.0),
            row(200.0),
            Recorder::default(),
        );
        list.setup(vec![pill_type("row", row(40.0), &counters)], uniform_items(20))
            .unwrap();
        let max = list.max_scroll_offset();
        for index in 0..30 {
            list.focus_on(index, false);
            let offset = list.scroll_offset();
            assert!((0.0..=max).contains(&offset), "{align:?} {index} -> {offset}");
        }
        // Out-of-range indexes are clamped to the last item.
        assert_eq!(list.hooks().finished.last(), Some(&(19, Some(19))));
    }
}

#[test]
fn focus_align_center_centers_the_item() {
    let counters = Counters::default();
    let mut list = ListController::new(
        ListOptions::default().with_focus_align(Align::Center),
        row(200.0),
    );
    list.setup(vec![pill_type("row", row(40.0), &counters)], uniform_items(20))
        .unwrap();

    // Item 10 spans [400, 440); its center (420) lands at the viewport center (100).
    assert_eq!(list.focus_on(10, false), Some(320.0));
}

#[test]
fn focus_on_an_empty_list_is_a_no_op() {
    let counters = Counters::default();
    let mut list: TestList = ListController::with_hooks(
        ListOptions::default(),
        row(200.0),
        Recorder::default(),
    );
    list.setup(vec![pill_type("row", row(40.0), &counters)], Vec::new())
        .unwrap();

    assert_eq!(list.visible_window(), None);
    assert_eq!(list.focus_on(3, true), None);
    assert_eq!(list.tick(0.016), None);
    list.animate_visible_pills();
    assert!(list.hooks().finished.is_empty());
}

#[test]
fn animated_focus_approaches_monotonically_and_settles() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);

    assert_eq!(list.focus_on(40, true), Some(2000.0));
    assert!(list.is_focusing());
    assert_eq!(list.scroll_offset(), 0.0);

    let mut last = 0.0f32;
    let mut frames = 0;
    while list.is_focusing() {
        frames += 1;
        assert!(frames < 600, "focus never settled");
        let offset = list.tick(1.0 / 60.0).unwrap();
        assert!(offset >= last && offset <= 2000.0);
        last = offset;
        assert_invariants(&list);
    }

    assert_eq!(list.scroll_offset(), 2000.0);
    assert_eq!(list.hooks().finished, [(40, Some(40))]);
    assert_eq!(list.tick(1.0 / 60.0), None);
}

#[test]
fn dragging_cancels_a_running_focus() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    list.focus_on(40, true);
    list.tick(1.0 / 60.0);

    list.on_drag_started();

    assert!(!list.is_focusing());
    assert_eq!(list.hooks().canceled, 1);
    assert_eq!(list.tick(1.0 / 60.0), None);
    assert!(list.hooks().finished.is_empty());

    // Nothing left to cancel.
    list.on_drag_started();
    assert_eq!(list.hooks().canceled, 1);
}

#[test]
fn a_new_focus_replaces_the_running_one() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    list.focus_on(40, true);
    for _ in 0..3 {
        list.tick(1.0 / 60.0);
    }

    list.focus_on(2, true);
    for _ in 0..600 {
        if list.tick(1.0 / 60.0).is_none() {
            break;
        }
    }

    assert_eq!(list.scroll_offset(), 100.0);
    assert_eq!(list.hooks().finished, [(2, Some(2))]);
    assert_eq!(list.hooks().canceled, 0);
}

#[test]
fn animate_visible_pills_staggers_from_the_first_visible_item() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    list.on_scroll_offset_changed(50.0);

    list.animate_visible_pills();

    for i in 1..=6 {
        assert_eq!(list.view(i).unwrap().animated, Some(i - 1));
    }
}

#[test]
fn setup_rejects_bad_configuration_without_touching_state() {
    let (mut list, _, ty) = uniform_list(100, 50.0, 220.0);

    assert_eq!(
        list.setup(Vec::new(), uniform_items(3)),
        Err(SetupError::NoItemTypes)
    );
    assert_eq!(
        list.setup(vec![ty.clone()], vec![Item::new(0, 0), Item::new(3, 1)]),
        Err(SetupError::TypeIndexOutOfRange {
            item: 1,
            type_index: 3,
            type_count: 1,
        })
    );

    assert_eq!(list.item_count(), 100);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 5 }));
    assert_invariants(&list);
}

#[test]
fn setup_with_an_unusable_type_size_clears_the_list() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);
    let broken = Counters::default();

    let err = list
        .setup(
            vec![pill_type("broken", Size::new(f32::NAN, 10.0), &broken)],
            uniform_items(3),
        )
        .unwrap_err();

    assert!(matches!(err, SetupError::InvalidTypeSize { type_index: 0, .. }));
    assert_eq!(list.item_count(), 0);
    assert_eq!(list.visible_window(), None);
    assert_eq!(broken.destroyed(), broken.created());
    assert_eq!(counters.destroyed(), counters.created());
}

#[test]
fn setup_again_reclaims_views_and_keeps_matching_pools() {
    let (mut list, counters, ty) = uniform_list(100, 50.0, 220.0);
    list.on_scroll_offset_changed(50.0);

    let items: Vec<Item<u32>> = (0..40).map(|i| Item::new(0, 1000 + i)).collect();
    list.setup(vec![ty.clone()], items).unwrap();

    assert_eq!(list.scroll_offset(), 50.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 1, last: 6 }));
    assert_eq!(list.view(1).unwrap().data, Some(1001));
    assert_eq!(counters.created(), 6);
    assert_eq!(counters.destroyed(), 0);
    // The slot array never shrinks.
    assert_eq!(list.slot_capacity(), 100);
    assert_invariants(&list);
}

#[test]
fn setup_with_a_new_factory_destroys_the_old_pool() {
    let (mut list, old, _) = uniform_list(100, 50.0, 220.0);
    let new = Counters::default();

    list.setup(vec![pill_type("row", row(50.0), &new)], uniform_items(10))
        .unwrap();

    assert_eq!(old.destroyed(), old.created());
    assert_eq!(new.created(), 6);
    assert_invariants(&list);
}

#[test]
fn setup_clamps_the_offset_to_the_new_content() {
    let (mut list, _, ty) = uniform_list(100, 50.0, 220.0);
    list.on_scroll_offset_changed(4000.0);

    list.setup(vec![ty.clone()], uniform_items(10)).unwrap();

    // 10 * 50 - 220
    assert_eq!(list.scroll_offset(), 280.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 5, last: 9 }));
    assert_invariants(&list);
}

#[test]
fn clear_destroys_everything_and_setup_reuses_the_high_water_mark() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);
    let high_water = list.pool_stats(0).unwrap().created;

    list.clear();

    assert_eq!(counters.destroyed(), counters.created());
    assert_eq!(list.pool_stats(0), None);
    assert_eq!(list.visible_window(), None);
    assert_eq!(list.item_count(), 0);
    assert_eq!(list.scroll_offset(), 0.0);

    list.setup(vec![pill_type("row", row(50.0), &counters)], uniform_items(30))
        .unwrap();
    assert!(list.pool_stats(0).unwrap().created <= high_water);
    assert_invariants(&list);
}

#[test]
fn setup_and_clear_cancel_a_running_focus() {
    let (mut list, _, ty) = uniform_list(100, 50.0, 220.0);
    list.focus_on(50, true);
    list.setup(vec![ty.clone()], uniform_items(100)).unwrap();
    assert_eq!(list.hooks().canceled, 1);

    list.focus_on(50, true);
    list.clear();
    assert_eq!(list.hooks().canceled, 2);
    assert!(!list.is_focusing());
}

#[test]
fn deactivated_lists_ignore_scrolling_until_activated() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    list.deactivate();
    assert!(!list.is_active());

    list.on_scroll_offset_changed(500.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 5 }));
    assert_eq!(list.scroll_offset(), 500.0);

    list.activate();
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 10, last: 15 }));
    assert_invariants(&list);
}

#[test]
fn growing_the_viewport_reveals_more_items() {
    let (mut list, counters, _) = uniform_list(100, 50.0, 220.0);

    list.set_viewport_size(row(420.0));

    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 9 }));
    assert_eq!(counters.created(), 10);
    assert_invariants(&list);
}

#[test]
fn changing_spacing_relayouts_and_repositions_views() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);

    list.set_options(ListOptions::default().with_spacing(10.0))
        .unwrap();

    assert_eq!(list.content_extent(), 6000.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 4 }));
    assert_eq!(list.view(1).unwrap().position, Position { x: 0.0, y: 85.0 });
    assert_invariants(&list);
}

#[test]
fn shrinking_the_layout_pulls_the_offset_back_into_range() {
    let counters = Counters::default();
    let mut list: TestList = ListController::with_hooks(
        ListOptions::default().with_spacing(10.0),
        row(220.0),
        Recorder::default(),
    );
    list.setup(vec![pill_type("row", row(50.0), &counters)], uniform_items(100))
        .unwrap();
    assert_eq!(list.scroll_to_offset(1e9), 5780.0);

    list.set_options(ListOptions::default()).unwrap();

    assert_eq!(list.max_scroll_offset(), 4780.0);
    assert_eq!(list.scroll_offset(), 4780.0);
    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 95, last: 99 }));
    assert_invariants(&list);
}

#[test]
fn deactivated_lists_ignore_focus_requests() {
    let (mut list, _, _) = uniform_list(20, 40.0, 200.0);
    list.deactivate();

    assert_eq!(list.focus_on(15, false), None);
    assert_eq!(list.focus_on(15, true), None);
    assert!(!list.is_focusing());
    assert_eq!(list.scroll_offset(), 0.0);
    assert!(list.hooks().finished.is_empty());

    list.activate();
    assert_eq!(list.focus_on(15, false), Some(600.0));
    assert_eq!(list.hooks().finished, [(15, Some(15))]);
}

#[test]
fn visible_window_counts_both_ends() {
    let window = VisibleWindow { first: 2, last: 4 };
    assert_eq!(window.len(), 3);
    assert!(!window.is_empty());
    assert!(window.contains(2) && window.contains(4) && !window.contains(5));
}

#[test]
fn horizontal_lists_position_along_x() {
    let counters = Counters::default();
    let mut list = ListController::with_hooks(
        ListOptions::new(Axis::Horizontal),
        Size::new(220.0, 999.0),
        Recorder::default(),
    );
    list.setup(
        vec![pill_type("column", Size::new(50.0, 999.0), &counters)],
        uniform_items(100),
    )
    .unwrap();

    assert_eq!(list.visible_window(), Some(VisibleWindow { first: 0, last: 5 }));
    assert_eq!(list.view(1).unwrap().position, Position { x: 75.0, y: 0.0 });
}

#[test]
fn scroll_state_tracks_direction() {
    let (mut list, _, _) = uniform_list(100, 50.0, 220.0);
    assert_eq!(list.scroll_state().direction(), None);

    list.on_scroll_offset_changed(50.0);
    assert_eq!(list.scroll_state().direction(), Some(ScrollDirection::Forward));
    assert_eq!(list.scroll_state().delta(), 50.0);

    list.on_scroll_offset_changed(20.0);
    assert_eq!(list.scroll_state().direction(), Some(ScrollDirection::Backward));

    list.focus_on(30, true);
    let focus = list.scroll_state().focus.unwrap();
    assert_eq!(focus.index, 30);
    assert_eq!(focus.target_offset, 1500.0);
    assert!(focus.animating);
}

#[test]
fn smooth_damp_never_overshoots() {
    let damp = SmoothDamp::new(0.2, 10_000.0);
    let mut position = 0.0f32;
    let mut velocity = 0.0f32;
    for _ in 0..300 {
        let step = damp.step(position, 100.0, velocity, 1.0 / 60.0);
        assert!(step.position >= position && step.position <= 100.0);
        position = step.position;
        velocity = step.velocity;
    }
    assert!((position - 100.0).abs() < 0.01);

    let still = damp.step(42.0, 100.0, 3.0, 0.0);
    assert_eq!(still, DampStep { position: 42.0, velocity: 3.0 });
}

#[test]
fn smooth_damp_respects_max_speed() {
    let damp = SmoothDamp::new(0.1, 100.0);
    let step = damp.step(0.0, 10_000.0, 0.0, 0.1);
    // At most max_speed * smooth_time of the distance is considered per step.
    assert!(step.position <= 10.0);
}
