use alloc::vec::Vec;

use crate::{BindData, Item, ListHooks, PositionTable, Position, ViewPool, VisibleWindow};

/// The viewport as seen by one reconciliation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Current scroll offset along the axis.
    pub offset: f32,
    /// Viewport size along the axis.
    pub extent: f32,
    /// Look-ahead margin, as a multiple of the upcoming item's size.
    pub look_ahead: f32,
}

struct ActivePill<V> {
    type_index: usize,
    view: V,
}

/// Tracks which item indexes hold an active view and keeps that set equal to the visible
/// window.
///
/// Invariant: a slot is occupied iff its index lies inside [`Self::window`].
pub struct WindowTracker<V> {
    slots: Vec<Option<ActivePill<V>>>,
    window: Option<VisibleWindow>,
}

impl<V> Default for WindowTracker<V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            window: None,
        }
    }
}

impl<V> WindowTracker<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently reconciled window, if any slot is occupied.
    pub fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Length of the slot array. Grows with the largest list seen; never shrinks.
    pub fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Grows the slot array to hold at least `count` items.
    pub fn reserve_slots(&mut self, count: usize) {
        if self.slots.len() < count {
            self.slots.resize_with(count, || None);
        }
    }

    pub fn view(&self, index: usize) -> Option<&V> {
        self.slots.get(index)?.as_ref().map(|p| &p.view)
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots.get_mut(index)?.as_mut().map(|p| &mut p.view)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Option::is_some)
    }

    /// Number of occupied slots holding a view of `type_index`.
    pub fn active_count_of(&self, type_index: usize) -> usize {
        self.window.map_or(0, |w| {
            (w.first..=w.last)
                .filter(|&i| {
                    self.slots[i]
                        .as_ref()
                        .is_some_and(|p| p.type_index == type_index)
                })
                .count()
        })
    }

    /// Visits the active views in index order.
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(usize, &mut V)) {
        let Some(w) = self.window else {
            return;
        };
        for i in w.first..=w.last {
            if let Some(pill) = self.slots[i].as_mut() {
                f(i, &mut pill.view);
            }
        }
    }
}

impl<V: crate::PillView> WindowTracker<V> {
    /// Recomputes the visible window around `first_candidate` and syncs slots with it.
    ///
    /// Views outside the new window go back to `pool` first; views for newly visible items are
    /// then acquired, bound to their data and activated. Views that stay visible are only
    /// repositioned, so calling this twice with the same viewport changes nothing.
    ///
    /// Returns the new first visible index, or `None` for an empty list.
    pub fn reconcile<D, H>(
        &mut self,
        first_candidate: usize,
        items: &[Item<D>],
        table: &PositionTable,
        pool: &mut ViewPool<V>,
        viewport: Viewport,
        hooks: &mut H,
    ) -> Option<usize>
    where
        V: BindData<D>,
        H: ListHooks<V>,
    {
        debug_assert_eq!(items.len(), table.len(), "layout out of date");
        let Some(first) = table.first_visible_from(first_candidate, viewport.offset) else {
            self.reclaim_all(pool);
            return None;
        };
        let last = last_visible(table, first, viewport);
        let next = VisibleWindow { first, last };
        self.reserve_slots(items.len());

        if let Some(prev) = self.window {
            if prev != next {
                vtrace!(
                    prev_first = prev.first,
                    prev_last = prev.last,
                    first,
                    last,
                    "window moved"
                );
            }
            // Only the previous window can hold views, so sweeping it covers everything to
            // the left of `first` and to the right of `last`.
            for i in prev.first..=prev.last {
                if !next.contains(i) {
                    self.release_slot(i, pool);
                }
            }
        }

        let axis = table.axis();
        for i in first..=last {
            let local = Position::on_axis(axis, table.center(i) - viewport.offset);
            if let Some(pill) = self.slots[i].as_mut() {
                pill.view.set_position(local);
                continue;
            }

            let item = &items[i];
            let mut view = pool.acquire_with(item.type_index, |type_index, view| {
                hooks.on_view_created(type_index, view)
            });
            view.init_with_data(&item.data);
            view.set_position(local);
            view.set_active(true);
            self.slots[i] = Some(ActivePill {
                type_index: item.type_index,
                view,
            });
        }

        self.window = Some(next);
        hooks.on_show_pills_from(first);
        Some(first)
    }

    /// Returns every active view to `pool`, leaving all slots empty.
    pub fn reclaim_all(&mut self, pool: &mut ViewPool<V>) {
        let Some(w) = self.window.take() else {
            return;
        };
        for i in w.first..=w.last {
            self.release_slot(i, pool);
        }
    }

    fn release_slot(&mut self, index: usize, pool: &mut ViewPool<V>) {
        if let Some(pill) = self.slots[index].take() {
            pool.release(pill.type_index, pill.view);
        }
    }
}

/// Scans forward from `first` while the item's leading edge is within the viewport plus the
/// look-ahead margin. The first item is always included.
fn last_visible(table: &PositionTable, first: usize, viewport: Viewport) -> usize {
    let mut last = first;
    let mut i = first + 1;
    while i < table.len() {
        let screen_leading = table.leading(i) - viewport.offset;
        if screen_leading >= viewport.extent + viewport.look_ahead * table.size(i) {
            break;
        }
        last = i;
        i += 1;
    }
    last
}

impl<V> core::fmt::Debug for WindowTracker<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowTracker")
            .field("slots", &self.slots.len())
            .field("window", &self.window)
            .finish()
    }
}
