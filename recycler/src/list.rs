use alloc::vec::Vec;

use crate::focus::{FocusController, FocusProgress, SmoothDamp};
use crate::layout::{PositionTable, build_layout};
use crate::pool::{PoolStats, ViewPool};
use crate::window::{Viewport, WindowTracker};
use crate::{
    BindData, Item, ItemType, ListHooks, ListOptions, ScrollState, SetupError, Size, VisibleWindow,
};

/// A recycling list: the orchestrator over layout, pools, the visible window and focus.
///
/// This type holds views but never draws anything. The host drives it with:
/// - `set_viewport_size` when the viewport is resized
/// - `on_scroll_offset_changed` whenever its scroll container moves
/// - `on_drag_started` when the user grabs the list
/// - `tick(dt)` once per frame (only needed while a focus animation runs)
///
/// Views are shown, hidden, positioned and bound to data through [`crate::PillView`] /
/// [`BindData`]; owners can observe the list through [`ListHooks`].
pub struct ListController<D, V, H = ()> {
    options: ListOptions,
    viewport: Size,
    items: Vec<Item<D>>,
    table: PositionTable,
    pool: ViewPool<V>,
    tracker: WindowTracker<V>,
    focus: FocusController,
    offset: f32,
    previous_offset: f32,
    first_visible: usize,
    active: bool,
    hooks: H,
}

impl<D, V: BindData<D>> ListController<D, V> {
    /// Creates an empty, active list without hooks.
    pub fn new(options: ListOptions, viewport: Size) -> Self {
        Self::with_hooks(options, viewport, ())
    }
}

impl<D, V: BindData<D>, H: ListHooks<V>> ListController<D, V, H> {
    /// Creates an empty, active list that reports to `hooks`.
    pub fn with_hooks(options: ListOptions, viewport: Size, hooks: H) -> Self {
        vdebug!(axis = ?options.axis, "ListController::new");
        Self {
            focus: FocusController::new(
                SmoothDamp::new(options.focus_smooth_time, options.focus_max_speed),
                options.focus_settle_velocity,
            ),
            options,
            viewport,
            items: Vec::new(),
            table: PositionTable::default(),
            pool: ViewPool::new(),
            tracker: WindowTracker::new(),
            offset: 0.0,
            previous_offset: 0.0,
            first_visible: 0,
            active: true,
            hooks,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn items(&self) -> &[Item<D>] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn layout(&self) -> &PositionTable {
        &self.table
    }

    pub fn content_extent(&self) -> f32 {
        self.table.content_extent()
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Viewport size along the scroll axis.
    pub fn viewport_extent(&self) -> f32 {
        self.viewport.along(self.options.axis)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.table.max_scroll_offset(self.viewport_extent())
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        self.table.clamp_scroll_offset(offset, self.viewport_extent())
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            previous_offset: self.previous_offset,
            focus: self.focus.state(),
        }
    }

    /// The reconciled window of active slots (look-ahead included).
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        self.tracker.window()
    }

    pub fn first_visible(&self) -> Option<usize> {
        self.tracker.window().map(|w| w.first)
    }

    pub fn view(&self, index: usize) -> Option<&V> {
        self.tracker.view(index)
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut V> {
        self.tracker.view_mut(index)
    }

    /// Number of active views of `type_index`.
    pub fn active_count_of(&self, type_index: usize) -> usize {
        self.tracker.active_count_of(type_index)
    }

    pub fn slot_capacity(&self) -> usize {
        self.tracker.slot_capacity()
    }

    pub fn pool_stats(&self, type_index: usize) -> Option<PoolStats> {
        self.pool.stats(type_index)
    }

    pub fn type_size(&self, type_index: usize) -> Option<Size> {
        self.pool.type_size(type_index)
    }

    pub fn is_focusing(&self) -> bool {
        self.focus.is_animating()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// (Re)configures the whole list.
    ///
    /// Views still active from a previous `setup` are returned to their pools first. Item types
    /// whose factory is unchanged keep their pools, so re-running `setup` with the same types
    /// creates no views beyond what the new window needs.
    ///
    /// Fails without touching the current state when `item_types` is empty or an item references
    /// an unknown type. If a type reports an unusable size, the list ends up cleared.
    pub fn setup(
        &mut self,
        item_types: Vec<ItemType<V>>,
        items: Vec<Item<D>>,
    ) -> Result<(), SetupError> {
        if item_types.is_empty() {
            return Err(SetupError::NoItemTypes);
        }
        if let Some((item, bad)) = items
            .iter()
            .enumerate()
            .find(|(_, it)| it.type_index >= item_types.len())
        {
            return Err(SetupError::TypeIndexOutOfRange {
                item,
                type_index: bad.type_index,
                type_count: item_types.len(),
            });
        }

        vdebug!(
            types = item_types.len(),
            items = items.len(),
            "ListController::setup"
        );
        self.cancel_focus();
        self.tracker.reclaim_all(&mut self.pool);

        let hooks = &mut self.hooks;
        let configured = self
            .pool
            .configure(item_types, |type_index, view| {
                hooks.on_view_created(type_index, view)
            })
            .and_then(|()| {
                build_layout(
                    &items,
                    &self.pool.type_sizes(),
                    self.options.padding,
                    self.options.spacing,
                    self.options.axis,
                )
            });
        let table = match configured {
            Ok(table) => table,
            Err(err) => {
                self.clear();
                return Err(err);
            }
        };

        self.items = items;
        self.table = table;
        self.tracker.reserve_slots(self.items.len());
        self.offset = self.clamp_scroll_offset(self.offset);
        self.previous_offset = self.offset;
        self.first_visible = self.table.index_at_offset(self.offset).unwrap_or(0);
        if self.active {
            self.reconcile_from(self.first_visible);
        }
        Ok(())
    }

    /// Destroys every view (active and pooled) and drops the items and layout.
    ///
    /// Dropping the controller drops its views without calling [`crate::PillView::destroy`];
    /// call this first when views own host resources.
    pub fn clear(&mut self) {
        vdebug!(items = self.items.len(), "ListController::clear");
        self.cancel_focus();
        self.tracker.reclaim_all(&mut self.pool);
        self.pool.destroy_all();
        self.items.clear();
        self.table = PositionTable::default();
        self.offset = 0.0;
        self.previous_offset = 0.0;
        self.first_visible = 0;
    }

    /// Replaces the options. Layout-affecting changes re-derive positions, re-clamp the offset
    /// and reconcile.
    pub fn set_options(&mut self, options: ListOptions) -> Result<(), SetupError> {
        let relayout = self.options.layout_changed(&options);
        if relayout {
            self.table = build_layout(
                &self.items,
                &self.pool.type_sizes(),
                options.padding,
                options.spacing,
                options.axis,
            )?;
        }
        self.options = options;
        self.focus.set_damping(
            SmoothDamp::new(options.focus_smooth_time, options.focus_max_speed),
            options.focus_settle_velocity,
        );

        if relayout {
            vtrace!(axis = ?options.axis, "layout options changed");
            self.offset = self.clamp_scroll_offset(self.offset);
            self.retarget_focus();
            if self.active {
                let candidate = self.table.index_at_offset(self.offset).unwrap_or(0);
                self.reconcile_from(candidate);
            }
        }
        Ok(())
    }

    /// Call this when the host viewport is resized. The offset is re-clamped to the new extent.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        self.viewport = size;
        self.offset = self.clamp_scroll_offset(self.offset);
        self.retarget_focus();
        if self.active {
            self.reconcile_from(self.first_visible);
        }
    }

    /// Call this whenever the host scroll container reports a new offset.
    ///
    /// The offset is taken as-is (hosts with elastic edges may report values outside the
    /// content). Reporting the current offset again is a no-op.
    pub fn on_scroll_offset_changed(&mut self, offset: f32) {
        if offset == self.offset && self.tracker.window().is_some() {
            return;
        }
        self.apply_offset(offset);
    }

    /// Moves to `offset` (clamped into the content) and reconciles. Returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: f32) -> f32 {
        let offset = self.clamp_scroll_offset(offset);
        self.apply_offset(offset);
        offset
    }

    /// Call this when the user starts dragging the list: it cancels any focus animation.
    pub fn on_drag_started(&mut self) {
        self.cancel_focus();
    }

    /// Scrolls so item `index` sits at the configured focus anchor.
    ///
    /// `index` is clamped into `[0, item_count - 1]`. Without animation the list snaps, reconciles
    /// and reports `on_focus_finished` before returning. With animation, `tick` moves the list
    /// toward the target and reports completion when it settles; a new `focus_on` replaces the
    /// running one.
    ///
    /// Returns the clamped target offset, or `None` for an empty or deactivated list (a
    /// deactivated list ignores focus requests).
    pub fn focus_on(&mut self, index: usize, animate: bool) -> Option<f32> {
        if !self.active {
            vwarn!(index, "focus_on on a deactivated list");
            return None;
        }
        let count = self.items.len();
        if count == 0 {
            vwarn!(index, "focus_on on an empty list");
            return None;
        }
        if index >= count {
            vwarn!(index, count, "focus index out of range, clamping");
        }
        let index = index.min(count - 1);
        let target = FocusController::target_offset(
            &self.table,
            index,
            self.viewport_extent(),
            self.options.focus_align,
        )?;

        if animate {
            vdebug!(index, target, "focus animation started");
            self.focus.begin(index, target);
            return Some(target);
        }

        // A snap replaces any running animation without reporting it as canceled.
        self.focus.cancel();
        self.apply_offset(target);
        self.finish_focus(index);
        Some(target)
    }

    /// Advances a running focus animation by `dt` seconds.
    ///
    /// Returns the offset the host should apply to its scroll container, or `None` when no
    /// animation is running.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        match self.focus.step(self.offset, dt) {
            FocusProgress::Idle => None,
            FocusProgress::Moving { offset } => {
                if offset != self.offset {
                    self.apply_offset(offset);
                }
                Some(offset)
            }
            FocusProgress::Settled { index, offset } => {
                vdebug!(index, offset, "focus animation settled");
                self.apply_offset(offset);
                self.finish_focus(index);
                Some(offset)
            }
        }
    }

    /// Plays the entrance animation on every active view, in index order, staggered by the
    /// distance from the first visible item.
    pub fn animate_visible_pills(&mut self) {
        let Some(window) = self.tracker.window() else {
            return;
        };
        self.tracker
            .for_each_active_mut(|index, view| view.animate(index - window.first));
    }

    /// Resumes reacting to scroll signals and reconciles against the current offset.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        let candidate = self.table.index_at_offset(self.offset).unwrap_or(0);
        self.reconcile_from(candidate);
    }

    /// Stops reacting to scroll signals and frame ticks. Offsets reported while inactive are
    /// remembered and applied on `activate`. A running focus animation is canceled.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.cancel_focus();
    }

    fn apply_offset(&mut self, offset: f32) {
        self.previous_offset = self.offset;
        self.offset = offset;
        if !self.active {
            return;
        }

        let delta = (offset - self.previous_offset).abs();
        let candidate = if delta < self.options.jump_threshold * self.viewport_extent() {
            self.first_visible
        } else {
            vtrace!(delta, "scroll jump");
            self.table.index_at_offset(offset).unwrap_or(0)
        };
        self.reconcile_from(candidate);
        self.hooks.on_scroll_moved();
    }

    fn reconcile_from(&mut self, candidate: usize) {
        let viewport = Viewport {
            offset: self.offset,
            extent: self.viewport_extent(),
            look_ahead: self.options.look_ahead,
        };
        self.first_visible = self
            .tracker
            .reconcile(
                candidate,
                &self.items,
                &self.table,
                &mut self.pool,
                viewport,
                &mut self.hooks,
            )
            .unwrap_or(0);
    }

    fn finish_focus(&mut self, index: usize) {
        let view = self.tracker.view_mut(index);
        self.hooks.on_focus_finished(index, view);
    }

    /// Stops a running focus animation without completing it, reporting `on_focus_canceled`.
    /// Does nothing when no animation is running.
    pub fn cancel_focus(&mut self) {
        if self.focus.cancel() {
            vdebug!("focus animation canceled");
            self.hooks.on_focus_canceled();
        }
    }

    fn retarget_focus(&mut self) {
        let Some(state) = self.focus.state().filter(|s| s.animating) else {
            return;
        };
        if let Some(target) = FocusController::target_offset(
            &self.table,
            state.index,
            self.viewport_extent(),
            self.options.focus_align,
        ) {
            self.focus.begin(state.index, target);
        }
    }
}

impl<D, V, H> core::fmt::Debug for ListController<D, V, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("items", &self.items.len())
            .field("offset", &self.offset)
            .field("window", &self.tracker.window())
            .field("focus", &self.focus.state())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
