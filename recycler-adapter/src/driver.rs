use recycler::{BindData, ListController, ListHooks, Size};

use crate::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral driver that wraps a [`recycler::ListController`] and translates raw host
/// input into list calls.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `on_drag_start` / `on_drag` / `on_drag_end` and `on_wheel` for manual input
/// - `tick(now_ms)` each frame/timer tick while a focus animation runs
///
/// For hosts with a real scroll container, apply the offsets returned by `on_drag`, `on_wheel`
/// and `tick` to it; reporting them back through `on_scroll` is then a no-op.
pub struct ScrollDriver<D, V, H = ()> {
    list: ListController<D, V, H>,
    last_tick_ms: Option<u64>,
    dragging: bool,
}

impl<D, V: BindData<D>, H: ListHooks<V>> ScrollDriver<D, V, H> {
    pub fn new(list: ListController<D, V, H>) -> Self {
        Self {
            list,
            last_tick_ms: None,
            dragging: false,
        }
    }

    pub fn list(&self) -> &ListController<D, V, H> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController<D, V, H> {
        &mut self.list
    }

    pub fn into_list(self) -> ListController<D, V, H> {
        self.list
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.list.is_focusing()
    }

    pub fn on_viewport_size(&mut self, size: Size) {
        self.list.set_viewport_size(size);
    }

    /// Call this when the UI reports a scroll offset change from its own container.
    ///
    /// This does not cancel a focus animation: the container echoing offsets applied by `tick`
    /// is expected. Manual input goes through `on_drag_*` / `on_wheel`.
    pub fn on_scroll(&mut self, offset: f32) {
        self.list.on_scroll_offset_changed(offset);
    }

    /// The user grabbed the list. Cancels any focus animation.
    pub fn on_drag_start(&mut self) {
        adebug!(offset = self.list.scroll_offset(), "drag started");
        self.dragging = true;
        self.last_tick_ms = None;
        self.list.on_drag_started();
    }

    /// Moves the content by `delta` pointer units along the axis (content follows the pointer,
    /// so a positive delta scrolls backward).
    ///
    /// Starts a drag if none is in progress. Returns the applied (clamped) offset.
    pub fn on_drag(&mut self, delta: f32) -> f32 {
        if !self.dragging {
            self.on_drag_start();
        }
        let target = self.list.scroll_offset() - delta;
        self.list.scroll_to_offset(target)
    }

    pub fn on_drag_end(&mut self) {
        adebug!(offset = self.list.scroll_offset(), "drag ended");
        self.dragging = false;
    }

    /// Scrolls forward by `delta` (wheel/trackpad units). Cancels any focus animation.
    ///
    /// Returns the applied (clamped) offset.
    pub fn on_wheel(&mut self, delta: f32) -> f32 {
        atrace!(delta, "wheel");
        self.list.on_drag_started();
        let target = self.list.scroll_offset() + delta;
        self.list.scroll_to_offset(target)
    }

    /// Scrolls so item `index` sits at the list's focus anchor. See
    /// [`recycler::ListController::focus_on`].
    pub fn focus_on(&mut self, index: usize, animate: bool) -> Option<f32> {
        self.last_tick_ms = None;
        self.list.focus_on(index, animate)
    }

    /// Advances the driver to `now_ms`.
    ///
    /// - If a focus animation is running, steps it by the time since the previous tick and
    ///   returns the offset the host should apply. The first tick of an animation has zero
    ///   elapsed time.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if !self.list.is_focusing() {
            self.last_tick_ms = None;
            return None;
        }
        let elapsed_ms = self
            .last_tick_ms
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_tick_ms = Some(now_ms);
        self.list.tick(elapsed_ms as f32 / 1000.0)
    }

    /// Captures an anchor for the first visible item. See [`capture_first_visible_anchor`].
    pub fn capture_first_visible_anchor<K>(
        &self,
        key_of: impl FnOnce(&D) -> K,
    ) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.list, key_of)
    }

    /// Applies a previously captured anchor. See [`apply_anchor`].
    pub fn apply_anchor<K>(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        self.last_tick_ms = None;
        apply_anchor(&mut self.list, anchor, key_to_index)
    }
}

impl<D, V, H> core::fmt::Debug for ScrollDriver<D, V, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("list", &self.list)
            .field("last_tick_ms", &self.last_tick_ms)
            .field("dragging", &self.dragging)
            .finish()
    }
}
